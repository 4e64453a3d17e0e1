use yew::prelude::*;

use crate::components::reveal::{stagger, Motion, Reveal};
use crate::components::ui::{badge, block_title, detail_row, rating_tone, section_header, step_number};
use crate::icons::Icon;

struct DroneStrategy {
    strategy: &'static str,
    description: &'static str,
    impact: &'static str,
}

const DRONE_GROWTH: [DroneStrategy; 3] = [
    DroneStrategy {
        strategy: "Humanize the Brand",
        description: "Build content around pilots Jordan and Kitz, showcasing their expertise and storytelling abilities",
        impact: "Increased trust and personal connection",
    },
    DroneStrategy {
        strategy: "Target High-Value Clients",
        description: "Create guides and case studies for wedding planners and corporate marketers",
        impact: "Higher-value bookings and referrals",
    },
    DroneStrategy {
        strategy: "B2B Partnerships",
        description: "Collaborate with luxury venues, event planners, and corporate agencies",
        impact: "Steady revenue stream and market expansion",
    },
];

struct Package {
    name: &'static str,
    description: &'static str,
    target: &'static str,
    pricing: &'static str,
    value: &'static str,
}

const PACKAGES: [Package; 2] = [
    Package {
        name: "The Ultimate Event Experience",
        description: "Bundle 360° photo booths with drone videography for premium events",
        target: "High-end weddings and corporate events",
        pricing: "Premium pricing strategy",
        value: "Complete event media solution",
    },
    Package {
        name: "Corporate Content Creator Package",
        description: "Branded photo booths with drone footage for social media campaigns",
        target: "Corporate marketing teams",
        pricing: "Project-based pricing",
        value: "Ready-to-use marketing content",
    },
];

/// (market, opportunity, potential)
const EXPANSION: [(&str, &str, &str); 4] = [
    ("Whistler", "Premium wedding market", "High"),
    ("Victoria", "Corporate events and festivals", "Medium"),
    ("Burnaby", "Growing residential events", "Medium"),
    ("Surrey", "Multicultural celebrations", "High"),
];

pub fn render() -> Html {
    html! { <GrowthOpportunities /> }
}

#[function_component(GrowthOpportunities)]
pub fn growth_opportunities() -> Html {
    html! {
        <div class="section-inner">
            { section_header(
                "Growth Opportunities",
                "Strategic initiatives to accelerate business growth and market expansion.",
            ) }

            <div class="block">
                { block_title(Some(Icon::TrendingUp), "Drone Services as Growth Engine") }
                <div class="stack">
                    { for DRONE_GROWTH.iter().enumerate().map(|(i, item)| html! {
                        <Reveal from={Motion::FROM_LEFT} delay_ms={stagger(i)} class={classes!("card", "row-card")}>
                            { step_number(i + 1) }
                            <div class="grow">
                                <h4>{ item.strategy }</h4>
                                <p class="muted">{ item.description }</p>
                                <div class="panel tone-positive">
                                    <span class="strong">{"Expected Impact: "}</span>
                                    <span>{ item.impact }</span>
                                </div>
                            </div>
                        </Reveal>
                    }) }
                </div>
            </div>

            <div class="block">
                { block_title(Some(Icon::Package), "Combined Service Packages") }
                <div class="grid cols-2 wide-gap">
                    { for PACKAGES.iter().enumerate().map(|(i, package)| html! {
                        <Reveal delay_ms={stagger(i)} class={classes!("card", "gradient")}>
                            <h4>{ package.name }</h4>
                            <p class="muted">{ package.description }</p>
                            { detail_row("Target:", package.target, "accent") }
                            { detail_row("Pricing:", package.pricing, "accent") }
                            <div class="panel">
                                <span class="highlight strong">{"Value Proposition: "}</span>
                                <span>{ package.value }</span>
                            </div>
                        </Reveal>
                    }) }
                </div>
            </div>

            <Reveal delay_ms={300} class={classes!("card", "block")}>
                { block_title(Some(Icon::Target), "Market Expansion Opportunities") }
                <div class="grid cols-2">
                    { for EXPANSION.iter().enumerate().map(|(i, (market, opportunity, potential))| html! {
                        <Reveal delay_ms={stagger(i)} class={classes!("panel")}>
                            <div class="card-head spread">
                                <h4>{ *market }</h4>
                                { badge(format!("{} Potential", potential), rating_tone(potential)) }
                            </div>
                            <p class="muted">{ *opportunity }</p>
                        </Reveal>
                    }) }
                </div>
            </Reveal>

            <Reveal delay_ms={400} class={classes!("banner", "gradient-positive")}>
                { Icon::Star.html("icon-xxl") }
                <h3>{"Strategic Growth Focus"}</h3>
                <p>
                    {"By leveraging our unique combination of photo booth and drone services, building personal \
                      connections through our expert pilots, and creating premium package offerings, we can \
                      capture higher-value clients and expand into new markets while maintaining our competitive edge."}
                </p>
            </Reveal>
        </div>
    }
}
