use yew::prelude::*;

use crate::components::reveal::{stagger, Reveal};
use crate::components::ui::{badge, icon_list, rating_tone, section_header, Tone};
use crate::icons::Icon;

struct Competitor {
    name: &'static str,
    focus: &'static str,
    position: &'static str,
    strengths: [&'static str; 3],
}

const COMPETITORS: [Competitor; 4] = [
    Competitor {
        name: "Magnetic Staffing",
        focus: "Luxury-focused",
        position: "Luxury Market",
        strengths: ["Premium positioning", "High-end clientele", "Luxury experience"],
    },
    Competitor {
        name: "Flash Co.",
        focus: "Feature-rich",
        position: "Tech-Forward",
        strengths: ["Advanced features", "Modern technology", "Diverse offerings"],
    },
    Competitor {
        name: "Hoot Booth",
        focus: "Budget-friendly",
        position: "Cost Leadership",
        strengths: ["Affordable pricing", "Wide accessibility", "Volume focused"],
    },
    Competitor {
        name: "Community Productions",
        focus: "Drone specialist",
        position: "Drone Services",
        strengths: ["Aerial expertise", "Drone focus", "Technical skills"],
    },
];

struct Differentiator {
    icon: Icon,
    title: &'static str,
    description: &'static str,
    impact: &'static str,
}

const DIFFERENTIATORS: [Differentiator; 3] = [
    Differentiator {
        icon: Icon::Zap,
        title: "Integrated Services",
        description: "Only provider offering seamless photo booth + drone packages",
        impact: "High",
    },
    Differentiator {
        icon: Icon::Award,
        title: "Premium Branding",
        description: "Customizable branding options for corporate clients",
        impact: "High",
    },
    Differentiator {
        icon: Icon::Target,
        title: "Local Expertise",
        description: "Deep knowledge of Vancouver event landscape",
        impact: "Medium",
    },
];

pub fn render() -> Html {
    html! { <CompetitiveLandscape /> }
}

#[function_component(CompetitiveLandscape)]
pub fn competitive_landscape() -> Html {
    html! {
        <div class="section-inner">
            { section_header(
                "Competitive Landscape",
                "Understanding our position in the Vancouver event services market and leveraging our \
                 unique advantages.",
            ) }

            <div class="block">
                <h3 class="block-title">{"Key Competitors"}</h3>
                <div class="grid cols-2">
                    { for COMPETITORS.iter().enumerate().map(|(i, competitor)| html! {
                        <Reveal delay_ms={stagger(i)} class={classes!("card", "hoverable")}>
                            <div class="card-head spread">
                                <div>
                                    <h4>{ competitor.name }</h4>
                                    <p class="accent small">{ competitor.focus }</p>
                                </div>
                                { badge(competitor.position, Tone::Accent) }
                            </div>
                            { icon_list(Icon::Star, "icon-sm accent", &competitor.strengths) }
                        </Reveal>
                    }) }
                </div>
            </div>

            <div class="block">
                <h3 class="block-title">{"Our Competitive Advantages"}</h3>
                <div class="grid cols-3">
                    { for DIFFERENTIATORS.iter().enumerate().map(|(i, item)| html! {
                        <Reveal delay_ms={stagger(i)} class={classes!("card", "gradient", "centered")}>
                            { item.icon.html("icon-xl") }
                            <h4>{ item.title }</h4>
                            <p class="muted">{ item.description }</p>
                            { badge(format!("{} Impact", item.impact), rating_tone(item.impact)) }
                        </Reveal>
                    }) }
                </div>
            </div>

            <Reveal delay_ms={300} class={classes!("banner")}>
                { Icon::TrendingUp.html("icon-xxl") }
                <h3>{"Our Competitive Edge"}</h3>
                <p>
                    {"While competitors focus on single services, Pose Photobooths uniquely combines premium \
                      photo booth experiences with professional drone videography, creating comprehensive \
                      event media solutions that no other provider in Vancouver can match."}
                </p>
            </Reveal>
        </div>
    }
}
