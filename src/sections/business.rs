use yew::prelude::*;

use crate::components::reveal::{stagger, Motion, Reveal};
use crate::components::ui::{dot_list, section_header};
use crate::icons::Icon;

struct Service {
    icon: Icon,
    title: &'static str,
    description: &'static str,
    features: [&'static str; 4],
}

const SERVICES: [Service; 3] = [
    Service {
        icon: Icon::Camera,
        title: "Photo Booth Rentals",
        description: "Modern 360° photo booths, Podium Roamer+ booths, and customizable branding options",
        features: ["360° Technology", "Custom Branding", "Premium Equipment", "Professional Setup"],
    },
    Service {
        icon: Icon::Video,
        title: "Drone Videography",
        description: "Cinematic aerial footage for weddings, corporate events, and festivals",
        features: [
            "Expert Pilots: Jordan & Kitz",
            "Cinematic Quality",
            "Event Specialization",
            "Professional Editing",
        ],
    },
    Service {
        icon: Icon::Package,
        title: "Combined Packages",
        description: "Seamlessly integrated photo booth and drone services for cohesive event media",
        features: [
            "All-in-One Solution",
            "Seamless Integration",
            "Cost Effective",
            "Single Point of Contact",
        ],
    },
];

/// (market, tier)
const MARKETS: [(&str, &str); 5] = [
    ("Vancouver", "Primary Market"),
    ("Victoria", "Key Market"),
    ("Whistler", "Premium Market"),
    ("Burnaby", "Growing Market"),
    ("Surrey", "Expanding Market"),
];

const CLIENTS: [(Icon, &str, &str); 4] = [
    (Icon::Users, "Weddings", "Premium wedding experiences"),
    (Icon::Briefcase, "Corporate Events", "Professional brand activations"),
    (Icon::Camera, "Festivals", "Large-scale event coverage"),
    (Icon::Package, "Private Parties", "Intimate celebrations"),
];

pub fn render() -> Html {
    html! { <BusinessOverview /> }
}

#[function_component(BusinessOverview)]
pub fn business_overview() -> Html {
    html! {
        <div class="section-inner">
            { section_header(
                "Business Overview",
                "Pose Photobooths specializes in delivering premium event experiences through \
                 cutting-edge photo booth rentals and drone videography services.",
            ) }

            <Reveal delay_ms={100} class={classes!("block")}>
                <h3 class="block-title">{"Core Services"}</h3>
                <div class="grid cols-3">
                    { for SERVICES.iter().enumerate().map(|(i, service)| html! {
                        <Reveal delay_ms={stagger(i)} class={classes!("card", "hoverable")}>
                            { service.icon.html("icon-xl") }
                            <h4>{ service.title }</h4>
                            <p class="muted">{ service.description }</p>
                            { dot_list(&service.features) }
                        </Reveal>
                    }) }
                </div>
            </Reveal>

            <div class="grid cols-2 wide-gap">
                <Reveal from={Motion::FROM_LEFT} delay_ms={200} class={classes!("card")}>
                    { Icon::MapPin.html("icon-xl") }
                    <h3>{"Key Markets"}</h3>
                    <div class="stack">
                        { for MARKETS.iter().map(|(name, tier)| html! {
                            <div class="row-tile spread">
                                <span class="strong">{ *name }</span>
                                <span class="accent small">{ *tier }</span>
                            </div>
                        }) }
                    </div>
                </Reveal>

                <Reveal from={Motion::FROM_RIGHT} delay_ms={300} class={classes!("card")}>
                    { Icon::Users.html("icon-xl") }
                    <h3>{"Client Portfolio"}</h3>
                    <div class="stack">
                        { for CLIENTS.iter().map(|(icon, name, description)| html! {
                            <div class="row-tile">
                                { icon.html("icon-lg accent") }
                                <div>
                                    <h4>{ *name }</h4>
                                    <p class="muted small">{ *description }</p>
                                </div>
                            </div>
                        }) }
                    </div>
                </Reveal>
            </div>
        </div>
    }
}
