use yew::prelude::*;

use crate::components::reveal::{Motion, Reveal};
use crate::icons::Icon;

struct Highlight {
    icon: Icon,
    title: &'static str,
    text: &'static str,
}

const HIGHLIGHTS: [Highlight; 3] = [
    Highlight {
        icon: Icon::Camera,
        title: "Premium Photo Booths",
        text: "360° booths, Podium Roamer+, and customizable branding",
    },
    Highlight {
        icon: Icon::Video,
        title: "Drone Videography",
        text: "Cinematic aerial footage by expert pilots Jordan & Kitz",
    },
    Highlight {
        icon: Icon::MapPin,
        title: "Vancouver Markets",
        text: "Serving Victoria, Whistler, Burnaby, and Surrey",
    },
];

pub fn render() -> Html {
    html! { <Hero /> }
}

#[function_component(Hero)]
pub fn hero() -> Html {
    html! {
        <div class="section-inner hero">
            <Reveal from={Motion::RISE_FAR} duration_ms={800} on_mount={true} class={classes!("hero-title")}>
                { Icon::Camera.html("icon-hero") }
                <h1>{"Pose Photobooths"}</h1>
                <p class="hero-subtitle">{"Comprehensive SEO & Growth Marketing Strategy"}</p>
            </Reveal>

            <Reveal duration_ms={800} delay_ms={200} on_mount={true} class={classes!("grid", "cols-3")}>
                { for HIGHLIGHTS.iter().map(|item| html! {
                    <div class="card centered">
                        { item.icon.html("icon-xl") }
                        <h3>{ item.title }</h3>
                        <p class="muted">{ item.text }</p>
                    </div>
                }) }
            </Reveal>

            <Reveal duration_ms={800} delay_ms={400} on_mount={true} class={classes!("banner", "gradient-strong")}>
                { Icon::TrendingUp.html("icon-xxl") }
                <h2>{"Strategic Growth Through SEO Excellence"}</h2>
                <p>
                    {"This comprehensive strategy combines technical SEO, local optimization, content marketing, \
                      and growth opportunities to position Pose Photobooths as the premier event media solution \
                      in Vancouver and surrounding markets."}
                </p>
            </Reveal>
        </div>
    }
}
