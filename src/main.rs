use yew::prelude::*;
use yew_router::prelude::*;
use log::info;

mod config;
mod charts;
mod icons;
mod registry;
mod scroll_spy;
mod styles;
mod viewport;
mod components {
    pub mod navigation;
    pub mod reveal;
    pub mod section_renderer;
    pub mod ui;
}
mod sections {
    pub mod hero;
    pub mod business;
    pub mod competitive;
    pub mod seo;
    pub mod keywords;
    pub mod content;
    pub mod platform;
    pub mod growth;
    pub mod metrics;
    pub mod action;
}
mod pages {
    pub mod deck;
}

use pages::deck::Deck;
use styles::DeckStyles;

#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Deck,
    #[not_found]
    #[at("/404")]
    NotFound,
}

fn switch(routes: Route) -> Html {
    match routes {
        Route::Deck => {
            info!("Rendering deck");
            html! { <Deck /> }
        },
        Route::NotFound => {
            // Single page: unknown paths still get the deck.
            info!("Unknown path, rendering deck");
            html! { <Deck /> }
        },
    }
}

#[function_component]
fn App() -> Html {
    html! {
        <BrowserRouter>
            <DeckStyles />
            <Switch<Route> render={switch} />
        </BrowserRouter>
    }
}

fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    if let Err(err) = console_log::init_with_level(config::log_level()) {
        web_sys::console::error_1(&format!("error initializing log: {}", err).into());
    }

    info!("Starting deck");
    yew::Renderer::<App>::new().render();
}
