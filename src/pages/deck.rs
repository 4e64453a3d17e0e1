use std::rc::Rc;

use yew::prelude::*;

use crate::components::navigation::Navigation;
use crate::components::section_renderer::SectionRenderer;
use crate::registry::SectionRegistry;
use crate::scroll_spy::{ScrollSpy, ScrollSpyAction};
use crate::viewport::DocumentScroll;

/// The whole deck on one page: fixed navigation on top, every section below
/// it in registry order.
#[function_component(Deck)]
pub fn deck() -> Html {
    let registry = use_memo(|_| SectionRegistry::pitch_deck().map(Rc::new), ());

    match &*registry {
        Ok(registry) => html! { <DeckView registry={Rc::clone(registry)} /> },
        Err(err) => {
            log::error!("deck not rendered: {}", err);
            html! {
                <div class="deck-error">
                    <h1>{"Pose Photobooths"}</h1>
                    <p>{"This presentation could not be loaded."}</p>
                </div>
            }
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct DeckViewProps {
    pub registry: Rc<SectionRegistry>,
}

#[function_component(DeckView)]
pub fn deck_view(props: &DeckViewProps) -> Html {
    let spy = {
        let registry = Rc::clone(&props.registry);
        use_reducer(move || ScrollSpy::new(registry))
    };

    let on_navigate = {
        let spy = spy.clone();
        Callback::from(move |id: &'static str| {
            if let Some(action) = spy.navigate(&DocumentScroll, id) {
                spy.dispatch(action);
            }
        })
    };

    let on_section_visible = {
        let spy = spy.dispatcher();
        Callback::from(move |id: String| spy.dispatch(ScrollSpyAction::SectionVisible(id)))
    };

    html! {
        <div class="deck">
            <Navigation spy={(*spy).clone()} on_navigate={on_navigate} />
            <SectionRenderer
                registry={Rc::clone(&props.registry)}
                on_section_visible={on_section_visible}
            />
        </div>
    }
}
