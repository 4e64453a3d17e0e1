use std::rc::Rc;

use yew::prelude::*;

use crate::components::reveal::{RevealAction, RevealLog, Revealed};
use crate::config;
use crate::registry::SectionRegistry;
use crate::viewport::{entering_ids, ObserverOptions, ViewportError, ViewportObserver, VisibilitySample};

#[derive(Properties, PartialEq)]
pub struct SectionRendererProps {
    pub registry: Rc<SectionRegistry>,
    /// Fired whenever a section becomes the dominant one while scrolling.
    pub on_section_visible: Callback<String>,
}

/// Emits one visibility event per section entering the spy band, in delivery
/// order. The last one emitted ends up active.
pub fn report_visible(samples: &[VisibilitySample], on_section_visible: &Callback<String>) {
    for id in entering_ids(samples, config::SPY_THRESHOLD) {
        on_section_visible.emit(id.to_string());
    }
}

/// Without viewport tracking every section is shown right away.
pub fn reveal_everything(registry: &SectionRegistry) -> RevealAction {
    RevealAction::RevealAll(registry.ids().map(str::to_string).collect())
}

fn observe_all(
    observers: Vec<ViewportObserver>,
    registry: &SectionRegistry,
) -> Result<Vec<ViewportObserver>, ViewportError> {
    for observer in &observers {
        let found = observer.observe_ids(registry.ids())?;
        if found < registry.len() {
            log::warn!("only {} of {} sections found in the document", found, registry.len());
        }
    }
    Ok(observers)
}

#[function_component(SectionRenderer)]
pub fn section_renderer(props: &SectionRendererProps) -> Html {
    let reveal_log = use_reducer(RevealLog::default);

    {
        let on_section_visible = props.on_section_visible.clone();
        let reveal = reveal_log.dispatcher();
        use_effect_with_deps(
            move |registry: &Rc<SectionRegistry>| {
                let spy = ViewportObserver::new(
                    ObserverOptions {
                        root_margin: config::SPY_ROOT_MARGIN,
                        threshold: config::SPY_THRESHOLD,
                    },
                    move |samples| report_visible(&samples, &on_section_visible),
                );

                let reveal_on_entry = reveal.clone();
                let revealer = ViewportObserver::new(
                    ObserverOptions {
                        root_margin: config::REVEAL_ROOT_MARGIN,
                        threshold: 0.0,
                    },
                    move |samples| {
                        for id in entering_ids(&samples, 0.0) {
                            reveal_on_entry.dispatch(RevealAction::Reveal(id.to_string()));
                        }
                    },
                );

                let observers = spy
                    .and_then(|spy| revealer.map(|revealer| vec![spy, revealer]))
                    .and_then(|observers| observe_all(observers, registry));

                let observers = match observers {
                    Ok(observers) => observers,
                    Err(err) => {
                        log::warn!("viewport tracking disabled, showing all sections: {}", err);
                        reveal.dispatch(reveal_everything(registry));
                        Vec::new()
                    }
                };

                move || drop(observers)
            },
            props.registry.clone(),
        );
    }

    html! {
        <main class="deck-main">
            { for props.registry.iter().map(|section| {
                let revealed = reveal_log.is_revealed(section.id);
                html! {
                    <section
                        key={section.id}
                        id={section.id}
                        class={classes!("deck-section", revealed.then_some("revealed"))}
                    >
                        <ContextProvider<Revealed> context={Revealed(revealed)}>
                            { (section.render)() }
                        </ContextProvider<Revealed>>
                    </section>
                }
            }) }
        </main>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scroll_spy::{ScrollSpy, ScrollSpyAction};
    use std::cell::RefCell;

    fn sample(id: &str, intersecting: bool) -> VisibilitySample {
        VisibilitySample {
            id: id.to_string(),
            intersecting,
            ratio: if intersecting { 0.3 } else { 0.0 },
        }
    }

    fn emitted(samples: &[VisibilitySample]) -> Vec<String> {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let callback = {
            let seen = Rc::clone(&seen);
            Callback::from(move |id: String| seen.borrow_mut().push(id))
        };
        report_visible(samples, &callback);
        let ids = seen.borrow().clone();
        ids
    }

    fn spy_after(samples: &[VisibilitySample]) -> Rc<ScrollSpy> {
        let registry = Rc::new(SectionRegistry::pitch_deck().unwrap());
        emitted(samples)
            .into_iter()
            .fold(Rc::new(ScrollSpy::new(registry)), |spy, id| {
                spy.reduce(ScrollSpyAction::SectionVisible(id))
            })
    }

    #[test]
    fn metrics_entering_the_band_becomes_active() {
        let samples = [sample("growth", false), sample("metrics", true)];
        assert_eq!(emitted(&samples), vec!["metrics".to_string()]);
        assert_eq!(spy_after(&samples).active_id(), "metrics");
    }

    #[test]
    fn sections_are_reported_in_delivery_order() {
        let samples = [sample("growth", true), sample("hero", false), sample("metrics", true)];
        assert_eq!(emitted(&samples), vec!["growth".to_string(), "metrics".to_string()]);
        assert_eq!(spy_after(&samples).active_id(), "metrics");
    }

    #[test]
    fn leaving_sections_do_not_move_the_highlight() {
        let samples = [sample("seo", false), sample("keywords", false)];
        assert!(emitted(&samples).is_empty());
        assert_eq!(spy_after(&samples).active_id(), "hero");
    }

    #[test]
    fn fallback_reveals_every_section() {
        let registry = SectionRegistry::pitch_deck().unwrap();
        let log = Rc::new(RevealLog::default()).reduce(reveal_everything(&registry));
        for id in registry.ids() {
            assert!(log.is_revealed(id), "{} stayed hidden", id);
        }
        assert_eq!(
            reveal_everything(&registry),
            RevealAction::RevealAll(registry.ids().map(str::to_string).collect())
        );
    }
}
