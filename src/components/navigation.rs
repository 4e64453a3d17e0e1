use web_sys::MouseEvent;
use yew::prelude::*;

use crate::components::reveal::{Motion, Reveal};
use crate::icons::{glyph, Icon};
use crate::scroll_spy::ScrollSpy;

/// One nav control as rendered: label, glyph and whether it is highlighted.
#[derive(Clone, Debug, PartialEq)]
pub struct NavEntry {
    pub id: &'static str,
    pub title: &'static str,
    pub icon: Option<Icon>,
    pub active: bool,
}

pub fn nav_entries(spy: &ScrollSpy) -> Vec<NavEntry> {
    spy.registry()
        .iter()
        .map(|section| NavEntry {
            id: section.id,
            title: section.title,
            icon: section.glyph(),
            active: spy.is_active(section.id),
        })
        .collect()
}

#[derive(Properties, PartialEq)]
pub struct NavigationProps {
    pub spy: ScrollSpy,
    pub on_navigate: Callback<&'static str>,
}

#[function_component(Navigation)]
pub fn navigation(props: &NavigationProps) -> Html {
    let NavigationProps { spy, on_navigate } = props;
    let menu_open = use_state(|| false);

    let toggle_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            menu_open.set(!*menu_open);
        })
    };

    let menu_class = if *menu_open {
        "nav-links mobile-menu-open"
    } else {
        "nav-links"
    };

    html! {
        <Reveal from={Motion::DROP} on_mount={true} class={classes!("top-nav-wrapper")}>
            <nav class="top-nav">
                <div class="nav-content">
                    <div class="nav-brand">
                        { Icon::Camera.html("icon-lg") }
                        <span>{"Pose Photobooths"}</span>
                    </div>

                    <button class="burger-menu" onclick={toggle_menu} aria-label="Toggle sections">
                        <span></span>
                        <span></span>
                        <span></span>
                    </button>
                    <div class={menu_class}>
                        { for nav_entries(spy).into_iter().map(|entry| {
                            let id = entry.id;
                            let onclick = {
                                let on_navigate = on_navigate.clone();
                                let menu_open = menu_open.clone();
                                Callback::from(move |e: MouseEvent| {
                                    e.prevent_default();
                                    menu_open.set(false);
                                    on_navigate.emit(id);
                                })
                            };
                            html! {
                                <button
                                    key={id}
                                    class={classes!("nav-link", entry.active.then_some("active"))}
                                    aria-current={entry.active.then_some("true")}
                                    onclick={onclick}
                                >
                                    { glyph(entry.icon, "icon-sm") }
                                    <span>{ entry.title }</span>
                                </button>
                            }
                        }) }
                    </div>
                </div>
            </nav>
        </Reveal>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::registry::SectionRegistry;
    use crate::scroll_spy::ScrollSpyAction;
    use std::rc::Rc;
    use yew::Reducible;

    fn deck() -> Rc<ScrollSpy> {
        let registry = SectionRegistry::pitch_deck().unwrap();
        Rc::new(ScrollSpy::new(Rc::new(registry)))
    }

    #[test]
    fn one_control_per_section() {
        let spy = deck();
        let entries = nav_entries(&spy);
        assert_eq!(entries.len(), spy.registry().len());
        assert_eq!(entries.len(), 10);
        let labels: Vec<_> = entries.iter().map(|entry| entry.title).collect();
        assert_eq!(labels[9], "Action Plan");
    }

    #[test]
    fn controls_carry_resolved_icons() {
        let entries = nav_entries(&deck());
        assert_eq!(entries[0].icon, Some(Icon::Camera));
        assert_eq!(entries[4].icon, None);
        assert_eq!(entries[8].icon, Some(Icon::BarChart));
    }

    #[test]
    fn exactly_one_control_is_highlighted() {
        let ids: Vec<_> = deck().registry().ids().collect();
        for id in ids {
            let spy = deck().reduce(ScrollSpyAction::Navigate(id.to_string()));
            let entries = nav_entries(&spy);
            let active: Vec<_> = entries.iter().filter(|entry| entry.active).map(|entry| entry.id).collect();
            assert_eq!(active, vec![id]);
        }
    }
}
