use std::collections::HashSet;
use std::rc::Rc;

use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use yew::prelude::*;

use crate::config;

/// Sections whose entrance has already played. Entries are never removed, so
/// scrolling back up does not replay anything.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct RevealLog {
    revealed: HashSet<String>,
}

#[derive(Clone, Debug, PartialEq)]
pub enum RevealAction {
    Reveal(String),
    RevealAll(Vec<String>),
}

impl RevealLog {
    pub fn is_revealed(&self, id: &str) -> bool {
        self.revealed.contains(id)
    }
}

impl Reducible for RevealLog {
    type Action = RevealAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let ids = match action {
            RevealAction::Reveal(id) => vec![id],
            RevealAction::RevealAll(ids) => ids,
        };

        let fresh: Vec<String> = ids.into_iter().filter(|id| !self.is_revealed(id)).collect();
        if fresh.is_empty() {
            return self;
        }

        let mut next = (*self).clone();
        next.revealed.extend(fresh);
        Rc::new(next)
    }
}

/// Visual starting point of an entrance; the end point is always the natural
/// layout at full opacity.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Motion {
    pub opacity: f32,
    pub x: i32,
    pub y: i32,
}

impl Motion {
    pub const FADE: Motion = Motion { opacity: 0.0, x: 0, y: 0 };
    pub const RISE: Motion = Motion { opacity: 0.0, x: 0, y: 20 };
    pub const RISE_FAR: Motion = Motion { opacity: 0.0, x: 0, y: 30 };
    pub const FROM_LEFT: Motion = Motion { opacity: 0.0, x: -20, y: 0 };
    pub const FROM_RIGHT: Motion = Motion { opacity: 0.0, x: 20, y: 0 };
    pub const DROP: Motion = Motion { opacity: 1.0, x: 0, y: -100 };

    /// Alternates left/right entrances for items laid out in two columns.
    pub fn side(index: usize) -> Motion {
        if index % 2 == 0 {
            Motion::FROM_LEFT
        } else {
            Motion::FROM_RIGHT
        }
    }
}

/// Inline style for an element moving from `from` to its resting state.
pub fn motion_style(from: Motion, shown: bool, duration_ms: u32, delay_ms: u32) -> String {
    if shown {
        format!(
            "opacity: 1; transform: none; transition: opacity {d}ms ease-out {delay}ms, transform {d}ms ease-out {delay}ms;",
            d = duration_ms,
            delay = delay_ms
        )
    } else {
        format!(
            "opacity: {}; transform: translate({}px, {}px);",
            from.opacity, from.x, from.y
        )
    }
}

/// Stagger used by lists of cards: 100ms per item.
pub fn stagger(index: usize) -> u32 {
    index as u32 * 100
}

/// Whether the enclosing section has been revealed. Provided by the section
/// renderer; without a provider everything shows immediately.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Revealed(pub bool);

#[derive(Properties, PartialEq)]
pub struct RevealProps {
    #[prop_or(Motion::RISE)]
    pub from: Motion,
    #[prop_or(config::REVEAL_DURATION_MS)]
    pub duration_ms: u32,
    #[prop_or_default]
    pub delay_ms: u32,
    /// Animate right after mount instead of waiting for the section.
    #[prop_or_default]
    pub on_mount: bool,
    #[prop_or_default]
    pub class: Classes,
    #[prop_or_default]
    pub children: Children,
}

/// A pending `requestAnimationFrame` callback, cancelled on drop.
struct NextFrame {
    id: i32,
    _callback: Closure<dyn FnMut()>,
}

impl NextFrame {
    fn request(f: impl FnOnce() + 'static) -> Result<Self, JsValue> {
        let window = web_sys::window().ok_or_else(|| JsValue::from_str("no window"))?;
        let callback: Closure<dyn FnMut()> = Closure::once(f);
        let id = window.request_animation_frame(callback.as_ref().unchecked_ref())?;
        Ok(Self { id, _callback: callback })
    }
}

impl Drop for NextFrame {
    fn drop(&mut self) {
        if let Some(window) = web_sys::window() {
            let _ = window.cancel_animation_frame(self.id);
        }
    }
}

/// Mount-triggered entrances wait for their first painted frame; the rest
/// follow the enclosing section.
fn entrance_shown(on_mount: bool, mounted: bool, section_revealed: bool) -> bool {
    if on_mount {
        mounted
    } else {
        section_revealed
    }
}

#[function_component(Reveal)]
pub fn reveal(props: &RevealProps) -> Html {
    let section_revealed = use_context::<Revealed>().map(|r| r.0).unwrap_or(true);
    let mounted = use_state(|| false);

    {
        let mounted = mounted.clone();
        use_effect_with_deps(
            move |_| {
                let flip = mounted.clone();
                let frame = match NextFrame::request(move || flip.set(true)) {
                    Ok(frame) => Some(frame),
                    Err(err) => {
                        log::debug!("no animation frame, showing entrance now: {:?}", err);
                        mounted.set(true);
                        None
                    }
                };
                move || drop(frame)
            },
            (),
        );
    }

    let shown = entrance_shown(props.on_mount, *mounted, section_revealed);
    let style = motion_style(props.from, shown, props.duration_ms, props.delay_ms);

    html! {
        <div class={props.class.clone()} style={style}>
            { for props.children.iter() }
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reveal(log: Rc<RevealLog>, id: &str) -> Rc<RevealLog> {
        log.reduce(RevealAction::Reveal(id.to_string()))
    }

    #[test]
    fn reveal_is_recorded_once() {
        let log = reveal(Rc::new(RevealLog::default()), "business");
        assert!(log.is_revealed("business"));
        assert_eq!(*log, RevealLog { revealed: ["business".to_string()].into_iter().collect() });

        let again = reveal(Rc::clone(&log), "business");
        assert!(Rc::ptr_eq(&log, &again));
    }

    #[test]
    fn reveals_accumulate() {
        let log = reveal(reveal(Rc::new(RevealLog::default()), "hero"), "seo");
        assert!(log.is_revealed("hero"));
        assert!(log.is_revealed("seo"));
        assert!(!log.is_revealed("metrics"));
    }

    #[test]
    fn reveal_all_skips_known_sections() {
        let log = reveal(Rc::new(RevealLog::default()), "hero");
        let log = log.reduce(RevealAction::RevealAll(vec!["hero".into(), "action".into()]));
        assert!(log.is_revealed("hero"));
        assert!(log.is_revealed("action"));
        assert!(!log.is_revealed("seo"));

        let same = Rc::clone(&log).reduce(RevealAction::RevealAll(vec!["action".into()]));
        assert!(Rc::ptr_eq(&log, &same));
    }

    #[test]
    fn mount_entrance_waits_for_first_frame() {
        assert!(!entrance_shown(true, false, true));
        assert!(entrance_shown(true, true, false));
    }

    #[test]
    fn section_entrance_follows_the_section() {
        assert!(!entrance_shown(false, true, false));
        assert!(entrance_shown(false, false, true));
    }

    #[test]
    fn hidden_style_uses_start_offsets() {
        let style = motion_style(Motion::FROM_LEFT, false, 600, 0);
        assert_eq!(style, "opacity: 0; transform: translate(-20px, 0px);");
    }

    #[test]
    fn shown_style_carries_duration_and_delay() {
        let style = motion_style(Motion::RISE, true, 600, 200);
        assert!(style.starts_with("opacity: 1; transform: none;"));
        assert!(style.contains("opacity 600ms ease-out 200ms"));
    }

    #[test]
    fn staggers_by_index() {
        assert_eq!(stagger(0), 0);
        assert_eq!(stagger(3), 300);
        assert_eq!(Motion::side(0), Motion::FROM_LEFT);
        assert_eq!(Motion::side(1), Motion::FROM_RIGHT);
    }
}
