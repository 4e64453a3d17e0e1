use std::rc::Rc;

use yew::Reducible;

use crate::registry::SectionRegistry;
use crate::viewport::ScrollTarget;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ScrollSpyAction {
    /// A nav control was clicked.
    Navigate(String),
    /// A section became the dominant one in the viewport.
    SectionVisible(String),
}

/// Which section the navigation bar highlights. Always one of the registry's
/// sections, starting at the first one.
#[derive(Clone, Debug, PartialEq)]
pub struct ScrollSpy {
    registry: Rc<SectionRegistry>,
    active: usize,
}

impl ScrollSpy {
    pub fn new(registry: Rc<SectionRegistry>) -> Self {
        Self { registry, active: 0 }
    }

    pub fn registry(&self) -> &SectionRegistry {
        &self.registry
    }

    pub fn active_id(&self) -> &'static str {
        self.registry
            .get(self.active)
            .unwrap_or_else(|| self.registry.first())
            .id
    }

    pub fn is_active(&self, id: &str) -> bool {
        self.active_id() == id
    }

    /// Handles a click on the control for `id`: starts the scroll and returns
    /// the state update to apply right away, without waiting for the scroll
    /// or for the section to report itself visible. A missing anchor only
    /// skips the scroll. Ids outside the registry are ignored.
    pub fn navigate(&self, target: &dyn ScrollTarget, id: &str) -> Option<ScrollSpyAction> {
        if !self.registry.contains(id) {
            log::warn!("ignoring navigation to unknown section {}", id);
            return None;
        }
        if !target.scroll_to(id) {
            log::debug!("anchor #{} not in document, skipping scroll", id);
        }
        Some(ScrollSpyAction::Navigate(id.to_string()))
    }
}

impl Reducible for ScrollSpy {
    type Action = ScrollSpyAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let id = match &action {
            ScrollSpyAction::Navigate(id) | ScrollSpyAction::SectionVisible(id) => id.as_str(),
        };

        match self.registry.position(id) {
            Some(index) if index == self.active => self,
            Some(index) => {
                log::debug!("active section {} -> {} ({:?})", self.active_id(), id, action);
                Rc::new(Self {
                    registry: Rc::clone(&self.registry),
                    active: index,
                })
            }
            None => {
                log::warn!("no section {} in registry, keeping {}", id, self.active_id());
                self
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::registry::tests::registry_of;
    use std::cell::RefCell;

    #[derive(Default)]
    struct RecordingTarget {
        anchors: Vec<&'static str>,
        scrolled: RefCell<Vec<String>>,
    }

    impl ScrollTarget for RecordingTarget {
        fn scroll_to(&self, anchor: &str) -> bool {
            self.scrolled.borrow_mut().push(anchor.to_string());
            self.anchors.iter().any(|known| *known == anchor)
        }
    }

    fn deck() -> Rc<ScrollSpy> {
        let registry = SectionRegistry::pitch_deck().unwrap();
        Rc::new(ScrollSpy::new(Rc::new(registry)))
    }

    fn visible(spy: Rc<ScrollSpy>, id: &str) -> Rc<ScrollSpy> {
        spy.reduce(ScrollSpyAction::SectionVisible(id.to_string()))
    }

    fn click(spy: Rc<ScrollSpy>, target: &RecordingTarget, id: &str) -> Rc<ScrollSpy> {
        match spy.navigate(target, id) {
            Some(action) => spy.reduce(action),
            None => spy,
        }
    }

    #[test]
    fn starts_on_first_section() {
        assert_eq!(deck().active_id(), "hero");
    }

    #[test]
    fn navigating_activates_every_section() {
        let registry = SectionRegistry::pitch_deck().unwrap();
        let target = RecordingTarget::default();
        for id in registry.ids() {
            let spy = click(deck(), &target, id);
            assert_eq!(spy.active_id(), id);
            assert!(spy.is_active(id));
        }
    }

    #[test]
    fn action_plan_click_scrolls_and_activates() {
        let target = RecordingTarget {
            anchors: vec!["action"],
            ..Default::default()
        };
        let spy = click(deck(), &target, "action");
        assert_eq!(spy.active_id(), "action");
        assert_eq!(*target.scrolled.borrow(), vec!["action".to_string()]);
    }

    #[test]
    fn missing_anchor_still_updates_state() {
        let target = RecordingTarget::default();
        let spy = click(deck(), &target, "growth");
        assert_eq!(spy.active_id(), "growth");
    }

    #[test]
    fn last_visible_section_wins() {
        let registry = SectionRegistry::pitch_deck().unwrap();
        let ids: Vec<_> = registry.ids().collect();
        for a in &ids {
            for b in ids.iter().filter(|b| *b != a) {
                let spy = visible(visible(deck(), a), b);
                assert_eq!(spy.active_id(), *b);
            }
        }
    }

    #[test]
    fn scrolling_to_metrics_activates_it_without_click() {
        let spy = visible(deck(), "metrics");
        assert_eq!(spy.active_id(), "metrics");
    }

    #[test]
    fn repeated_navigation_does_not_toggle() {
        let target = RecordingTarget::default();
        let spy = click(deck(), &target, "seo");
        let again = click(Rc::clone(&spy), &target, "seo");
        assert_eq!(again.active_id(), "seo");
        assert!(Rc::ptr_eq(&spy, &again));
    }

    #[test]
    fn unknown_ids_leave_state_alone() {
        let target = RecordingTarget::default();
        let spy = click(deck(), &target, "pricing");
        assert_eq!(spy.active_id(), "hero");
        assert!(target.scrolled.borrow().is_empty());

        let spy = visible(spy, "footer");
        assert_eq!(spy.active_id(), "hero");
    }

    #[test]
    fn works_with_any_registry() {
        let spy = Rc::new(ScrollSpy::new(Rc::new(registry_of(&["one", "two"]))));
        assert_eq!(spy.active_id(), "one");
        assert_eq!(spy.registry().len(), 2);
        assert_eq!(visible(spy, "two").active_id(), "two");
    }
}
