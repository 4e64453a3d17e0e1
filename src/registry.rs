use std::collections::HashSet;

use thiserror::Error;
use yew::Html;

use crate::icons::Icon;
use crate::sections;

/// One entry of the deck. `id` doubles as the DOM anchor of the section and
/// `icon` names the nav glyph by token (`"map-pin"`).
#[derive(Clone, Debug)]
pub struct SectionDescriptor {
    pub id: &'static str,
    pub title: &'static str,
    pub icon: Option<&'static str>,
    pub render: fn() -> Html,
}

impl SectionDescriptor {
    pub const fn new(
        id: &'static str,
        title: &'static str,
        icon: Option<&'static str>,
        render: fn() -> Html,
    ) -> Self {
        Self { id, title, icon, render }
    }

    /// Glyph for the nav control. Tokens are checked when the registry is
    /// built, so `None` only means the section has no icon.
    pub fn glyph(&self) -> Option<Icon> {
        self.icon.and_then(Icon::from_token)
    }
}

// Render fns are not comparable in a meaningful way; identity is id + label.
impl PartialEq for SectionDescriptor {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id && self.title == other.title && self.icon == other.icon
    }
}

#[derive(Error, Debug, PartialEq, Eq)]
pub enum RegistryError {
    #[error("section registry is empty")]
    Empty,
    #[error("duplicate section id: {0}")]
    DuplicateId(&'static str),
    #[error("section id {0:?} is not a usable anchor")]
    InvalidAnchor(&'static str),
    #[error("section {id} names unknown icon {token:?}")]
    UnknownIcon { id: &'static str, token: &'static str },
}

/// Ordered list of sections shared by the navigation bar and the page body.
#[derive(Clone, Debug, PartialEq)]
pub struct SectionRegistry {
    sections: Vec<SectionDescriptor>,
}

impl SectionRegistry {
    pub fn new(sections: Vec<SectionDescriptor>) -> Result<Self, RegistryError> {
        if sections.is_empty() {
            return Err(RegistryError::Empty);
        }

        let mut seen = HashSet::new();
        for section in &sections {
            if section.id.is_empty() || section.id.chars().any(char::is_whitespace) {
                return Err(RegistryError::InvalidAnchor(section.id));
            }
            if !seen.insert(section.id) {
                return Err(RegistryError::DuplicateId(section.id));
            }
            if let Some(token) = section.icon {
                if Icon::from_token(token).is_none() {
                    return Err(RegistryError::UnknownIcon { id: section.id, token });
                }
            }
        }

        Ok(Self { sections })
    }

    /// The ten sections of the Pose Photobooths strategy deck, in page order.
    pub fn pitch_deck() -> Result<Self, RegistryError> {
        Self::new(vec![
            SectionDescriptor::new("hero", "Overview", Some("camera"), sections::hero::render),
            SectionDescriptor::new("business", "Business", Some("target"), sections::business::render),
            SectionDescriptor::new("competitive", "Competition", Some("users"), sections::competitive::render),
            SectionDescriptor::new("seo", "SEO Strategy", Some("trending-up"), sections::seo::render),
            SectionDescriptor::new("keywords", "Keywords", None, sections::keywords::render),
            SectionDescriptor::new("content", "Content", Some("file-text"), sections::content::render),
            SectionDescriptor::new("platform", "Platform", None, sections::platform::render),
            SectionDescriptor::new("growth", "Growth", Some("trending-up"), sections::growth::render),
            SectionDescriptor::new("metrics", "Metrics", Some("bar-chart"), sections::metrics::render),
            SectionDescriptor::new("action", "Action Plan", Some("check-square"), sections::action::render),
        ])
    }

    pub fn iter(&self) -> impl Iterator<Item = &SectionDescriptor> {
        self.sections.iter()
    }

    pub fn len(&self) -> usize {
        self.sections.len()
    }

    /// Never fails on a constructed registry, which holds at least one section.
    pub fn first(&self) -> &SectionDescriptor {
        &self.sections[0]
    }

    pub fn get(&self, index: usize) -> Option<&SectionDescriptor> {
        self.sections.get(index)
    }

    pub fn position(&self, id: &str) -> Option<usize> {
        self.sections.iter().position(|section| section.id == id)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.position(id).is_some()
    }

    pub fn ids(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.sections.iter().map(|section| section.id)
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use yew::html;

    fn blank() -> Html {
        html! {}
    }

    pub(crate) fn registry_of(ids: &[&'static str]) -> SectionRegistry {
        SectionRegistry::new(
            ids.iter()
                .map(|&id| SectionDescriptor::new(id, id, None, blank))
                .collect(),
        )
        .expect("valid test registry")
    }

    #[test]
    fn deck_has_ten_sections_in_page_order() {
        let deck = SectionRegistry::pitch_deck().unwrap();
        let ids: Vec<_> = deck.ids().collect();
        assert_eq!(
            ids,
            vec![
                "hero",
                "business",
                "competitive",
                "seo",
                "keywords",
                "content",
                "platform",
                "growth",
                "metrics",
                "action"
            ]
        );
        assert_eq!(deck.first().id, "hero");
    }

    #[test]
    fn deck_titles_follow_nav_labels() {
        let deck = SectionRegistry::pitch_deck().unwrap();
        let action = deck.get(deck.position("action").unwrap()).unwrap();
        assert_eq!(action.title, "Action Plan");
        assert_eq!(deck.get(0).unwrap().title, "Overview");
    }

    #[test]
    fn sections_without_icon_are_allowed() {
        let deck = SectionRegistry::pitch_deck().unwrap();
        let keywords = deck.get(deck.position("keywords").unwrap()).unwrap();
        assert_eq!(keywords.icon, None);
        assert_eq!(keywords.glyph(), None);
    }

    #[test]
    fn deck_icons_resolve() {
        let deck = SectionRegistry::pitch_deck().unwrap();
        let metrics = deck.get(deck.position("metrics").unwrap()).unwrap();
        assert_eq!(metrics.glyph(), Some(Icon::BarChart));
        let with_icon = deck.iter().filter(|section| section.glyph().is_some()).count();
        assert_eq!(with_icon, 8);
    }

    #[test]
    fn rejects_unknown_icon_tokens() {
        let result = SectionRegistry::new(vec![
            SectionDescriptor::new("hero", "Overview", Some("camera"), blank),
            SectionDescriptor::new("metrics", "Metrics", Some("bar-chart-3"), blank),
        ]);
        assert_eq!(
            result,
            Err(RegistryError::UnknownIcon {
                id: "metrics",
                token: "bar-chart-3"
            })
        );
    }

    #[test]
    fn rejects_empty_registry() {
        assert_eq!(SectionRegistry::new(Vec::new()), Err(RegistryError::Empty));
    }

    #[test]
    fn rejects_duplicate_ids() {
        let result = SectionRegistry::new(vec![
            SectionDescriptor::new("hero", "One", None, blank),
            SectionDescriptor::new("seo", "Two", None, blank),
            SectionDescriptor::new("hero", "Three", None, blank),
        ]);
        assert_eq!(result, Err(RegistryError::DuplicateId("hero")));
    }

    #[test]
    fn rejects_ids_that_cannot_be_anchors() {
        let spaced = SectionRegistry::new(vec![SectionDescriptor::new("action plan", "Action", None, blank)]);
        assert_eq!(spaced, Err(RegistryError::InvalidAnchor("action plan")));

        let empty = SectionRegistry::new(vec![SectionDescriptor::new("", "Nothing", None, blank)]);
        assert_eq!(empty, Err(RegistryError::InvalidAnchor("")));
    }

    #[test]
    fn lookup_by_id() {
        let registry = registry_of(&["a", "b", "c"]);
        assert_eq!(registry.position("b"), Some(1));
        assert!(registry.contains("c"));
        assert!(!registry.contains("d"));
        assert_eq!(registry.len(), 3);
    }
}
