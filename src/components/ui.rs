//! Small building blocks shared by the deck sections.

use yew::prelude::*;

use crate::components::reveal::{Motion, Reveal};
use crate::icons::{glyph, Icon};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Tone {
    Positive,
    Caution,
    Warning,
    Danger,
    Info,
    Accent,
}

impl Tone {
    pub fn class(self) -> &'static str {
        match self {
            Tone::Positive => "tone-positive",
            Tone::Caution => "tone-caution",
            Tone::Warning => "tone-warning",
            Tone::Danger => "tone-danger",
            Tone::Info => "tone-info",
            Tone::Accent => "tone-accent",
        }
    }
}

/// Scales where "High" is good news: impact, volume, potential, SEO value.
pub fn rating_tone(level: &str) -> Tone {
    if level.contains("High") {
        Tone::Positive
    } else {
        Tone::Caution
    }
}

/// Scales where "High" is bad news or urgent: severity, importance, priority.
pub fn severity_tone(level: &str) -> Tone {
    match level {
        "Critical" => Tone::Danger,
        "High" => Tone::Warning,
        _ => Tone::Caution,
    }
}

/// Foundational SEO work marks everything high priority in red.
pub fn priority_tone(level: &str) -> Tone {
    if level == "High" {
        Tone::Danger
    } else {
        Tone::Caution
    }
}

pub fn difficulty_tone(level: &str) -> Tone {
    if level.contains("Low") {
        Tone::Positive
    } else if level.contains("Medium") {
        Tone::Caution
    } else {
        Tone::Danger
    }
}

pub fn status_tone(status: &str) -> Tone {
    match status {
        "immediate" => Tone::Danger,
        "short-term" => Tone::Caution,
        _ => Tone::Positive,
    }
}

pub fn badge(label: impl Into<AttrValue>, tone: Tone) -> Html {
    let label: AttrValue = label.into();
    html! {
        <span class={classes!("badge", tone.class())}>{ label }</span>
    }
}

/// Title block opening every section.
pub fn section_header(title: &'static str, lead: &'static str) -> Html {
    html! {
        <Reveal from={Motion::RISE_FAR} class={classes!("section-header")}>
            <h2>{ title }</h2>
            <p class="lead">{ lead }</p>
        </Reveal>
    }
}

/// Heading for a block inside a section, optionally led by a glyph.
pub fn block_title(icon: Option<Icon>, title: &'static str) -> Html {
    html! {
        <h3 class="block-title">
            { glyph(icon, "icon-inline") }
            { title }
        </h3>
    }
}

pub fn dot_list(items: &[&'static str]) -> Html {
    html! {
        <ul class="dot-list">
            { for items.iter().map(|item| html! { <li>{ *item }</li> }) }
        </ul>
    }
}

pub fn icon_list(icon: Icon, class: &'static str, items: &[&'static str]) -> Html {
    html! {
        <ul class="icon-list">
            { for items.iter().map(|item| html! {
                <li>{ icon.html(class) }<span>{ *item }</span></li>
            }) }
        </ul>
    }
}

/// Label/value row used in cards ("Target: ...", "Frequency: ...").
pub fn detail_row(label: &'static str, value: &'static str, value_class: &'static str) -> Html {
    html! {
        <div class="detail-row">
            <span class="detail-label">{ label }</span>
            <span class={value_class}>{ value }</span>
        </div>
    }
}

/// Big figure with a caption underneath.
pub fn stat_tile(value: &'static str, caption: &'static str) -> Html {
    html! {
        <div class="stat-tile">
            <div class="stat-value">{ value }</div>
            <div class="stat-caption">{ caption }</div>
        </div>
    }
}

pub fn step_number(n: usize) -> Html {
    html! { <div class="step-number">{ n }</div> }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rating_scale() {
        assert_eq!(rating_tone("High"), Tone::Positive);
        assert_eq!(rating_tone("Medium-High"), Tone::Positive);
        assert_eq!(rating_tone("Medium"), Tone::Caution);
        assert_eq!(rating_tone("Low-Medium"), Tone::Caution);
    }

    #[test]
    fn severity_scale() {
        assert_eq!(severity_tone("Critical"), Tone::Danger);
        assert_eq!(severity_tone("High"), Tone::Warning);
        assert_eq!(severity_tone("Medium"), Tone::Caution);
    }

    #[test]
    fn difficulty_scale() {
        assert_eq!(difficulty_tone("Low"), Tone::Positive);
        assert_eq!(difficulty_tone("Very Low"), Tone::Positive);
        assert_eq!(difficulty_tone("Low-Medium"), Tone::Positive);
        assert_eq!(difficulty_tone("Medium"), Tone::Caution);
        assert_eq!(difficulty_tone("High"), Tone::Danger);
    }

    #[test]
    fn priority_and_status() {
        assert_eq!(priority_tone("High"), Tone::Danger);
        assert_eq!(priority_tone("Medium"), Tone::Caution);
        assert_eq!(status_tone("immediate"), Tone::Danger);
        assert_eq!(status_tone("short-term"), Tone::Caution);
        assert_eq!(status_tone("long-term"), Tone::Positive);
    }

    #[test]
    fn every_tone_has_its_own_class() {
        let tones = [
            Tone::Positive,
            Tone::Caution,
            Tone::Warning,
            Tone::Danger,
            Tone::Info,
            Tone::Accent,
        ];
        let classes: Vec<_> = tones.iter().map(|tone| tone.class()).collect();
        assert_eq!(Tone::Info.class(), "tone-info");
        assert_eq!(Tone::Accent.class(), "tone-accent");
        let unique: std::collections::HashSet<_> = classes.iter().collect();
        assert_eq!(unique.len(), tones.len());
        assert!(classes.iter().all(|class| class.starts_with("tone-")));
    }
}
