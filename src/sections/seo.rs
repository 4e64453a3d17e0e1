use yew::prelude::*;

use crate::components::reveal::{stagger, Motion, Reveal};
use crate::components::ui::{
    badge, block_title, difficulty_tone, priority_tone, rating_tone, section_header, step_number,
};
use crate::icons::Icon;

struct Foundation {
    icon: Icon,
    title: &'static str,
    description: &'static str,
    priority: &'static str,
}

const FOUNDATIONS: [Foundation; 3] = [
    Foundation {
        icon: Icon::Settings,
        title: "Technical SEO Audit",
        description: "Comprehensive site health check, mobile optimization, and page speed improvements",
        priority: "High",
    },
    Foundation {
        icon: Icon::FileText,
        title: "On-Page SEO",
        description: "Meta tags, headers, schema markup, and keyword-optimized content",
        priority: "High",
    },
    Foundation {
        icon: Icon::Link,
        title: "Content Optimization",
        description: "Service pages, location pages, and blog content aligned with search intent",
        priority: "Medium",
    },
];

struct LocalTactic {
    title: &'static str,
    description: &'static str,
    impact: &'static str,
}

const LOCAL_TACTICS: [LocalTactic; 3] = [
    LocalTactic {
        title: "GBP Optimization",
        description: "Optimize Google Business Profile with photos, posts, Q&A, and reviews",
        impact: "Increased local visibility",
    },
    LocalTactic {
        title: "Location-Specific Landing Pages",
        description: "Create dedicated pages for Vancouver, Victoria, Whistler, Burnaby, and Surrey",
        impact: "Better local rankings",
    },
    LocalTactic {
        title: "Local Backlink Building",
        description: "Partner with local venues, planners, and event directories",
        impact: "Enhanced domain authority",
    },
];

/// (keyword, search volume, difficulty)
const TARGET_KEYWORDS: [(&str, &str, &str); 5] = [
    ("Vancouver 360 photo booth rental", "High", "Medium"),
    ("Whistler wedding drone videography", "Medium", "Low"),
    ("Corporate event photo booth Vancouver", "Medium", "Medium"),
    ("Wedding drone photography BC", "High", "High"),
    ("Photo booth rental Surrey", "Medium", "Low"),
];

pub fn render() -> Html {
    html! { <SeoStrategy /> }
}

#[function_component(SeoStrategy)]
pub fn seo_strategy() -> Html {
    html! {
        <div class="section-inner">
            { section_header(
                "SEO & GEO Optimization Strategy",
                "A comprehensive approach to dominate local search results and drive organic traffic \
                 across all target markets.",
            ) }

            <div class="block">
                { block_title(None, "Foundational SEO Strategy") }
                <div class="grid cols-3">
                    { for FOUNDATIONS.iter().enumerate().map(|(i, item)| html! {
                        <Reveal delay_ms={stagger(i)} class={classes!("card", "hoverable")}>
                            <div class="card-head spread">
                                { item.icon.html("icon-xl") }
                                { badge(format!("{} Priority", item.priority), priority_tone(item.priority)) }
                            </div>
                            <h4>{ item.title }</h4>
                            <p class="muted">{ item.description }</p>
                        </Reveal>
                    }) }
                </div>
            </div>

            <div class="block">
                { block_title(Some(Icon::MapPin), "Local SEO Strategy") }
                <div class="stack">
                    { for LOCAL_TACTICS.iter().enumerate().map(|(i, tactic)| html! {
                        <Reveal from={Motion::FROM_LEFT} delay_ms={stagger(i)} class={classes!("card", "row-card")}>
                            { step_number(i + 1) }
                            <div class="grow">
                                <h4>{ tactic.title }</h4>
                                <p class="muted">{ tactic.description }</p>
                                <div class="impact-line">
                                    { Icon::TrendingUp.html("icon-sm positive") }
                                    <span class="positive small">{ tactic.impact }</span>
                                </div>
                            </div>
                        </Reveal>
                    }) }
                </div>
            </div>

            <Reveal delay_ms={200} class={classes!("card")}>
                { block_title(Some(Icon::Search), "Target Keywords") }
                <div class="table-wrap">
                    <table class="deck-table">
                        <thead>
                            <tr>
                                <th>{"Keyword"}</th>
                                <th class="center">{"Search Volume"}</th>
                                <th class="center">{"Difficulty"}</th>
                            </tr>
                        </thead>
                        <tbody>
                            { for TARGET_KEYWORDS.iter().map(|(keyword, volume, difficulty)| html! {
                                <tr>
                                    <td>{ *keyword }</td>
                                    <td class="center">{ badge(*volume, rating_tone(volume)) }</td>
                                    <td class="center">{ badge(*difficulty, difficulty_tone(difficulty)) }</td>
                                </tr>
                            }) }
                        </tbody>
                    </table>
                </div>
            </Reveal>
        </div>
    }
}
