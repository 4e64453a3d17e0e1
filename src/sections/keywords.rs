use yew::prelude::*;

use crate::components::reveal::{stagger, Motion, Reveal};
use crate::components::ui::{
    badge, block_title, difficulty_tone, dot_list, icon_list, rating_tone, section_header, stat_tile, Tone,
};
use crate::icons::Icon;

struct KeywordCategory {
    icon: Icon,
    name: &'static str,
    volume: &'static str,
    difficulty: &'static str,
    keywords: [&'static str; 3],
}

const CATEGORIES: [KeywordCategory; 6] = [
    KeywordCategory {
        icon: Icon::Search,
        name: "General Photo Booth Keywords",
        volume: "High",
        difficulty: "Medium",
        keywords: [
            "Photo booth rental near me",
            "360 photo booth rental",
            "Wedding photo booth rental",
        ],
    },
    KeywordCategory {
        icon: Icon::MapPin,
        name: "Location-Specific Keywords",
        volume: "Medium-High",
        difficulty: "Low-Medium",
        keywords: [
            "Vancouver photo booth rental",
            "Whistler photo booth rental",
            "Victoria photo booth rental",
        ],
    },
    KeywordCategory {
        icon: Icon::TrendingUp,
        name: "Drone Videography Keywords",
        volume: "Medium",
        difficulty: "Low",
        keywords: [
            "Wedding drone videography",
            "Event drone videography",
            "Drone videography Vancouver",
        ],
    },
    KeywordCategory {
        icon: Icon::Target,
        name: "Combined Services Keywords",
        volume: "Low-Medium",
        difficulty: "Very Low",
        keywords: [
            "Photo booth and drone rental package",
            "Wedding photo booth and drone services",
            "Event photo booth and drone services",
        ],
    },
    KeywordCategory {
        icon: Icon::Users,
        name: "Event-Specific Keywords",
        volume: "Medium",
        difficulty: "Medium",
        keywords: [
            "Corporate photo booth rental Vancouver",
            "Wedding drone videography Victoria",
            "Festival photo booth rental",
        ],
    },
    KeywordCategory {
        icon: Icon::FileText,
        name: "Feature-Specific Keywords",
        volume: "Low-Medium",
        difficulty: "Low",
        keywords: [
            "360 photo booth rental near me",
            "Roaming photo booth rental",
            "Custom-branded photo booth",
        ],
    },
];

struct TitleGroup {
    name: &'static str,
    seo_value: &'static str,
    titles: [&'static str; 3],
}

const TITLE_GROUPS: [TitleGroup; 6] = [
    TitleGroup {
        name: "Ultimate Guides & How-To",
        seo_value: "High",
        titles: [
            "The Ultimate Guide to Choosing the Perfect Photo Booth for Your Event",
            "How Drone Videography Can Transform Your Wedding Day",
            "10 Creative Ways to Use a Photo Booth at Corporate Events",
        ],
    },
    TitleGroup {
        name: "Local Authority Content",
        seo_value: "High",
        titles: [
            "Top 5 Photo Booth Rental Companies in Vancouver",
            "How Whistler Weddings Are Elevated with Photo Booths",
            "Why Victoria is Perfect for 360° Photo Booth Experiences",
        ],
    },
    TitleGroup {
        name: "Comparison & Review Content",
        seo_value: "Medium-High",
        titles: [
            "Pose Photobooths vs. Competitors: Which Offers Better Value?",
            "360° vs Traditional Photo Booths: Which is Right for Your Event?",
            "Drone vs Traditional Videography: A Complete Comparison",
        ],
    },
    TitleGroup {
        name: "Trend & Industry Insights",
        seo_value: "Medium",
        titles: [
            "Photo Booth Trends to Watch in 2025",
            "Why 360° Photo Booths Are Taking Over Vancouver Events",
            "The Future of Event Entertainment: Drones + Photo Booths",
        ],
    },
    TitleGroup {
        name: "Problem-Solution Content",
        seo_value: "High",
        titles: [
            "5 Reasons Why Every Wedding Needs a Photo Booth",
            "How to Make Corporate Events More Engaging with Photo Booths",
            "Why Drone Videography is Perfect for Outdoor Weddings",
        ],
    },
    TitleGroup {
        name: "Seasonal & Event-Specific",
        seo_value: "Medium",
        titles: [
            "Best Christmas Party Photo Booth Ideas for Vancouver Companies",
            "Summer Festival Photo Booth Rental Guide",
            "Wedding Season 2025: Photo Booth and Drone Packages",
        ],
    },
];

/// (value, metric, description)
const OPPORTUNITIES: [(&str, &str, &str); 4] = [
    ("200+", "Total Target Keywords", "Across all categories and locations"),
    ("60%", "Low Competition Keywords", "Easier to rank with focused content"),
    ("45+", "Local Keywords", "Location-specific opportunities"),
    ("150+", "Long-tail Opportunities", "High-intent, conversion-focused terms"),
];

const RANKABILITY: [(Icon, &str, &str, &str); 3] = [
    (
        Icon::Target,
        "positive",
        "Low Competition",
        "60% of target keywords have low to medium competition, making them achievable ranking targets.",
    ),
    (
        Icon::MapPin,
        "info",
        "Local Advantage",
        "Geographic targeting provides competitive advantage in Vancouver, Victoria, Whistler, and surrounding areas.",
    ),
    (
        Icon::Users,
        "accent",
        "Unique Positioning",
        "Combined photo booth + drone services create unique keyword opportunities with minimal competition.",
    ),
];

const PHASES: [(&str, Tone, [&str; 3]); 3] = [
    (
        "Phase 1: Immediate (Weeks 1-4)",
        Tone::Danger,
        [
            "Location-specific service pages",
            "High-volume keyword content",
            "Competitor comparison articles",
        ],
    ),
    (
        "Phase 2: Growth (Weeks 5-12)",
        Tone::Caution,
        [
            "Ultimate guides & how-to content",
            "Feature-specific articles",
            "Seasonal content campaigns",
        ],
    ),
    (
        "Phase 3: Authority (Months 4-6)",
        Tone::Positive,
        [
            "Industry trend analysis",
            "Advanced technique guides",
            "Thought leadership content",
        ],
    ),
];

pub fn render() -> Html {
    html! { <KeywordResearch /> }
}

#[function_component(KeywordResearch)]
pub fn keyword_research() -> Html {
    html! {
        <div class="section-inner">
            { section_header(
                "Keyword Research & Content Opportunities",
                "Comprehensive keyword analysis revealing high-opportunity, rankable terms and content strategies.",
            ) }

            <Reveal delay_ms={100} class={classes!("grid", "cols-4", "block")}>
                { for OPPORTUNITIES.iter().enumerate().map(|(i, (value, metric, description))| html! {
                    <Reveal delay_ms={stagger(i)} class={classes!("card", "gradient", "centered")}>
                        { stat_tile(*value, *metric) }
                        <p class="muted small">{ *description }</p>
                    </Reveal>
                }) }
            </Reveal>

            <div class="block">
                { block_title(None, "High-Opportunity Keyword Categories") }
                <div class="grid cols-2 wide-gap">
                    { for CATEGORIES.iter().enumerate().map(|(i, category)| html! {
                        <Reveal from={Motion::side(i)} delay_ms={stagger(i)} class={classes!("card")}>
                            <div class="card-head">
                                <div class="icon-disc">{ category.icon.html("icon-lg") }</div>
                                <div>
                                    <h4>{ category.name }</h4>
                                    <div class="badge-row">
                                        { badge(format!("{} Volume", category.volume), rating_tone(category.volume)) }
                                        { badge(
                                            format!("{} Difficulty", category.difficulty),
                                            difficulty_tone(category.difficulty),
                                        ) }
                                    </div>
                                </div>
                            </div>
                            { icon_list(Icon::Search, "icon-sm accent", &category.keywords) }
                        </Reveal>
                    }) }
                </div>
            </div>

            <div class="block">
                { block_title(None, "High-Impact Content Titles (Sample from 100+ Ideas)") }
                <div class="stack wide-gap">
                    { for TITLE_GROUPS.iter().enumerate().map(|(i, group)| html! {
                        <Reveal delay_ms={stagger(i)} class={classes!("card", "gradient")}>
                            <div class="card-head spread">
                                <h4>{ group.name }</h4>
                                { badge(format!("{} SEO Value", group.seo_value), rating_tone(group.seo_value)) }
                            </div>
                            <div class="grid cols-3">
                                { for group.titles.iter().map(|title| html! {
                                    <div class="row-tile">
                                        { Icon::FileText.html("icon-sm accent") }
                                        <span>{ *title }</span>
                                    </div>
                                }) }
                            </div>
                        </Reveal>
                    }) }
                </div>
            </div>

            <Reveal delay_ms={400} class={classes!("banner", "gradient-positive")}>
                { Icon::TrendingUp.html("icon-xxl") }
                <h3>{"Why These Keywords Are Highly Rankable"}</h3>
                <div class="grid cols-3">
                    { for RANKABILITY.iter().map(|(icon, tint, title, text)| html! {
                        <div class="centered">
                            <div class="icon-disc large">{ icon.html(*tint) }</div>
                            <h4>{ *title }</h4>
                            <p class="muted small">{ *text }</p>
                        </div>
                    }) }
                </div>
            </Reveal>

            <Reveal delay_ms={500} class={classes!("card", "subtle")}>
                { block_title(None, "Content Implementation Priority") }
                <div class="grid cols-3">
                    { for PHASES.iter().map(|(title, tone, items)| html! {
                        <div class="centered">
                            <div class={classes!("phase-head", tone.class())}>
                                <h4>{ *title }</h4>
                            </div>
                            { dot_list(items) }
                        </div>
                    }) }
                </div>
            </Reveal>
        </div>
    }
}
