use yew::prelude::*;

use crate::charts::{ChartCanvas, ChartConfig, Rgb, Series};
use crate::components::reveal::{stagger, Motion, Reveal};
use crate::components::ui::{badge, block_title, icon_list, section_header, severity_tone, stat_tile, step_number};
use crate::icons::Icon;

struct Limitation {
    icon: Icon,
    area: &'static str,
    severity: &'static str,
    issues: [&'static str; 3],
}

const WIX_LIMITATIONS: [Limitation; 5] = [
    Limitation {
        icon: Icon::Settings,
        area: "SEO Flexibility",
        severity: "High",
        issues: [
            "Limited control over server response codes (301 redirects, 404 pages)",
            "Difficulty customizing robots.txt files and canonical tags",
            "Limited schema markup implementation for structured data",
        ],
    },
    Limitation {
        icon: Icon::Globe,
        area: "URL Structure",
        severity: "Medium",
        issues: [
            "Auto-generated URL structures not SEO-friendly",
            "Adds unnecessary 'collections' or 'categories' to URLs",
            "Longer URLs that are less optimized for search engines",
        ],
    },
    Limitation {
        icon: Icon::Zap,
        area: "Page Speed",
        severity: "High",
        issues: [
            "Slower loading times due to bloated code",
            "Limited server optimization options",
            "Page speed is critical ranking factor being compromised",
        ],
    },
    Limitation {
        icon: Icon::TrendingUp,
        area: "Scalability",
        severity: "High",
        issues: [
            "Struggles with multi-location business complexity",
            "Limited plugin/extension marketplace",
            "Cannot handle advanced features like AI-driven optimization",
        ],
    },
    Limitation {
        icon: Icon::Lock,
        area: "Ownership & Control",
        severity: "Critical",
        issues: [
            "Proprietary platform with limited control",
            "Difficult migration process if switching platforms",
            "Cannot choose high-performance hosting providers",
        ],
    },
];

/// Scores out of 10 for one feature. `axis` is the shorter label used on
/// the chart.
struct FeatureScore {
    feature: &'static str,
    axis: &'static str,
    importance: &'static str,
    wix: u8,
    wordpress: u8,
    webflow: u8,
}

const COMPARISON: [FeatureScore; 6] = [
    FeatureScore {
        feature: "SEO Control",
        axis: "SEO Control",
        importance: "Critical",
        wix: 3,
        wordpress: 10,
        webflow: 9,
    },
    FeatureScore {
        feature: "Page Speed",
        axis: "Page Speed",
        importance: "Critical",
        wix: 4,
        wordpress: 9,
        webflow: 10,
    },
    FeatureScore {
        feature: "Scalability",
        axis: "Scalability",
        importance: "High",
        wix: 3,
        wordpress: 10,
        webflow: 8,
    },
    FeatureScore {
        feature: "Customization",
        axis: "Customization",
        importance: "High",
        wix: 4,
        wordpress: 10,
        webflow: 9,
    },
    FeatureScore {
        feature: "Multi-location Support",
        axis: "Multi-location",
        importance: "Critical",
        wix: 3,
        wordpress: 10,
        webflow: 7,
    },
    FeatureScore {
        feature: "Design Flexibility",
        axis: "Design",
        importance: "Medium",
        wix: 5,
        wordpress: 8,
        webflow: 10,
    },
];

/// Column order of the platforms, with the color each one is drawn in.
const PLATFORMS: [(&str, Rgb, &str); 3] = [
    ("Wix", Rgb::RED, "score-red"),
    ("WordPress", Rgb::GREEN, "score-green"),
    ("Webflow", Rgb::BLUE, "score-blue"),
];

impl FeatureScore {
    fn scores(&self) -> [u8; 3] {
        [self.wix, self.wordpress, self.webflow]
    }
}

struct MigrationOption {
    platform: &'static str,
    advantages: [&'static str; 4],
    best_for: &'static str,
}

const MIGRATION_OPTIONS: [MigrationOption; 2] = [
    MigrationOption {
        platform: "WordPress",
        advantages: [
            "Complete SEO control with advanced plugins",
            "50,000+ plugins for unlimited functionality",
            "Multi-location SEO optimization capabilities",
            "Full ownership and migration flexibility",
        ],
        best_for: "Long-term scalability and advanced SEO",
    },
    MigrationOption {
        platform: "Webflow",
        advantages: [
            "Clean, semantic code for better SEO",
            "AWS hosting with global CDN",
            "Pixel-perfect design without coding",
            "Exportable code for easy migration",
        ],
        best_for: "Design-focused premium branding",
    },
];

const MIGRATION_STEPS: [(&str, &str); 3] = [
    (
        "Platform Setup",
        "Rebuild site on WordPress/Webflow while maintaining current design and functionality",
    ),
    (
        "SEO Preservation",
        "Implement 301 redirects from old URLs to new ones to preserve SEO rankings",
    ),
    (
        "Team Training",
        "Comprehensive training on new platform management and optimization",
    ),
];

const ROI: [(&str, &str); 4] = [
    ("3-5x", "Faster Page Speed"),
    ("50%+", "Better SEO Rankings"),
    ("Unlimited", "Scalability Potential"),
    ("100%", "Platform Ownership"),
];

/// Grouped bars of the feature scores, one series per platform, on a fixed
/// 0-10 axis.
pub fn comparison_chart() -> ChartConfig {
    let categories: Vec<&'static str> = COMPARISON.iter().map(|row| row.axis).collect();
    PLATFORMS
        .iter()
        .enumerate()
        .fold(
            ChartConfig::new("Platform Performance Comparison", &categories),
            |chart, (column, (name, color, _))| {
                let values: Vec<f64> = COMPARISON
                    .iter()
                    .map(|row| f64::from(row.scores()[column]))
                    .collect();
                chart.with_series(Series::bar(*name, &values, *color))
            },
        )
        .with_y_max(10.0)
}

fn score_cell(score: u8, class: &'static str) -> Html {
    html! {
        <td class="center">
            <div class="score">
                <span class={classes!("score-value", class)}>{ format!("{}/10", score) }</span>
                <div class="score-track">
                    <div
                        class={classes!("score-fill", class)}
                        style={format!("width: {}%;", u32::from(score) * 10)}
                    ></div>
                </div>
            </div>
        </td>
    }
}

pub fn render() -> Html {
    html! { <PlatformAnalysis /> }
}

#[function_component(PlatformAnalysis)]
pub fn platform_analysis() -> Html {
    html! {
        <div class="section-inner">
            { section_header(
                "Platform Analysis & Migration Strategy",
                "Why migrating from Wix is essential for SEO success and long-term growth.",
            ) }

            <Reveal delay_ms={100} class={classes!("card", "gradient-danger", "block")}>
                <h3 class="block-title">
                    { Icon::AlertTriangle.html("icon-inline danger") }
                    {"Critical Wix Limitations for SEO"}
                </h3>
                <div class="grid cols-2">
                    { for WIX_LIMITATIONS.iter().enumerate().map(|(i, limitation)| html! {
                        <Reveal delay_ms={stagger(i)} class={classes!("panel")}>
                            <div class="card-head spread">
                                <div class="row-tile bare">
                                    { limitation.icon.html("icon-lg danger") }
                                    <h4>{ limitation.area }</h4>
                                </div>
                                { badge(format!("{} Impact", limitation.severity), severity_tone(limitation.severity)) }
                            </div>
                            { icon_list(Icon::XCircle, "icon-sm danger", &limitation.issues) }
                        </Reveal>
                    }) }
                </div>
            </Reveal>

            <Reveal from={Motion::FADE} delay_ms={200} class={classes!("block")}>
                { block_title(None, "Platform Performance Comparison") }
                <div class="card">
                    <ChartCanvas chart={comparison_chart()} />
                </div>
            </Reveal>

            <Reveal delay_ms={300} class={classes!("block")}>
                { block_title(None, "Detailed Feature Comparison") }
                <div class="card table-wrap">
                    <table class="deck-table">
                        <thead>
                            <tr>
                                <th>{"Feature"}</th>
                                <th class="center">{"Importance"}</th>
                                { for PLATFORMS.iter().map(|(name, _, _)| html! {
                                    <th class="center">{ *name }</th>
                                }) }
                            </tr>
                        </thead>
                        <tbody>
                            { for COMPARISON.iter().map(|row| html! {
                                <tr>
                                    <td class="strong">{ row.feature }</td>
                                    <td class="center">{ badge(row.importance, severity_tone(row.importance)) }</td>
                                    { for row.scores().into_iter().zip(PLATFORMS.iter()).map(|(score, (_, _, class))| {
                                        score_cell(score, *class)
                                    }) }
                                </tr>
                            }) }
                        </tbody>
                    </table>
                </div>
            </Reveal>

            <Reveal delay_ms={400} class={classes!("block")}>
                { block_title(None, "Recommended Migration Options") }
                <div class="grid cols-2 wide-gap">
                    { for MIGRATION_OPTIONS.iter().enumerate().map(|(i, option)| html! {
                        <Reveal delay_ms={stagger(i)} class={classes!("card", "gradient-positive")}>
                            <div class="card-head">
                                { Icon::CheckCircle.html("icon-lg positive") }
                                <h4>{ option.platform }</h4>
                            </div>
                            { icon_list(Icon::CheckCircle, "icon-sm positive", &option.advantages) }
                            <div class="panel">
                                <span class="positive strong">{"Best For: "}</span>
                                <span>{ option.best_for }</span>
                            </div>
                        </Reveal>
                    }) }
                </div>
            </Reveal>

            <Reveal delay_ms={500} class={classes!("card", "gradient", "block")}>
                { block_title(None, "Seamless Migration Strategy") }
                <div class="grid cols-3">
                    { for MIGRATION_STEPS.iter().enumerate().map(|(i, (title, text))| html! {
                        <div class="centered">
                            { step_number(i + 1) }
                            <h4>{ *title }</h4>
                            <p class="muted small">{ *text }</p>
                        </div>
                    }) }
                </div>
            </Reveal>

            <Reveal delay_ms={600} class={classes!("card", "subtle", "centered")}>
                { Icon::TrendingUp.html("icon-xxl") }
                <h3>{"Investment Justification"}</h3>
                <p class="muted">
                    {"While migration requires upfront investment, the long-term benefits far outweigh costs:"}
                </p>
                <div class="grid cols-4 stats-positive">
                    { for ROI.iter().map(|(value, caption)| stat_tile(*value, *caption)) }
                </div>
            </Reveal>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn comparison_chart_is_drawable() {
        let chart = comparison_chart();
        assert_eq!(chart.validate(), Ok(()));
        assert_eq!(chart.y_upper(), 10.0);
        assert_eq!(
            chart.categories,
            vec!["SEO Control", "Page Speed", "Scalability", "Customization", "Multi-location", "Design"]
        );
    }

    #[test]
    fn chart_series_follow_the_table() {
        let chart = comparison_chart();
        let names: Vec<_> = chart.series.iter().map(|series| series.name).collect();
        assert_eq!(names, vec!["Wix", "WordPress", "Webflow"]);
        assert_eq!(chart.series[0].values, vec![3.0, 4.0, 3.0, 4.0, 3.0, 5.0]);
        assert_eq!(chart.series[1].values, vec![10.0, 9.0, 10.0, 10.0, 10.0, 8.0]);
        assert_eq!(chart.series[2].values, vec![9.0, 10.0, 8.0, 9.0, 7.0, 10.0]);
    }
}
