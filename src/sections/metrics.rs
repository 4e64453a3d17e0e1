use yew::prelude::*;

use crate::charts::{ChartCanvas, ChartConfig, Rgb, Series};
use crate::components::reveal::{stagger, Motion, Reveal};
use crate::components::ui::{badge, block_title, detail_row, dot_list, section_header, Tone};
use crate::config;
use crate::icons::Icon;

struct Kpi {
    icon: Icon,
    title: &'static str,
    description: &'static str,
    target: &'static str,
    measurement: &'static str,
}

const KPIS: [Kpi; 4] = [
    Kpi {
        icon: Icon::TrendingUp,
        title: "Organic Traffic Growth",
        description: "Track traffic increases for location-specific pages",
        target: "25% monthly growth",
        measurement: "Google Analytics",
    },
    Kpi {
        icon: Icon::Users,
        title: "Google Business Profile Leads",
        description: "Leads and bookings from local search",
        target: "50+ monthly leads",
        measurement: "GBP Insights",
    },
    Kpi {
        icon: Icon::Target,
        title: "Package Conversion Rates",
        description: "Conversion rates for bundled service packages",
        target: "15% conversion rate",
        measurement: "CRM Tracking",
    },
    Kpi {
        icon: Icon::DollarSign,
        title: "Campaign ROI",
        description: "ROI from paid search and social media campaigns",
        target: "300% ROI",
        measurement: "Attribution Tracking",
    },
];

struct TrackingMethod {
    area: &'static str,
    tools: &'static [&'static str],
    frequency: &'static str,
}

const TRACKING: [TrackingMethod; 4] = [
    TrackingMethod {
        area: "SEO Performance",
        tools: &["Google Analytics 4", "Google Search Console", "SEMrush"],
        frequency: "Weekly",
    },
    TrackingMethod {
        area: "Local Search",
        tools: &["Google Business Profile Insights", "Local Ranking Tools"],
        frequency: "Bi-weekly",
    },
    TrackingMethod {
        area: "Social Media",
        tools: &["Native Platform Analytics", "Social Media Management Tools"],
        frequency: "Weekly",
    },
    TrackingMethod {
        area: "Lead Generation",
        tools: &["CRM Integration", "Call Tracking", "Form Analytics"],
        frequency: "Daily",
    },
];

/// Six months of projected visits, compounding at 25% a month.
pub fn traffic_chart() -> ChartConfig {
    ChartConfig::new(
        "Projected Organic Traffic Growth",
        &["Jan", "Feb", "Mar", "Apr", "May", "Jun"],
    )
    .with_series(Series::line(
        "Organic Traffic",
        &[1200.0, 1500.0, 1875.0, 2344.0, 2930.0, 3663.0],
        Rgb::VIOLET,
        true,
    )
    .smoothed())
}

pub fn package_chart() -> ChartConfig {
    ChartConfig::new(
        "Service Package Performance",
        &["Photo Booth Only", "Drone Only", "Combined Package"],
    )
    .with_series(
        Series::bar("Conversion Rate", &[12.0, 8.0, 18.0], Rgb::BLUE)
            .per_point(&[Rgb::BLUE, Rgb::EMERALD, Rgb::VIOLET]),
    )
}

pub fn render() -> Html {
    html! { <Metrics /> }
}

#[function_component(Metrics)]
pub fn metrics() -> Html {
    html! {
        <div class="section-inner">
            { section_header(
                "Performance Metrics & KPIs",
                "Comprehensive tracking and measurement framework to monitor success and optimize performance.",
            ) }

            <div class="block">
                { block_title(None, "Key Performance Indicators") }
                <div class="grid cols-2 wide-gap">
                    { for KPIS.iter().enumerate().map(|(i, kpi)| html! {
                        <Reveal from={Motion::side(i)} delay_ms={stagger(i)} class={classes!("card", "row-card")}>
                            <div class="icon-disc">{ kpi.icon.html("icon-md") }</div>
                            <div class="grow">
                                <h4>{ kpi.title }</h4>
                                <p class="muted">{ kpi.description }</p>
                                { detail_row("Target:", kpi.target, "positive strong") }
                                { detail_row("Tracking:", kpi.measurement, "accent") }
                            </div>
                        </Reveal>
                    }) }
                </div>
            </div>

            <Reveal from={Motion::FADE} delay_ms={200} class={classes!("block")}>
                { block_title(None, "Performance Projections") }
                <div class="grid cols-2 wide-gap">
                    <div class="card">
                        <ChartCanvas chart={traffic_chart()} height={config::CHART_HEIGHT_COMPACT} />
                    </div>
                    <div class="card">
                        <ChartCanvas chart={package_chart()} height={config::CHART_HEIGHT_COMPACT} />
                    </div>
                </div>
            </Reveal>

            <Reveal delay_ms={300} class={classes!("card", "gradient", "block")}>
                { block_title(Some(Icon::BarChart), "Tracking & Measurement Framework") }
                <div class="grid cols-2">
                    { for TRACKING.iter().enumerate().map(|(i, method)| html! {
                        <Reveal delay_ms={stagger(i)} class={classes!("panel")}>
                            <div class="card-head spread">
                                <h4>{ method.area }</h4>
                                { badge(method.frequency, Tone::Info) }
                            </div>
                            { dot_list(method.tools) }
                        </Reveal>
                    }) }
                </div>
            </Reveal>

            <Reveal delay_ms={400} class={classes!("card", "subtle", "centered")}>
                { Icon::Target.html("icon-xxl") }
                <h3>{"Success Measurement Philosophy"}</h3>
                <p class="muted">
                    {"Our comprehensive measurement approach ensures every marketing dollar is accountable. \
                      By tracking both leading indicators (traffic, engagement) and lagging indicators \
                      (conversions, revenue), we can optimize strategies in real-time and demonstrate clear \
                      ROI on all marketing investments."}
                </p>
            </Reveal>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::charts::{SeriesColor, SeriesKind};

    #[test]
    fn traffic_chart_is_a_filled_line() {
        let chart = traffic_chart();
        assert_eq!(chart.validate(), Ok(()));
        assert_eq!(chart.series.len(), 1);
        assert_eq!(chart.series[0].kind, SeriesKind::Line { area: true, smooth: true });
        assert_eq!(chart.categories.len(), 6);
    }

    #[test]
    fn traffic_grows_every_month() {
        let chart = traffic_chart();
        let values = &chart.series[0].values;
        assert!(values.windows(2).all(|pair| pair[1] > pair[0]));
        // No fixed ceiling: the axis leaves headroom above the last month.
        assert!(chart.y_upper() > 3663.0);
    }

    #[test]
    fn package_bars_have_their_own_colors() {
        let chart = package_chart();
        assert_eq!(chart.validate(), Ok(()));
        assert_eq!(
            chart.series[0].colors,
            SeriesColor::PerPoint(vec![Rgb::BLUE, Rgb::EMERALD, Rgb::VIOLET])
        );
        assert_eq!(chart.series[0].values, vec![12.0, 8.0, 18.0]);
    }
}
