use yew::prelude::*;

use crate::components::reveal::{stagger, Motion, Reveal};
use crate::components::ui::{badge, block_title, icon_list, section_header, severity_tone, stat_tile, status_tone, Tone};
use crate::icons::Icon;

struct NextStep {
    action: &'static str,
    description: &'static str,
    timeline: &'static str,
    priority: &'static str,
    owner: &'static str,
}

const NEXT_STEPS: [NextStep; 4] = [
    NextStep {
        action: "Conduct Full SEO Audit",
        description: "Comprehensive technical SEO audit and fix critical issues",
        timeline: "Week 1-2",
        priority: "Critical",
        owner: "SEO Specialist",
    },
    NextStep {
        action: "Optimize Google Business Profiles",
        description: "Create and optimize GBP listings for all target locations",
        timeline: "Week 1-3",
        priority: "High",
        owner: "Local SEO Manager",
    },
    NextStep {
        action: "Launch Pilot Content Campaign",
        description: "Create and publish content featuring Jordan and Kitz",
        timeline: "Week 2-4",
        priority: "High",
        owner: "Content Manager",
    },
    NextStep {
        action: "Build Vendor Partnerships",
        description: "Establish partnerships with local event vendors and planners",
        timeline: "Week 3-6",
        priority: "Medium",
        owner: "Business Development",
    },
];

struct Phase {
    name: &'static str,
    duration: &'static str,
    objectives: [&'static str; 3],
    deliverables: [&'static str; 4],
}

const PHASES: [Phase; 3] = [
    Phase {
        name: "Phase 1: Foundation",
        duration: "Months 1-2",
        objectives: [
            "Technical SEO optimization",
            "Local search presence",
            "Content strategy launch",
        ],
        deliverables: [
            "SEO audit report",
            "Optimized website",
            "GBP optimization",
            "Initial content pieces",
        ],
    },
    Phase {
        name: "Phase 2: Content & Authority",
        duration: "Months 2-4",
        objectives: [
            "Content marketing scaling",
            "Social media growth",
            "Local backlink building",
        ],
        deliverables: [
            "Blog content library",
            "Social media presence",
            "Local partnerships",
            "Video content",
        ],
    },
    Phase {
        name: "Phase 3: Growth & Optimization",
        duration: "Months 4-6",
        objectives: [
            "Package optimization",
            "Market expansion",
            "Performance optimization",
        ],
        deliverables: [
            "Combined packages",
            "New market entry",
            "Optimized campaigns",
            "Growth metrics",
        ],
    },
];

/// (period, focus, status)
const TIMELINE: [(&str, &str, &str); 5] = [
    ("Week 1-2", "SEO Audit & Technical Fixes", "immediate"),
    ("Week 3-4", "Local SEO & Content Launch", "immediate"),
    ("Week 5-8", "Content Scaling & Social Media", "short-term"),
    ("Week 9-12", "Partnership Building & Package Development", "short-term"),
    ("Month 4-6", "Market Expansion & Optimization", "long-term"),
];

/// (factor, importance, description)
const SUCCESS_FACTORS: [(&str, &str, &str); 4] = [
    (
        "Consistent Content Creation",
        "Critical",
        "Regular, high-quality content featuring our unique services and team",
    ),
    (
        "Local Community Engagement",
        "High",
        "Active participation in local events and vendor networks",
    ),
    (
        "Data-Driven Optimization",
        "High",
        "Regular analysis and optimization based on performance metrics",
    ),
    (
        "Brand Differentiation",
        "Medium",
        "Consistent messaging around integrated services and expert pilots",
    ),
];

const COMMITMENTS: [(&str, &str); 3] = [
    ("6 Months", "Implementation Timeline"),
    ("300%", "Target ROI"),
    ("5 Markets", "Geographic Expansion"),
];

pub fn render() -> Html {
    html! { <ActionPlan /> }
}

#[function_component(ActionPlan)]
pub fn action_plan() -> Html {
    html! {
        <div class="section-inner">
            { section_header(
                "Action Plan & Implementation",
                "Strategic roadmap with clear timelines, responsibilities, and success metrics.",
            ) }

            <div class="block">
                { block_title(Some(Icon::CheckSquare), "Immediate Next Steps") }
                <div class="stack">
                    { for NEXT_STEPS.iter().enumerate().map(|(i, step)| html! {
                        <Reveal from={Motion::FROM_LEFT} delay_ms={stagger(i)} class={classes!("card")}>
                            <div class="card-head spread">
                                <h4>{ step.action }</h4>
                                <div class="badge-row">
                                    { badge(step.priority, severity_tone(step.priority)) }
                                    { badge(step.timeline, Tone::Info) }
                                </div>
                            </div>
                            <p class="muted">{ step.description }</p>
                            <div class="impact-line accent">
                                { Icon::Users.html("icon-sm") }
                                <span>{ format!("Owner: {}", step.owner) }</span>
                            </div>
                        </Reveal>
                    }) }
                </div>
            </div>

            <div class="block">
                { block_title(None, "Implementation Phases") }
                <div class="stack wide-gap">
                    { for PHASES.iter().enumerate().map(|(i, phase)| html! {
                        <Reveal delay_ms={stagger(i)} class={classes!("card", "gradient")}>
                            <div class="card-head spread">
                                <h4>{ phase.name }</h4>
                                <span class="pill">{ phase.duration }</span>
                            </div>
                            <div class="grid cols-2 wide-gap">
                                <div>
                                    <h5>{"Key Objectives"}</h5>
                                    { icon_list(Icon::Target, "icon-sm positive", &phase.objectives) }
                                </div>
                                <div>
                                    <h5>{"Key Deliverables"}</h5>
                                    { icon_list(Icon::CheckSquare, "icon-sm accent", &phase.deliverables) }
                                </div>
                            </div>
                        </Reveal>
                    }) }
                </div>
            </div>

            <Reveal delay_ms={300} class={classes!("block")}>
                { block_title(Some(Icon::Calendar), "Implementation Timeline") }
                <div class="card stack">
                    { for TIMELINE.iter().enumerate().map(|(i, (period, focus, status))| html! {
                        <Reveal from={Motion::FROM_LEFT} delay_ms={stagger(i)} class={classes!("panel", "row-card")}>
                            <span class={classes!("status-dot", status_tone(status).class())}></span>
                            <div class="grow spread">
                                <span class="strong">{ *period }</span>
                                <span class="muted">{ *focus }</span>
                            </div>
                        </Reveal>
                    }) }
                </div>
            </Reveal>

            <Reveal delay_ms={400} class={classes!("card", "block")}>
                { block_title(None, "Critical Success Factors") }
                <div class="grid cols-2">
                    { for SUCCESS_FACTORS.iter().enumerate().map(|(i, (factor, importance, description))| html! {
                        <Reveal delay_ms={stagger(i)} class={classes!("panel")}>
                            <div class="card-head spread">
                                <h4>{ *factor }</h4>
                                { badge(*importance, severity_tone(importance)) }
                            </div>
                            <p class="muted">{ *description }</p>
                        </Reveal>
                    }) }
                </div>
            </Reveal>

            <Reveal delay_ms={500} class={classes!("banner", "gradient-strong", "cta")}>
                { Icon::TrendingUp.html("icon-hero") }
                <h3>{"Ready to Transform Your Digital Presence?"}</h3>
                <p>
                    {"This comprehensive strategy provides the roadmap to establish Pose Photobooths as the \
                      premier event media solution in Vancouver. Success requires commitment to consistent \
                      execution and data-driven optimization."}
                </p>
                <div class="cta-row">
                    { for COMMITMENTS.iter().map(|(value, caption)| stat_tile(*value, *caption)) }
                </div>
            </Reveal>
        </div>
    }
}
