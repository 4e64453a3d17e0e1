use yew::prelude::*;

/// Glyphs used across the deck. Outline style on a 24x24 grid, stroked with
/// `currentColor` so the surrounding text color applies.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Icon {
    AlertTriangle,
    Award,
    BarChart,
    Briefcase,
    Calendar,
    Camera,
    CheckCircle,
    CheckSquare,
    DollarSign,
    Facebook,
    FileText,
    Globe,
    Instagram,
    Link,
    Linkedin,
    Lock,
    MapPin,
    Package,
    Search,
    Settings,
    Star,
    Target,
    TrendingUp,
    Users,
    Video,
    XCircle,
    Zap,
}

enum Shape {
    Path(&'static str),
    Polyline(&'static str),
    Polygon(&'static str),
    Circle(f32, f32, f32),
    Line(f32, f32, f32, f32),
    Rect { x: f32, y: f32, w: f32, h: f32, rx: f32 },
}

impl Icon {
    pub const ALL: [Icon; 27] = [
        Icon::AlertTriangle,
        Icon::Award,
        Icon::BarChart,
        Icon::Briefcase,
        Icon::Calendar,
        Icon::Camera,
        Icon::CheckCircle,
        Icon::CheckSquare,
        Icon::DollarSign,
        Icon::Facebook,
        Icon::FileText,
        Icon::Globe,
        Icon::Instagram,
        Icon::Link,
        Icon::Linkedin,
        Icon::Lock,
        Icon::MapPin,
        Icon::Package,
        Icon::Search,
        Icon::Settings,
        Icon::Star,
        Icon::Target,
        Icon::TrendingUp,
        Icon::Users,
        Icon::Video,
        Icon::XCircle,
        Icon::Zap,
    ];

    pub fn token(self) -> &'static str {
        match self {
            Icon::AlertTriangle => "alert-triangle",
            Icon::Award => "award",
            Icon::BarChart => "bar-chart",
            Icon::Briefcase => "briefcase",
            Icon::Calendar => "calendar",
            Icon::Camera => "camera",
            Icon::CheckCircle => "check-circle",
            Icon::CheckSquare => "check-square",
            Icon::DollarSign => "dollar-sign",
            Icon::Facebook => "facebook",
            Icon::FileText => "file-text",
            Icon::Globe => "globe",
            Icon::Instagram => "instagram",
            Icon::Link => "link",
            Icon::Linkedin => "linkedin",
            Icon::Lock => "lock",
            Icon::MapPin => "map-pin",
            Icon::Package => "package",
            Icon::Search => "search",
            Icon::Settings => "settings",
            Icon::Star => "star",
            Icon::Target => "target",
            Icon::TrendingUp => "trending-up",
            Icon::Users => "users",
            Icon::Video => "video",
            Icon::XCircle => "x-circle",
            Icon::Zap => "zap",
        }
    }

    /// Resolves a token such as `"map-pin"`. Unknown tokens give `None`.
    pub fn from_token(token: &str) -> Option<Icon> {
        Icon::ALL.iter().copied().find(|icon| icon.token() == token)
    }

    fn shapes(self) -> &'static [Shape] {
        use Shape::*;
        match self {
            Icon::AlertTriangle => &[
                Path("M10.29 3.86L1.82 18a2 2 0 0 0 1.71 3h16.94a2 2 0 0 0 1.71-3L13.71 3.86a2 2 0 0 0-3.42 0z"),
                Line(12.0, 9.0, 12.0, 13.0),
                Line(12.0, 17.0, 12.01, 17.0),
            ],
            Icon::Award => &[
                Circle(12.0, 8.0, 7.0),
                Polyline("8.21 13.89 7 23 12 20 17 23 15.79 13.88"),
            ],
            Icon::BarChart => &[
                Line(12.0, 20.0, 12.0, 10.0),
                Line(18.0, 20.0, 18.0, 4.0),
                Line(6.0, 20.0, 6.0, 16.0),
            ],
            Icon::Briefcase => &[
                Rect { x: 2.0, y: 7.0, w: 20.0, h: 14.0, rx: 2.0 },
                Path("M16 21V5a2 2 0 0 0-2-2h-4a2 2 0 0 0-2 2v16"),
            ],
            Icon::Calendar => &[
                Rect { x: 3.0, y: 4.0, w: 18.0, h: 18.0, rx: 2.0 },
                Line(16.0, 2.0, 16.0, 6.0),
                Line(8.0, 2.0, 8.0, 6.0),
                Line(3.0, 10.0, 21.0, 10.0),
            ],
            Icon::Camera => &[
                Path("M23 19a2 2 0 0 1-2 2H3a2 2 0 0 1-2-2V8a2 2 0 0 1 2-2h4l2-3h6l2 3h4a2 2 0 0 1 2 2z"),
                Circle(12.0, 13.0, 4.0),
            ],
            Icon::CheckCircle => &[
                Path("M22 11.08V12a10 10 0 1 1-5.93-9.14"),
                Polyline("22 4 12 14.01 9 11.01"),
            ],
            Icon::CheckSquare => &[
                Polyline("9 11 12 14 22 4"),
                Path("M21 12v7a2 2 0 0 1-2 2H5a2 2 0 0 1-2-2V5a2 2 0 0 1 2-2h11"),
            ],
            Icon::DollarSign => &[
                Line(12.0, 1.0, 12.0, 23.0),
                Path("M17 5H9.5a3.5 3.5 0 0 0 0 7h5a3.5 3.5 0 0 1 0 7H6"),
            ],
            Icon::Facebook => &[Path(
                "M18 2h-3a5 5 0 0 0-5 5v3H7v4h3v8h4v-8h3l1-4h-4V7a1 1 0 0 1 1-1h3z",
            )],
            Icon::FileText => &[
                Path("M14 2H6a2 2 0 0 0-2 2v16a2 2 0 0 0 2 2h12a2 2 0 0 0 2-2V8z"),
                Polyline("14 2 14 8 20 8"),
                Line(16.0, 13.0, 8.0, 13.0),
                Line(16.0, 17.0, 8.0, 17.0),
                Polyline("10 9 9 9 8 9"),
            ],
            Icon::Globe => &[
                Circle(12.0, 12.0, 10.0),
                Line(2.0, 12.0, 22.0, 12.0),
                Path("M12 2a15.3 15.3 0 0 1 4 10 15.3 15.3 0 0 1-4 10 15.3 15.3 0 0 1-4-10 15.3 15.3 0 0 1 4-10z"),
            ],
            Icon::Instagram => &[
                Rect { x: 2.0, y: 2.0, w: 20.0, h: 20.0, rx: 5.0 },
                Path("M16 11.37A4 4 0 1 1 12.63 8 4 4 0 0 1 16 11.37z"),
                Line(17.5, 6.5, 17.51, 6.5),
            ],
            Icon::Link => &[
                Path("M10 13a5 5 0 0 0 7.54.54l3-3a5 5 0 0 0-7.07-7.07l-1.72 1.71"),
                Path("M14 11a5 5 0 0 0-7.54-.54l-3 3a5 5 0 0 0 7.07 7.07l1.71-1.71"),
            ],
            Icon::Linkedin => &[
                Path("M16 8a6 6 0 0 1 6 6v7h-4v-7a2 2 0 0 0-2-2 2 2 0 0 0-2 2v7h-4v-7a6 6 0 0 1 6-6z"),
                Rect { x: 2.0, y: 9.0, w: 4.0, h: 12.0, rx: 0.0 },
                Circle(4.0, 4.0, 2.0),
            ],
            Icon::Lock => &[
                Rect { x: 3.0, y: 11.0, w: 18.0, h: 11.0, rx: 2.0 },
                Path("M7 11V7a5 5 0 0 1 10 0v4"),
            ],
            Icon::MapPin => &[
                Path("M21 10c0 7-9 13-9 13s-9-6-9-13a9 9 0 0 1 18 0z"),
                Circle(12.0, 10.0, 3.0),
            ],
            Icon::Package => &[
                Line(16.5, 9.4, 7.5, 4.21),
                Path("M21 16V8a2 2 0 0 0-1-1.73l-7-4a2 2 0 0 0-2 0l-7 4A2 2 0 0 0 3 8v8a2 2 0 0 0 1 1.73l7 4a2 2 0 0 0 2 0l7-4A2 2 0 0 0 21 16z"),
                Polyline("3.27 6.96 12 12.01 20.73 6.96"),
                Line(12.0, 22.08, 12.0, 12.0),
            ],
            Icon::Search => &[Circle(11.0, 11.0, 8.0), Line(21.0, 21.0, 16.65, 16.65)],
            Icon::Settings => &[
                Circle(12.0, 12.0, 3.0),
                Path("M19.4 15a1.65 1.65 0 0 0 .33 1.82l.06.06a2 2 0 1 1-2.83 2.83l-.06-.06a1.65 1.65 0 0 0-1.82-.33 1.65 1.65 0 0 0-1 1.51V21a2 2 0 1 1-4 0v-.09A1.65 1.65 0 0 0 9 19.4a1.65 1.65 0 0 0-1.82.33l-.06.06a2 2 0 1 1-2.83-2.83l.06-.06a1.65 1.65 0 0 0 .33-1.82 1.65 1.65 0 0 0-1.51-1H3a2 2 0 1 1 0-4h.09A1.65 1.65 0 0 0 4.6 9a1.65 1.65 0 0 0-.33-1.82l-.06-.06a2 2 0 1 1 2.83-2.83l.06.06a1.65 1.65 0 0 0 1.82.33H9a1.65 1.65 0 0 0 1-1.51V3a2 2 0 1 1 4 0v.09a1.65 1.65 0 0 0 1 1.51 1.65 1.65 0 0 0 1.82-.33l.06-.06a2 2 0 1 1 2.83 2.83l-.06.06a1.65 1.65 0 0 0-.33 1.82V9a1.65 1.65 0 0 0 1.51 1H21a2 2 0 1 1 0 4h-.09a1.65 1.65 0 0 0-1.51 1z"),
            ],
            Icon::Star => &[Polygon(
                "12 2 15.09 8.26 22 9.27 17 14.14 18.18 21.02 12 17.77 5.82 21.02 7 14.14 2 9.27 8.91 8.26 12 2",
            )],
            Icon::Target => &[
                Circle(12.0, 12.0, 10.0),
                Circle(12.0, 12.0, 6.0),
                Circle(12.0, 12.0, 2.0),
            ],
            Icon::TrendingUp => &[
                Polyline("23 6 13.5 15.5 8.5 10.5 1 18"),
                Polyline("17 6 23 6 23 12"),
            ],
            Icon::Users => &[
                Path("M17 21v-2a4 4 0 0 0-4-4H5a4 4 0 0 0-4 4v2"),
                Circle(9.0, 7.0, 4.0),
                Path("M23 21v-2a4 4 0 0 0-3-3.87"),
                Path("M16 3.13a4 4 0 0 1 0 7.75"),
            ],
            Icon::Video => &[
                Polygon("23 7 16 12 23 17 23 7"),
                Rect { x: 1.0, y: 5.0, w: 15.0, h: 14.0, rx: 2.0 },
            ],
            Icon::XCircle => &[
                Circle(12.0, 12.0, 10.0),
                Line(15.0, 9.0, 9.0, 15.0),
                Line(9.0, 9.0, 15.0, 15.0),
            ],
            Icon::Zap => &[Polygon("13 2 3 14 12 14 11 22 21 10 12 10 13 2")],
        }
    }

    pub fn html(self, class: &'static str) -> Html {
        html! {
            <svg
                class={classes!("icon", format!("icon-{}", self.token()), class)}
                xmlns="http://www.w3.org/2000/svg"
                viewBox="0 0 24 24"
                fill="none"
                stroke="currentColor"
                stroke-width="2"
                stroke-linecap="round"
                stroke-linejoin="round"
                aria-hidden="true"
            >
                { for self.shapes().iter().map(shape_html) }
            </svg>
        }
    }
}

fn shape_html(shape: &Shape) -> Html {
    match *shape {
        Shape::Path(d) => html! { <path d={d} /> },
        Shape::Polyline(points) => html! { <polyline points={points} /> },
        Shape::Polygon(points) => html! { <polygon points={points} /> },
        Shape::Circle(cx, cy, r) => html! {
            <circle cx={cx.to_string()} cy={cy.to_string()} r={r.to_string()} />
        },
        Shape::Line(x1, y1, x2, y2) => html! {
            <line x1={x1.to_string()} y1={y1.to_string()} x2={x2.to_string()} y2={y2.to_string()} />
        },
        Shape::Rect { x, y, w, h, rx } => html! {
            <rect
                x={x.to_string()}
                y={y.to_string()}
                width={w.to_string()}
                height={h.to_string()}
                rx={rx.to_string()}
            />
        },
    }
}

/// Renders the glyph if there is one; a missing icon leaves an empty slot.
pub fn glyph(icon: Option<Icon>, class: &'static str) -> Html {
    match icon {
        Some(icon) => icon.html(class),
        None => html! {},
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn every_token_round_trips() {
        for icon in Icon::ALL {
            assert_eq!(Icon::from_token(icon.token()), Some(icon));
        }
    }

    #[test]
    fn tokens_are_unique() {
        let tokens: HashSet<_> = Icon::ALL.iter().map(|icon| icon.token()).collect();
        assert_eq!(tokens.len(), Icon::ALL.len());
    }

    #[test]
    fn unknown_token_resolves_to_nothing() {
        assert_eq!(Icon::from_token("bar-chart-3"), None);
        assert_eq!(Icon::from_token(""), None);
    }

    #[test]
    fn every_icon_has_shapes() {
        for icon in Icon::ALL {
            assert!(!icon.shapes().is_empty(), "{} has no shapes", icon.token());
        }
    }
}
