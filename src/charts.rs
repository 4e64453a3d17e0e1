use plotters::prelude::*;
use plotters_canvas::CanvasBackend;
use thiserror::Error;
use web_sys::HtmlCanvasElement;
use yew::prelude::*;

use crate::config;

/// Plain RGB triple so chart definitions stay independent of the drawing
/// library.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Rgb(pub u8, pub u8, pub u8);

impl Rgb {
    pub const RED: Rgb = Rgb(239, 68, 68);
    pub const GREEN: Rgb = Rgb(34, 197, 94);
    pub const EMERALD: Rgb = Rgb(16, 185, 129);
    pub const BLUE: Rgb = Rgb(59, 130, 246);
    pub const VIOLET: Rgb = Rgb(139, 92, 246);

    fn to_plotters(self) -> RGBColor {
        RGBColor(self.0, self.1, self.2)
    }
}

const BACKGROUND: RGBColor = RGBColor(36, 26, 72);
const CURVE_STEPS: usize = 12;
const FILL_BANDS: usize = 16;
const FILL_ALPHA_TOP: f64 = 0.35;
const FILL_ALPHA_BOTTOM: f64 = 0.02;

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum SeriesKind {
    Bar,
    /// `area` fills down to the axis with a fading tint, `smooth` draws a
    /// curve through the points instead of straight segments.
    Line { area: bool, smooth: bool },
}

#[derive(Clone, Debug, PartialEq)]
pub enum SeriesColor {
    Single(Rgb),
    /// One color per category, in category order.
    PerPoint(Vec<Rgb>),
}

#[derive(Clone, Debug, PartialEq)]
pub struct Series {
    pub name: &'static str,
    pub kind: SeriesKind,
    pub values: Vec<f64>,
    pub colors: SeriesColor,
}

impl Series {
    pub fn bar(name: &'static str, values: &[f64], color: Rgb) -> Self {
        Self {
            name,
            kind: SeriesKind::Bar,
            values: values.to_vec(),
            colors: SeriesColor::Single(color),
        }
    }

    pub fn line(name: &'static str, values: &[f64], color: Rgb, area: bool) -> Self {
        Self {
            name,
            kind: SeriesKind::Line { area, smooth: false },
            values: values.to_vec(),
            colors: SeriesColor::Single(color),
        }
    }

    pub fn smoothed(mut self) -> Self {
        if let SeriesKind::Line { area, .. } = self.kind {
            self.kind = SeriesKind::Line { area, smooth: true };
        }
        self
    }

    pub fn per_point(mut self, colors: &[Rgb]) -> Self {
        self.colors = SeriesColor::PerPoint(colors.to_vec());
        self
    }

    fn color_at(&self, index: usize) -> Rgb {
        match &self.colors {
            SeriesColor::Single(color) => *color,
            SeriesColor::PerPoint(colors) => colors.get(index).copied().unwrap_or(Rgb::VIOLET),
        }
    }
}

/// Category-axis chart: one x slot per category, values starting at zero.
#[derive(Clone, Debug, PartialEq)]
pub struct ChartConfig {
    pub title: &'static str,
    pub categories: Vec<&'static str>,
    pub series: Vec<Series>,
    pub y_max: Option<f64>,
}

#[derive(Error, Debug, PartialEq)]
pub enum ChartError {
    #[error("chart has no categories")]
    NoCategories,
    #[error("chart has no series")]
    NoSeries,
    #[error("series {series} has {found} values for {expected} categories")]
    SeriesLength {
        series: &'static str,
        expected: usize,
        found: usize,
    },
    #[error("series {0} does not have one color per category")]
    ColorCount(&'static str),
    #[error("series {0} has a negative or non-finite value")]
    InvalidValue(&'static str),
    #[error("canvas has no 2d context")]
    Canvas,
    #[error("drawing failed: {0}")]
    Draw(String),
}

impl ChartConfig {
    pub fn new(title: &'static str, categories: &[&'static str]) -> Self {
        Self {
            title,
            categories: categories.to_vec(),
            series: Vec::new(),
            y_max: None,
        }
    }

    pub fn with_series(mut self, series: Series) -> Self {
        self.series.push(series);
        self
    }

    pub fn with_y_max(mut self, y_max: f64) -> Self {
        self.y_max = Some(y_max);
        self
    }

    pub fn validate(&self) -> Result<(), ChartError> {
        if self.categories.is_empty() {
            return Err(ChartError::NoCategories);
        }
        if self.series.is_empty() {
            return Err(ChartError::NoSeries);
        }
        let expected = self.categories.len();
        for series in &self.series {
            if series.values.len() != expected {
                return Err(ChartError::SeriesLength {
                    series: series.name,
                    expected,
                    found: series.values.len(),
                });
            }
            if let SeriesColor::PerPoint(colors) = &series.colors {
                if colors.len() != expected {
                    return Err(ChartError::ColorCount(series.name));
                }
            }
            if series.values.iter().any(|v| !v.is_finite() || *v < 0.0) {
                return Err(ChartError::InvalidValue(series.name));
            }
        }
        Ok(())
    }

    /// Top of the value axis: the fixed maximum if given, otherwise the
    /// largest value plus 10% headroom.
    pub fn y_upper(&self) -> f64 {
        if let Some(max) = self.y_max {
            return max;
        }
        let largest = self
            .series
            .iter()
            .flat_map(|series| series.values.iter().copied())
            .fold(0.0_f64, f64::max);
        (largest * 1.1).max(1.0)
    }

    fn bar_count(&self) -> usize {
        self.series.iter().filter(|s| s.kind == SeriesKind::Bar).count()
    }
}

/// Horizontal extent of bar `bar_index` of `bar_count` in category slot
/// `category`. Bars of one slot share 80% of its width, centered on it.
pub fn bar_span(category: usize, bar_index: usize, bar_count: usize) -> (f64, f64) {
    let width = 0.8 / bar_count.max(1) as f64;
    let start = category as f64 - 0.4 + width * bar_index as f64;
    (start, start + width * 0.9)
}

/// Axis label for an x position; only slot centers get a category name.
pub fn category_label(categories: &[&str], x: f64) -> String {
    let slot = x.round();
    if (x - slot).abs() > 1e-6 || slot < 0.0 {
        return String::new();
    }
    categories
        .get(slot as usize)
        .map(|label| label.to_string())
        .unwrap_or_default()
}

/// Catmull-Rom curve through `points`, sampled `steps` times per segment.
/// Every input point is kept at index `i * steps` and values never dip
/// below zero.
pub fn smooth_points(points: &[(f64, f64)], steps: usize) -> Vec<(f64, f64)> {
    if points.len() < 2 || steps < 2 {
        return points.to_vec();
    }

    let last = points.len() - 1;
    let mut curve = Vec::with_capacity(last * steps + 1);
    for i in 0..last {
        let p0 = points[i.saturating_sub(1)];
        let p1 = points[i];
        let p2 = points[i + 1];
        let p3 = points[(i + 2).min(last)];
        for step in 0..steps {
            let t = step as f64 / steps as f64;
            let (t2, t3) = (t * t, t * t * t);
            let at = |a: f64, b: f64, c: f64, d: f64| {
                0.5 * (2.0 * b + (c - a) * t + (2.0 * a - 5.0 * b + 4.0 * c - d) * t2 + (3.0 * b - a - 3.0 * c + d) * t3)
            };
            curve.push((at(p0.0, p1.0, p2.0, p3.0), at(p0.1, p1.1, p2.1, p3.1).max(0.0)));
        }
    }
    curve.push(points[last]);
    curve
}

/// Splits the area under `points` into `bands` horizontal slices, bottom
/// first, each paired with its fill opacity. Opacity rises from the axis
/// toward the line, which reads as a vertical gradient.
pub fn fill_bands(points: &[(f64, f64)], bands: usize) -> Vec<(Vec<(f64, f64)>, f64)> {
    let bands = bands.max(1);
    (0..bands)
        .map(|band| {
            let lower = band as f64 / bands as f64;
            let upper = (band + 1) as f64 / bands as f64;
            let mut outline: Vec<(f64, f64)> = points.iter().map(|&(x, y)| (x, y * upper)).collect();
            outline.extend(points.iter().rev().map(|&(x, y)| (x, y * lower)));
            let alpha = FILL_ALPHA_BOTTOM + (FILL_ALPHA_TOP - FILL_ALPHA_BOTTOM) * upper;
            (outline, alpha)
        })
        .collect()
}

fn draw_error<E: std::fmt::Display>(err: E) -> ChartError {
    ChartError::Draw(err.to_string())
}

fn draw(canvas: HtmlCanvasElement, chart: &ChartConfig) -> Result<(), ChartError> {
    chart.validate()?;

    let backend = CanvasBackend::with_canvas_object(canvas).ok_or(ChartError::Canvas)?;
    let root = backend.into_drawing_area();
    root.fill(&BACKGROUND).map_err(draw_error)?;

    let slots = chart.categories.len();
    let categories = chart.categories.clone();

    let mut ctx = ChartBuilder::on(&root)
        .margin(16)
        .caption(chart.title, ("sans-serif", 20).into_font().color(&WHITE))
        .x_label_area_size(48)
        .y_label_area_size(56)
        .build_cartesian_2d(-0.5f64..(slots as f64 - 0.5), 0f64..chart.y_upper())
        .map_err(draw_error)?;

    ctx.configure_mesh()
        .disable_x_mesh()
        .bold_line_style(&WHITE.mix(0.1))
        .light_line_style(&TRANSPARENT)
        .axis_style(&WHITE.mix(0.6))
        .x_labels(slots)
        .x_label_formatter(&|x| category_label(&categories, *x))
        .y_label_formatter(&|y| format!("{:.0}", y))
        .label_style(("sans-serif", 12).into_font().color(&WHITE))
        .draw()
        .map_err(draw_error)?;

    let bar_count = chart.bar_count();
    let mut bar_index = 0;
    for series in &chart.series {
        let legend_color = series.color_at(0).to_plotters();
        match series.kind {
            SeriesKind::Bar => {
                let index = bar_index;
                bar_index += 1;
                ctx.draw_series(series.values.iter().enumerate().map(|(slot, value)| {
                    let (x0, x1) = bar_span(slot, index, bar_count);
                    Rectangle::new([(x0, 0.0), (x1, *value)], series.color_at(slot).to_plotters().filled())
                }))
                .map_err(draw_error)?
                .label(series.name)
                .legend(move |(x, y)| Rectangle::new([(x, y - 5), (x + 10, y + 5)], legend_color.filled()));
            }
            SeriesKind::Line { area, smooth } => {
                let points: Vec<(f64, f64)> = series
                    .values
                    .iter()
                    .enumerate()
                    .map(|(slot, value)| (slot as f64, *value))
                    .collect();
                let path = if smooth {
                    smooth_points(&points, CURVE_STEPS)
                } else {
                    points.clone()
                };
                if area {
                    ctx.draw_series(
                        fill_bands(&path, FILL_BANDS)
                            .into_iter()
                            .map(|(outline, alpha)| Polygon::new(outline, legend_color.mix(alpha).filled())),
                    )
                    .map_err(draw_error)?;
                }
                ctx.draw_series(LineSeries::new(path, legend_color.stroke_width(3)))
                    .map_err(draw_error)?
                    .label(series.name)
                    .legend(move |(x, y)| PathElement::new(vec![(x, y), (x + 12, y)], legend_color.stroke_width(3)));
                ctx.draw_series(points.iter().map(|point| Circle::new(*point, 4, legend_color.filled())))
                    .map_err(draw_error)?;
            }
        }
    }

    if chart.series.len() > 1 {
        ctx.configure_series_labels()
            .position(SeriesLabelPosition::UpperLeft)
            .label_font(("sans-serif", 12).into_font().color(&WHITE))
            .background_style(&BACKGROUND.mix(0.8))
            .border_style(&WHITE.mix(0.3))
            .draw()
            .map_err(draw_error)?;
    }

    root.present().map_err(draw_error)?;
    Ok(())
}

#[derive(Properties, PartialEq)]
pub struct ChartCanvasProps {
    pub chart: ChartConfig,
    #[prop_or(config::CHART_HEIGHT)]
    pub height: u32,
}

/// Draws a [`ChartConfig`] onto a canvas once mounted. Drawing problems are
/// logged and leave the canvas empty; the rest of the page is unaffected.
#[function_component(ChartCanvas)]
pub fn chart_canvas(props: &ChartCanvasProps) -> Html {
    let canvas_ref = use_node_ref();

    {
        let canvas_ref = canvas_ref.clone();
        let chart = props.chart.clone();
        let height = props.height;
        use_effect_with_deps(
            move |_| {
                match canvas_ref.cast::<HtmlCanvasElement>() {
                    Some(canvas) => {
                        canvas.set_width(config::CHART_WIDTH);
                        canvas.set_height(height);
                        if let Err(err) = draw(canvas, &chart) {
                            log::warn!("chart {:?} not drawn: {}", chart.title, err);
                        }
                    }
                    None => log::warn!("chart {:?} has no canvas", chart.title),
                }
                || ()
            },
            (props.chart.clone(), props.height),
        );
    }

    html! {
        <div class="chart">
            <canvas
                ref={canvas_ref}
                width={config::CHART_WIDTH.to_string()}
                height={props.height.to_string()}
                role="img"
                aria-label={props.chart.title}
            />
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn two_series() -> ChartConfig {
        ChartConfig::new("Scores", &["A", "B", "C"])
            .with_series(Series::bar("one", &[1.0, 2.0, 3.0], Rgb::RED))
            .with_series(Series::bar("two", &[3.0, 2.0, 1.0], Rgb::BLUE))
    }

    #[test]
    fn valid_config_passes() {
        assert_eq!(two_series().validate(), Ok(()));
    }

    #[test]
    fn series_length_must_match_categories() {
        let chart = ChartConfig::new("Short", &["A", "B"]).with_series(Series::bar("s", &[1.0], Rgb::RED));
        assert_eq!(
            chart.validate(),
            Err(ChartError::SeriesLength {
                series: "s",
                expected: 2,
                found: 1
            })
        );
    }

    #[test]
    fn per_point_colors_must_cover_every_category() {
        let chart = ChartConfig::new("Colors", &["A", "B"])
            .with_series(Series::bar("s", &[1.0, 2.0], Rgb::RED).per_point(&[Rgb::RED]));
        assert_eq!(chart.validate(), Err(ChartError::ColorCount("s")));
    }

    #[test]
    fn empty_and_negative_inputs_are_rejected() {
        assert_eq!(ChartConfig::new("Empty", &[]).validate(), Err(ChartError::NoCategories));
        assert_eq!(ChartConfig::new("No series", &["A"]).validate(), Err(ChartError::NoSeries));
        let negative = ChartConfig::new("Neg", &["A"]).with_series(Series::line("s", &[-1.0], Rgb::RED, false));
        assert_eq!(negative.validate(), Err(ChartError::InvalidValue("s")));
    }

    #[test]
    fn y_axis_headroom() {
        assert!((two_series().y_upper() - 3.3).abs() < 1e-9);
        assert_eq!(two_series().with_y_max(10.0).y_upper(), 10.0);
        let zeros = ChartConfig::new("Zero", &["A"]).with_series(Series::bar("s", &[0.0], Rgb::RED));
        assert_eq!(zeros.y_upper(), 1.0);
    }

    #[test]
    fn grouped_bars_stay_inside_their_slot() {
        for count in 1..=3 {
            for index in 0..count {
                let (x0, x1) = bar_span(2, index, count);
                assert!(x0 >= 1.6 - 1e-9 && x1 <= 2.4 + 1e-9, "{} {} -> {} {}", index, count, x0, x1);
                assert!(x0 < x1);
            }
        }
        let (_, first_end) = bar_span(0, 0, 3);
        let (second_start, _) = bar_span(0, 1, 3);
        assert!(first_end <= second_start);
    }

    #[test]
    fn labels_only_at_slot_centers() {
        let categories = ["Jan", "Feb"];
        assert_eq!(category_label(&categories, 0.0), "Jan");
        assert_eq!(category_label(&categories, 1.0), "Feb");
        assert_eq!(category_label(&categories, 0.5), "");
        assert_eq!(category_label(&categories, 2.0), "");
        assert_eq!(category_label(&categories, -0.5), "");
    }

    #[test]
    fn smoothed_curve_passes_through_every_point() {
        let points = [(0.0, 1200.0), (1.0, 1500.0), (2.0, 1875.0), (3.0, 2344.0)];
        let curve = smooth_points(&points, 8);
        assert_eq!(curve.len(), 3 * 8 + 1);
        for (i, point) in points.iter().enumerate() {
            let sampled = curve[i * 8];
            assert!((sampled.0 - point.0).abs() < 1e-9 && (sampled.1 - point.1).abs() < 1e-9);
        }
        assert_eq!(curve.first(), points.first());
        assert_eq!(curve.last(), points.last());
        assert!(curve.windows(2).all(|pair| pair[0].0 < pair[1].0));
    }

    #[test]
    fn smoothing_keeps_values_above_the_axis() {
        let curve = smooth_points(&[(0.0, 0.0), (1.0, 0.0), (2.0, 50.0), (3.0, 0.0)], 10);
        assert!(curve.iter().all(|&(_, y)| y >= 0.0));
    }

    #[test]
    fn too_few_points_are_left_alone() {
        assert_eq!(smooth_points(&[(0.0, 3.0)], 8), vec![(0.0, 3.0)]);
        assert_eq!(smooth_points(&[(0.0, 3.0), (1.0, 4.0)], 1), vec![(0.0, 3.0), (1.0, 4.0)]);
    }

    #[test]
    fn fill_fades_toward_the_axis() {
        let points = [(0.0, 10.0), (1.0, 20.0)];
        let bands = fill_bands(&points, 4);
        assert_eq!(bands.len(), 4);

        let (bottom, _) = &bands[0];
        assert!(bottom[2..].iter().all(|&(_, y)| y == 0.0));
        let (top, _) = &bands[3];
        assert_eq!(&top[..2], &points[..]);

        assert!(bands.windows(2).all(|pair| pair[0].1 < pair[1].1));
        assert!((bands[3].1 - FILL_ALPHA_TOP).abs() < 1e-9);
    }

    #[test]
    fn smoothing_applies_only_to_lines() {
        let line = Series::line("l", &[1.0], Rgb::RED, true).smoothed();
        assert_eq!(line.kind, SeriesKind::Line { area: true, smooth: true });
        assert_eq!(Series::bar("b", &[1.0], Rgb::RED).smoothed().kind, SeriesKind::Bar);
    }

    #[test]
    fn per_point_color_lookup() {
        let series = Series::bar("s", &[1.0, 2.0], Rgb::RED).per_point(&[Rgb::BLUE, Rgb::EMERALD]);
        assert_eq!(series.color_at(1), Rgb::EMERALD);
    }
}
