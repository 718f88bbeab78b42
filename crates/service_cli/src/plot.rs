//! Log-log error grid rendering.
//!
//! One figure, two panels per scenario: Delta errors on the left, Gamma
//! errors on the right, one row per scenario. Every panel plots its error
//! columns against `h_rel` on log-log axes with markers, a light grid and a
//! legend. Output goes through plotters' bitmap backend as a PNG that
//! replaces any existing file at the configured path.

use adapter_loader::{ErrorColumn, Greek};
use infra_config::FigureConfig;
use plotters::coord::Shift;
use plotters::prelude::*;
use thiserror::Error;
use tracing::{debug, info, warn};

use crate::scenario::Scenario;

/// Errors that can occur during plot generation
#[derive(Error, Debug)]
pub enum PlotError {
    #[error("Failed to create drawing area: {0}")]
    DrawingArea(String),

    #[error("Failed to configure chart: {0}")]
    ChartConfig(String),

    #[error("Failed to draw chart elements: {0}")]
    Drawing(String),

    #[error("Invalid data: {0}")]
    InvalidData(String),
}

type Result<T> = core::result::Result<T, PlotError>;

const X_LABEL: &str = "Relative Step Size (h_rel)";
const Y_LABEL: &str = "Absolute Error";

const SERIES_OPACITY: f64 = 0.7;
const GRID_OPACITY: f64 = 0.3;

// Relative share of each log axis added on both sides of the data.
const LOG_MARGIN: f64 = 0.05;

/// Axis range of a panel with nothing to draw, on both axes.
pub const EMPTY_AXIS_RANGE: (f64, f64) = (1e-16, 1.0);

// Share of the plotting area a legend box is assumed to cover, per axis.
const LEGEND_BOX: (f64, f64) = (0.4, 0.35);

// Font sizes in points.
const TITLE_PT: f64 = 16.0;
const PANEL_TITLE_PT: f64 = 11.0;
const AXIS_LABEL_PT: f64 = 10.0;
const TICK_LABEL_PT: f64 = 9.0;
const LEGEND_PT: f64 = 9.0;

const SERIES_COLORS: [RGBColor; 3] = [
    RGBColor(31, 119, 180),
    RGBColor(255, 127, 14),
    RGBColor(44, 160, 44),
];

/// Point marker drawn at every sample of a series.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Marker {
    Circle,
    Square,
    Triangle,
}

impl Marker {
    /// Marker of the `index`-th series of a panel
    pub fn for_series(index: usize) -> Self {
        match index % 3 {
            0 => Marker::Circle,
            1 => Marker::Square,
            _ => Marker::Triangle,
        }
    }
}

/// Corner of a panel the legend is drawn in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LegendCorner {
    UpperRight,
    UpperLeft,
    LowerLeft,
    LowerRight,
}

impl LegendCorner {
    /// Corners in order of preference when equally crowded.
    pub const ALL: [LegendCorner; 4] = [
        LegendCorner::UpperRight,
        LegendCorner::UpperLeft,
        LegendCorner::LowerLeft,
        LegendCorner::LowerRight,
    ];

    fn position(self) -> SeriesLabelPosition {
        match self {
            LegendCorner::UpperRight => SeriesLabelPosition::UpperRight,
            LegendCorner::UpperLeft => SeriesLabelPosition::UpperLeft,
            LegendCorner::LowerLeft => SeriesLabelPosition::LowerLeft,
            LegendCorner::LowerRight => SeriesLabelPosition::LowerRight,
        }
    }

    /// Whether the point at `(u, v)`, in unit axis coordinates, lies under a
    /// legend box in this corner.
    fn covers(self, u: f64, v: f64) -> bool {
        let (w, h) = LEGEND_BOX;
        let in_x = match self {
            LegendCorner::UpperRight | LegendCorner::LowerRight => u >= 1.0 - w,
            LegendCorner::UpperLeft | LegendCorner::LowerLeft => u <= w,
        };
        let in_y = match self {
            LegendCorner::UpperRight | LegendCorner::UpperLeft => v >= 1.0 - h,
            LegendCorner::LowerLeft | LegendCorner::LowerRight => v <= h,
        };
        in_x && in_y
    }
}

/// One plotted error column.
#[derive(Debug, Clone, PartialEq)]
pub struct SeriesSpec {
    pub column: ErrorColumn,
    pub label: &'static str,
    pub marker: Marker,
    /// `(h_rel, error)` pairs that can be drawn on log axes
    pub points: Vec<(f64, f64)>,
}

/// One chart of the grid.
#[derive(Debug, Clone, PartialEq)]
pub struct PanelSpec {
    pub title: String,
    pub greek: Greek,
    pub series: Vec<SeriesSpec>,
}

impl PanelSpec {
    /// Panel plotting every `greek` column of a scenario.
    ///
    /// Samples with a zero, negative or non-finite coordinate are dropped:
    /// a log axis cannot place them.
    pub fn for_scenario(scenario: &Scenario, greek: Greek) -> Self {
        let series = ErrorColumn::for_greek(greek)
            .enumerate()
            .map(|(index, column)| SeriesSpec {
                column,
                label: column.legend_label(),
                marker: Marker::for_series(index),
                points: scenario
                    .table
                    .series(column)
                    .filter(|&(x, y)| is_log_drawable(x) && is_log_drawable(y))
                    .collect(),
            })
            .collect();

        Self {
            title: format!("{}: {} Errors", scenario.label, greek),
            greek,
            series,
        }
    }

    /// Log-padded `(x_range, y_range)` spanning every drawable point.
    ///
    /// A panel without drawable points gets `EMPTY_AXIS_RANGE` on both axes.
    pub fn axis_ranges(&self) -> ((f64, f64), (f64, f64)) {
        let points = self.series.iter().flat_map(|s| s.points.iter());
        let mut bounds: Option<(f64, f64, f64, f64)> = None;
        for &(x, y) in points {
            bounds = Some(match bounds {
                None => (x, x, y, y),
                Some((x_lo, x_hi, y_lo, y_hi)) => {
                    (x_lo.min(x), x_hi.max(x), y_lo.min(y), y_hi.max(y))
                }
            });
        }

        match bounds {
            Some((x_lo, x_hi, y_lo, y_hi)) => {
                (log_padded_range(x_lo, x_hi), log_padded_range(y_lo, y_hi))
            }
            None => (EMPTY_AXIS_RANGE, EMPTY_AXIS_RANGE),
        }
    }

    /// Whether any series has a point to draw
    pub fn has_points(&self) -> bool {
        self.series.iter().any(|s| !s.points.is_empty())
    }

    /// Least crowded legend corner for the given axis ranges.
    pub fn legend_corner(&self, x_range: (f64, f64), y_range: (f64, f64)) -> LegendCorner {
        let unit: Vec<(f64, f64)> = self
            .series
            .iter()
            .flat_map(|s| s.points.iter())
            .map(|&(x, y)| (log_fraction(x, x_range), log_fraction(y, y_range)))
            .collect();

        LegendCorner::ALL
            .into_iter()
            .min_by_key(|corner| unit.iter().filter(|&&(u, v)| corner.covers(u, v)).count())
            .unwrap_or(LegendCorner::UpperRight)
    }
}

// Position of `value` along a log axis, 0 at the low end and 1 at the high end.
fn log_fraction(value: f64, (lo, hi): (f64, f64)) -> f64 {
    (value / lo).log10() / (hi / lo).log10()
}

fn is_log_drawable(value: f64) -> bool {
    value.is_finite() && value > 0.0
}

/// Widen `[lo, hi]` by `LOG_MARGIN` of its span in log space; a single value
/// becomes the decade on either side of it.
pub fn log_padded_range(lo: f64, hi: f64) -> (f64, f64) {
    if lo >= hi {
        return (lo / 10.0, hi * 10.0);
    }
    let pad = 10f64.powf((hi / lo).log10() * LOG_MARGIN);
    (lo / pad, hi * pad)
}

/// Build the panels of the grid in row-major order:
/// `[s1 Delta, s1 Gamma, s2 Delta, s2 Gamma, ...]`.
pub fn build_panels(scenarios: &[Scenario]) -> Vec<PanelSpec> {
    scenarios
        .iter()
        .flat_map(|scenario| {
            Greek::ALL
                .into_iter()
                .map(move |greek| PanelSpec::for_scenario(scenario, greek))
        })
        .collect()
}

/// Render the error grid for `scenarios` to `figure.output_path`.
pub fn render_error_grid(scenarios: &[Scenario], figure: &FigureConfig) -> Result<()> {
    if scenarios.is_empty() {
        return Err(PlotError::InvalidData(
            "At least one scenario is required".to_string(),
        ));
    }

    let panels = build_panels(scenarios);
    for panel in panels.iter().filter(|p| !p.has_points()) {
        warn!(panel = %panel.title, "No drawable points, drawing empty axes");
    }

    let (width, height) = figure.pixel_size();
    debug!(width, height, panels = panels.len(), "Rendering error grid");

    let root = BitMapBackend::new(&figure.output_path, (width, height)).into_drawing_area();
    draw_error_grid(&root, &panels, scenarios.len(), figure)?;

    root.present()
        .map_err(|e| PlotError::Drawing(e.to_string()))?;

    info!(path = %figure.output_path.display(), "Error grid saved");
    Ok(())
}

/// Draw `panels` as a `rows x 2` grid on any plotters backend.
pub fn draw_error_grid<DB: DrawingBackend>(
    root: &DrawingArea<DB, Shift>,
    panels: &[PanelSpec],
    rows: usize,
    figure: &FigureConfig,
) -> Result<()> {
    let columns = Greek::ALL.len();
    if panels.len() != rows * columns {
        return Err(PlotError::InvalidData(format!(
            "Expected {} panels for a {}x{} grid, got {}",
            rows * columns,
            rows,
            columns,
            panels.len()
        )));
    }

    root.fill(&WHITE)
        .map_err(|e| PlotError::DrawingArea(e.to_string()))?;

    let title_font = ("sans-serif", figure.points_to_pixels(TITLE_PT))
        .into_font()
        .style(FontStyle::Bold);
    let body = root
        .titled(&figure.title, title_font)
        .map_err(|e| PlotError::DrawingArea(e.to_string()))?;

    let areas = body.split_evenly((rows, columns));
    for (area, panel) in areas.iter().zip(panels) {
        draw_panel(area, panel, figure)?;
    }
    Ok(())
}

fn draw_panel<DB: DrawingBackend>(
    area: &DrawingArea<DB, Shift>,
    panel: &PanelSpec,
    figure: &FigureConfig,
) -> Result<()> {
    let px = |points: f64| figure.points_to_pixels(points);
    let (x_range, y_range) = panel.axis_ranges();
    let ((x_lo, x_hi), (y_lo, y_hi)) = (x_range, y_range);

    let mut chart = ChartBuilder::on(area)
        .caption(
            &panel.title,
            ("sans-serif", px(PANEL_TITLE_PT))
                .into_font()
                .style(FontStyle::Bold),
        )
        .margin(px(6.0) as u32)
        .x_label_area_size(px(30.0) as u32)
        .y_label_area_size(px(48.0) as u32)
        .build_cartesian_2d((x_lo..x_hi).log_scale(), (y_lo..y_hi).log_scale())
        .map_err(|e| PlotError::ChartConfig(e.to_string()))?;

    let grid_width = px(0.8).max(1.0) as u32;
    chart
        .configure_mesh()
        .x_desc(X_LABEL)
        .y_desc(Y_LABEL)
        .axis_desc_style(("sans-serif", px(AXIS_LABEL_PT)))
        .label_style(("sans-serif", px(TICK_LABEL_PT)))
        .bold_line_style(BLACK.mix(GRID_OPACITY).stroke_width(grid_width))
        .light_line_style(BLACK.mix(GRID_OPACITY / 3.0).stroke_width(grid_width))
        .x_label_formatter(&|x| format!("{:.0e}", x))
        .y_label_formatter(&|y| format!("{:.0e}", y))
        .draw()
        .map_err(|e| PlotError::Drawing(e.to_string()))?;

    let line_width = px(1.5).max(1.0) as u32;
    let marker_size = px(3.0).max(2.0) as i32;
    let legend_half = px(10.0) as i32;

    for (index, series) in panel.series.iter().enumerate() {
        let style = SERIES_COLORS[index % SERIES_COLORS.len()]
            .mix(SERIES_OPACITY)
            .stroke_width(line_width);
        let fill = style.filled();
        let points = &series.points;

        chart
            .draw_series(LineSeries::new(points.iter().copied(), style))
            .map_err(|e| PlotError::Drawing(e.to_string()))?
            .label(series.label)
            .legend(move |(x, y)| {
                PathElement::new(vec![(x - legend_half, y), (x + legend_half, y)], style)
            });

        match series.marker {
            Marker::Circle => chart.draw_series(
                points
                    .iter()
                    .map(|&p| EmptyElement::at(p) + Circle::new((0, 0), marker_size, fill)),
            ),
            Marker::Square => chart.draw_series(points.iter().map(|&p| {
                EmptyElement::at(p)
                    + Rectangle::new(
                        [(-marker_size, -marker_size), (marker_size, marker_size)],
                        fill,
                    )
            })),
            Marker::Triangle => chart.draw_series(
                points
                    .iter()
                    .map(|&p| EmptyElement::at(p) + TriangleMarker::new((0, 0), marker_size, fill)),
            ),
        }
        .map_err(|e| PlotError::Drawing(e.to_string()))?;
    }

    chart
        .configure_series_labels()
        .label_font(("sans-serif", px(LEGEND_PT)))
        .background_style(WHITE.mix(0.8))
        .border_style(BLACK.mix(GRID_OPACITY))
        .position(panel.legend_corner(x_range, y_range).position())
        .draw()
        .map_err(|e| PlotError::Drawing(e.to_string()))?;

    Ok(())
}
