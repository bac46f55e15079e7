use tracing::debug;

use crate::error::ChartResult;
use crate::figure::{Axis, Figure, Line, Mode, Scatter, Trace};
use crate::types::{ChartData, Table};

use super::output::Export;
use super::styles::{apply_theme, legend_visible, palette_color, ChartStyle};

const LINE_WIDTH: f64 = 3.0;
const AREA_LINE_WIDTH: f64 = 0.1;
const STACK_GROUP: &str = "one";

/// Options for [`Plotter::plot_series`](super::Plotter::plot_series).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeriesOptions {
    pub style: ChartStyle,
    pub export: Export,
    pub xlabel: String,
    pub ylabel: String,
    /// Draw circle markers on every point.
    pub marker: bool,
    /// Ignored for single-series input, which never shows a legend.
    pub show_legend: bool,
}

impl Default for SeriesOptions {
    fn default() -> Self {
        Self {
            style: ChartStyle::default(),
            export: Export::default(),
            xlabel: "xlabel".to_string(),
            ylabel: "ylabel".to_string(),
            marker: false,
            show_legend: true,
        }
    }
}

/// Options for [`Plotter::plot_area`](super::Plotter::plot_area).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AreaOptions {
    pub style: ChartStyle,
    pub export: Export,
    pub xlabel: String,
    pub ylabel: String,
    pub show_legend: bool,
}

impl Default for AreaOptions {
    fn default() -> Self {
        Self {
            style: ChartStyle::default(),
            export: Export::default(),
            xlabel: "xlabel".to_string(),
            ylabel: "ylabel".to_string(),
            show_legend: true,
        }
    }
}

/// One trace per column, colored by column position.
fn column_traces(table: &Table, shape: impl Fn(Scatter) -> Scatter) -> Vec<Trace> {
    table
        .columns()
        .enumerate()
        .map(|(i, (name, values))| {
            Trace::Scatter(shape(Scatter {
                x: table.index().to_vec(),
                y: values.to_vec(),
                name: Some(name.to_string()),
                line: Some(Line::new(palette_color(i), LINE_WIDTH)),
                ..Scatter::default()
            }))
        })
        .collect()
}

fn finish_layout(
    figure: &mut Figure,
    style: &ChartStyle,
    xlabel: &str,
    ylabel: &str,
    show_legend: bool,
) {
    figure.layout.xaxis = Some(Axis::titled(Some(xlabel), style.label_size));
    figure.layout.yaxis = Some(Axis::titled(Some(ylabel), style.label_size));
    figure.layout.showlegend = Some(show_legend);
    apply_theme(figure, style);
}

pub(crate) fn build_series(data: ChartData, options: &SeriesOptions) -> ChartResult<Figure> {
    let normalized = data.normalize();
    let mode = if options.marker {
        Mode::LinesMarkers
    } else {
        Mode::Lines
    };

    let mut figure = Figure::new();
    figure.data = column_traces(&normalized.table, |trace| Scatter {
        mode: Some(mode),
        ..trace
    });
    finish_layout(
        &mut figure,
        &options.style,
        &options.xlabel,
        &options.ylabel,
        legend_visible(normalized.is_series, options.show_legend),
    );

    debug!(kind = "series", traces = figure.data.len(), "built figure");
    Ok(figure)
}

pub(crate) fn build_area(data: ChartData, options: &AreaOptions) -> ChartResult<Figure> {
    let normalized = data.normalize();

    let mut figure = Figure::new();
    figure.data = column_traces(&normalized.table, |trace| Scatter {
        stackgroup: Some(STACK_GROUP.to_string()),
        line: trace
            .line
            .map(|line| Line::new(line.color, AREA_LINE_WIDTH)),
        ..trace
    });
    finish_layout(
        &mut figure,
        &options.style,
        &options.xlabel,
        &options.ylabel,
        legend_visible(normalized.is_series, options.show_legend),
    );

    debug!(kind = "area", traces = figure.data.len(), "built figure");
    Ok(figure)
}
