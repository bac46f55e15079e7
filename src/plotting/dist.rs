use tracing::debug;

use crate::error::{ChartError, ChartResult};
use crate::figure::{
    Axis, BarMode, Bins, Figure, Histogram, Legend, Line, Marker, Mode, Scatter, Trace,
};
use crate::types::{ChartData, Label};
use crate::utils::stats::{gaussian_kde, grid, min_max, sample_std_dev};

use super::output::Export;
use super::styles::{apply_theme, legend_visible, palette_color, ChartStyle};

/// Points the density curve is evaluated at.
const CURVE_POINTS: usize = 500;
const BAR_OPACITY: f64 = 0.7;
const CURVE_WIDTH: f64 = 2.0;
const HISTNORM: &str = "probability density";

/// Options for [`Plotter::plot_dist`](super::Plotter::plot_dist).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DistOptions {
    pub style: ChartStyle,
    pub export: Export,
    pub xlabel: Option<String>,
    pub ylabel: Option<String>,
    /// Smoothed density line.
    pub show_curve: bool,
    /// Histogram bars.
    pub show_bars: bool,
}

impl Default for DistOptions {
    fn default() -> Self {
        Self {
            style: ChartStyle::default(),
            export: Export::default(),
            xlabel: None,
            ylabel: None,
            show_curve: true,
            show_bars: true,
        }
    }
}

/// Histogram bin width for one column: sample standard deviation over 8.
pub fn bin_width(values: &[f64]) -> f64 {
    sample_std_dev(values) / 8.0
}

struct Column<'a> {
    name: &'a str,
    values: &'a [f64],
    color: &'static str,
    bins: Bins,
}

pub(crate) fn build_dist(data: ChartData, options: &DistOptions) -> ChartResult<Figure> {
    let normalized = data.normalize();

    let mut columns = Vec::with_capacity(normalized.table.width());
    for (i, (name, values)) in normalized.table.columns().enumerate() {
        let size = bin_width(values);
        let range = min_max(values);
        let (start, end) = match range {
            Some(range) if size.is_finite() && size > 0.0 => range,
            _ => {
                return Err(ChartError::InvalidData(format!(
                    "column `{name}` needs at least two distinct observations"
                )))
            }
        };
        columns.push(Column {
            name,
            values,
            color: palette_color(i),
            bins: Bins { start, end, size },
        });
    }

    let mut figure = Figure::new();
    if options.show_bars {
        for column in &columns {
            figure.add_trace(Trace::Histogram(Histogram {
                x: column.values.to_vec(),
                name: Some(column.name.to_string()),
                legendgroup: Some(column.name.to_string()),
                marker: Some(Marker::color(column.color)),
                opacity: Some(BAR_OPACITY),
                histnorm: Some(HISTNORM.to_string()),
                autobinx: Some(false),
                xbins: Some(column.bins.clone()),
            }));
        }
    }
    if options.show_curve {
        for column in &columns {
            let xs = grid(column.bins.start, column.bins.end, CURVE_POINTS);
            let density = gaussian_kde(column.values, &xs)?;
            figure.add_trace(Trace::Scatter(Scatter {
                x: xs.into_iter().map(Label::Float).collect(),
                y: density,
                name: Some(column.name.to_string()),
                legendgroup: Some(column.name.to_string()),
                mode: Some(Mode::Lines),
                marker: Some(Marker::color(column.color)),
                line: Some(Line::new(column.color, CURVE_WIDTH)),
                // The histogram already carries the legend entry.
                showlegend: Some(!options.show_bars),
                ..Scatter::default()
            }));
        }
    }

    let style = &options.style;
    let layout = &mut figure.layout;
    layout.barmode = Some(BarMode::Overlay);
    layout.hovermode = Some("closest".to_string());
    layout.legend = Some(Legend {
        traceorder: Some("reversed".to_string()),
        ..Legend::default()
    });
    layout.xaxis = Some(Axis::titled(options.xlabel.as_deref(), style.label_size));
    layout.yaxis = Some(Axis::titled(options.ylabel.as_deref(), style.label_size));
    layout.showlegend = Some(legend_visible(normalized.is_series, true));
    apply_theme(&mut figure, style);

    debug!(kind = "dist", traces = figure.data.len(), "built figure");
    Ok(figure)
}
