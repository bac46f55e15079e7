use tracing::debug;

use crate::figure::{Figure, Font, Line, Marker, Pie, Trace};
use crate::types::Series;
use crate::utils::stats::round_to;

use super::output::Export;
use super::styles::{apply_theme, palette_cycle, ChartStyle};

const HOLE: f64 = 0.5;
const SLICE_BORDER: &str = "#000000";
const SLICE_BORDER_WIDTH: f64 = 0.25;

/// Options for [`Plotter::plot_pie`](super::Plotter::plot_pie).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PieOptions {
    pub style: ChartStyle,
    pub export: Export,
}

pub(crate) fn build_pie(series: &Series, options: &PieOptions) -> Figure {
    let values: Vec<f64> = series.values().iter().map(|&v| round_to(v, 2)).collect();
    let slices = values.len();

    let mut figure = Figure::new();
    figure.add_trace(Trace::Pie(Pie {
        labels: series.index().to_vec(),
        values,
        hole: HOLE,
        hoverinfo: Some("label+percent".to_string()),
        textinfo: Some("value+label".to_string()),
        textposition: Some("outside".to_string()),
        textfont: Some(Font::size(options.style.label_size)),
        marker: Some(Marker {
            colors: Some(palette_cycle(slices)),
            line: Some(Line::new(SLICE_BORDER, SLICE_BORDER_WIDTH)),
            ..Marker::default()
        }),
    }));
    // Labels sit next to the slices.
    figure.layout.showlegend = Some(false);
    apply_theme(&mut figure, &options.style);

    debug!(kind = "pie", slices, "built figure");
    figure
}
