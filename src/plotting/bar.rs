use tracing::debug;

use crate::error::ChartResult;
use crate::figure::{Axis, Bar, BarMode, Figure, Font, Marker, Trace};
use crate::types::ChartData;

use super::output::Export;
use super::styles::{apply_theme, legend_visible, palette_color, ChartStyle};

/// Value labels with three significant figures and an SI suffix (`1.23k`).
pub const BAR_LABEL_TEMPLATE: &str = "%{y:.3s}";

/// Options for [`Plotter::plot_bar`](super::Plotter::plot_bar).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BarOptions {
    pub style: ChartStyle,
    pub export: Export,
    pub xlabel: String,
    pub ylabel: String,
    /// Stack columns on top of each other instead of side by side.
    pub stacked: bool,
    /// Print each bar's value on it.
    pub bar_labels: bool,
}

impl Default for BarOptions {
    fn default() -> Self {
        Self {
            style: ChartStyle::default(),
            export: Export::default(),
            xlabel: "xlabel".to_string(),
            ylabel: "ylabel".to_string(),
            stacked: false,
            bar_labels: true,
        }
    }
}

pub fn bar_mode(stacked: bool) -> BarMode {
    if stacked {
        BarMode::Relative
    } else {
        BarMode::Group
    }
}

pub(crate) fn build_bar(data: ChartData, options: &BarOptions) -> ChartResult<Figure> {
    let normalized = data.normalize();
    let table = &normalized.table;
    let label_size = options.style.label_size;

    let mut figure = Figure::new();
    for (i, (name, values)) in table.columns().enumerate() {
        let (texttemplate, textfont) = if options.bar_labels {
            (
                Some(BAR_LABEL_TEMPLATE.to_string()),
                Some(Font::size(label_size)),
            )
        } else {
            (None, None)
        };
        figure.add_trace(Trace::Bar(Bar {
            x: table.index().to_vec(),
            y: values.to_vec(),
            name: Some(name.to_string()),
            marker: Some(Marker::color(palette_color(i))),
            texttemplate,
            textfont,
        }));
    }

    let layout = &mut figure.layout;
    layout.barmode = Some(bar_mode(options.stacked));
    layout.xaxis = Some(Axis::titled(Some(&options.xlabel), label_size));
    layout.yaxis = Some(Axis::titled(Some(&options.ylabel), label_size));
    layout.showlegend = Some(legend_visible(normalized.is_series, true));
    apply_theme(&mut figure, &options.style);

    debug!(
        kind = "bar",
        traces = figure.data.len(),
        stacked = options.stacked,
        "built figure"
    );
    Ok(figure)
}
