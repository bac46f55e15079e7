use tracing::debug;

use crate::error::{ChartError, ChartResult};
use crate::figure::{Axis, Figure, Font, Line, Mode, Scatter, Title, Trace};
use crate::types::Series;

use super::output::Export;
use super::styles::{apply_theme, palette_color, ChartStyle, THEME};

const LINE_WIDTH: f64 = 3.0;

/// Options for [`Plotter::plot_combo_series`](super::Plotter::plot_combo_series).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ComboOptions {
    pub style: ChartStyle,
    pub export: Export,
    pub xlabel: String,
    /// Left axis title; the first series' name when `None`.
    pub ylabel1: Option<String>,
    /// Right axis title; the second series' name when `None`.
    pub ylabel2: Option<String>,
    pub marker: bool,
}

impl Default for ComboOptions {
    fn default() -> Self {
        Self {
            style: ChartStyle::default(),
            export: Export::default(),
            xlabel: "xlabel".to_string(),
            ylabel1: None,
            ylabel2: None,
            marker: false,
        }
    }
}

/// A y axis whose title and ticks take the color of its series.
fn colored_axis(title: &str, color: &str, tick_size: u32) -> Axis {
    Axis {
        title: Some(Title::new(title, Font::colored(tick_size, color))),
        tickfont: Some(Font {
            color: Some(color.to_string()),
            ..Font::default()
        }),
        zerolinecolor: Some(THEME.background_color.to_string()),
        ..Axis::default()
    }
}

pub(crate) fn build_combo_series(
    first: &Series,
    second: &Series,
    options: &ComboOptions,
) -> ChartResult<Figure> {
    if first.len() != second.len() {
        return Err(ChartError::LengthMismatch {
            name: second.name().to_string(),
            expected: first.len(),
            actual: second.len(),
        });
    }

    let mode = if options.marker {
        Mode::LinesMarkers
    } else {
        Mode::Lines
    };
    let (left_color, right_color) = (palette_color(0), palette_color(1));

    let mut figure = Figure::new();
    figure.add_trace(Trace::Scatter(Scatter {
        x: first.index().to_vec(),
        y: first.values().to_vec(),
        name: Some(first.name().to_string()),
        mode: Some(mode),
        line: Some(Line::new(left_color, LINE_WIDTH)),
        ..Scatter::default()
    }));
    // Both series share the first one's index.
    figure.add_trace(Trace::Scatter(Scatter {
        x: first.index().to_vec(),
        y: second.values().to_vec(),
        name: Some(second.name().to_string()),
        mode: Some(mode),
        line: Some(Line::new(right_color, LINE_WIDTH)),
        yaxis: Some("y2".to_string()),
        ..Scatter::default()
    }));

    let style = &options.style;
    let ylabel1 = options.ylabel1.as_deref().unwrap_or(first.name());
    let ylabel2 = options.ylabel2.as_deref().unwrap_or(second.name());

    let layout = &mut figure.layout;
    layout.xaxis = Some(Axis::titled(Some(&options.xlabel), style.label_size));
    layout.yaxis = Some(colored_axis(ylabel1, left_color, style.tick_size));
    layout.yaxis2 = Some(Axis {
        overlaying: Some("y".to_string()),
        side: Some("right".to_string()),
        showgrid: Some(false),
        ..colored_axis(ylabel2, right_color, style.tick_size)
    });
    // Axis colors identify the series.
    layout.showlegend = Some(false);
    apply_theme(&mut figure, style);

    debug!(kind = "combo", traces = figure.data.len(), "built figure");
    Ok(figure)
}
