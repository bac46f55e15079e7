use tracing::debug;

use crate::error::{ChartError, ChartResult};
use crate::figure::{Axis, Figure, Line, Marker, Mode, Scatter, Trace};
use crate::types::{Label, Series};
use crate::utils::stats::{finite_pairs, ols, OlsFit};

use super::output::Export;
use super::styles::{apply_theme, palette_color, ChartStyle};

const POINT_OPACITY: f64 = 0.3;
const TREND_WIDTH: f64 = 2.0;

/// Options for [`Plotter::plot_scatter`](super::Plotter::plot_scatter).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScatterOptions {
    pub style: ChartStyle,
    pub export: Export,
    /// x axis title; the x series' name when `None`.
    pub xlabel: Option<String>,
    /// y axis title; the y series' name when `None`.
    pub ylabel: Option<String>,
    /// Overlay an ordinary least squares trend line.
    pub regression_line: bool,
}

impl Default for ScatterOptions {
    fn default() -> Self {
        Self {
            style: ChartStyle::default(),
            export: Export::default(),
            xlabel: None,
            ylabel: None,
            regression_line: true,
        }
    }
}

fn trend_trace(fit: &OlsFit, x: &Series, y: &Series, color: &str) -> Trace {
    // Same observations the fit was computed over.
    let mut xs: Vec<f64> = finite_pairs(x.values(), y.values())
        .into_iter()
        .map(|(x, _)| x)
        .collect();
    xs.sort_by(f64::total_cmp);
    let hover = format!(
        "<b>OLS trendline</b><br>{y} = {slope:.6} * {x} + {intercept:.6}<br>\
         R<sup>2</sup>={r2:.6}<br><br>{x}=%{{x}}<br>{y}=%{{y}} <b>(trend)</b><extra></extra>",
        x = x.name(),
        y = y.name(),
        slope = fit.slope,
        intercept = fit.intercept,
        r2 = fit.r_squared,
    );

    Trace::Scatter(Scatter {
        y: xs.iter().map(|&v| fit.predict(v)).collect(),
        x: xs.into_iter().map(Label::Float).collect(),
        mode: Some(Mode::Lines),
        line: Some(Line::new(color, TREND_WIDTH)),
        hovertemplate: Some(hover),
        ..Scatter::default()
    })
}

pub(crate) fn build_scatter(
    x: &Series,
    y: &Series,
    options: &ScatterOptions,
) -> ChartResult<Figure> {
    if x.len() != y.len() {
        return Err(ChartError::LengthMismatch {
            name: y.name().to_string(),
            expected: x.len(),
            actual: y.len(),
        });
    }
    let color = palette_color(0);

    let mut figure = Figure::new();
    figure.add_trace(Trace::Scatter(Scatter {
        x: x.values().iter().copied().map(Label::Float).collect(),
        y: y.values().to_vec(),
        mode: Some(Mode::Markers),
        marker: Some(Marker::color(color)),
        opacity: Some(POINT_OPACITY),
        hovertemplate: Some(format!(
            "{}=%{{x}}<br>{}=%{{y}}<extra></extra>",
            x.name(),
            y.name()
        )),
        ..Scatter::default()
    }));
    if options.regression_line {
        let fit = ols(x.values(), y.values())?;
        figure.add_trace(trend_trace(&fit, x, y, color));
    }

    let style = &options.style;
    let xlabel = options.xlabel.as_deref().unwrap_or(x.name());
    let ylabel = options.ylabel.as_deref().unwrap_or(y.name());
    let layout = &mut figure.layout;
    layout.xaxis = Some(Axis::titled(Some(xlabel), style.label_size));
    layout.yaxis = Some(Axis::titled(Some(ylabel), style.label_size));
    layout.showlegend = Some(false);
    apply_theme(&mut figure, style);

    debug!(
        kind = "scatter",
        points = x.len(),
        trend = options.regression_line,
        "built figure"
    );
    Ok(figure)
}
