//! # Fintualistic
//!
//! `fintualistic` draws themed, interactive plotly.js charts from series and
//! tables. Every chart shares one look: a fixed six-color palette, Helvetica,
//! a pale blue-gray background, a bold title with a small subtitle underneath,
//! and de-emphasized axes.
//!
//! ## Charts
//!
//! - [`plot_series`]: one line per column
//! - [`plot_bar`]: grouped or stacked bars with value labels
//! - [`plot_combo_series`]: two series on independent y axes
//! - [`plot_pie`]: donut chart
//! - [`plot_scatter`]: scatter with an optional least-squares trend line
//! - [`plot_dist`]: histogram and density curve per column
//! - [`plot_area`]: stacked areas
//!
//! Each call writes `<imgname>.html` (unless `save` is off), opens the chart
//! and returns the [`Figure`](figure::Figure).
//!
//! ## Example
//!
//! ```no_run
//! use fintualistic::{plot_series, SeriesOptions, Table};
//!
//! let table = Table::new([0, 1, 2])
//!     .with_column("A", vec![1.0, 2.0, 3.0])?
//!     .with_column("B", vec![3.0, 1.0, 2.0])?;
//! plot_series(table, &SeriesOptions::default())?;
//! # Ok::<(), fintualistic::ChartError>(())
//! ```

use once_cell::sync::Lazy;

pub mod config;
pub mod error;
pub mod figure;
pub mod plotting;
pub mod telemetry;
pub mod types;
pub mod utils;

pub use config::{DisplayMode, Settings};
pub use error::{ChartError, ChartResult};
pub use figure::Figure;
pub use plotting::{
    AreaOptions, BarOptions, BrowserViewer, ChartStyle, ComboOptions, DistOptions, Export,
    NullViewer, PieOptions, Plotter, ScatterOptions, SeriesOptions, Viewer,
};
pub use types::{ChartData, Label, Series, Table};

/// Process settings, read from the environment on first use.
static SETTINGS: Lazy<Settings> = Lazy::new(Settings::from_env);

fn plotter() -> Plotter {
    Plotter::from_settings(&SETTINGS)
}

/// Line chart; see [`Plotter::plot_series`].
pub fn plot_series(data: impl Into<ChartData>, options: &SeriesOptions) -> ChartResult<Figure> {
    plotter().plot_series(data, options)
}

/// Bar chart; see [`Plotter::plot_bar`].
pub fn plot_bar(data: impl Into<ChartData>, options: &BarOptions) -> ChartResult<Figure> {
    plotter().plot_bar(data, options)
}

/// Dual-axis line chart; see [`Plotter::plot_combo_series`].
pub fn plot_combo_series(
    first: &Series,
    second: &Series,
    options: &ComboOptions,
) -> ChartResult<Figure> {
    plotter().plot_combo_series(first, second, options)
}

/// Donut chart; see [`Plotter::plot_pie`].
pub fn plot_pie(series: &Series, options: &PieOptions) -> ChartResult<Figure> {
    plotter().plot_pie(series, options)
}

/// Scatter chart; see [`Plotter::plot_scatter`].
pub fn plot_scatter(x: &Series, y: &Series, options: &ScatterOptions) -> ChartResult<Figure> {
    plotter().plot_scatter(x, y, options)
}

/// Distribution chart; see [`Plotter::plot_dist`].
pub fn plot_dist(data: impl Into<ChartData>, options: &DistOptions) -> ChartResult<Figure> {
    plotter().plot_dist(data, options)
}

/// Stacked area chart; see [`Plotter::plot_area`].
pub fn plot_area(data: impl Into<ChartData>, options: &AreaOptions) -> ChartResult<Figure> {
    plotter().plot_area(data, options)
}
