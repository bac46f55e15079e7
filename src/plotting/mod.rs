//! # Chart builders
//!
//! Every builder normalizes its input, shapes one trace per column, applies
//! the shared theme from [`styles`] and hands the figure to the
//! [`Plotter`] for saving and display.

mod bar;
mod combo;
mod dist;
mod output;
mod pie;
mod scatter;
mod series;
pub mod styles;

#[cfg(test)]
mod tests;

pub use bar::{bar_mode, BarOptions, BAR_LABEL_TEMPLATE};
pub use combo::ComboOptions;
pub use dist::{bin_width, DistOptions};
pub use output::{BrowserViewer, Export, NullViewer, Plotter, Viewer};
pub use pie::PieOptions;
pub use scatter::ScatterOptions;
pub use series::{AreaOptions, SeriesOptions};
pub use styles::{ChartStyle, ChartTheme, PALETTE, THEME};
