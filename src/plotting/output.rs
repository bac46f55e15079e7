//! Export and display of finished figures.

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use tracing::{debug, info};

use crate::config::{DisplayMode, Settings};
use crate::error::{ChartError, ChartResult};
use crate::figure::Figure;
use crate::types::{ChartData, Series};

use super::bar::{build_bar, BarOptions};
use super::combo::{build_combo_series, ComboOptions};
use super::dist::{build_dist, DistOptions};
use super::pie::{build_pie, PieOptions};
use super::scatter::{build_scatter, ScatterOptions};
use super::series::{build_area, build_series, AreaOptions, SeriesOptions};

/// Where a chart goes once built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Export {
    /// File stem; the chart is written to `<imgname>.html`.
    pub imgname: String,
    pub save: bool,
}

impl Default for Export {
    fn default() -> Self {
        Self {
            imgname: "fintualistic".to_string(),
            save: true,
        }
    }
}

impl Export {
    pub fn file_name(&self) -> String {
        format!("{}.html", self.imgname)
    }
}

/// Shows a rendered chart document to the user.
pub trait Viewer {
    /// `saved` is the file the document was just written to, if any.
    fn show(&self, html: &str, saved: Option<&Path>) -> ChartResult<()>;
}

/// Opens the chart in the default web browser.
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserViewer;

impl BrowserViewer {
    /// File to open: the saved chart, or a kept temp copy when nothing was saved.
    fn target(html: &str, saved: Option<&Path>) -> ChartResult<PathBuf> {
        if let Some(path) = saved {
            return fs::canonicalize(path).map_err(ChartError::Display);
        }
        let mut file = tempfile::Builder::new()
            .prefix("fintualistic-")
            .suffix(".html")
            .tempfile()
            .map_err(ChartError::Display)?;
        file.write_all(html.as_bytes())
            .map_err(ChartError::Display)?;
        let (_, path) = file.keep().map_err(|e| ChartError::Display(e.error))?;
        Ok(path)
    }
}

impl Viewer for BrowserViewer {
    fn show(&self, html: &str, saved: Option<&Path>) -> ChartResult<()> {
        let path = Self::target(html, saved)?;
        debug!(path = %path.display(), "opening chart in browser");
        webbrowser::open(&path.to_string_lossy()).map_err(ChartError::Display)
    }
}

/// Shows nothing.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullViewer;

impl Viewer for NullViewer {
    fn show(&self, _html: &str, _saved: Option<&Path>) -> ChartResult<()> {
        Ok(())
    }
}

/// Builds, saves and displays charts.
pub struct Plotter {
    output_dir: PathBuf,
    viewer: Box<dyn Viewer>,
}

impl Plotter {
    pub fn new(output_dir: impl Into<PathBuf>, viewer: impl Viewer + 'static) -> Self {
        Self {
            output_dir: output_dir.into(),
            viewer: Box::new(viewer),
        }
    }

    pub fn from_settings(settings: &Settings) -> Self {
        match settings.display {
            DisplayMode::Browser => Self::new(&settings.output_dir, BrowserViewer),
            DisplayMode::None => Self::new(&settings.output_dir, NullViewer),
        }
    }

    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }

    /// Line chart, one line per column.
    pub fn plot_series(
        &self,
        data: impl Into<ChartData>,
        options: &SeriesOptions,
    ) -> ChartResult<Figure> {
        let figure = build_series(data.into(), options)?;
        self.finish(figure, &options.export, &options.style.title)
    }

    /// Bar chart, grouped or stacked.
    pub fn plot_bar(
        &self,
        data: impl Into<ChartData>,
        options: &BarOptions,
    ) -> ChartResult<Figure> {
        let figure = build_bar(data.into(), options)?;
        self.finish(figure, &options.export, &options.style.title)
    }

    /// Two series on independent y axes.
    pub fn plot_combo_series(
        &self,
        first: &Series,
        second: &Series,
        options: &ComboOptions,
    ) -> ChartResult<Figure> {
        let figure = build_combo_series(first, second, options)?;
        self.finish(figure, &options.export, &options.style.title)
    }

    /// Donut chart of one series.
    pub fn plot_pie(&self, series: &Series, options: &PieOptions) -> ChartResult<Figure> {
        let figure = build_pie(series, options);
        self.finish(figure, &options.export, &options.style.title)
    }

    /// Scatter of `x` against `y`, optionally with a least-squares line.
    pub fn plot_scatter(
        &self,
        x: &Series,
        y: &Series,
        options: &ScatterOptions,
    ) -> ChartResult<Figure> {
        let figure = build_scatter(x, y, options)?;
        self.finish(figure, &options.export, &options.style.title)
    }

    /// Histogram and density curve per column.
    pub fn plot_dist(
        &self,
        data: impl Into<ChartData>,
        options: &DistOptions,
    ) -> ChartResult<Figure> {
        let figure = build_dist(data.into(), options)?;
        self.finish(figure, &options.export, &options.style.title)
    }

    /// Stacked area chart.
    pub fn plot_area(
        &self,
        data: impl Into<ChartData>,
        options: &AreaOptions,
    ) -> ChartResult<Figure> {
        let figure = build_area(data.into(), options)?;
        self.finish(figure, &options.export, &options.style.title)
    }

    /// Save (when asked) then display. The document is rendered up front so a
    /// serialization failure leaves no file behind.
    fn finish(&self, figure: Figure, export: &Export, page_title: &str) -> ChartResult<Figure> {
        let html = figure.to_html(page_title)?;
        let saved = if export.save {
            let path = self.output_dir.join(export.file_name());
            write_atomic(&path, &html)?;
            info!(path = %path.display(), bytes = html.len(), "chart saved");
            Some(path)
        } else {
            None
        };
        self.viewer.show(&html, saved.as_deref())?;
        Ok(figure)
    }
}

impl Default for Plotter {
    fn default() -> Self {
        Self::from_settings(&Settings::default())
    }
}

/// Write through a sibling temp file so readers never see a partial chart.
fn write_atomic(path: &Path, contents: &str) -> ChartResult<()> {
    let dir = match path.parent() {
        Some(dir) if !dir.as_os_str().is_empty() => dir,
        _ => Path::new("."),
    };
    fs::create_dir_all(dir).map_err(|e| ChartError::io(dir, e))?;
    let mut tmp = tempfile::NamedTempFile::new_in(dir)
        .map_err(|e| ChartError::io(dir, e))?;
    tmp.write_all(contents.as_bytes())
        .map_err(|e| ChartError::io(path, e))?;
    tmp.persist(path)
        .map_err(|e| ChartError::io(path, e.error))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_write_atomic_overwrites() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("chart.html");
        write_atomic(&path, "first").unwrap();
        write_atomic(&path, "second").unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), "second");
        // Only the target remains, no stray temp files.
        assert_eq!(fs::read_dir(dir.path()).unwrap().count(), 1);
    }

    #[test]
    fn test_write_atomic_creates_directory() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nested").join("chart.html");
        write_atomic(&path, "x").unwrap();
        assert!(path.exists());
    }

    #[test]
    fn test_browser_opens_saved_file_without_copy() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("chart.html");
        write_atomic(&path, "<html></html>").unwrap();

        let target = BrowserViewer::target("<html></html>", Some(&path)).unwrap();

        assert_eq!(target, fs::canonicalize(&path).unwrap());
        assert_eq!(fs::read_dir(dir.path()).unwrap().count(), 1);
    }

    #[test]
    fn test_browser_keeps_copy_when_unsaved() {
        let target = BrowserViewer::target("unsaved", None).unwrap();

        assert_eq!(fs::read_to_string(&target).unwrap(), "unsaved");
        fs::remove_file(target).unwrap();
    }

    #[test]
    fn test_export_defaults() {
        let export = Export::default();
        assert!(export.save);
        assert_eq!(export.file_name(), "fintualistic.html");
    }

    #[test]
    fn test_plotter_from_settings_uses_output_dir() {
        let settings = Settings {
            output_dir: PathBuf::from("/tmp/out"),
            display: DisplayMode::None,
        };
        assert_eq!(
            Plotter::from_settings(&settings).output_dir(),
            Path::new("/tmp/out")
        );
    }
}
