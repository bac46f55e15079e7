//! # Figure model
//!
//! A typed subset of the plotly.js figure schema. Builders fill a [`Figure`]
//! with traces and layout; serialization yields exactly the JSON plotly.js
//! consumes, and [`Figure::to_html`] wraps it in a standalone document.

mod html;
mod layout;
mod trace;

use serde::Serialize;

use crate::error::ChartResult;

pub use html::{CHART_DIV_ID, PLOTLY_CDN};
pub use layout::{Axis, BarMode, Font, Layout, Legend, Margin, Title};
pub use trace::{Bar, Bins, Histogram, Line, Marker, Mode, Pie, Scatter, Trace};

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Figure {
    pub data: Vec<Trace>,
    pub layout: Layout,
}

impl Figure {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_trace(&mut self, trace: Trace) {
        self.data.push(trace);
    }

    pub fn to_json(&self) -> ChartResult<String> {
        Ok(serde_json::to_string(self)?)
    }

    /// Full HTML document; fails only if the figure cannot be serialized.
    pub fn to_html(&self, page_title: &str) -> ChartResult<String> {
        Ok(html::render_document(page_title, &self.to_json()?))
    }

    /// Whether the legend will be drawn. plotly.js shows it by default.
    pub fn shows_legend(&self) -> bool {
        self.layout.showlegend.unwrap_or(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Label;
    use serde_json::json;

    #[test]
    fn test_trace_is_tagged_with_type() {
        let mut figure = Figure::new();
        figure.add_trace(Trace::Bar(Bar {
            x: vec![Label::from("a")],
            y: vec![1.0],
            name: Some("A".into()),
            ..Bar::default()
        }));
        figure.layout.barmode = Some(BarMode::Relative);

        let value: serde_json::Value = serde_json::from_str(&figure.to_json().unwrap()).unwrap();
        assert_eq!(
            value,
            json!({
                "data": [{"type": "bar", "x": ["a"], "y": [1.0], "name": "A"}],
                "layout": {"barmode": "relative"}
            })
        );
    }

    #[test]
    fn test_scatter_mode_and_nan_serialization() {
        let trace = Trace::Scatter(Scatter {
            x: vec![Label::from(0), Label::from(1)],
            y: vec![1.0, f64::NAN],
            mode: Some(Mode::LinesMarkers),
            ..Scatter::default()
        });
        let value = serde_json::to_value(&trace).unwrap();
        assert_eq!(value["mode"], "lines+markers");
        assert!(value["y"][1].is_null());
    }

    #[test]
    fn test_html_embeds_figure() {
        let mut figure = Figure::new();
        figure.layout.title = Some(Title::new("<b>T</b>", Font::size(35)));
        let html = figure.to_html("T").unwrap();
        assert!(html.contains("Plotly.newPlot"));
        assert!(html.contains(r#""text":"<b>T<\/b>""#));
    }
}
