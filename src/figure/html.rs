//! Standalone HTML document wrapping a figure.
//!
//! plotly.js is loaded from its CDN; the figure itself is inlined as JSON.

pub const PLOTLY_CDN: &str = "https://cdn.plot.ly/plotly-2.35.2.min.js";

pub const CHART_DIV_ID: &str = "fintualistic-chart";

const HTML_HEADER: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
"#;

/// Render the document. `figure_json` must be a JSON object with `data` and
/// `layout` keys.
pub fn render_document(page_title: &str, figure_json: &str) -> String {
    format!(
        r#"{HTML_HEADER}    <title>{title}</title>
    <script src="{PLOTLY_CDN}" charset="utf-8"></script>
    <style>html, body {{ margin: 0; height: 100%; }} #{CHART_DIV_ID} {{ width: 100%; height: 100vh; }}</style>
</head>
<body>
    <div id="{CHART_DIV_ID}"></div>
    <script type="text/javascript">
        var figure = {figure};
        Plotly.newPlot("{CHART_DIV_ID}", figure.data, figure.layout, {{"responsive": true}});
    </script>
</body>
</html>
"#,
        title = escape_text(page_title),
        figure = escape_script(figure_json),
    )
}

/// Escape text placed inside an HTML element.
fn escape_text(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            _ => out.push(c),
        }
    }
    out
}

/// JSON inside `<script>` must not contain `</`, which would close the tag.
fn escape_script(json: &str) -> String {
    json.replace("</", "<\\/")
}
