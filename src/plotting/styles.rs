use crate::figure::{Axis, Figure, Font, Legend, Margin, Title};

/// Series colors, cycled by series position.
pub const PALETTE: [&str; 6] = [
    "#005AD6", "#62A4FF", "#757575", "#02BE6D", "#FF6F69", "#00132E",
];

/// Color for the `i`-th series.
pub fn palette_color(i: usize) -> &'static str {
    PALETTE[i % PALETTE.len()]
}

/// Palette cycled to `n` entries.
pub fn palette_cycle(n: usize) -> Vec<String> {
    (0..n).map(|i| palette_color(i).to_string()).collect()
}

/// Chart theme configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChartTheme {
    pub font_family: &'static str,
    pub background_color: &'static str,
    pub grid_color: &'static str,
    pub show_zero_line: bool,
    pub show_axis_line: bool,
    pub margin: Margin,
}

/// The one theme every chart is drawn with.
pub const THEME: ChartTheme = ChartTheme {
    font_family: "Helvetica",
    background_color: "#F3F6FA",
    grid_color: "lightgray",
    show_zero_line: false,
    show_axis_line: false,
    margin: Margin {
        l: 100,
        r: 100,
        t: 120,
        b: 100,
    },
};

impl Default for ChartTheme {
    fn default() -> Self {
        THEME
    }
}

/// Chart style configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChartStyle {
    pub title: String,
    pub subtitle: String,
    pub title_size: u32,
    pub label_size: u32,
    pub legend_size: u32,
    pub tick_size: u32,
}

impl Default for ChartStyle {
    fn default() -> Self {
        Self {
            title: "Titulo".to_string(),
            subtitle: "Subtitulo".to_string(),
            title_size: 35,
            label_size: 22,
            legend_size: 30,
            tick_size: 20,
        }
    }
}

impl ChartStyle {
    /// Bold title with the subtitle in small type on the line below.
    pub fn header(&self) -> String {
        format!("<b>{}</b> <br><sup>{}</sup>", self.title, self.subtitle)
    }
}

/// Legend is drawn only for tables, and only when the caller allows it.
pub fn legend_visible(is_series: bool, requested: bool) -> bool {
    !is_series && requested
}

/// Apply the theme, header and axis de-emphasis to a built figure.
///
/// Only axes the builder created are styled, so pie charts stay axis-free.
/// Legend visibility is left to the builder.
pub fn apply_theme(figure: &mut Figure, style: &ChartStyle) {
    let theme = THEME;
    let layout = &mut figure.layout;

    layout.title = Some(Title {
        text: style.header(),
        font: Some(Font::size(style.title_size)),
        yanchor: Some("top".to_string()),
    });
    layout.font = Some(Font {
        family: Some(theme.font_family.to_string()),
        ..Font::default()
    });
    layout.plot_bgcolor = Some(theme.background_color.to_string());
    layout.paper_bgcolor = Some(theme.background_color.to_string());
    layout.margin = Some(theme.margin);

    let legend = layout.legend.get_or_insert_with(Legend::default);
    legend.font = Some(Font::size(style.legend_size));

    for axis in layout.axes_mut() {
        style_axis(axis, &theme, style.tick_size);
    }
}

fn style_axis(axis: &mut Axis, theme: &ChartTheme, tick_size: u32) {
    axis.zeroline = Some(theme.show_zero_line);
    axis.showline = Some(theme.show_axis_line);
    axis.gridcolor = Some(theme.grid_color.to_string());
    // Tick color set by a builder (dual-axis charts) survives.
    let tickfont = axis.tickfont.get_or_insert_with(Font::default);
    tickfont.size = Some(tick_size);
}
