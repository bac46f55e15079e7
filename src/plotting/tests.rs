use pretty_assertions::assert_eq;

use super::bar::build_bar;
use super::combo::build_combo_series;
use super::dist::build_dist;
use super::pie::build_pie;
use super::scatter::build_scatter;
use super::series::{build_area, build_series};
use super::*;
use crate::error::ChartError;
use crate::figure::{Axis, BarMode, Figure, Font, Mode, Trace};
use crate::types::{Label, Series, Table};

fn two_columns() -> Table {
    Table::new([0, 1, 2])
        .with_column("A", vec![1.0, 2.0, 3.0])
        .unwrap()
        .with_column("B", vec![3.0, 2.0, 1.0])
        .unwrap()
}

fn wide_table(columns: usize) -> Table {
    (0..columns).fold(Table::new([0, 1, 2]), |table, i| {
        table
            .with_column(format!("c{i}"), vec![i as f64, 1.0, 2.0 + i as f64])
            .unwrap()
    })
}

fn single_series() -> Series {
    Series::new("Fund", ["2023", "2024"], vec![100.0, 110.0]).unwrap()
}

fn trace_colors(figure: &Figure) -> Vec<String> {
    figure
        .data
        .iter()
        .map(|trace| match trace {
            Trace::Scatter(t) => t.line.as_ref().unwrap().color.clone(),
            Trace::Bar(t) => t.marker.as_ref().unwrap().color.clone().unwrap(),
            other => panic!("unexpected trace {other:?}"),
        })
        .collect()
}

fn axis_title(axis: &Option<Axis>) -> Option<&str> {
    axis.as_ref()
        .and_then(|axis| axis.title.as_ref())
        .map(|title| title.text.as_str())
}

#[test]
fn test_series_two_columns() {
    let figure = build_series(two_columns().into(), &SeriesOptions::default()).unwrap();

    assert_eq!(figure.data.len(), 2);
    assert_eq!(trace_colors(&figure), vec!["#005AD6", "#62A4FF"]);
    let Trace::Scatter(first) = &figure.data[0] else {
        panic!("expected a scatter trace");
    };
    assert_eq!(first.name.as_deref(), Some("A"));
    assert_eq!(first.mode, Some(Mode::Lines));
    assert_eq!(first.x, vec![Label::Int(0), Label::Int(1), Label::Int(2)]);
    assert_eq!(first.line.as_ref().unwrap().width, 3.0);
    assert!(figure.shows_legend());
    assert_eq!(axis_title(&figure.layout.xaxis), Some("xlabel"));
    assert_eq!(axis_title(&figure.layout.yaxis), Some("ylabel"));
}

#[test]
fn test_series_markers() {
    let options = SeriesOptions {
        marker: true,
        ..SeriesOptions::default()
    };
    let figure = build_series(two_columns().into(), &options).unwrap();
    for trace in &figure.data {
        let Trace::Scatter(trace) = trace else {
            panic!("expected a scatter trace");
        };
        assert_eq!(trace.mode, Some(Mode::LinesMarkers));
    }
}

#[test]
fn test_palette_cycles_for_line_bar_and_area() {
    let table = wide_table(8);
    let expected: Vec<String> = (0..8).map(|i| PALETTE[i % 6].to_string()).collect();

    let series = build_series(table.clone().into(), &SeriesOptions::default()).unwrap();
    let bar = build_bar(table.clone().into(), &BarOptions::default()).unwrap();
    let area = build_area(table.into(), &AreaOptions::default()).unwrap();

    assert_eq!(trace_colors(&series), expected);
    assert_eq!(trace_colors(&bar), expected);
    assert_eq!(trace_colors(&area), expected);
    assert_eq!(trace_colors(&series)[6], "#005AD6");
}

#[test]
fn test_single_series_hides_legend() {
    let series = single_series();

    let line = SeriesOptions {
        show_legend: true,
        ..SeriesOptions::default()
    };
    assert!(!build_series(series.clone().into(), &line)
        .unwrap()
        .shows_legend());
    assert!(!build_bar(series.clone().into(), &BarOptions::default())
        .unwrap()
        .shows_legend());
    assert!(!build_area(series.clone().into(), &AreaOptions::default())
        .unwrap()
        .shows_legend());

    let dist_series = Series::from_values("Returns", vec![0.1, -0.2, 0.05, 0.3]);
    assert!(!build_dist(dist_series.into(), &DistOptions::default())
        .unwrap()
        .shows_legend());
}

#[test]
fn test_legend_flag_hides_table_legend() {
    let options = SeriesOptions {
        show_legend: false,
        ..SeriesOptions::default()
    };
    assert!(!build_series(two_columns().into(), &options)
        .unwrap()
        .shows_legend());

    let options = AreaOptions {
        show_legend: false,
        ..AreaOptions::default()
    };
    assert!(!build_area(two_columns().into(), &options)
        .unwrap()
        .shows_legend());
}

#[test]
fn test_theme_applied() {
    let style = ChartStyle {
        title: "Retornos".to_string(),
        subtitle: "2024".to_string(),
        title_size: 40,
        tick_size: 12,
        ..ChartStyle::default()
    };
    let options = SeriesOptions {
        style,
        ..SeriesOptions::default()
    };
    let figure = build_series(two_columns().into(), &options).unwrap();
    let layout = &figure.layout;

    let title = layout.title.as_ref().unwrap();
    assert_eq!(title.text, "<b>Retornos</b> <br><sup>2024</sup>");
    assert_eq!(title.font, Some(Font::size(40)));
    assert_eq!(title.yanchor.as_deref(), Some("top"));
    assert_eq!(
        layout.font.as_ref().unwrap().family.as_deref(),
        Some("Helvetica")
    );
    assert_eq!(layout.plot_bgcolor.as_deref(), Some("#F3F6FA"));
    assert_eq!(layout.paper_bgcolor.as_deref(), Some("#F3F6FA"));
    assert_eq!(layout.margin, Some(THEME.margin));
    assert_eq!(layout.legend.as_ref().unwrap().font, Some(Font::size(30)));
    for axis in [&layout.xaxis, &layout.yaxis] {
        let axis = axis.as_ref().unwrap();
        assert_eq!(axis.zeroline, Some(false));
        assert_eq!(axis.showline, Some(false));
        assert_eq!(axis.gridcolor.as_deref(), Some("lightgray"));
        assert_eq!(axis.tickfont, Some(Font::size(12)));
    }
}

#[test]
fn test_area_stacks_thin_lines() {
    let figure = build_area(two_columns().into(), &AreaOptions::default()).unwrap();
    for trace in &figure.data {
        let Trace::Scatter(trace) = trace else {
            panic!("expected a scatter trace");
        };
        assert_eq!(trace.stackgroup.as_deref(), Some("one"));
        assert_eq!(trace.line.as_ref().unwrap().width, 0.1);
    }
}

#[test]
fn test_bar_single_series_grouped() {
    let options = BarOptions {
        stacked: false,
        ..BarOptions::default()
    };
    let figure = build_bar(single_series().into(), &options).unwrap();
    assert_eq!(figure.layout.barmode, Some(BarMode::Group));
    assert!(!figure.shows_legend());

    let json: serde_json::Value = serde_json::from_str(&figure.to_json().unwrap()).unwrap();
    assert_eq!(json["layout"]["barmode"], "group");
}

#[test]
fn test_bar_stacked_and_labels() {
    let options = BarOptions {
        stacked: true,
        ..BarOptions::default()
    };
    let figure = build_bar(two_columns().into(), &options).unwrap();
    assert_eq!(figure.layout.barmode, Some(BarMode::Relative));
    assert!(figure.shows_legend());
    let Trace::Bar(bar) = &figure.data[0] else {
        panic!("expected a bar trace");
    };
    assert_eq!(bar.texttemplate.as_deref(), Some("%{y:.3s}"));
    assert_eq!(bar.textfont, Some(Font::size(22)));

    let options = BarOptions {
        bar_labels: false,
        ..BarOptions::default()
    };
    let figure = build_bar(two_columns().into(), &options).unwrap();
    let Trace::Bar(bar) = &figure.data[0] else {
        panic!("expected a bar trace");
    };
    assert_eq!(bar.texttemplate, None);
    assert_eq!(bar.textfont, None);
}

#[test]
fn test_combo_defaults_to_series_names() {
    let first = Series::new("Price", [0, 1, 2], vec![10.0, 11.0, 12.0]).unwrap();
    let second = Series::new("Volume", [0, 1, 2], vec![300.0, 200.0, 250.0]).unwrap();
    let figure = build_combo_series(&first, &second, &ComboOptions::default()).unwrap();
    let layout = &figure.layout;

    assert_eq!(axis_title(&layout.yaxis), Some("Price"));
    assert_eq!(axis_title(&layout.yaxis2), Some("Volume"));
    assert!(!figure.shows_legend());

    let yaxis = layout.yaxis.as_ref().unwrap();
    assert_eq!(
        yaxis.title.as_ref().unwrap().font,
        Some(Font::colored(20, "#005AD6"))
    );
    assert_eq!(yaxis.tickfont, Some(Font::colored(20, "#005AD6")));
    let yaxis2 = layout.yaxis2.as_ref().unwrap();
    assert_eq!(yaxis2.tickfont, Some(Font::colored(20, "#62A4FF")));
    assert_eq!(yaxis2.showgrid, Some(false));
    assert_eq!(yaxis2.overlaying.as_deref(), Some("y"));
    assert_eq!(yaxis2.side.as_deref(), Some("right"));
    assert_eq!(yaxis2.zerolinecolor.as_deref(), Some("#F3F6FA"));

    let Trace::Scatter(right) = &figure.data[1] else {
        panic!("expected a scatter trace");
    };
    assert_eq!(right.yaxis.as_deref(), Some("y2"));
    assert_eq!(right.x, first.index().to_vec());
}

#[test]
fn test_combo_explicit_labels_and_length_check() {
    let first = Series::new("Price", [0, 1], vec![10.0, 11.0]).unwrap();
    let second = Series::new("Volume", [0, 1], vec![300.0, 200.0]).unwrap();
    let options = ComboOptions {
        ylabel1: Some("CLP".to_string()),
        ylabel2: Some("Units".to_string()),
        ..ComboOptions::default()
    };
    let figure = build_combo_series(&first, &second, &options).unwrap();
    assert_eq!(axis_title(&figure.layout.yaxis), Some("CLP"));
    assert_eq!(axis_title(&figure.layout.yaxis2), Some("Units"));

    let short = Series::from_values("Short", vec![1.0]);
    assert!(matches!(
        build_combo_series(&first, &short, &options),
        Err(ChartError::LengthMismatch { .. })
    ));
}

#[test]
fn test_pie_rounds_values() {
    let series = Series::new("Allocation", ["Stocks", "Bonds"], vec![60.004, 39.996]).unwrap();
    let figure = build_pie(&series, &PieOptions::default());

    let Trace::Pie(pie) = &figure.data[0] else {
        panic!("expected a pie trace");
    };
    assert_eq!(
        pie.labels,
        vec![Label::from("Stocks"), Label::from("Bonds")]
    );
    assert_eq!(pie.values, vec![60.0, 40.0]);
    assert_eq!(pie.hole, 0.5);
    assert_eq!(pie.textinfo.as_deref(), Some("value+label"));
    assert_eq!(pie.textposition.as_deref(), Some("outside"));
    assert_eq!(pie.hoverinfo.as_deref(), Some("label+percent"));
    assert_eq!(
        pie.marker.as_ref().unwrap().colors,
        Some(vec!["#005AD6".to_string(), "#62A4FF".to_string()])
    );
    assert!(!figure.shows_legend());
    assert!(figure.layout.xaxis.is_none());
    assert!(figure.layout.yaxis.is_none());
}

#[test]
fn test_pie_rounds_ties_to_even() {
    let series = Series::new("Weights", ["a", "b", "c"], vec![0.125, 0.625, 2.5]).unwrap();
    let figure = build_pie(&series, &PieOptions::default());

    let Trace::Pie(pie) = &figure.data[0] else {
        panic!("expected a pie trace");
    };
    assert_eq!(pie.values, vec![0.12, 0.62, 2.5]);
}

#[test]
fn test_scatter_with_trend() {
    let x = Series::from_values("Market", vec![3.0, 1.0, 2.0, 4.0]);
    let y = Series::from_values("Fund", vec![7.0, 3.0, 5.0, 9.0]);
    let figure = build_scatter(&x, &y, &ScatterOptions::default()).unwrap();

    assert_eq!(figure.data.len(), 2);
    let Trace::Scatter(points) = &figure.data[0] else {
        panic!("expected a scatter trace");
    };
    assert_eq!(points.mode, Some(Mode::Markers));
    assert_eq!(points.opacity, Some(0.3));
    assert_eq!(
        points.marker.as_ref().unwrap().color.as_deref(),
        Some("#005AD6")
    );

    let Trace::Scatter(trend) = &figure.data[1] else {
        panic!("expected a scatter trace");
    };
    assert_eq!(
        trend.x,
        vec![1.0, 2.0, 3.0, 4.0]
            .into_iter()
            .map(Label::Float)
            .collect::<Vec<_>>()
    );
    assert_eq!(trend.y, vec![3.0, 5.0, 7.0, 9.0]);
    assert_eq!(trend.line.as_ref().unwrap().color, "#005AD6");

    assert_eq!(axis_title(&figure.layout.xaxis), Some("Market"));
    assert_eq!(axis_title(&figure.layout.yaxis), Some("Fund"));
    assert!(!figure.shows_legend());
}

#[test]
fn test_trend_line_skips_incomplete_pairs() {
    let x = Series::from_values("Market", vec![1.0, 2.0, 10.0, 3.0, f64::NAN]);
    let y = Series::from_values("Fund", vec![3.0, 5.0, f64::NAN, 7.0, 11.0]);
    let figure = build_scatter(&x, &y, &ScatterOptions::default()).unwrap();

    let Trace::Scatter(trend) = &figure.data[1] else {
        panic!("expected a scatter trace");
    };
    assert_eq!(
        trend.x,
        vec![Label::Float(1.0), Label::Float(2.0), Label::Float(3.0)]
    );
    assert_eq!(trend.y, vec![3.0, 5.0, 7.0]);
}

#[test]
fn test_scatter_without_trend_and_mismatch() {
    let x = Series::from_values("x", vec![1.0, 1.0]);
    let y = Series::from_values("y", vec![2.0, 3.0]);
    let options = ScatterOptions {
        regression_line: false,
        xlabel: Some("X".to_string()),
        ..ScatterOptions::default()
    };
    // Constant x is fine without a trend line.
    let figure = build_scatter(&x, &y, &options).unwrap();
    assert_eq!(figure.data.len(), 1);
    assert_eq!(axis_title(&figure.layout.xaxis), Some("X"));

    assert!(matches!(
        build_scatter(&x, &y, &ScatterOptions::default()),
        Err(ChartError::InvalidData(_))
    ));
    let longer = Series::from_values("z", vec![1.0, 2.0, 3.0]);
    assert!(matches!(
        build_scatter(&x, &longer, &options),
        Err(ChartError::LengthMismatch { .. })
    ));
}

#[test]
fn test_dist_bin_width_per_column() {
    let table = Table::new([0, 1, 2, 3])
        .with_column("narrow", vec![1.0, 2.0, 3.0, 4.0])
        .unwrap()
        .with_column("wide", vec![10.0, 20.0, 30.0, 40.0])
        .unwrap();
    let figure = build_dist(table.into(), &DistOptions::default()).unwrap();

    // Histograms first, then curves.
    assert_eq!(figure.data.len(), 4);
    let sd = (5.0f64 / 3.0).sqrt();
    let expected = [sd / 8.0, 10.0 * sd / 8.0];
    for (trace, width) in figure.data[..2].iter().zip(expected) {
        let Trace::Histogram(hist) = trace else {
            panic!("expected a histogram trace");
        };
        let bins = hist.xbins.as_ref().unwrap();
        assert!((bins.size - width).abs() < 1e-12);
        assert_eq!(hist.histnorm.as_deref(), Some("probability density"));
    }
    for trace in &figure.data[2..] {
        let Trace::Scatter(curve) = trace else {
            panic!("expected a scatter trace");
        };
        assert_eq!(curve.x.len(), 500);
        assert_eq!(curve.showlegend, Some(false));
    }
    assert_eq!(figure.layout.barmode, Some(BarMode::Overlay));
    assert!(figure.shows_legend());
    assert!((bin_width(&[1.0, 2.0, 3.0, 4.0]) - sd / 8.0).abs() < 1e-12);
}

#[test]
fn test_dist_toggles() {
    let series = Series::from_values("r", vec![0.5, 1.5, 1.0, 2.5]);
    let curve_only = DistOptions {
        show_bars: false,
        ..DistOptions::default()
    };
    let figure = build_dist(series.clone().into(), &curve_only).unwrap();
    assert_eq!(figure.data.len(), 1);
    let Trace::Scatter(curve) = &figure.data[0] else {
        panic!("expected a scatter trace");
    };
    assert_eq!(curve.showlegend, Some(true));

    let bars_only = DistOptions {
        show_curve: false,
        ..DistOptions::default()
    };
    let figure = build_dist(series.into(), &bars_only).unwrap();
    assert_eq!(figure.data.len(), 1);
    assert!(matches!(figure.data[0], Trace::Histogram(_)));
}

#[test]
fn test_dist_rejects_constant_column() {
    let series = Series::from_values("flat", vec![1.0, 1.0, 1.0]);
    assert!(matches!(
        build_dist(series.into(), &DistOptions::default()),
        Err(ChartError::InvalidData(_))
    ));
}
