//! Fintualistic demo gallery
//!
//! Renders one chart of every kind from synthetic fund data. Output goes to
//! `FINTUALISTIC_OUTPUT_DIR` (default: current directory); set
//! `FINTUALISTIC_DISPLAY=none` to skip opening the browser.

use anyhow::{anyhow, Result};
use chrono::{Days, NaiveDate};
use tracing::info;

use fintualistic::{
    AreaOptions, BarOptions, ChartStyle, ComboOptions, DistOptions, Export, Label, PieOptions,
    Plotter, ScatterOptions, Series, SeriesOptions, Settings, Table,
};

fn style(title: &str, subtitle: &str) -> ChartStyle {
    ChartStyle {
        title: title.to_string(),
        subtitle: subtitle.to_string(),
        ..ChartStyle::default()
    }
}

fn export(name: &str) -> Export {
    Export {
        imgname: name.to_string(),
        save: true,
    }
}

/// Deterministic wiggle so the gallery looks the same on every run.
fn wave(i: usize, phase: f64, scale: f64) -> f64 {
    let t = i as f64;
    scale * ((t / 7.0 + phase).sin() + 0.3 * (t / 2.0 + phase).cos())
}

fn price_path(days: usize, drift: f64, phase: f64) -> Vec<f64> {
    let mut price = 1000.0;
    (0..days)
        .map(|i| {
            price *= 1.0 + drift + wave(i, phase, 0.004);
            price
        })
        .collect()
}

fn main() -> Result<()> {
    let _ = fintualistic::telemetry::init_default_tracing();

    let settings = Settings::from_env();
    let plotter = Plotter::from_settings(&settings);
    info!(output_dir = %settings.output_dir.display(), "rendering gallery");

    let start = NaiveDate::from_ymd_opt(2024, 1, 1).ok_or_else(|| anyhow!("invalid start date"))?;
    let days: Vec<Label> = (0..120u64)
        .filter_map(|d| start.checked_add_days(Days::new(d)))
        .map(Label::from)
        .collect();
    let n = days.len();

    let funds = Table::new(days.clone())
        .with_column("Risky Norris", price_path(n, 0.0008, 0.0))?
        .with_column("Moderate Pitt", price_path(n, 0.0005, 1.0))?
        .with_column("Conservative Clooney", price_path(n, 0.0002, 2.0))?;

    plotter.plot_series(
        &funds,
        &SeriesOptions {
            style: style("Valor cuota", "Fondos 2024"),
            export: export("series"),
            xlabel: "Fecha".to_string(),
            ylabel: "CLP".to_string(),
            ..SeriesOptions::default()
        },
    )?;

    let monthly = Table::new(["Ene", "Feb", "Mar", "Abr"])
        .with_column("Aportes", vec![1200.0, 1500.0, 900.0, 2100.0])?
        .with_column("Rescates", vec![-300.0, -450.0, -800.0, -200.0])?;
    plotter.plot_bar(
        &monthly,
        &BarOptions {
            style: style("Flujos", "Millones de CLP"),
            export: export("bar"),
            stacked: true,
            ..BarOptions::default()
        },
    )?;

    let price = funds
        .column("Risky Norris")
        .ok_or_else(|| anyhow!("missing column"))?;
    let volume = Series::new(
        "Volumen",
        days.clone(),
        (0..n).map(|i| 500.0 + wave(i, 0.5, 200.0).abs()),
    )?;
    plotter.plot_combo_series(
        &price,
        &volume,
        &ComboOptions {
            style: style("Precio y volumen", "Risky Norris"),
            export: export("combo"),
            xlabel: "Fecha".to_string(),
            ..ComboOptions::default()
        },
    )?;

    let allocation = Series::new(
        "Allocation",
        ["Acciones", "Bonos", "Caja"],
        vec![60.004, 34.996, 5.0],
    )?;
    plotter.plot_pie(
        &allocation,
        &PieOptions {
            style: style("Composición", "Moderate Pitt"),
            export: export("pie"),
        },
    )?;

    let returns = |name: &str, phase: f64, beta: f64| {
        Series::from_values(
            name,
            (0..n).map(move |i| beta * wave(i, phase, 1.0) + wave(i, 3.0, 0.3)),
        )
    };
    let market = returns("Mercado", 0.0, 1.0);
    let fund = Series::from_values(
        "Fondo",
        market
            .values()
            .iter()
            .enumerate()
            .map(|(i, m)| 0.8 * m + wave(i, 5.0, 0.2)),
    );
    plotter.plot_scatter(
        &market,
        &fund,
        &ScatterOptions {
            style: style("Beta", "Retornos diarios"),
            export: export("scatter"),
            ..ScatterOptions::default()
        },
    )?;

    let distributions = Table::from_series([
        returns("Risky", 0.0, 1.5),
        returns("Conservative", 1.0, 0.5),
    ])?;
    plotter.plot_dist(
        &distributions,
        &DistOptions {
            style: style("Distribución", "Retornos diarios"),
            export: export("dist"),
            xlabel: Some("Retorno".to_string()),
            ..DistOptions::default()
        },
    )?;

    plotter.plot_area(
        &funds,
        &AreaOptions {
            style: style("Patrimonio", "Acumulado por fondo"),
            export: export("area"),
            ..AreaOptions::default()
        },
    )?;

    info!("gallery done");
    Ok(())
}
