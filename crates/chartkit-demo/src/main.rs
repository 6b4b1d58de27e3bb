// File: crates/chartkit-demo/src/main.rs
// Summary: Demo loads CSV data, applies an optional JSON style and renders a line/bar/pie chart to PNG.

mod data;

use std::path::PathBuf;

use anyhow::{Context, Result};
use chartkit_core::{theme, Chart, ChartData, ChartKind, ChartStyle, Size};
use chartkit_skia::{RenderOptions, SkiaRenderer};
use clap::{Parser, ValueEnum};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Clone, Copy, Debug, ValueEnum)]
enum Kind {
    Line,
    Bar,
    Pie,
}

impl From<Kind> for ChartKind {
    fn from(k: Kind) -> Self {
        match k {
            Kind::Line => ChartKind::Line,
            Kind::Bar => ChartKind::Bar,
            Kind::Pie => ChartKind::Pie,
        }
    }
}

#[derive(Debug, Parser)]
#[command(name = "chartkit-demo", about = "Render a chart from CSV data to PNG")]
struct Args {
    /// CSV with a `value` column (optional: series, label, date, lower, upper)
    #[arg(long)]
    input: PathBuf,

    #[arg(long, value_enum, default_value_t = Kind::Line)]
    kind: Kind,

    /// JSON chart style; omitted fields use defaults
    #[arg(long)]
    style: Option<PathBuf>,

    #[arg(long, default_value = "target/out/chart.png")]
    out: PathBuf,

    #[arg(long, default_value_t = chartkit_core::types::WIDTH as u32)]
    width: u32,

    #[arg(long, default_value_t = chartkit_core::types::HEIGHT as u32)]
    height: u32,

    /// dark, light or high-contrast-dark
    #[arg(long, default_value = "dark")]
    theme: String,

    /// Skip text rendering
    #[arg(long)]
    no_labels: bool,
}

fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "chartkit_demo=info,chartkit_core=info".into()),
        )
        .init();

    let args = Args::parse();

    let data = data::load_csv(&args.input)
        .with_context(|| format!("failed to load CSV '{}'", args.input.display()))?;
    if data.is_empty() {
        anyhow::bail!("no data points loaded; check headers/delimiter.");
    }
    info!(
        series = data.series().len(),
        points = data.points().count(),
        "loaded {}",
        args.input.display()
    );

    let style = match &args.style {
        Some(path) => ChartStyle::from_json_file(path).with_context(|| format!("loading style '{}'", path.display()))?,
        None => ChartStyle::default(),
    };

    let data = match (args.kind, data) {
        // Pie charts draw the first series only
        (Kind::Pie, ChartData::Multi(mut m)) if !m.series.is_empty() => ChartData::Single(m.series.remove(0)),
        (_, d) => d,
    };

    let chart = Chart::new(args.kind.into(), data)
        .with_style(style)
        .with_theme(theme::find(&args.theme));
    let scale = chart.scale();
    info!(
        min = scale.min_value,
        max = scale.max_value,
        range = scale.range,
        average = scale.average,
        "resolved scale"
    );

    let frame = chart.layout(Size::new(args.width as f64, args.height as f64));
    let opts = RenderOptions { draw_labels: !args.no_labels, ..RenderOptions::default() };
    SkiaRenderer::new()
        .render_to_png(&frame, &opts, &args.out)
        .with_context(|| format!("rendering to '{}'", args.out.display()))?;
    println!("Wrote {}", args.out.display());
    Ok(())
}
