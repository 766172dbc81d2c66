//! bench-plot CLI - Aggregate a benchmark report into per-case plots

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use std::path::PathBuf;
use tracing::{debug, info};

mod chart;
mod text;

use bench_plot_core::{
    aggregate_groups, emit_points, filter_records, group_by_case, load_from_file,
};
use chart::ChartSink;
use text::{JsonSink, TextSink};

/// bench-plot: One aggregated point per benchmark case, ready for plotting
#[derive(Parser, Debug)]
#[command(name = "bench-plot")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Path to the benchmark results document (JSON)
    report: PathBuf,

    /// Only keep records whose full name matches this regex
    #[arg(short, long, env = "BENCH_PLOT_FILTER")]
    filter: Option<String>,

    /// Directory for generated SVG charts
    #[arg(long, default_value = "plots")]
    out_dir: PathBuf,

    /// Output format for the aggregated points
    #[arg(long, value_enum, default_value = "svg")]
    format: Format,

    #[arg(short, long)]
    verbose: bool,
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum Format {
    /// One SVG chart per case in the output directory
    Svg,
    /// Aligned lines on stdout
    Text,
    /// JSON array on stdout
    Json,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let log_level = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(log_level)),
        )
        .init();

    run(cli)
}

fn run(cli: Cli) -> Result<()> {
    info!("Loading benchmark report from {:?}", cli.report);
    let report = load_from_file(&cli.report)
        .with_context(|| format!("Failed to load benchmark report: {:?}", cli.report))?;

    if let Some(ref context) = report.context {
        debug!(
            "Report context: date={:?} host={:?} cpus={:?}",
            context.date, context.host_name, context.num_cpus
        );
    }

    let records = match cli.filter {
        Some(ref pattern) => filter_records(report.benchmarks, pattern)
            .with_context(|| format!("Invalid --filter pattern: {pattern}"))?,
        None => report.benchmarks,
    };

    if records.is_empty() {
        info!("No benchmark records to aggregate; nothing to plot");
        return Ok(());
    }

    let groups = group_by_case(records);
    debug!("Grouped records into {} case group(s)", groups.len());

    let points = aggregate_groups(&groups).context("Failed to aggregate case groups")?;
    info!("Aggregated {} point(s)", points.len());

    match cli.format {
        Format::Svg => {
            let mut sink = ChartSink::new(&cli.out_dir);
            emit_points(&points, &mut sink).context("Failed to render charts")?;
            info!("Wrote {} chart(s) to {:?}", points.len(), cli.out_dir);
        }
        Format::Text => {
            let stdout = std::io::stdout();
            let mut sink = TextSink::new(stdout.lock());
            emit_points(&points, &mut sink).context("Failed to write points")?;
        }
        Format::Json => {
            let stdout = std::io::stdout();
            let mut sink = JsonSink::new(stdout.lock());
            emit_points(&points, &mut sink).context("Failed to write points")?;
            sink.finish().context("Failed to write points")?;
        }
    }

    Ok(())
}
