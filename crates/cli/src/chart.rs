//! SVG chart rendering for aggregated points

use anyhow::Context;
use bench_plot_core::{Error, PointSink, Result};
use plotters::prelude::*;
use std::collections::HashMap;
use std::path::{Path, PathBuf};

const CAPTION_FONT_SIZE: u32 = 30;
const AXIS_LABEL_FONT_SIZE: u32 = 18;
const DOT_SIZE: u32 = 6;

/// Sink that writes one SVG per accepted series into an output directory.
///
/// Each case becomes a single dot centered on the placeholder x coordinate,
/// captioned with the case name. Repeated labels (a case re-run after an
/// intervening case) get a `-2`, `-3`, ... suffix on the file stem so an
/// earlier chart is not overwritten.
pub struct ChartSink {
    out_dir: PathBuf,
    label_counts: HashMap<String, usize>,
}

impl ChartSink {
    pub fn new(out_dir: impl Into<PathBuf>) -> Self {
        Self {
            out_dir: out_dir.into(),
            label_counts: HashMap::new(),
        }
    }

    fn chart_path(&mut self, label: &str) -> PathBuf {
        let count = self.label_counts.entry(label.to_string()).or_insert(0);
        *count += 1;

        let stem = sanitize_stem(label);
        let file = if *count == 1 {
            format!("{stem}.svg")
        } else {
            format!("{stem}-{count}.svg")
        };
        self.out_dir.join(file)
    }

    fn render(&self, path: &Path, label: &str, xs: &[f64], ys: &[f64]) -> anyhow::Result<()> {
        std::fs::create_dir_all(&self.out_dir).context("Failed to create output directory")?;

        // f64::max ignores NaN, so finiteness must be checked before folding.
        anyhow::ensure!(
            xs.iter().chain(ys).all(|v| v.is_finite()),
            "series contains a non-finite value"
        );
        let y_max = ys.iter().copied().fold(0.0_f64, f64::max);
        // Headroom above the dot; keeps a zero mean drawable.
        let y_top = if y_max > 0.0 { y_max * 1.25 } else { 1.0 };

        let root = SVGBackend::new(path, (640, 480)).into_drawing_area();
        root.fill(&WHITE)?;

        let mut chart = ChartBuilder::on(&root)
            .caption(label, ("sans-serif", CAPTION_FONT_SIZE))
            .margin(20)
            .x_label_area_size(40)
            .y_label_area_size(70)
            .build_cartesian_2d(0.0..2.0, 0.0..y_top)?;

        chart
            .configure_mesh()
            .disable_x_mesh()
            .x_labels(1)
            .x_label_formatter(&|_| String::new())
            .y_desc("mean cpu_time")
            .label_style(("sans-serif", AXIS_LABEL_FONT_SIZE))
            .draw()?;

        let dots: Vec<(f64, f64)> = xs.iter().copied().zip(ys.iter().copied()).collect();
        chart.draw_series(
            dots.into_iter()
                .map(|coord| Circle::new(coord, DOT_SIZE, BLUE.filled())),
        )?;

        root.present()?;
        Ok(())
    }
}

impl PointSink for ChartSink {
    fn accept(&mut self, label: &str, xs: &[f64], ys: &[f64]) -> Result<()> {
        let path = self.chart_path(label);
        self.render(&path, label, xs, ys)
            .map_err(|e| Error::render(label, e))?;
        tracing::debug!("Wrote chart {}", path.display());
        Ok(())
    }
}

/// Keep chart file names portable: anything outside `[A-Za-z0-9._-]`
/// becomes `_`, and an empty label still gets a stem.
fn sanitize_stem(label: &str) -> String {
    let stem: String = label
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || matches!(c, '.' | '_' | '-') {
                c
            } else {
                '_'
            }
        })
        .collect();

    if stem.is_empty() {
        "unnamed".to_string()
    } else {
        stem
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_chart_sink_writes_one_svg_per_point() {
        let dir = tempfile::tempdir().unwrap();
        let mut sink = ChartSink::new(dir.path());

        sink.accept("CellDivision", &[1.0], &[15.0]).unwrap();
        sink.accept("Soma", &[1.0], &[5.0]).unwrap();

        let cell = dir.path().join("CellDivision.svg");
        let soma = dir.path().join("Soma.svg");
        assert!(cell.exists());
        assert!(soma.exists());

        let svg = std::fs::read_to_string(cell).unwrap();
        assert!(svg.contains("CellDivision"));
    }

    #[test]
    fn test_repeated_label_gets_suffixed_file() {
        let dir = tempfile::tempdir().unwrap();
        let mut sink = ChartSink::new(dir.path());

        sink.accept("Cell", &[1.0], &[1.0]).unwrap();
        sink.accept("Cell", &[1.0], &[2.0]).unwrap();

        assert!(dir.path().join("Cell.svg").exists());
        assert!(dir.path().join("Cell-2.svg").exists());
    }

    #[test]
    fn test_non_finite_mean_is_a_render_error() {
        let dir = tempfile::tempdir().unwrap();
        let mut sink = ChartSink::new(dir.path());

        let err = sink.accept("Nan", &[1.0], &[f64::NAN]).unwrap_err();
        assert!(matches!(err, Error::Render { .. }), "got {err:?}");

        let err = sink.accept("Inf", &[1.0], &[f64::INFINITY]).unwrap_err();
        assert!(matches!(err, Error::Render { .. }), "got {err:?}");

        // Neither failed series leaves a chart behind.
        assert!(!dir.path().join("Nan.svg").exists());
        assert!(!dir.path().join("Inf.svg").exists());
    }

    #[test]
    fn test_awkward_label_is_sanitized() {
        let dir = tempfile::tempdir().unwrap();
        let mut sink = ChartSink::new(dir.path());

        sink.accept("weird name?", &[1.0], &[1.0]).unwrap();
        assert!(dir.path().join("weird_name_.svg").exists());
    }
}
