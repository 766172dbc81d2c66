//! Text and JSON sinks for aggregated points

use bench_plot_core::{Error, PointSink, Result};
use std::io::Write;

/// Sink that writes one aligned line per series to any writer.
pub struct TextSink<W: Write> {
    writer: W,
}

impl<W: Write> TextSink<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }
}

impl<W: Write> PointSink for TextSink<W> {
    fn accept(&mut self, label: &str, _xs: &[f64], ys: &[f64]) -> Result<()> {
        for y in ys {
            writeln!(self.writer, "{label:<40} {y:>14.4}")
                .map_err(|e| Error::render(label, e))?;
        }
        Ok(())
    }
}

/// Sink that buffers series and writes them out as one JSON array.
///
/// `finish` must be called after emission; dropping the sink without it
/// writes nothing.
pub struct JsonSink<W: Write> {
    writer: W,
    series: Vec<serde_json::Value>,
}

impl<W: Write> JsonSink<W> {
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            series: Vec::new(),
        }
    }

    pub fn finish(mut self) -> Result<()> {
        let rendered =
            serde_json::to_string_pretty(&self.series).map_err(|e| Error::render("<json>", e))?;
        writeln!(self.writer, "{rendered}").map_err(|e| Error::render("<json>", e))?;
        Ok(())
    }
}

impl<W: Write> PointSink for JsonSink<W> {
    fn accept(&mut self, label: &str, xs: &[f64], ys: &[f64]) -> Result<()> {
        self.series.push(serde_json::json!({
            "label": label,
            "x": xs,
            "y": ys,
        }));
        Ok(())
    }
}
