//! Sink boundary for aggregated points
//!
//! Rendering is owned by the caller: the core hands each aggregated point
//! to a [`PointSink`] and never draws anything itself.

use crate::data::AggregatedPoint;
use crate::error::Result;

/// Placeholder x coordinate for single-point series.
///
/// Each case renders as one dot; the x axis carries no information.
pub const PLACEHOLDER_X: f64 = 1.0;

/// Receiver for aggregated series.
///
/// `accept` is called once per case with a label and parallel x/y slices.
/// Implementations report failure through [`crate::Error::Render`].
pub trait PointSink {
    fn accept(&mut self, label: &str, xs: &[f64], ys: &[f64]) -> Result<()>;
}

/// Emit every point to the sink, one `accept` call per point in order.
///
/// Fail-fast: the first sink error aborts emission of the remaining points.
/// A partially rendered chart set is worse than a clear failure.
pub fn emit_points(points: &[AggregatedPoint], sink: &mut dyn PointSink) -> Result<()> {
    for point in points {
        sink.accept(
            &point.case_name,
            &[PLACEHOLDER_X],
            &[point.mean_cpu_time],
        )?;
    }
    Ok(())
}

/// Sink that records every accepted series; used by tests.
#[derive(Debug, Default)]
pub struct RecordingSink {
    pub series: Vec<(String, Vec<f64>, Vec<f64>)>,
}

impl PointSink for RecordingSink {
    fn accept(&mut self, label: &str, xs: &[f64], ys: &[f64]) -> Result<()> {
        self.series
            .push((label.to_string(), xs.to_vec(), ys.to_vec()));
        Ok(())
    }
}
