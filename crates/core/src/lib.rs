//! bench-plot-core - Report aggregation for bench-plot
//!
//! This crate contains WASM-compatible code: the whole pipeline from a
//! benchmark report document to aggregated per-case points, with rendering
//! left behind a sink trait for the caller to implement.
//!
//! # Pipeline
//!
//! Loader → Grouper → Aggregator → sink, one direction, single pass:
//!
//! ```no_run
//! use bench_plot_core::{aggregate_groups, emit_points, group_by_case, load_from_file};
//! use bench_plot_core::sink::RecordingSink;
//!
//! let report = load_from_file("results.json".as_ref()).unwrap();
//! let groups = group_by_case(report.benchmarks);
//! let points = aggregate_groups(&groups).unwrap();
//!
//! let mut sink = RecordingSink::default();
//! emit_points(&points, &mut sink).unwrap();
//! ```

pub mod aggregate;
pub mod data;
pub mod error;
pub mod filter;
pub mod group;
pub mod loader;
pub mod sink;

pub use aggregate::{aggregate_group, aggregate_groups};
pub use data::{AggregatedPoint, BenchmarkRecord, BenchmarkReport, CaseGroup, ReportContext};
pub use error::{Error, Result};
pub use filter::filter_records;
pub use group::group_by_case;
pub use loader::{load_from_file, load_from_str};
pub use sink::{emit_points, PointSink, RecordingSink, PLACEHOLDER_X};
