//! Loader for benchmark result documents
//!
//! Google Benchmark report shape:
//! ```json
//! {
//!   "context": { "date": "...", "host_name": "...", "num_cpus": 8 },
//!   "benchmarks": [
//!     { "name": "CellDivision/0", "cpu_time": 10.5, "time_unit": "ms" }
//!   ]
//! }
//! ```
//!
//! Every entry must carry a string `name` and a numeric `cpu_time`; anything
//! else is optional. Record order in the document is authoritative and is
//! preserved.

use crate::data::BenchmarkReport;
use crate::error::{Error, Result};
use std::path::Path;

/// Load and parse a benchmark report from a file.
///
/// The file handle lives only for the duration of the read; it is released
/// on every exit path before parsing starts.
pub fn load_from_file(path: &Path) -> Result<BenchmarkReport> {
    let content = std::fs::read_to_string(path).map_err(|e| Error::FileRead {
        path: path.display().to_string(),
        source: e,
    })?;

    load_from_str(&content)
}

/// Parse a benchmark report from a JSON string.
pub fn load_from_str(json: &str) -> Result<BenchmarkReport> {
    let report: BenchmarkReport = serde_json::from_str(json)?;
    Ok(report)
}
