//! Record filtering by benchmark name
//!
//! Mirrors the runner's own `--benchmark_filter`: a regex is matched against
//! each record's full hierarchical name, before grouping.

use crate::data::BenchmarkRecord;
use crate::error::Result;
use regex::Regex;

/// Keep only records whose full name matches `pattern`.
///
/// Relative order of the surviving records is unchanged, so the grouper's
/// contiguity invariant still holds for them.
pub fn filter_records(
    records: Vec<BenchmarkRecord>,
    pattern: &str,
) -> Result<Vec<BenchmarkRecord>> {
    let re = Regex::new(pattern)?;
    Ok(records.into_iter().filter(|r| re.is_match(&r.name)).collect())
}
