//! Data structures for benchmark reports and aggregated points

use serde::{Deserialize, Serialize};

/// A single timing record from a benchmark report
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct BenchmarkRecord {
    /// Hierarchical benchmark name (e.g. "CellDivision/0/iterations:10")
    pub name: String,
    /// Measured CPU time for this record
    pub cpu_time: f64,
    /// Wall-clock time, if the runner reported one
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub real_time: Option<f64>,
    /// Unit of the reported times (e.g. "ms")
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub time_unit: Option<String>,
    /// Iteration count the runner used for this record
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub iterations: Option<u64>,
}

impl BenchmarkRecord {
    /// The case this record belongs to: everything before the first `/`,
    /// or the whole name when there is no separator.
    pub fn case_name(&self) -> &str {
        match self.name.find('/') {
            Some(idx) => &self.name[..idx],
            None => &self.name,
        }
    }
}

/// Machine context emitted at the top of a benchmark report.
///
/// Carried through for logging only; the aggregation pipeline never reads it.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct ReportContext {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub host_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub num_cpus: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mhz_per_cpu: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cpu_scaling_enabled: Option<bool>,
}

/// A parsed benchmark report: optional machine context plus the records
/// in document order
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct BenchmarkReport {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub context: Option<ReportContext>,
    pub benchmarks: Vec<BenchmarkRecord>,
}

/// A maximal contiguous run of records sharing one case name
#[derive(Debug, Clone, PartialEq)]
pub struct CaseGroup {
    /// Case name shared by every record in the group
    pub case_name: String,
    /// The group's records, in input order
    pub records: Vec<BenchmarkRecord>,
}

impl CaseGroup {
    /// Number of records in the group
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the group holds no records
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

/// The summary statistic for one case group, ready for plotting
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AggregatedPoint {
    /// Case name the point summarizes
    pub case_name: String,
    /// Arithmetic mean of cpu_time across the group
    pub mean_cpu_time: f64,
    /// Number of records that went into the mean
    pub sample_count: usize,
}
