//! Reduction of case groups to aggregated points

use crate::data::{AggregatedPoint, CaseGroup};
use crate::error::{Error, Result};

/// Reduce one case group to its aggregated point.
///
/// The mean is a plain left-to-right floating-point sum divided by the
/// group size; NaN and infinity propagate per IEEE-754. An empty group is
/// an invariant violation upstream and is reported rather than divided by.
pub fn aggregate_group(group: &CaseGroup) -> Result<AggregatedPoint> {
    if group.is_empty() {
        return Err(Error::EmptyGroup(group.case_name.clone()));
    }

    let sum: f64 = group.records.iter().map(|r| r.cpu_time).sum();
    let count = group.len();

    Ok(AggregatedPoint {
        case_name: group.case_name.clone(),
        mean_cpu_time: sum / count as f64,
        sample_count: count,
    })
}

/// Aggregate every group in order, failing fast on the first error.
pub fn aggregate_groups(groups: &[CaseGroup]) -> Result<Vec<AggregatedPoint>> {
    groups.iter().map(aggregate_group).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::BenchmarkRecord;
    use pretty_assertions::assert_eq;

    fn group(case_name: &str, cpu_times: &[f64]) -> CaseGroup {
        CaseGroup {
            case_name: case_name.to_string(),
            records: cpu_times
                .iter()
                .enumerate()
                .map(|(i, &cpu_time)| BenchmarkRecord {
                    name: format!("{case_name}/{i}"),
                    cpu_time,
                    real_time: None,
                    time_unit: None,
                    iterations: None,
                })
                .collect(),
        }
    }

    #[test]
    fn test_mean_of_three_values() {
        let point = aggregate_group(&group("Foo", &[2.0, 4.0, 6.0])).unwrap();

        assert_eq!(point.case_name, "Foo");
        assert_eq!(point.mean_cpu_time, 4.0);
        assert_eq!(point.sample_count, 3);
    }

    #[test]
    fn test_singleton_group_mean_is_the_value() {
        let point = aggregate_group(&group("Bar", &[5.0])).unwrap();

        assert_eq!(point.mean_cpu_time, 5.0);
        assert_eq!(point.sample_count, 1);
    }

    #[test]
    fn test_empty_group_is_an_error() {
        let err = aggregate_group(&group("Ghost", &[])).unwrap_err();
        match err {
            Error::EmptyGroup(case) => assert_eq!(case, "Ghost"),
            other => panic!("expected EmptyGroup, got {other:?}"),
        }
    }

    #[test]
    fn test_nan_propagates_into_the_mean() {
        let point = aggregate_group(&group("Nan", &[1.0, f64::NAN])).unwrap();
        assert!(point.mean_cpu_time.is_nan());
        assert_eq!(point.sample_count, 2);
    }

    #[test]
    fn test_aggregate_groups_preserves_order() {
        let groups = vec![group("B", &[1.0]), group("A", &[2.0, 4.0])];
        let points = aggregate_groups(&groups).unwrap();

        assert_eq!(points.len(), 2);
        assert_eq!(points[0].case_name, "B");
        assert_eq!(points[1].case_name, "A");
        assert_eq!(points[1].mean_cpu_time, 3.0);
    }

    #[test]
    fn test_aggregate_groups_fails_fast_on_empty_group() {
        let groups = vec![group("A", &[1.0]), group("B", &[]), group("C", &[2.0])];
        assert!(aggregate_groups(&groups).is_err());
    }
}
