//! Contiguous grouping of benchmark records by case name

use crate::data::{BenchmarkRecord, CaseGroup};

/// Partition records into one group per maximal contiguous run sharing a
/// case name, in first-appearance order.
///
/// Grouping is run-based, not a global group-by: if a case name reappears
/// after an intervening different case, it starts a fresh group. The
/// benchmark runner writes all iterations of a case consecutively, so
/// well-formed input never hits that path, but out-of-order input still
/// yields a well-defined result rather than a silent merge.
///
/// Every input record lands in exactly one group; an empty input yields an
/// empty vec.
pub fn group_by_case(records: Vec<BenchmarkRecord>) -> Vec<CaseGroup> {
    let mut groups: Vec<CaseGroup> = Vec::new();

    for record in records {
        // The last group's case_name is the cursor; no group yet means unset.
        let case = record.case_name();
        if groups.last().map_or(true, |g| g.case_name != case) {
            groups.push(CaseGroup {
                case_name: case.to_string(),
                records: Vec::new(),
            });
        }

        if let Some(group) = groups.last_mut() {
            group.records.push(record);
        }
    }

    groups
}
