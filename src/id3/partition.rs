//! Partitioning a slice of records on an attribute value.
use std::collections::HashSet;

use crate::sample::sample_struct::Record;


/// Returns the records whose `axis`-th value equals `value`,
/// with the `axis`-th value removed.
/// The order of the surviving records is preserved.
pub(crate) fn split_sample(records: &[Record], axis: usize, value: &str)
    -> Vec<Record>
{
    records.iter()
        .filter(|record| record[axis] == value)
        .map(|record| {
            let mut reduced = Vec::with_capacity(record.len() - 1);
            reduced.extend_from_slice(&record[..axis]);
            reduced.extend_from_slice(&record[axis + 1..]);
            reduced
        })
        .collect()
}


/// Returns the distinct `axis`-th values of `records`
/// in the order of their first appearance.
pub(crate) fn distinct_values(records: &[Record], axis: usize) -> Vec<&str> {
    let mut seen = HashSet::new();
    records.iter()
        .map(|record| record[axis].as_str())
        .filter(|value| seen.insert(*value))
        .collect()
}
