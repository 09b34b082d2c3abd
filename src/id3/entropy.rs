//! Label-distribution entropy of a slice of records.
use std::collections::BTreeMap;

use crate::{Error, Result};
use crate::sample::sample_struct::{label_of, Record};


/// Returns the number of occurrences of each label in `records`.
/// `BTreeMap` keeps the summation order independent of hashing.
#[inline]
pub(crate) fn label_counts(records: &[Record]) -> BTreeMap<&str, usize> {
    let mut counts = BTreeMap::new();
    for record in records {
        *counts.entry(label_of(record)).or_insert(0_usize) += 1;
    }
    counts
}


/// Returns the Shannon entropy (in bits) of the labels in `records`.
/// 
/// `records` must be non-empty.
/// An empty slice means the caller is broken,
/// so it is reported as [`Error::Invariant`].
pub(crate) fn shannon_entropy(records: &[Record]) -> Result<f64> {
    if records.is_empty() {
        return Err(Error::invariant("entropy of an empty slice"));
    }

    let total = records.len() as f64;
    let entropy = label_counts(records)
        .into_values()
        .map(|count| {
            let p = count as f64 / total;
            -p * p.log2()
        })
        .sum::<f64>();

    Ok(entropy)
}


#[cfg(test)]
mod tests {
    use super::*;

    const TOLERANCE: f64 = 1e-9;

    fn records(labels: &[&str]) -> Vec<Record> {
        labels.iter()
            .map(|y| vec!["v".to_string(), y.to_string()])
            .collect()
    }

    #[test]
    fn test_single_label() {
        let s = records(&["yes", "yes", "yes"]);
        let h = shannon_entropy(&s).unwrap();
        assert!(h.abs() < TOLERANCE, "expected 0, got {h}.");
    }

    #[test]
    fn test_even_two_labels() {
        let s = records(&["yes", "no", "no", "yes"]);
        let h = shannon_entropy(&s).unwrap();
        assert!((h - 1.0).abs() < TOLERANCE, "expected 1, got {h}.");
    }

    #[test]
    fn test_even_k_labels() {
        let s = records(&["a", "b", "c", "d", "e"]);
        let h = shannon_entropy(&s).unwrap();
        let exp = 5f64.log2();
        assert!((h - exp).abs() < TOLERANCE, "expected {exp}, got {h}.");
    }

    #[test]
    fn test_skewed_labels() {
        let s = records(&["yes", "yes", "no", "no", "no"]);
        let h = shannon_entropy(&s).unwrap();
        let exp = -(0.4 * 0.4f64.log2() + 0.6 * 0.6f64.log2());
        assert!((h - exp).abs() < TOLERANCE, "expected {exp}, got {h}.");
    }

    #[test]
    fn test_empty_slice() {
        let res = shannon_entropy(&[]);
        assert!(matches!(res, Err(Error::Invariant { .. })), "got {res:?}");
    }
}
