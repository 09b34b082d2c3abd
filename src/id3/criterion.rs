//! Selects the attribute to split on by the information gain.
use crate::{Error, Result};
use crate::sample::sample_struct::Record;
use super::entropy::shannon_entropy;
use super::partition::{distinct_values, split_sample};


/// The gain threshold set as default.
/// A split whose gain is at most this value is regarded as useless.
pub const DEFAULT_GAIN_TOLERANCE: f64 = 1e-12;


/// The best splitting attribute found by [`best_split`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct Split {
    /// Position of the attribute in the current slice.
    pub(crate) axis: usize,
    /// Information gain of splitting on `axis`.
    pub(crate) gain: f64,
}


/// Returns the information gain obtained by partitioning `records`
/// on the `axis`-th attribute.
/// `base` is the entropy of `records` itself.
/// 
/// The weighted partition entropies are summed in ascending order,
/// so two attributes inducing the same multiset of partitions
/// get bit-identical gains regardless of the value order.
pub(crate) fn information_gain(records: &[Record], axis: usize, base: f64)
    -> Result<f64>
{
    let total = records.len() as f64;
    let mut terms = distinct_values(records, axis)
        .into_iter()
        .map(|value| -> Result<f64> {
            let part = split_sample(records, axis, value);
            let p = part.len() as f64 / total;
            Ok(p * shannon_entropy(&part)?)
        })
        .collect::<Result<Vec<f64>>>()?;
    terms.sort_by(f64::total_cmp);

    let conditional = terms.into_iter().sum::<f64>();
    Ok(base - conditional)
}


/// Returns the attribute among the first `n_attributes` positions
/// that maximizes the information gain.
/// 
/// An attribute replaces the current best one only if
/// its gain exceeds the best gain by more than `tolerance`,
/// so ties (up to rounding) are resolved by the position.
/// If no attribute has the gain greater than `tolerance`,
/// this function returns `Ok(None)`.
pub(crate) fn best_split(
    records: &[Record],
    n_attributes: usize,
    tolerance: f64,
) -> Result<Option<Split>>
{
    if records.is_empty() {
        return Err(Error::invariant("split selection on an empty slice"));
    }
    let base = shannon_entropy(records)?;

    let mut best: Option<Split> = None;
    for axis in 0..n_attributes {
        let gain = information_gain(records, axis, base)?;
        let threshold = best.map_or(0f64, |split| split.gain) + tolerance;
        if gain > threshold {
            best = Some(Split { axis, gain });
        }
    }

    Ok(best)
}


#[cfg(test)]
mod tests {
    use super::*;

    fn to_records(rows: &[&[&str]]) -> Vec<Record> {
        rows.iter()
            .map(|row| row.iter().map(|v| v.to_string()).collect())
            .collect()
    }

    #[test]
    fn test_perfect_split() {
        let s = to_records(&[
            &["sunny", "hot", "stay"],
            &["sunny", "mild", "stay"],
            &["rainy", "hot", "play"],
            &["rainy", "mild", "play"],
        ]);
        let split = best_split(&s, 2, DEFAULT_GAIN_TOLERANCE)
            .unwrap()
            .expect("a useful split exists");
        assert_eq!(split.axis, 0);
        assert!((split.gain - 1.0).abs() < 1e-9, "got {}", split.gain);
    }

    #[test]
    fn test_tie_keeps_first() {
        // Both attributes separate the labels perfectly.
        let s = to_records(&[
            &["a", "x", "yes"],
            &["b", "y", "no"],
        ]);
        let split = best_split(&s, 2, DEFAULT_GAIN_TOLERANCE)
            .unwrap()
            .unwrap();
        assert_eq!(split.axis, 0);
    }

    #[test]
    fn test_tie_with_reordered_partitions() {
        // `a` and `b` induce partitions with the label counts
        // (L0, L1, L2) = [0, 2, 2], [3, 1, 2], [0, 3, 2],
        // but `b` meets them in the reverse order.
        let s = to_records(&[
            &["x1", "y1", "L1"],
            &["x1", "y1", "L1"],
            &["x2", "y1", "L1"],
            &["x2", "y2", "L0"],
            &["x2", "y2", "L0"],
            &["x2", "y2", "L0"],
            &["x3", "y2", "L1"],
            &["x3", "y3", "L1"],
            &["x3", "y3", "L1"],
            &["x1", "y1", "L2"],
            &["x1", "y1", "L2"],
            &["x2", "y2", "L2"],
            &["x2", "y2", "L2"],
            &["x3", "y3", "L2"],
            &["x3", "y3", "L2"],
        ]);
        let base = shannon_entropy(&s).unwrap();
        let ga = information_gain(&s, 0, base).unwrap();
        let gb = information_gain(&s, 1, base).unwrap();
        assert_eq!(ga.to_bits(), gb.to_bits(), "{ga} vs {gb}");

        for tolerance in [0f64, DEFAULT_GAIN_TOLERANCE] {
            let split = best_split(&s, 2, tolerance).unwrap().unwrap();
            assert_eq!(split.axis, 0, "tolerance {tolerance}");
        }
    }

    #[test]
    fn test_no_useful_split() {
        // Neither attribute tells anything about the label.
        let s = to_records(&[
            &["a", "x", "yes"],
            &["a", "x", "no"],
        ]);
        let split = best_split(&s, 2, DEFAULT_GAIN_TOLERANCE).unwrap();
        assert_eq!(split, None);
    }

    #[test]
    fn test_zero_gain_attribute_is_skipped() {
        let s = to_records(&[
            &["a", "x", "yes"],
            &["a", "y", "no"],
            &["a", "x", "yes"],
        ]);
        let split = best_split(&s, 2, DEFAULT_GAIN_TOLERANCE)
            .unwrap()
            .unwrap();
        assert_eq!(split.axis, 1);
    }

    #[test]
    fn test_lenses_root_gain() {
        let s = to_records(&[
            &["young", "myope", "no", "reduced", "none"],
            &["pre", "hyper", "no", "normal", "soft"],
            &["presbyopic", "myope", "yes", "normal", "hard"],
        ]);
        let split = best_split(&s, 4, DEFAULT_GAIN_TOLERANCE)
            .unwrap()
            .unwrap();
        assert_eq!(split.axis, 0);
        assert!((split.gain - 3f64.log2()).abs() < 1e-9);
    }

    #[test]
    fn test_empty_slice() {
        let res = best_split(&[], 3, DEFAULT_GAIN_TOLERANCE);
        assert!(matches!(res, Err(Error::Invariant { .. })), "got {res:?}");
    }
}
