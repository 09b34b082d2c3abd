//! Majority vote over class labels.
use std::collections::HashMap;

use crate::{Error, Result};


/// Returns the label that occurs most often in `labels`.
/// 
/// Among the labels tied for the maximal count,
/// the one that reaches the count first
/// (scanning `labels` in order) wins.
pub(crate) fn majority<'a, I>(labels: I) -> Result<&'a str>
    where I: IntoIterator<Item = &'a str>
{
    let mut counter: HashMap<&'a str, usize> = HashMap::new();
    let mut best: Option<(&'a str, usize)> = None;

    for label in labels {
        let count = counter.entry(label).or_insert(0);
        *count += 1;

        if best.map_or(true, |(_, max)| *count > max) {
            best = Some((label, *count));
        }
    }

    best.map(|(label, _)| label)
        .ok_or_else(|| Error::invariant("majority vote over no label"))
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_majority() {
        let labels = ["no", "soft", "no", "hard", "no", "soft"];
        assert_eq!(majority(labels).unwrap(), "no");
    }

    #[test]
    fn test_counts_every_label() {
        // The first label must not win by being scanned first.
        let labels = ["hard", "soft", "soft"];
        assert_eq!(majority(labels).unwrap(), "soft");
    }

    #[test]
    fn test_tie_first_to_reach_max() {
        // Both reach 2, but `b` gets there first.
        let labels = ["a", "b", "b", "a"];
        assert_eq!(majority(labels).unwrap(), "b");

        let labels = ["a", "b", "a", "b"];
        assert_eq!(majority(labels).unwrap(), "a");
    }

    #[test]
    fn test_single_label() {
        assert_eq!(majority(["only"]).unwrap(), "only");
    }

    #[test]
    fn test_no_label() {
        let res = majority(Vec::<&str>::new());
        assert!(matches!(res, Err(Error::Invariant { .. })), "got {res:?}");
    }
}
