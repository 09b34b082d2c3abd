use tracing::{debug, info};

use crate::{Error, Result, Sample};
use crate::sample::sample_struct::{label_of, Record};
use super::{
    node::Node,
    criterion::best_split,
    partition::{distinct_values, split_sample},
    vote::majority,
    id3_classifier::Id3Classifier,
};


use std::fmt;
use std::collections::BTreeMap;


/// The ID3 algorithm.  
/// Given a set of categorical training examples,
/// [`Id3`] outputs a decision tree classifier
/// named [`Id3Classifier`].
///
/// The code is based on:  
/// J. R. Quinlan, Induction of decision trees,
/// Machine Learning 1, 81–106 (1986).
///
/// [`Id3`] is constructed 
/// by [`Id3Builder`](crate::Id3Builder).
/// 
/// # Example
/// ```no_run
/// use minitree::prelude::*;
/// 
/// // Read the training data from the tab-delimited file.
/// let sample = SampleReader::new()
///     .file("/path/to/lenses.txt")
///     .attributes(&["age", "prescript", "astigmatic", "tearRate"])
///     .read()?;
/// 
/// let f = Id3Builder::new(&sample)
///     .build()
///     .fit()?;
/// 
/// let accuracy = f.accuracy(&sample);
/// println!("accuracy (train) is: {accuracy}");
/// # Ok::<(), minitree::Error>(())
/// ```
pub struct Id3<'a> {
    sample: &'a Sample,
    gain_tolerance: f64,
}


/// The reason why a node becomes a leaf.
#[derive(Debug, Clone, Copy)]
enum Stop {
    Pure,
    NoAttribute,
    NoUsefulSplit,
}


impl<'a> Id3<'a> {
    /// Initialize [`Id3`].
    /// This method is called only via `Id3Builder::build`.
    #[inline]
    pub(super) fn from_components(sample: &'a Sample, gain_tolerance: f64)
        -> Self
    {
        Self { sample, gain_tolerance, }
    }


    /// Grow the decision tree over the whole sample.
    /// The tree is returned only if every node is grown successfully.
    /// Fails with [`Error::Input`] if the sample has no record,
    /// e.g., the training part of a single-record cross validation.
    pub fn fit(&self) -> Result<Id3Classifier> {
        if self.sample.shape().0 == 0 {
            return Err(Error::input("the sample has no record"));
        }

        let schema = self.sample.attributes().to_vec();
        let records = self.sample.records().to_vec();

        let root = self.grow(records, &schema, 0)?;

        let f = Id3Classifier::from_components(schema, root);
        info!(
            records = self.sample.shape().0,
            attributes = self.sample.shape().1,
            leaves = f.leaf_count(),
            depth = f.depth(),
            "grew an ID3 tree"
        );
        Ok(f)
    }


    /// Construct the sub-tree for `records`.
    /// `attributes[i]` names the `i`th value of each record.
    /// Each call owns its slice,
    /// and the reduced attribute list is a fresh copy shared
    /// read-only by the children.
    fn grow(&self, records: Vec<Record>, attributes: &[String], depth: usize)
        -> Result<Node>
    {
        let labels = records.iter()
            .map(|record| label_of(record))
            .collect::<Vec<_>>();
        let vote = majority(labels.iter().copied())?;

        if labels.iter().all(|&y| y == vote) {
            return Ok(Self::leaf(vote, Stop::Pure, depth));
        }

        if attributes.is_empty() {
            return Ok(Self::leaf(vote, Stop::NoAttribute, depth));
        }

        let split = match best_split(&records, attributes.len(), self.gain_tolerance)? {
            Some(split) => split,
            None => {
                return Ok(Self::leaf(vote, Stop::NoUsefulSplit, depth));
            },
        };

        let axis = split.axis;
        let name = &attributes[axis];
        debug!(attribute = %name, gain = split.gain, depth, "split");

        let sub_attributes = attributes.iter()
            .enumerate()
            .filter(|&(i, _)| i != axis)
            .map(|(_, a)| a.clone())
            .collect::<Vec<_>>();

        let mut children = BTreeMap::new();
        for value in distinct_values(&records, axis) {
            let part = split_sample(&records, axis, value);
            let child = self.grow(part, &sub_attributes, depth + 1)?;
            children.insert(value.to_string(), child);
        }

        Ok(Node::branch(name.clone(), children))
    }


    #[inline]
    fn leaf(label: &str, reason: Stop, depth: usize) -> Node {
        debug!(label, ?reason, depth, "leaf");
        Node::leaf(label)
    }
}


impl fmt::Display for Id3<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (n_records, n_attributes) = self.sample.shape();
        writeln!(
            f,
            "\
            ----------\n\
            # ID3 Decision Tree\n\n\
            - Records: {n_records}\n\
            - Gain tolerance: {}\n\
            - Attributes ({n_attributes}):\
            ",
            self.gain_tolerance,
        )?;

        for name in self.sample.attributes() {
            writeln!(f, "\t* {name}")?;
        }

        write!(f, "----------")
    }
}
