use std::collections::HashSet;

use crate::{Error, Result};


/// A record is a sequence of attribute values
/// followed by its class label.
pub type Record = Vec<String>;


/// Returns the class label of `record`, i.e., the last element.
#[inline(always)]
pub(crate) fn label_of(record: &[String]) -> &str {
    record.last()
        .map(String::as_str)
        .unwrap_or_default()
}


/// Struct `Sample` holds a training table for ID3.
/// The `i`th attribute name describes the `i`th value of each record.
/// The last value of each record is its class label.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sample {
    attributes: Vec<String>,
    records: Vec<Record>,
}


impl Sample {
    /// Construct a new instance of `Sample`.
    /// Fails with [`Error::Input`] if
    /// - there is no record,
    /// - an attribute name is empty or blank,
    /// - an attribute name appears twice, or
    /// - a record does not consist of `attributes.len()` values
    ///   plus one label.
    pub fn new<S>(attributes: Vec<S>, records: Vec<Record>) -> Result<Self>
        where S: Into<String>
    {
        let attributes = attributes.into_iter()
            .map(Into::into)
            .collect::<Vec<String>>();

        if records.is_empty() {
            return Err(Error::input("the sample has no record"));
        }

        if let Some(ix) = attributes.iter().position(|a| a.trim().is_empty()) {
            return Err(Error::input(
                format!("attribute {ix} has an empty name")
            ));
        }

        let mut seen = HashSet::new();
        if let Some(name) = attributes.iter().find(|name| !seen.insert(*name)) {
            return Err(Error::input(
                format!("attribute `{name}` appears more than once")
            ));
        }

        let arity = attributes.len() + 1;
        let malformed = records.iter()
            .enumerate()
            .find(|(_, record)| record.len() != arity);
        if let Some((row, record)) = malformed {
            return Err(Error::input(format!(
                "record {row} has {} fields, expected {arity} \
                ({} attributes and a label)",
                record.len(),
                attributes.len(),
            )));
        }

        Ok(Self { attributes, records })
    }


    /// Construct a `Sample` from borrowed rows.
    /// This is a convenient wrapper of [`Sample::new`].
    /// ```
    /// use minitree::Sample;
    /// let sample = Sample::from_rows(
    ///     &["outlook", "windy"],
    ///     &[["sunny", "no", "play"], ["rainy", "yes", "stay"]],
    /// ).unwrap();
    /// assert_eq!(sample.shape(), (2, 2));
    /// ```
    pub fn from_rows<A, V, R>(attributes: &[A], rows: &[R]) -> Result<Self>
        where A: AsRef<str>,
              V: AsRef<str>,
              R: AsRef<[V]>,
    {
        let attributes = attributes.iter()
            .map(|name| name.as_ref().to_string())
            .collect::<Vec<_>>();
        let records = rows.iter()
            .map(|row| {
                row.as_ref()
                    .iter()
                    .map(|v| v.as_ref().to_string())
                    .collect::<Record>()
            })
            .collect::<Vec<_>>();
        Self::new(attributes, records)
    }


    /// Returns the attribute names.
    #[inline]
    pub fn attributes(&self) -> &[String] {
        &self.attributes[..]
    }


    /// Returns the records.
    #[inline]
    pub fn records(&self) -> &[Record] {
        &self.records[..]
    }


    /// Returns the pair of the number of records and attributes.
    #[inline]
    pub fn shape(&self) -> (usize, usize) {
        (self.records.len(), self.attributes.len())
    }


    /// Returns an iterator over the class labels.
    #[inline]
    pub fn labels(&self) -> impl Iterator<Item = &str> + '_ {
        self.records.iter().map(|record| label_of(record))
    }


    /// Split `self` into a training/test pair.
    /// The records indexed by `ix[start..end]` go to the test sample
    /// and the others go to the training sample.
    /// The returned samples may be empty,
    /// so this method bypasses the check in [`Sample::new`].
    pub(crate) fn split(&self, ix: &[usize], start: usize, end: usize)
        -> (Self, Self)
    {
        let end = end.min(ix.len());
        let start = start.min(end);

        let test = self.subset(ix[start..end].iter().copied());
        let train = self.subset(
            ix[..start].iter().chain(&ix[end..]).copied()
        );

        (train, test)
    }


    /// Returns the sample consisting of the records indexed by `indices`.
    #[inline]
    fn subset<I>(&self, indices: I) -> Self
        where I: Iterator<Item = usize>
    {
        let records = indices.map(|i| self.records[i].clone())
            .collect::<Vec<_>>();
        Self { attributes: self.attributes.clone(), records }
    }
}
