//! Defines the trait for the grown classifiers.
//! 
//! A classifier maps a record, addressed by the attribute list
//! used at training time, to a class label.
//! Unlike the majority of classifiers, a categorical tree
//! may not know what to say about a record,
//! so the prediction is a `Result`.
use rayon::prelude::*;
use tracing::warn;

use crate::{Result, Sample};


/// A trait that defines the behavor of classifier.
pub trait Classifier {
    /// Predicts the label of the given record.
    /// `record` consists of the attribute values,
    /// optionally followed by a (ignored) label.
    fn predict<S>(&self, record: &[S]) -> Result<String>
        where S: AsRef<str>;


    /// Predicts the labels of all records in `sample`.
    /// The records are classified in parallel.
    fn predict_all(&self, sample: &Sample) -> Vec<Result<String>>
        where Self: Sync
    {
        sample.records()
            .par_iter()
            .enumerate()
            .map(|(row, record)| {
                let prediction = self.predict(record.as_slice());
                if let Err(ref e) = prediction {
                    warn!(row, error = %e, "failed to classify a record");
                }
                prediction
            })
            .collect()
    }


    /// Returns the ratio of the records in `sample`
    /// whose label is predicted correctly.
    /// A record that cannot be classified counts as a mistake.
    fn accuracy(&self, sample: &Sample) -> f64
        where Self: Sync
    {
        let n_sample = sample.records().len();
        if n_sample == 0 { return 0f64; }

        let correct = self.predict_all(sample)
            .into_iter()
            .zip(sample.labels())
            .filter(|(p, y)| p.as_deref().is_ok_and(|p| p == *y))
            .count();

        correct as f64 / n_sample as f64
    }
}
