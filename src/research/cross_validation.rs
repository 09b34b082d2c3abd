use rand::prelude::*;
use colored::Colorize;
use tracing::debug;
use crate::Sample;

use std::iter::Iterator;

const WIDTH: usize = 9;

/// A struct that generates 
/// pairs of training/test sample for cross validation.
/// The `i`th test sample is the `i`th block of
/// (shuffled) records and the training sample is the rest.
/// The last fold also takes the remainder of the records.
/// # Example
/// ```no_run
/// use minitree::prelude::*;
///
/// let sample = SampleReader::new()
///     .file("/path/to/lenses.txt")
///     .attributes(&["age", "prescript", "astigmatic", "tearRate"])
///     .read()?;
/// let cv = CrossValidation::new(&sample)
///     .n_folds(4)
///     .verbose(true)
///     .seed(777)
///     .shuffle();
/// for (train, test) in cv {
///     let f = Id3Builder::new(&train)
///         .build()
///         .fit()?;
///
///     let train_acc = f.accuracy(&train);
///     let test_acc = f.accuracy(&test);
///     println!("[train: {train_acc}] [test: {test_acc}]");
/// }
/// # Ok::<(), minitree::Error>(())
/// ```
pub struct CrossValidation<'a> {
    current_fold: usize,
    n_folds: usize,
    seed: u64,
    sample: &'a Sample,
    ix: Vec<usize>,
    verbose: bool,
}


impl<'a> CrossValidation<'a> {
    /// Construct a new instance of `CrossValidation.`
    #[inline]
    pub fn new(sample: &'a Sample) -> Self {
        let n_sample = sample.shape().0;
        let ix = (0..n_sample).collect::<Vec<_>>();
        Self {
            current_fold: 0,
            n_folds: 5.min(n_sample.max(1)),
            seed: 1234,
            verbose: false,
            sample,
            ix,
        }
    }


    /// Set the number of folds.
    /// The value is clamped into `[2, # of records]`,
    /// so that every training sample has a record
    /// unless the sample has a single record.
    /// Default value is `min(5, # of records).`
    #[inline]
    pub fn n_folds(mut self, n_folds: usize) -> Self {
        let n_sample = self.sample.shape().0.max(1);
        self.n_folds = n_folds.clamp(2.min(n_sample), n_sample);
        self
    }


    /// Set the seed of the randomness for shuffling.
    /// Default vaule is `1234.`
    #[inline]
    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }


    /// Set the verbose parameter.
    /// If `true`, `CrossValidation` prints some information
    /// when generating a train/test pair.
    /// Default vaule is `false.`
    #[inline]
    pub fn verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }


    /// Shuffle the records.
    /// By default, `CrossValidation` does not shuffle the sample.
    #[inline]
    pub fn shuffle(mut self) -> Self {
        let mut rng = StdRng::seed_from_u64(self.seed);
        self.ix.shuffle(&mut rng);
        self
    }


    /// Returns the training/test sample for `i`th fold.
    #[inline]
    fn fold_at(&self, i: usize) -> (Sample, Sample) {
        let sample_size = self.ix.len();
        let test_size = sample_size / self.n_folds;
        let start = i * test_size;
        let end = if i + 1 == self.n_folds {
            sample_size
        } else {
            start + test_size
        };
        self.sample.split(&self.ix, start, end)
    }
}


impl Iterator for CrossValidation<'_> {
    type Item = (Sample, Sample);
    fn next(&mut self) -> Option<Self::Item> {
        if self.current_fold >= self.n_folds { return None; }

        let output = self.fold_at(self.current_fold);
        self.current_fold += 1;

        let train_size = output.0.shape().0;
        let test_size = output.1.shape().0;
        debug!(fold = self.current_fold, train_size, test_size, "fold");
        if self.verbose {
            println!(
                "{}    {}    {}",
                format!("  [{: >3}'th fold]", self.current_fold).bold().red(),
                format!("[TRAIN {:>WIDTH$}]", train_size).bold().green(),
                format!("[TEST {:>WIDTH$}]", test_size).bold().yellow(),
            );
        }

        Some(output)
    }
}
