use crate::{Sample, Id3};
use super::criterion::DEFAULT_GAIN_TOLERANCE;


/// A struct that builds `Id3`.
/// `Id3Builder` keeps parameters for constructing `Id3`.
/// 
/// # Example
/// 
/// ```no_run
/// use minitree::prelude::*;
/// 
/// # let sample = Sample::from_rows(&["a"], &[["x", "yes"]]).unwrap();
/// let learner = Id3Builder::new(&sample)
///     .gain_tolerance(1e-9)
///     .build();
/// ```
#[derive(Clone)]
pub struct Id3Builder<'a> {
    sample: &'a Sample,
    gain_tolerance: f64,
}


impl<'a> Id3Builder<'a> {
    /// Construct a new instance of [`Id3Builder`].
    /// By default, [`Id3Builder`] sets the parameters as follows;
    /// ```text
    /// gain_tolerance: DEFAULT_GAIN_TOLERANCE == 1e-12,
    /// ```
    pub fn new(sample: &'a Sample) -> Self {
        Self { sample, gain_tolerance: DEFAULT_GAIN_TOLERANCE, }
    }


    /// Set the gain tolerance.
    /// A node is split only if some attribute achieves
    /// the information gain strictly greater than this value.
    /// Negative or non-finite values are replaced by `0`.
    #[inline]
    pub fn gain_tolerance(mut self, tolerance: f64) -> Self {
        self.gain_tolerance = if tolerance.is_finite() {
            tolerance.max(0f64)
        } else {
            0f64
        };
        self
    }


    /// Build an `Id3`.
    /// This method consumes `self`.
    pub fn build(self) -> Id3<'a> {
        Id3::from_components(self.sample, self.gain_tolerance)
    }
}
