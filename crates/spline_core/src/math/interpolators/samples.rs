//! Ordered sample store shared by every interpolation strategy.

use crate::math::sorting::sort_sample_indexes;
use crate::types::{InterpolationError, Sample, SampleCollection};
use num_traits::Float;

/// Samples normalised into two index-aligned arrays ordered by ascending x.
///
/// This is the only place the input shape of a [`SampleCollection`] is
/// inspected. Every interpolator owns one `OrderedSamples` and extends it with
/// its own coefficient arrays.
///
/// # Invariants
///
/// * `xs.len() == ys.len() >= 1`
/// * `xs` is non-decreasing (duplicates are kept; strategies that cannot
///   handle them call [`ensure_distinct_abscissae`](Self::ensure_distinct_abscissae))
/// * All values are finite
///
/// # Example
///
/// ```
/// use spline_core::math::interpolators::OrderedSamples;
///
/// let samples = OrderedSamples::new(vec![[2.0, 4.0], [0.0, 0.0], [1.0, 1.0]]).unwrap();
/// assert_eq!(samples.xs(), &[0.0, 1.0, 2.0]);
/// assert_eq!(samples.ys(), &[0.0, 1.0, 4.0]);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct OrderedSamples<T: Float> {
    /// Sorted x-coordinates
    xs: Vec<T>,
    /// Corresponding y-values (in same order as xs after sorting)
    ys: Vec<T>,
}

impl<T: Float> OrderedSamples<T> {
    /// Normalise a sample collection into ordered arrays.
    ///
    /// # Returns
    ///
    /// * `Ok(OrderedSamples)` - At least one finite sample
    /// * `Err(InterpolationError::EmptyInput)` - No samples
    /// * `Err(InterpolationError::NonFiniteSample)` - A coordinate is NaN or infinite
    pub fn new(samples: impl Into<SampleCollection<T>>) -> Result<Self, InterpolationError> {
        match samples.into() {
            SampleCollection::Pairs(samples) => Self::from_samples(&samples),
            SampleCollection::Tuples(samples) => Self::from_samples(&samples),
        }
    }

    fn from_samples<S: Sample<T>>(samples: &[S]) -> Result<Self, InterpolationError> {
        if samples.is_empty() {
            return Err(InterpolationError::EmptyInput);
        }

        if let Some((index, sample)) = samples
            .iter()
            .enumerate()
            .find(|(_, s)| !s.x().is_finite() || !s.y().is_finite())
        {
            return Err(InterpolationError::NonFiniteSample {
                index,
                x: sample.x().to_f64().unwrap_or(f64::NAN),
                y: sample.y().to_f64().unwrap_or(f64::NAN),
            });
        }

        let order = sort_sample_indexes(samples);
        let xs = order.iter().map(|&i| samples[i].x()).collect();
        let ys = order.iter().map(|&i| samples[i].y()).collect();

        Ok(Self { xs, ys })
    }

    /// Reject samples whose x-coordinates are not strictly increasing.
    ///
    /// Reports the first repeated abscissa together with the sorted index of
    /// its second occurrence.
    pub fn ensure_distinct_abscissae(&self) -> Result<(), InterpolationError> {
        match self.xs.windows(2).position(|w| w[0] == w[1]) {
            Some(pos) => Err(InterpolationError::DuplicateAbscissa {
                x: self.xs[pos].to_f64().unwrap_or(f64::NAN),
                index: pos + 1,
            }),
            None => Ok(()),
        }
    }

    /// Returns a reference to the sorted x-coordinates.
    #[inline]
    pub fn xs(&self) -> &[T] {
        &self.xs
    }

    /// Returns a reference to the y-values (in sorted x order).
    #[inline]
    pub fn ys(&self) -> &[T] {
        &self.ys
    }

    /// Returns the number of samples.
    #[inline]
    pub fn len(&self) -> usize {
        self.xs.len()
    }

    /// Returns true if there are no samples.
    /// Note: This is never true for a successfully constructed store.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.xs.is_empty()
    }

    /// Returns `(x_min, x_max)`.
    #[inline]
    pub fn domain(&self) -> (T, T) {
        (self.xs[0], self.xs[self.xs.len() - 1])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::SamplePair;

    #[test]
    fn test_pairs_and_tuples_normalise_identically() {
        let pairs = OrderedSamples::new(vec![
            SamplePair::new(3.0, 9.0),
            SamplePair::new(1.0, 1.0),
            SamplePair::new(2.0, 4.0),
        ])
        .unwrap();
        let tuples = OrderedSamples::new(vec![[3.0, 9.0], [1.0, 1.0], [2.0, 4.0]]).unwrap();

        assert_eq!(pairs, tuples);
        assert_eq!(pairs.xs(), &[1.0, 2.0, 3.0]);
        assert_eq!(pairs.ys(), &[1.0, 4.0, 9.0]);
    }

    #[test]
    fn test_empty_input_rejected() {
        let result = OrderedSamples::<f64>::new(Vec::<SamplePair<f64>>::new());
        assert_eq!(result.unwrap_err(), InterpolationError::EmptyInput);

        let result = OrderedSamples::<f64>::new(Vec::<[f64; 2]>::new());
        assert_eq!(result.unwrap_err(), InterpolationError::EmptyInput);
    }

    #[test]
    fn test_non_finite_rejected_with_input_index() {
        let result = OrderedSamples::new(vec![[0.0, 0.0], [1.0, f64::INFINITY], [f64::NAN, 2.0]]);
        match result.unwrap_err() {
            InterpolationError::NonFiniteSample { index, x, y } => {
                assert_eq!(index, 1);
                assert_eq!(x, 1.0);
                assert!(y.is_infinite());
            }
            other => panic!("Expected NonFiniteSample error, got {:?}", other),
        }
    }

    #[test]
    fn test_duplicates_kept_in_input_order() {
        let samples = OrderedSamples::new(vec![[1.0, 10.0], [0.0, 0.0], [1.0, 20.0]]).unwrap();
        assert_eq!(samples.xs(), &[0.0, 1.0, 1.0]);
        assert_eq!(samples.ys(), &[0.0, 10.0, 20.0]);
    }

    #[test]
    fn test_ensure_distinct_abscissae() {
        let distinct = OrderedSamples::new(vec![[0.0, 0.0], [1.0, 1.0]]).unwrap();
        assert!(distinct.ensure_distinct_abscissae().is_ok());

        let repeated = OrderedSamples::new(vec![[2.0, 0.0], [0.5, 1.0], [2.0, 3.0]]).unwrap();
        assert_eq!(
            repeated.ensure_distinct_abscissae().unwrap_err(),
            InterpolationError::DuplicateAbscissa { x: 2.0, index: 2 }
        );
    }

    #[test]
    fn test_accessors() {
        let samples = OrderedSamples::new(vec![[-1.0, 5.0], [4.0, 6.0]]).unwrap();
        assert_eq!(samples.len(), 2);
        assert!(!samples.is_empty());
        assert_eq!(samples.domain(), (-1.0, 4.0));
    }
}
