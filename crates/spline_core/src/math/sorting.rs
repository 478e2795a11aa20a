//! Ordering of samples by abscissa.
//!
//! The ordering is expressed as an index permutation rather than by moving
//! samples, so that either input shape can be ordered without first being
//! copied into an intermediate representation.
//!
//! ## Invariants
//!
//! * The result is a permutation of `0..n`.
//! * Applying it yields non-decreasing x.
//! * Samples with equal x keep their input order (stable sort).

use crate::types::Sample;
use num_traits::Float;
use std::cmp::Ordering;

/// Return the index permutation that sorts `samples` by ascending x.
///
/// The sort key is x only. `Vec::sort_by` is a stable merge sort, so equal
/// abscissae retain the order in which the caller supplied them. Empty and
/// single-element inputs need no special handling.
///
/// Incomparable keys (NaN) are treated as equal to everything; callers are
/// expected to reject non-finite samples beforehand.
///
/// # Example
///
/// ```
/// use spline_core::math::sorting::sort_sample_indexes;
/// use spline_core::types::SamplePair;
///
/// let samples = [
///     SamplePair::new(3.0, 9.0),
///     SamplePair::new(1.0, 1.0),
///     SamplePair::new(2.0, 4.0),
/// ];
/// assert_eq!(sort_sample_indexes(&samples), vec![1, 2, 0]);
/// ```
pub fn sort_sample_indexes<T, S>(samples: &[S]) -> Vec<usize>
where
    T: Float,
    S: Sample<T>,
{
    let mut indexes: Vec<usize> = (0..samples.len()).collect();
    indexes.sort_by(|&a, &b| {
        samples[a]
            .x()
            .partial_cmp(&samples[b].x())
            .unwrap_or(Ordering::Equal)
    });
    indexes
}
