//! Common interface of the interpolation strategies.

use num_traits::Float;

/// A constructed one-dimensional interpolant.
///
/// Implementors hold immutable, precomputed coefficients, so evaluation is a
/// pure query: repeatable, side-effect free, and safe to call concurrently
/// from many threads through a shared reference.
pub trait Interpolator<T: Float> {
    /// Evaluate the interpolant at `x`.
    ///
    /// Defined for every real `x`; the behaviour outside [`domain`](Interpolator::domain)
    /// is strategy specific.
    fn interpolate(&self, x: T) -> T;

    /// Return the sampled range `(x_min, x_max)`.
    fn domain(&self) -> (T, T);

    /// Evaluate the interpolant at every point of `xs`, in order.
    fn interpolate_many(&self, xs: &[T]) -> Vec<T> {
        xs.iter().map(|&x| self.interpolate(x)).collect()
    }
}
