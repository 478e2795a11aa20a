//! Monotone cubic Hermite interpolation (Fritsch-Carlson).

use super::{Interpolator, OrderedSamples};
use crate::types::{InterpolationError, SampleCollection};
use num_traits::Float;
use std::cmp::Ordering;
use tracing::debug;

/// Monotonicity-preserving piecewise cubic Hermite interpolator.
///
/// Tangents at interior knots are the weighted harmonic mean of the adjacent
/// secant slopes, and are forced to zero wherever the secant slope changes
/// sign or either neighbour is flat. On every stretch where the samples are
/// monotone the interpolant is monotone too, so it never overshoots the
/// surrounding samples.
///
/// Each segment `i` is stored as the polynomial
/// `y[i] + c1[i]·d + c2[i]·d² + c3[i]·d³` with `d = x - xs[i]`.
///
/// # Type Parameters
///
/// * `T` - Floating-point type (e.g., `f64`, `f32`)
///
/// # Extrapolation
///
/// Beyond the sampled range the cubic of the nearest boundary segment is
/// evaluated as is (no clamping). This differs from
/// [`NaturalSpline`](super::NaturalSpline), which is flat outside its domain.
///
/// # Example
///
/// ```
/// use spline_core::math::interpolators::{Interpolator, MonotoneCubicInterpolator};
///
/// let interp = MonotoneCubicInterpolator::new(vec![[0.0, 0.0], [1.0, 1.0], [2.0, 4.0]]).unwrap();
///
/// // Knots are reproduced exactly
/// assert_eq!(interp.interpolate(1.0), 1.0);
///
/// // Between knots the value stays within the neighbouring samples
/// let y = interp.interpolate(1.5);
/// assert!(y > 1.0 && y < 4.0);
/// ```
#[derive(Debug, Clone)]
pub struct MonotoneCubicInterpolator<T: Float> {
    samples: OrderedSamples<T>,
    /// Tangent at each knot
    c1: Vec<T>,
    /// Quadratic coefficient of each segment
    c2: Vec<T>,
    /// Cubic coefficient of each segment
    c3: Vec<T>,
}

impl<T: Float> MonotoneCubicInterpolator<T> {
    /// Construct a monotone cubic interpolator from a sample collection.
    ///
    /// # Arguments
    ///
    /// * `samples` - Pairs `{x, y}` or tuples `[x, y]`, in any order
    ///
    /// # Returns
    ///
    /// * `Ok(MonotoneCubicInterpolator)` - Successfully constructed interpolator
    /// * `Err(InterpolationError::EmptyInput)` - No samples
    /// * `Err(InterpolationError::DuplicateAbscissa)` - Two samples share an x
    /// * `Err(InterpolationError::NonFiniteSample)` - NaN or infinite coordinate
    /// * `Err(InterpolationError::IllConditioned)` - Widths, slopes or
    ///   coefficients overflow
    ///
    /// # Example
    ///
    /// ```
    /// use spline_core::math::interpolators::MonotoneCubicInterpolator;
    /// use spline_core::types::InterpolationError;
    ///
    /// let result = MonotoneCubicInterpolator::new(vec![[1.0, 0.0], [1.0, 2.0]]);
    /// assert!(matches!(result, Err(InterpolationError::DuplicateAbscissa { .. })));
    /// ```
    pub fn new(samples: impl Into<SampleCollection<T>>) -> Result<Self, InterpolationError> {
        let collection = samples.into();
        let count = collection.len();
        match Self::build(collection) {
            Ok(interp) => {
                debug!(
                    strategy = "monotone-cubic",
                    samples = count,
                    x_min = interp.domain().0.to_f64().unwrap_or(f64::NAN),
                    x_max = interp.domain().1.to_f64().unwrap_or(f64::NAN),
                    "built monotone cubic interpolator"
                );
                Ok(interp)
            }
            Err(err) => {
                debug!(
                    strategy = "monotone-cubic",
                    samples = count,
                    kind = err.kind(),
                    "monotone cubic interpolator rejected samples: {}",
                    err
                );
                Err(err)
            }
        }
    }

    fn build(collection: SampleCollection<T>) -> Result<Self, InterpolationError> {
        let samples = OrderedSamples::new(collection)?;
        samples.ensure_distinct_abscissae()?;

        let (c1, c2, c3) = if samples.len() < 2 {
            (Vec::new(), Vec::new(), Vec::new())
        } else {
            Self::compute_coefficients(samples.xs(), samples.ys())?
        };

        Ok(Self {
            samples,
            c1,
            c2,
            c3,
        })
    }

    /// Compute knot tangents and per-segment polynomial coefficients.
    ///
    /// Requires at least two knots with strictly increasing x. Fails with
    /// `IllConditioned` at the first knot where a width, slope or coefficient
    /// is not finite.
    #[allow(clippy::type_complexity)]
    fn compute_coefficients(
        xs: &[T],
        ys: &[T],
    ) -> Result<(Vec<T>, Vec<T>, Vec<T>), InterpolationError> {
        let n = xs.len();
        let two = T::one() + T::one();
        let three = two + T::one();

        // Segment widths and secant slopes
        let dxs: Vec<T> = xs.windows(2).map(|w| w[1] - w[0]).collect();
        let ms: Vec<T> = ys
            .windows(2)
            .zip(dxs.iter())
            .map(|(w, &dx)| (w[1] - w[0]) / dx)
            .collect();
        if let Some(i) = (0..n - 1).find(|&i| !dxs[i].is_finite() || !ms[i].is_finite()) {
            return Err(InterpolationError::IllConditioned { index: i + 1 });
        }

        // Tangents: one-sided at the ends, harmonic mean in the interior
        let mut c1 = Vec::with_capacity(n);
        c1.push(ms[0]);
        for i in 1..n - 1 {
            let (m_prev, m_next) = (ms[i - 1], ms[i]);
            if m_prev * m_next <= T::zero() {
                // Local extremum or flat neighbour
                c1.push(T::zero());
            } else {
                let (dx_prev, dx_next) = (dxs[i - 1], dxs[i]);
                let common = dx_prev + dx_next;
                c1.push(
                    three * common
                        / ((common + dx_next) / m_prev + (common + dx_prev) / m_next),
                );
            }
        }
        c1.push(ms[n - 2]);
        if let Some(index) = c1.iter().position(|c| !c.is_finite()) {
            return Err(InterpolationError::IllConditioned { index });
        }

        let mut c2 = Vec::with_capacity(n - 1);
        let mut c3 = Vec::with_capacity(n - 1);
        for i in 0..n - 1 {
            let inv_dx = T::one() / dxs[i];
            let common = c1[i] + c1[i + 1] - two * ms[i];
            c2.push((ms[i] - c1[i] - common) * inv_dx);
            c3.push(common * inv_dx * inv_dx);
        }
        if let Some(i) = (0..n - 1).find(|&i| !c2[i].is_finite() || !c3[i].is_finite()) {
            return Err(InterpolationError::IllConditioned { index: i + 1 });
        }

        Ok((c1, c2, c3))
    }

    /// Returns a reference to the sorted x-coordinates.
    #[inline]
    pub fn xs(&self) -> &[T] {
        self.samples.xs()
    }

    /// Returns a reference to the y-values (in sorted x order).
    #[inline]
    pub fn ys(&self) -> &[T] {
        self.samples.ys()
    }

    /// Returns the tangent at each knot (empty for a single sample).
    #[inline]
    pub fn tangents(&self) -> &[T] {
        &self.c1
    }

    /// Returns the number of data points.
    #[inline]
    pub fn len(&self) -> usize {
        self.samples.len()
    }

    /// Returns true if the interpolator has no data points.
    /// Note: This should never be true for a valid interpolator.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }
}

impl<T: Float> Interpolator<T> for MonotoneCubicInterpolator<T> {
    /// Interpolate value at point `x`.
    ///
    /// A query equal to a knot returns that knot's stored y exactly. Otherwise
    /// binary search (O(log n)) selects the segment whose left knot is the
    /// last one below `x` (segment 0 left of the domain, the last segment
    /// right of it) and its cubic is evaluated.
    fn interpolate(&self, x: T) -> T {
        let xs = self.samples.xs();
        let ys = self.samples.ys();
        let last = xs.len() - 1;

        if last == 0 {
            return ys[0];
        }
        if x.is_nan() {
            return x;
        }
        if x == xs[last] {
            return ys[last];
        }

        let i = match xs[..last]
            .binary_search_by(|probe| probe.partial_cmp(&x).unwrap_or(Ordering::Less))
        {
            Ok(exact) => return ys[exact],
            Err(pos) => pos.saturating_sub(1),
        };

        let diff = x - xs[i];
        let diff_sq = diff * diff;
        ys[i] + self.c1[i] * diff + self.c2[i] * diff_sq + self.c3[i] * diff * diff_sq
    }

    /// Return the sampled range.
    #[inline]
    fn domain(&self) -> (T, T) {
        self.samples.domain()
    }
}
