//! Natural cubic spline interpolation.

use super::{Interpolator, OrderedSamples};
use crate::math::tridiagonal::solve_tridiagonal;
use crate::types::{InterpolationError, SampleCollection};
use num_traits::Float;
use tracing::debug;

/// Natural cubic spline interpolator with C² continuity.
///
/// Stores the ordered samples together with the segment widths and the
/// second derivative at every knot. The second derivative is zero at both
/// end knots (natural boundary condition).
///
/// # Type Parameters
///
/// * `T` - Floating-point type (e.g., `f64`, `f32`)
///
/// # Extrapolation
///
/// Outside the sampled range the spline is flat: queries left of the first
/// knot return the first y, queries right of the last knot return the last y.
/// [`MonotoneCubicInterpolator`](super::MonotoneCubicInterpolator) extrapolates
/// its boundary cubics instead.
///
/// # Small Inputs
///
/// * One sample: constant function
/// * Two samples: straight line between them (no linear system is solved)
///
/// # Example
///
/// ```
/// use spline_core::math::interpolators::{Interpolator, NaturalSpline};
///
/// let spline = NaturalSpline::new(vec![[1.0_f64, 1.0], [2.0, 4.0], [3.0, 9.0]]).unwrap();
///
/// assert!((spline.interpolate(2.0) - 4.0).abs() < 1e-12);
/// assert_eq!(spline.interpolate(0.0), 1.0);
/// assert_eq!(spline.interpolate(4.0), 9.0);
/// ```
#[derive(Debug, Clone)]
pub struct NaturalSpline<T: Float> {
    samples: OrderedSamples<T>,
    /// Segment widths, `widths[i] = xs[i] - xs[i-1]`; `widths[0]` is zero
    widths: Vec<T>,
    /// Second derivative at each knot
    second_derivs: Vec<T>,
}

impl<T: Float> NaturalSpline<T> {
    /// Construct a natural cubic spline from a sample collection.
    ///
    /// Samples are sorted by x-coordinate, then the tridiagonal system for the
    /// interior second derivatives is solved with the Thomas algorithm.
    ///
    /// # Arguments
    ///
    /// * `samples` - Pairs `{x, y}` or tuples `[x, y]`, in any order
    ///
    /// # Returns
    ///
    /// * `Ok(NaturalSpline)` - Successfully constructed spline
    /// * `Err(InterpolationError::EmptyInput)` - No samples
    /// * `Err(InterpolationError::DuplicateAbscissa)` - Two samples share an x
    /// * `Err(InterpolationError::NonFiniteSample)` - NaN or infinite coordinate
    /// * `Err(InterpolationError::IllConditioned)` - Widths, slopes or second
    ///   derivatives overflow
    ///
    /// # Example
    ///
    /// ```
    /// use spline_core::math::interpolators::NaturalSpline;
    /// use spline_core::types::{InterpolationError, SamplePair};
    ///
    /// let empty: Vec<SamplePair<f64>> = Vec::new();
    /// assert_eq!(NaturalSpline::new(empty).unwrap_err(), InterpolationError::EmptyInput);
    /// ```
    pub fn new(samples: impl Into<SampleCollection<T>>) -> Result<Self, InterpolationError> {
        let collection = samples.into();
        let count = collection.len();
        match Self::build(collection) {
            Ok(spline) => {
                debug!(
                    strategy = "natural",
                    samples = count,
                    x_min = spline.domain().0.to_f64().unwrap_or(f64::NAN),
                    x_max = spline.domain().1.to_f64().unwrap_or(f64::NAN),
                    "built natural cubic spline"
                );
                Ok(spline)
            }
            Err(err) => {
                debug!(
                    strategy = "natural",
                    samples = count,
                    kind = err.kind(),
                    "natural cubic spline rejected samples: {}",
                    err
                );
                Err(err)
            }
        }
    }

    fn build(collection: SampleCollection<T>) -> Result<Self, InterpolationError> {
        let samples = OrderedSamples::new(collection)?;
        samples.ensure_distinct_abscissae()?;

        let xs = samples.xs();
        let n = xs.len();

        let ys = samples.ys();

        let mut widths = vec![T::zero(); n];
        for i in 1..n {
            widths[i] = xs[i] - xs[i - 1];
        }

        // Evaluation forms x2 + h (up to 2h) and divides by h
        if let Some(index) = (1..n).find(|&i| {
            !(widths[i] + widths[i]).is_finite() || !((ys[i] - ys[i - 1]) / widths[i]).is_finite()
        }) {
            return Err(InterpolationError::IllConditioned { index });
        }

        let second_derivs = Self::compute_second_derivatives(ys, &widths);
        if let Some(index) = second_derivs.iter().position(|a| !a.is_finite()) {
            return Err(InterpolationError::IllConditioned { index });
        }

        Ok(Self {
            samples,
            widths,
            second_derivs,
        })
    }

    /// Solve for the second derivative at every knot.
    ///
    /// Interior knot `i` (1 ≤ i ≤ n-2) contributes the row
    ///
    /// ```text
    /// h[i]/6 · a[i-1] + (h[i]+h[i+1])/3 · a[i] + h[i+1]/6 · a[i+1]
    ///     = (y[i+1]-y[i])/h[i+1] - (y[i]-y[i-1])/h[i]
    /// ```
    ///
    /// with `a[0] = a[n-1] = 0`. Fewer than three knots leave every entry zero.
    fn compute_second_derivatives(ys: &[T], h: &[T]) -> Vec<T> {
        let n = ys.len();
        let mut a = vec![T::zero(); n];
        if n <= 2 {
            return a;
        }

        let three = T::one() + T::one() + T::one();
        let six = three + three;

        let interior = n - 2;
        let mut sub = Vec::with_capacity(interior);
        let mut diag = Vec::with_capacity(interior);
        let mut sup = Vec::with_capacity(interior);
        let mut rhs = Vec::with_capacity(interior);

        for i in 1..n - 1 {
            sub.push(h[i] / six);
            diag.push((h[i] + h[i + 1]) / three);
            sup.push(h[i + 1] / six);
            rhs.push((ys[i + 1] - ys[i]) / h[i + 1] - (ys[i] - ys[i - 1]) / h[i]);
        }

        let solution = solve_tridiagonal(&sub, &diag, &sup, &rhs);
        a[1..n - 1].copy_from_slice(&solution);
        a
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

    /// Returns the second derivative at each knot (zero at both ends).
    #[inline]
    pub fn second_derivatives(&self) -> &[T] {
        &self.second_derivs
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

impl<T: Float> Interpolator<T> for NaturalSpline<T> {
    /// Interpolate value at point `x` using the natural cubic spline.
    ///
    /// Uses binary search (O(log n)) to find the segment `gap` with
    /// `xs[gap-1] < x <= xs[gap]`, then evaluates
    ///
    /// ```text
    /// x1 = x - xs[gap-1],  x2 = h[gap] - x1
    /// y  = ((-a[gap-1]/6·(x2+h)·x1 + y[gap-1])·x2 + (-a[gap]/6·(x1+h)·x2 + y[gap])·x1) / h
    /// ```
    ///
    /// Queries at or beyond either end knot return that knot's y.
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
        if x <= xs[0] {
            return ys[0];
        }
        if x >= xs[last] {
            return ys[last];
        }

        // xs[0] < x < xs[last], so 1 <= gap <= last
        let gap = xs.partition_point(|&xi| xi < x);

        let three = T::one() + T::one() + T::one();
        let six = three + three;
        let h = self.widths[gap];
        let a = &self.second_derivs;
        let x1 = x - xs[gap - 1];
        let x2 = h - x1;

        // Weights x2/h and x1/h keep large ordinates from overflowing
        ((-a[gap - 1] / six) * (x2 + h) * x1 + ys[gap - 1]) * (x2 / h)
            + ((-a[gap] / six) * (x1 + h) * x2 + ys[gap]) * (x1 / h)
    }

    /// Return the sampled range.
    #[inline]
    fn domain(&self) -> (T, T) {
        self.samples.domain()
    }
}
