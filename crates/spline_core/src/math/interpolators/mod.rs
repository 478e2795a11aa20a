//! One-dimensional interpolation strategies.
//!
//! This module provides two interchangeable interpolators over a discrete set
//! of `(x, y)` samples, generic over `T: num_traits::Float`:
//!
//! ## Available Interpolators
//!
//! - [`NaturalSpline`]: Natural cubic spline with C² continuity, flat
//!   extrapolation outside the sampled range
//! - [`MonotoneCubicInterpolator`]: Fritsch-Carlson monotone cubic Hermite
//!   interpolation, cubic extrapolation of the boundary segments
//! - [`SplineEnum`]: Static dispatch over both, selected by [`SplineKind`]
//!
//! ## Core Trait
//!
//! Both interpolators implement the [`Interpolator`] trait, which defines:
//! - `interpolate(x: T) -> T`: Compute the interpolated value (total)
//! - `domain() -> (T, T)`: Return the sampled range
//!
//! Construction is the only fallible step. Both strategies normalise their
//! input through [`OrderedSamples`] and reject empty input and duplicate
//! abscissae with an [`InterpolationError`](crate::types::InterpolationError).
//!
//! ## Example
//!
//! ```
//! use spline_core::math::interpolators::{Interpolator, MonotoneCubicInterpolator};
//!
//! let interp = MonotoneCubicInterpolator::new(vec![[0.0, 0.0], [1.0, 0.1], [2.0, 0.9], [3.0, 1.0]]).unwrap();
//! let (x_min, x_max) = interp.domain();
//! assert_eq!(x_min, 0.0);
//! assert_eq!(x_max, 3.0);
//!
//! let y = interp.interpolate(1.5);
//! assert!(y > 0.1 && y < 0.9);
//! ```

mod monotone_cubic;
mod natural_spline;
mod samples;
mod spline_enum;
mod traits;

// Re-export public types at module level
pub use monotone_cubic::MonotoneCubicInterpolator;
pub use natural_spline::NaturalSpline;
pub use samples::OrderedSamples;
pub use spline_enum::{ParseSplineKindError, SplineEnum, SplineKind};
pub use traits::Interpolator;
