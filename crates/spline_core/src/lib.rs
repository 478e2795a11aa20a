//! # spline_core: One-Dimensional Curve Interpolation
//!
//! spline_core builds smooth curves through a discrete set of `(x, y)` samples
//! and evaluates them at arbitrary query points. Two interchangeable strategies
//! are provided:
//!
//! - [`NaturalSpline`](math::interpolators::NaturalSpline): classical natural
//!   cubic spline with C² continuity, solved via a tridiagonal system
//! - [`MonotoneCubicInterpolator`](math::interpolators::MonotoneCubicInterpolator):
//!   Fritsch-Carlson monotone cubic Hermite interpolation, free of overshoot
//!   between locally monotone samples
//!
//! ## Module Layout
//!
//! - `types`: Sample input shapes and the [`InterpolationError`](types::InterpolationError) taxonomy
//! - `math::sorting`: Stable index ordering of samples by abscissa
//! - `math::tridiagonal`: Thomas algorithm for tridiagonal systems
//! - `math::interpolators`: The ordered sample store and both strategies
//!
//! ## Usage Examples
//!
//! ```rust
//! use spline_core::math::interpolators::{Interpolator, MonotoneCubicInterpolator, NaturalSpline};
//! use spline_core::types::SamplePair;
//!
//! let samples = vec![
//!     SamplePair::new(0.0_f64, 0.0),
//!     SamplePair::new(1.0, 1.0),
//!     SamplePair::new(2.0, 4.0),
//! ];
//!
//! let natural = NaturalSpline::new(samples.clone()).unwrap();
//! let monotone = MonotoneCubicInterpolator::new(samples).unwrap();
//!
//! assert!((natural.interpolate(1.0) - 1.0).abs() < 1e-12);
//! assert_eq!(monotone.interpolate(1.0), 1.0);
//!
//! // Tuples are accepted as well
//! let from_tuples = NaturalSpline::new(vec![[0.0_f64, 0.0], [2.0, 4.0]]).unwrap();
//! assert!((from_tuples.interpolate(1.0) - 2.0).abs() < 1e-12);
//! ```
//!
//! ## Feature Flags
//!
//! - `serde` (default): Serialisation for samples, [`SplineKind`](math::interpolators::SplineKind) and errors

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]

pub mod math;
pub mod types;
