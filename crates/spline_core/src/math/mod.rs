//! Numerical building blocks and the interpolation strategies.
//!
//! - `sorting`: Stable index permutation that orders samples by abscissa
//! - `tridiagonal`: Thomas algorithm for tridiagonal linear systems
//! - `interpolators`: Ordered sample store, natural cubic spline and
//!   monotone cubic Hermite interpolation

pub mod interpolators;
pub mod sorting;
pub mod tridiagonal;
