//! Sample representations and error types.
//!
//! This module provides:
//! - `sample`: The two accepted sample input shapes and their tagged collection
//! - `error`: Structured error type for interpolator construction
//!
//! # Re-exports
//!
//! For convenience, commonly used types are re-exported at this module level:
//! - [`Sample`], [`SamplePair`], [`SampleTuple`], [`SampleCollection`] from `sample`
//! - [`InterpolationError`] from `error`

pub mod error;
pub mod sample;

// Re-export commonly used types at module level
pub use error::InterpolationError;
pub use sample::{Sample, SampleCollection, SamplePair, SampleTuple};
