//! Error types for structured error handling.
//!
//! This module provides:
//! - `InterpolationError`: Errors from interpolator construction
//!
//! Evaluation never fails once an interpolator has been built, so every
//! variant here is raised at construction time.

use thiserror::Error;

/// Interpolator construction errors.
///
/// Provides structured error handling for building interpolators
/// with descriptive context for each failure mode.
///
/// # Variants
/// - `EmptyInput`: No samples were supplied
/// - `DuplicateAbscissa`: Two samples share the same x-coordinate
/// - `NonFiniteSample`: A sample coordinate is NaN or infinite
/// - `IllConditioned`: Finite samples whose spacing or slopes overflow
///
/// # Examples
/// ```
/// use spline_core::types::InterpolationError;
///
/// let err = InterpolationError::DuplicateAbscissa { x: 1.5, index: 2 };
/// assert_eq!(format!("{}", err), "Duplicate abscissa x = 1.5 at sorted index 2");
/// ```
#[derive(Error, Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum InterpolationError {
    /// No samples were supplied.
    #[error("Cannot interpolate an empty sample set")]
    EmptyInput,

    /// Two or more samples share the same x-coordinate.
    #[error("Duplicate abscissa x = {x} at sorted index {index}")]
    DuplicateAbscissa {
        /// The repeated x-coordinate
        x: f64,
        /// Sorted position of the second occurrence
        index: usize,
    },

    /// A sample coordinate is NaN or infinite.
    #[error("Non-finite sample ({x}, {y}) at input index {index}")]
    NonFiniteSample {
        /// Position of the sample in the caller's collection
        index: usize,
        /// The sample's x-coordinate
        x: f64,
        /// The sample's y-coordinate
        y: f64,
    },

    /// Finite samples whose derived widths, slopes or coefficients are not
    /// finite (e.g. an x-span beyond `f64::MAX` or a subnormal gap).
    #[error("Ill-conditioned samples: non-finite coefficient at sorted index {index}")]
    IllConditioned {
        /// Sorted position of the knot where the coefficient was derived
        index: usize,
    },
}

impl InterpolationError {
    /// Short, stable identifier for the error kind, used as a log field.
    ///
    /// # Examples
    /// ```
    /// use spline_core::types::InterpolationError;
    ///
    /// assert_eq!(InterpolationError::EmptyInput.kind(), "empty_input");
    /// ```
    #[inline]
    pub fn kind(&self) -> &'static str {
        match self {
            InterpolationError::EmptyInput => "empty_input",
            InterpolationError::DuplicateAbscissa { .. } => "duplicate_abscissa",
            InterpolationError::NonFiniteSample { .. } => "non_finite_sample",
            InterpolationError::IllConditioned { .. } => "ill_conditioned",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_input_display() {
        let err = InterpolationError::EmptyInput;
        assert_eq!(format!("{}", err), "Cannot interpolate an empty sample set");
    }

    #[test]
    fn test_duplicate_abscissa_display() {
        let err = InterpolationError::DuplicateAbscissa { x: 3.0, index: 4 };
        assert_eq!(
            format!("{}", err),
            "Duplicate abscissa x = 3 at sorted index 4"
        );
    }

    #[test]
    fn test_non_finite_sample_display() {
        let err = InterpolationError::NonFiniteSample {
            index: 1,
            x: f64::NAN,
            y: 2.0,
        };
        assert_eq!(format!("{}", err), "Non-finite sample (NaN, 2) at input index 1");
    }

    #[test]
    fn test_ill_conditioned_display() {
        let err = InterpolationError::IllConditioned { index: 2 };
        assert_eq!(
            format!("{}", err),
            "Ill-conditioned samples: non-finite coefficient at sorted index 2"
        );
        assert_eq!(err.kind(), "ill_conditioned");
    }

    #[test]
    fn test_kind_identifiers() {
        assert_eq!(InterpolationError::EmptyInput.kind(), "empty_input");
        assert_eq!(
            InterpolationError::DuplicateAbscissa { x: 0.0, index: 1 }.kind(),
            "duplicate_abscissa"
        );
        assert_eq!(
            InterpolationError::NonFiniteSample {
                index: 0,
                x: f64::INFINITY,
                y: 0.0
            }
            .kind(),
            "non_finite_sample"
        );
    }

    #[test]
    fn test_error_trait_implementation() {
        let err = InterpolationError::EmptyInput;
        let _: &dyn std::error::Error = &err;
    }

    #[test]
    fn test_clone_and_equality() {
        let err1 = InterpolationError::DuplicateAbscissa { x: 1.0, index: 1 };
        let err2 = err1.clone();
        assert_eq!(err1, err2);
    }

    // Serde tests (feature-gated)
    #[cfg(feature = "serde")]
    mod serde_tests {
        use super::*;

        #[test]
        fn test_interpolation_error_serde_roundtrip() {
            let err = InterpolationError::DuplicateAbscissa { x: 2.5, index: 3 };
            let json = serde_json::to_string(&err).unwrap();
            let deserialized: InterpolationError = serde_json::from_str(&json).unwrap();
            assert_eq!(err, deserialized);
        }
    }
}
