//! Strategy selection and static dispatch.
//!
//! This module provides:
//! - [`SplineKind`]: Configuration value naming an interpolation strategy
//! - [`SplineEnum`]: Static dispatch enum wrapping both interpolators

use super::{Interpolator, MonotoneCubicInterpolator, NaturalSpline};
use crate::types::{InterpolationError, SampleCollection};
use num_traits::Float;
use std::fmt;
use std::str::FromStr;

/// Interpolation strategy selector.
///
/// Intended to be embedded in a caller's configuration. With the `serde`
/// feature it (de)serialises as `"natural"` or `"monotone-cubic"`.
///
/// # Variants
///
/// - `Natural`: Natural cubic spline, flat extrapolation
/// - `MonotoneCubic`: Fritsch-Carlson monotone cubic Hermite, cubic extrapolation
///
/// # Example
///
/// ```
/// use spline_core::math::interpolators::SplineKind;
///
/// let kind: SplineKind = "pchip".parse().unwrap();
/// assert_eq!(kind, SplineKind::MonotoneCubic);
/// assert_eq!(kind.as_str(), "monotone-cubic");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "kebab-case")
)]
pub enum SplineKind {
    /// Natural cubic spline
    #[default]
    Natural,
    /// Monotone cubic Hermite interpolation
    MonotoneCubic,
}

impl SplineKind {
    /// Return the canonical string representation of the strategy.
    #[inline]
    pub fn as_str(&self) -> &'static str {
        match self {
            SplineKind::Natural => "natural",
            SplineKind::MonotoneCubic => "monotone-cubic",
        }
    }
}

impl fmt::Display for SplineKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Error returned when parsing an unknown strategy name.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unknown spline kind: {0}")]
pub struct ParseSplineKindError(String);

impl FromStr for SplineKind {
    type Err = ParseSplineKindError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "natural" | "natural-cubic" => Ok(SplineKind::Natural),
            "monotone" | "monotone-cubic" | "pchip" => Ok(SplineKind::MonotoneCubic),
            _ => Err(ParseSplineKindError(s.to_string())),
        }
    }
}

/// Static dispatch enum wrapping concrete interpolator implementations.
///
/// Lets a caller choose the strategy at runtime (e.g. from configuration)
/// without boxing a trait object.
///
/// # Type Parameters
///
/// * `T` - Floating-point type (e.g., `f64`, `f32`)
///
/// # Example
///
/// ```
/// use spline_core::math::interpolators::{Interpolator, SplineEnum, SplineKind};
///
/// let samples = vec![[1.0, 1.0], [2.0, 4.0], [3.0, 9.0]];
/// let natural = SplineEnum::build(SplineKind::Natural, samples.clone()).unwrap();
/// let monotone = SplineEnum::build(SplineKind::MonotoneCubic, samples).unwrap();
///
/// // Same knots, different extrapolation policies
/// assert_eq!(natural.interpolate(4.0), 9.0);
/// assert_ne!(monotone.interpolate(4.0), 9.0);
/// ```
#[derive(Debug, Clone)]
pub enum SplineEnum<T: Float> {
    /// Natural cubic spline
    Natural(NaturalSpline<T>),
    /// Monotone cubic Hermite interpolation
    MonotoneCubic(MonotoneCubicInterpolator<T>),
}

impl<T: Float> SplineEnum<T> {
    /// Build the interpolator selected by `kind` from `samples`.
    ///
    /// # Errors
    ///
    /// Propagates the construction error of the selected strategy.
    pub fn build(
        kind: SplineKind,
        samples: impl Into<SampleCollection<T>>,
    ) -> Result<Self, InterpolationError> {
        match kind {
            SplineKind::Natural => NaturalSpline::new(samples).map(SplineEnum::Natural),
            SplineKind::MonotoneCubic => {
                MonotoneCubicInterpolator::new(samples).map(SplineEnum::MonotoneCubic)
            }
        }
    }

    /// Return the strategy of the wrapped interpolator.
    #[inline]
    pub fn kind(&self) -> SplineKind {
        match self {
            SplineEnum::Natural(_) => SplineKind::Natural,
            SplineEnum::MonotoneCubic(_) => SplineKind::MonotoneCubic,
        }
    }
}

impl<T: Float> Interpolator<T> for SplineEnum<T> {
    #[inline]
    fn interpolate(&self, x: T) -> T {
        match self {
            SplineEnum::Natural(spline) => spline.interpolate(x),
            SplineEnum::MonotoneCubic(interp) => interp.interpolate(x),
        }
    }

    #[inline]
    fn domain(&self) -> (T, T) {
        match self {
            SplineEnum::Natural(spline) => spline.domain(),
            SplineEnum::MonotoneCubic(interp) => interp.domain(),
        }
    }
}

impl<T: Float> From<NaturalSpline<T>> for SplineEnum<T> {
    fn from(spline: NaturalSpline<T>) -> Self {
        SplineEnum::Natural(spline)
    }
}

impl<T: Float> From<MonotoneCubicInterpolator<T>> for SplineEnum<T> {
    fn from(interp: MonotoneCubicInterpolator<T>) -> Self {
        SplineEnum::MonotoneCubic(interp)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    // ========================================
    // SplineKind Tests
    // ========================================

    #[test]
    fn test_kind_default_is_natural() {
        assert_eq!(SplineKind::default(), SplineKind::Natural);
    }

    #[test]
    fn test_kind_display() {
        assert_eq!(format!("{}", SplineKind::Natural), "natural");
        assert_eq!(format!("{}", SplineKind::MonotoneCubic), "monotone-cubic");
    }

    #[test]
    fn test_kind_from_str_aliases() {
        assert_eq!("natural".parse::<SplineKind>().unwrap(), SplineKind::Natural);
        assert_eq!("Natural-Cubic".parse::<SplineKind>().unwrap(), SplineKind::Natural);
        assert_eq!("monotone".parse::<SplineKind>().unwrap(), SplineKind::MonotoneCubic);
        assert_eq!(" PCHIP ".parse::<SplineKind>().unwrap(), SplineKind::MonotoneCubic);
    }

    #[test]
    fn test_kind_from_str_unknown() {
        let err = "akima".parse::<SplineKind>().unwrap_err();
        assert_eq!(format!("{}", err), "Unknown spline kind: akima");
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_kind_serde_kebab_case() {
        let json = serde_json::to_string(&SplineKind::MonotoneCubic).unwrap();
        assert_eq!(json, "\"monotone-cubic\"");
        let kind: SplineKind = serde_json::from_str("\"natural\"").unwrap();
        assert_eq!(kind, SplineKind::Natural);
    }

    // ========================================
    // SplineEnum Tests
    // ========================================

    #[test]
    fn test_build_reports_kind() {
        let samples = vec![[0.0, 0.0], [1.0, 1.0], [2.0, 4.0]];
        for kind in [SplineKind::Natural, SplineKind::MonotoneCubic] {
            let spline = SplineEnum::build(kind, samples.clone()).unwrap();
            assert_eq!(spline.kind(), kind);
            assert_eq!(spline.domain(), (0.0, 2.0));
        }
    }

    #[test]
    fn test_build_matches_direct_construction() {
        let samples = vec![[0.0, 1.0], [0.5, 3.0], [2.0, 2.0], [3.0, 5.0]];
        let direct = NaturalSpline::new(samples.clone()).unwrap();
        let wrapped = SplineEnum::build(SplineKind::Natural, samples.clone()).unwrap();
        let monotone = MonotoneCubicInterpolator::new(samples.clone()).unwrap();
        let wrapped_monotone: SplineEnum<f64> = monotone.clone().into();

        for x in [-1.0, 0.25, 1.0, 2.5, 4.0] {
            assert_eq!(direct.interpolate(x), wrapped.interpolate(x));
            assert_eq!(monotone.interpolate(x), wrapped_monotone.interpolate(x));
        }
    }

    #[test]
    fn test_build_empty_input_both_kinds() {
        for kind in [SplineKind::Natural, SplineKind::MonotoneCubic] {
            let result = SplineEnum::<f64>::build(kind, Vec::<[f64; 2]>::new());
            assert_eq!(result.unwrap_err(), InterpolationError::EmptyInput);
        }
    }

    #[test]
    fn test_two_point_linear_both_kinds() {
        for kind in [SplineKind::Natural, SplineKind::MonotoneCubic] {
            let spline = SplineEnum::build(kind, vec![[0.0, 0.0], [2.0, 4.0]]).unwrap();
            assert_relative_eq!(spline.interpolate(1.0), 2.0, epsilon = 1e-12);
        }
    }
}
