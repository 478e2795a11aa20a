//! Sample input shapes.
//!
//! A sample is an `(x, y)` pair of real numbers. Callers may hand samples over
//! in one of two interchangeable shapes:
//!
//! - [`SamplePair`]: a named-field record `{ x, y }`
//! - [`SampleTuple`]: a fixed two-element array `[x, y]`
//!
//! [`SampleCollection`] is the tagged sum of a homogeneous sequence of either
//! shape. It is consumed once by
//! [`OrderedSamples`](crate::math::interpolators::OrderedSamples), after which
//! only the canonical ordered `xs`/`ys` arrays remain.

use num_traits::Float;

/// Read access to the coordinates of a single sample.
///
/// Implemented for every accepted sample shape so that ordering and
/// normalisation can be written once.
///
/// # Example
///
/// ```
/// use spline_core::types::{Sample, SamplePair};
///
/// let pair = SamplePair::new(1.0, 2.0);
/// let tuple = [1.0, 2.0];
/// assert_eq!(pair.x(), tuple.x());
/// assert_eq!(pair.y(), tuple.y());
/// ```
pub trait Sample<T: Float> {
    /// The abscissa (knot position).
    fn x(&self) -> T;

    /// The ordinate at [`x`](Sample::x).
    fn y(&self) -> T;
}

/// Named-field sample shape.
///
/// Deserialises from a map with exactly the keys `x` and `y`; a sequence is
/// not accepted, so `[x, y]` arrays are always read as [`SampleTuple`].
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "std::collections::BTreeMap<String, T>")
)]
pub struct SamplePair<T> {
    /// Abscissa
    pub x: T,
    /// Ordinate
    pub y: T,
}

impl<T> SamplePair<T> {
    /// Create a sample from its coordinates.
    #[inline]
    pub fn new(x: T, y: T) -> Self {
        Self { x, y }
    }
}

#[cfg(feature = "serde")]
impl<T> TryFrom<std::collections::BTreeMap<String, T>> for SamplePair<T> {
    type Error = String;

    fn try_from(mut fields: std::collections::BTreeMap<String, T>) -> Result<Self, Self::Error> {
        let x = fields.remove("x").ok_or("missing field `x`")?;
        let y = fields.remove("y").ok_or("missing field `y`")?;
        match fields.keys().next() {
            Some(key) => Err(format!("unknown field `{}`, expected `x` or `y`", key)),
            None => Ok(Self { x, y }),
        }
    }
}

/// Fixed two-element sample shape, `[x, y]`.
pub type SampleTuple<T> = [T; 2];

impl<T: Float> Sample<T> for SamplePair<T> {
    #[inline]
    fn x(&self) -> T {
        self.x
    }

    #[inline]
    fn y(&self) -> T {
        self.y
    }
}

impl<T: Float> Sample<T> for [T; 2] {
    #[inline]
    fn x(&self) -> T {
        self[0]
    }

    #[inline]
    fn y(&self) -> T {
        self[1]
    }
}

impl<T: Float> Sample<T> for (T, T) {
    #[inline]
    fn x(&self) -> T {
        self.0
    }

    #[inline]
    fn y(&self) -> T {
        self.1
    }
}

/// A homogeneous collection of samples in one of the accepted shapes.
///
/// With the `serde` feature the collection deserialises untagged: an array of
/// `{"x": .., "y": ..}` objects becomes [`Pairs`](SampleCollection::Pairs), an
/// array of `[x, y]` arrays becomes [`Tuples`](SampleCollection::Tuples).
///
/// # Example
///
/// ```
/// use spline_core::types::{SampleCollection, SamplePair};
///
/// let pairs: SampleCollection<f64> = vec![SamplePair::new(0.0, 1.0)].into();
/// let tuples: SampleCollection<f64> = vec![[0.0, 1.0], [1.0, 2.0]].into();
///
/// assert_eq!(pairs.len(), 1);
/// assert_eq!(tuples.len(), 2);
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(untagged)
)]
pub enum SampleCollection<T> {
    /// Samples given as named-field records
    Pairs(Vec<SamplePair<T>>),
    /// Samples given as `[x, y]` arrays
    Tuples(Vec<SampleTuple<T>>),
}

impl<T> SampleCollection<T> {
    /// Number of samples in the collection.
    #[inline]
    pub fn len(&self) -> usize {
        match self {
            SampleCollection::Pairs(samples) => samples.len(),
            SampleCollection::Tuples(samples) => samples.len(),
        }
    }

    /// Returns true if the collection holds no samples.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl<T> From<Vec<SamplePair<T>>> for SampleCollection<T> {
    fn from(samples: Vec<SamplePair<T>>) -> Self {
        SampleCollection::Pairs(samples)
    }
}

impl<T: Copy> From<&[SamplePair<T>]> for SampleCollection<T> {
    fn from(samples: &[SamplePair<T>]) -> Self {
        SampleCollection::Pairs(samples.to_vec())
    }
}

impl<T, const N: usize> From<[SamplePair<T>; N]> for SampleCollection<T> {
    fn from(samples: [SamplePair<T>; N]) -> Self {
        SampleCollection::Pairs(samples.into())
    }
}

impl<T> From<Vec<SampleTuple<T>>> for SampleCollection<T> {
    fn from(samples: Vec<SampleTuple<T>>) -> Self {
        SampleCollection::Tuples(samples)
    }
}

impl<T: Copy> From<&[SampleTuple<T>]> for SampleCollection<T> {
    fn from(samples: &[SampleTuple<T>]) -> Self {
        SampleCollection::Tuples(samples.to_vec())
    }
}

impl<T, const N: usize> From<[SampleTuple<T>; N]> for SampleCollection<T> {
    fn from(samples: [SampleTuple<T>; N]) -> Self {
        SampleCollection::Tuples(samples.into())
    }
}

impl<T> From<Vec<(T, T)>> for SampleCollection<T> {
    fn from(samples: Vec<(T, T)>) -> Self {
        SampleCollection::Tuples(samples.into_iter().map(|(x, y)| [x, y]).collect())
    }
}
