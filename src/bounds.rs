//! Saturating clamp to a closed interval.

use crate::error::{Error, Result};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A closed interval `[min, max]` with `min <= max`.
///
/// Validated once on construction (and on deserialization), so
/// [`Bounds::clamp`] cannot fail.
///
/// ```
/// use gainmath::Bounds;
///
/// let ceiling = Bounds::new(-60.0, 0.0)?;
/// assert_eq!(ceiling.clamp(3.5), 0.0);
/// assert_eq!(ceiling.clamp(-12.0), -12.0);
/// # Ok::<(), gainmath::Error>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "BoundsRepr"))]
pub struct Bounds {
    min: f32,
    max: f32,
}

impl Bounds {
    /// Create bounds, failing with [`Error::InvalidArgument`] if `max < min`.
    pub fn new(min: f32, max: f32) -> Result<Self> {
        if max < min {
            tracing::debug!(min, max, "rejected clamp bounds");
            return Err(Error::InvalidArgument { min, max });
        }
        Ok(Self { min, max })
    }

    /// Lower bound
    #[inline]
    pub fn min(&self) -> f32 {
        self.min
    }

    /// Upper bound
    #[inline]
    pub fn max(&self) -> f32 {
        self.max
    }

    /// Snap `value` to the nearest bound if it lies outside the interval.
    ///
    /// NaN in `value` or in either bound yields NaN.
    #[inline]
    pub fn clamp(&self, value: f32) -> f32 {
        if self.min.is_nan() || self.max.is_nan() {
            f32::NAN
        } else if value < self.min {
            self.min
        } else if value > self.max {
            self.max
        } else {
            value
        }
    }

    /// Whether `value` lies inside the closed interval.
    #[inline]
    pub fn contains(&self, value: f32) -> bool {
        value >= self.min && value <= self.max
    }
}

#[cfg(feature = "serde")]
#[derive(Deserialize)]
struct BoundsRepr {
    min: f32,
    max: f32,
}

#[cfg(feature = "serde")]
impl TryFrom<BoundsRepr> for Bounds {
    type Error = Error;

    fn try_from(repr: BoundsRepr) -> Result<Self> {
        Bounds::new(repr.min, repr.max)
    }
}

/// Restrict `value` to `[min, max]`.
///
/// Fails with [`Error::InvalidArgument`] when `max < min`; no clamping is
/// attempted in that case. A NaN bound is not rejected, but the result is NaN.
///
/// ```
/// use gainmath::{clamp, Error};
///
/// assert_eq!(clamp(15.0, 0.0, 10.0)?, 10.0);
/// assert!(matches!(clamp(1.0, 5.0, 2.0), Err(Error::InvalidArgument { .. })));
/// # Ok::<(), Error>(())
/// ```
#[inline]
pub fn clamp(value: f32, min: f32, max: f32) -> Result<f32> {
    Ok(Bounds::new(min, max)?.clamp(value))
}
