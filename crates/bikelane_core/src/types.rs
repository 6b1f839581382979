//! Core type definitions for the segment registry.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::iter::Sum;
use std::ops::Add;

/// A distance in kilometers.
///
/// Segment lengths are validated as strictly positive when they enter the
/// registry; totals may be zero.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Kilometers(pub f64);

impl Kilometers {
    /// Zero distance.
    pub const ZERO: Self = Self(0.0);

    /// Creates a new distance.
    #[must_use]
    pub const fn new(km: f64) -> Self {
        Self(km)
    }

    /// Returns the raw value.
    #[must_use]
    pub const fn as_f64(self) -> f64 {
        self.0
    }

    /// Returns true if this is a usable segment length.
    #[must_use]
    pub fn is_valid_length(self) -> bool {
        self.0.is_finite() && self.0 > 0.0
    }
}

impl From<f64> for Kilometers {
    fn from(km: f64) -> Self {
        Self(km)
    }
}

impl From<Kilometers> for f64 {
    fn from(km: Kilometers) -> Self {
        km.0
    }
}

impl Add for Kilometers {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self(self.0 + rhs.0)
    }
}

impl Sum for Kilometers {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::ZERO, Add::add)
    }
}

/// Magnitudes outside `[1e-3, 1e7)` print in exponent form.
const PLAIN_RANGE: std::ops::Range<f64> = 1e-3..1e7;

/// Honors a precision flag (`{:.2}`); otherwise prints the shortest form.
impl fmt::Display for Kilometers {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let magnitude = self.0.abs();
        if magnitude == 0.0 || PLAIN_RANGE.contains(&magnitude) {
            fmt::Display::fmt(&self.0, f)
        } else {
            fmt::LowerExp::fmt(&self.0, f)
        }
    }
}

/// A named stretch of bike lane.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Segment {
    pub(crate) name: String,
    pub(crate) length: Kilometers,
    pub(crate) status: String,
}

impl Segment {
    /// Returns the segment name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the segment length.
    pub fn length(&self) -> Kilometers {
        self.length
    }

    /// Returns the current operational status.
    pub fn status(&self) -> &str {
        &self.status
    }
}
