//! Focus threshold newtype

use std::fmt;

/// Minimum visible percentage a boundary row needs to keep focus.
///
/// # Invariants
/// - Always within `(0, 100]`
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct Threshold(f64);

/// Error returned when a threshold falls outside `(0, 100]`.
#[derive(Debug, Clone, Copy, PartialEq, thiserror::Error)]
#[error("Threshold must be within (0, 100] (got {0})")]
pub struct InvalidThreshold(pub f64);

impl Threshold {
    /// Conventional threshold used when nothing else is configured.
    pub const DEFAULT: Self = Self(90.0);

    /// Smart constructor that validates the range.
    pub fn new(percentage: f64) -> Result<Self, InvalidThreshold> {
        if percentage > 0.0 && percentage <= 100.0 {
            Ok(Self(percentage))
        } else {
            Err(InvalidThreshold(percentage))
        }
    }

    /// Get the raw percentage.
    pub fn get(&self) -> f64 {
        self.0
    }

    /// True when `rate` falls short of this threshold.
    pub fn is_unmet_by(&self, rate: f64) -> bool {
        rate < self.0
    }
}

impl Default for Threshold {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl fmt::Display for Threshold {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}%", self.0)
    }
}
