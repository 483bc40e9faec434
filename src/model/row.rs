//! Row identity and per-row visibility measurements.

use serde::Serialize;
use std::fmt;

/// Position of a row in the underlying list. 0-indexed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize)]
#[serde(transparent)]
pub struct RowIndex(usize);

impl RowIndex {
    /// Create a new RowIndex from a raw 0-based value.
    pub fn new(index: usize) -> Self {
        Self(index)
    }

    /// Get the raw 0-based index value.
    pub fn get(&self) -> usize {
        self.0
    }
}

impl From<usize> for RowIndex {
    fn from(index: usize) -> Self {
        Self(index)
    }
}

impl fmt::Display for RowIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Bounding box of a row along the scroll axis, relative to the viewport top.
///
/// Negative `y` means the row starts above the viewport.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct RowFrame {
    /// Distance from the viewport top to the row top.
    pub y: f64,
    /// Row height.
    pub height: f64,
}

impl RowFrame {
    /// Create a new frame.
    pub fn new(y: f64, height: f64) -> Self {
        Self { y, height }
    }

    /// Bottom edge, relative to the viewport top.
    pub fn max_y(&self) -> f64 {
        self.y + self.height
    }
}

/// Visibility of one row within a single measurement batch.
///
/// # Invariants
/// - `visible_percentage` is always within `[0, 100]`
/// - `frame` is diagnostic only and never influences focus selection
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct RowVisibility {
    index: RowIndex,
    visible_percentage: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    frame: Option<RowFrame>,
}

impl RowVisibility {
    /// Create a measurement, clamping the percentage into `[0, 100]`.
    ///
    /// NaN is treated as fully hidden.
    pub fn new(index: impl Into<RowIndex>, visible_percentage: f64) -> Self {
        Self {
            index: index.into(),
            visible_percentage: clamp_percentage(visible_percentage),
            frame: None,
        }
    }

    /// Attach the row's frame for diagnostics.
    pub fn with_frame(mut self, frame: RowFrame) -> Self {
        self.frame = Some(frame);
        self
    }

    /// Row this measurement belongs to.
    pub fn index(&self) -> RowIndex {
        self.index
    }

    /// Clamped visible percentage.
    pub fn visible_percentage(&self) -> f64 {
        self.visible_percentage
    }

    /// Frame, when the producer supplied one.
    pub fn frame(&self) -> Option<RowFrame> {
        self.frame
    }
}

fn clamp_percentage(value: f64) -> f64 {
    if value.is_nan() {
        0.0
    } else {
        value.clamp(0.0, 100.0)
    }
}
