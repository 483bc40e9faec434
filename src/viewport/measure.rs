//! Visible-row measurement for uniform-height, single-column lists.

use crate::model::{RowFrame, RowIndex, RowVisibility};

/// Geometry of a scrolling list with uniform row height.
///
/// # Invariants
/// - `row_height > 0` and `viewport_height > 0`
/// - `bottom_inset >= 0`
/// - all values finite
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewportGeometry {
    row_height: f64,
    viewport_height: f64,
    row_count: usize,
    bottom_inset: f64,
}

/// Error returned when list geometry is not measurable.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum InvalidGeometry {
    /// Row height is zero, negative, or not finite.
    #[error("Row height must be positive and finite (got {0})")]
    RowHeight(f64),

    /// Viewport height is zero, negative, or not finite.
    #[error("Viewport height must be positive and finite (got {0})")]
    ViewportHeight(f64),

    /// Bottom inset is negative or not finite.
    #[error("Bottom inset must be non-negative and finite (got {0})")]
    BottomInset(f64),
}

impl ViewportGeometry {
    /// Default row height.
    pub const DEFAULT_ROW_HEIGHT: f64 = 260.0;
    /// Default viewport height.
    pub const DEFAULT_VIEWPORT_HEIGHT: f64 = 800.0;
    /// Default number of rows.
    pub const DEFAULT_ROW_COUNT: usize = 10;
    /// Default space after the last row.
    pub const DEFAULT_BOTTOM_INSET: f64 = 100.0;

    /// Smart constructor that validates all dimensions.
    pub fn new(
        row_height: f64,
        viewport_height: f64,
        row_count: usize,
        bottom_inset: f64,
    ) -> Result<Self, InvalidGeometry> {
        if !(row_height.is_finite() && row_height > 0.0) {
            return Err(InvalidGeometry::RowHeight(row_height));
        }
        if !(viewport_height.is_finite() && viewport_height > 0.0) {
            return Err(InvalidGeometry::ViewportHeight(viewport_height));
        }
        if !(bottom_inset.is_finite() && bottom_inset >= 0.0) {
            return Err(InvalidGeometry::BottomInset(bottom_inset));
        }

        Ok(Self {
            row_height,
            viewport_height,
            row_count,
            bottom_inset,
        })
    }

    /// Height of every row.
    pub fn row_height(&self) -> f64 {
        self.row_height
    }

    /// Height of the visible area.
    pub fn viewport_height(&self) -> f64 {
        self.viewport_height
    }

    /// Number of rows in the list.
    pub fn row_count(&self) -> usize {
        self.row_count
    }

    /// Extra scrollable space after the last row.
    pub fn bottom_inset(&self) -> f64 {
        self.bottom_inset
    }

    /// Total scrollable height including the bottom inset.
    pub fn content_height(&self) -> f64 {
        self.row_count as f64 * self.row_height + self.bottom_inset
    }

    /// Largest offset that still fills the viewport.
    pub fn max_offset(&self) -> f64 {
        (self.content_height() - self.viewport_height).max(0.0)
    }

    /// Clamp a raw offset into `[0, max_offset]`. NaN maps to 0.
    pub fn clamp_offset(&self, offset: f64) -> f64 {
        if offset.is_nan() {
            return 0.0;
        }
        offset.clamp(0.0, self.max_offset())
    }

    /// Measure every row that intersects the viewport at `offset`.
    ///
    /// Rows are returned in index order. Percentages are floored to whole
    /// numbers; rows with no visible height are omitted.
    pub fn measure(&self, offset: f64) -> Vec<RowVisibility> {
        let offset = self.clamp_offset(offset);
        if self.row_count == 0 {
            return Vec::new();
        }

        let first = ((offset / self.row_height).floor() as usize).min(self.row_count - 1);
        let end = (((offset + self.viewport_height) / self.row_height).ceil() as usize)
            .min(self.row_count);

        (first..end)
            .filter_map(|row| {
                let frame = RowFrame::new(row as f64 * self.row_height - offset, self.row_height);
                let percentage = visible_percentage(frame, self.viewport_height);
                (percentage > 0.0).then(|| {
                    RowVisibility::new(RowIndex::new(row), percentage.floor()).with_frame(frame)
                })
            })
            .collect()
    }
}

impl Default for ViewportGeometry {
    fn default() -> Self {
        Self {
            row_height: Self::DEFAULT_ROW_HEIGHT,
            viewport_height: Self::DEFAULT_VIEWPORT_HEIGHT,
            row_count: Self::DEFAULT_ROW_COUNT,
            bottom_inset: Self::DEFAULT_BOTTOM_INSET,
        }
    }
}

/// Percentage of `frame` inside a viewport spanning `[0, viewport_height]`.
///
/// Not floored. Zero-height frames are reported as hidden.
pub fn visible_percentage(frame: RowFrame, viewport_height: f64) -> f64 {
    if frame.height <= 0.0 {
        return 0.0;
    }
    let visible_top = frame.y.max(0.0);
    let visible_bottom = frame.max_y().min(viewport_height);
    let visible_height = (visible_bottom - visible_top).max(0.0);
    visible_height / frame.height * 100.0
}
