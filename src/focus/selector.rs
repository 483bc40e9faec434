//! Focused-row selection from a batch of visible-row measurements.
//!
//! The topmost visible row is the default candidate. While the current
//! candidate's focus rate is below the threshold, each following row takes
//! over: interior rows count as fully visible, the bottom row as its measured
//! percentage. The first row meeting the threshold stops the cascade.
//!
//! Interior rows are assumed fully visible because only the first and last
//! displayed rows of a single-column, uniform-height list can be clipped by
//! the viewport edges. Variable-height rows or very short rows break that
//! assumption; the classification is kept as-is.

use crate::model::{RowIndex, RowVisibility, Threshold};
use serde::Serialize;

/// Where a row sits within a sorted measurement batch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowPosition {
    /// Topmost visible row. A single-row batch is always `First`.
    First,
    /// Any row strictly between the first and last.
    Interior,
    /// Bottommost visible row of a batch with at least two rows.
    Last,
}

impl RowPosition {
    /// Classify position `position` in a batch of `len` rows.
    pub fn classify(position: usize, len: usize) -> Self {
        if position == 0 {
            Self::First
        } else if position + 1 == len {
            Self::Last
        } else {
            Self::Interior
        }
    }

    /// One-letter marker used in diagnostic output.
    pub fn marker(&self) -> char {
        match self {
            Self::First => 'F',
            Self::Interior => 'M',
            Self::Last => 'L',
        }
    }
}

/// The selector's decision together with the focus rate it settled on.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct FocusCandidate {
    /// Row chosen for focus.
    pub index: RowIndex,
    /// Visible percentage credited to that row (100 for interior rows).
    pub rate: f64,
}

/// Pick the focused row, or `None` for an empty batch.
///
/// Pure and deterministic: identical input always yields identical output.
pub fn select(rows: &[RowVisibility], threshold: Threshold) -> Option<RowIndex> {
    select_candidate(rows, threshold).map(|candidate| candidate.index)
}

/// Like [`select`], but also reports the final focus rate.
pub fn select_candidate(rows: &[RowVisibility], threshold: Threshold) -> Option<FocusCandidate> {
    let sorted = sorted_by_index(rows);
    let len = sorted.len();

    let mut focus: Option<FocusCandidate> = None;
    let mut focus_rate = 0.0;

    for (position, row) in sorted.iter().enumerate() {
        let rate = match RowPosition::classify(position, len) {
            RowPosition::First => row.visible_percentage(),
            RowPosition::Last if threshold.is_unmet_by(focus_rate) => row.visible_percentage(),
            RowPosition::Interior if threshold.is_unmet_by(focus_rate) => 100.0,
            RowPosition::Last | RowPosition::Interior => continue,
        };
        focus_rate = rate;
        focus = Some(FocusCandidate {
            index: row.index(),
            rate,
        });
    }

    focus
}

/// Copy of `rows` in ascending index order. Stable, so duplicate indices keep
/// their input order.
pub fn sorted_by_index(rows: &[RowVisibility]) -> Vec<RowVisibility> {
    let mut sorted = rows.to_vec();
    sorted.sort_by_key(|row| row.index());
    sorted
}
