//! Plain-text diagnostic table for one selection pass.

use super::selector::{sorted_by_index, FocusCandidate, RowPosition};
use crate::model::RowVisibility;

/// Render the measured batch and the resulting focus.
///
/// One line per row in index order, e.g. `F [0] row 4 95%`, followed by the
/// focus line. Percentages are floored to whole numbers. No trailing newline.
pub fn format_report(rows: &[RowVisibility], candidate: Option<FocusCandidate>) -> String {
    let sorted = sorted_by_index(rows);
    let len = sorted.len();

    let mut lines: Vec<String> = sorted
        .iter()
        .enumerate()
        .map(|(position, row)| {
            format!(
                "{} [{}] row {} {}%",
                RowPosition::classify(position, len).marker(),
                position,
                row.index(),
                row.visible_percentage().floor()
            )
        })
        .collect();

    lines.push(match candidate {
        Some(candidate) => format!("focus: row {}, {}%", candidate.index, candidate.rate.floor()),
        None => "focus: none".to_string(),
    });

    lines.join("\n")
}
