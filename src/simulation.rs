//! Headless driving of a focus session.
//!
//! Each requested offset is treated as one scroll gesture that comes to rest:
//! the offset is fed to the session's debouncer, then the session is polled
//! once the quiescence window has elapsed. Pure apart from the clock values
//! it is handed, so the outcome is reproducible.

use crate::focus::{FocusObserver, FocusTransition};
use crate::model::{RowIndex, RowVisibility};
use crate::session::FocusSession;
use serde::Serialize;
use std::time::Instant;

/// Result of one settled gesture.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SettleOutcome {
    /// Offset after clamping to the list bounds.
    pub offset: f64,
    /// Rows visible at that offset.
    pub visible: Vec<RowVisibility>,
    /// Focused row after the pass.
    pub focused: Option<RowIndex>,
    /// Present when focus moved.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub transition: Option<FocusTransition>,
}

/// Scroll to each offset in turn and let it settle.
///
/// `start` seeds the simulated clock; gestures are spaced two settle delays
/// apart so each one settles independently.
pub fn simulate<O: FocusObserver>(
    session: &mut FocusSession<O>,
    offsets: &[f64],
    start: Instant,
) -> Vec<SettleOutcome> {
    let delay = session.settle_config().delay;
    let mut now = start;

    offsets
        .iter()
        .map(|&raw| {
            session.scroll_to(raw, now);
            now += delay;
            let transition = session.poll(now);
            now += delay;

            let geometry = session.geometry();
            let offset = geometry.clamp_offset(raw);
            SettleOutcome {
                offset,
                visible: geometry.measure(offset),
                focused: session.state().current,
                transition,
            }
        })
        .collect()
}

/// One-line human readable summary of an outcome.
pub fn format_outcome(outcome: &SettleOutcome) -> String {
    let rows = match (outcome.visible.first(), outcome.visible.last()) {
        (Some(first), Some(last)) => format!("rows {}-{}", first.index(), last.index()),
        _ => "no rows".to_string(),
    };

    let focus = match (outcome.focused, outcome.transition) {
        (None, _) => "no focus".to_string(),
        (Some(current), Some(transition)) => match transition.previous {
            Some(previous) => format!("focus row {current} (was row {previous})"),
            None => format!("focus row {current} (new)"),
        },
        (Some(current), None) => format!("focus row {current} (unchanged)"),
    };

    format!("offset {}: {rows}, {focus}", outcome.offset)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Threshold;
    use crate::viewport::{SettleConfig, ViewportGeometry};

    fn session() -> FocusSession {
        FocusSession::new(
            ViewportGeometry::default(),
            Threshold::DEFAULT,
            SettleConfig::default(),
        )
    }

    fn focused(outcomes: &[SettleOutcome]) -> Vec<Option<usize>> {
        outcomes
            .iter()
            .map(|o| o.focused.map(|i| i.get()))
            .collect()
    }

    #[test]
    fn every_offset_settles() {
        let mut session = session();
        let outcomes = simulate(&mut session, &[0.0, 130.0, 300.0, 1900.0], Instant::now());
        assert_eq!(focused(&outcomes), vec![Some(0), Some(1), Some(2), Some(8)]);
    }

    #[test]
    fn repeated_offset_reports_no_transition() {
        let mut session = session();
        let outcomes = simulate(&mut session, &[0.0, 5.0], Instant::now());
        assert!(outcomes[0].transition.is_some());
        assert!(outcomes[1].transition.is_none());
        assert_eq!(outcomes[1].focused, Some(RowIndex::new(0)));
    }

    #[test]
    fn offsets_are_clamped() {
        let mut session = session();
        let outcomes = simulate(&mut session, &[-40.0, 10_000.0], Instant::now());
        assert_eq!(outcomes[0].offset, 0.0);
        assert_eq!(outcomes[1].offset, 1900.0);
    }

    #[test]
    fn format_new_focus() {
        let mut session = session();
        let outcomes = simulate(&mut session, &[0.0], Instant::now());
        assert_eq!(
            format_outcome(&outcomes[0]),
            "offset 0: rows 0-3, focus row 0 (new)"
        );
    }

    #[test]
    fn format_moved_and_unchanged_focus() {
        let mut session = session();
        let outcomes = simulate(&mut session, &[0.0, 130.0, 140.0], Instant::now());
        assert_eq!(
            format_outcome(&outcomes[1]),
            "offset 130: rows 0-3, focus row 1 (was row 0)"
        );
        assert_eq!(
            format_outcome(&outcomes[2]),
            "offset 140: rows 0-3, focus row 1 (unchanged)"
        );
    }

    #[test]
    fn format_empty_list() {
        let geometry = ViewportGeometry::new(260.0, 800.0, 0, 0.0).unwrap();
        let mut session = FocusSession::new(geometry, Threshold::DEFAULT, SettleConfig::default());
        let outcomes = simulate(&mut session, &[0.0], Instant::now());
        assert_eq!(format_outcome(&outcomes[0]), "offset 0: no rows, no focus");
    }

    #[test]
    fn outcome_serializes_without_missing_transition() {
        let mut session = session();
        let outcomes = simulate(&mut session, &[0.0, 0.0], Instant::now());
        let json = serde_json::to_value(&outcomes[1]).unwrap();
        assert!(json.get("transition").is_none());
        assert_eq!(json["focused"], 0);
        assert_eq!(json["visible"].as_array().map(|v| v.len()), Some(4));
    }
}
