//! Focus transition tracking.
//!
//! Selection and transition are kept apart so repeated identical selections
//! collapse into a single visible update.

use crate::model::RowIndex;
use serde::Serialize;

/// Session-scoped focus bookkeeping for one list instance.
///
/// Created empty, updated once per completed selection, never persisted.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FocusState {
    /// Row currently focused, `None` before the first selection.
    pub current: Option<RowIndex>,
    /// Row focused immediately before the last change.
    pub previous: Option<RowIndex>,
}

impl FocusState {
    /// Create an empty state.
    pub fn new() -> Self {
        Self::default()
    }

    /// Check whether `index` is the focused row.
    pub fn is_focused(&self, index: RowIndex) -> bool {
        self.current == Some(index)
    }
}

/// A focus change: un-highlight `previous`, highlight `current`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct FocusTransition {
    /// Row losing focus.
    pub previous: Option<RowIndex>,
    /// Row gaining focus.
    pub current: Option<RowIndex>,
}

impl FocusTransition {
    /// Rows whose visual state must change, previous row first.
    pub fn highlights(&self) -> impl Iterator<Item = (RowIndex, RowHighlight)> {
        self.previous
            .map(|index| (index, RowHighlight::Unfocused))
            .into_iter()
            .chain(self.current.map(|index| (index, RowHighlight::Focused)))
    }
}

/// Visual state a renderer applies to a row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowHighlight {
    /// Bordered, labelled "focus on".
    Focused,
    /// Plain, labelled "out of focus".
    Unfocused,
}

impl RowHighlight {
    /// Status label shown inside the row.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Focused => "focus on",
            Self::Unfocused => "out of focus",
        }
    }
}

/// Result of applying a selection to a [`FocusState`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FocusUpdate {
    /// State after the update.
    pub state: FocusState,
    /// Present only when focus moved.
    pub transition: Option<FocusTransition>,
}

impl FocusUpdate {
    /// True when focus moved.
    pub fn changed(&self) -> bool {
        self.transition.is_some()
    }
}

/// Apply a newly selected index to `state`.
///
/// Returns the unchanged state when `new_index` is already current.
pub fn update(state: FocusState, new_index: Option<RowIndex>) -> FocusUpdate {
    if new_index == state.current {
        return FocusUpdate {
            state,
            transition: None,
        };
    }

    let next = FocusState {
        current: new_index,
        previous: state.current,
    };

    FocusUpdate {
        state: next,
        transition: Some(FocusTransition {
            previous: next.previous,
            current: next.current,
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn idx(i: usize) -> RowIndex {
        RowIndex::new(i)
    }

    #[test]
    fn new_state_is_empty() {
        let state = FocusState::new();
        assert_eq!(state.current, None);
        assert_eq!(state.previous, None);
    }

    #[test]
    fn first_selection_changes_from_none() {
        let result = update(FocusState::new(), Some(idx(0)));
        assert!(result.changed());
        assert_eq!(result.state.current, Some(idx(0)));
        assert_eq!(result.state.previous, None);
        assert_eq!(
            result.transition,
            Some(FocusTransition {
                previous: None,
                current: Some(idx(0)),
            })
        );
    }

    #[test]
    fn same_index_is_not_a_change() {
        let state = FocusState {
            current: Some(idx(2)),
            previous: Some(idx(1)),
        };
        let result = update(state, Some(idx(2)));
        assert!(!result.changed());
        assert_eq!(result.state, state);
    }

    #[test]
    fn new_index_shifts_current_to_previous() {
        let state = FocusState {
            current: Some(idx(2)),
            previous: None,
        };
        let result = update(state, Some(idx(5)));
        assert!(result.changed());
        assert_eq!(result.state.current, Some(idx(5)));
        assert_eq!(result.state.previous, Some(idx(2)));
    }

    #[test]
    fn clearing_focus_is_a_change() {
        let state = FocusState {
            current: Some(idx(3)),
            previous: None,
        };
        let result = update(state, None);
        assert!(result.changed());
        assert_eq!(result.state.current, None);
        assert_eq!(result.state.previous, Some(idx(3)));
    }

    #[test]
    fn is_focused_matches_current_only() {
        let state = FocusState {
            current: Some(idx(4)),
            previous: Some(idx(3)),
        };
        assert!(state.is_focused(idx(4)));
        assert!(!state.is_focused(idx(3)));
    }

    #[test]
    fn highlights_unfocus_previous_then_focus_current() {
        let transition = FocusTransition {
            previous: Some(idx(1)),
            current: Some(idx(2)),
        };
        let highlights: Vec<_> = transition.highlights().collect();
        assert_eq!(
            highlights,
            vec![
                (idx(1), RowHighlight::Unfocused),
                (idx(2), RowHighlight::Focused),
            ]
        );
    }

    #[test]
    fn highlights_skip_missing_previous() {
        let transition = FocusTransition {
            previous: None,
            current: Some(idx(0)),
        };
        let highlights: Vec<_> = transition.highlights().collect();
        assert_eq!(highlights, vec![(idx(0), RowHighlight::Focused)]);
    }

    #[test]
    fn highlight_labels() {
        assert_eq!(RowHighlight::Focused.label(), "focus on");
        assert_eq!(RowHighlight::Unfocused.label(), "out of focus");
    }

    #[test]
    fn transition_serializes_indices_as_numbers() {
        let transition = FocusTransition {
            previous: Some(idx(1)),
            current: Some(idx(2)),
        };
        let json = serde_json::to_string(&transition).unwrap();
        assert_eq!(json, r#"{"previous":1,"current":2}"#);
    }
}
