//! Diagnostics hook for selection passes.
//!
//! Observers see exactly what the session computed; they cannot influence it.

use super::report::format_report;
use super::selector::FocusCandidate;
use super::tracker::FocusTransition;
use crate::model::RowVisibility;
use tracing::{debug, info};

/// Receives the inputs and outputs of each selection pass.
///
/// All methods default to no-ops so implementors pick what they need.
pub trait FocusObserver {
    /// A settled batch is about to be evaluated.
    fn on_batch(&mut self, _rows: &[RowVisibility]) {}

    /// The selector finished. `None` means the batch was empty.
    fn on_selection(&mut self, _rows: &[RowVisibility], _candidate: Option<FocusCandidate>) {}

    /// Focus moved.
    fn on_transition(&mut self, _transition: &FocusTransition) {}
}

/// Observer that ignores everything.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopObserver;

impl FocusObserver for NoopObserver {}

/// Observer that forwards passes to `tracing`.
///
/// Batches and reports go to `debug`, transitions to `info`.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingObserver;

impl FocusObserver for TracingObserver {
    fn on_batch(&mut self, rows: &[RowVisibility]) {
        let indices: Vec<usize> = rows.iter().map(|row| row.index().get()).collect();
        debug!(visible = ?indices, count = rows.len(), "Visible rows settled");
    }

    fn on_selection(&mut self, rows: &[RowVisibility], candidate: Option<FocusCandidate>) {
        debug!(
            focus = ?candidate.map(|c| c.index.get()),
            rate = ?candidate.map(|c| c.rate),
            "Focus selected\n{}",
            format_report(rows, candidate)
        );
    }

    fn on_transition(&mut self, transition: &FocusTransition) {
        info!(
            previous = ?transition.previous.map(|i| i.get()),
            current = ?transition.current.map(|i| i.get()),
            "Focus changed"
        );
    }
}

impl<O: FocusObserver + ?Sized> FocusObserver for &mut O {
    fn on_batch(&mut self, rows: &[RowVisibility]) {
        (**self).on_batch(rows);
    }

    fn on_selection(&mut self, rows: &[RowVisibility], candidate: Option<FocusCandidate>) {
        (**self).on_selection(rows, candidate);
    }

    fn on_transition(&mut self, transition: &FocusTransition) {
        (**self).on_transition(transition);
    }
}

impl<O: FocusObserver + ?Sized> FocusObserver for Box<O> {
    fn on_batch(&mut self, rows: &[RowVisibility]) {
        (**self).on_batch(rows);
    }

    fn on_selection(&mut self, rows: &[RowVisibility], candidate: Option<FocusCandidate>) {
        (**self).on_selection(rows, candidate);
    }

    fn on_transition(&mut self, transition: &FocusTransition) {
        (**self).on_transition(transition);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::RowIndex;

    #[derive(Default)]
    struct Counting {
        batches: usize,
        selections: usize,
        transitions: usize,
    }

    impl FocusObserver for Counting {
        fn on_batch(&mut self, _rows: &[RowVisibility]) {
            self.batches += 1;
        }

        fn on_selection(&mut self, _rows: &[RowVisibility], _candidate: Option<FocusCandidate>) {
            self.selections += 1;
        }

        fn on_transition(&mut self, _transition: &FocusTransition) {
            self.transitions += 1;
        }
    }

    fn transition() -> FocusTransition {
        FocusTransition {
            previous: None,
            current: Some(RowIndex::new(0)),
        }
    }

    #[test]
    fn noop_and_tracing_observers_accept_all_events() {
        let rows = [RowVisibility::new(0, 100.0)];
        let candidate = Some(FocusCandidate {
            index: RowIndex::new(0),
            rate: 100.0,
        });

        let mut noop = NoopObserver;
        noop.on_batch(&rows);
        noop.on_selection(&rows, candidate);
        noop.on_transition(&transition());

        let mut tracing_observer = TracingObserver;
        tracing_observer.on_batch(&rows);
        tracing_observer.on_selection(&rows, candidate);
        tracing_observer.on_transition(&transition());
    }

    fn drive<O: FocusObserver>(mut observer: O) {
        observer.on_batch(&[]);
        observer.on_selection(&[], None);
        observer.on_transition(&transition());
    }

    #[test]
    fn mutable_reference_forwards_to_inner_observer() {
        let mut counting = Counting::default();
        drive(&mut counting);
        assert_eq!(counting.batches, 1);
        assert_eq!(counting.selections, 1);
        assert_eq!(counting.transitions, 1);
    }

    #[test]
    fn boxed_observer_forwards() {
        let boxed: Box<dyn FocusObserver> = Box::new(Counting::default());
        drive(boxed);
    }
}
