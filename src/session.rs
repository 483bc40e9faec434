//! Per-list focus session.
//!
//! Owns the [`FocusState`] for one list instance and wires the settle
//! debouncer, viewport measurement, selector, tracker, and observer together.
//! Everything runs synchronously on the caller's thread.

use crate::focus::{
    select_candidate, update, FocusObserver, FocusState, FocusTransition, NoopObserver,
};
use crate::model::{RowVisibility, Threshold};
use crate::viewport::{SettleConfig, SettleDebouncer, ViewportGeometry};
use std::time::Instant;

/// Focus tracking for one scrolling list.
#[derive(Debug)]
pub struct FocusSession<O = NoopObserver> {
    geometry: ViewportGeometry,
    threshold: Threshold,
    debouncer: SettleDebouncer,
    state: FocusState,
    observer: O,
}

impl FocusSession<NoopObserver> {
    /// Create a session with no focus and no observer.
    pub fn new(geometry: ViewportGeometry, threshold: Threshold, settle: SettleConfig) -> Self {
        Self {
            geometry,
            threshold,
            debouncer: SettleDebouncer::new(settle),
            state: FocusState::new(),
            observer: NoopObserver,
        }
    }
}

impl<O: FocusObserver> FocusSession<O> {
    /// Replace the observer, keeping all other state.
    pub fn with_observer<P: FocusObserver>(self, observer: P) -> FocusSession<P> {
        FocusSession {
            geometry: self.geometry,
            threshold: self.threshold,
            debouncer: self.debouncer,
            state: self.state,
            observer,
        }
    }

    /// Current focus bookkeeping.
    pub fn state(&self) -> FocusState {
        self.state
    }

    /// List geometry used for measurement.
    pub fn geometry(&self) -> ViewportGeometry {
        self.geometry
    }

    /// Threshold used for selection.
    pub fn threshold(&self) -> Threshold {
        self.threshold
    }

    /// Settle detection parameters.
    pub fn settle_config(&self) -> SettleConfig {
        self.debouncer.config()
    }

    /// Attached observer.
    pub fn observer(&self) -> &O {
        &self.observer
    }

    /// Consume the session, returning the observer.
    pub fn into_observer(self) -> O {
        self.observer
    }

    /// Replace the geometry (e.g. after a resize). Focus is kept.
    pub fn set_geometry(&mut self, geometry: ViewportGeometry) {
        self.geometry = geometry;
    }

    /// True while a scroll gesture has not settled yet.
    pub fn is_scrolling(&self) -> bool {
        self.debouncer.is_pending()
    }

    /// Feed a raw scroll offset observed at `now`.
    pub fn scroll_to(&mut self, offset: f64, now: Instant) {
        self.debouncer.record(offset, now);
    }

    /// Evaluate focus if scrolling has settled by `now`.
    pub fn poll(&mut self, now: Instant) -> Option<FocusTransition> {
        let offset = self.debouncer.poll(now)?;
        self.settle_at(offset)
    }

    /// Measure at `offset` and evaluate focus immediately, bypassing the
    /// debouncer. Any pending scroll window is dropped.
    pub fn settle_at(&mut self, offset: f64) -> Option<FocusTransition> {
        self.debouncer.cancel();
        let rows = self.geometry.measure(offset);
        self.apply_batch(&rows)
    }

    /// Run one selection pass over a settled batch.
    ///
    /// An empty batch leaves the current focus untouched.
    pub fn apply_batch(&mut self, rows: &[RowVisibility]) -> Option<FocusTransition> {
        self.observer.on_batch(rows);

        let candidate = select_candidate(rows, self.threshold);
        self.observer.on_selection(rows, candidate);

        let candidate = candidate?;
        let result = update(self.state, Some(candidate.index));
        self.state = result.state;

        if let Some(transition) = &result.transition {
            self.observer.on_transition(transition);
        }
        result.transition
    }
}
