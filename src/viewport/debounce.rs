//! Scroll-settle detection.
//!
//! Raw offsets arrive at frame rate while the user scrolls. A settle fires
//! once the offset has stayed within `epsilon` of the window's anchor for
//! `delay`. Callers supply the clock so the debouncer never sleeps.

use std::time::{Duration, Instant};

/// Quiescence parameters.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SettleConfig {
    /// How long the offset must stay put.
    pub delay: Duration,
    /// Movement smaller than this does not restart the window.
    pub epsilon: f64,
}

impl SettleConfig {
    /// Default quiescence delay.
    pub const DEFAULT_DELAY: Duration = Duration::from_millis(100);

    /// Default movement tolerance.
    pub const DEFAULT_EPSILON: f64 = 0.5;
}

impl Default for SettleConfig {
    fn default() -> Self {
        Self {
            delay: Self::DEFAULT_DELAY,
            epsilon: Self::DEFAULT_EPSILON,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
struct Window {
    anchor: f64,
    latest: f64,
    since: Instant,
}

/// Debounces raw scroll offsets into settle events.
#[derive(Debug, Clone)]
pub struct SettleDebouncer {
    config: SettleConfig,
    window: Option<Window>,
}

impl SettleDebouncer {
    /// Create an idle debouncer.
    pub fn new(config: SettleConfig) -> Self {
        Self {
            config,
            window: None,
        }
    }

    /// Quiescence parameters in use.
    pub fn config(&self) -> SettleConfig {
        self.config
    }

    /// Record a raw offset observed at `now`.
    ///
    /// A move of at least `epsilon` from the anchor supersedes the pending
    /// window; smaller jitter only updates the reported offset.
    pub fn record(&mut self, offset: f64, now: Instant) {
        if let Some(window) = self.window.as_mut() {
            if (offset - window.anchor).abs() < self.config.epsilon {
                window.latest = offset;
                return;
            }
        }

        self.window = Some(Window {
            anchor: offset,
            latest: offset,
            since: now,
        });
    }

    /// Consume the pending window if it has been quiet for `delay`.
    ///
    /// Returns the settled offset.
    pub fn poll(&mut self, now: Instant) -> Option<f64> {
        let window = self.window?;
        if now.saturating_duration_since(window.since) < self.config.delay {
            return None;
        }
        self.window = None;
        Some(window.latest)
    }

    /// Time at which the pending window will settle, if any.
    pub fn deadline(&self) -> Option<Instant> {
        self.window.map(|window| window.since + self.config.delay)
    }

    /// True while a window is waiting to settle.
    pub fn is_pending(&self) -> bool {
        self.window.is_some()
    }

    /// Drop the pending window without settling.
    pub fn cancel(&mut self) {
        self.window = None;
    }
}

impl Default for SettleDebouncer {
    fn default() -> Self {
        Self::new(SettleConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ms(n: u64) -> Duration {
        Duration::from_millis(n)
    }

    #[test]
    fn idle_debouncer_never_settles() {
        let mut debouncer = SettleDebouncer::default();
        assert!(!debouncer.is_pending());
        assert_eq!(debouncer.poll(Instant::now()), None);
    }

    #[test]
    fn settles_after_delay() {
        let start = Instant::now();
        let mut debouncer = SettleDebouncer::default();
        debouncer.record(120.0, start);

        assert_eq!(debouncer.poll(start + ms(99)), None);
        assert_eq!(debouncer.poll(start + ms(100)), Some(120.0));
        assert!(!debouncer.is_pending());
    }

    #[test]
    fn settle_is_consumed_once() {
        let start = Instant::now();
        let mut debouncer = SettleDebouncer::default();
        debouncer.record(40.0, start);

        assert_eq!(debouncer.poll(start + ms(150)), Some(40.0));
        assert_eq!(debouncer.poll(start + ms(300)), None);
    }

    #[test]
    fn significant_move_restarts_window() {
        let start = Instant::now();
        let mut debouncer = SettleDebouncer::default();
        debouncer.record(0.0, start);
        debouncer.record(50.0, start + ms(80));

        assert_eq!(debouncer.poll(start + ms(120)), None);
        assert_eq!(debouncer.poll(start + ms(180)), Some(50.0));
    }

    #[test]
    fn jitter_below_epsilon_keeps_window() {
        let start = Instant::now();
        let mut debouncer = SettleDebouncer::default();
        debouncer.record(200.0, start);
        debouncer.record(200.3, start + ms(60));

        assert_eq!(debouncer.poll(start + ms(100)), Some(200.3));
    }

    #[test]
    fn deadline_tracks_window_start() {
        let start = Instant::now();
        let mut debouncer = SettleDebouncer::default();
        assert_eq!(debouncer.deadline(), None);

        debouncer.record(10.0, start);
        assert_eq!(debouncer.deadline(), Some(start + ms(100)));
    }

    #[test]
    fn cancel_drops_pending_window() {
        let start = Instant::now();
        let mut debouncer = SettleDebouncer::default();
        debouncer.record(10.0, start);
        debouncer.cancel();

        assert_eq!(debouncer.poll(start + ms(500)), None);
    }

    #[test]
    fn custom_delay_is_respected() {
        let start = Instant::now();
        let mut debouncer = SettleDebouncer::new(SettleConfig {
            delay: ms(250),
            epsilon: 1.0,
        });
        debouncer.record(10.0, start);

        assert_eq!(debouncer.poll(start + ms(200)), None);
        assert_eq!(debouncer.poll(start + ms(250)), Some(10.0));
    }
}
