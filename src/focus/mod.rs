//! Focus layer - selection, transition tracking, and diagnostics
//!
//! # Module Structure
//!
//! - `selector`: pure visible-rows → focused-row decision
//! - `tracker`: FocusState and focus transitions
//! - `observer`: FocusObserver diagnostics hook
//! - `report`: plain-text table of one selection pass

pub mod observer;
pub mod report;
pub mod selector;
pub mod tracker;

pub use observer::{FocusObserver, NoopObserver, TracingObserver};
pub use report::format_report;
pub use selector::{select, select_candidate, FocusCandidate, RowPosition};
pub use tracker::{update, FocusState, FocusTransition, FocusUpdate, RowHighlight};
