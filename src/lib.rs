//! rowfocus
//!
//! Picks the single "focused" row of a vertically scrolling list from how much
//! of each visible row is inside the viewport.
//!
//! Pure core (`focus`, `model`, `viewport`) with a thin shell (`config`,
//! `logging`, the `rowfocus` binary). A host embeds a [`session::FocusSession`]
//! per list, feeds it scroll offsets, and renders the transitions it returns.

pub mod config;
pub mod focus;
pub mod logging;
pub mod model;
pub mod session;
pub mod simulation;
pub mod viewport;

pub use focus::{select, update, FocusState, FocusTransition};
pub use model::{RowIndex, RowVisibility, Threshold};
pub use session::FocusSession;
