//! Viewport layer - turns scroll positions into visible-row batches
//!
//! - `measure`: ViewportGeometry and per-row visible percentages
//! - `debounce`: SettleDebouncer, raw offsets → settle events

pub mod debounce;
pub mod measure;

pub use debounce::{SettleConfig, SettleDebouncer};
pub use measure::{visible_percentage, InvalidGeometry, ViewportGeometry};
