//! Domain model types (pure).
//!
//! All types in this module are pure data with smart constructors.

pub mod error;
pub mod row;
pub mod threshold;

// Re-export for convenience
pub use error::AppError;
pub use row::{RowFrame, RowIndex, RowVisibility};
pub use threshold::{InvalidThreshold, Threshold};
