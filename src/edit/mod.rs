//! Batch editing algorithms.
//!
//! Each algorithm reads the current store and produces a [`Transaction`]
//! that the diagram commits atomically.
//!
//! [`Transaction`]: crate::diagram::Transaction

pub mod copy;
pub mod fill;
pub mod line;

pub use copy::copy_level_transaction;
pub use fill::{fill_transaction, FillOutcome};
pub use line::{line_positions, line_transaction};
