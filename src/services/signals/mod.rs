//! Signal scoring service module.
//!
//! Turns an indicator snapshot into discrete signals, scores them against a
//! [`ScoringTable`] and explains the result.

pub mod fundamentals;
pub mod mapper;
pub mod recommendation;
pub mod table;

pub use fundamentals::{annotate, format_money};
pub use mapper::map_signals;
pub use recommendation::{synthesize, MAX_REASONS};
pub use table::ScoringTable;
