//! Order derivations
//!
//! View-model computations over an already-fetched order list:
//! - Statistics: global/per-table/per-guest status counts
//! - Serving guests: guests with at least one non-terminal order

pub mod stats;

// Re-exports
pub use stats::{GuestStatusCounts, OrderStatistics, ServingGuests, StatusCounts};
