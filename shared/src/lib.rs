//! Shared types for the Bistro workspace
//!
//! Domain models exchanged with the restaurant backend, the API response
//! envelope, realtime event definitions, the guest cart and the order
//! statistics derivation used by table/guest summaries.

pub mod cart;
pub mod client;
pub mod error;
pub mod event;
pub mod models;
pub mod order;
pub mod response;
pub mod token;

// Re-exports
pub use http;
pub use serde::{Deserialize, Serialize};

pub use cart::{Cart, CartError, CartLine};
pub use error::{AppError, AppResult, ErrorCode};
pub use event::{QueryKey, RealtimeEvent};
pub use order::{OrderStatistics, ServingGuests, StatusCounts};
pub use response::ApiResponse;
