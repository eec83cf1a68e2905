//! Data models
//!
//! Mirrors the JSON payloads of the restaurant backend (camelCase keys).
//! Entity IDs are `i64`; tables are addressed by their number.

pub mod account;
pub mod category;
pub mod dining_table;
pub mod dish;
pub mod guest;
pub mod indicator;
pub mod ingredient;
pub mod menu;
pub mod order;
pub mod payment;

// Re-exports
pub use account::*;
pub use category::*;
pub use dining_table::*;
pub use dish::*;
pub use guest::*;
pub use indicator::*;
pub use ingredient::*;
pub use menu::*;
pub use order::*;
pub use payment::*;

/// Entity identifier
pub type Id = i64;

/// Guest identifier
pub type GuestId = Id;

/// Physical table number
pub type TableNumber = i32;
