//! Bistro Client - typed client for the restaurant backend
//!
//! - [`client`]: `HttpClient` trait and the reqwest-backed `NetworkHttpClient`
//! - [`api`]: resource APIs (orders, guests, tables, dishes, menus, ...)
//! - [`session`]: explicit session context with token lifecycle and storage
//! - [`realtime`]: in-process event channel and invalidation router
//! - [`board`]: memoized order statistics for table/guest summaries

pub mod api;
pub mod board;
pub mod client;
pub mod config;
pub mod error;
pub mod realtime;
pub mod session;

pub use api::BistroClient;
pub use board::{OrderBoard, OrderFilter};
pub use client::{HttpClient, NetworkHttpClient};
pub use config::ClientConfig;
pub use error::{ClientError, ClientResult};
pub use realtime::{EventChannel, InvalidationRouter, Invalidations};
pub use session::{FileSessionStorage, MemorySessionStorage, Session, SessionData, SessionStorage};

// Re-export shared types for convenience
pub use shared::client::{GuestLoginResponse, LoginResponse, TokenPair};
pub use shared::response::{ApiResponse, DateRange, FieldError};
pub use shared::token::RefreshDecision;
