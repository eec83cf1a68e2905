//! Client module - HTTP transport to the backend API.

pub mod http;

pub use http::{HttpClient, NetworkHttpClient};
