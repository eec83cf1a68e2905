//! Bistro Monitor - floor view of the restaurant
//!
//! Logs in to the backend, keeps an order board fresh and logs what every
//! table is waiting for.

pub mod config;
pub mod logger;
pub mod monitor;
pub mod summary;

pub use config::MonitorConfig;
pub use monitor::Monitor;

/// Load `.env` and initialize logging
pub fn setup_environment() -> MonitorConfig {
    dotenv::dotenv().ok();
    let config = MonitorConfig::from_env();
    logger::init_logger(&config.log_level, config.log_dir.as_deref());
    config
}
