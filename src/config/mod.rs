/// Application settings from environment variables and config.toml
pub mod app;

/// Database connection, table creation, and default-rate seeding
pub mod database;

/// Renewal window configuration
pub mod renewal;

pub use app::{AppConfig, load_app_configuration};
