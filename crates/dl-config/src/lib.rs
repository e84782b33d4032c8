pub mod auth_config;
pub mod config;
pub mod database_config;
pub mod error;
pub mod log_level;
pub mod logging_config;
pub mod server_config;

pub use auth_config::AuthConfig;
pub use config::Config;
pub use database_config::DatabaseConfig;
pub use error::{ConfigError, Result as ConfigErrorResult};
pub use log_level::LogLevel;
pub use logging_config::LoggingConfig;
pub use server_config::ServerConfig;

pub const DEFAULT_HOST: &str = "127.0.0.1";
pub const DEFAULT_PORT: u16 = 5000;
pub const DEFAULT_DATABASE_PATH: &str = "devlink.db";
pub const DEFAULT_TOKEN_TTL_HOURS: u64 = 24;
pub const DEFAULT_LOG_DIR: &str = "logs";

/// Signing secrets shorter than this are rejected at startup.
pub const MIN_JWT_SECRET_BYTES: usize = 32;

#[cfg(test)]
mod tests;
