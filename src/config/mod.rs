mod loader;
mod types;

pub use loader::ConfigError;
pub use types::{Config, LoggingConfig, UiConfig, LOG_LEVELS, TICK_RATE_RANGE_MS};
