//! Inbound widget configuration and its TOML loader.

mod loader;
mod types;

pub use loader::ConfigError;
pub use types::{SchedulerProps, DEFAULT_LOCALE};
