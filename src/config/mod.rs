//! Configuration module for astrodb
//!
//! Configuration hierarchy:
//! 1. CLI flags (highest priority)
//! 2. Environment variables (ASTRODB_*)
//! 3. Project config (./astrodb.toml)
//! 4. User config (<config dir>/astrodb/config.toml)
//! 5. Built-in defaults (lowest priority; the dataset shipped beside the tool)

mod loader;
#[cfg(test)]
mod tests;
mod types;

pub use loader::{bundled_data_dir, PROJECT_CONFIG_FILE};
pub use types::{
    ChecksConfig, Config, ConfigSource, ConfigWarning, DataConfig, LoadedConfig, OutputConfig,
};
