//! Configuration file loading for truthguard
//!
//! This module handles file I/O and merging of configuration from multiple sources.
//! The priority order (highest to lowest):
//!
//! 1. Environment: `TRUTHGUARD_<SECTION>__<KEY>`
//! 2. `--config <path>` specified file
//! 3. Project root: `./truthguard.toml` or `./.truthguard.toml`
//! 4. XDG config: `$XDG_CONFIG_HOME/truthguard/config.toml`
//! 5. Default values

mod file_config;
mod loader;

pub use file_config::{
    ConfigIssue, ConfigValidationError, FileConfig, FileLoggingConfig, FileOracleConfig,
    FilePipelineConfig, Severity,
};
pub use loader::{ConfigLoader, ENV_PREFIX};
