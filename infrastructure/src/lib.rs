//! Infrastructure layer for truthguard
//!
//! This crate contains adapters that implement the ports defined
//! in the application layer, including configuration file loading.

pub mod config;
pub mod logging;
pub mod oracle;

// Re-export commonly used types
pub use config::{
    ConfigIssue, ConfigLoader, ConfigValidationError, FileConfig, FileLoggingConfig,
    FileOracleConfig, FilePipelineConfig, Severity,
};
pub use logging::JsonlVerificationLogger;
pub use oracle::OpenAiCompatibleOracle;
