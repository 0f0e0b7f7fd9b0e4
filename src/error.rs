//! Crate-level error types.
//!
//! Convention violations are not errors; they travel as findings and are
//! rendered by the reporter. This type covers the failures that abort a
//! run before any result can be reported, such as an unloadable
//! configuration file.

use crate::linter::config::ConfigError;
use thiserror::Error;

/// Errors that abort a convlint run.
#[derive(Error, Debug)]
pub enum ConvlintError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Convenience result alias for convlint operations.
pub type Result<T> = std::result::Result<T, ConvlintError>;
