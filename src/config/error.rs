//! Config error types.

use thiserror::Error;

/// Errors that can occur while loading a machine description
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The document is not valid JSON or does not match the table shape
    #[error("Failed to parse machine config: {0}")]
    Parse(#[from] serde_json::Error),
}
