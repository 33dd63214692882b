//! Configuration error types.

use thiserror::Error;

/// Errors that can occur while resolving a group configuration.
///
/// Only structural problems are errors. Optional fields with a missing or
/// mistyped value silently fall back to their defaults.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// `orientation` is not one of `inherit`, `orthogonal`, `vertical`,
    /// `horizontal`.
    #[error("Invalid orientation value: {0}")]
    InvalidOrientation(String),

    /// The module configuration is not a JSON object.
    #[error("group configuration must be a JSON object, got {0}")]
    NotAnObject(&'static str),

    /// The configuration text could not be parsed.
    #[error("invalid group configuration JSON: {0}")]
    Json(#[from] serde_json::Error),
}
