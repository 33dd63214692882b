//! Group construction errors.

use thiserror::Error;

use crate::config::ConfigError;

/// Errors that can occur when constructing a group.
///
/// Construction is the only fallible step; event handling is total.
#[derive(Debug, Error)]
pub enum GroupError {
    /// The configuration could not be resolved.
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// The drawer needs an auto-hide task but no tokio runtime is running.
    #[error("drawer auto-hide task requires a tokio runtime: {0}")]
    NoRuntime(#[from] tokio::runtime::TryCurrentError),
}
