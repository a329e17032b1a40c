// Error types module

use thiserror::Error;

use crate::auth::AuthError;
use crate::image::TransformError;

/// Crate-level error
///
/// Wraps the per-module errors so callers juggling config, builders and
/// signers can use a single `Result` type.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MediaError {
    /// Configuration errors (invalid YAML, missing env vars, bad values)
    #[error("Configuration error: {0}")]
    Config(String),

    #[error(transparent)]
    Transform(#[from] TransformError),

    #[error(transparent)]
    Auth(#[from] AuthError),
}

impl MediaError {
    pub fn config(message: impl Into<String>) -> Self {
        MediaError::Config(message.into())
    }

    /// Every error here is local and caller-correctable
    pub fn is_retryable(&self) -> bool {
        match self {
            MediaError::Config(_) => false,
            MediaError::Transform(e) => e.is_retryable(),
            MediaError::Auth(e) => e.is_retryable(),
        }
    }
}
