//! Transform builder error types
//!
//! Every variant is a usage error: the caller fixes the call and retries.
//! Nothing here is transient.

use thiserror::Error;

/// Which lookup table rejected a name
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NameKind {
    Adjustment,
    Filter,
}

impl NameKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            NameKind::Adjustment => "adjustment",
            NameKind::Filter => "filter",
        }
    }
}

/// Errors raised while configuring a transform
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TransformError {
    /// A second transform command was requested without a reset
    #[error("Command already set: {current}. Reset image before applying command.")]
    CommandAlreadySet { current: &'static str },

    /// Alignment name is not one of the known anchor positions
    #[error("Unknown alignment: {name}")]
    UnknownAlignment { name: String },

    /// Adjustment or filter name has no wire token (strict validation only)
    #[error("Unknown {} name: {name}", kind.as_str())]
    UnknownName { kind: NameKind, name: String },
}

impl TransformError {
    /// No transform error clears up by retrying the same call
    pub fn is_retryable(&self) -> bool {
        false
    }

    pub fn unknown_alignment(name: impl Into<String>) -> Self {
        TransformError::UnknownAlignment { name: name.into() }
    }

    pub fn unknown_name(kind: NameKind, name: impl Into<String>) -> Self {
        TransformError::UnknownName {
            kind,
            name: name.into(),
        }
    }
}
