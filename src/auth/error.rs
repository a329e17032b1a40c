//! Request signing error types

use thiserror::Error;

/// Errors raised while setting up a request signer
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AuthError {
    /// Access key or secret key was not provided
    #[error("Not ready to authenticate: missing {missing}")]
    MissingCredentials { missing: &'static str },
}

impl AuthError {
    /// Missing credentials never resolve themselves
    pub fn is_retryable(&self) -> bool {
        false
    }

    pub fn missing_access_key() -> Self {
        AuthError::MissingCredentials {
            missing: "access key",
        }
    }

    pub fn missing_secret_key() -> Self {
        AuthError::MissingCredentials {
            missing: "secret key",
        }
    }
}
