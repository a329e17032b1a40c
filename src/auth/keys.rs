//! HMAC-SHA256 signing keys
//!
//! ```text
//! signature = base64url(HMAC-SHA256(secret_key, data))
//! ```
//!
//! The signature keeps base64 padding, as the media platform expects.

use std::fmt;

use base64::{engine::general_purpose::URL_SAFE, Engine};
use hmac::{Hmac, Mac};
use sha2::Sha256;

use super::error::AuthError;
use crate::constants::HMAC_ALGORITHM;

type HmacSha256 = Hmac<Sha256>;

/// Access key + secret key pair
///
/// `update_keys` takes `&mut self`; callers sharing one signer across
/// threads must synchronise it themselves (e.g. behind a lock) or give each
/// request its own copy.
#[derive(Clone, PartialEq, Eq)]
pub struct HmacKeys {
    access_key: String,
    secret_key: Vec<u8>,
}

impl HmacKeys {
    /// Create a key pair; an empty key counts as missing
    pub fn new(
        access_key: impl Into<String>,
        secret_key: impl Into<Vec<u8>>,
    ) -> Result<Self, AuthError> {
        let access_key = access_key.into();
        let secret_key = secret_key.into();
        Self::from_parts(
            Some(access_key).filter(|k| !k.is_empty()),
            Some(secret_key).filter(|k| !k.is_empty()),
        )
    }

    pub fn from_parts(
        access_key: Option<String>,
        secret_key: Option<Vec<u8>>,
    ) -> Result<Self, AuthError> {
        let access_key = access_key.ok_or_else(AuthError::missing_access_key)?;
        let secret_key = secret_key.ok_or_else(AuthError::missing_secret_key)?;
        Ok(Self {
            access_key,
            secret_key,
        })
    }

    /// Replace both keys at once. On error the current keys are kept.
    pub fn update_keys(
        &mut self,
        access_key: impl Into<String>,
        secret_key: impl Into<Vec<u8>>,
    ) -> Result<(), AuthError> {
        *self = Self::new(access_key, secret_key)?;
        tracing::debug!(access_key = %self.access_key, "Signing keys updated");
        Ok(())
    }

    pub fn access_key(&self) -> &str {
        &self.access_key
    }

    pub fn algorithm() -> &'static str {
        HMAC_ALGORITHM
    }

    /// Sign `data` with the secret key
    pub fn sign(&self, data: &[u8]) -> String {
        let mut mac =
            HmacSha256::new_from_slice(&self.secret_key).expect("HMAC can take key of any size");
        mac.update(data);
        let digest = mac.finalize().into_bytes();

        URL_SAFE.encode(digest).trim().to_string()
    }

    pub fn sign_string(&self, string_to_sign: &str) -> String {
        self.sign(string_to_sign.as_bytes())
    }
}

impl fmt::Debug for HmacKeys {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HmacKeys")
            .field("access_key", &self.access_key)
            .field("secret_key", &"<redacted>")
            .finish()
    }
}
