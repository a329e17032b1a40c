//! Authorization header construction
//!
//! ```text
//! Authorization: {service} {access_key}:{base64url(HMAC-SHA256(secret, string_to_sign))}
//! ```

use super::canonical::{string_to_sign, HeaderValue};
use super::error::AuthError;
use super::keys::HmacKeys;
use crate::constants::DEFAULT_AUTH_SERVICE;

/// Signs outgoing requests for the media platform
#[derive(Debug, Clone)]
pub struct HmacAuthHandler {
    keys: HmacKeys,
}

impl HmacAuthHandler {
    pub fn new(
        access_key: impl Into<String>,
        secret_key: impl Into<Vec<u8>>,
    ) -> Result<Self, AuthError> {
        Ok(Self::from_keys(HmacKeys::new(access_key, secret_key)?))
    }

    pub fn from_keys(keys: HmacKeys) -> Self {
        Self { keys }
    }

    pub fn keys(&self) -> &HmacKeys {
        &self.keys
    }

    pub fn update_keys(
        &mut self,
        access_key: impl Into<String>,
        secret_key: impl Into<Vec<u8>>,
    ) -> Result<(), AuthError> {
        self.keys.update_keys(access_key, secret_key)
    }

    /// Build the Authorization header value for a request
    ///
    /// `auth_service` defaults to `WIX`.
    pub fn create_authorization_header<I, K, V>(
        &self,
        method: &str,
        path: &str,
        headers: I,
        auth_service: Option<&str>,
    ) -> String
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: HeaderValue,
    {
        let auth_service = auth_service.unwrap_or(DEFAULT_AUTH_SERVICE);
        let string_to_sign = string_to_sign(method, path, headers);
        let signature = self.keys.sign_string(&string_to_sign);

        tracing::debug!(
            access_key = self.keys.access_key(),
            method,
            signed_lines = string_to_sign.lines().count(),
            "Signed request"
        );

        format!(
            "{} {}:{}",
            auth_service,
            self.keys.access_key(),
            signature
        )
    }
}

/// One-shot signing with a throwaway handler
pub fn create_authorization_header<I, K, V>(
    access_key: &str,
    secret_key: &[u8],
    method: &str,
    path: &str,
    headers: I,
    auth_service: Option<&str>,
) -> Result<String, AuthError>
where
    I: IntoIterator<Item = (K, V)>,
    K: AsRef<str>,
    V: HeaderValue,
{
    let handler = HmacAuthHandler::new(access_key, secret_key)?;
    Ok(handler.create_authorization_header(method, path, headers, auth_service))
}
