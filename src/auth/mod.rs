//! HMAC request signing for the media platform
//!
//! 1. Build the canonical string from method, path and `x-wix-*` headers
//! 2. Strip trailing whitespace and sign it with HMAC-SHA256
//! 3. Emit `{service} {access_key}:{signature}`

pub mod canonical;
pub mod error;
pub mod handler;
pub mod keys;

pub use canonical::{canonical_string, signed_headers, string_to_sign, HeaderValue};
pub use error::AuthError;
pub use handler::{create_authorization_header, HmacAuthHandler};
pub use keys::HmacKeys;
