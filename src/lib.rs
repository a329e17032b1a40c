// Wixmedia client library
//
// Two independent pieces:
// - `image`: fluent builder rendering image transform requests as REST paths
// - `auth`: HMAC-SHA256 signing of outgoing requests
//
// No network I/O happens here; callers send the URLs and headers themselves.

pub mod auth;
pub mod config;
pub mod constants;
pub mod error;
pub mod image;
pub mod logging;

pub use auth::{create_authorization_header, HmacAuthHandler, HmacKeys};
pub use config::MediaConfig;
pub use error::MediaError;
pub use image::{Alignment, TransformBuilder, Unsharp};
