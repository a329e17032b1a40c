//! Image transformation URLs
//!
//! Builds REST paths that describe server-side work on a stored image.
//! No pixels are touched locally.
//!
//! # URL Format
//!
//! ```text
//! {dir}/{cmd}/{k_v,k_v,...}/adjust/{tok|tok_v,...}/filter/{tok|tok_v,...}/{filename}
//! ```
//!
//! Commands: `srz` (smart resize), `srb` (resize box), `canvas`, `fill`,
//! `crop`. At most one command per builder until `reset`.

pub mod alignment;
pub mod builder;
pub mod codec;
pub mod command;
pub mod error;
pub mod params;
pub mod url;

pub use alignment::Alignment;
pub use builder::TransformBuilder;
pub use codec::{adjustment_token, filter_token};
pub use command::{Sharpen, TransformCommand, Unsharp};
pub use error::{NameKind, TransformError};
pub use params::{Param, ParamSet, ParamValue};
pub use url::{img_tag, render, split_file_uri};
