//! REST path rendering and `<img>` tag output
//!
//! Path grammar:
//! ```text
//! {dir}/{cmd}/{k_v,...}/adjust/{tok|tok_v,...}/filter/{tok|tok_v,...}/{filename}
//! ```
//! Each optional pair is emitted only when it has content. Nothing is
//! percent-encoded and no query string is ever added.

use super::codec::{adjustment_token, filter_token};
use super::command::TransformCommand;
use super::params::ParamSet;
use crate::constants::{ADJUST_SEGMENT, FILTER_SEGMENT};

/// Split a file URI at its last `/` into (directory, filename)
///
/// A URI without any `/` has no directory.
pub fn split_file_uri(file_uri: &str) -> (Option<&str>, &str) {
    match file_uri.rsplit_once('/') {
        Some((dir, name)) => (Some(dir), name),
        None => (None, file_uri),
    }
}

/// Render the transform path for `file_uri`
pub fn render(
    file_uri: &str,
    command: &TransformCommand,
    adjustments: &ParamSet,
    filters: &ParamSet,
) -> String {
    let (dir, filename) = split_file_uri(file_uri);
    let mut segments: Vec<String> = Vec::with_capacity(8);

    if let Some(dir) = dir {
        segments.push(dir.to_string());
    }

    if command.is_set() {
        segments.push(command.name().to_string());
        segments.push(command.params_segment());
    }

    if !adjustments.is_empty() {
        segments.push(ADJUST_SEGMENT.to_string());
        segments.push(adjustments.to_segment(adjustment_token));
    }

    if !filters.is_empty() {
        segments.push(FILTER_SEGMENT.to_string());
        segments.push(filters.to_segment(filter_token));
    }

    segments.push(filename.to_string());
    segments.join("/")
}

/// Wrap `url` in an `<img>` tag
///
/// Attribute values are inserted verbatim. No HTML escaping is done here;
/// callers passing untrusted values must escape them first.
pub fn img_tag<K, V>(url: &str, attrs: &[(K, V)]) -> String
where
    K: AsRef<str>,
    V: AsRef<str>,
{
    let attrs: String = attrs
        .iter()
        .map(|(name, value)| format!(" {}=\"{}\"", name.as_ref(), value.as_ref()))
        .collect();
    format!("<img src=\"{}\"{}>", url, attrs)
}
