//! Name translation tables for adjustments and filters
//!
//! Lookups are permissive: a name missing from the table is written to the
//! URL unchanged. The `*_strict` variants reject unknown names instead.

use super::error::{NameKind, TransformError};

/// Adjustment name -> wire token
pub const ADJUSTMENT_TOKENS: &[(&str, &str)] = &[
    ("brightness", "br"),
    ("contrast", "con"),
    ("saturation", "sat"),
    ("hue", "hue"),
    ("vibrance", "vib"),
    ("auto", "auto"),
];

/// Filter name -> wire token
///
/// The last three entries carry watermark settings.
pub const FILTER_TOKENS: &[(&str, &str)] = &[
    ("oil", "oil"),
    ("negative", "neg"),
    ("pixelate", "pix"),
    ("pixelate_faces", "pixfs"),
    ("blur", "blur"),
    ("unsharp", "us"),
    ("sharpen", "shrp"),
    ("opacity", "op"),
    ("alignment", "a"),
    ("scale", "scl"),
];

fn lookup(table: &'static [(&'static str, &'static str)], name: &str) -> Option<&'static str> {
    table
        .iter()
        .find(|(known, _)| *known == name)
        .map(|(_, token)| *token)
}

/// Wire token for an adjustment, or the name itself when unmapped
pub fn adjustment_token(name: &str) -> &str {
    lookup(ADJUSTMENT_TOKENS, name).unwrap_or(name)
}

/// Wire token for a filter, or the name itself when unmapped
pub fn filter_token(name: &str) -> &str {
    lookup(FILTER_TOKENS, name).unwrap_or(name)
}

pub fn adjustment_token_strict(name: &str) -> Result<&'static str, TransformError> {
    lookup(ADJUSTMENT_TOKENS, name)
        .ok_or_else(|| TransformError::unknown_name(NameKind::Adjustment, name))
}

pub fn filter_token_strict(name: &str) -> Result<&'static str, TransformError> {
    lookup(FILTER_TOKENS, name).ok_or_else(|| TransformError::unknown_name(NameKind::Filter, name))
}
