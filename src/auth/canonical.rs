//! Canonical request string
//!
//! ```text
//! {METHOD}\n
//! {path without query}\n
//! {lower-cased x-wix-* header}:{trimmed value}\n   (sorted by header name)
//! ```
//!
//! Only headers carrying the vendor prefix take part. Headers with an absent
//! value are skipped.

use std::collections::BTreeMap;
use std::fmt::Write;

use crate::constants::WIX_HEADER_PREFIX;

/// A header value that may be absent
pub trait HeaderValue {
    fn header_value(&self) -> Option<&str>;
}

impl HeaderValue for str {
    fn header_value(&self) -> Option<&str> {
        Some(self)
    }
}

impl HeaderValue for String {
    fn header_value(&self) -> Option<&str> {
        Some(self.as_str())
    }
}

impl<T: HeaderValue> HeaderValue for Option<T> {
    fn header_value(&self) -> Option<&str> {
        self.as_ref().and_then(|v| v.header_value())
    }
}

impl<T: HeaderValue + ?Sized> HeaderValue for &T {
    fn header_value(&self) -> Option<&str> {
        (**self).header_value()
    }
}

/// Lower-cased, trimmed vendor headers keyed in sorted order
///
/// When two names differ only in case, the one whose original spelling sorts
/// greatest wins, independent of iteration order.
pub fn signed_headers<I, K, V>(headers: I) -> BTreeMap<String, String>
where
    I: IntoIterator<Item = (K, V)>,
    K: AsRef<str>,
    V: HeaderValue,
{
    let mut candidates: Vec<(String, String, String)> = headers
        .into_iter()
        .filter_map(|(key, value)| {
            let key = key.as_ref();
            let lk = key.to_lowercase();
            if !lk.starts_with(WIX_HEADER_PREFIX) {
                return None;
            }
            let v = value.header_value()?.trim().to_string();
            Some((lk, key.to_string(), v))
        })
        .collect();

    // Stable sort: exact duplicates keep their input order
    candidates.sort_by(|a, b| (&a.0, &a.1).cmp(&(&b.0, &b.1)));

    let mut interesting = BTreeMap::new();
    for (lk, _, value) in candidates {
        interesting.insert(lk, value);
    }
    interesting
}

/// Build the canonical string, including its final newline
pub fn canonical_string<I, K, V>(method: &str, path: &str, headers: I) -> String
where
    I: IntoIterator<Item = (K, V)>,
    K: AsRef<str>,
    V: HeaderValue,
{
    // don't include query parameters
    let path = path.split('?').next().unwrap_or_default();

    let mut buf = format!("{}\n{}\n", method, path);
    for (key, value) in signed_headers(headers) {
        // Writing to a String cannot fail
        let _ = writeln!(buf, "{}:{}", key, value);
    }
    buf
}

/// The exact string that gets signed: the canonical string with trailing
/// whitespace removed
pub fn string_to_sign<I, K, V>(method: &str, path: &str, headers: I) -> String
where
    I: IntoIterator<Item = (K, V)>,
    K: AsRef<str>,
    V: HeaderValue,
{
    canonical_string(method, path, headers).trim_end().to_string()
}
