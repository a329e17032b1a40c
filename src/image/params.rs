//! Adjustment and filter parameter sets
//!
//! A parameter is either a bare flag (`auto`, `oil`) or a name with a value
//! (`brightness=60`). Sets keep insertion order so the rendered URL segment
//! is the same on every call.

use std::fmt;

/// Value attached to an adjustment or filter name
#[derive(Debug, Clone, PartialEq)]
pub enum ParamValue {
    /// Name present with no value, rendered as the bare token
    Present,
    Int(i64),
    Float(f64),
    Text(String),
}

impl ParamValue {
    pub fn is_present_flag(&self) -> bool {
        matches!(self, ParamValue::Present)
    }
}

impl fmt::Display for ParamValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParamValue::Present => Ok(()),
            ParamValue::Int(v) => write!(f, "{}", v),
            ParamValue::Float(v) => write!(f, "{}", v),
            ParamValue::Text(v) => f.write_str(v),
        }
    }
}

macro_rules! int_param_value {
    ($($t:ty),*) => {
        $(
            impl From<$t> for ParamValue {
                fn from(v: $t) -> Self {
                    ParamValue::Int(i64::from(v))
                }
            }
        )*
    };
}

int_param_value!(i8, i16, i32, i64, u8, u16, u32);

impl From<f64> for ParamValue {
    fn from(v: f64) -> Self {
        ParamValue::Float(v)
    }
}

impl From<&str> for ParamValue {
    fn from(v: &str) -> Self {
        ParamValue::Text(v.to_string())
    }
}

impl From<String> for ParamValue {
    fn from(v: String) -> Self {
        ParamValue::Text(v)
    }
}

/// One entry passed to `adjust` / `filter`
#[derive(Debug, Clone, PartialEq)]
pub struct Param {
    pub name: String,
    pub value: ParamValue,
}

impl Param {
    pub fn flag(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: ParamValue::Present,
        }
    }

    pub fn value(name: impl Into<String>, value: impl Into<ParamValue>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }
}

impl From<&str> for Param {
    fn from(name: &str) -> Self {
        Param::flag(name)
    }
}

impl From<String> for Param {
    fn from(name: String) -> Self {
        Param::flag(name)
    }
}

impl<V: Into<ParamValue>> From<(&str, V)> for Param {
    fn from((name, value): (&str, V)) -> Self {
        Param::value(name, value)
    }
}

/// Insertion-ordered name -> value mapping
///
/// Re-inserting an existing name replaces its value in place.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ParamSet {
    entries: Vec<(String, ParamValue)>,
}

impl ParamSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, name: impl Into<String>, value: ParamValue) {
        let name = name.into();
        match self.entries.iter_mut().find(|(k, _)| *k == name) {
            Some(entry) => entry.1 = value,
            None => self.entries.push((name, value)),
        }
    }

    pub fn get(&self, name: &str) -> Option<&ParamValue> {
        self.entries.iter().find(|(k, _)| k == name).map(|(_, v)| v)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &ParamValue)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(k, _)| k.as_str())
    }

    /// Render as a comma-joined `token` / `token_value` list
    pub fn to_segment(&self, token: fn(&str) -> &str) -> String {
        self.entries
            .iter()
            .map(|(name, value)| {
                let tok = token(name);
                if value.is_present_flag() {
                    tok.to_string()
                } else {
                    format!("{}_{}", tok, value)
                }
            })
            .collect::<Vec<_>>()
            .join(",")
    }
}

impl<P: Into<Param>> Extend<P> for ParamSet {
    fn extend<I: IntoIterator<Item = P>>(&mut self, iter: I) {
        for param in iter {
            let Param { name, value } = param.into();
            self.insert(name, value);
        }
    }
}

impl<P: Into<Param>> FromIterator<P> for ParamSet {
    fn from_iter<I: IntoIterator<Item = P>>(iter: I) -> Self {
        let mut set = ParamSet::new();
        set.extend(iter);
        set
    }
}
