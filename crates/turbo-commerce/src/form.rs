//! Submitted request fields.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Fields submitted with the current request (form body merged with query string).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FormData(HashMap<String, String>);

impl FormData {
    /// Create an empty submission.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insert.
    pub fn with(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.insert(name, value);
        self
    }

    /// Set a field, replacing any previous value.
    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.0.insert(name.into(), value.into());
    }

    /// Raw field value.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.0.get(name).map(String::as_str)
    }

    /// Field value, `None` when absent or blank.
    pub fn non_empty(&self, name: &str) -> Option<&str> {
        self.get(name).map(str::trim).filter(|v| !v.is_empty())
    }

    /// Field parsed as an absolute integer.
    ///
    /// Negative values lose their sign and trailing text is ignored. Absent,
    /// blank or non-numeric fields yield `None`.
    pub fn absint(&self, name: &str) -> Option<u32> {
        self.non_empty(name).and_then(parse_absint)
    }

    /// All fields, in no particular order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// Parse the leading integer of `raw` and drop its sign, saturating at
/// `u32::MAX`.
///
/// Trailing text is ignored, so `3.5` reads as 3 and `0abc` as 0. Text
/// without leading digits yields `None`.
pub fn parse_absint(raw: &str) -> Option<u32> {
    let raw = raw.trim_start();
    let unsigned = raw.strip_prefix(['-', '+']).unwrap_or(raw);
    let end = unsigned
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(unsigned.len());
    let digits = &unsigned[..end];

    if digits.is_empty() {
        return None;
    }

    Some(digits.parse::<u32>().unwrap_or(u32::MAX))
}
