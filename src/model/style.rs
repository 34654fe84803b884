//! Inline style maps and the codec between `style="..."` strings and camelCase keys.

use regex::Regex;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::sync::LazyLock;

static HYPHEN_LOWER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"-([a-z])").expect("HYPHEN_LOWER is a valid static regex"));

static UPPER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"([A-Z])").expect("UPPER is a valid static regex"));

/// Mapping from camelCase style property names to values.
///
/// Keys are kept sorted so serialization is deterministic.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StyleMap(BTreeMap<String, String>);

impl StyleMap {
    /// Create an empty style map.
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse an inline CSS declaration list (`"color: red; text-align: left"`).
    pub fn parse(s: &str) -> Self {
        parse_style_string(s)
    }

    /// Set a property, replacing any existing value.
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.0.insert(key.into(), value.into());
    }

    /// Builder-style variant of [`StyleMap::set`].
    pub fn with(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.set(key, value);
        self
    }

    /// Get a property value.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.0.get(key).map(String::as_str)
    }

    /// Remove a property, returning its old value.
    pub fn remove(&mut self, key: &str) -> Option<String> {
        self.0.remove(key)
    }

    /// Layer `overrides` on top of this map; overriding values win.
    pub fn merged_with(mut self, overrides: &StyleMap) -> Self {
        for (key, value) in overrides.iter() {
            self.set(key, value);
        }
        self
    }

    /// Iterate over `(key, value)` pairs in key order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Serialize back to an inline CSS declaration list.
    pub fn to_css(&self) -> String {
        serialize_style_map(self)
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for StyleMap {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(
            iter.into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }
}

/// Convert a hyphenated CSS property name to camelCase (`border-bottom` -> `borderBottom`).
pub fn to_camel_case(name: &str) -> String {
    HYPHEN_LOWER
        .replace_all(name, |caps: &regex::Captures| caps[1].to_uppercase())
        .into_owned()
}

/// Convert a camelCase property name to hyphenated CSS (`borderBottom` -> `border-bottom`).
pub fn to_kebab_case(name: &str) -> String {
    UPPER
        .replace_all(name, |caps: &regex::Captures| {
            format!("-{}", caps[1].to_lowercase())
        })
        .into_owned()
}

/// Parse an inline style attribute into a [`StyleMap`].
///
/// Each `;`-separated clause is split on its first `:`. Clauses missing a
/// key or a value are skipped. Property names are case-insensitive.
pub fn parse_style_string(s: &str) -> StyleMap {
    let mut map = StyleMap::new();
    for clause in s.split(';') {
        let Some((key, value)) = clause.split_once(':') else {
            continue;
        };
        let (key, value) = (key.trim(), value.trim());
        if key.is_empty() || value.is_empty() {
            continue;
        }
        map.set(to_camel_case(&key.to_lowercase()), value);
    }
    map
}

/// Serialize a [`StyleMap`] as `key: value;` pairs separated by single spaces.
pub fn serialize_style_map(map: &StyleMap) -> String {
    map.iter()
        .map(|(key, value)| format!("{}: {};", to_kebab_case(key), value))
        .collect::<Vec<_>>()
        .join(" ")
}
