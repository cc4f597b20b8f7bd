//! Style snapshots
//!
//! A `StyleMap` is the payload a transition applies to an element: visual
//! property names mapped to target values, kept in insertion order so the
//! descriptor handed to the host engine is deterministic.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A single style property value
///
/// Values are either unitless numbers (`opacity: 0.5`, `height: 0`) or
/// verbatim strings the host engine interprets (`"100%"`,
/// `"translateX(10%)"`). Nothing is parsed or validated here.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum StyleValue {
    /// Unitless numeric value
    Number(f64),
    /// Textual value carried verbatim to the host engine
    Text(String),
}

impl StyleValue {
    /// Get the numeric value, if this is a number
    pub fn as_number(&self) -> Option<f64> {
        match self {
            Self::Number(n) => Some(*n),
            Self::Text(_) => None,
        }
    }

    /// Get the textual value, if this is text
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Number(_) => None,
            Self::Text(s) => Some(s),
        }
    }
}

impl From<f64> for StyleValue {
    fn from(n: f64) -> Self {
        Self::Number(n)
    }
}

impl From<f32> for StyleValue {
    fn from(n: f32) -> Self {
        Self::Number(n as f64)
    }
}

impl From<i32> for StyleValue {
    fn from(n: i32) -> Self {
        Self::Number(n as f64)
    }
}

impl From<&str> for StyleValue {
    fn from(s: &str) -> Self {
        Self::Text(s.to_string())
    }
}

impl From<String> for StyleValue {
    fn from(s: String) -> Self {
        Self::Text(s)
    }
}

impl fmt::Display for StyleValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(n) => write!(f, "{}", n),
            Self::Text(s) => write!(f, "{}", s),
        }
    }
}

/// An ordered property → value mapping describing one visual state
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StyleMap {
    properties: IndexMap<String, StyleValue>,
}

impl StyleMap {
    /// Create an empty style map
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a property (builder pattern); later sets overwrite earlier ones
    /// without changing the property's position
    pub fn prop(mut self, name: impl Into<String>, value: impl Into<StyleValue>) -> Self {
        self.properties.insert(name.into(), value.into());
        self
    }

    /// Look up a property value by name
    pub fn get(&self, name: &str) -> Option<&StyleValue> {
        self.properties.get(name)
    }

    /// Number of properties in the map
    pub fn len(&self) -> usize {
        self.properties.len()
    }

    /// Whether the map has no properties
    pub fn is_empty(&self) -> bool {
        self.properties.is_empty()
    }

    /// Iterate properties in insertion order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &StyleValue)> {
        self.properties.iter().map(|(k, v)| (k.as_str(), v))
    }
}

/// Shorthand for [`StyleMap::new`], so snapshots read as
/// `style().prop("opacity", 0)`
pub fn style() -> StyleMap {
    StyleMap::new()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_style_value_conversions() {
        assert_eq!(StyleValue::from(0), StyleValue::Number(0.0));
        assert_eq!(StyleValue::from(0.5), StyleValue::Number(0.5));
        assert_eq!(StyleValue::from("100%"), StyleValue::Text("100%".into()));
    }

    #[test]
    fn test_style_map_preserves_insertion_order() {
        let map = style().prop("opacity", 0).prop("height", "100%");
        let keys: Vec<&str> = map.iter().map(|(k, _)| k).collect();
        assert_eq!(keys, vec!["opacity", "height"]);
    }

    #[test]
    fn test_style_map_overwrite_keeps_position() {
        let map = style()
            .prop("opacity", 0)
            .prop("height", 0)
            .prop("opacity", 1);
        let keys: Vec<&str> = map.iter().map(|(k, _)| k).collect();
        assert_eq!(keys, vec!["opacity", "height"]);
        assert_eq!(map.get("opacity"), Some(&StyleValue::Number(1.0)));
    }
}
