//! Style property maps.
//!
//! A [`StyleMap`] is an insertion-ordered map from camelCase property names to
//! raw values. Keys are converted to kebab-case when a rule is rendered;
//! values are emitted verbatim. There is no unit inference: `16` renders as
//! `16`, not `16px`.
//!
//! ```rust
//! use gcss::StyleMap;
//!
//! let style = StyleMap::new()
//!     .with("display", "flex")
//!     .with("flexDirection", "column")
//!     .with("flex", 1);
//!
//! assert_eq!(
//!     style.declarations().collect::<Vec<_>>(),
//!     vec!["display: flex;", "flex-direction: column;", "flex: 1;"]
//! );
//! ```

use std::fmt;

use indexmap::IndexMap;
use serde::de::{self, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// A single property value: either text or a number.
///
/// Numbers keep the text of the value they were built from, so `0.1f32`
/// renders as `0.1` and `u64::MAX` keeps every digit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StyleValue {
    Number(String),
    Text(String),
}

impl fmt::Display for StyleValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StyleValue::Number(n) | StyleValue::Text(n) => f.write_str(n),
        }
    }
}

impl From<&str> for StyleValue {
    fn from(value: &str) -> Self {
        StyleValue::Text(value.to_string())
    }
}

impl From<String> for StyleValue {
    fn from(value: String) -> Self {
        StyleValue::Text(value)
    }
}

impl From<&String> for StyleValue {
    fn from(value: &String) -> Self {
        StyleValue::Text(value.clone())
    }
}

macro_rules! impl_numeric_value {
    ($($ty:ty),*) => {
        $(
            impl From<$ty> for StyleValue {
                fn from(value: $ty) -> Self {
                    StyleValue::Number(value.to_string())
                }
            }
        )*
    };
}

impl_numeric_value!(i8, i16, i32, i64, isize, u8, u16, u32, u64, usize, f32, f64);

impl Serialize for StyleValue {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            StyleValue::Text(text) => serializer.serialize_str(text),
            StyleValue::Number(n) => {
                if let Ok(int) = n.parse::<i64>() {
                    serializer.serialize_i64(int)
                } else if let Ok(uint) = n.parse::<u64>() {
                    serializer.serialize_u64(uint)
                } else if let Ok(float) = n.parse::<f64>() {
                    serializer.serialize_f64(float)
                } else {
                    serializer.serialize_str(n)
                }
            }
        }
    }
}

impl<'de> Deserialize<'de> for StyleValue {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_any(StyleValueVisitor)
    }
}

struct StyleValueVisitor;

impl Visitor<'_> for StyleValueVisitor {
    type Value = StyleValue;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a string or a number")
    }

    fn visit_i64<E: de::Error>(self, value: i64) -> Result<StyleValue, E> {
        Ok(value.into())
    }

    fn visit_u64<E: de::Error>(self, value: u64) -> Result<StyleValue, E> {
        Ok(value.into())
    }

    fn visit_f64<E: de::Error>(self, value: f64) -> Result<StyleValue, E> {
        Ok(value.into())
    }

    fn visit_str<E: de::Error>(self, value: &str) -> Result<StyleValue, E> {
        Ok(value.into())
    }

    fn visit_string<E: de::Error>(self, value: String) -> Result<StyleValue, E> {
        Ok(value.into())
    }
}

/// Insertion-ordered property map of a single rule.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StyleMap {
    properties: IndexMap<String, StyleValue>,
}

impl StyleMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder form of [`set`](Self::set).
    pub fn with(mut self, property: impl Into<String>, value: impl Into<StyleValue>) -> Self {
        self.set(property, value);
        self
    }

    /// Builder form of [`set_opt`](Self::set_opt).
    pub fn with_opt<V: Into<StyleValue>>(
        mut self,
        property: impl Into<String>,
        value: Option<V>,
    ) -> Self {
        self.set_opt(property, value);
        self
    }

    /// Sets a property, replacing any previous value while keeping its position.
    pub fn set(&mut self, property: impl Into<String>, value: impl Into<StyleValue>) {
        self.properties.insert(property.into(), value.into());
    }

    /// Sets a property only when a value is present.
    pub fn set_opt<V: Into<StyleValue>>(&mut self, property: impl Into<String>, value: Option<V>) {
        if let Some(value) = value {
            self.set(property, value);
        }
    }

    /// Overlays `other` on top of this map, the way an object spread would.
    pub fn extend(&mut self, other: &StyleMap) {
        for (property, value) in &other.properties {
            self.properties.insert(property.clone(), value.clone());
        }
    }

    /// Builder form of [`extend`](Self::extend) that accepts an absent map.
    pub fn merged(mut self, other: Option<&StyleMap>) -> Self {
        if let Some(other) = other {
            self.extend(other);
        }
        self
    }

    pub fn get(&self, property: &str) -> Option<&StyleValue> {
        self.properties.get(property)
    }

    pub fn len(&self) -> usize {
        self.properties.len()
    }

    pub fn is_empty(&self) -> bool {
        self.properties.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &StyleValue)> {
        self.properties.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Renders each property as a `property: value;` declaration in insertion order.
    pub fn declarations(&self) -> impl Iterator<Item = String> + '_ {
        self.properties
            .iter()
            .map(|(property, value)| format!("{}: {};", to_kebab_case(property), value))
    }
}

impl From<Option<StyleMap>> for StyleMap {
    fn from(value: Option<StyleMap>) -> Self {
        value.unwrap_or_default()
    }
}

impl From<Option<&StyleMap>> for StyleMap {
    fn from(value: Option<&StyleMap>) -> Self {
        value.cloned().unwrap_or_default()
    }
}

impl From<&StyleMap> for StyleMap {
    fn from(value: &StyleMap) -> Self {
        value.clone()
    }
}

impl<K, V, const N: usize> From<[(K, V); N]> for StyleMap
where
    K: Into<String>,
    V: Into<StyleValue>,
{
    fn from(entries: [(K, V); N]) -> Self {
        entries
            .into_iter()
            .fold(StyleMap::new(), |map, (k, v)| map.with(k, v))
    }
}

impl<K, V> FromIterator<(K, V)> for StyleMap
where
    K: Into<String>,
    V: Into<StyleValue>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        iter.into_iter().fold(StyleMap::new(), |map, (k, v)| map.with(k, v))
    }
}

/// Converts a camelCase property name to its kebab-case CSS form.
///
/// Every uppercase ASCII letter becomes `-` followed by its lowercase form,
/// so `WebkitAppearance` becomes `-webkit-appearance`. Names that are
/// already kebab-case pass through unchanged.
pub fn to_kebab_case(property: &str) -> String {
    let mut out = String::with_capacity(property.len() + 4);
    for c in property.chars() {
        if c.is_ascii_uppercase() {
            out.push('-');
            out.push(c.to_ascii_lowercase());
        } else {
            out.push(c);
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kebab_case_conversion() {
        assert_eq!(to_kebab_case("backgroundColor"), "background-color");
        assert_eq!(to_kebab_case("borderTopLeftRadius"), "border-top-left-radius");
        assert_eq!(to_kebab_case("WebkitAppearance"), "-webkit-appearance");
        assert_eq!(to_kebab_case("color"), "color");
        assert_eq!(to_kebab_case("align-items"), "align-items");
    }

    #[test]
    fn test_numbers_render_without_units() {
        let style = StyleMap::from([("zIndex", 10)]).with("opacity", 0.5);
        let decls: Vec<_> = style.declarations().collect();
        assert_eq!(decls, vec!["z-index: 10;", "opacity: 0.5;"]);
    }

    #[test]
    fn test_numbers_keep_their_source_text() {
        let style = StyleMap::new()
            .with("opacity", 0.1f32)
            .with("big", u64::MAX)
            .with("id", 9_007_199_254_740_993u64)
            .with("offset", -3i64)
            .with("lineHeight", 1.0);
        let decls: Vec<_> = style.declarations().collect();
        assert_eq!(
            decls,
            vec![
                "opacity: 0.1;",
                "big: 18446744073709551615;",
                "id: 9007199254740993;",
                "offset: -3;",
                "line-height: 1;",
            ]
        );
    }

    #[test]
    fn test_json_numbers_keep_their_digits() {
        let style: StyleMap =
            serde_json::from_str(r#"{"zIndex": 9007199254740993, "big": 18446744073709551615}"#)
                .unwrap();
        assert_eq!(style.get("zIndex"), Some(&StyleValue::Number("9007199254740993".into())));
        assert_eq!(style.get("big").map(ToString::to_string).as_deref(), Some("18446744073709551615"));
        assert_eq!(serde_json::to_string(&style).unwrap(), r#"{"zIndex":9007199254740993,"big":18446744073709551615}"#);
    }

    #[test]
    fn test_set_keeps_original_position() {
        let mut style = StyleMap::new().with("display", "flex").with("gap", "4px");
        style.set("display", "grid");
        let decls: Vec<_> = style.declarations().collect();
        assert_eq!(decls, vec!["display: grid;", "gap: 4px;"]);
    }

    #[test]
    fn test_absent_values_are_skipped() {
        let style = StyleMap::new()
            .with_opt("gap", None::<&str>)
            .with_opt("padding", Some("2px"));
        assert_eq!(style.len(), 1);
        assert!(style.get("gap").is_none());
    }

    #[test]
    fn test_extend_overrides_like_spread() {
        let base = StyleMap::new().with("display", "flex").with("color", "red");
        let user = StyleMap::new().with("color", "blue").with("margin", 0);
        let merged = base.merged(Some(&user));
        let decls: Vec<_> = merged.declarations().collect();
        assert_eq!(decls, vec!["display: flex;", "color: blue;", "margin: 0;"]);
    }

    #[test]
    fn test_deserialize_mixed_values() {
        let style: StyleMap =
            serde_json::from_str(r#"{"fontSize": "14px", "flex": 1, "lineHeight": 1.5}"#).unwrap();
        let decls: Vec<_> = style.declarations().collect();
        assert_eq!(decls, vec!["font-size: 14px;", "flex: 1;", "line-height: 1.5;"]);
    }
}
