//! Attribute name aliasing and value conversion.
//!
//! Attribute maps come from configuration and entity data using React-style
//! names (`className`, `htmlFor`) and JSON values. These helpers turn them into
//! plain HTML attribute name/value pairs.

use serde_json::Value;

use crate::css::{self, StyleMap};
use crate::tree::Element;

/// React-style attribute names and their HTML spelling.
const ATTRIBUTE_ALIASES: &[(&str, &str)] = &[
    ("acceptCharset", "accept-charset"),
    ("className", "class"),
    ("htmlFor", "for"),
    ("httpEquiv", "http-equiv"),
];

/// An attribute value supplied by configuration or an extension hook.
#[derive(Debug, Clone, PartialEq)]
pub enum AttributeValue {
    Text(String),
    /// A style object, encoded to CSS when applied.
    Style(StyleMap),
}

impl From<&str> for AttributeValue {
    fn from(value: &str) -> Self {
        AttributeValue::Text(value.to_string())
    }
}

impl From<String> for AttributeValue {
    fn from(value: String) -> Self {
        AttributeValue::Text(value)
    }
}

impl From<StyleMap> for AttributeValue {
    fn from(value: StyleMap) -> Self {
        AttributeValue::Style(value)
    }
}

impl AttributeValue {
    /// `None` for a style object with no declarations left after encoding.
    fn into_text(self) -> Option<String> {
        match self {
            AttributeValue::Text(text) => Some(text),
            AttributeValue::Style(styles) => {
                Some(css::encode(&styles)).filter(|css| !css.is_empty())
            }
        }
    }
}

/// `className` → `class`, `htmlFor` → `for`; other names pass through.
pub fn normalize_name(name: &str) -> &str {
    ATTRIBUTE_ALIASES
        .iter()
        .find(|(alias, _)| *alias == name)
        .map(|(_, html)| *html)
        .unwrap_or(name)
}

/// `data-` followed by one or more lowercase letters, digits or hyphens.
pub fn is_data_attribute(name: &str) -> bool {
    name.strip_prefix("data-").is_some_and(|rest| {
        !rest.is_empty()
            && rest
                .chars()
                .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-')
    })
}

/// String form of a JSON attribute value; `None` for `null`.
pub fn value_text(value: &Value) -> Option<String> {
    match value {
        Value::Null => None,
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        other => Some(other.to_string()),
    }
}

/// Convert a JSON attribute map. An object under `style` becomes a style
/// value; `null` entries are dropped.
pub fn from_json(map: &serde_json::Map<String, Value>) -> Vec<(String, AttributeValue)> {
    map.iter()
        .filter_map(|(name, value)| {
            let value = match value {
                Value::Object(styles) if normalize_name(name) == "style" => {
                    AttributeValue::Style(styles.clone())
                }
                other => AttributeValue::Text(value_text(other)?),
            };
            Some((name.clone(), value))
        })
        .collect()
}

/// Apply attributes to an element, normalizing names and encoding style
/// objects.
pub fn apply(element: &mut Element, attributes: Vec<(String, AttributeValue)>) {
    for (name, value) in attributes {
        if let Some(text) = value.into_text() {
            element.set_attribute(normalize_name(&name), text);
        }
    }
}
