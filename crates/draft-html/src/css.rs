//! CSS declaration encoder.
//!
//! Turns a style object such as `{fontSize: "12", color: "red"}` into the
//! value of an HTML `style` attribute: `font-size: 12px; color: red`.

use serde_json::Value;

use crate::attributes::value_text;

/// CSS property name → value, in caller order.
pub type StyleMap = serde_json::Map<String, Value>;

/// Numeric properties that take no unit.
const UNITLESS_PROPERTIES: &[&str] = &[
    "animationIterationCount",
    "borderImageOutset",
    "borderImageSlice",
    "borderImageWidth",
    "boxFlex",
    "boxFlexGroup",
    "boxOrdinalGroup",
    "columnCount",
    "flex",
    "flexGrow",
    "flexPositive",
    "flexShrink",
    "flexNegative",
    "flexOrder",
    "gridRow",
    "gridRowEnd",
    "gridRowSpan",
    "gridRowStart",
    "gridColumn",
    "gridColumnEnd",
    "gridColumnSpan",
    "gridColumnStart",
    "fontWeight",
    "lineClamp",
    "lineHeight",
    "opacity",
    "order",
    "orphans",
    "tabSize",
    "widows",
    "zIndex",
    "zoom",
    // SVG
    "fillOpacity",
    "floodOpacity",
    "stopOpacity",
    "strokeDasharray",
    "strokeDashoffset",
    "strokeMiterlimit",
    "strokeOpacity",
    "strokeWidth",
];

const VENDOR_PREFIXES: &[&str] = &["moz-", "ms-", "o-", "webkit-"];

/// Encode a style map as a `; `-joined declaration list.
/// `null` values are skipped.
pub fn encode(styles: &StyleMap) -> String {
    styles
        .iter()
        .filter_map(|(name, value)| {
            let value = value_text(value)?;
            Some(format!(
                "{}: {}",
                property_name(name),
                property_value(name, &value)
            ))
        })
        .collect::<Vec<_>>()
        .join("; ")
}

/// `fontSize` → `font-size`, `WebkitTransition` → `-webkit-transition`.
pub fn property_name(name: &str) -> String {
    let mut kebab = String::with_capacity(name.len() + 4);
    for ch in name.chars() {
        if ch.is_ascii_uppercase() {
            kebab.push('-');
            kebab.push(ch.to_ascii_lowercase());
        } else {
            kebab.push(ch);
        }
    }

    if VENDOR_PREFIXES.iter().any(|p| kebab.starts_with(p)) {
        kebab.insert(0, '-');
    }
    kebab
}

/// Append `px` to plain numbers, except `0` and unitless properties.
pub fn property_value(name: &str, value: &str) -> String {
    if !is_numeric(value) || value == "0" || UNITLESS_PROPERTIES.contains(&name) {
        value.to_string()
    } else {
        format!("{value}px")
    }
}

/// Decimal or exponent notation, optionally signed, surrounding whitespace
/// allowed.
fn is_numeric(value: &str) -> bool {
    let trimmed = value.trim();
    !trimmed.is_empty()
        && trimmed
            .chars()
            .all(|c| c.is_ascii_digit() || matches!(c, '+' | '-' | '.' | 'e' | 'E'))
        && trimmed.chars().any(|c| c.is_ascii_digit())
        && trimmed.parse::<f64>().is_ok()
}
