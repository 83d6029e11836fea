//! Converter configuration.
//!
//! Holds the inline style table, the style precedence order and the block tag
//! tables. A [`Config`] is assembled up front and only read while converting.

use std::collections::HashMap;

use draft_model::BlockType;
use serde::{Deserialize, Deserializer};
use serde_json::Value;

use crate::css::StyleMap;
use crate::ConfigError;

pub const BOLD: &str = "BOLD";
pub const ITALIC: &str = "ITALIC";
pub const UNDERLINE: &str = "UNDERLINE";
pub const STRIKETHROUGH: &str = "STRIKETHROUGH";
pub const CODE: &str = "CODE";

/// Tag used for inline styles without an `element`.
pub const DEFAULT_INLINE_TAG: &str = "span";

/// How an inline style is rendered.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct StyleDescriptor {
    /// Element tag, `span` when absent.
    pub element: Option<String>,
    pub attributes: serde_json::Map<String, Value>,
    /// CSS properties encoded into the `style` attribute.
    pub style: StyleMap,
}

impl StyleDescriptor {
    pub fn element(tag: impl Into<String>) -> Self {
        Self {
            element: Some(tag.into()),
            ..Self::default()
        }
    }

    pub fn with_attribute(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.attributes.insert(name.into(), value.into());
        self
    }

    pub fn with_style(mut self, property: impl Into<String>, value: impl Into<Value>) -> Self {
        self.style.insert(property.into(), value.into());
        self
    }

    pub fn tag(&self) -> &str {
        self.element.as_deref().unwrap_or(DEFAULT_INLINE_TAG)
    }
}

/// Conversion settings.
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    styles: HashMap<String, StyleDescriptor>,
    /// Innermost first.
    style_order: Vec<String>,
    default_block_tag: Option<String>,
    block_tags: HashMap<String, Vec<String>>,
}

impl Default for Config {
    fn default() -> Self {
        let styles = [
            (BOLD, "strong"),
            (CODE, "code"),
            (ITALIC, "em"),
            (STRIKETHROUGH, "del"),
            (UNDERLINE, "u"),
        ]
        .into_iter()
        .map(|(name, tag)| (name.to_string(), StyleDescriptor::element(tag)))
        .collect();

        Self {
            styles,
            style_order: [BOLD, ITALIC, UNDERLINE, STRIKETHROUGH, CODE]
                .into_iter()
                .map(String::from)
                .collect(),
            default_block_tag: Some("p".to_string()),
            block_tags: HashMap::new(),
        }
    }
}

impl Config {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the descriptor for one inline style, replacing any previous one.
    /// Styles not yet in the precedence order are appended as outermost.
    pub fn with_style(mut self, name: impl Into<String>, descriptor: StyleDescriptor) -> Self {
        let name = name.into();
        if !self.style_order.contains(&name) {
            self.style_order.push(name.clone());
        }
        self.styles.insert(name, descriptor);
        self
    }

    /// [`Config::with_style`] for each pair, in iteration order.
    pub fn with_styles<I, S>(self, styles: I) -> Self
    where
        I: IntoIterator<Item = (S, StyleDescriptor)>,
        S: Into<String>,
    {
        styles
            .into_iter()
            .fold(self, |config, (name, descriptor)| config.with_style(name, descriptor))
    }

    /// Replace the style precedence order (innermost first).
    pub fn with_style_order<I, S>(mut self, order: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.style_order = order.into_iter().map(Into::into).collect();
        self
    }

    /// Tag for blocks without a dedicated mapping; `None` renders their
    /// content without a wrapping element.
    pub fn with_default_block_tag(mut self, tag: Option<&str>) -> Self {
        self.default_block_tag = tag.map(String::from);
        self
    }

    /// Override the tag chain (outermost first) for a block type.
    pub fn with_block_tags<I, S>(mut self, block_type: &BlockType, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.block_tags.insert(
            block_type.as_str().to_string(),
            tags.into_iter().map(Into::into).collect(),
        );
        self
    }

    /// Read a configuration file:
    ///
    /// ```text
    /// {"inlineStyles": {"RED": {"element": "span", "style": {"color": "red"}}},
    ///  "styleOrder": ["BOLD", "ITALIC"],
    ///  "defaultBlockTag": "div",
    ///  "blockTags": {"pullquote": ["aside"]}}
    /// ```
    pub fn from_json(source: &str) -> Result<Self, ConfigError> {
        let raw: RawConfig = serde_json::from_str(source).map_err(config_error)?;

        let mut config = Config::default();
        if let Some(order) = raw.style_order {
            config = config.with_style_order(order);
        }
        let styles = raw
            .inline_styles
            .into_iter()
            .map(|(name, value)| {
                let descriptor: StyleDescriptor =
                    serde_json::from_value(value).map_err(|e| ConfigError {
                        message: format!("inline style `{name}`: {e}"),
                        line: e.line(),
                        column: e.column(),
                    })?;
                Ok((name, descriptor))
            })
            .collect::<Result<Vec<_>, ConfigError>>()?;
        config = config.with_styles(styles);
        if let Some(tag) = raw.default_block_tag {
            config = config.with_default_block_tag(tag.as_deref());
        }
        for (block_type, tags) in raw.block_tags {
            config = config.with_block_tags(&BlockType::from(block_type.as_str()), tags);
        }
        Ok(config)
    }

    pub fn style(&self, name: &str) -> Option<&StyleDescriptor> {
        self.styles.get(name)
    }

    pub fn style_order(&self) -> &[String] {
        &self.style_order
    }

    pub fn default_block_tag(&self) -> Option<&str> {
        self.default_block_tag.as_deref()
    }

    /// Tag chain for a block, outermost first. Empty when the block type has
    /// no mapping and the default tag is disabled.
    pub fn block_tags(&self, block_type: &BlockType) -> Vec<&str> {
        if let Some(tags) = self.block_tags.get(block_type.as_str()) {
            return tags.iter().map(String::as_str).collect();
        }
        if let Some(tags) = builtin_block_tags(block_type) {
            return tags.to_vec();
        }
        if let BlockType::Custom(name) = block_type {
            log::debug!("no tags for block type `{name}`, using default");
        }
        self.default_block_tag.as_deref().into_iter().collect()
    }
}

/// List wrapper tag for a block type.
pub fn wrapper_tag(block_type: &BlockType) -> Option<&'static str> {
    match block_type {
        BlockType::UnorderedListItem => Some("ul"),
        BlockType::OrderedListItem => Some("ol"),
        _ => None,
    }
}

fn builtin_block_tags(block_type: &BlockType) -> Option<&'static [&'static str]> {
    match block_type {
        BlockType::HeaderOne => Some(&["h1"]),
        BlockType::HeaderTwo => Some(&["h2"]),
        BlockType::HeaderThree => Some(&["h3"]),
        BlockType::HeaderFour => Some(&["h4"]),
        BlockType::HeaderFive => Some(&["h5"]),
        BlockType::HeaderSix => Some(&["h6"]),
        BlockType::UnorderedListItem | BlockType::OrderedListItem => Some(&["li"]),
        BlockType::Blockquote => Some(&["blockquote"]),
        BlockType::CodeBlock => Some(&["pre", "code"]),
        BlockType::Atomic => Some(&["figure"]),
        BlockType::Unstyled | BlockType::Pullquote | BlockType::Custom(_) => None,
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
struct RawConfig {
    inline_styles: serde_json::Map<String, Value>,
    style_order: Option<Vec<String>>,
    /// Absent keeps the default; `null` disables it.
    #[serde(deserialize_with = "present_or_null")]
    default_block_tag: Option<Option<String>>,
    block_tags: HashMap<String, Vec<String>>,
}

fn present_or_null<'de, D>(deserializer: D) -> Result<Option<Option<String>>, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<String>::deserialize(deserializer).map(Some)
}

fn config_error(e: serde_json::Error) -> ConfigError {
    ConfigError {
        message: e.to_string(),
        line: e.line(),
        column: e.column(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_default_styles() {
        let config = Config::default();
        assert_eq!(config.style(BOLD).unwrap().tag(), "strong");
        assert_eq!(config.style(ITALIC).unwrap().tag(), "em");
        assert_eq!(config.style(UNDERLINE).unwrap().tag(), "u");
        assert_eq!(config.style(STRIKETHROUGH).unwrap().tag(), "del");
        assert_eq!(config.style(CODE).unwrap().tag(), "code");
        assert!(config.style("RED").is_none());
    }

    #[test]
    fn test_default_order() {
        assert_eq!(
            Config::default().style_order(),
            &["BOLD", "ITALIC", "UNDERLINE", "STRIKETHROUGH", "CODE"]
        );
    }

    #[test]
    fn test_with_style_replaces_known() {
        let config = Config::new().with_style(BOLD, StyleDescriptor::element("b"));
        assert_eq!(config.style(BOLD).unwrap().tag(), "b");
        assert_eq!(config.style_order().len(), 5);
    }

    #[test]
    fn test_with_style_appends_new_names_in_order() {
        let config = Config::new()
            .with_style("RED", StyleDescriptor::default().with_style("color", "red"))
            .with_style("BIG", StyleDescriptor::element("big"));
        assert_eq!(&config.style_order()[5..], &["RED", "BIG"]);
        assert_eq!(config.style("RED").unwrap().tag(), "span");
    }

    #[test]
    fn test_with_styles_keeps_iteration_order() {
        let config = Config::new().with_styles([
            ("BIG", StyleDescriptor::element("big")),
            (ITALIC, StyleDescriptor::element("i")),
            ("SMALL", StyleDescriptor::element("small")),
        ]);
        assert_eq!(&config.style_order()[5..], &["BIG", "SMALL"]);
        assert_eq!(config.style(ITALIC).unwrap().tag(), "i");
        assert_eq!(config.style("SMALL").unwrap().tag(), "small");
    }

    #[test]
    fn test_block_tags() {
        let config = Config::default();
        assert_eq!(config.block_tags(&BlockType::HeaderThree), vec!["h3"]);
        assert_eq!(config.block_tags(&BlockType::CodeBlock), vec!["pre", "code"]);
        assert_eq!(config.block_tags(&BlockType::Atomic), vec!["figure"]);
        assert_eq!(config.block_tags(&BlockType::OrderedListItem), vec!["li"]);
        assert_eq!(config.block_tags(&BlockType::Unstyled), vec!["p"]);
        assert_eq!(config.block_tags(&BlockType::Pullquote), vec!["p"]);
        assert_eq!(
            config.block_tags(&BlockType::Custom("callout".into())),
            vec!["p"]
        );
    }

    #[test]
    fn test_default_block_tag_disabled() {
        let config = Config::new().with_default_block_tag(None);
        assert!(config.block_tags(&BlockType::Unstyled).is_empty());
        assert_eq!(config.block_tags(&BlockType::Blockquote), vec!["blockquote"]);
    }

    #[test]
    fn test_block_tag_override() {
        let config = Config::new().with_block_tags(&BlockType::Pullquote, ["aside", "p"]);
        assert_eq!(config.block_tags(&BlockType::Pullquote), vec!["aside", "p"]);
    }

    #[test]
    fn test_wrapper_tag() {
        assert_eq!(wrapper_tag(&BlockType::UnorderedListItem), Some("ul"));
        assert_eq!(wrapper_tag(&BlockType::OrderedListItem), Some("ol"));
        assert_eq!(wrapper_tag(&BlockType::Unstyled), None);
    }

    // =========================================================================
    // from_json
    // =========================================================================

    #[test]
    fn test_from_json_inline_styles() {
        let config = Config::from_json(
            r#"{"inlineStyles":{"ITALIC":{"element":"i","attributes":{"className":"foo"},"style":{"textDecoration":"underline"}},"RED":{"style":{"color":"red"}}}}"#,
        )
        .unwrap();
        let italic = config.style(ITALIC).unwrap();
        assert_eq!(italic.tag(), "i");
        assert_eq!(italic.attributes["className"], "foo");
        assert_eq!(italic.style["textDecoration"], "underline");
        assert_eq!(config.style_order().last().map(String::as_str), Some("RED"));
    }

    #[test]
    fn test_from_json_default_block_tag() {
        let absent = Config::from_json("{}").unwrap();
        assert_eq!(absent.default_block_tag(), Some("p"));

        let div = Config::from_json(r#"{"defaultBlockTag":"div"}"#).unwrap();
        assert_eq!(div.default_block_tag(), Some("div"));

        let disabled = Config::from_json(r#"{"defaultBlockTag":null}"#).unwrap();
        assert_eq!(disabled.default_block_tag(), None);
    }

    #[test]
    fn test_from_json_order_and_block_tags() {
        let config = Config::from_json(
            r#"{"styleOrder":["ITALIC","BOLD"],"blockTags":{"pullquote":["aside"]}}"#,
        )
        .unwrap();
        assert_eq!(config.style_order(), &["ITALIC", "BOLD"]);
        assert_eq!(config.block_tags(&BlockType::Pullquote), vec!["aside"]);
    }

    #[test]
    fn test_from_json_invalid() {
        let err = Config::from_json("{\"inlineStyles\": [}").unwrap_err();
        assert_eq!(err.line, 1);
        assert!(err.to_string().starts_with("Config error"));
    }

    #[test]
    fn test_from_json_bad_descriptor() {
        let err = Config::from_json(r#"{"inlineStyles":{"RED":{"element":3}}}"#).unwrap_err();
        assert!(err.message.contains("RED"));
    }
}
