//! Draft HTML
//!
//! Converts a rich-text [`Document`] into HTML. Blocks become block elements,
//! list items are grouped and nested by depth, and each block's text is split
//! into entity and style ranges rendered as links, images and inline elements.
//!
//! ```text
//! Document → Converter::convert() → Fragment → to_html() → String
//! ```
//!
//! Conversion never fails: unknown block types, entity kinds and style names
//! fall back to default rendering.

pub mod attributes;
mod block;
pub mod config;
pub mod css;
pub mod entity;
mod inline;
pub mod tree;

use draft_model::{Block, Document, StyleSet};

pub use attributes::AttributeValue;
pub use config::{Config, StyleDescriptor};
pub use tree::{Element, Fragment, Node};

/// Configuration error with position information.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
#[error("Config error at line {line}, column {column}: {message}")]
pub struct ConfigError {
    pub message: String,
    pub line: usize,
    pub column: usize,
}

/// Extension points for callers that need more than the configuration
/// tables offer.
pub trait Hooks {
    /// Attributes for a block's outermost element.
    fn block_attributes(&self, _block: &Block) -> Vec<(String, AttributeValue)> {
        Vec::new()
    }

    /// Post-process the node built for one style range.
    fn decorate_inline(&self, node: Node, _styles: &StyleSet) -> Node {
        node
    }
}

/// Hooks that change nothing.
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultHooks;

impl Hooks for DefaultHooks {}

/// Document to HTML converter.
pub struct Converter<'c> {
    config: &'c Config,
    hooks: &'c dyn Hooks,
}

impl<'c> Converter<'c> {
    pub fn new(config: &'c Config) -> Self {
        Self {
            config,
            hooks: &DefaultHooks,
        }
    }

    pub fn with_hooks(mut self, hooks: &'c dyn Hooks) -> Self {
        self.hooks = hooks;
        self
    }

    /// Build the output tree for a document.
    pub fn convert(&self, doc: &Document) -> Fragment {
        block::BlockTreeBuilder::new(doc, self.config, self.hooks).build()
    }

    /// Convert a document to an HTML fragment string.
    pub fn to_html(&self, doc: &Document) -> String {
        self.convert(doc).to_html()
    }
}

/// Build the output tree for a document.
pub fn convert(doc: &Document, config: &Config) -> Fragment {
    Converter::new(config).convert(doc)
}

/// Convert a document to an HTML fragment string.
pub fn to_html(doc: &Document, config: &Config) -> String {
    Converter::new(config).to_html(doc)
}
