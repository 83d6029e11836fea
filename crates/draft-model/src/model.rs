//! In-memory document model.
//!
//! A document is an ordered list of blocks plus an entity table. Each block
//! carries one [`CharacterMeta`] per character of its text, naming the entity
//! (if any) and the set of inline styles active on that character.

use std::collections::{BTreeSet, HashMap};
use std::ops::Range;

/// Set of inline style names active on a character.
///
/// Compared as a set: `{BOLD, ITALIC}` equals `{ITALIC, BOLD}`.
pub type StyleSet = BTreeSet<String>;

/// Key/value data attached to an entity or block. Keys keep their
/// insertion order.
pub type EntityData = serde_json::Map<String, serde_json::Value>;

// ---------------------------------------------------------------------------
// Document
// ---------------------------------------------------------------------------

/// A complete rich-text document.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Document {
    pub blocks: Vec<Block>,
    pub entity_map: HashMap<String, Entity>,
}

impl Document {
    pub fn new(blocks: Vec<Block>) -> Self {
        Self {
            blocks,
            entity_map: HashMap::new(),
        }
    }

    /// Register an entity under `key`.
    pub fn with_entity(mut self, key: impl Into<String>, entity: Entity) -> Self {
        self.entity_map.insert(key.into(), entity);
        self
    }

    pub fn entity(&self, key: &str) -> Option<&Entity> {
        self.entity_map.get(key)
    }
}

// ---------------------------------------------------------------------------
// Blocks
// ---------------------------------------------------------------------------

/// One paragraph-like unit of the document.
#[derive(Debug, Clone, PartialEq)]
pub struct Block {
    pub key: String,
    pub block_type: BlockType,
    /// Nesting level; only meaningful for list items.
    pub depth: usize,
    pub text: String,
    /// One entry per `char` of `text`. Missing entries mean no entity and
    /// no styles.
    pub characters: Vec<CharacterMeta>,
    pub data: EntityData,
}

impl Block {
    /// Create a block with plain, unannotated text.
    pub fn new(block_type: BlockType, text: impl Into<String>) -> Self {
        let text = text.into();
        let characters = vec![CharacterMeta::default(); text.chars().count()];
        Self {
            key: String::new(),
            block_type,
            depth: 0,
            text,
            characters,
            data: EntityData::new(),
        }
    }

    pub fn with_key(mut self, key: impl Into<String>) -> Self {
        self.key = key.into();
        self
    }

    pub fn with_depth(mut self, depth: usize) -> Self {
        self.depth = depth;
        self
    }

    /// Apply `style` to the characters in `range` (character indices).
    /// Indices past the end of the text are ignored.
    pub fn with_style(mut self, range: Range<usize>, style: &str) -> Self {
        for meta in self.characters_mut(range) {
            meta.styles.insert(style.to_string());
        }
        self
    }

    /// Attach the entity `key` to the characters in `range`.
    pub fn with_entity(mut self, range: Range<usize>, key: &str) -> Self {
        for meta in self.characters_mut(range) {
            meta.entity = Some(key.to_string());
        }
        self
    }

    /// Metadata for the character at `index`, if recorded.
    pub fn character(&self, index: usize) -> Option<&CharacterMeta> {
        self.characters.get(index)
    }

    fn characters_mut(&mut self, range: Range<usize>) -> &mut [CharacterMeta] {
        let end = range.end.min(self.characters.len());
        let start = range.start.min(end);
        &mut self.characters[start..end]
    }
}

/// Per-character annotations.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CharacterMeta {
    pub entity: Option<String>,
    pub styles: StyleSet,
}

/// The kind of a block.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum BlockType {
    Unstyled,
    HeaderOne,
    HeaderTwo,
    HeaderThree,
    HeaderFour,
    HeaderFive,
    HeaderSix,
    UnorderedListItem,
    OrderedListItem,
    Blockquote,
    Pullquote,
    CodeBlock,
    Atomic,
    /// Any type name this crate does not know about.
    Custom(String),
}

impl BlockType {
    /// The Draft.js name of this block type.
    pub fn as_str(&self) -> &str {
        match self {
            BlockType::Unstyled => "unstyled",
            BlockType::HeaderOne => "header-one",
            BlockType::HeaderTwo => "header-two",
            BlockType::HeaderThree => "header-three",
            BlockType::HeaderFour => "header-four",
            BlockType::HeaderFive => "header-five",
            BlockType::HeaderSix => "header-six",
            BlockType::UnorderedListItem => "unordered-list-item",
            BlockType::OrderedListItem => "ordered-list-item",
            BlockType::Blockquote => "blockquote",
            BlockType::Pullquote => "pullquote",
            BlockType::CodeBlock => "code-block",
            BlockType::Atomic => "atomic",
            BlockType::Custom(name) => name,
        }
    }
}

impl From<&str> for BlockType {
    fn from(name: &str) -> Self {
        match name {
            "unstyled" => BlockType::Unstyled,
            "header-one" => BlockType::HeaderOne,
            "header-two" => BlockType::HeaderTwo,
            "header-three" => BlockType::HeaderThree,
            "header-four" => BlockType::HeaderFour,
            "header-five" => BlockType::HeaderFive,
            "header-six" => BlockType::HeaderSix,
            "unordered-list-item" => BlockType::UnorderedListItem,
            "ordered-list-item" => BlockType::OrderedListItem,
            "blockquote" => BlockType::Blockquote,
            "pullquote" => BlockType::Pullquote,
            "code-block" => BlockType::CodeBlock,
            "atomic" => BlockType::Atomic,
            other => BlockType::Custom(other.to_string()),
        }
    }
}

impl std::fmt::Display for BlockType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// Entities
// ---------------------------------------------------------------------------

/// A non-text annotation attached to a range of characters.
#[derive(Debug, Clone, PartialEq)]
pub struct Entity {
    pub kind: EntityKind,
    pub data: EntityData,
}

impl Entity {
    pub fn new(kind: EntityKind) -> Self {
        Self {
            kind,
            data: EntityData::new(),
        }
    }

    pub fn with_data(mut self, key: impl Into<String>, value: impl Into<serde_json::Value>) -> Self {
        self.data.insert(key.into(), value.into());
        self
    }
}

/// Supported entity kinds.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EntityKind {
    /// `LINK`
    Link,
    /// `IMAGE`
    Image,
    /// `embed` / `EMBED`
    Embed,
    /// Anything else, kept by name.
    Other(String),
}

impl EntityKind {
    pub fn as_str(&self) -> &str {
        match self {
            EntityKind::Link => "LINK",
            EntityKind::Image => "IMAGE",
            EntityKind::Embed => "embed",
            EntityKind::Other(name) => name,
        }
    }
}

impl From<&str> for EntityKind {
    fn from(name: &str) -> Self {
        match name {
            "LINK" => EntityKind::Link,
            "IMAGE" => EntityKind::Image,
            "embed" | "EMBED" => EntityKind::Embed,
            other => EntityKind::Other(other.to_string()),
        }
    }
}
