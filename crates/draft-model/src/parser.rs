//! Raw content parser.
//!
//! Turns Draft.js raw JSON into a [`Document`]. Range annotations are
//! expanded into per-character metadata, translating UTF-16 offsets into
//! character indices on the way.

use std::ops::Range;

use crate::model::{Block, BlockType, Document, Entity, EntityData, EntityKind};
use crate::raw::{RawBlock, RawContent};
use crate::ParseError;

/// Draft.js raw content parser.
pub struct Parser;

impl Parser {
    /// Parse raw JSON source into a document.
    pub fn parse(source: &str) -> Result<Document, ParseError> {
        let raw: RawContent = serde_json::from_str(source).map_err(|e| ParseError {
            message: e.to_string(),
            line: e.line(),
            column: e.column(),
        })?;
        Ok(Self::from_raw(raw))
    }

    /// Build a document from already-deserialized raw content.
    pub fn from_raw(raw: RawContent) -> Document {
        let entity_map = raw
            .entity_map
            .into_iter()
            .map(|(key, entity)| {
                let entity = Entity {
                    kind: EntityKind::from(entity.kind.as_str()),
                    data: entity.data.unwrap_or_default(),
                };
                (key, entity)
            })
            .collect();

        Document {
            blocks: raw.blocks.into_iter().map(convert_block).collect(),
            entity_map,
        }
    }
}

fn convert_block(raw: RawBlock) -> Block {
    let block_type = raw
        .kind
        .as_deref()
        .map(BlockType::from)
        .unwrap_or(BlockType::Unstyled);

    let offsets = Utf16Offsets::new(&raw.text);
    let mut block = Block::new(block_type, raw.text)
        .with_key(raw.key)
        .with_depth(raw.depth);
    block.data = raw.data.unwrap_or_else(EntityData::new);

    for range in &raw.inline_style_ranges {
        block = block.with_style(offsets.char_range(range.offset, range.length), &range.style);
    }
    for range in &raw.entity_ranges {
        let key = range.key.to_key();
        block = block.with_entity(offsets.char_range(range.offset, range.length), &key);
    }

    block
}

/// Maps UTF-16 code unit offsets onto `char` indices.
struct Utf16Offsets {
    /// UTF-16 offset at which each char starts.
    starts: Vec<usize>,
}

impl Utf16Offsets {
    fn new(text: &str) -> Self {
        let mut starts = Vec::with_capacity(text.len());
        let mut unit = 0;
        for ch in text.chars() {
            starts.push(unit);
            unit += ch.len_utf16();
        }
        Self { starts }
    }

    /// Index of the first char starting at or after `unit`.
    fn char_index(&self, unit: usize) -> usize {
        self.starts.partition_point(|&start| start < unit)
    }

    fn char_range(&self, offset: usize, length: usize) -> Range<usize> {
        self.char_index(offset)..self.char_index(offset.saturating_add(length))
    }
}
