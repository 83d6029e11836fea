//! Draft Model
//!
//! The rich-text document model consumed by `draft-html`: ordered blocks with
//! per-character style and entity annotations, plus an entity table.
//! Also parses the Draft.js raw JSON format into that model.
//!
//! ```text
//! raw JSON → Parser::parse() → Document { blocks, entity_map }
//! ```

pub mod model;
pub mod parser;
pub mod raw;

pub use model::{
    Block, BlockType, CharacterMeta, Document, Entity, EntityData, EntityKind, StyleSet,
};
pub use parser::Parser;

/// Parse error with position information.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
#[error("Parse error at line {line}, column {column}: {message}")]
pub struct ParseError {
    pub message: String,
    pub line: usize,
    pub column: usize,
}
