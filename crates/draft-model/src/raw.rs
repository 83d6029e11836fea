//! Serde mirror of the Draft.js raw content format.
//!
//! ```text
//! {"entityMap": {"0": {"type": "LINK", "data": {...}}},
//!  "blocks": [{"key": "...", "text": "...", "type": "unstyled", "depth": 0,
//!              "inlineStyleRanges": [{"offset": 0, "length": 1, "style": "BOLD"}],
//!              "entityRanges": [{"offset": 0, "length": 1, "key": 0}]}]}
//! ```
//!
//! Offsets and lengths are UTF-16 code units.

use std::collections::HashMap;

use serde::Deserialize;

use crate::model::EntityData;

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawContent {
    #[serde(default)]
    pub entity_map: HashMap<String, RawEntity>,
    #[serde(default)]
    pub blocks: Vec<RawBlock>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RawEntity {
    #[serde(rename = "type", default)]
    pub kind: String,
    #[serde(default)]
    pub mutability: Option<String>,
    #[serde(default)]
    pub data: Option<EntityData>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawBlock {
    #[serde(default)]
    pub key: String,
    #[serde(default)]
    pub text: String,
    #[serde(rename = "type", default)]
    pub kind: Option<String>,
    #[serde(default)]
    pub depth: usize,
    #[serde(default)]
    pub inline_style_ranges: Vec<RawStyleRange>,
    #[serde(default)]
    pub entity_ranges: Vec<RawEntityRange>,
    #[serde(default)]
    pub data: Option<EntityData>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RawStyleRange {
    pub offset: usize,
    pub length: usize,
    pub style: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RawEntityRange {
    pub offset: usize,
    pub length: usize,
    pub key: RawEntityKey,
}

/// Entity range keys are numbers in Draft.js output, strings in some
/// serializers.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum RawEntityKey {
    Number(u64),
    Text(String),
}

impl RawEntityKey {
    pub fn to_key(&self) -> String {
        match self {
            RawEntityKey::Number(n) => n.to_string(),
            RawEntityKey::Text(s) => s.clone(),
        }
    }
}
