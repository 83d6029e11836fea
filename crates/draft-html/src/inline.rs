//! Block content rendering.
//!
//! Splits a block's text into entity ranges, then each entity range into style
//! ranges, and wraps every style range in its inline elements:
//!
//! ```text
//! "BoldItalic" + [ITALIC 0..4, BOLD 4..10] → <em>Bold</em><strong>Italic</strong>
//! ```

use std::ops::Range;

use draft_model::{Block, BlockType, CharacterMeta, Document, StyleSet};

use crate::attributes;
use crate::config::{Config, CODE, DEFAULT_INLINE_TAG};
use crate::css;
use crate::entity::build_entity_element;
use crate::tree::{Element, Node};
use crate::Hooks;

const NBSP: char = '\u{a0}';

/// Render the content nodes of a block.
pub(crate) fn render_content(
    block: &Block,
    doc: &Document,
    config: &Config,
    hooks: &dyn Hooks,
) -> Vec<Node> {
    // Keep empty blocks from collapsing
    if block.text.is_empty() {
        return vec![Element::new("br").into()];
    }

    let chars = preserve_whitespace(&block.text);
    let no_meta = CharacterMeta::default();
    let meta = |i: usize| block.character(i).unwrap_or(&no_meta);
    let in_code_block = block.block_type == BlockType::CodeBlock;

    let mut nodes = Vec::new();
    for entity_range in runs(0..chars.len(), |i| meta(i).entity.as_deref()) {
        let mut range_nodes: Vec<Node> = runs(entity_range.clone(), |i| &meta(i).styles)
            .into_iter()
            .map(|style_range| {
                let styles = &meta(style_range.start).styles;
                let text: String = chars[style_range].iter().collect();
                let node = style_node(text, styles, config, in_code_block);
                hooks.decorate_inline(node, styles)
            })
            .collect();

        let Some(key) = meta(entity_range.start).entity.as_deref() else {
            nodes.append(&mut range_nodes);
            continue;
        };
        let Some(entity) = doc.entity(key) else {
            log::debug!("block `{}`: entity `{key}` not found", block.key);
            nodes.append(&mut range_nodes);
            continue;
        };
        match build_entity_element(entity, &mut range_nodes) {
            Some(element) => nodes.push(element.into()),
            None => {
                log::debug!(
                    "entity `{key}` of kind `{}` has no element, rendering its text",
                    entity.kind.as_str()
                );
                nodes.append(&mut range_nodes);
            }
        }
    }
    nodes
}

/// Replace spaces that HTML would collapse (leading, trailing, or following
/// another space) with non-breaking spaces.
pub(crate) fn preserve_whitespace(text: &str) -> Vec<char> {
    let chars: Vec<char> = text.chars().collect();
    let last = chars.len().saturating_sub(1);
    chars
        .iter()
        .enumerate()
        .map(|(i, &ch)| {
            if ch == ' ' && (i == 0 || i == last || chars[i - 1] == ' ') {
                NBSP
            } else {
                ch
            }
        })
        .collect()
}

/// Split `range` into maximal runs over which `key` stays equal.
pub(crate) fn runs<K, F>(range: Range<usize>, key: F) -> Vec<Range<usize>>
where
    K: PartialEq,
    F: Fn(usize) -> K,
{
    let mut result = Vec::new();
    if range.is_empty() {
        return result;
    }

    let mut start = range.start;
    let mut current = key(start);
    for i in range.start + 1..range.end {
        let next = key(i);
        if next != current {
            result.push(start..i);
            start = i;
            current = next;
        }
    }
    result.push(start..range.end);
    result
}

/// Wrap `text` in one element per active style, outermost first.
fn style_node(text: String, styles: &StyleSet, config: &Config, in_code_block: bool) -> Node {
    let order = config.style_order();

    // Styles outside the precedence order nest outside the ordered ones
    let unordered = styles.iter().filter(|name| !order.contains(name));
    let ordered = order.iter().rev().filter(|name| styles.contains(name.as_str()));

    let wrappers: Vec<&str> = unordered
        .chain(ordered)
        .map(String::as_str)
        .filter(|name| !(in_code_block && *name == CODE))
        .collect();

    wrappers
        .into_iter()
        .rev()
        .fold(Node::Text(text), |inner, name| {
            let mut element = inline_element(name, config);
            element.append(inner);
            element.into()
        })
}

fn inline_element(name: &str, config: &Config) -> Element {
    let Some(descriptor) = config.style(name) else {
        log::debug!("no descriptor for inline style `{name}`, using span");
        return Element::new(DEFAULT_INLINE_TAG);
    };

    let mut element = Element::new(descriptor.tag());
    attributes::apply(&mut element, attributes::from_json(&descriptor.attributes));
    let style = css::encode(&descriptor.style);
    if !style.is_empty() {
        element.set_attribute("style", style);
    }
    element
}
