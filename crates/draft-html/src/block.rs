//! Block tree builder.
//!
//! Walks the document's blocks in order and places each block element in the
//! output tree. List items are grouped into `ul`/`ol` wrappers; a deeper item
//! opens a new wrapper inside the previous item.
//!
//! Open wrappers live on a stack of frames. A frame is only attached to its
//! parent when it is closed, so the parent's last child at that moment is the
//! item the nested list belongs to.

use draft_model::{Block, Document};

use crate::attributes;
use crate::config::{wrapper_tag, Config};
use crate::inline;
use crate::tree::{Element, Fragment, Node};
use crate::Hooks;

/// An open list wrapper.
struct Frame {
    wrapper: Element,
    /// Shallowest item depth that still belongs to this wrapper.
    floor: usize,
    /// Depth of the last item placed in it.
    depth: usize,
    /// Attach to the enclosing container's last item rather than the
    /// container itself.
    nested: bool,
}

pub(crate) struct BlockTreeBuilder<'a> {
    doc: &'a Document,
    config: &'a Config,
    hooks: &'a dyn Hooks,
    root: Vec<Node>,
    frames: Vec<Frame>,
}

impl<'a> BlockTreeBuilder<'a> {
    pub(crate) fn new(doc: &'a Document, config: &'a Config, hooks: &'a dyn Hooks) -> Self {
        Self {
            doc,
            config,
            hooks,
            root: Vec::new(),
            frames: Vec::new(),
        }
    }

    pub(crate) fn build(mut self) -> Fragment {
        let doc = self.doc;
        for block in &doc.blocks {
            self.process_block(block);
        }
        self.close_all();
        Fragment { nodes: self.root }
    }

    fn process_block(&mut self, block: &Block) {
        match wrapper_tag(&block.block_type) {
            Some(tag) => self.enter_list(tag, block.depth),
            None => self.close_all(),
        }
        log::trace!(
            "block `{}` ({}) depth {}, {} open list(s)",
            block.key,
            block.block_type,
            block.depth,
            self.frames.len()
        );

        let nodes = self.block_nodes(block);
        self.container().extend(nodes);
    }

    /// Make the top frame a `tag` wrapper holding an item at `depth`.
    ///
    /// A wrapper opened by a jump of several levels keeps the items that
    /// follow at any depth down to one below its parent item.
    fn enter_list(&mut self, tag: &str, depth: usize) {
        while self.frames.last().is_some_and(|f| f.floor > depth) {
            self.close_frame();
        }
        if let Some(frame) = self.frames.last_mut() {
            if depth <= frame.depth {
                if frame.wrapper.tag == tag {
                    frame.depth = depth;
                    return;
                }
                // Same level, other list kind: the old list ends here
                self.close_frame();
            }
        }

        let floor = self.frames.last().map_or(0, |f| f.depth + 1);
        let nested = self
            .frames
            .last()
            .is_some_and(|f| matches!(f.wrapper.children.last(), Some(Node::Element(_))));
        self.frames.push(Frame {
            wrapper: Element::new(tag),
            floor,
            depth,
            nested,
        });
    }

    fn close_frame(&mut self) {
        let Some(frame) = self.frames.pop() else {
            return;
        };
        let node = Node::Element(frame.wrapper);
        let container = self.container();
        if frame.nested {
            if let Some(Node::Element(item)) = container.last_mut() {
                item.append(node);
                return;
            }
        }
        container.push(node);
    }

    fn close_all(&mut self) {
        while !self.frames.is_empty() {
            self.close_frame();
        }
    }

    fn container(&mut self) -> &mut Vec<Node> {
        match self.frames.last_mut() {
            Some(frame) => &mut frame.wrapper.children,
            None => &mut self.root,
        }
    }

    /// The block's element chain with its content, or the bare content when
    /// the block has no tags.
    fn block_nodes(&self, block: &Block) -> Vec<Node> {
        let content = inline::render_content(block, self.doc, self.config, self.hooks);
        let tags = self.config.block_tags(&block.block_type);
        let Some((outer, inner)) = tags.split_first() else {
            return content;
        };

        let children = inner.iter().rev().fold(content, |children, tag| {
            let mut element = Element::new(*tag);
            element.children = children;
            vec![element.into()]
        });

        let mut element = Element::new(*outer);
        attributes::apply(&mut element, self.hooks.block_attributes(block));
        element.children = children;
        vec![element.into()]
    }
}
