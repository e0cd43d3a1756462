pub mod error;
mod raw;

pub use error::{LoadError, LoadErrorKind};

use crate::node::{AttrValue, Attribute, Block, Element, Node};
use raw::{RawAttr, RawNode, RawValue};

/// Loads the JSON form of a pug-parser AST (`JSON.stringify(ast)`).
pub struct Loader {
    source: String,
    file_id: usize,
}

impl Loader {
    pub fn new(source: String, file_id: usize) -> Self {
        Loader { source, file_id }
    }

    /// Parse the source into a root Block. Every malformed node is reported.
    pub fn load(&self) -> Result<Block, Vec<LoadError>> {
        let root: RawNode = serde_json::from_str(&self.source).map_err(|e| {
            let start = line_col_to_offset(&self.source, e.line(), e.column());
            let end = (start + 1).min(self.source.len()).max(start);
            vec![LoadError::syntax(e.to_string(), start..end, self.file_id)]
        })?;

        let mut state = LoadState {
            file_id: self.file_id,
            errors: Vec::new(),
        };
        let block = state.root(root);
        if state.errors.is_empty() {
            Ok(block)
        } else {
            Err(state.errors)
        }
    }
}

struct LoadState {
    file_id: usize,
    errors: Vec<LoadError>,
}

impl LoadState {
    fn root(&mut self, raw: RawNode) -> Block {
        if raw.kind != "Block" {
            self.malformed(&raw, "root", "the document root must be a Block");
            return Block::empty();
        }
        self.block(raw.nodes, "nodes")
    }

    fn block(&mut self, raw_nodes: Vec<RawNode>, path: &str) -> Block {
        let mut nodes = Vec::with_capacity(raw_nodes.len());
        for (i, raw) in raw_nodes.into_iter().enumerate() {
            let node_path = format!("{}[{}]", path, i);
            if let Some(node) = self.node(raw, &node_path) {
                nodes.push(node);
            }
        }
        Block { nodes }
    }

    fn node(&mut self, raw: RawNode, path: &str) -> Option<Node> {
        match raw.kind.as_str() {
            "Text" => {
                if let Some(serde_json::Value::String(s)) = &raw.val {
                    return Some(Node::Text(s.clone()));
                }
                self.malformed(&raw, path, "Text node without a string `val`");
                None
            }
            "Tag" => {
                let Some(name) = raw.name.clone() else {
                    self.malformed(&raw, path, "Tag node without a `name`");
                    return None;
                };
                let block = match raw.block {
                    Some(inner) if inner.kind == "Block" => {
                        self.block(inner.nodes, &format!("{}.block.nodes", path))
                    }
                    Some(inner) => {
                        let block_path = format!("{}.block", path);
                        self.malformed(&inner, &block_path, "a Tag's `block` must be a Block");
                        Block::empty()
                    }
                    None => Block::empty(),
                };
                let attrs = raw.attrs.into_iter().map(attribute).collect();
                Some(Node::Element(Element { name, attrs, block }))
            }
            _ => {
                self.malformed(&raw, path, "expected a Tag or Text node");
                None
            }
        }
    }

    fn malformed(&mut self, raw: &RawNode, path: &str, note: &str) {
        let mut err = LoadError::malformed(
            format!("unsupported node type `{}` at {}", raw.kind, path),
            self.file_id,
        )
        .with_note(note);
        if let Some(line) = raw.line {
            err = err.with_note(format!("template line {}", line));
        }
        self.errors.push(err);
    }
}

fn attribute(raw: RawAttr) -> Attribute {
    let value = match raw.val {
        RawValue::Flag(b) => AttrValue::Flag(b),
        RawValue::Text(s) => AttrValue::Text(s),
    };
    Attribute {
        name: raw.name,
        value,
    }
}

/// Convert serde_json's 1-based line/column into a byte offset.
fn line_col_to_offset(source: &str, line: usize, column: usize) -> usize {
    let line_start: usize = source
        .split_inclusive('\n')
        .take(line.saturating_sub(1))
        .map(str::len)
        .sum();
    (line_start + column.saturating_sub(1)).min(source.len())
}
