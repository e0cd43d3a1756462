use pugast::{Attribute, Block, Element, Node};
use tracing::trace;

use crate::attribute::compile_attributes;
use crate::directive::{self, Directive};
use crate::error::CompileError;
use crate::text::interpolate;

/// Compile a whole document.
pub fn compile(root: &Block) -> Result<String, CompileError> {
    emit_nodes(&root.nodes)
}

fn emit_element(element: &Element) -> Result<String, CompileError> {
    emit_tag(&Tag::new(element))
}

fn emit_nodes<'a>(nodes: impl IntoIterator<Item = &'a Node>) -> Result<String, CompileError> {
    let mut out = String::new();
    for node in nodes {
        match node {
            Node::Element(element) => out.push_str(&emit_element(element)?),
            Node::Text(text) => out.push_str(&interpolate(text)),
        }
    }
    Ok(out)
}

/// A borrowed view of an element whose attribute list can be narrowed
/// without touching the tree.
#[derive(Debug, Clone)]
pub(crate) struct Tag<'a> {
    pub name: &'a str,
    pub attrs: Vec<&'a Attribute>,
    pub block: &'a Block,
}

impl<'a> Tag<'a> {
    fn new(element: &'a Element) -> Self {
        Tag {
            name: &element.name,
            attrs: element.attrs.iter().collect(),
            block: &element.block,
        }
    }

    pub fn attr(&self, name: &str) -> Option<&'a Attribute> {
        self.attrs.iter().copied().find(|a| a.name == name)
    }

    /// The same element minus the named attributes.
    pub fn without(&self, names: &[&str]) -> Tag<'a> {
        Tag {
            name: self.name,
            attrs: self
                .attrs
                .iter()
                .copied()
                .filter(|a| !names.contains(&a.name.as_str()))
                .collect(),
            block: self.block,
        }
    }
}

pub(crate) fn emit_tag(tag: &Tag<'_>) -> Result<String, CompileError> {
    match directive::element_directive(tag)? {
        Some((attr, Directive::Conditional(condition))) => {
            directive::resolve_conditional(tag, attr, condition)
        }
        Some((attr, Directive::Iteration(iteration))) => {
            directive::resolve_iteration(tag, attr, iteration)
        }
        _ => emit_plain(tag),
    }
}

fn emit_plain(tag: &Tag<'_>) -> Result<String, CompileError> {
    trace!(tag = tag.name, attrs = tag.attrs.len(), "emitting element");

    let name = tag_name(tag.name);
    let mut out = format!("<{}", name);

    let attrs = compile_attributes(tag.attrs.iter().copied())?;
    if !attrs.is_empty() {
        out.push(' ');
        out.push_str(&attrs);
    }

    let mut slots = Vec::new();
    let mut children = Vec::new();
    for node in &tag.block.nodes {
        let slot = node
            .as_element()
            .map(Tag::new)
            .and_then(|child| directive::slot_attr(&child).map(|attr| (child, attr)));
        match slot {
            Some(slot) => slots.push(slot),
            None => children.push(node),
        }
    }

    if !slots.is_empty() {
        out.push_str(" scopedSlots={{");
        for (child, attr) in &slots {
            out.push_str(&directive::resolve_slot(child, attr)?);
        }
        out.push_str("}}");
    }

    if children.is_empty() {
        out.push_str(" />");
    } else {
        out.push('>');
        out.push_str(&emit_nodes(children)?);
        out.push_str(&format!("</{}>", name));
    }
    Ok(out)
}

/// `some-tag` becomes `SomeTag`; names without a hyphen are kept as is.
fn tag_name(name: &str) -> String {
    if !name.contains('-') {
        return name.to_string();
    }
    name.split('-').map(capitalize).collect()
}

fn capitalize(segment: &str) -> String {
    let mut chars = segment.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
