use pugast::{AttrValue, Attribute};
use tracing::debug;

use crate::attribute::strip_quotes;
use crate::emitter::{Tag, emit_tag};
use crate::error::CompileError;

pub const DIRECTIVE_PREFIX: &str = "v-";
pub const V_IF: &str = "v-if";
pub const V_FOR: &str = "v-for";
pub const V_MODEL: &str = "v-model";
pub const V_SLOT: &str = "v-slot";

/// A structural directive, parsed out of its attribute.
#[derive(Debug, Clone, PartialEq)]
pub enum Directive<'a> {
    Conditional(&'a str),
    Iteration(Iteration<'a>),
    Slot(Slot<'a>),
}

/// `capture in iterable`, parentheses around the capture removed.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Iteration<'a> {
    pub capture: &'a str,
    pub iterable: &'a str,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Slot<'a> {
    pub key: SlotKey<'a>,
    /// Argument pattern of the slot function; empty when the slot takes none.
    pub args: &'a str,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SlotKey<'a> {
    /// `v-slot:header`
    Static(&'a str),
    /// `v-slot:[expr]`
    Dynamic(&'a str),
}

impl SlotKey<'_> {
    /// Expression indexing the slot object: `"header"` or `expr`.
    fn index_expr(&self) -> String {
        match self {
            SlotKey::Static(name) => format!("\"{}\"", name),
            SlotKey::Dynamic(expr) => expr.to_string(),
        }
    }

    /// Key in an object literal: `"header"` or `[expr]`.
    fn property(&self) -> String {
        match self {
            SlotKey::Static(name) => format!("\"{}\"", name),
            SlotKey::Dynamic(expr) => format!("[{}]", expr),
        }
    }
}

pub fn is_slot(name: &str) -> bool {
    name == V_SLOT
        || name
            .strip_prefix(V_SLOT)
            .is_some_and(|rest| rest.starts_with(':'))
}

/// Classify one attribute. Attributes that are not structural directives
/// (plain, bound, event, `v-model`, unknown `v-*`) yield `None`.
pub fn classify(attr: &Attribute) -> Result<Option<Directive<'_>>, CompileError> {
    let name = attr.name.as_str();
    if name == V_IF {
        return parse_conditional(attr).map(|c| Some(Directive::Conditional(c)));
    }
    if name == V_FOR {
        return parse_iteration(attr).map(|i| Some(Directive::Iteration(i)));
    }
    if is_slot(name) {
        return parse_slot(attr).map(|s| Some(Directive::Slot(s)));
    }
    Ok(None)
}

pub fn parse_conditional(attr: &Attribute) -> Result<&str, CompileError> {
    Ok(strip_quotes(expression_value(attr)?))
}

/// Parse `(capture) in iterable` or `capture in iterable`, in that order.
pub fn parse_iteration(attr: &Attribute) -> Result<Iteration<'_>, CompileError> {
    let raw = expression_value(attr)?;
    let value = strip_quotes(raw);
    if value.contains('\n') {
        return Err(CompileError::invalid_directive(V_FOR, raw));
    }

    let parenthesized = value
        .strip_prefix('(')
        .and_then(|rest| split_last(rest, ") in "));
    let (capture, iterable) = parenthesized
        .or_else(|| split_last(value, " in "))
        .ok_or_else(|| CompileError::invalid_directive(V_FOR, raw))?;

    Ok(Iteration { capture, iterable })
}

/// Split at the right-most `sep` that leaves both sides non-empty.
fn split_last<'a>(value: &'a str, sep: &str) -> Option<(&'a str, &'a str)> {
    value.rmatch_indices(sep).find_map(|(i, _)| {
        let (left, right) = (&value[..i], &value[i + sep.len()..]);
        (!left.is_empty() && !right.is_empty()).then_some((left, right))
    })
}

pub fn parse_slot(attr: &Attribute) -> Result<Slot<'_>, CompileError> {
    let name = attr.name.as_str();
    let key = match name.strip_prefix(V_SLOT).and_then(|r| r.strip_prefix(':')) {
        None => SlotKey::Static("default"),
        Some("") => return Err(CompileError::invalid_directive(name, "missing slot name")),
        Some(arg) => match arg.strip_prefix('[').and_then(|a| a.strip_suffix(']')) {
            Some(expr) => SlotKey::Dynamic(expr),
            None => SlotKey::Static(arg),
        },
    };
    let args = match &attr.value {
        AttrValue::Text(value) => strip_quotes(value),
        AttrValue::Flag(_) => "",
    };
    Ok(Slot { key, args })
}

fn expression_value(attr: &Attribute) -> Result<&str, CompileError> {
    attr.value
        .as_text()
        .ok_or_else(|| CompileError::invalid_directive(&attr.name, "expected an expression"))
}

/// The structural directive governing an element as a whole, if any.
/// `v-if` wins over `v-for`.
pub(crate) fn element_directive<'a>(
    tag: &Tag<'a>,
) -> Result<Option<(&'a Attribute, Directive<'a>)>, CompileError> {
    for name in [V_IF, V_FOR] {
        if let Some(attr) = tag.attr(name) {
            if let Some(directive) = classify(attr)? {
                return Ok(Some((attr, directive)));
            }
        }
    }
    Ok(None)
}

pub(crate) fn slot_attr<'a>(tag: &Tag<'a>) -> Option<&'a Attribute> {
    tag.attrs.iter().copied().find(|a| is_slot(&a.name))
}

/// `{cond && <tag>}`
pub(crate) fn resolve_conditional(
    tag: &Tag<'_>,
    attr: &Attribute,
    condition: &str,
) -> Result<String, CompileError> {
    debug!(tag = tag.name, condition, "resolving v-if");
    let body = emit_tag(&tag.without(&[attr.name.as_str()]))?;
    Ok(format!("{{{} && {}}}", condition, body))
}

/// `{iterable.map((capture) => (<tag>))}`
pub(crate) fn resolve_iteration(
    tag: &Tag<'_>,
    attr: &Attribute,
    iteration: Iteration<'_>,
) -> Result<String, CompileError> {
    debug!(
        tag = tag.name,
        capture = iteration.capture,
        iterable = iteration.iterable,
        "resolving v-for"
    );
    let body = emit_tag(&tag.without(&[attr.name.as_str()]))?;
    Ok(format!(
        "{{{}.map(({}) => ({}))}}",
        iteration.iterable, iteration.capture, body
    ))
}

/// One entry of a `scopedSlots={{...}}` object, trailing comma included.
pub(crate) fn resolve_slot(tag: &Tag<'_>, attr: &Attribute) -> Result<String, CompileError> {
    let slot = parse_slot(attr)?;
    debug!(tag = tag.name, slot = ?slot.key, "resolving v-slot");

    if let Some(for_attr) = tag.attr(V_FOR) {
        let iteration = parse_iteration(for_attr)?;
        let body = emit_tag(&tag.without(&[attr.name.as_str(), V_FOR]))?;
        return Ok(format!(
            "...({}.reduce((acc, {}) => {{acc[{}] = ({}) => ({}); return acc}}, {{}})),",
            iteration.iterable,
            iteration.capture,
            slot.key.index_expr(),
            slot.args,
            body
        ));
    }

    let body = emit_tag(&tag.without(&[attr.name.as_str()]))?;
    Ok(format!("{}: ({}) => ({}),", slot.key.property(), slot.args, body))
}
