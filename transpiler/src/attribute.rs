use indexmap::IndexMap;
use pugast::{AttrValue, Attribute};
use tracing::trace;

use crate::directive::{self, V_MODEL};
use crate::error::CompileError;

pub const BIND_PREFIX: char = ':';
pub const EVENT_PREFIX: char = '@';

/// Stands in for `.` in binding names. Modifiers are not interpreted.
pub const MODIFIER_PLACEHOLDER: &str = "_TODO_";

/// Compile an element's attributes into a space-separated fragment.
///
/// Plain string attributes sharing a name are merged into one whose values are
/// joined by a space (pug turns `.foo` into a `class` attribute, so
/// `tag.a(class="b")` yields `class="a b"`). Everything that cannot be merged
/// comes first in source order, then the merged attributes in order of first
/// appearance.
pub fn compile_attributes<'a>(
    attrs: impl IntoIterator<Item = &'a Attribute>,
) -> Result<String, CompileError> {
    let mut fragments = Vec::new();
    let mut merged: IndexMap<&str, Vec<&str>> = IndexMap::new();

    for attr in attrs {
        match mergeable_value(attr) {
            Some(value) => merged
                .entry(attr.name.as_str())
                .or_default()
                .push(strip_quotes(value)),
            None => fragments.push(compile_attribute(attr)?),
        }
    }

    for (name, values) in merged {
        trace!(attr = name, count = values.len(), "merged attribute");
        fragments.push(plain(name, &values.join(" ")));
    }

    Ok(fragments.join(" "))
}

fn mergeable_value(attr: &Attribute) -> Option<&str> {
    let name = attr.name.as_str();
    if name.starts_with(BIND_PREFIX)
        || name.starts_with(EVENT_PREFIX)
        || name.starts_with(directive::DIRECTIVE_PREFIX)
    {
        return None;
    }
    attr.value.as_text()
}

/// Compile a single attribute.
pub fn compile_attribute(attr: &Attribute) -> Result<String, CompileError> {
    let name = attr.name.as_str();

    if name.starts_with(directive::DIRECTIVE_PREFIX) && name != V_MODEL {
        return Err(if directive::is_slot(name) {
            CompileError::invalid_directive(name, "a slot must be a direct child of an element")
        } else {
            CompileError::UnknownDirective(name.to_string())
        });
    }

    let value = match &attr.value {
        AttrValue::Flag(true) => return Ok(name.to_string()),
        AttrValue::Flag(false) => return Ok(format!("{}={{false}}", name)),
        AttrValue::Text(value) => value.as_str(),
    };

    if name == V_MODEL {
        let target = strip_quotes(value);
        return Ok(format!(
            "value={{{target}}} oninput={{(x) => {target}.value = x }}"
        ));
    }

    if let Some(bound) = name.strip_prefix(BIND_PREFIX) {
        let expr = match quoted_inner(value) {
            Some(inner) if !inner.is_empty() => inner,
            _ => {
                return Err(CompileError::InvalidBinding {
                    name: name.to_string(),
                    value: value.to_string(),
                });
            }
        };
        return Ok(format!(
            "{}={{{}}}",
            bound.replace('.', MODIFIER_PLACEHOLDER),
            expr
        ));
    }

    if let Some(event) = name.strip_prefix(EVENT_PREFIX) {
        return Ok(format!("on{}={{{}}}", event, strip_quotes(value)));
    }

    Ok(plain(name, strip_quotes(value)))
}

fn plain(name: &str, value: &str) -> String {
    format!("{}=\"{}\"", name, value)
}

/// Remove one matching pair of enclosing `'` or `"`, if present.
pub fn strip_quotes(value: &str) -> &str {
    quoted_inner(value).unwrap_or(value)
}

fn quoted_inner(value: &str) -> Option<&str> {
    ['"', '\'']
        .into_iter()
        .find_map(|q| value.strip_prefix(q)?.strip_suffix(q))
}
