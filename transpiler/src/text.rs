/// Render a text node.
///
/// A node that starts with `{{` and ends with `}}` becomes `{ ... }`, with the
/// inner text kept verbatim (inner braces included). Anything with text
/// before the opening or after the closing braces passes through untouched.
pub fn interpolate(text: &str) -> String {
    match whole_expression(text) {
        Some(inner) => format!("{{{}}}", inner),
        None => text.to_string(),
    }
}

fn whole_expression(text: &str) -> Option<&str> {
    let inner = text.strip_prefix("{{")?.strip_suffix("}}")?;
    if inner.is_empty() || inner.contains('\n') {
        return None;
    }
    Some(inner)
}
