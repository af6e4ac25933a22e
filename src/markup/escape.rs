//! HTML escaping helpers.

use std::borrow::Cow;

/// Escape text for use in element content or a quoted attribute value.
///
/// Escapes `&`, `<`, `>`, `"` and `'`.
pub fn esc(text: &str) -> Cow<'_, str> {
    html_escape::encode_quoted_attribute(text)
}

/// Remove every `<...>` run from `html`, keeping the text in between.
///
/// An unterminated `<` drops the rest of the input.
pub fn strip_tags(html: &str) -> String {
    let mut out = String::with_capacity(html.len());
    let mut in_tag = false;

    for ch in html.chars() {
        match (in_tag, ch) {
            (false, '<') => in_tag = true,
            (true, '>') => in_tag = false,
            (false, c) => out.push(c),
            (true, _) => {}
        }
    }

    out
}
