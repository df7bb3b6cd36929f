//! HTML entity escaping.

use std::borrow::Cow;

const SPECIAL: &[char] = &['&', '<', '>', '"', '\''];

/// Escape the five HTML-significant characters of untrusted text.
///
/// Borrows the input when nothing needs replacing.
pub fn escape_html(input: &str) -> Cow<'_, str> {
    if !input.contains(SPECIAL) {
        return Cow::Borrowed(input);
    }
    let mut out = String::with_capacity(input.len() + input.len() / 8);
    push_escaped(&mut out, input);
    Cow::Owned(out)
}

/// Append `input` to `out` with HTML entities substituted.
pub(crate) fn push_escaped(out: &mut String, input: &str) {
    let mut last = 0;
    for (idx, c) in input.match_indices(SPECIAL) {
        out.push_str(&input[last..idx]);
        out.push_str(match c {
            "&" => "&amp;",
            "<" => "&lt;",
            ">" => "&gt;",
            "\"" => "&quot;",
            _ => "&#039;",
        });
        last = idx + c.len();
    }
    out.push_str(&input[last..]);
}
