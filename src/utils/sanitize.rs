//! Neutralizing HTML-significant characters in search and lookup inputs.

use percent_encoding::percent_decode_str;
use std::str::Utf8Error;

/// Percent-decode `value`, then entity-escape it with [`escape_html`].
///
/// Malformed `%` sequences are kept literally. Fails only when the decoded bytes are not
/// valid UTF-8.
pub fn normalize(value: &str) -> Result<String, Utf8Error> {
    let decoded = percent_decode_str(value).decode_utf8()?;
    Ok(escape_html(&decoded))
}

/// Replace `& < > ' "` with their named entities. Everything else is left untouched,
/// including entities that are already escaped.
pub fn escape_html(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '\'' => out.push_str("&#39;"),
            '"' => out.push_str("&quot;"),
            _ => out.push(c),
        }
    }
    out
}
