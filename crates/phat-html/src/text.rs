//! Small text helpers for markup output.

use crate::entities::{EscapeQuotes, escape_html};
use crate::is_space;

/// Escape text for HTML content or a double- or single-quoted attribute.
///
/// Existing character references are not encoded again.
///
/// ```
/// use phat_html::text::esc;
///
/// assert_eq!(esc(r#"<a title="it's">"#), "&lt;a title=&quot;it&#039;s&quot;&gt;");
/// ```
#[must_use]
pub fn esc(text: &str) -> String {
    escape_html(text, EscapeQuotes::Both)
}

/// Replace every whitespace run with `replacement`.
///
/// ```
/// use phat_html::text::respace;
///
/// assert_eq!(respace("a \n\t b  c", " "), "a b c");
/// ```
#[must_use]
pub fn respace(text: &str, replacement: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut in_run = false;
    for c in text.chars() {
        if is_space(c) {
            if !in_run {
                out.push_str(replacement);
                in_run = true;
            }
        } else {
            out.push(c);
            in_run = false;
        }
    }
    out
}

/// Replace every blank-line gap (two or more line breaks, with any
/// whitespace between them) with `replacement`.
///
/// ```
/// use phat_html::text::rebreak;
///
/// assert_eq!(rebreak("a\n \n\n  b\nc", "\n\n"), "a\n\n  b\nc");
/// ```
#[must_use]
pub fn rebreak(text: &str, replacement: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut rest = text;
    while let Some(start) = rest.find('\n') {
        out.push_str(&rest[..start]);
        let run = &rest[start..];
        let run_len = run.find(|c: char| !is_space(c)).unwrap_or(run.len());
        // The gap ends at the last line break of the whitespace run.
        match run[..run_len].rfind('\n') {
            Some(last) if last > 0 => {
                out.push_str(replacement);
                rest = &run[last + 1..];
            }
            _ => {
                out.push('\n');
                rest = &run[1..];
            }
        }
    }
    out.push_str(rest);
    out
}

/// Wrap text in a CDATA section.
#[must_use]
pub fn cdata(text: &str) -> String {
    format!("<![CDATA[{text}]]>")
}
