//! HTML character references.
//!
//! Escaping never double-encodes: an `&` that already starts a complete
//! reference (`&amp;`, `&#38;`, `&#x26;`, or a known named reference) is
//! left alone. Unescaping resolves named, decimal and hexadecimal references
//! and leaves anything it does not recognize verbatim.

mod named;

pub use named::lookup_entity;

/// Which quote characters [`escape_html`] converts.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum EscapeQuotes {
    /// Only `"`. Single quotes are left for the caller to handle.
    #[default]
    Double,
    /// Both `"` and `'` (as `&#039;`).
    Both,
}

/// A character reference found at the start of some text.
struct Reference {
    /// Byte length, including `&` and `;`.
    len: usize,
    /// The character it stands for, if it names a valid one.
    resolved: Option<char>,
}

/// Recognize a complete character reference at the start of `text`, which
/// must begin with `&`.
fn reference_at(text: &str) -> Option<Reference> {
    let body = text.strip_prefix('&')?;
    if let Some(numeric) = body.strip_prefix('#') {
        let (digits, radix, prefix_len) = match numeric.strip_prefix(['x', 'X']) {
            Some(hex) => (hex, 16, 3),
            None => (numeric, 10, 2),
        };
        let end = digits.find(|c: char| !c.is_digit(radix))?;
        if end == 0 || !digits[end..].starts_with(';') {
            return None;
        }
        let resolved = u32::from_str_radix(&digits[..end], radix)
            .ok()
            .filter(|&code| code != 0)
            .and_then(char::from_u32);
        return Some(Reference {
            len: prefix_len + end + 1,
            resolved,
        });
    }

    let end = body.find(|c: char| !c.is_ascii_alphanumeric())?;
    if end == 0 || !body[end..].starts_with(';') {
        return None;
    }
    let resolved = lookup_entity(&body[..=end])?;
    Some(Reference {
        len: end + 2,
        resolved: Some(resolved),
    })
}

/// Escape `&`, `<`, `>` and `"` (and `'` with [`EscapeQuotes::Both`]).
///
/// ```
/// use phat_html::entities::{EscapeQuotes, escape_html};
///
/// assert_eq!(escape_html("a < b & c", EscapeQuotes::Double), "a &lt; b &amp; c");
/// assert_eq!(escape_html("&amp; stays", EscapeQuotes::Double), "&amp; stays");
/// ```
#[must_use]
pub fn escape_html(text: &str, quotes: EscapeQuotes) -> String {
    let mut out = String::with_capacity(text.len());
    for (i, c) in text.char_indices() {
        match c {
            '&' if reference_at(&text[i..]).is_some() => out.push('&'),
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' if quotes == EscapeQuotes::Both => out.push_str("&#039;"),
            c => out.push(c),
        }
    }
    out
}

/// Resolve character references.
///
/// ```
/// use phat_html::entities::unescape_html;
///
/// assert_eq!(unescape_html("it&apos;s &lt;b&gt; &#169; &#x41;"), "it's <b> © A");
/// assert_eq!(unescape_html("&bogus; & &#0;"), "&bogus; & &#0;");
/// ```
#[must_use]
pub fn unescape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut rest = text;
    while let Some(amp) = rest.find('&') {
        out.push_str(&rest[..amp]);
        rest = &rest[amp..];
        match reference_at(rest) {
            Some(Reference {
                len,
                resolved: Some(c),
            }) => {
                out.push(c);
                rest = &rest[len..];
            }
            Some(Reference { len, resolved: None }) => {
                out.push_str(&rest[..len]);
                rest = &rest[len..];
            }
            None => {
                out.push('&');
                rest = &rest[1..];
            }
        }
    }
    out.push_str(rest);
    out
}
