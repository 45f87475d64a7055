//! Attribute value codec.
//!
//! [`encode`] turns an in-memory value into the literal text placed between
//! the single quotes of `name='...'`. [`decode`] goes the other way.
//!
//! Encoding rules, in order:
//! 1. Strings are entity-escaped (`& < > "`), then `'` becomes `&apos;`.
//! 2. Null becomes `null`; `false` and empty lists or maps become `""`.
//! 3. Deferred values are resolved first.
//! 4. Lists and maps for an attribute with a known [`Delimiter`] are joined
//!    with it, then escaped like a string (`class: ["a", "b"]` gives `a b`).
//! 5. Everything else is JSON. `<`, `>` and `&` are written as `\u` escapes
//!    so the JSON text stays markup-safe, and `'` becomes `&apos;`.
//!
//! Decoding is not a strict inverse: text that happens to be valid JSON is
//! returned as JSON, so `'5'` decodes to the number 5.
//!
//! [`Delimiter`]: crate::Delimiter

use serde_json::Value;

use crate::delimiter::get_delimiter;
use crate::entities::{EscapeQuotes, escape_html, unescape_html};
use crate::tokens::{join_deep, split_text};
use crate::value::AttrValue;

/// Result of [`encode_with`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Encoded {
    /// Attribute-safe text.
    Text(String),
    /// A boolean kept as is because literals were preserved.
    Bool(bool),
    /// Null kept as is because literals were preserved.
    Null,
}

impl Encoded {
    /// The text the literal would encode to without preservation.
    #[must_use]
    pub fn into_text(self) -> String {
        match self {
            Self::Text(text) => text,
            Self::Bool(true) => "true".to_owned(),
            Self::Bool(false) => String::new(),
            Self::Null => "null".to_owned(),
        }
    }
}

/// Escape text for use inside a single-quoted attribute value.
fn escape_text(text: &str) -> String {
    if text.is_empty() {
        return String::new();
    }
    escape_html(text, EscapeQuotes::Double).replace('\'', "&apos;")
}

/// Serialize as JSON that is safe inside a single-quoted attribute value.
fn json_text(value: &AttrValue) -> String {
    let json = value.to_json().to_string();
    let mut out = String::with_capacity(json.len());
    for c in json.chars() {
        match c {
            '<' => out.push_str("\\u003c"),
            '>' => out.push_str("\\u003e"),
            '&' => out.push_str("\\u0026"),
            '\'' => out.push_str("&apos;"),
            c => out.push(c),
        }
    }
    out
}

/// Encode a value for an attribute. `name`, when given, selects a delimiter
/// for list values.
///
/// ```
/// use phat_html::{AttrValue, encode};
///
/// assert_eq!(encode(&"it's".into(), None), "it&apos;s");
/// assert_eq!(encode(&AttrValue::from(["a", "b"]), Some("class")), "a b");
/// assert_eq!(encode(&AttrValue::from(["a", "b"]), None), r#"["a","b"]"#);
/// assert_eq!(encode(&AttrValue::from(5), None), "5");
/// ```
#[must_use]
pub fn encode(value: &AttrValue, name: Option<&str>) -> String {
    encode_with(value, name, false).into_text()
}

/// Encode a value, optionally keeping `true`, `false` and null as literals
/// for the caller to special-case.
#[must_use]
pub fn encode_with(value: &AttrValue, name: Option<&str>, preserve_literals: bool) -> Encoded {
    let value = value.resolve();
    match value.as_ref() {
        AttrValue::String(text) => Encoded::Text(escape_text(text)),
        AttrValue::Null if preserve_literals => Encoded::Null,
        AttrValue::Null => Encoded::Text("null".to_owned()),
        AttrValue::Bool(b) if preserve_literals => Encoded::Bool(*b),
        AttrValue::Bool(false) => Encoded::Text(String::new()),
        composite @ (AttrValue::List(_) | AttrValue::Map(_)) => {
            if composite.is_empty_composite() {
                return Encoded::Text(String::new());
            }
            match name.and_then(get_delimiter) {
                Some(delimiter) => {
                    Encoded::Text(escape_text(&join_deep(composite, delimiter.as_str())))
                }
                None => Encoded::Text(json_text(composite)),
            }
        }
        other => Encoded::Text(json_text(other)),
    }
}

/// Decode raw attribute text. `name`, when given, selects a delimiter.
///
/// - With a delimiter: entity-decode, then split into a list of strings.
/// - Otherwise: JSON if the text parses as JSON, else the entity-decoded text.
///
/// ```
/// use phat_html::{AttrValue, decode};
///
/// assert_eq!(decode("a,b", Some("accept")), AttrValue::from(["a", "b"]));
/// assert_eq!(decode("5", Some("data-count")), AttrValue::from(5));
/// assert_eq!(decode("a &amp; b", None), AttrValue::from("a & b"));
/// ```
#[must_use]
pub fn decode(raw: &str, name: Option<&str>) -> AttrValue {
    if raw.is_empty() {
        return AttrValue::String(String::new());
    }
    if let Some(delimiter) = name.and_then(get_delimiter) {
        return split_text(&unescape_html(raw), &[delimiter.as_str()]).into();
    }
    // `&apos;` is the only entity the encoder writes into JSON text.
    match serde_json::from_str::<Value>(&raw.replace("&apos;", "'")) {
        Ok(json) => json.into(),
        Err(_) => AttrValue::String(unescape_html(raw)),
    }
}
