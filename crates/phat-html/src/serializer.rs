//! Attribute serializer.
//!
//! Builds canonical attribute strings: names sanitized, values encoded with
//! the [codec](crate::codec), always single-quoted. `true` and `""` collapse
//! to a bare boolean attribute; `false` and null drop the attribute.

use phat_common::warning::warn_once;

use crate::codec::encode;
use crate::is_space;
use crate::names::{NamePolicy, sanitize_attr_name_with};
use crate::parser::parse_attribute_string;
use crate::value::AttrValue;

/// Map keys that are array positions (`"0"`, `"1"`, ...) rather than names.
fn array_index(key: &str) -> Option<u64> {
    let canonical =
        key == "0" || (!key.starts_with('0') && key.bytes().all(|b| b.is_ascii_digit()));
    if canonical { key.parse().ok() } else { None }
}

/// Serialize with the given name policy. See [`build_attribute_string`].
pub(crate) fn build(name: &AttrValue, value: &AttrValue, policy: NamePolicy) -> String {
    // A positional entry: the value is the name.
    if name.as_index().is_some() {
        return build(value, &AttrValue::String(String::new()), policy);
    }

    let name = name.resolve();
    let value = value.resolve();
    if matches!(value.as_ref(), AttrValue::Null | AttrValue::Bool(false))
        || matches!(name.as_ref(), AttrValue::Null | AttrValue::Bool(_))
    {
        return String::new();
    }

    match name.as_ref() {
        AttrValue::Map(entries) => join_pairs(entries.iter().map(|(key, entry)| {
            let key = array_index(key).map_or_else(|| AttrValue::from(key), AttrValue::from);
            build(&key, entry, policy)
        })),
        AttrValue::List(items) => {
            join_pairs(items.iter().map(|item| build(item, &value, policy)))
        }
        AttrValue::String(raw) => build_named(raw, &value, policy),
        AttrValue::Number(n) => build_named(&n.to_string(), &value, policy),
        AttrValue::Null | AttrValue::Bool(_) | AttrValue::Deferred(_) => String::new(),
    }
}

fn join_pairs(pairs: impl Iterator<Item = String>) -> String {
    pairs
        .filter(|pair| !pair.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}

fn build_named(raw: &str, value: &AttrValue, policy: NamePolicy) -> String {
    let raw = raw.trim_matches(is_space);

    // Already stringified, like `title="x"` or `async defer`.
    if raw.contains(|c: char| c == '=' || is_space(c)) {
        if !matches!(value, AttrValue::String(text) if text.is_empty()) {
            warn_once(
                "Attributes",
                &format!("ignoring value for attribute fragment '{raw}'"),
            );
        }
        let parsed = AttrValue::from(parse_attribute_string(raw));
        return build(&parsed, &AttrValue::String(String::new()), policy);
    }

    let name = sanitize_attr_name_with(raw, policy);
    if name.is_empty() {
        if !raw.is_empty() {
            warn_once(
                "Attributes",
                &format!("dropping attribute with invalid name '{raw}'"),
            );
        }
        return name;
    }

    match value {
        AttrValue::Bool(true) => name,
        AttrValue::String(text) if text.is_empty() => name,
        _ => {
            let encoded = encode(value, Some(&name));
            if encoded.is_empty() {
                name
            } else {
                format!("{name}='{encoded}'")
            }
        }
    }
}

/// Serialize an attribute, or a whole set of attributes, to a string.
///
/// `name` may be:
/// - a string: one attribute named `name` with `value`. A string holding
///   `=` or whitespace is parsed as an attribute fragment first and `value`
///   is ignored;
/// - a map: every entry, in order (`value` is ignored);
/// - a list: every element as a name sharing `value`;
/// - a non-negative integer: a positional entry, `value` becomes the name.
///
/// Null or `false` values, and null or boolean names, produce nothing.
///
/// ```
/// use phat_html::{AttrValue, build_attribute_string};
///
/// assert_eq!(build_attribute_string(&"disabled".into(), &true.into()), "disabled");
/// assert_eq!(build_attribute_string(&"disabled".into(), &false.into()), "");
/// assert_eq!(build_attribute_string(&"title".into(), &"it's".into()), "title='it&apos;s'");
///
/// let attrs: AttrValue = [("id", AttrValue::from("x")), ("class", AttrValue::from(["a", "b"]))]
///     .into_iter()
///     .collect();
/// assert_eq!(build_attribute_string(&attrs, &"".into()), "id='x' class='a b'");
/// ```
#[must_use]
pub fn build_attribute_string(name: &AttrValue, value: &AttrValue) -> String {
    build(name, value, NamePolicy::Lenient)
}

/// Serialize a set of attributes (map, list, or fragment string).
///
/// ```
/// use phat_html::{attrs, parse_attribute_string};
///
/// let parsed = parse_attribute_string(r#"<a href="x" target=_blank >"#);
/// assert_eq!(attrs(&parsed.into()), "href='x' target='_blank'");
///
/// // A bare value runs up to whitespace, so it keeps a closing `>`.
/// let parsed = parse_attribute_string(r#"<a href="x" target=_blank>"#);
/// assert_eq!(attrs(&parsed.into()), "href='x' target='_blank&gt;'");
/// ```
#[must_use]
pub fn attrs(set: &AttrValue) -> String {
    build_attribute_string(set, &AttrValue::String(String::new()))
}
