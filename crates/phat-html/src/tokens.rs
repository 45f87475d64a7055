//! Deep join and delimiter-aware split of token lists.
//!
//! These back the encoding of multi-valued attributes (`class`, `accept`, ...)
//! and are useful on their own for normalizing token input.

use std::borrow::Cow;

use crate::is_space;
use crate::value::AttrValue;

/// Trim the whitespace set used throughout the crate.
fn trim(text: &str) -> &str {
    text.trim_matches(is_space)
}

/// Join tokens into a single string, flattening nested lists and maps
/// depth-first.
///
/// A scalar is returned trimmed. Null and empty composites give `""`.
///
/// ```
/// use phat_html::{AttrValue, join_deep};
///
/// let tokens = AttrValue::List(vec!["a".into(), vec![" b ", "c"].into()]);
/// assert_eq!(join_deep(&tokens, " "), "a b c");
/// ```
#[must_use]
pub fn join_deep(tokens: &AttrValue, glue: &str) -> String {
    let tokens = tokens.resolve();
    match tokens.as_ref() {
        AttrValue::List(items) => items
            .iter()
            .map(|item| join_deep(item, glue))
            .collect::<Vec<_>>()
            .join(glue),
        AttrValue::Map(entries) => entries
            .values()
            .map(|item| join_deep(item, glue))
            .collect::<Vec<_>>()
            .join(glue),
        scalar => scalar
            .scalar_text()
            .map(|text| trim(&text).to_owned())
            .unwrap_or_default(),
    }
}

/// Split tokens on a delimiter.
///
/// `glue` lists one or more candidate delimiters. Every candidate is first
/// normalized to the first one, then the text is split on it. A delimiter
/// made only of whitespace splits on whitespace runs instead. An empty
/// `glue` means a single space.
///
/// Composites are flattened with [`join_deep`] first. A non-string scalar
/// becomes a one-element list; null and blank text give an empty list.
#[must_use]
pub fn split_tokens(tokens: &AttrValue, glue: &[&str]) -> Vec<String> {
    let tokens = tokens.resolve();
    match tokens.as_ref() {
        AttrValue::String(text) => split_text(text, glue),
        AttrValue::List(_) | AttrValue::Map(_) => {
            let primary = glue.first().copied().unwrap_or(" ");
            split_text(&join_deep(&tokens, primary), glue)
        }
        AttrValue::Null => Vec::new(),
        scalar => scalar
            .scalar_text()
            .map(Cow::into_owned)
            .into_iter()
            .collect(),
    }
}

/// [`split_tokens`] for plain text.
///
/// ```
/// use phat_html::split_text;
///
/// assert_eq!(split_text("  a \t b ", &[" "]), ["a", "b"]);
/// assert_eq!(split_text("a,b;c", &[",", ";"]), ["a", "b", "c"]);
/// ```
#[must_use]
pub fn split_text(text: &str, glue: &[&str]) -> Vec<String> {
    let text = trim(text);
    if text.is_empty() {
        return Vec::new();
    }

    let primary = glue.first().copied().unwrap_or(" ");
    let normalized = glue
        .iter()
        .skip(1)
        .filter(|alt| !alt.is_empty() && **alt != primary)
        .fold(Cow::Borrowed(text), |acc, alt| {
            Cow::Owned(acc.replace(*alt, primary))
        });

    if primary.is_empty() {
        vec![normalized.into_owned()]
    } else if primary.chars().all(is_space) {
        normalized
            .split(is_space)
            .filter(|token| !token.is_empty())
            .map(str::to_owned)
            .collect()
    } else {
        normalized.split(primary).map(str::to_owned).collect()
    }
}
