//! Tag and attribute name sanitizers.
//!
//! Both functions reduce arbitrary input to a syntactically valid name,
//! possibly empty. Neither ever fails.
//!
//! - w3.org/TR/html-markup/syntax.html#tag-name
//! - w3.org/TR/html-markup/syntax.html#syntax-attributes
//! - w3.org/TR/REC-xml/#NT-Name

use strum_macros::{Display, EnumIter};

use crate::is_space;

/// Whether an attribute name must start with a particular character.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Display, EnumIter)]
pub enum NamePolicy {
    /// Any sequence of allowed characters is a valid name.
    #[default]
    #[strum(to_string = "lenient")]
    Lenient,
    /// The name must start with a letter or an underscore; anything else
    /// sanitizes to the empty string.
    #[strum(to_string = "letter-start")]
    RequireLetterStart,
}

/// ASCII word characters plus `:`, `.` and `-`.
const fn is_tag_name_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || matches!(c, '_' | ':' | '.' | '-')
}

/// Unicode letters, ASCII digits, `_`, `:`, `.` and `-`.
fn is_attr_name_char(c: char) -> bool {
    c.is_alphabetic() || c.is_ascii_digit() || matches!(c, '_' | ':' | '.' | '-')
}

/// Sanitize a tag name, or read the tag name of a tag.
///
/// Skips leading whitespace and `<` characters, then keeps the longest run of
/// name characters and discards the rest.
///
/// ```
/// use phat_html::sanitize_tag_name;
///
/// assert_eq!(sanitize_tag_name("<img src=x>"), "img");
/// assert_eq!(sanitize_tag_name("  svg:rect "), "svg:rect");
/// ```
#[must_use]
pub fn sanitize_tag_name(input: &str) -> String {
    input
        .trim_start_matches(is_space)
        .trim_start_matches('<')
        .chars()
        .take_while(|&c| is_tag_name_char(c))
        .collect()
}

/// Sanitize an attribute name with the lenient policy.
///
/// Cuts everything from the first `=` or `>` onward, then drops every
/// character outside the allowed set.
#[must_use]
pub fn sanitize_attr_name(input: &str) -> String {
    sanitize_attr_name_with(input, NamePolicy::Lenient)
}

/// Sanitize an attribute name under the given policy.
#[must_use]
pub fn sanitize_attr_name_with(input: &str, policy: NamePolicy) -> String {
    let head = input.split(['=', '>']).next().unwrap_or_default();
    let name: String = head.chars().filter(|&c| is_attr_name_char(c)).collect();
    match policy {
        NamePolicy::Lenient => name,
        NamePolicy::RequireLetterStart => {
            if name.starts_with(|c: char| c.is_alphabetic() || c == '_') {
                name
            } else {
                String::new()
            }
        }
    }
}
