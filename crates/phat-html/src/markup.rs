//! The explicit capability object.
//!
//! [`Markup`] bundles every attribute operation behind one configured value.
//! The free functions at the crate root are the same operations with the
//! default configuration.

use crate::codec::{self, Encoded};
use crate::delimiter::{self, Delimiter};
use crate::names::{self, NamePolicy};
use crate::parser::parse_attribute_string;
use crate::serializer::build;
use crate::tokens;
use crate::value::{AttrValue, AttributeMap};

/// Attribute operations under one configuration.
///
/// ```
/// use phat_html::{AttrValue, Markup, NamePolicy};
///
/// let strict = Markup::new().with_name_policy(NamePolicy::RequireLetterStart);
/// assert_eq!(strict.attr_name("9lives"), "");
/// assert_eq!(Markup::new().attr_name("9lives"), "9lives");
/// assert_eq!(strict.attrs(&"9lives".into(), &"x".into()), "");
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Markup {
    name_policy: NamePolicy,
}

// Most operations do not depend on the configuration yet, but stay methods so
// callers can hold one `Markup` for everything.
#[allow(clippy::unused_self)]
impl Markup {
    /// Default configuration (lenient attribute names).
    #[must_use]
    pub const fn new() -> Self {
        Self {
            name_policy: NamePolicy::Lenient,
        }
    }

    /// Use `policy` when sanitizing attribute names.
    #[must_use]
    pub const fn with_name_policy(mut self, policy: NamePolicy) -> Self {
        self.name_policy = policy;
        self
    }

    /// The attribute name policy in effect.
    #[must_use]
    pub const fn name_policy(&self) -> NamePolicy {
        self.name_policy
    }

    /// Serialize `name` with `value`; see
    /// [`build_attribute_string`](crate::build_attribute_string).
    #[must_use]
    pub fn attrs(&self, name: &AttrValue, value: &AttrValue) -> String {
        build(name, value, self.name_policy)
    }

    /// Serialize a whole attribute set.
    #[must_use]
    pub fn attr_set(&self, set: &AttrValue) -> String {
        build(set, &AttrValue::String(String::new()), self.name_policy)
    }

    /// Parse an attribute string into raw values.
    #[must_use]
    pub fn parse_attrs(&self, raw: &str) -> AttributeMap {
        parse_attribute_string(raw)
    }

    /// Encode a value for the attribute `name`.
    #[must_use]
    pub fn encode(&self, value: &AttrValue, name: Option<&str>) -> String {
        codec::encode(value, name)
    }

    /// Encode, keeping boolean and null literals.
    #[must_use]
    pub fn encode_with(
        &self,
        value: &AttrValue,
        name: Option<&str>,
        preserve_literals: bool,
    ) -> Encoded {
        codec::encode_with(value, name, preserve_literals)
    }

    /// Decode raw text from the attribute `name`.
    #[must_use]
    pub fn decode(&self, raw: &str, name: Option<&str>) -> AttrValue {
        codec::decode(raw, name)
    }

    /// Sanitize a tag name, or read the name of a tag.
    #[must_use]
    pub fn tag_name(&self, input: &str) -> String {
        names::sanitize_tag_name(input)
    }

    /// Sanitize an attribute name under this configuration's policy.
    #[must_use]
    pub fn attr_name(&self, input: &str) -> String {
        names::sanitize_attr_name_with(input, self.name_policy)
    }

    /// Deep-join tokens.
    #[must_use]
    pub fn implode(&self, tokens: &AttrValue, glue: &str) -> String {
        tokens::join_deep(tokens, glue)
    }

    /// Split tokens on one or more delimiters.
    #[must_use]
    pub fn explode(&self, tokens: &AttrValue, glue: &[&str]) -> Vec<String> {
        tokens::split_tokens(tokens, glue)
    }

    /// The delimiter registered for `name`.
    #[must_use]
    pub fn delimiter(&self, name: &str) -> Option<Delimiter> {
        delimiter::get_delimiter(name)
    }

    /// Register a delimiter for `name` unless it already has one.
    pub fn register_delimiter(&self, name: &str, delimiter: Delimiter) {
        delimiter::register_delimiter(name, delimiter);
    }
}
