//! HTML attribute strings: parsing, serialization and value encoding.
//!
//! # Scope
//!
//! This crate implements:
//! - **Attribute serializer** ([`build_attribute_string`], [`attrs`])
//!   - Name sanitizing, boolean attribute collapsing, single-quoted values
//!   - Maps, positional lists and pre-stringified fragments
//! - **Attribute parser** ([`parse_attribute_string`])
//!   - Quoted, bare and boolean attributes; optional leading tag
//! - **Value codec** ([`encode`], [`decode`])
//!   - Entity escaping, JSON fallback, token lists for multi-valued attributes
//! - **Delimiter table** ([`get_delimiter`], [`register_delimiter`])
//! - **Name sanitizers** ([`sanitize_tag_name`], [`sanitize_attr_name`])
//! - **Token helpers** ([`join_deep`], [`split_tokens`])
//!
//! # Not Implemented
//!
//! - Full HTML5 attribute tokenization and error recovery
//! - Building whole tags or DOM trees
//!
//! # Example
//!
//! ```
//! use phat_html::{AttrValue, attrs, decode, parse_attribute_string};
//!
//! let set: AttrValue = [
//!     ("id", AttrValue::from("main")),
//!     ("class", AttrValue::from(["card", "wide"])),
//!     ("data-size", AttrValue::from(3)),
//!     ("hidden", AttrValue::from(true)),
//! ]
//! .into_iter()
//! .collect();
//! let html = attrs(&set);
//! assert_eq!(html, "id='main' class='card wide' data-size='3' hidden");
//!
//! let parsed = parse_attribute_string(&html);
//! assert_eq!(decode(&parsed["class"], Some("class")), AttrValue::from(["card", "wide"]));
//! assert_eq!(decode(&parsed["data-size"], Some("data-size")), AttrValue::from(3));
//! ```

/// Attribute value encoding and decoding.
pub mod codec;
/// Delimiters for multi-valued attributes.
pub mod delimiter;
/// Output wrappers writing results to a sink.
pub mod echo;
/// HTML character references.
pub mod entities;
/// Errors for textual delimiter input.
pub mod error;
/// Configured access to every operation.
pub mod markup;
/// Tag and attribute name sanitizers.
pub mod names;
/// Attribute string parser.
pub mod parser;
/// Attribute string serializer.
pub mod serializer;
/// Whitespace and CDATA helpers.
pub mod text;
/// Token list join and split.
pub mod tokens;
/// Attribute values.
pub mod value;

pub use codec::{Encoded, decode, encode, encode_with};
pub use delimiter::{Delimiter, DelimiterRegistration, get_delimiter, register_delimiter};
pub use echo::Echo;
pub use error::{ParseDelimiterError, ParseRegistrationError};
pub use markup::Markup;
pub use names::{NamePolicy, sanitize_attr_name, sanitize_attr_name_with, sanitize_tag_name};
pub use parser::{AttributeParser, parse_attribute_string};
pub use serializer::{attrs, build_attribute_string};
pub use tokens::{join_deep, split_text, split_tokens};
pub use value::{AttrValue, AttributeMap};

/// Whitespace as used for separating attributes and tokens: space, tab,
/// line feed, vertical tab, form feed and carriage return.
pub(crate) const fn is_space(c: char) -> bool {
    matches!(c, ' ' | '\t' | '\n' | '\x0B' | '\x0C' | '\r')
}
