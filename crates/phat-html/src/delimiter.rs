//! Token-list delimiters for multi-valued attributes.
//!
//! Some attributes hold a list of tokens rather than a single value: `class`
//! is space-separated, `accept` is comma-separated. The table here decides how
//! list values are joined by the encoder and split again by the decoder.
//!
//! The table is process-wide. It is populated with the built-in entries on
//! first use and can be extended afterwards, but an entry, once present, never
//! changes.

use std::collections::HashMap;
use std::str::FromStr;
use std::sync::{LazyLock, PoisonError, RwLock};

use strum_macros::{Display, EnumIter};

use crate::error::{ParseDelimiterError, ParseRegistrationError};

/// How the tokens of a multi-valued attribute are separated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumIter)]
pub enum Delimiter {
    /// Space-separated tokens (SSV), split on any whitespace run.
    #[strum(to_string = "space")]
    Space,
    /// Comma-separated tokens (CSV).
    #[strum(to_string = "comma")]
    Comma,
}

impl Delimiter {
    /// The separator inserted between joined tokens.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Space => " ",
            Self::Comma => ",",
        }
    }
}

impl FromStr for Delimiter {
    type Err = ParseDelimiterError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            " " => Ok(Self::Space),
            "," => Ok(Self::Comma),
            _ => match s.trim().to_ascii_lowercase().as_str() {
                "space" | "ssv" => Ok(Self::Space),
                "comma" | "csv" => Ok(Self::Comma),
                _ => Err(ParseDelimiterError::Unknown(s.to_owned())),
            },
        }
    }
}

// whatwg.org/specs/web-apps/current-work/multipage/microdata.html#names:-the-itemprop-attribute
const SPACE_SEPARATED: [&str; 9] = [
    "class",
    "rel",
    "itemprop",
    "accesskey",
    "dropzone",
    "headers",
    "sizes",
    "sandbox",
    "accept-charset",
];

const COMMA_SEPARATED: [&str; 2] = ["accept", "media"];

static TABLE: LazyLock<RwLock<HashMap<String, Delimiter>>> = LazyLock::new(|| {
    let builtin = COMMA_SEPARATED
        .iter()
        .map(|name| ((*name).to_owned(), Delimiter::Comma))
        .chain(
            SPACE_SEPARATED
                .iter()
                .map(|name| ((*name).to_owned(), Delimiter::Space)),
        )
        .collect();
    RwLock::new(builtin)
});

/// Look up the delimiter for an attribute name (case-insensitive).
///
/// `None` means the attribute is a single opaque value.
#[must_use]
pub fn get_delimiter(name: &str) -> Option<Delimiter> {
    TABLE
        .read()
        .unwrap_or_else(PoisonError::into_inner)
        .get(&name.to_lowercase())
        .copied()
}

/// Register a delimiter for an attribute name.
///
/// The first registration for a name wins; registering a name that already
/// has an entry (built-in or not) does nothing.
pub fn register_delimiter(name: &str, delimiter: Delimiter) {
    let key = name.to_lowercase();
    if key.is_empty() {
        return;
    }
    let _ = TABLE
        .write()
        .unwrap_or_else(PoisonError::into_inner)
        .entry(key)
        .or_insert(delimiter);
}

/// Every registered attribute name with its delimiter, sorted by name.
#[must_use]
pub fn delimiter_entries() -> Vec<(String, Delimiter)> {
    let mut entries: Vec<_> = TABLE
        .read()
        .unwrap_or_else(PoisonError::into_inner)
        .iter()
        .map(|(name, delimiter)| (name.clone(), *delimiter))
        .collect();
    entries.sort_by(|a, b| a.0.cmp(&b.0));
    entries
}

/// A `NAME=DELIMITER` pair as written on the command line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DelimiterRegistration {
    /// Attribute name.
    pub name: String,
    /// Delimiter for that attribute's tokens.
    pub delimiter: Delimiter,
}

impl DelimiterRegistration {
    /// Add this pair to the process-wide table.
    pub fn register(&self) {
        register_delimiter(&self.name, self.delimiter);
    }
}

impl FromStr for DelimiterRegistration {
    type Err = ParseRegistrationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let Some((name, delimiter)) = s.split_once('=') else {
            return Err(ParseRegistrationError::MissingSeparator(s.to_owned()));
        };
        let name = name.trim();
        if name.is_empty() {
            return Err(ParseRegistrationError::EmptyName(s.to_owned()));
        }
        Ok(Self {
            name: name.to_owned(),
            delimiter: delimiter.parse()?,
        })
    }
}
