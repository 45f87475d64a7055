//! Errors for the textual forms accepted at the edges of the crate.
//!
//! The attribute core itself never fails: malformed input degrades to an
//! empty string or a partial map. Only parsing a delimiter or a delimiter
//! registration from text (as the CLI does) can be rejected.

use thiserror::Error;

/// A delimiter spelling that is neither space- nor comma-separated.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseDelimiterError {
    /// The text names no known delimiter.
    #[error("unknown delimiter '{0}' (expected space, comma, ' ' or ',')")]
    Unknown(String),
}

/// A malformed `NAME=DELIMITER` registration.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseRegistrationError {
    /// No `=` between the attribute name and the delimiter.
    #[error("expected NAME=DELIMITER, got '{0}'")]
    MissingSeparator(String),
    /// The attribute name part is empty.
    #[error("attribute name is empty in '{0}'")]
    EmptyName(String),
    /// The delimiter part is not recognized.
    #[error(transparent)]
    Delimiter(#[from] ParseDelimiterError),
}
