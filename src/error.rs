//! Error types for the mime-match crate.

use thiserror::Error;

/// The main error type for the mime-match crate.
///
/// Every variant is produced while compiling patterns. Matching itself
/// never fails.
#[derive(Error, Debug)]
pub enum Error {
    /// A pattern element was not a string (untyped entry point only).
    ///
    /// Holds the name of the type that was encountered.
    #[error("MIME type must be a string. Got '{0}'.")]
    InvalidType(String),

    /// A pattern failed the `type/subtype` or `+suffix` grammar.
    #[error("MIME type must be in the \"type/subtype\" format or the \"+suffix\" short-form")]
    InvalidFormat {
        /// The offending pattern, as supplied.
        pattern: String,
    },

    /// An empty sequence of patterns was supplied.
    #[error("at least one MIME type pattern is required")]
    NoPatterns,

    /// The regex engine refused the compiled expression.
    #[error("failed to build MIME matcher: {0}")]
    Regex(#[from] regex::Error),
}

impl Error {
    /// Reports whether this is the "not a string" error kind.
    pub fn is_type_error(&self) -> bool {
        matches!(self, Error::InvalidType(_))
    }

    /// Reports whether this is the malformed-pattern error kind.
    pub fn is_format_error(&self) -> bool {
        matches!(self, Error::InvalidFormat { .. })
    }
}

/// Specialized Result type for mime-match operations.
pub type Result<T> = std::result::Result<T, Error>;
