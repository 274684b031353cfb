//! MIME type patterns and their normalization.
//!
//! A pattern is a `type/subtype` pair where either half may be the `*`
//! wildcard and the subtype may be a `*+suffix` wildcard. The `+suffix`
//! short-form is accepted as sugar for `*/*+suffix`.

use crate::error::{Error, Result};
use crate::grammar::is_token;
use std::fmt;
use std::str::FromStr;

/// A validated MIME type pattern, such as `text/*` or `application/*+json`.
///
/// Always in `type/subtype` form; the `+suffix` short-form is expanded
/// during [`normalize`]. Letter case is kept as supplied, since matching is
/// case-insensitive anyway.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct MimePattern {
    pattern: String,
    slash: usize,
}

impl MimePattern {
    /// Returns the pattern in `type/subtype` form.
    pub fn as_str(&self) -> &str {
        &self.pattern
    }

    /// Returns the part before the `/`.
    pub fn main_type(&self) -> &str {
        &self.pattern[..self.slash]
    }

    /// Returns the part after the `/`.
    pub fn subtype(&self) -> &str {
        &self.pattern[self.slash + 1..]
    }

    /// Returns the `+suffix` of a `*+suffix` subtype, including the `+`.
    ///
    /// Literal subtypes that merely contain a `+` (such as `vnd+json`) have
    /// no suffix wildcard and return `None`.
    pub fn suffix(&self) -> Option<&str> {
        self.subtype().strip_prefix('*').filter(|s| s.starts_with('+'))
    }
}

/// Validates a pattern and expands the `+suffix` short-form.
///
/// # Examples
///
/// ```
/// use mime_match::normalize;
///
/// assert_eq!(normalize("+json").unwrap().as_str(), "*/*+json");
/// assert_eq!(normalize("text/*").unwrap().subtype(), "*");
/// assert!(normalize("text/html/").is_err());
/// ```
pub fn normalize(pattern: &str) -> Result<MimePattern> {
    let expanded = if pattern.starts_with('+') {
        format!("*/*{}", pattern)
    } else {
        pattern.to_string()
    };

    match expanded.split_once('/') {
        Some((main, sub)) if is_token(main) && is_token(sub) => Ok(MimePattern {
            slash: main.len(),
            pattern: expanded,
        }),
        _ => {
            tracing::debug!(pattern, "rejected malformed MIME type pattern");
            Err(Error::InvalidFormat {
                pattern: pattern.to_string(),
            })
        }
    }
}

impl FromStr for MimePattern {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        normalize(s)
    }
}

impl fmt::Display for MimePattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.pattern)
    }
}

impl AsRef<str> for MimePattern {
    fn as_ref(&self) -> &str {
        &self.pattern
    }
}
