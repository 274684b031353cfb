//! The compilation entry point and the pattern input it accepts.

use crate::compiler::{compile_multi, compile_single};
use crate::error::{Error, Result};
use crate::matcher::MimeMatcher;
use crate::pattern::{normalize, MimePattern};
use std::borrow::Cow;

/// One pattern or a sequence of patterns.
///
/// Usually built implicitly through the `From` impls, so callers pass a
/// `&str`, `String`, array, slice or `Vec` straight to
/// [`compile_mime_match`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Patterns<'a> {
    /// A single pattern.
    One(Cow<'a, str>),
    /// A sequence of patterns, matched with OR semantics.
    Many(Vec<Cow<'a, str>>),
}

impl<'a> From<&'a str> for Patterns<'a> {
    fn from(s: &'a str) -> Self {
        Patterns::One(Cow::Borrowed(s))
    }
}

impl<'a> From<&'a String> for Patterns<'a> {
    fn from(s: &'a String) -> Self {
        Patterns::One(Cow::Borrowed(s.as_str()))
    }
}

impl From<String> for Patterns<'static> {
    fn from(s: String) -> Self {
        Patterns::One(Cow::Owned(s))
    }
}

impl<'a, S: AsRef<str>> From<&'a [S]> for Patterns<'a> {
    fn from(items: &'a [S]) -> Self {
        Patterns::Many(items.iter().map(|s| Cow::Borrowed(s.as_ref())).collect())
    }
}

impl<'a, S: AsRef<str>> From<&'a Vec<S>> for Patterns<'a> {
    fn from(items: &'a Vec<S>) -> Self {
        Patterns::from(items.as_slice())
    }
}

impl<'a, S: AsRef<str>, const N: usize> From<&'a [S; N]> for Patterns<'a> {
    fn from(items: &'a [S; N]) -> Self {
        Patterns::from(items.as_slice())
    }
}

impl<'a, S: Into<Cow<'a, str>>> From<Vec<S>> for Patterns<'a> {
    fn from(items: Vec<S>) -> Self {
        Patterns::Many(items.into_iter().map(Into::into).collect())
    }
}

impl<'a, S: Into<Cow<'a, str>>, const N: usize> From<[S; N]> for Patterns<'a> {
    fn from(items: [S; N]) -> Self {
        Patterns::Many(items.into_iter().map(Into::into).collect())
    }
}

/// Compiles one or more MIME type patterns into a [`MimeMatcher`].
///
/// Accepted pattern forms:
/// - `type/subtype` (`text/html`)
/// - wildcards in either half (`text/*`, `*/html`, `*/*`)
/// - a suffix wildcard in the subtype (`application/*+json`)
/// - the `+suffix` short-form for `*/*+suffix` (`+json`)
///
/// A sequence of patterns matches when any one of them does. A sequence
/// with a single element behaves exactly like that element on its own.
///
/// # Errors
///
/// Returns [`Error::InvalidFormat`] for the first malformed pattern and
/// [`Error::NoPatterns`] for an empty sequence.
///
/// # Examples
///
/// ```
/// use mime_match::compile_mime_match;
///
/// let is_text = compile_mime_match("text/*").unwrap();
/// assert!(is_text.is_match("text/html; charset=utf-8"));
/// assert!(!is_text.is_match("image/png"));
///
/// let accepted = compile_mime_match(vec!["*/png", "text/*+json"]).unwrap();
/// assert!(accepted.is_match("text/calendar+json"));
///
/// assert!(compile_mime_match("text/html{}").is_err());
/// ```
pub fn compile_mime_match<'a>(input: impl Into<Patterns<'a>>) -> Result<MimeMatcher> {
    match input.into() {
        Patterns::One(pattern) => compile_single(normalize(&pattern)?),
        Patterns::Many(mut patterns) => match patterns.len() {
            0 => Err(Error::NoPatterns),
            1 => compile_single(normalize(&patterns.remove(0))?),
            _ => {
                let normalized = patterns
                    .iter()
                    .map(|p| normalize(p))
                    .collect::<Result<Vec<MimePattern>>>()?;
                compile_multi(normalized)
            }
        },
    }
}
