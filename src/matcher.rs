//! The compiled matcher.

use crate::error::{Error, Result};
use crate::pattern::MimePattern;
use regex::Regex;
use std::fmt;
use std::str::FromStr;

/// A compiled set of MIME type patterns.
///
/// Built once by [`compile_mime_match`](crate::compile_mime_match) and then
/// tested against any number of candidate MIME types. Immutable, cheap to
/// clone, and safe to share between threads.
///
/// # Examples
///
/// ```
/// use mime_match::compile_mime_match;
///
/// let matcher = compile_mime_match(["image/*", "+json"]).unwrap();
/// assert!(matcher.is_match("image/png"));
/// assert!(matcher.is_match("application/ld+json; charset=utf-8"));
/// assert!(!matcher.is_match("text/html"));
/// ```
#[derive(Debug, Clone)]
pub struct MimeMatcher {
    regex: Regex,
    patterns: Vec<MimePattern>,
}

impl MimeMatcher {
    pub(crate) fn new(regex: Regex, patterns: Vec<MimePattern>) -> Self {
        Self { regex, patterns }
    }

    /// Reports whether the candidate MIME type satisfies any of the patterns.
    ///
    /// Only the leading `type/subtype` is considered; anything after a `;` or
    /// whitespace is ignored. Malformed candidates simply do not match.
    pub fn is_match(&self, candidate: &str) -> bool {
        self.regex.is_match(candidate)
    }

    /// Returns the normalized patterns this matcher was compiled from.
    pub fn patterns(&self) -> &[MimePattern] {
        &self.patterns
    }

    /// Returns the source of the compiled regular expression.
    pub fn as_str(&self) -> &str {
        self.regex.as_str()
    }
}

impl FromStr for MimeMatcher {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        crate::compile_mime_match(s)
    }
}

impl fmt::Display for MimeMatcher {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, pattern) in self.patterns.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{}", pattern)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use std::thread;

    #[test]
    fn test_is_match_ignores_params() {
        let m: MimeMatcher = "text/html".parse().unwrap();
        assert!(m.is_match("text/html"));
        assert!(m.is_match("text/html;charset=utf-8"));
        assert!(m.is_match("text/html; charset=utf-8"));
        assert!(m.is_match("text/html ; charset=utf-8"));
        assert!(m.is_match("text/html\t;charset=utf-8"));
        assert!(m.is_match("text/html; ===malformed"));
        assert!(!m.is_match("text/htmlx"));
        assert!(!m.is_match("text/html/"));
        assert!(!m.is_match(" text/html"));
    }

    #[test]
    fn test_display() {
        let m = crate::compile_mime_match(["text/*", "+json"]).unwrap();
        assert_eq!(m.to_string(), "text/*, */*+json");
    }

    #[test]
    fn test_from_str_rejects_malformed() {
        let err = "bogus".parse::<MimeMatcher>().unwrap_err();
        assert!(err.is_format_error());
    }

    #[test]
    fn test_send_sync_clone() {
        fn assert_send_sync<T: Send + Sync + Clone>() {}
        assert_send_sync::<MimeMatcher>();
    }

    #[test]
    fn test_concurrent_use() {
        let m = Arc::new(crate::compile_mime_match(["image/*", "text/*+json"]).unwrap());
        let handles: Vec<_> = (0..4)
            .map(|_| {
                let m = Arc::clone(&m);
                thread::spawn(move || {
                    (0..100).all(|_| {
                        m.is_match("image/png")
                            && m.is_match("text/calendar+json")
                            && !m.is_match("text/html")
                    })
                })
            })
            .collect();
        for h in handles {
            assert!(h.join().unwrap());
        }
    }
}
