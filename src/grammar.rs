//! Grammar validation helpers for MIME tokens.
//!
//! Based on the RFC 7230 `token` definition, which is stricter than the
//! RFC 2045 one (braces, for example, are excluded).

/// Regex character class matching one or more token characters.
///
/// Meant for a regex compiled with Unicode mode off; the class only
/// contains ASCII.
pub const TOKEN_EXPR: &str = r"[!#$%&'*+.^_`|~0-9A-Za-z\-]+";

/// Reports whether the character is a `tchar` as defined by RFC 7230.
///
/// tchar := "!" / "#" / "$" / "%" / "&" / "'" / "*" / "+" / "-" / "." /
///          "^" / "_" / "`" / "|" / "~" / DIGIT / ALPHA
pub fn is_token_char(c: char) -> bool {
    c.is_ascii_alphanumeric()
        || matches!(
            c,
            '!' | '#' | '$' | '%' | '&' | '\'' | '*' | '+' | '-' | '.' | '^' | '_' | '`' | '|' | '~'
        )
}

/// Reports whether the string is a valid token.
///
/// A token must be non-empty and contain only valid token characters.
pub fn is_token(s: &str) -> bool {
    !s.is_empty() && s.chars().all(is_token_char)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_token_char() {
        assert!(is_token_char('a'));
        assert!(is_token_char('Z'));
        assert!(is_token_char('0'));
        for c in "!#$%&'*+-.^_`|~".chars() {
            assert!(is_token_char(c), "{c:?} should be a token char");
        }

        assert!(!is_token_char(' '));
        assert!(!is_token_char('\t'));
        assert!(!is_token_char('/'));
        assert!(!is_token_char(';'));
        assert!(!is_token_char('{'));
        assert!(!is_token_char('['));
        assert!(!is_token_char('"'));
        assert!(!is_token_char('\x1f')); // control character
        assert!(!is_token_char('é'));
    }

    #[test]
    fn test_is_token() {
        assert!(is_token("text"));
        assert!(is_token("vnd.api+json"));
        assert!(is_token("*"));
        assert!(is_token("*+json"));

        assert!(!is_token(""));
        assert!(!is_token("text/plain"));
        assert!(!is_token("with space"));
        assert!(!is_token("html{}"));
    }

    #[test]
    fn test_token_expr_agrees_with_is_token() {
        let re = regex::RegexBuilder::new(&format!("^{TOKEN_EXPR}$"))
            .unicode(false)
            .build()
            .unwrap();
        for s in ["text", "vnd.api+json", "a!#$%&'*+-.^_`|~z", "x-Y_9"] {
            assert!(re.is_match(s), "{s:?}");
            assert!(is_token(s), "{s:?}");
        }
        for s in ["", "a/b", "a b", "a;b", "[x]", "{}"] {
            assert!(!re.is_match(s), "{s:?}");
            assert!(!is_token(s), "{s:?}");
        }
    }
}
