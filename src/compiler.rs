//! Compilation of normalized patterns into a single matching expression.

use crate::error::Result;
use crate::grammar::TOKEN_EXPR;
use crate::matcher::MimeMatcher;
use crate::pattern::MimePattern;
use regex::RegexBuilder;

/// Matches end of input, the start of parameters, or whitespace.
///
/// Whitespace is the ECMAScript `WhiteSpace` and `LineTerminator` set: it
/// includes U+FEFF and excludes U+0085, unlike the `regex` crate's `\s`.
/// The class is evaluated in Unicode mode while the rest of the expression
/// is built with Unicode mode off.
const TYPE_END_EXPR: &str = concat!(
    r"(?:$|;|(?u:[\t\n\x0B\x0C\r \x{A0}\x{1680}\x{2000}-\x{200A}",
    r"\x{2028}\x{2029}\x{202F}\x{205F}\x{3000}\x{FEFF}]))"
);

/// Translates one pattern into a regex fragment for its `type/subtype` span.
pub(crate) fn pattern_to_expression(pattern: &MimePattern) -> String {
    let main = match pattern.main_type() {
        "*" => TOKEN_EXPR.to_string(),
        literal => regex::escape(literal),
    };

    let sub = pattern.subtype();
    let sub = if sub == "*" {
        TOKEN_EXPR.to_string()
    } else if let Some(suffix) = pattern.suffix() {
        format!("{}{}", TOKEN_EXPR, regex::escape(suffix))
    } else {
        regex::escape(sub)
    };

    format!("{}/{}", main, sub)
}

/// Compiles a single pattern.
pub(crate) fn compile_single(pattern: MimePattern) -> Result<MimeMatcher> {
    let expression = format!("^{}{}", pattern_to_expression(&pattern), TYPE_END_EXPR);
    build(expression, vec![pattern])
}

/// Compiles several patterns into one alternation.
pub(crate) fn compile_multi(patterns: Vec<MimePattern>) -> Result<MimeMatcher> {
    let alternatives: Vec<String> = patterns.iter().map(pattern_to_expression).collect();
    let expression = format!("^(?:{}){}", alternatives.join("|"), TYPE_END_EXPR);
    build(expression, patterns)
}

fn build(expression: String, patterns: Vec<MimePattern>) -> Result<MimeMatcher> {
    // ASCII-only case folding: with Unicode on, `k` would also match U+212A.
    let regex = RegexBuilder::new(&expression)
        .case_insensitive(true)
        .unicode(false)
        .build()?;

    tracing::trace!(
        patterns = patterns.len(),
        expression = %expression,
        "compiled MIME matcher"
    );

    Ok(MimeMatcher::new(regex, patterns))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pattern::normalize;

    fn expr(pattern: &str) -> String {
        pattern_to_expression(&normalize(pattern).unwrap())
    }

    #[test]
    fn test_literal_fragment() {
        assert_eq!(expr("text/html"), "text/html");
        assert_eq!(expr("application/vnd.api+json"), r"application/vnd\.api\+json");
        assert_eq!(expr("a$b/c^d|e-f"), r"a\$b/c\^d\|e\-f");
    }

    #[test]
    fn test_wildcard_fragments() {
        assert_eq!(expr("*/*"), format!("{TOKEN_EXPR}/{TOKEN_EXPR}"));
        assert_eq!(expr("text/*"), format!("text/{TOKEN_EXPR}"));
        assert_eq!(expr("*/png"), format!("{TOKEN_EXPR}/png"));
    }

    #[test]
    fn test_suffix_fragment() {
        assert_eq!(expr("application/*+json"), format!(r"application/{TOKEN_EXPR}\+json"));
        assert_eq!(expr("+xml"), format!(r"{TOKEN_EXPR}/{TOKEN_EXPR}\+xml"));
    }

    #[test]
    fn test_star_inside_literal_is_escaped() {
        // Only a whole-half `*` or a leading `*+` is a wildcard.
        assert_eq!(expr("something/bogus*"), r"something/bogus\*");
        assert_eq!(expr("te*t/html"), r"te\*t/html");
    }

    #[test]
    fn test_compile_single_expression() {
        let m = compile_single(normalize("text/html").unwrap()).unwrap();
        assert_eq!(m.as_str(), format!("^text/html{TYPE_END_EXPR}"));
        assert_eq!(m.patterns().len(), 1);
    }

    #[test]
    fn test_compile_multi_expression() {
        let patterns = vec![normalize("text/html").unwrap(), normalize("image/png").unwrap()];
        let m = compile_multi(patterns).unwrap();
        assert_eq!(m.as_str(), format!("^(?:text/html|image/png){TYPE_END_EXPR}"));
        assert_eq!(m.patterns().len(), 2);
    }

    #[test]
    fn test_case_folding_is_ascii_only() {
        let m = compile_single(normalize("application/vnd.kde").unwrap()).unwrap();
        assert!(m.is_match("APPLICATION/VND.KDE"));
        assert!(!m.is_match("application/vnd.\u{212A}de"));
    }

    #[test]
    fn test_unicode_whitespace_boundary() {
        let m = compile_single(normalize("text/html").unwrap()).unwrap();
        for ws in ["\u{a0}", "\u{1680}", "\u{2003}", "\u{2028}", "\u{3000}", "\u{feff}", "\x0b", "\x0c"] {
            assert!(m.is_match(&format!("text/html{ws}; charset=utf-8")), "{ws:?}");
        }
        for not_ws in ["\u{85}", "\u{200b}", "\u{180e}"] {
            assert!(!m.is_match(&format!("text/html{not_ws}")), "{not_ws:?}");
        }
    }
}
