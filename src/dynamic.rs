//! Untyped entry point and serde integration.
//!
//! Patterns coming from bindings or configuration files are not known to be
//! strings until they are inspected, so this is where the "not a string"
//! error kind is raised.

use crate::compiler::{compile_multi, compile_single};
use crate::error::{Error, Result};
use crate::input::compile_mime_match;
use crate::matcher::MimeMatcher;
use crate::pattern::{normalize, MimePattern};
use serde::de::{self, Deserialize, Deserializer, SeqAccess, Visitor};
use serde::ser::{Serialize, SerializeSeq, Serializer};
use serde_json::Value;
use std::fmt;

/// Returns the JSON type name of a value, as used in error messages.
fn type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

/// Normalizes one element of an untyped pattern list.
fn normalize_value(value: &Value) -> Result<MimePattern> {
    match value {
        Value::String(s) => normalize(s),
        other => Err(Error::InvalidType(type_name(other).to_string())),
    }
}

/// Compiles patterns held in an untyped JSON value.
///
/// Accepts a string or an array of strings and otherwise behaves like
/// [`compile_mime_match`].
///
/// # Errors
///
/// Elements are checked in order and the first failure is returned:
/// [`Error::InvalidType`] for a value that is not a string,
/// [`Error::InvalidFormat`] for a malformed one. An empty array has no
/// pattern to inspect and is reported as `InvalidType("undefined")`.
///
/// # Examples
///
/// ```
/// use mime_match::compile_mime_match_value;
/// use serde_json::json;
///
/// let matcher = compile_mime_match_value(&json!(["text/*", "+json"])).unwrap();
/// assert!(matcher.is_match("application/vnd.api+json"));
///
/// let err = compile_mime_match_value(&json!(["text/plain", false])).unwrap_err();
/// assert_eq!(err.to_string(), "MIME type must be a string. Got 'boolean'.");
/// ```
pub fn compile_mime_match_value(value: &Value) -> Result<MimeMatcher> {
    match value {
        Value::String(s) => compile_mime_match(s.as_str()),
        Value::Array(items) => match items.as_slice() {
            [] => Err(Error::InvalidType("undefined".to_string())),
            [single] => compile_single(normalize_value(single)?),
            items => {
                let normalized = items
                    .iter()
                    .map(normalize_value)
                    .collect::<Result<Vec<MimePattern>>>()?;
                compile_multi(normalized)
            }
        },
        other => Err(Error::InvalidType(type_name(other).to_string())),
    }
}

impl Serialize for MimePattern {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for MimePattern {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        normalize(&s).map_err(de::Error::custom)
    }
}

impl Serialize for MimeMatcher {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        match self.patterns() {
            [single] => single.serialize(serializer),
            patterns => {
                let mut seq = serializer.serialize_seq(Some(patterns.len()))?;
                for pattern in patterns {
                    seq.serialize_element(pattern)?;
                }
                seq.end()
            }
        }
    }
}

struct MatcherVisitor;

impl<'de> Visitor<'de> for MatcherVisitor {
    type Value = MimeMatcher;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a MIME type pattern or a sequence of MIME type patterns")
    }

    fn visit_str<E: de::Error>(self, v: &str) -> std::result::Result<MimeMatcher, E> {
        compile_mime_match(v).map_err(E::custom)
    }

    fn visit_seq<A: SeqAccess<'de>>(self, mut seq: A) -> std::result::Result<MimeMatcher, A::Error> {
        let mut patterns: Vec<String> = Vec::with_capacity(seq.size_hint().unwrap_or(0));
        while let Some(pattern) = seq.next_element()? {
            patterns.push(pattern);
        }
        compile_mime_match(patterns).map_err(de::Error::custom)
    }
}

impl<'de> Deserialize<'de> for MimeMatcher {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        deserializer.deserialize_any(MatcherVisitor)
    }
}
