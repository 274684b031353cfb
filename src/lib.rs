//! Compile MIME type patterns into a fast, reusable matcher.
//!
//! This crate provides:
//! - Pattern normalization and validation (`type/subtype`, `*` wildcards,
//!   `*+suffix` wildcards and the `+suffix` short-form)
//! - Compilation of one or many patterns into a single anchored,
//!   case-insensitive matcher
//! - Matching that ignores MIME parameters (`text/html; charset=utf-8`)
//! - Serde support for reading matchers from configuration (feature `serde`)
//!
//! Matching is linear in the candidate's length and allocation-free.
//!
//! ```
//! use mime_match::compile_mime_match;
//!
//! let matcher = compile_mime_match(["text/*", "application/*+json"]).unwrap();
//! assert!(matcher.is_match("text/html; charset=utf-8"));
//! assert!(matcher.is_match("application/vnd.api+json"));
//! assert!(!matcher.is_match("image/png"));
//! ```

pub mod error;
pub mod grammar;
pub mod pattern;
pub mod matcher;
pub mod input;
mod compiler;

#[cfg(feature = "serde")]
pub mod dynamic;

// Re-export commonly used types
pub use error::{Error, Result};
pub use pattern::{normalize, MimePattern};
pub use matcher::MimeMatcher;
pub use input::{compile_mime_match, Patterns};

#[cfg(feature = "serde")]
pub use dynamic::compile_mime_match_value;
