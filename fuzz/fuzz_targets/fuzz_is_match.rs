#![no_main]

use libfuzzer_sys::fuzz_target;
use mime_match::{compile_mime_match, MimeMatcher};
use std::sync::OnceLock;

static MATCHER: OnceLock<MimeMatcher> = OnceLock::new();

fuzz_target!(|data: &[u8]| {
    let matcher = MATCHER.get_or_init(|| {
        compile_mime_match(["text/*", "*/png", "+json", "application/vnd.api+json"])
            .expect("fixed patterns are valid")
    });

    if let Ok(s) = std::str::from_utf8(data) {
        let hit = matcher.is_match(s);

        // Parameters never change the outcome of a match
        if hit {
            assert!(matcher.is_match(&format!("{s}; charset=utf-8")));
        }
    }
});
