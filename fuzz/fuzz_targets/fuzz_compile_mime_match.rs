#![no_main]

use libfuzzer_sys::fuzz_target;
use mime_match::compile_mime_match;

fuzz_target!(|data: &[u8]| {
    // Convert bytes to string
    if let Ok(s) = std::str::from_utf8(data) {
        // Newlines split the input into a pattern list
        let patterns: Vec<&str> = s.split('\n').collect();

        // Any pattern that compiles must match its own literal form
        if let Ok(matcher) = compile_mime_match(patterns.as_slice()) {
            for p in &patterns {
                if !p.starts_with('+') {
                    assert!(matcher.is_match(p));
                }
            }
        }
    }
});
