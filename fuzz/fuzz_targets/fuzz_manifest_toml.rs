#![no_main]

use libfuzzer_sys::fuzz_target;
use std::path::Path;

fuzz_target!(|data: &[u8]| {
    if let Ok(content) = std::str::from_utf8(data) {
        // Fuzz invocation manifest parsing - this should never panic
        let _ = reclass::infrastructure::repositories::parse_manifest(
            content,
            Path::new("fuzz.toml"),
            Path::new("/fuzz"),
        );
    }
});
