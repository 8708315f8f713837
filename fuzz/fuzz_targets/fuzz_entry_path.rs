#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(name) = std::str::from_utf8(data) {
        // Accepted paths must re-parse to themselves and never escape the root
        if let Ok(path) = reclass::EntryPath::new(name) {
            assert!(!path.as_str().split('/').any(|s| s == ".." || s.is_empty()));
            assert_eq!(reclass::EntryPath::new(path.as_str()).ok(), Some(path));
        }
    }
});
