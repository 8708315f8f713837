//! Property tests for entry path normalisation.

use proptest::prelude::*;

use reclass::EntryPath;

fn segment() -> impl Strategy<Value = String> {
    prop_oneof![
        4 => "[A-Za-z0-9_$-]{1,8}",
        1 => Just(".".to_string()),
        1 => Just("..".to_string()),
        1 => Just(String::new()),
    ]
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 256,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: parsing arbitrary input never panics.
    #[test]
    fn property_entry_path_never_panics(input in "(?s).{0,64}") {
        let _ = EntryPath::new(&input);
    }

    /// PROPERTY: an accepted path is relative, has no empty/`.`/`..` segments.
    #[test]
    fn property_accepted_paths_are_normalised(
        segments in proptest::collection::vec(segment(), 1..6),
    ) {
        let raw = segments.join("/");
        if let Ok(path) = EntryPath::new(&raw) {
            prop_assert!(!path.as_str().starts_with('/'));
            for part in path.as_str().split('/') {
                prop_assert!(!part.is_empty());
                prop_assert_ne!(part, ".");
                prop_assert_ne!(part, "..");
            }
        } else {
            let absolute = raw.starts_with('/');
            let has_traversal = segments.iter().any(|s| s == "..");
            let all_empty = segments.iter().all(|s| s.is_empty() || s == ".");
            prop_assert!(absolute || has_traversal || all_empty);
        }
    }

    /// PROPERTY: normalisation is idempotent.
    #[test]
    fn property_normalisation_is_idempotent(
        segments in proptest::collection::vec(segment(), 1..6),
    ) {
        if let Ok(path) = EntryPath::new(&segments.join("/")) {
            let again = EntryPath::new(path.as_str()).unwrap();
            prop_assert_eq!(again, path);
        }
    }
}
