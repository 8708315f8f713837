//! Property tests for whole-pipeline invariants on real directories.

use std::collections::BTreeMap;
use std::path::Path;
use std::sync::Arc;

use proptest::prelude::*;

use reclass::infrastructure::{LocalNamespaces, LocalOutputProvider};
use reclass::{
    ChangeStatus, ClassTransform, DirectoryUnit, EntryPath, FnTransform, Invocation,
    RunOptions, RunUseCase,
};

use crate::common::*;

fn append_one() -> Arc<dyn ClassTransform> {
    Arc::new(FnTransform::new("append-01", |bytes: &[u8]| {
        let mut out = bytes.to_vec();
        out.push(0x01);
        Ok(out)
    }))
}

/// Relative file path: directories have no dot, files always have an extension
fn file_path() -> impl Strategy<Value = String> {
    (
        proptest::collection::vec("[a-z]{1,6}", 0..3),
        "[A-Za-z]{1,6}",
        prop_oneof![Just("class"), Just("txt"), Just("properties"), Just("MF")],
    )
        .prop_map(|(dirs, stem, ext)| {
            let mut parts = dirs;
            parts.push(format!("{stem}.{ext}"));
            parts.join("/")
        })
}

fn input_tree() -> impl Strategy<Value = BTreeMap<String, Vec<u8>>> {
    proptest::collection::btree_map(
        file_path(),
        proptest::collection::vec(any::<u8>(), 0..64),
        1..12,
    )
}

fn materialise(root: &Path, tree: &BTreeMap<String, Vec<u8>>) {
    let files: Vec<(&str, &[u8])> = tree
        .iter()
        .map(|(path, content)| (path.as_str(), content.as_slice()))
        .collect();
    write_tree(root, &files);
}

fn run(output_root: &Path, invocation: &Invocation) {
    let result = RunUseCase::new(
        LocalNamespaces::new(),
        LocalOutputProvider::new(output_root),
        append_one(),
    )
    .execute(invocation, &RunOptions::new())
    .unwrap();
    assert!(result.is_success());
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 32,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: a full pass mirrors the input path set; classes are
    /// transformed and everything else is byte-identical.
    #[test]
    fn property_full_pass_mirrors_input(tree in input_tree()) {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("in");
        materialise(&input, &tree);

        run(&dir.path().join("out"), &Invocation::full().with_unit(DirectoryUnit::new("u", &input)));

        let output = read_tree(&dir.path().join("out/directory/u"));
        prop_assert_eq!(output.keys().collect::<Vec<_>>(), tree.keys().collect::<Vec<_>>());
        for (path, content) in &tree {
            let out = &output[path];
            if path.ends_with(".class") {
                prop_assert_eq!(&out[..content.len()], content.as_slice());
                prop_assert_eq!(out.len(), content.len() + 1);
                prop_assert_eq!(out.last(), Some(&0x01));
            } else {
                prop_assert_eq!(out, content);
            }
        }
    }

    /// PROPERTY: a full pass followed by an incremental pass reporting
    /// every file as Added is identical to the full pass alone.
    #[test]
    fn property_incremental_all_added_equals_full(tree in input_tree()) {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("in");
        materialise(&input, &tree);

        let full = Invocation::full().with_unit(DirectoryUnit::new("u", &input));
        run(&dir.path().join("full"), &full);
        run(&dir.path().join("incr"), &full);

        let unit = DirectoryUnit::new("u", &input).with_changes(
            tree.keys().map(|p| (EntryPath::new(p).unwrap(), ChangeStatus::Added)),
        );
        run(&dir.path().join("incr"), &Invocation::incremental().with_unit(unit));

        prop_assert_eq!(
            read_tree(&dir.path().join("full")),
            read_tree(&dir.path().join("incr"))
        );
    }

    /// PROPERTY: an incremental pass with an empty change map is a no-op,
    /// even when the input has drifted.
    #[test]
    fn property_empty_change_map_is_noop(tree in input_tree(), drift in input_tree()) {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("in");
        materialise(&input, &tree);
        let out = dir.path().join("out");

        run(&out, &Invocation::full().with_unit(DirectoryUnit::new("u", &input)));
        let before = read_tree(&out);

        materialise(&input, &drift);
        run(&out, &Invocation::incremental().with_unit(DirectoryUnit::new("u", &input)));

        prop_assert_eq!(read_tree(&out), before);
    }
}
