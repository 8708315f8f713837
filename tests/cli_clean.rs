//! Integration tests for `reclass clean`.

mod common;

use common::*;

#[test]
fn clean_removes_output_root() {
    let env = TestEnv::new();
    write_tree(&env.path("classes"), &[("A.class", CLASS_A)]);
    env.write_file(
        "m.toml",
        b"[[directory]]\nname = \"main\"\nroot = \"classes\"\n",
    );
    assert!(env.run(&["run", "--manifest", "m.toml"]).success);
    assert!(env.output_root().exists());

    let result = env.run(&["clean"]);

    assert!(result.success, "clean failed:\n{}", result.combined_output());
    assert!(!env.output_root().exists());
    assert!(result.stdout.contains("Removed"));
}

#[test]
fn clean_without_output_is_fine() {
    let env = TestEnv::new();

    let result = env.run(&["clean", "--output", "nowhere"]);

    assert!(result.success, "clean failed:\n{}", result.combined_output());
    assert!(result.stdout.contains("Nothing to clean"));
}

#[test]
fn clean_json_reports_removal() {
    let env = TestEnv::new();
    env.write_file("out/jar/lib.jar", b"x");

    let result = env.run(&["clean", "--output", "out", "--json"]);

    assert!(result.success, "clean failed:\n{}", result.combined_output());
    let events = result.events();
    assert_eq!(events[0]["command"], "clean");
    assert_eq!(events[0]["removed"], true);
    assert!(!env.path("out").exists());
}

#[test]
fn clean_uses_configured_root() {
    let env = TestEnv::new();
    env.write_file("reclass.toml", b"[output]\nroot = \"custom\"\n");
    env.write_file("custom/directory/main/A.class", CLASS_A);

    let result = env.run(&["clean"]);

    assert!(result.success, "clean failed:\n{}", result.combined_output());
    assert!(!env.path("custom").exists());
}
