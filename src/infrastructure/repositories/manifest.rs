//! TOML Invocation Manifest Repository
//!
//! Implements the InvocationRepository port for the manifest the host
//! build tool writes before each run:
//!
//! ```toml
//! mode = "incremental"
//!
//! [[directory]]
//! name = "main"
//! root = "build/classes/java/main"
//!
//! [directory.changes]
//! "com/example/A.class" = "changed"
//! "com/example/Old.class" = "removed"
//!
//! [[jar]]
//! name = "guava"
//! path = "libs/guava-33.0.jar"
//! status = "added"
//! ```
//!
//! Relative roots and jar paths resolve against the manifest's directory.

use std::collections::{BTreeMap, HashSet};
use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::config::loader::unknown_key_warnings;
use crate::domain::entities::{ArchiveUnit, DirectoryUnit, InputUnit, Invocation};
use crate::domain::ports::InvocationRepository;
use crate::domain::value_objects::{
    ChangeStatus, ConfigWarning, EntryPath, InvocationMode, UnitFormat,
};
use crate::error::{ReclassError, ReclassResult};
use crate::infrastructure::fs::sanitize_name;

const MANIFEST_KEYS: &[&str] = &[
    "mode",
    "directory",
    "jar",
    "name",
    "root",
    "changes",
    "path",
    "status",
];

/// TOML-based invocation repository
#[derive(Debug, Default, Clone, Copy)]
pub struct TomlInvocationRepository;

impl TomlInvocationRepository {
    pub fn new() -> Self {
        Self
    }
}

#[derive(Debug, Deserialize)]
struct TomlManifest {
    #[serde(default)]
    mode: InvocationMode,
    #[serde(default)]
    directory: Vec<TomlDirectoryUnit>,
    #[serde(default)]
    jar: Vec<TomlJarUnit>,
}

#[derive(Debug, Deserialize)]
struct TomlDirectoryUnit {
    name: String,
    root: PathBuf,
    #[serde(default)]
    changes: BTreeMap<String, ChangeStatus>,
}

#[derive(Debug, Deserialize)]
struct TomlJarUnit {
    name: String,
    path: PathBuf,
    #[serde(default)]
    status: Option<ChangeStatus>,
}

impl InvocationRepository for TomlInvocationRepository {
    fn load(&self, path: &Path) -> ReclassResult<(Invocation, Vec<ConfigWarning>)> {
        let content = fs::read_to_string(path).map_err(|e| ReclassError::io(path, e))?;
        let base = match path.parent() {
            Some(p) if !p.as_os_str().is_empty() => p,
            _ => Path::new("."),
        };
        parse_manifest(&content, path, base)
    }
}

/// Parse manifest text; `base` anchors relative roots and jar paths
///
/// Roots are made absolute against the working directory so that
/// absolute change keys can be matched against them.
pub fn parse_manifest(
    content: &str,
    file: &Path,
    base: &Path,
) -> ReclassResult<(Invocation, Vec<ConfigWarning>)> {
    let base = std::path::absolute(base).map_err(|e| ReclassError::io(base, e))?;
    let base = base.as_path();
    let mut unknown_paths: Vec<String> = Vec::new();
    let deserializer = toml::de::Deserializer::new(content);

    let manifest: TomlManifest = serde_ignored::deserialize(deserializer, |p| {
        unknown_paths.push(p.to_string());
    })
    .map_err(|e| manifest_error(file, e.to_string()))?;

    let warnings = unknown_key_warnings(file, content, unknown_paths, MANIFEST_KEYS);

    let mut names = UnitNames::default();
    let mut invocation = Invocation::new(manifest.mode);

    for dir in manifest.directory {
        names.claim(file, &dir.name, UnitFormat::Directory)?;

        let root = resolve(base, &dir.root);
        let mut unit = DirectoryUnit::new(dir.name, root);
        for (key, status) in dir.changes {
            let entry = EntryPath::within_root(Path::new(&key), &unit.root).map_err(|reason| {
                manifest_error(
                    file,
                    format!(
                        "directory unit '{}': invalid change path '{}': {}",
                        unit.name, key, reason
                    ),
                )
            })?;
            unit.changes.insert(entry, status);
        }
        invocation.units.push(InputUnit::Directory(unit));
    }

    for jar in manifest.jar {
        names.claim(file, &jar.name, UnitFormat::Jar)?;

        let mut unit = ArchiveUnit::new(jar.name, resolve(base, &jar.path));
        unit.status = jar.status;
        invocation.units.push(InputUnit::Archive(unit));
    }

    Ok((invocation, warnings))
}

/// Tracks unit names so that two units never share an output location
#[derive(Default)]
struct UnitNames {
    raw: HashSet<(UnitFormat, String)>,
    locations: HashSet<(UnitFormat, String)>,
}

impl UnitNames {
    fn claim(&mut self, file: &Path, name: &str, format: UnitFormat) -> ReclassResult<()> {
        if name.trim().is_empty() {
            return Err(manifest_error(file, format!("{format} unit has an empty name")));
        }
        if !self.raw.insert((format, name.to_string())) {
            return Err(manifest_error(
                file,
                format!("duplicate {format} unit name '{name}'"),
            ));
        }
        let sanitized = sanitize_name(name);
        if !self.locations.insert((format, sanitized.clone())) {
            return Err(manifest_error(
                file,
                format!("{format} unit '{name}' collides with another unit at output name '{sanitized}'"),
            ));
        }
        Ok(())
    }
}

fn resolve(base: &Path, path: &Path) -> PathBuf {
    if path.is_absolute() {
        path.to_path_buf()
    } else {
        base.join(path)
    }
}

fn manifest_error(file: &Path, message: String) -> ReclassError {
    ReclassError::Manifest {
        file: file.to_path_buf(),
        message,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn parse(content: &str) -> ReclassResult<(Invocation, Vec<ConfigWarning>)> {
        parse_manifest(content, Path::new("reclass-manifest.toml"), Path::new("/work"))
    }

    #[test]
    fn parses_incremental_manifest() {
        let (invocation, warnings) = parse(
            r#"
mode = "incremental"

[[directory]]
name = "main"
root = "classes"

[directory.changes]
"com/example/A.class" = "changed"
"com/example/Old.class" = "removed"

[[jar]]
name = "guava"
path = "/libs/guava.jar"
status = "added"

[[jar]]
name = "commons"
path = "libs/commons.jar"
"#,
        )
        .unwrap();

        assert!(warnings.is_empty());
        assert_eq!(invocation.mode, InvocationMode::Incremental);
        assert_eq!(invocation.units.len(), 3);

        let InputUnit::Directory(dir) = &invocation.units[0] else {
            panic!("expected directory unit");
        };
        assert_eq!(dir.root, Path::new("/work").join("classes"));
        assert_eq!(
            dir.changes[&EntryPath::new("com/example/Old.class").unwrap()],
            ChangeStatus::Removed
        );

        let InputUnit::Archive(guava) = &invocation.units[1] else {
            panic!("expected archive unit");
        };
        assert_eq!(guava.path, Path::new("/libs/guava.jar"));
        assert_eq!(guava.status, Some(ChangeStatus::Added));

        let InputUnit::Archive(commons) = &invocation.units[2] else {
            panic!("expected archive unit");
        };
        assert_eq!(commons.path, Path::new("/work").join("libs/commons.jar"));
        assert_eq!(commons.status, None);
    }

    #[test]
    fn mode_defaults_to_full() {
        let (invocation, _) = parse("").unwrap();
        assert_eq!(invocation.mode, InvocationMode::Full);
        assert!(invocation.is_empty());
    }

    #[test]
    fn absolute_change_keys_inside_root_are_relativised() {
        let dir = tempdir().unwrap();
        let root = dir.path().join("classes");
        let key = root.join("a").join("B.class");
        let content = format!(
            "mode = \"incremental\"\n[[directory]]\nname = \"main\"\nroot = {:?}\n[directory.changes]\n{:?} = \"added\"\n",
            root.display().to_string(),
            key.display().to_string(),
        );

        let (invocation, _) = parse(&content).unwrap();
        let InputUnit::Directory(unit) = &invocation.units[0] else {
            panic!("expected directory unit");
        };
        assert!(unit
            .changes
            .contains_key(&EntryPath::new("a/B.class").unwrap()));
    }

    #[test]
    fn absolute_change_keys_match_relative_base() {
        let key = std::env::current_dir()
            .unwrap()
            .join("build")
            .join("classes")
            .join("A.class");
        let content = format!(
            "mode = \"incremental\"\n[[directory]]\nname = \"main\"\nroot = \"classes\"\n[directory.changes]\n{:?} = \"changed\"\n",
            key.display().to_string(),
        );

        let (invocation, _) =
            parse_manifest(&content, Path::new("build/m.toml"), Path::new("build")).unwrap();

        let InputUnit::Directory(unit) = &invocation.units[0] else {
            panic!("expected directory unit");
        };
        assert!(unit.root.is_absolute());
        assert_eq!(
            unit.changes[&EntryPath::new("A.class").unwrap()],
            ChangeStatus::Changed
        );
    }

    #[test]
    fn absolute_change_keys_outside_root_are_rejected() {
        let outside = std::env::current_dir().unwrap().join("elsewhere").join("A.class");
        let content = format!(
            "[[directory]]\nname = \"main\"\nroot = \"classes\"\n[directory.changes]\n{:?} = \"added\"\n",
            outside.display().to_string(),
        );

        let err = parse_manifest(&content, Path::new("build/m.toml"), Path::new("build"))
            .unwrap_err();
        assert!(err.to_string().contains("escapes root"));
    }

    #[test]
    fn rejects_traversal_in_change_keys() {
        let err = parse(
            r#"
[[directory]]
name = "main"
root = "classes"
[directory.changes]
"../outside.class" = "added"
"#,
        )
        .unwrap_err();

        assert!(matches!(err, ReclassError::Manifest { .. }));
        assert!(err.to_string().contains("../outside.class"));
    }

    #[test]
    fn rejects_unknown_status() {
        let err = parse(
            r#"
[[jar]]
name = "lib"
path = "lib.jar"
status = "modified"
"#,
        )
        .unwrap_err();
        assert!(matches!(err, ReclassError::Manifest { .. }));
    }

    #[test]
    fn rejects_duplicate_names() {
        let err = parse(
            r#"
[[jar]]
name = "lib"
path = "a.jar"

[[jar]]
name = "lib"
path = "b.jar"
"#,
        )
        .unwrap_err();
        assert!(err.to_string().contains("duplicate jar unit name 'lib'"));
    }

    #[test]
    fn rejects_names_colliding_after_sanitizing() {
        let err = parse(
            r#"
[[directory]]
name = "a/b"
root = "x"

[[directory]]
name = "a:b"
root = "y"
"#,
        )
        .unwrap_err();
        assert!(err.to_string().contains("collides"));
    }

    #[test]
    fn same_name_allowed_across_formats() {
        let (invocation, _) = parse(
            r#"
[[directory]]
name = "lib"
root = "x"

[[jar]]
name = "lib"
path = "lib.jar"
"#,
        )
        .unwrap();
        assert_eq!(invocation.units.len(), 2);
    }

    #[test]
    fn rejects_empty_name() {
        let err = parse(
            r#"
[[jar]]
name = " "
path = "lib.jar"
"#,
        )
        .unwrap_err();
        assert!(err.to_string().contains("empty name"));
    }

    #[test]
    fn unknown_keys_become_warnings() {
        let (_, warnings) = parse(
            r#"
mode = "full"
[[jar]]
name = "lib"
path = "lib.jar"
stauts = "added"
"#,
        )
        .unwrap();

        assert_eq!(warnings.len(), 1);
        assert_eq!(warnings[0].key, "stauts");
        assert_eq!(warnings[0].suggestion.as_deref(), Some("status"));
        assert_eq!(warnings[0].line, Some(6));
    }

    #[test]
    fn load_resolves_against_manifest_directory() {
        let dir = tempdir().unwrap();
        let manifest = dir.path().join("manifest.toml");
        fs::write(
            &manifest,
            "[[directory]]\nname = \"main\"\nroot = \"classes\"\n",
        )
        .unwrap();

        let (invocation, _) = TomlInvocationRepository::new().load(&manifest).unwrap();
        let InputUnit::Directory(unit) = &invocation.units[0] else {
            panic!("expected directory unit");
        };
        assert_eq!(unit.root, dir.path().join("classes"));
    }

    #[test]
    fn load_missing_manifest_is_io_error() {
        let dir = tempdir().unwrap();
        let err = TomlInvocationRepository::new()
            .load(&dir.path().join("absent.toml"))
            .unwrap_err();
        assert!(matches!(err, ReclassError::Io { .. }));
    }
}
