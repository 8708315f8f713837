//! Configuration loading

use std::fs;
use std::path::{Path, PathBuf};

use crate::domain::value_objects::ConfigWarning;
use crate::error::{ReclassError, ReclassResult};

use super::types::{Config, Verbosity};

/// Config file name looked up in the project root
pub const CONFIG_FILE_NAME: &str = "reclass.toml";

const CONFIG_KEYS: &[&str] = &[
    "pipeline",
    "class_suffix",
    "parallel",
    "fail_fast",
    "output",
    "root",
    "verbosity",
    "transform",
    "command",
];

/// Load configuration and collect non-fatal warnings (e.g. unknown keys).
pub fn load_with_warnings(path: &Path) -> ReclassResult<(Config, Vec<ConfigWarning>)> {
    let content = fs::read_to_string(path).map_err(|e| ReclassError::io(path, e))?;

    let mut unknown_paths: Vec<String> = Vec::new();
    let deserializer = toml::de::Deserializer::new(&content);

    let config: Config = serde_ignored::deserialize(deserializer, |p| {
        unknown_paths.push(p.to_string());
    })
    .map_err(|e| ReclassError::Config {
        file: path.to_path_buf(),
        message: e.to_string(),
    })?;

    let warnings = unknown_key_warnings(path, &content, unknown_paths, CONFIG_KEYS);
    Ok((config, warnings))
}

/// Load from project config, user config, or defaults
///
/// The first config file found wins. A file that exists but cannot be
/// parsed is an error, never a silent fallback to defaults.
pub fn load_or_default(
    project_root: Option<&Path>,
) -> ReclassResult<(Config, Vec<ConfigWarning>)> {
    let project_config = project_root.map(|root| root.join(CONFIG_FILE_NAME));
    let user_config = dirs_config_dir().map(|dir| dir.join("reclass").join("config.toml"));

    for candidate in project_config.into_iter().chain(user_config) {
        if candidate.is_file() {
            let (config, warnings) = load_with_warnings(&candidate)?;
            return Ok((with_env_overrides(config), warnings));
        }
    }

    Ok((with_env_overrides(Config::default()), Vec::new()))
}

/// Apply environment variable overrides (RECLASS_* prefix)
pub fn with_env_overrides(mut config: Config) -> Config {
    if let Ok(val) = std::env::var("RECLASS_PARALLEL") {
        config.pipeline.parallel = parse_flag(&val);
    }

    if let Ok(val) = std::env::var("RECLASS_FAIL_FAST") {
        config.pipeline.fail_fast = parse_flag(&val);
    }

    if let Ok(suffix) = std::env::var("RECLASS_CLASS_SUFFIX") {
        if !suffix.is_empty() {
            config.pipeline.class_suffix = suffix;
        }
    }

    if let Ok(root) = std::env::var("RECLASS_OUTPUT_ROOT") {
        if !root.is_empty() {
            config.output.root = PathBuf::from(root);
        }
    }

    // RECLASS_TRANSFORM_CMD (whitespace-separated program and args)
    if let Ok(cmd) = std::env::var("RECLASS_TRANSFORM_CMD") {
        let argv: Vec<String> = cmd.split_whitespace().map(str::to_string).collect();
        if !argv.is_empty() {
            config.transform.command = argv;
        }
    }

    if let Ok(verbosity) = std::env::var("RECLASS_VERBOSITY") {
        config.output.verbosity = match verbosity.to_lowercase().as_str() {
            "quiet" => Verbosity::Quiet,
            "verbose" => Verbosity::Verbose,
            "debug" => Verbosity::Debug,
            _ => Verbosity::Normal,
        };
    }

    config
}

fn parse_flag(val: &str) -> bool {
    !matches!(val.to_lowercase().as_str(), "" | "0" | "false" | "no" | "off")
}

/// Get XDG config directory
fn dirs_config_dir() -> Option<PathBuf> {
    std::env::var("XDG_CONFIG_HOME")
        .ok()
        .map(PathBuf::from)
        .or_else(|| {
            std::env::var("HOME")
                .ok()
                .map(|h| PathBuf::from(h).join(".config"))
        })
}

/// Turn `serde_ignored` paths into warnings with line numbers and suggestions
pub(crate) fn unknown_key_warnings(
    file: &Path,
    content: &str,
    unknown_paths: Vec<String>,
    candidates: &[&str],
) -> Vec<ConfigWarning> {
    unknown_paths
        .into_iter()
        .map(|path_str| {
            let key = path_str
                .split('.')
                .next_back()
                .unwrap_or(path_str.as_str())
                .to_string();
            ConfigWarning {
                line: find_line_number(content, &key),
                suggestion: suggest_key(&key, candidates),
                key,
                file: file.to_path_buf(),
            }
        })
        .collect()
}

/// 1-based line on which `key` is assigned or opens a table
fn find_line_number(content: &str, key: &str) -> Option<usize> {
    content
        .lines()
        .position(|line| {
            let line = line.trim_start().trim_start_matches('[').trim_start();
            line.strip_prefix(key)
                .and_then(|rest| rest.trim_start().chars().next())
                .is_some_and(|c| matches!(c, '=' | ']' | '.'))
        })
        .map(|idx| idx + 1)
}

/// Closest known key within two edits
fn suggest_key(unknown: &str, candidates: &[&str]) -> Option<String> {
    candidates
        .iter()
        .map(|candidate| (edit_distance(unknown, candidate), *candidate))
        .filter(|(distance, _)| *distance <= 2)
        .min_by_key(|(distance, _)| *distance)
        .map(|(_, candidate)| candidate.to_string())
}

/// Levenshtein distance over bytes, single-row
fn edit_distance(a: &str, b: &str) -> usize {
    let b = b.as_bytes();
    let mut row: Vec<usize> = (0..=b.len()).collect();

    for (i, &left) in a.as_bytes().iter().enumerate() {
        let mut diagonal = row[0];
        row[0] = i + 1;
        for (j, &right) in b.iter().enumerate() {
            let substitution = diagonal + usize::from(left != right);
            diagonal = row[j + 1];
            row[j + 1] = substitution.min(row[j] + 1).min(diagonal + 1);
        }
    }

    row[b.len()]
}
