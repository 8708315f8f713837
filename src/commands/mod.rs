//! Command handlers

pub mod clean;
pub mod run;

use std::path::Path;

use anyhow::{Context, Result};
use tracing::warn;

use reclass::config::Config;
use reclass::domain::value_objects::ConfigWarning;

use crate::cli::OutputArgs;

/// Load config (explicit file or the default lookup) and apply CLI overrides
///
/// Also initialises logging, since the configured verbosity is only known
/// once the config is loaded.
pub(crate) fn load_config(args: &OutputArgs, verbose: u8) -> Result<Config> {
    let (config, warnings) = match &args.config {
        Some(path) => {
            let (config, warnings) = Config::load_with_warnings(path)
                .with_context(|| format!("failed to load config {}", path.display()))?;
            (config.with_env_overrides(), warnings)
        }
        None => Config::load_or_default(Some(Path::new(".")))
            .context("failed to load configuration")?,
    };

    crate::init_tracing(verbose, config.output.verbosity);
    report_warnings(&warnings);

    let mut config = config;
    if let Some(output) = &args.output {
        config.output.root = output.clone();
    }
    Ok(config)
}

pub(crate) fn report_warnings(warnings: &[ConfigWarning]) {
    for warning in warnings {
        let location = match warning.line {
            Some(line) => format!("{}:{}", warning.file.display(), line),
            None => warning.file.display().to_string(),
        };
        match &warning.suggestion {
            Some(suggestion) => warn!(
                "unknown key '{}' in {} (did you mean '{}'?)",
                warning.key, location, suggestion
            ),
            None => warn!("unknown key '{}' in {}", warning.key, location),
        }
    }
}
