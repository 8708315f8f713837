//! Clean command handler
//!
//! Removes the whole output area; the next run must be a full pass.

use anyhow::Result;
use tracing::info;

use reclass::domain::ports::OutputProvider;
use reclass::infrastructure::LocalOutputProvider;

use crate::cli::OutputArgs;

pub fn cmd_clean(args: &OutputArgs, json: bool, verbose: u8) -> Result<()> {
    let config = super::load_config(args, verbose)?;
    let outputs = LocalOutputProvider::new(&config.output.root);

    let _lock = outputs.lock()?;
    let existed = outputs.root().exists();
    outputs.delete_all()?;
    info!(root = %outputs.root().display(), existed, "output cleared");

    if json {
        println!(
            "{}",
            serde_json::json!({
                "event": "complete",
                "command": "clean",
                "root": outputs.root().display().to_string(),
                "removed": existed,
            })
        );
    } else if existed {
        println!("Removed {}", outputs.root().display());
    } else {
        println!("Nothing to clean at {}", outputs.root().display());
    }
    Ok(())
}
