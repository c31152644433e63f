// Rust guideline compliant 2026-10-12

//! Implementation of the `shipyard init` command.
//!
//! Initializes a new Shipyard repository by creating the `.shipyard`
//! directory, an empty ships file and the default configuration.

use crate::OutputFormatter;
use anyhow::Result;
use shipyard_app::{AppError, RepoContext};
use shipyard_core::Config;
use std::fs;

/// Initializes a new Shipyard repository.
///
/// Existing files are left untouched, so running `init` twice is harmless.
///
/// # Errors
///
/// Returns an error if:
/// - The `.shipyard` directory cannot be created
/// - The `ships.jsonl` file cannot be created
/// - The configuration file cannot be written
pub fn execute(context: &RepoContext, formatter: &dyn OutputFormatter) -> Result<()> {
    let shipyard_dir = context.shipyard_dir();

    if !shipyard_dir.exists() {
        fs::create_dir_all(shipyard_dir)?;
    }

    let ships_path = context.ships_path();
    if !ships_path.exists() {
        fs::File::create(ships_path)?;
    }

    if !context.config_path().exists() {
        Config::default()
            .save(shipyard_dir)
            .map_err(AppError::from)?;
    }

    tracing::info!(path = %shipyard_dir.display(), "initialized repository");
    println!(
        "{}",
        formatter.format_message(
            "init",
            &format!("Shipyard repository initialized at {}", shipyard_dir.display()),
        )
    );

    Ok(())
}
