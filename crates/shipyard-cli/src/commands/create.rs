// Rust guideline compliant 2026-10-12

//! Implementation of the `shipyard create` command.
//!
//! Validates the supplied fields, computes the rating and appends the new
//! ship with the next free id.

use crate::commands::{open_manager, ShipFieldArgs};
use crate::OutputFormatter;
use anyhow::Result;
use shipyard_app::RepoContext;
use shipyard_core::Config;

/// Creates a new ship from the field flags.
///
/// # Errors
///
/// Returns an error if:
/// - The repository is not initialized
/// - A required field is missing or any field is invalid
/// - The ships file cannot be written
pub fn execute(
    context: &RepoContext,
    config: &Config,
    fields: ShipFieldArgs,
    formatter: &dyn OutputFormatter,
) -> Result<()> {
    let candidate = fields.into_new_ship()?;
    let ship = open_manager(context, config)?.create(candidate)?;

    println!("{}", formatter.format_change("created", &ship));

    Ok(())
}
