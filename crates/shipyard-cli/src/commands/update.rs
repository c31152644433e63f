// Rust guideline compliant 2026-10-12

//! Implementation of the `shipyard update` command.
//!
//! Applies the supplied field flags to an existing ship. Either every flag
//! is applied or, if any is invalid, none is.

use crate::commands::{open_manager, ShipFieldArgs};
use crate::OutputFormatter;
use anyhow::Result;
use shipyard_app::RepoContext;
use shipyard_core::Config;

/// Updates a ship by id.
///
/// With no field flags the ship is written back unchanged.
///
/// # Errors
///
/// Returns an error if:
/// - The repository is not initialized
/// - The id is 0 or no ship has it
/// - Any supplied field is invalid
/// - The ships file cannot be written
pub fn execute(
    context: &RepoContext,
    config: &Config,
    id: u64,
    fields: ShipFieldArgs,
    formatter: &dyn OutputFormatter,
) -> Result<()> {
    let patch = fields.into_patch()?;
    if patch.is_empty() {
        tracing::debug!(id, "update without fields");
    }

    let ship = open_manager(context, config)?.update_by_id(id, patch)?;

    println!("{}", formatter.format_change("updated", &ship));

    Ok(())
}
