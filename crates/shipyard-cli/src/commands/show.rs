// Rust guideline compliant 2026-10-12

//! Implementation of the `shipyard show` command.

use crate::commands::open_manager;
use crate::OutputFormatter;
use anyhow::Result;
use shipyard_app::RepoContext;
use shipyard_core::Config;

/// Shows details of a ship by id.
///
/// # Errors
///
/// Returns an error if:
/// - The repository is not initialized
/// - The id is 0 or no ship has it
/// - The ships file cannot be read
pub fn execute(
    context: &RepoContext,
    config: &Config,
    id: u64,
    formatter: &dyn OutputFormatter,
) -> Result<()> {
    let ship = open_manager(context, config)?.get(id)?;

    println!("{}", formatter.format_ship(&ship));

    Ok(())
}
