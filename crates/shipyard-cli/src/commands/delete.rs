// Rust guideline compliant 2026-10-12

//! Implementation of the `shipyard delete` command.

use crate::commands::open_manager;
use crate::OutputFormatter;
use anyhow::Result;
use shipyard_app::RepoContext;
use shipyard_core::Config;

/// Deletes a ship by id and prints the removed record.
///
/// # Errors
///
/// Returns an error if the repository is not initialized, the id is 0 or
/// unknown, or the ships file cannot be written.
pub fn execute(
    context: &RepoContext,
    config: &Config,
    id: u64,
    formatter: &dyn OutputFormatter,
) -> Result<()> {
    let ship = open_manager(context, config)?.delete_by_id(id)?;

    println!("{}", formatter.format_change("deleted", &ship));

    Ok(())
}
