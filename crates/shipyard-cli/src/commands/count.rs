// Rust guideline compliant 2026-10-12

//! Implementation of the `shipyard count` command.

use crate::commands::{open_manager, FilterArgs};
use crate::OutputFormatter;
use anyhow::Result;
use shipyard_app::RepoContext;
use shipyard_core::Config;

/// Prints the number of ships matching the filter flags.
///
/// # Errors
///
/// Returns an error if the repository is not initialized, a flag value is
/// invalid, or the ships file cannot be read.
pub fn execute(
    context: &RepoContext,
    config: &Config,
    filter: &FilterArgs,
    formatter: &dyn OutputFormatter,
) -> Result<()> {
    let filter = filter.to_filter()?;
    let count = open_manager(context, config)?.count(&filter)?;

    println!("{}", formatter.format_count(count));

    Ok(())
}
