// Rust guideline compliant 2026-10-12

//! Implementation of the `shipyard list` command.
//!
//! Lists one page of ships matching the filter flags, optionally sorted.

use crate::commands::{open_manager, FilterArgs};
use crate::OutputFormatter;
use anyhow::Result;
use shipyard_app::{parse_order, ListOptions, RepoContext};
use shipyard_core::Config;

/// Lists ships with optional filtering, sorting and paging.
///
/// # Arguments
///
/// * `filter` - Filter flags
/// * `order` - Optional sort key (id, speed, date, rating)
/// * `page_number` - Zero-based page, defaults to 0
/// * `page_size` - Page size, defaults to the configured page size
///
/// # Errors
///
/// Returns an error if:
/// - The repository is not initialized
/// - A flag value is invalid (unknown order, negative page, non-positive size)
/// - The ships file cannot be read
pub fn execute(
    context: &RepoContext,
    config: &Config,
    filter: &FilterArgs,
    order: Option<&str>,
    page_number: Option<i64>,
    page_size: Option<i64>,
    formatter: &dyn OutputFormatter,
) -> Result<()> {
    let options = ListOptions {
        filter: filter.to_filter()?,
        order: order.map(parse_order).transpose()?,
        page_number,
        page_size: Some(page_size.unwrap_or(config.default_page_size)),
    };

    let manager = open_manager(context, config)?;
    let ships = manager.list(&options)?;

    println!("{}", formatter.format_list(&ships));

    Ok(())
}
