// Rust guideline compliant 2026-10-12

//! Listing and counting queries over ships.

use crate::error::Result;
use crate::filter::{filter_ships, ShipFilter};
use crate::page::Window;
use crate::sort::{sort_ships, ShipOrder};
use shipyard_core::Ship;

/// List options for filtering, sorting and paging ships.
#[derive(Debug, Clone, Default)]
pub struct ListOptions {
    /// Filter criteria.
    pub filter: ShipFilter,
    /// Sort key; `None` keeps store order.
    pub order: Option<ShipOrder>,
    /// Zero-based page number.
    pub page_number: Option<i64>,
    /// Page size.
    pub page_size: Option<i64>,
}

/// Filters, sorts and pages a list of ships based on `ListOptions`.
///
/// # Arguments
///
/// * `ships` - All candidate ships, in store order
/// * `options` - List options
///
/// # Returns
///
/// One page of matching ships.
///
/// # Errors
///
/// Returns an error if the page number is negative or the page size is not
/// positive. Nothing is filtered in that case.
pub fn list_ships(ships: Vec<Ship>, options: &ListOptions) -> Result<Vec<Ship>> {
    let window = Window::new(options.page_number, options.page_size)?;

    let total = ships.len();
    let ships = filter_ships(ships, &options.filter);
    tracing::debug!(total, matched = ships.len(), "filtered ships");

    let ships = sort_ships(ships, options.order);
    let page = window.apply(ships);
    tracing::debug!(
        page = window.page(),
        size = window.size(),
        returned = page.len(),
        "paged ships"
    );

    Ok(page)
}

/// Counts the ships matching a filter, ignoring order and paging.
pub fn count_ships(ships: &[Ship], filter: &ShipFilter) -> usize {
    ships.iter().filter(|ship| filter.matches(ship)).count()
}
