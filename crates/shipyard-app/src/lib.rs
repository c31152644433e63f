// Rust guideline compliant 2026-10-12

//! Shared application services for Shipyard.
//!
//! This crate provides the ship query pipeline (filter, sort, page), the
//! record manager enforcing the write policy, repository discovery, and
//! standardized error codes and response envelopes.

pub mod error;
pub mod filter;
pub mod list;
pub mod manager;
pub mod page;
pub mod repo;
pub mod response;
pub mod sort;

pub use error::{AppError, ErrorCode, Result};
pub use filter::{filter_ships, ShipFilter};
pub use list::{count_ships, list_ships, ListOptions};
pub use manager::ShipManager;
pub use page::{paginate, Window, DEFAULT_PAGE_NUMBER, DEFAULT_PAGE_SIZE};
pub use repo::RepoContext;
pub use response::{ErrorEnvelope, SuccessEnvelope};
pub use sort::{parse_order, sort_ships, ShipOrder};
