// Rust guideline compliant 2026-10-12

//! Shipyard Core Library
//!
//! This crate provides the foundational components for the Shipyard ship catalog:
//! - Data models (Ship, ShipType, NewShip, ShipPatch)
//! - Field validation rules
//! - The rating formula
//! - The `Store` persistence contract and its JSONL implementation
//! - Configuration loading
//! - Error types and result handling

pub mod config;
pub mod error;
pub mod models;
pub mod rating;
pub mod storage;
pub mod store;
pub mod validation;

pub use config::{Config, OutputFormat};
pub use error::{Error, Result};
pub use models::{NewShip, Ship, ShipPatch, ShipType};
pub use rating::compute_rating;
pub use storage::Storage;
pub use store::Store;
