// Rust guideline compliant 2026-10-12

//! Persistence collaborator contract.

use crate::{Result, Ship};

/// Durable lookup, save and delete of ships.
///
/// The record manager only talks to persistence through this trait. The
/// JSONL [`crate::Storage`] is the shipped implementation.
pub trait Store {
    /// Returns every stored ship in enumeration order.
    ///
    /// # Errors
    ///
    /// Returns an error if the backing storage cannot be read.
    fn find_all(&self) -> Result<Vec<Ship>>;

    /// Returns the ship with the given id, or `None`.
    ///
    /// # Errors
    ///
    /// Returns an error if the backing storage cannot be read.
    fn find_by_id(&self, id: u64) -> Result<Option<Ship>>;

    /// Persists a new ship and returns it with its assigned id.
    ///
    /// # Errors
    ///
    /// Returns an error if the ship fails validation or cannot be written.
    fn create(&self, ship: Ship) -> Result<Ship>;

    /// Replaces an existing ship (matched by id) and returns the stored copy.
    ///
    /// # Errors
    ///
    /// Returns `NotFound` if no ship has that id, or an error if the ship
    /// fails validation or cannot be written.
    fn save(&self, ship: &Ship) -> Result<Ship>;

    /// Removes a ship (matched by id).
    ///
    /// # Errors
    ///
    /// Returns `NotFound` if no ship has that id, or an IO error.
    fn delete(&self, ship: &Ship) -> Result<()>;
}
