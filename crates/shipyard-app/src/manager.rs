// Rust guideline compliant 2026-10-12

//! Create, update and delete of ships against a store.
//!
//! The manager owns the write policy: full validation on create, per-field
//! validation on update, and rating recomputation whenever speed, usage or
//! production date is supplied. Updates are all-or-nothing: every supplied
//! field is checked before any of them is applied, and the caller's record
//! is never modified.

use crate::error::{AppError, Result};
use crate::filter::ShipFilter;
use crate::list::{count_ships, list_ships, ListOptions};
use shipyard_core::validation;
use shipyard_core::{Error as CoreError, NewShip, Ship, ShipPatch, Store};

/// Ship record manager over a [`Store`].
#[derive(Debug, Clone)]
pub struct ShipManager<S> {
    store: S,
}

impl<S: Store> ShipManager<S> {
    /// Creates a manager delegating persistence to `store`.
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Returns the underlying store.
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Validates and persists a new ship.
    ///
    /// `is_used` defaults to false. The rating is computed before the ship
    /// reaches the store.
    ///
    /// # Errors
    ///
    /// Returns `InvalidArgument` if a required field is missing or any field
    /// fails validation, or a store error.
    pub fn create(&self, candidate: NewShip) -> Result<Ship> {
        if !validation::all_valid(&candidate) {
            return Err(describe_rejection(&candidate));
        }

        let NewShip {
            name: Some(name),
            planet: Some(planet),
            ship_type: Some(ship_type),
            prod_date: Some(prod_date),
            speed: Some(speed),
            crew_size: Some(crew_size),
            is_used,
        } = candidate
        else {
            return Err(AppError::InvalidArgument(
                "missing required fields".to_string(),
            ));
        };

        let ship = Ship::new(
            name,
            planet,
            ship_type,
            prod_date,
            speed,
            crew_size,
            is_used.unwrap_or(false),
        );
        let created = self.store.create(ship)?;
        tracing::info!(id = created.id(), rating = created.rating(), "created ship");
        Ok(created)
    }

    /// Applies a partial update to an existing ship and persists it.
    ///
    /// Fields are checked in the order name, planet, shipType, prodDate,
    /// isUsed, speed, crewSize; the first invalid one fails the whole update
    /// and nothing is applied or saved.
    ///
    /// # Errors
    ///
    /// Returns `InvalidArgument` for the first invalid field, or a store
    /// error (including `NotFound` if the ship is not stored).
    pub fn update(&self, existing: &Ship, patch: ShipPatch) -> Result<Ship> {
        check_patch(&patch)?;

        let recompute = patch.touches_rating();
        let mut ship = existing.clone();

        if let Some(name) = patch.name {
            ship.name = name;
        }
        if let Some(planet) = patch.planet {
            ship.planet = planet;
        }
        if let Some(ship_type) = patch.ship_type {
            ship.ship_type = ship_type;
        }
        if let Some(prod_date) = patch.prod_date {
            ship.prod_date = prod_date;
        }
        if let Some(is_used) = patch.is_used {
            ship.is_used = is_used;
        }
        if let Some(speed) = patch.speed {
            ship.speed = speed;
        }
        if let Some(crew_size) = patch.crew_size {
            ship.crew_size = crew_size;
        }

        if recompute {
            ship.recompute_rating();
        }

        let saved = self.store.save(&ship)?;
        tracing::info!(id = saved.id(), recomputed = recompute, "updated ship");
        Ok(saved)
    }

    /// Deletes a ship. No validation is performed.
    ///
    /// # Errors
    ///
    /// Returns a store error, including `NotFound` if the ship is not stored.
    pub fn delete(&self, existing: &Ship) -> Result<()> {
        self.store.delete(existing)?;
        tracing::info!(id = existing.id(), "deleted ship");
        Ok(())
    }

    /// Looks up a ship by id.
    ///
    /// # Errors
    ///
    /// Returns `InvalidArgument` for id 0 and `NotFound` if no ship has the id.
    pub fn get(&self, id: u64) -> Result<Ship> {
        if id == 0 {
            return Err(AppError::invalid_field("id", "must be positive"));
        }
        self.store
            .find_by_id(id)?
            .ok_or_else(|| AppError::Core(CoreError::NotFound(id)))
    }

    /// Looks up a ship by id and applies a partial update to it.
    ///
    /// # Errors
    ///
    /// See [`ShipManager::get`] and [`ShipManager::update`].
    pub fn update_by_id(&self, id: u64, patch: ShipPatch) -> Result<Ship> {
        let existing = self.get(id)?;
        self.update(&existing, patch)
    }

    /// Looks up a ship by id, deletes it and returns the deleted record.
    ///
    /// # Errors
    ///
    /// See [`ShipManager::get`] and [`ShipManager::delete`].
    pub fn delete_by_id(&self, id: u64) -> Result<Ship> {
        let existing = self.get(id)?;
        self.delete(&existing)?;
        Ok(existing)
    }

    /// Runs a filter/sort/page query over every stored ship.
    ///
    /// # Errors
    ///
    /// Returns an error if the paging parameters are invalid or the store
    /// cannot be read.
    pub fn list(&self, options: &ListOptions) -> Result<Vec<Ship>> {
        list_ships(self.store.find_all()?, options)
    }

    /// Counts the stored ships matching a filter.
    ///
    /// # Errors
    ///
    /// Returns an error if the store cannot be read.
    pub fn count(&self, filter: &ShipFilter) -> Result<usize> {
        Ok(count_ships(&self.store.find_all()?, filter))
    }
}

/// Checks every supplied patch field, stopping at the first invalid one.
fn check_patch(patch: &ShipPatch) -> Result<()> {
    if let Some(ref name) = patch.name {
        if !validation::name_valid(name) {
            return Err(AppError::invalid_field("name", "length must be 1-50"));
        }
    }
    if let Some(ref planet) = patch.planet {
        if !validation::planet_valid(planet) {
            return Err(AppError::invalid_field("planet", "length must be 1-50"));
        }
    }
    if let Some(prod_date) = patch.prod_date {
        if !validation::date_valid(prod_date) {
            return Err(AppError::invalid_field(
                "prodDate",
                format!("year must be 2800-3019, got {}", prod_date.format("%Y")),
            ));
        }
    }
    if let Some(speed) = patch.speed {
        if !validation::speed_valid(speed) {
            return Err(AppError::invalid_field(
                "speed",
                format!("must round to 0.01-0.99, got {speed}"),
            ));
        }
    }
    if let Some(crew_size) = patch.crew_size {
        if !validation::crew_size_valid(crew_size) {
            return Err(AppError::invalid_field(
                "crewSize",
                format!("must be 1-9999, got {crew_size}"),
            ));
        }
    }
    Ok(())
}

/// Explains why a candidate failed `all_valid`.
fn describe_rejection(candidate: &NewShip) -> AppError {
    let missing = validation::missing_fields(candidate);
    if !missing.is_empty() {
        return AppError::InvalidArgument(format!(
            "missing required fields: {}",
            missing.join(", ")
        ));
    }

    let patch = ShipPatch {
        name: candidate.name.clone(),
        planet: candidate.planet.clone(),
        ship_type: candidate.ship_type,
        prod_date: candidate.prod_date,
        is_used: candidate.is_used,
        speed: candidate.speed,
        crew_size: candidate.crew_size,
    };
    match check_patch(&patch) {
        Err(error) => error,
        Ok(()) => AppError::InvalidArgument("ship failed validation".to_string()),
    }
}
