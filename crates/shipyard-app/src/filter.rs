// Rust guideline compliant 2026-10-12

//! Criteria-based filtering of ships.

use chrono::{DateTime, Utc};
use rayon::prelude::*;
use shipyard_core::{Ship, ShipType};

/// Collections at least this large are filtered on the rayon pool.
const PARALLEL_THRESHOLD: usize = 1_000;

/// Filter criteria for ships. Every supplied criterion must hold.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ShipFilter {
    /// Case-insensitive substring of the name.
    pub name: Option<String>,
    /// Case-insensitive substring of the planet.
    pub planet: Option<String>,
    /// Exact ship type.
    pub ship_type: Option<ShipType>,
    /// Production date strictly after this instant.
    pub after: Option<DateTime<Utc>>,
    /// Production date strictly before this instant.
    pub before: Option<DateTime<Utc>>,
    /// Exact previous-owner flag.
    pub is_used: Option<bool>,
    /// Speed >= value.
    pub min_speed: Option<f64>,
    /// Speed <= value.
    pub max_speed: Option<f64>,
    /// Crew size >= value.
    pub min_crew_size: Option<i32>,
    /// Crew size <= value.
    pub max_crew_size: Option<i32>,
    /// Rating >= value.
    pub min_rating: Option<f64>,
    /// Rating <= value.
    pub max_rating: Option<f64>,
}

impl ShipFilter {
    /// Returns true if no criterion is set.
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    /// Returns true if the ship satisfies every supplied criterion.
    pub fn matches(&self, ship: &Ship) -> bool {
        if let Some(ref name) = self.name {
            if !contains_ignore_case(&ship.name, name) {
                return false;
            }
        }

        if let Some(ref planet) = self.planet {
            if !contains_ignore_case(&ship.planet, planet) {
                return false;
            }
        }

        if let Some(ship_type) = self.ship_type {
            if ship.ship_type != ship_type {
                return false;
            }
        }

        if let Some(after) = self.after {
            if ship.prod_date <= after {
                return false;
            }
        }
        if let Some(before) = self.before {
            if ship.prod_date >= before {
                return false;
            }
        }

        if let Some(is_used) = self.is_used {
            if ship.is_used != is_used {
                return false;
            }
        }

        if let Some(min) = self.min_speed {
            if ship.speed < min {
                return false;
            }
        }
        if let Some(max) = self.max_speed {
            if ship.speed > max {
                return false;
            }
        }

        if let Some(min) = self.min_crew_size {
            if ship.crew_size < min {
                return false;
            }
        }
        if let Some(max) = self.max_crew_size {
            if ship.crew_size > max {
                return false;
            }
        }

        if let Some(min) = self.min_rating {
            if ship.rating() < min {
                return false;
            }
        }
        if let Some(max) = self.max_rating {
            if ship.rating() > max {
                return false;
            }
        }

        true
    }
}

fn contains_ignore_case(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(&needle.to_lowercase())
}

/// Keeps the ships that satisfy the filter, preserving their order.
///
/// # Arguments
///
/// * `ships` - Ships to filter
/// * `filter` - Criteria to apply
///
/// # Returns
///
/// The matching ships in input order.
pub fn filter_ships(ships: Vec<Ship>, filter: &ShipFilter) -> Vec<Ship> {
    if filter.is_empty() {
        return ships;
    }

    if ships.len() >= PARALLEL_THRESHOLD {
        ships.into_par_iter().filter(|s| filter.matches(s)).collect()
    } else {
        ships.into_iter().filter(|s| filter.matches(s)).collect()
    }
}
