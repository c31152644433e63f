// Rust guideline compliant 2026-10-12

//! Core data models for Shipyard.

use chrono::{DateTime, Datelike, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Class of a ship.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ShipType {
    /// Cargo and passenger carrier.
    Transport,
    /// Armed vessel.
    Military,
    /// Trading vessel.
    Merchant,
}

impl ShipType {
    /// Every declared ship type, in declaration order.
    pub const ALL: [ShipType; 3] = [ShipType::Transport, ShipType::Military, ShipType::Merchant];

    /// Returns the wire name of the ship type.
    pub fn as_str(&self) -> &'static str {
        match self {
            ShipType::Transport => "TRANSPORT",
            ShipType::Military => "MILITARY",
            ShipType::Merchant => "MERCHANT",
        }
    }
}

impl fmt::Display for ShipType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ShipType {
    type Err = crate::Error;

    fn from_str(value: &str) -> crate::Result<Self> {
        ShipType::ALL
            .into_iter()
            .find(|ship_type| ship_type.as_str().eq_ignore_ascii_case(value))
            .ok_or_else(|| crate::Error::invalid_field("shipType", format!("unknown ship type {value:?}")))
    }
}

/// A persisted ship record.
///
/// `id` is assigned by the store and `rating` is derived from `speed`,
/// `is_used` and the production year. Neither has a public setter; the
/// remaining fields are freely settable, and [`Ship::validate`] (run by the
/// store on every write) rejects a record whose rating is stale.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Ship {
    /// Store-assigned identifier, 0 until persisted.
    id: u64,
    /// Ship name (1-50 characters).
    pub name: String,
    /// Home planet (1-50 characters).
    pub planet: String,
    /// Ship class.
    pub ship_type: ShipType,
    /// Production date, serialized as epoch milliseconds.
    #[serde(with = "chrono::serde::ts_milliseconds")]
    pub prod_date: DateTime<Utc>,
    /// Cruising speed, two significant decimals in [0.01, 0.99].
    pub speed: f64,
    /// Crew size in [1, 9999].
    pub crew_size: i32,
    /// Whether the ship has had a previous owner.
    pub is_used: bool,
    /// Derived rating.
    rating: f64,
}

impl Ship {
    /// Creates an unpersisted ship and computes its rating.
    ///
    /// The returned ship has id 0; a store assigns the real id on create.
    pub fn new(
        name: String,
        planet: String,
        ship_type: ShipType,
        prod_date: DateTime<Utc>,
        speed: f64,
        crew_size: i32,
        is_used: bool,
    ) -> Self {
        let mut ship = Self {
            id: 0,
            name,
            planet,
            ship_type,
            prod_date,
            speed,
            crew_size,
            is_used,
            rating: 0.0,
        };
        ship.recompute_rating();
        ship
    }

    /// Returns the store-assigned identifier (0 if not yet persisted).
    pub fn id(&self) -> u64 {
        self.id
    }

    /// Returns the derived rating.
    pub fn rating(&self) -> f64 {
        self.rating
    }

    /// Returns the calendar year (UTC) of the production date.
    pub fn prod_year(&self) -> i32 {
        self.prod_date.year()
    }

    /// Returns true once a store has assigned an id.
    pub fn is_persisted(&self) -> bool {
        self.id != 0
    }

    /// Returns this ship carrying the given id.
    ///
    /// Intended for [`crate::Store`] implementations assigning identifiers.
    #[must_use]
    pub fn with_id(mut self, id: u64) -> Self {
        self.id = id;
        self
    }

    /// Recomputes `rating` from the current speed, usage and production year.
    pub fn recompute_rating(&mut self) {
        self.rating = crate::rating::compute_rating(self.speed, self.is_used, self.prod_year());
    }

    /// Validates the ship data.
    ///
    /// # Errors
    ///
    /// Returns `InvalidArgument` if:
    /// - Any settable field fails its validation rule
    /// - The rating does not match the rating formula for the current fields
    pub fn validate(&self) -> crate::Result<()> {
        use crate::validation;

        if !validation::name_valid(&self.name) {
            return Err(crate::Error::invalid_field("name", "length must be 1-50"));
        }
        if !validation::planet_valid(&self.planet) {
            return Err(crate::Error::invalid_field("planet", "length must be 1-50"));
        }
        if !validation::date_valid(self.prod_date) {
            return Err(crate::Error::invalid_field(
                "prodDate",
                format!("year must be 2800-3019, got {}", self.prod_year()),
            ));
        }
        if !validation::speed_valid(self.speed) {
            return Err(crate::Error::invalid_field(
                "speed",
                format!("must round to 0.01-0.99, got {}", self.speed),
            ));
        }
        if !validation::crew_size_valid(self.crew_size) {
            return Err(crate::Error::invalid_field(
                "crewSize",
                format!("must be 1-9999, got {}", self.crew_size),
            ));
        }

        let expected = crate::rating::compute_rating(self.speed, self.is_used, self.prod_year());
        if self.rating != expected {
            return Err(crate::Error::invalid_field(
                "rating",
                format!("stale rating {} (expected {})", self.rating, expected),
            ));
        }

        Ok(())
    }
}

/// Candidate for a new ship.
///
/// Every settable field is optional so that absence can be reported as a
/// validation failure. There is no `id` or `rating`: both come from the store
/// and the rating formula.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct NewShip {
    /// Ship name.
    #[serde(default)]
    pub name: Option<String>,
    /// Home planet.
    #[serde(default)]
    pub planet: Option<String>,
    /// Ship class.
    #[serde(default)]
    pub ship_type: Option<ShipType>,
    /// Production date.
    #[serde(default, with = "chrono::serde::ts_milliseconds_option")]
    pub prod_date: Option<DateTime<Utc>>,
    /// Cruising speed.
    #[serde(default)]
    pub speed: Option<f64>,
    /// Crew size.
    #[serde(default)]
    pub crew_size: Option<i32>,
    /// Previous-owner flag, false when absent.
    #[serde(default)]
    pub is_used: Option<bool>,
}

/// Partial update for an existing ship.
///
/// Only supplied fields change. `id` and `rating` are not part of the patch.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct ShipPatch {
    /// New name.
    #[serde(default)]
    pub name: Option<String>,
    /// New home planet.
    #[serde(default)]
    pub planet: Option<String>,
    /// New ship class.
    #[serde(default)]
    pub ship_type: Option<ShipType>,
    /// New production date.
    #[serde(default, with = "chrono::serde::ts_milliseconds_option")]
    pub prod_date: Option<DateTime<Utc>>,
    /// New previous-owner flag.
    #[serde(default)]
    pub is_used: Option<bool>,
    /// New cruising speed.
    #[serde(default)]
    pub speed: Option<f64>,
    /// New crew size.
    #[serde(default)]
    pub crew_size: Option<i32>,
}

impl ShipPatch {
    /// Returns true if the patch supplies no field at all.
    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.planet.is_none()
            && self.ship_type.is_none()
            && self.prod_date.is_none()
            && self.is_used.is_none()
            && self.speed.is_none()
            && self.crew_size.is_none()
    }

    /// Returns true if the patch supplies a field the rating depends on.
    pub fn touches_rating(&self) -> bool {
        self.prod_date.is_some() || self.is_used.is_some() || self.speed.is_some()
    }
}
