// Rust guideline compliant 2026-10-12

//! Ordering of ships by a sort key.

use crate::error::{AppError, Result};
use shipyard_core::Ship;
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

/// Sortable ship field. Ordering is always ascending.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ShipOrder {
    /// Store-assigned identifier.
    Id,
    /// Cruising speed.
    Speed,
    /// Production date.
    Date,
    /// Derived rating.
    Rating,
}

impl ShipOrder {
    /// Every sort key.
    pub const ALL: [ShipOrder; 4] = [
        ShipOrder::Id,
        ShipOrder::Speed,
        ShipOrder::Date,
        ShipOrder::Rating,
    ];

    /// Returns the ship field this key sorts on.
    pub fn field_name(&self) -> &'static str {
        match self {
            ShipOrder::Id => "id",
            ShipOrder::Speed => "speed",
            ShipOrder::Date => "prodDate",
            ShipOrder::Rating => "rating",
        }
    }

    /// Compares two ships on this key.
    pub fn compare(&self, a: &Ship, b: &Ship) -> Ordering {
        match self {
            ShipOrder::Id => a.id().cmp(&b.id()),
            ShipOrder::Speed => a.speed.total_cmp(&b.speed),
            ShipOrder::Date => a.prod_date.cmp(&b.prod_date),
            ShipOrder::Rating => a.rating().total_cmp(&b.rating()),
        }
    }
}

impl fmt::Display for ShipOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.field_name())
    }
}

impl FromStr for ShipOrder {
    type Err = AppError;

    fn from_str(value: &str) -> Result<Self> {
        parse_order(value)
    }
}

/// Parses a sort key.
///
/// Accepts the field names (`id`, `speed`, `prodDate`, `rating`) in any case,
/// plus `date` and `prod_date` for the production date.
///
/// # Errors
///
/// Returns an error if the key is unknown.
pub fn parse_order(value: &str) -> Result<ShipOrder> {
    match value.to_lowercase().as_str() {
        "id" => Ok(ShipOrder::Id),
        "speed" => Ok(ShipOrder::Speed),
        "date" | "proddate" | "prod_date" => Ok(ShipOrder::Date),
        "rating" => Ok(ShipOrder::Rating),
        _ => Err(AppError::invalid_field(
            "order",
            format!("unknown sort key {value:?}"),
        )),
    }
}

/// Sorts ships ascending by the given key.
///
/// The sort is stable: ships with equal keys keep their input order. `None`
/// returns the ships as received.
pub fn sort_ships(mut ships: Vec<Ship>, order: Option<ShipOrder>) -> Vec<Ship> {
    if let Some(order) = order {
        ships.sort_by(|a, b| order.compare(a, b));
    }
    ships
}
