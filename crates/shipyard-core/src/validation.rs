// Rust guideline compliant 2026-10-12

//! Field validation rules for ships.
//!
//! Each rule is a pure predicate. Callers turn a `false` into an
//! `InvalidArgument` error for the field concerned.

use crate::models::NewShip;
use crate::rating::round2;
use chrono::{DateTime, Datelike, Utc};

/// Maximum length of a name or planet, in characters.
pub const MAX_TEXT_LEN: usize = 50;
/// Earliest accepted production year.
pub const MIN_PROD_YEAR: i32 = 2800;
/// Latest accepted production year.
pub const MAX_PROD_YEAR: i32 = crate::rating::CURRENT_YEAR;
/// Lowest accepted speed after rounding.
pub const MIN_SPEED: f64 = 0.01;
/// Highest accepted speed after rounding.
pub const MAX_SPEED: f64 = 0.99;
/// Smallest accepted crew.
pub const MIN_CREW_SIZE: i32 = 1;
/// Largest accepted crew.
pub const MAX_CREW_SIZE: i32 = 9999;

fn text_valid(value: &str) -> bool {
    (1..=MAX_TEXT_LEN).contains(&value.chars().count())
}

/// Returns true if the name is 1-50 characters long.
pub fn name_valid(name: &str) -> bool {
    text_valid(name)
}

/// Returns true if the planet is 1-50 characters long.
pub fn planet_valid(planet: &str) -> bool {
    text_valid(planet)
}

/// Returns true if the speed, rounded to two decimals, lies in [0.01, 0.99].
pub fn speed_valid(speed: f64) -> bool {
    let rounded = round2(speed);
    (MIN_SPEED..=MAX_SPEED).contains(&rounded)
}

/// Returns true if the production year lies in [2800, 3019].
pub fn date_valid(prod_date: DateTime<Utc>) -> bool {
    (MIN_PROD_YEAR..=MAX_PROD_YEAR).contains(&prod_date.year())
}

/// Returns true if the crew size lies in [1, 9999].
pub fn crew_size_valid(crew_size: i32) -> bool {
    (MIN_CREW_SIZE..=MAX_CREW_SIZE).contains(&crew_size)
}

/// Returns the names of required fields missing from a candidate.
///
/// `isUsed` is not required; it defaults to false.
pub fn missing_fields(candidate: &NewShip) -> Vec<&'static str> {
    let mut missing = Vec::new();
    if candidate.name.is_none() {
        missing.push("name");
    }
    if candidate.planet.is_none() {
        missing.push("planet");
    }
    if candidate.ship_type.is_none() {
        missing.push("shipType");
    }
    if candidate.prod_date.is_none() {
        missing.push("prodDate");
    }
    if candidate.speed.is_none() {
        missing.push("speed");
    }
    if candidate.crew_size.is_none() {
        missing.push("crewSize");
    }
    missing
}

/// Returns true if every required field is present and passes its rule.
pub fn all_valid(candidate: &NewShip) -> bool {
    missing_fields(candidate).is_empty()
        && candidate.name.as_deref().is_some_and(name_valid)
        && candidate.planet.as_deref().is_some_and(planet_valid)
        && candidate.prod_date.is_some_and(date_valid)
        && candidate.speed.is_some_and(speed_valid)
        && candidate.crew_size.is_some_and(crew_size_valid)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ShipType;
    use chrono::TimeZone;

    fn year(y: i32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(y, 1, 1, 0, 0, 0).unwrap()
    }

    #[test]
    fn test_speed_boundaries() {
        assert!(!speed_valid(0.00));
        assert!(speed_valid(0.01));
        assert!(speed_valid(0.99));
        assert!(!speed_valid(1.00));
    }

    #[test]
    fn test_speed_rounds_before_checking() {
        assert!(speed_valid(0.005));
        assert!(!speed_valid(0.004));
        assert!(speed_valid(0.994));
        assert!(!speed_valid(0.995));
        assert!(!speed_valid(f64::NAN));
    }

    #[test]
    fn test_date_boundaries() {
        assert!(date_valid(year(2800)));
        assert!(date_valid(year(3019)));
        assert!(!date_valid(year(2799)));
        assert!(!date_valid(year(3020)));
    }

    #[test]
    fn test_text_length_counts_characters() {
        assert!(!name_valid(""));
        assert!(name_valid("a"));
        assert!(name_valid(&"ж".repeat(50)));
        assert!(!planet_valid(&"x".repeat(51)));
    }

    #[test]
    fn test_crew_size_boundaries() {
        assert!(!crew_size_valid(0));
        assert!(crew_size_valid(1));
        assert!(crew_size_valid(9999));
        assert!(!crew_size_valid(10000));
    }

    #[test]
    fn test_all_valid_requires_fields() {
        let mut candidate = NewShip {
            name: Some("Orion".to_string()),
            planet: Some("Mars".to_string()),
            ship_type: Some(ShipType::Military),
            prod_date: Some(year(2900)),
            speed: Some(0.3),
            crew_size: Some(100),
            is_used: None,
        };
        assert!(all_valid(&candidate));

        candidate.crew_size = None;
        assert!(!all_valid(&candidate));
        assert_eq!(missing_fields(&candidate), vec!["crewSize"]);
    }
}
