// Rust guideline compliant 2026-10-12

//! Rating formula for ships.

/// Last production year a ship can have; the rating denominator counts
/// years back from here.
pub const CURRENT_YEAR: i32 = 3019;

/// Rounds half-up to two decimal places.
///
/// Halves round toward positive infinity, so `0.125` becomes `0.13` and
/// `-0.125` becomes `-0.12`.
pub fn round2(value: f64) -> f64 {
    (value * 100.0 + 0.5).floor() / 100.0
}

/// Computes the rating of a ship.
///
/// `rating = round2(80 * speed * k / (3019 - year + 1))` where `k` is 0.5 for a
/// used ship and 1 otherwise.
///
/// # Arguments
///
/// * `speed` - Cruising speed
/// * `is_used` - Whether the ship had a previous owner
/// * `year` - Production year, already validated to 2800-3019
///
/// # Returns
///
/// The rating rounded to two decimal places.
pub fn compute_rating(speed: f64, is_used: bool, year: i32) -> f64 {
    let k = if is_used { 0.5 } else { 1.0 };
    let age = f64::from(CURRENT_YEAR - year + 1);
    round2(80.0 * speed * k / age)
}
