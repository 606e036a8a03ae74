//! Hit and critical checks.

/// Hit chance as a fraction.
///
/// # Formula
///
/// ```text
/// hit_chance = (accuracy - evasion) / 100
/// ```
///
/// Not clamped: evasion above accuracy yields a negative chance, which
/// always misses.
pub fn hit_chance(accuracy: i32, evasion: i32) -> f64 {
    f64::from(accuracy - evasion) / 100.0
}

/// Whether an attack connects for a uniform `roll` in `[0, 1)`.
///
/// The attack misses only when the roll exceeds the hit chance.
pub fn check_hit(accuracy: i32, evasion: i32, roll: f64) -> bool {
    roll <= hit_chance(accuracy, evasion)
}

/// Whether a connecting attack is critical for a uniform `roll` in `[0, 1)`.
pub fn check_critical(crit_rate: i32, roll: f64) -> bool {
    roll < f64::from(crit_rate) / 100.0
}
