//! Combat resolution system.
//!
//! Pure functions resolving one skill against one target. The engine decides
//! who is hit and applies the returned [`DamageResult`]; nothing here mutates
//! a unit.
//!
//! # Resolution order
//!
//! - heal: `⌊atk × multiplier⌋`, no rolls
//! - hit roll against `(accuracy − evasion) / 100`
//! - crit roll against `crit_rate / 100`
//! - element, overload, armor penetration and mitigation multipliers
//! - floor, minimum 1

pub mod damage;
pub mod element;
pub mod hit;
pub mod result;

pub use damage::{
    DamageFactors, calculate_damage, calculate_heal, effective_defense, mitigation,
    stability_damage,
};
pub use element::{Affinity, element_multiplier};
pub use hit::{check_critical, check_hit, hit_chance};
pub use result::{DamageResult, HitOutcome, resolve};
