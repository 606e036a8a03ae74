//! Stat resolution.
//!
//! ```text
//! [ rarity × level × rank × role ]  base_stats
//!      ↓
//! [ weapon → chip → cosmetic ]      resolve_stats
//!      ↓
//! [ CharacterStats ]                combat_power / squad_power
//! ```
//!
//! Everything here is a pure function of its inputs; no randomness and no
//! mutation of the roster.

pub mod base;
pub mod power;
pub mod resolve;

pub use base::{RoleProfile, base_stats};
pub use power::{DifficultyHint, combat_power, squad_power};
pub use resolve::{StatsError, resolve_stats};
