//! Battle data model.
//!
//! Persistent records ([`Character`], [`Equipment`], [`Inventory`]) are owned by
//! the caller and only read during a battle. [`BattleUnit`] and [`BattleState`]
//! exist for one battle and are mutated exclusively by the engine.

mod battle;
mod character;
mod common;
mod equipment;
mod skills;
mod stats;
mod unit;

pub use battle::{BattlePhase, BattleResult, BattleState, TurnState};
pub use character::Character;
pub use common::{Element, ItemId, Rarity, Role, Side, SkillSlot, UnitId};
pub use equipment::{Cosmetic, Equipment, EquipmentKind, Inventory, ModChip, Weapon};
pub use skills::{Cooldowns, Skill, SkillSet};
pub use stats::{CharacterStats, StatBonus, StatKind};
pub use unit::{BattleUnit, Stability};
