//! Turn-based squad battle rules shared across tools and front-ends.
//!
//! `squad-core` defines the canonical rules (stat resolution, unit factory,
//! damage resolver, turn scheduler) and exposes them through a single owner
//! of battle state, [`engine::BattleEngine`]. Content loading lives in
//! `squad-content`; this crate never touches the filesystem.
pub mod combat;
pub mod config;
pub mod engine;
pub mod env;
pub mod error;
pub mod factory;
pub mod state;
pub mod stats;

pub use combat::{Affinity, DamageResult, HitOutcome};
pub use config::BattleConfig;
pub use engine::{
    ActionCommand, ActionError, ActionResult, AutoPolicy, BattleEngine, BattleOutcome, HitFlags,
    HitRecord, PendingTurn, PlayerPolicy, Rewards, TurnEvent,
};
pub use env::{
    Archetype, ArchetypeTable, EnemyComposition, EnemyTier, PcgRng, RandomSource, SequenceRng,
    StageCatalog, StageDescriptor, StageRewards, StdRandom, TableError,
};
pub use error::{ErrorSeverity, GameError};
pub use factory::{SetupError, build_enemy_party, build_enemy_unit, build_player_unit};
pub use state::{
    BattlePhase, BattleResult, BattleState, BattleUnit, Character, CharacterStats, Cooldowns,
    Cosmetic, Element, Equipment, EquipmentKind, Inventory, ItemId, ModChip, Rarity, Role, Side,
    Skill, SkillSet, SkillSlot, Stability, StatBonus, StatKind, UnitId, Weapon,
};
pub use stats::{DifficultyHint, StatsError, combat_power, resolve_stats, squad_power};
