//! Read-only inputs the battle consumes from its surroundings.
//!
//! The engine never loads data itself: archetype tables and stage catalogs are
//! handed in by the caller (usually built by `squad-content` loaders), and all
//! randomness comes from an injected [`RandomSource`].

pub mod archetypes;
pub mod rng;
pub mod stages;

pub use archetypes::{
    Archetype, ArchetypeSkills, ArchetypeTable, EnemyTier, SkillTemplate, StatMultipliers,
    TableError, TierEntry,
};
pub use rng::{PcgRng, RandomSource, SequenceRng, StdRandom, derive_seed, pick};
pub use stages::{EnemyComposition, StageCatalog, StageDescriptor, StageError, StageRewards};
