//! Data-driven battle content and loaders.
//!
//! This crate houses the static content of the campaign and provides loaders
//! for its RON/TOML data files:
//! - Battle tuning (`config.toml`)
//! - Enemy archetypes and tiers (`archetypes.ron`)
//! - Campaign stages (`stages.ron`)
//! - Player roster, equipment and progress (`roster.ron`)
//!
//! All loaders use squad-core types directly with serde for RON/TOML
//! deserialization, and validate what they read before returning it.

pub mod progress;

#[cfg(feature = "loaders")]
pub mod loaders;

pub use progress::Progress;

#[cfg(feature = "loaders")]
pub use loaders::{
    ArchetypeLoader, ConfigLoader, ContentFactory, GameContent, LoadResult, Roster,
    RosterLoader, StageLoader,
};
