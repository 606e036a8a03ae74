//! Unit factory: turns roster characters and stage data into battle units.
//!
//! Player units are resolved from their character and equipment; enemies are
//! generated from the archetype table for the stage level. Enemy generation
//! is the only part of setup that consumes randomness.

mod enemy;
mod player;

pub use enemy::{build_enemy_party, build_enemy_unit, enemy_rarity};
pub use player::{build_player_unit, build_squad};

use crate::env::{StageError, TableError};
use crate::error::{ErrorSeverity, GameError};
use crate::state::{ItemId, UnitId};
use crate::stats::StatsError;

/// Errors raised while setting up a battle.
#[derive(Clone, Debug, PartialEq, thiserror::Error)]
pub enum SetupError {
    #[error("squad must field 1..={max} characters (got {count})")]
    SquadSize { count: usize, max: usize },

    #[error("character {0} appears more than once in the squad")]
    DuplicateCharacter(ItemId),

    #[error("unit id {0} is used by more than one unit")]
    DuplicateUnit(UnitId),

    #[error("unit {unit} is malformed: {reason}")]
    InvalidUnit { unit: UnitId, reason: &'static str },

    #[error(transparent)]
    Stats(#[from] StatsError),

    #[error(transparent)]
    Archetypes(#[from] TableError),

    #[error(transparent)]
    Stage(#[from] StageError),
}

impl GameError for SetupError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            Self::SquadSize { .. } | Self::DuplicateCharacter(_) => ErrorSeverity::Validation,
            Self::DuplicateUnit(_)
            | Self::InvalidUnit { .. }
            | Self::Stats(_)
            | Self::Archetypes(_)
            | Self::Stage(_) => ErrorSeverity::Internal,
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::SquadSize { .. } => "SETUP_SQUAD_SIZE",
            Self::DuplicateCharacter(_) => "SETUP_DUPLICATE_CHARACTER",
            Self::DuplicateUnit(_) => "SETUP_DUPLICATE_UNIT",
            Self::InvalidUnit { .. } => "SETUP_INVALID_UNIT",
            Self::Stats(inner) => inner.error_code(),
            Self::Archetypes(_) => "SETUP_ARCHETYPES",
            Self::Stage(_) => "SETUP_STAGE",
        }
    }
}
