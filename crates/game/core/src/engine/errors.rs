//! Errors for rejected actions.

use crate::error::{ErrorSeverity, GameError};
use crate::state::{SkillSlot, UnitId};

/// Reasons an action command is rejected.
///
/// A rejected command never mutates the battle.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ActionError {
    #[error("battle is already over")]
    BattleFinished,

    #[error("unit {0} is not part of this battle")]
    UnknownUnit(UnitId),

    #[error("unit {0} is controlled by the enemy")]
    EnemyControlled(UnitId),

    #[error("it is not {actor}'s turn (current: {current})")]
    NotYourTurn { actor: UnitId, current: UnitId },

    #[error("no enemy is waiting to act")]
    NotEnemyTurn,

    #[error("{slot} of {actor} is on cooldown for {remaining} more round(s)")]
    OnCooldown {
        actor: UnitId,
        slot: SkillSlot,
        remaining: u32,
    },

    #[error("{0} needs a target")]
    MissingTarget(SkillSlot),

    #[error("target {0} is already defeated")]
    TargetDefeated(UnitId),

    #[error("cannot heal opposing unit {0}")]
    HealOnEnemy(UnitId),

    #[error("cannot attack allied unit {0}")]
    AttackOnAlly(UnitId),
}

impl GameError for ActionError {
    fn severity(&self) -> ErrorSeverity {
        ErrorSeverity::Validation
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::BattleFinished => "ACTION_BATTLE_FINISHED",
            Self::UnknownUnit(_) => "ACTION_UNKNOWN_UNIT",
            Self::EnemyControlled(_) => "ACTION_ENEMY_CONTROLLED",
            Self::NotYourTurn { .. } => "ACTION_NOT_YOUR_TURN",
            Self::NotEnemyTurn => "ACTION_NOT_ENEMY_TURN",
            Self::OnCooldown { .. } => "ACTION_ON_COOLDOWN",
            Self::MissingTarget(_) => "ACTION_MISSING_TARGET",
            Self::TargetDefeated(_) => "ACTION_TARGET_DEFEATED",
            Self::HealOnEnemy(_) => "ACTION_HEAL_ON_ENEMY",
            Self::AttackOnAlly(_) => "ACTION_ATTACK_ON_ALLY",
        }
    }
}
