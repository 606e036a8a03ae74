//! Values the engine hands back to its caller.

use bitflags::bitflags;

use crate::combat::HitOutcome;
use crate::state::{BattleResult, Equipment, SkillSlot, Stability, UnitId};

bitflags! {
    /// Side effects of one hit beyond its hp change.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
    #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
    pub struct HitFlags: u8 {
        const CRITICAL = 1 << 0;
        /// This hit emptied the target's stability and stunned it.
        const BREAK    = 1 << 1;
        const DEFEATED = 1 << 2;
        /// The target was already stunned and took overload damage.
        const OVERLOAD = 1 << 3;
    }
}

/// What happened to one target of an action.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct HitRecord {
    pub target: UnitId,
    pub outcome: HitOutcome,
    /// Resolved damage or healing, before clamping to the target's pool.
    pub amount: u32,
    pub stability_damage: Stability,
    pub flags: HitFlags,
    pub hp_after: u32,
}

/// Scheduler events raised between two actions.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TurnEvent {
    /// A stunned unit sat out its turn and regained stability.
    StunRecovered { unit: UnitId, stability: Stability },
    /// Every queued unit acted; cooldowns ticked and the queue was rebuilt.
    RoundStarted { round: u32 },
    BattleEnded { result: BattleResult },
}

/// Loot and currency granted for a victory.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Rewards {
    pub gold: u32,
    pub xp: u32,
    pub gems: u32,
    pub items: Vec<Equipment>,
}

/// Terminal outcome of a battle. Rewards exist only on victory.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BattleOutcome {
    pub result: BattleResult,
    pub rewards: Option<Rewards>,
}

impl BattleOutcome {
    pub fn defeat() -> Self {
        Self {
            result: BattleResult::Defeat,
            rewards: None,
        }
    }

    pub fn victory(rewards: Rewards) -> Self {
        Self {
            result: BattleResult::Victory,
            rewards: Some(rewards),
        }
    }

    pub fn is_victory(&self) -> bool {
        self.result == BattleResult::Victory
    }
}

/// Full report of one executed action.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ActionResult {
    pub actor: UnitId,
    pub slot: SkillSlot,
    pub skill: String,
    pub hits: Vec<HitRecord>,
    /// Scheduler events raised while moving to the next actor.
    pub events: Vec<TurnEvent>,
    /// Set when this action ended the battle.
    pub outcome: Option<BattleOutcome>,
}

impl ActionResult {
    pub fn total_damage(&self) -> u32 {
        self.hits
            .iter()
            .filter(|hit| hit.outcome != HitOutcome::Heal)
            .map(|hit| hit.amount)
            .sum()
    }

    pub fn broke_any(&self) -> bool {
        self.hits.iter().any(|hit| hit.flags.contains(HitFlags::BREAK))
    }
}

/// Who acts next.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PendingTurn {
    /// A squad member waits for an [`super::ActionCommand`].
    Player(UnitId),
    /// An enemy is up; drive it with [`super::BattleEngine::play_enemy_turn`].
    Enemy(UnitId),
    Finished(BattleResult),
}
