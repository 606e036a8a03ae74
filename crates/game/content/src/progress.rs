//! Campaign progress bookkeeping.
//!
//! The engine only reports a [`BattleOutcome`]; folding it into the player's
//! wallet, unlocked stages and inventory happens here, after the battle.

use std::collections::BTreeSet;

use squad_core::{BattleOutcome, Inventory};

/// Currencies and campaign unlocks of one player.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct Progress {
    pub gold: u64,
    pub gems: u64,
    /// Highest stage id the player may enter.
    pub max_stage_unlocked: u32,
    pub cleared_stages: BTreeSet<u32>,
}

impl Default for Progress {
    fn default() -> Self {
        Self {
            gold: 0,
            gems: 0,
            max_stage_unlocked: 1,
            cleared_stages: BTreeSet::new(),
        }
    }
}

impl Progress {
    pub fn is_unlocked(&self, stage_id: u32) -> bool {
        stage_id >= 1 && stage_id <= self.max_stage_unlocked
    }

    pub fn is_cleared(&self, stage_id: u32) -> bool {
        self.cleared_stages.contains(&stage_id)
    }

    /// Applies the rewards of a finished battle on `stage_id`.
    ///
    /// Returns `false` and changes nothing for a defeat. A victory credits
    /// gold and gems, marks the stage cleared, unlocks the next stage and
    /// moves dropped items into `inventory`. Battle xp is reported but not
    /// banked; leveling is out of scope for the campaign record.
    pub fn apply_outcome(
        &mut self,
        stage_id: u32,
        outcome: &BattleOutcome,
        inventory: &mut Inventory,
    ) -> bool {
        let Some(rewards) = outcome.rewards.as_ref().filter(|_| outcome.is_victory()) else {
            return false;
        };

        self.gold += u64::from(rewards.gold);
        self.gems += u64::from(rewards.gems);
        self.cleared_stages.insert(stage_id);
        self.max_stage_unlocked = self.max_stage_unlocked.max(stage_id + 1);
        inventory.extend(rewards.items.iter().cloned());

        tracing::info!(
            stage = stage_id,
            gold = self.gold,
            gems = self.gems,
            unlocked = self.max_stage_unlocked,
            items = rewards.items.len(),
            "progress updated"
        );
        true
    }
}
