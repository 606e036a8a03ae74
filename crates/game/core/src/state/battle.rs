use std::collections::VecDeque;

use arrayvec::ArrayVec;

use super::{BattleUnit, Side, UnitId};
use crate::config::BattleConfig;

/// Result of a finished battle.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display, strum::AsRefStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case")]
pub enum BattleResult {
    Victory,
    Defeat,
}

/// Lifecycle of a battle.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum BattlePhase {
    #[default]
    Ongoing,
    Finished(BattleResult),
}

impl BattlePhase {
    pub const fn is_finished(self) -> bool {
        matches!(self, BattlePhase::Finished(_))
    }
}

/// Turn order of the current round.
///
/// The head of `queue` is the unit whose turn it is.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TurnState {
    pub queue: VecDeque<UnitId>,
    /// 1-based round counter.
    pub round: u32,
    /// Number of turns taken so far, including stun-skipped ones.
    pub turns_taken: u64,
}

impl TurnState {
    pub fn current(&self) -> Option<UnitId> {
        self.queue.front().copied()
    }
}

/// Authoritative state of one battle.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BattleState {
    pub units: ArrayVec<BattleUnit, { BattleConfig::MAX_UNITS }>,
    pub turn: TurnState,
    pub phase: BattlePhase,
}

impl BattleState {
    pub fn unit(&self, id: UnitId) -> Option<&BattleUnit> {
        self.units.iter().find(|unit| unit.id == id)
    }

    pub fn unit_mut(&mut self, id: UnitId) -> Option<&mut BattleUnit> {
        self.units.iter_mut().find(|unit| unit.id == id)
    }

    pub fn living(&self, side: Side) -> impl Iterator<Item = &BattleUnit> {
        self.units
            .iter()
            .filter(move |unit| unit.side == side && unit.is_alive())
    }

    pub fn living_ids(&self, side: Side) -> Vec<UnitId> {
        self.living(side).map(|unit| unit.id).collect()
    }

    pub fn is_wiped_out(&self, side: Side) -> bool {
        self.living(side).next().is_none()
    }

    /// The terminal result implied by the current units, if any.
    ///
    /// A wiped-out squad is checked first so a mutual wipe counts as a defeat.
    pub fn terminal_result(&self) -> Option<BattleResult> {
        if self.is_wiped_out(Side::Player) {
            Some(BattleResult::Defeat)
        } else if self.is_wiped_out(Side::Enemy) {
            Some(BattleResult::Victory)
        } else {
            None
        }
    }

    pub fn current_actor(&self) -> Option<UnitId> {
        match self.phase {
            BattlePhase::Ongoing => self.turn.current(),
            BattlePhase::Finished(_) => None,
        }
    }
}
