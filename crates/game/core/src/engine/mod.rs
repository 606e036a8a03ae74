//! Battle engine.
//!
//! [`BattleEngine`] is the sole owner and mutator of a [`BattleState`]. Every
//! call runs to completion: validate, resolve, apply, advance the scheduler,
//! and, once a side is wiped out, roll the rewards exactly once.
//!
//! ```text
//! execute_action ─┐
//!                 ├─ validate ─ resolve per target ─ apply ─ turns::advance ─ finish?
//! play_enemy_turn ┘
//! ```

mod errors;
pub mod policy;
pub mod result;
pub mod rewards;
pub mod targeting;
pub mod turns;

pub use errors::ActionError;
pub use policy::{AutoPolicy, PlayerPolicy};
pub use result::{
    ActionResult, BattleOutcome, HitFlags, HitRecord, PendingTurn, Rewards, TurnEvent,
};

use crate::combat::{self, HitOutcome};
use crate::config::BattleConfig;
use crate::env::{ArchetypeTable, RandomSource, StageDescriptor, pick};
use crate::factory::{SetupError, build_enemy_party, build_squad};
use crate::state::{
    BattlePhase, BattleResult, BattleState, BattleUnit, Character, Inventory, Side, SkillSlot,
    UnitId,
};

/// One squad member's chosen action.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ActionCommand {
    pub actor: UnitId,
    pub slot: SkillSlot,
    /// Required for single-target skills; ignored by area skills.
    pub target: Option<UnitId>,
}

/// Owns one battle from setup to outcome.
pub struct BattleEngine<R: RandomSource> {
    state: BattleState,
    stage: StageDescriptor,
    config: BattleConfig,
    rng: R,
    outcome: Option<BattleOutcome>,
}

impl<R: RandomSource> BattleEngine<R> {
    /// Builds the squad and the stage's enemies and queues the first round.
    ///
    /// Squad members get ids `0..squad.len()`, enemies follow.
    pub fn start(
        squad: &[Character],
        inventory: &Inventory,
        stage: &StageDescriptor,
        archetypes: &ArchetypeTable,
        config: BattleConfig,
        mut rng: R,
    ) -> Result<Self, SetupError> {
        let players = build_squad(squad, inventory)?;
        let enemies = build_enemy_party(
            stage,
            archetypes,
            &config,
            &mut rng,
            players.len() as u32,
        )?;

        Self::with_units(players, enemies, stage.clone(), config, rng)
    }

    /// Starts a battle from prebuilt units.
    ///
    /// Unit ids must be unique; both sides must field at least one unit.
    /// Units carrying more hp or stability than their maximum are rejected.
    pub fn with_units(
        players: impl IntoIterator<Item = BattleUnit>,
        enemies: impl IntoIterator<Item = BattleUnit>,
        stage: StageDescriptor,
        config: BattleConfig,
        rng: R,
    ) -> Result<Self, SetupError> {
        let mut state = BattleState::default();
        let players: Vec<_> = players.into_iter().collect();
        let enemies: Vec<_> = enemies.into_iter().collect();

        if players.is_empty() || players.len() > BattleConfig::MAX_SQUAD {
            return Err(SetupError::SquadSize {
                count: players.len(),
                max: BattleConfig::MAX_SQUAD,
            });
        }
        if enemies.is_empty() || enemies.len() > BattleConfig::MAX_ENEMIES {
            return Err(SetupError::Stage(crate::env::StageError::EnemyCount {
                id: stage.id,
                count: enemies.len() as u32,
                max: BattleConfig::MAX_ENEMIES,
            }));
        }

        for (i, unit) in players.iter().chain(&enemies).enumerate() {
            if players.iter().chain(&enemies).take(i).any(|other| other.id == unit.id) {
                return Err(SetupError::DuplicateUnit(unit.id));
            }
            check_unit(unit)?;
        }

        for mut unit in players {
            unit.side = Side::Player;
            state.units.push(unit);
        }
        for mut unit in enemies {
            unit.side = Side::Enemy;
            state.units.push(unit);
        }

        let mut engine = Self {
            state,
            stage,
            config,
            rng,
            outcome: None,
        };

        tracing::info!(
            stage = engine.stage.id,
            name = %engine.stage.name,
            squad = engine.state.living(Side::Player).count(),
            enemies = engine.state.living(Side::Enemy).count(),
            "battle started"
        );

        turns::begin(&mut engine.state);
        engine.finish_if_over();
        Ok(engine)
    }

    pub fn state(&self) -> &BattleState {
        &self.state
    }

    /// Live view of every unit, defeated ones included.
    pub fn units(&self) -> &[BattleUnit] {
        &self.state.units
    }

    pub fn unit(&self, id: UnitId) -> Option<&BattleUnit> {
        self.state.unit(id)
    }

    pub fn stage(&self) -> &StageDescriptor {
        &self.stage
    }

    pub fn config(&self) -> &BattleConfig {
        &self.config
    }

    pub fn round(&self) -> u32 {
        self.state.turn.round
    }

    pub fn turns_taken(&self) -> u64 {
        self.state.turn.turns_taken
    }

    pub fn is_finished(&self) -> bool {
        self.state.phase.is_finished()
    }

    /// The terminal outcome, once the battle is over.
    pub fn outcome(&self) -> Option<&BattleOutcome> {
        self.outcome.as_ref()
    }

    pub fn pending_turn(&self) -> PendingTurn {
        if let BattlePhase::Finished(result) = self.state.phase {
            return PendingTurn::Finished(result);
        }
        match self.state.current_actor().and_then(|id| self.state.unit(id)) {
            Some(unit) if unit.side == Side::Player => PendingTurn::Player(unit.id),
            Some(unit) => PendingTurn::Enemy(unit.id),
            // Unreachable while ongoing: the scheduler always settles on a living unit.
            None => PendingTurn::Finished(BattleResult::Defeat),
        }
    }

    /// Executes a squad member's action.
    pub fn execute_action(&mut self, command: ActionCommand) -> Result<ActionResult, ActionError> {
        let checked = self.check_player_command(&command);
        let targets = match checked {
            Ok(targets) => targets,
            Err(error) => {
                tracing::warn!(
                    actor = %command.actor,
                    slot = %command.slot,
                    code = crate::error::GameError::error_code(&error),
                    %error,
                    "rejected action"
                );
                return Err(error);
            }
        };
        Ok(self.perform(command.actor, command.slot, &targets))
    }

    fn check_player_command(&self, command: &ActionCommand) -> Result<Vec<UnitId>, ActionError> {
        if self.is_finished() {
            return Err(ActionError::BattleFinished);
        }
        let actor = self
            .state
            .unit(command.actor)
            .ok_or(ActionError::UnknownUnit(command.actor))?;
        if actor.is_enemy() {
            return Err(ActionError::EnemyControlled(command.actor));
        }
        let current = self.state.current_actor().ok_or(ActionError::BattleFinished)?;
        if current != command.actor {
            return Err(ActionError::NotYourTurn {
                actor: command.actor,
                current,
            });
        }
        targeting::validate_command(&self.state, actor, command)
    }

    /// Plays the turn of the enemy at the head of the queue: a normal attack
    /// on a uniformly random living squad member.
    pub fn play_enemy_turn(&mut self) -> Result<ActionResult, ActionError> {
        let actor = match self.pending_turn() {
            PendingTurn::Enemy(actor) => actor,
            PendingTurn::Finished(_) => return Err(ActionError::BattleFinished),
            PendingTurn::Player(_) => return Err(ActionError::NotEnemyTurn),
        };

        let candidates = self.state.living_ids(Side::Player);
        let target = pick(&mut self.rng, &candidates)
            .copied()
            .ok_or(ActionError::BattleFinished)?;

        Ok(self.perform(actor, SkillSlot::Normal, &[target]))
    }

    /// Plays enemy turns until a squad member is up or the battle ends.
    pub fn run_enemy_turns(&mut self) -> Vec<ActionResult> {
        let mut results = Vec::new();
        while matches!(self.pending_turn(), PendingTurn::Enemy(_)) {
            match self.play_enemy_turn() {
                Ok(result) => results.push(result),
                Err(_) => break,
            }
        }
        results
    }

    /// Drives the whole battle, asking `policy` for every squad turn.
    ///
    /// After `max_turns` turns without a result the squad concedes.
    pub fn run_to_end(
        &mut self,
        policy: impl PlayerPolicy,
        max_turns: u64,
    ) -> Result<BattleOutcome, ActionError> {
        self.run_with(policy, max_turns, |_, _| {})
    }

    /// [`run_to_end`](Self::run_to_end) that hands every resolved action to
    /// `on_action`, together with the engine as it stands after the action.
    pub fn run_with(
        &mut self,
        mut policy: impl PlayerPolicy,
        max_turns: u64,
        mut on_action: impl FnMut(&Self, &ActionResult),
    ) -> Result<BattleOutcome, ActionError> {
        loop {
            if self.state.turn.turns_taken >= max_turns && !self.is_finished() {
                tracing::warn!(max_turns, "turn limit reached; conceding");
                return Ok(self.concede());
            }

            let result = match self.pending_turn() {
                PendingTurn::Finished(_) => {
                    return Ok(self.outcome.clone().unwrap_or_else(BattleOutcome::defeat));
                }
                PendingTurn::Enemy(_) => self.play_enemy_turn()?,
                PendingTurn::Player(id) => {
                    let Some(actor) = self.state.unit(id) else {
                        return Err(ActionError::UnknownUnit(id));
                    };
                    let command = policy.choose(&self.state, actor);
                    self.execute_action(command)?
                }
            };
            on_action(self, &result);
        }
    }

    /// Abandons the battle. Counts as a defeat; no rewards.
    pub fn concede(&mut self) -> BattleOutcome {
        if let Some(outcome) = &self.outcome {
            return outcome.clone();
        }
        self.state.phase = BattlePhase::Finished(BattleResult::Defeat);
        self.state.turn.queue.clear();
        let outcome = BattleOutcome::defeat();
        tracing::info!(stage = self.stage.id, "squad conceded");
        self.outcome = Some(outcome.clone());
        outcome
    }

    /// Applies a validated action and advances the scheduler.
    fn perform(&mut self, actor_id: UnitId, slot: SkillSlot, targets: &[UnitId]) -> ActionResult {
        let Some(actor) = self.state.unit_mut(actor_id) else {
            return ActionResult {
                actor: actor_id,
                slot,
                skill: String::new(),
                hits: Vec::new(),
                events: Vec::new(),
                outcome: None,
            };
        };
        let skill = actor.skills.get(slot).clone();
        actor.cooldowns.trigger(slot, skill.cooldown);
        let attacker = actor.clone();

        let mut hits = Vec::with_capacity(targets.len());
        for &target_id in targets {
            let Some(defender) = self.state.unit(target_id) else {
                continue;
            };
            let was_stunned = defender.is_stunned;
            let resolved = combat::resolve(&attacker, defender, &skill, &self.config, &mut self.rng);

            let Some(target) = self.state.unit_mut(target_id) else {
                continue;
            };
            let mut flags = HitFlags::empty();
            if resolved.is_critical {
                flags |= HitFlags::CRITICAL;
            }

            match resolved.outcome {
                HitOutcome::Heal => {
                    target.heal(resolved.amount);
                }
                HitOutcome::Miss => {}
                _ => {
                    if was_stunned {
                        flags |= HitFlags::OVERLOAD;
                    }
                    target.take_damage(resolved.amount);
                    if !target.is_alive() {
                        flags |= HitFlags::DEFEATED;
                    } else if target.lose_stability(resolved.stability_damage) {
                        flags |= HitFlags::BREAK;
                    }
                }
            }

            tracing::debug!(
                actor = %actor_id,
                target = %target_id,
                skill = %skill.name,
                outcome = %resolved.outcome,
                amount = resolved.amount,
                hp = target.hp(),
                stability = %target.stability,
                ?flags,
                "hit resolved"
            );

            hits.push(HitRecord {
                target: target_id,
                outcome: resolved.outcome,
                amount: resolved.amount,
                stability_damage: resolved.stability_damage,
                flags,
                hp_after: target.hp(),
            });
        }

        let events = turns::advance(&mut self.state);
        let outcome = self.finish_if_over();

        ActionResult {
            actor: actor_id,
            slot,
            skill: skill.name,
            hits,
            events,
            outcome,
        }
    }

    /// Records the outcome the first time the battle is seen finished.
    ///
    /// Returns the outcome only on that first call.
    fn finish_if_over(&mut self) -> Option<BattleOutcome> {
        let BattlePhase::Finished(result) = self.state.phase else {
            return None;
        };
        if self.outcome.is_some() {
            return None;
        }

        let outcome = match result {
            BattleResult::Victory => BattleOutcome::victory(rewards::roll_rewards(
                &self.stage,
                &self.config,
                &mut self.rng,
            )),
            BattleResult::Defeat => BattleOutcome::defeat(),
        };

        tracing::info!(
            stage = self.stage.id,
            %result,
            rounds = self.state.turn.round,
            turns = self.state.turn.turns_taken,
            gold = outcome.rewards.as_ref().map_or(0, |r| r.gold),
            "battle finished"
        );

        self.outcome = Some(outcome.clone());
        Some(outcome)
    }
}

fn check_unit(unit: &BattleUnit) -> Result<(), SetupError> {
    let reason = if unit.stats.hp > unit.stats.max_hp {
        "hp exceeds max hp"
    } else if unit.stability > unit.max_stability {
        "stability exceeds max stability"
    } else if !unit.skills.iter().all(|skill| skill.has_valid_multiplier()) {
        "skill multiplier must be positive and finite"
    } else {
        return Ok(());
    };
    Err(SetupError::InvalidUnit {
        unit: unit.id,
        reason,
    })
}
