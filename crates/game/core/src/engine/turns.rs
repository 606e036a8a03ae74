//! Round-based turn scheduler.
//!
//! Each round queues every living unit by speed, fastest first. The head of
//! the queue is the active unit. Between actions the scheduler:
//!
//! 1. ends the battle if a side is wiped out (squad first, so a mutual wipe
//!    is a defeat),
//! 2. drops defeated units from the head,
//! 3. lets a stunned head sit out its turn and recover stability,
//! 4. starts a new round when the queue runs dry.

use std::cmp::Reverse;
use std::collections::VecDeque;

use super::result::TurnEvent;
use crate::state::{BattlePhase, BattleState, Side, UnitId};

/// Living units in acting order: speed descending, squad before enemies on
/// ties, then by id.
pub fn turn_order(state: &BattleState) -> VecDeque<UnitId> {
    let mut living: Vec<_> = state.units.iter().filter(|unit| unit.is_alive()).collect();
    living.sort_by_key(|unit| (Reverse(unit.stats.speed), unit.side != Side::Player, unit.id));
    living.into_iter().map(|unit| unit.id).collect()
}

/// Queues the first round and settles on the first actor.
pub fn begin(state: &mut BattleState) -> Vec<TurnEvent> {
    state.turn.round = 1;
    state.turn.queue = turn_order(state);
    state.turn.turns_taken = 0;
    let mut events = Vec::new();
    settle(state, &mut events);
    events
}

/// Ends the active unit's turn and settles on the next actor.
pub fn advance(state: &mut BattleState) -> Vec<TurnEvent> {
    let mut events = Vec::new();
    if state.phase.is_finished() {
        return events;
    }
    if state.turn.queue.pop_front().is_some() {
        state.turn.turns_taken += 1;
    }
    settle(state, &mut events);
    events
}

/// Moves the queue forward until a unit that can act is at the head, or the
/// battle is over.
fn settle(state: &mut BattleState, events: &mut Vec<TurnEvent>) {
    loop {
        if let Some(result) = state.terminal_result() {
            state.phase = BattlePhase::Finished(result);
            state.turn.queue.clear();
            events.push(TurnEvent::BattleEnded { result });
            return;
        }

        let Some(head) = state.turn.current() else {
            start_round(state, events);
            continue;
        };

        let Some(unit) = state.unit_mut(head) else {
            state.turn.queue.pop_front();
            continue;
        };

        if !unit.is_alive() {
            state.turn.queue.pop_front();
            continue;
        }

        if unit.is_stunned {
            let stability = unit.recover_from_stun();
            tracing::debug!(unit = %head, %stability, "stunned unit skips its turn");
            events.push(TurnEvent::StunRecovered {
                unit: head,
                stability,
            });
            state.turn.queue.pop_front();
            state.turn.turns_taken += 1;
            continue;
        }

        return;
    }
}

fn start_round(state: &mut BattleState, events: &mut Vec<TurnEvent>) {
    for unit in state.units.iter_mut().filter(|unit| unit.is_alive()) {
        unit.cooldowns.tick();
    }
    state.turn.queue = turn_order(state);
    state.turn.round += 1;
    tracing::debug!(round = state.turn.round, "round started");
    events.push(TurnEvent::RoundStarted {
        round: state.turn.round,
    });
}
