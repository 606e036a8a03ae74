//! Command validation and target selection.

use super::{ActionCommand, ActionError};
use crate::state::{BattleState, BattleUnit, Skill, UnitId};

/// Checks a command for the unit currently at the head of the queue and
/// returns the units it will hit, in battle order.
///
/// Pure: a rejected command leaves no trace.
pub fn validate_command(
    state: &BattleState,
    actor: &BattleUnit,
    command: &ActionCommand,
) -> Result<Vec<UnitId>, ActionError> {
    if !actor.can_use(command.slot) {
        return Err(ActionError::OnCooldown {
            actor: actor.id,
            slot: command.slot,
            remaining: actor.cooldowns.remaining(command.slot),
        });
    }

    let skill = actor.skills.get(command.slot);
    if skill.is_aoe {
        return Ok(area_targets(state, actor, skill));
    }

    let target_id = command
        .target
        .ok_or(ActionError::MissingTarget(command.slot))?;
    let target = state
        .unit(target_id)
        .ok_or(ActionError::UnknownUnit(target_id))?;

    if !target.is_alive() {
        return Err(ActionError::TargetDefeated(target_id));
    }
    if skill.is_heal && target.side != actor.side {
        return Err(ActionError::HealOnEnemy(target_id));
    }
    if !skill.is_heal && target.side == actor.side {
        return Err(ActionError::AttackOnAlly(target_id));
    }

    Ok(vec![target_id])
}

/// Area skills: heals cover every living ally, attacks every living opponent.
fn area_targets(state: &BattleState, actor: &BattleUnit, skill: &Skill) -> Vec<UnitId> {
    let side = if skill.is_heal {
        actor.side
    } else {
        actor.side.opponent()
    };
    state.living_ids(side)
}
