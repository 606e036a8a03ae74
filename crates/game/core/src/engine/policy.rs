//! Decision policies for squad turns.

use super::ActionCommand;
use crate::env::{RandomSource, pick};
use crate::state::{BattleState, BattleUnit, SkillSlot, UnitId};

/// Chooses the action of a squad member whose turn it is.
pub trait PlayerPolicy {
    /// `actor` is the living squad member at the head of the queue.
    fn choose(&mut self, state: &BattleState, actor: &BattleUnit) -> ActionCommand;
}

impl<P: PlayerPolicy + ?Sized> PlayerPolicy for &mut P {
    fn choose(&mut self, state: &BattleState, actor: &BattleUnit) -> ActionCommand {
        (**self).choose(state, actor)
    }
}

/// Auto-pilot: strongest ready skill, heals on the most wounded ally,
/// attacks on a random living enemy.
#[derive(Clone, Debug)]
pub struct AutoPolicy<R> {
    rng: R,
}

impl<R: RandomSource> AutoPolicy<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }

    fn slot_for(actor: &BattleUnit) -> SkillSlot {
        [SkillSlot::Ultimate, SkillSlot::Skill]
            .into_iter()
            .find(|slot| actor.can_use(*slot))
            .unwrap_or(SkillSlot::Normal)
    }

    fn most_wounded(state: &BattleState, actor: &BattleUnit) -> UnitId {
        state
            .living(actor.side)
            .max_by_key(|ally| (ally.missing_hp(), std::cmp::Reverse(ally.id)))
            .map_or(actor.id, |ally| ally.id)
    }
}

impl<R: RandomSource> PlayerPolicy for AutoPolicy<R> {
    fn choose(&mut self, state: &BattleState, actor: &BattleUnit) -> ActionCommand {
        let slot = Self::slot_for(actor);
        let skill = actor.skills.get(slot);

        let target = if skill.is_aoe {
            None
        } else if skill.is_heal {
            Some(Self::most_wounded(state, actor))
        } else {
            let enemies = state.living_ids(actor.side.opponent());
            pick(&mut self.rng, &enemies).copied()
        };

        ActionCommand {
            actor: actor.id,
            slot,
            target,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::combat::result::tests::{stats, unit};
    use crate::env::SequenceRng;
    use crate::state::{Cooldowns, Element, Side, Skill};

    fn battle() -> BattleState {
        let mut state = BattleState::default();
        state.units.push(unit(0, Side::Player, Element::Pyro, stats(100, 50, 100)));
        state.units.push(unit(1, Side::Player, Element::Hydro, stats(100, 50, 90)));
        state.units.push(unit(2, Side::Enemy, Element::Pyro, stats(100, 50, 80)));
        state.units.push(unit(3, Side::Enemy, Element::Pyro, stats(100, 50, 70)));
        state
    }

    #[test]
    fn prefers_ultimate_then_skill_then_normal() {
        let state = battle();
        let mut policy = AutoPolicy::new(SequenceRng::constant(0.0));
        let mut actor = state.units[0].clone();

        assert_eq!(policy.choose(&state, &actor).slot, SkillSlot::Ultimate);

        actor.cooldowns = Cooldowns { skill: 0, ultimate: 2 };
        assert_eq!(policy.choose(&state, &actor).slot, SkillSlot::Skill);

        actor.cooldowns = Cooldowns { skill: 1, ultimate: 2 };
        let command = policy.choose(&state, &actor);
        assert_eq!(command.slot, SkillSlot::Normal);
        assert_eq!(command.target, Some(UnitId(2)));
    }

    #[test]
    fn aoe_needs_no_target() {
        let state = battle();
        let mut policy = AutoPolicy::new(SequenceRng::constant(0.0));
        let command = policy.choose(&state, &state.units[0]);
        assert!(state.units[0].skills.ultimate.is_aoe);
        assert_eq!(command.target, None);
    }

    #[test]
    fn heals_go_to_the_most_wounded_ally() {
        let mut state = battle();
        state.units[1].stats.hp = 400;
        let mut healer = state.units[0].clone();
        healer.skills.ultimate = Skill::new("Patch", 1.5, 3).heal();

        let mut policy = AutoPolicy::new(SequenceRng::constant(0.0));
        let command = policy.choose(&state, &healer);
        assert_eq!(command.target, Some(UnitId(1)));
    }

    #[test]
    fn attack_targets_skip_defeated_enemies() {
        let mut state = battle();
        state.units[2].stats.hp = 0;
        let mut actor = state.units[0].clone();
        actor.cooldowns = Cooldowns { skill: 1, ultimate: 1 };

        let mut policy = AutoPolicy::new(SequenceRng::constant(0.0));
        assert_eq!(policy.choose(&state, &actor).target, Some(UnitId(3)));
    }
}
