use arrayvec::ArrayVec;

use super::SetupError;
use crate::config::BattleConfig;
use crate::state::{BattleUnit, Character, Cooldowns, Inventory, Side, UnitId};
use crate::stats::{RoleProfile, StatsError, resolve_stats};

/// Builds the battle unit of one squad member.
///
/// Stats are resolved with equipment, then hp is reset to the maximum: every
/// battle starts at full health whatever the roster says. Cooldowns start at
/// zero and stability at the role's maximum.
pub fn build_player_unit(
    id: UnitId,
    character: &Character,
    inventory: &Inventory,
) -> Result<BattleUnit, StatsError> {
    let mut stats = resolve_stats(character, inventory)?;
    stats.hp = stats.max_hp;

    let max_stability = RoleProfile::of(character.role).max_stability;

    Ok(BattleUnit {
        id,
        name: character.name.clone(),
        side: Side::Player,
        role: character.role,
        element: character.element,
        rarity: character.rarity,
        level: character.level,
        rank: character.effective_rank(),
        stats,
        skills: character.skills.clone(),
        cooldowns: Cooldowns::default(),
        stability: max_stability,
        max_stability,
        is_stunned: false,
    })
}

/// Builds the whole squad, numbering units from `UnitId(0)` in squad order.
pub fn build_squad(
    squad: &[Character],
    inventory: &Inventory,
) -> Result<ArrayVec<BattleUnit, { BattleConfig::MAX_SQUAD }>, SetupError> {
    if squad.is_empty() || squad.len() > BattleConfig::MAX_SQUAD {
        return Err(SetupError::SquadSize {
            count: squad.len(),
            max: BattleConfig::MAX_SQUAD,
        });
    }

    let mut units = ArrayVec::new();
    for (index, character) in squad.iter().enumerate() {
        if squad[..index].iter().any(|other| other.id == character.id) {
            return Err(SetupError::DuplicateCharacter(character.id.clone()));
        }
        units.push(build_player_unit(UnitId(index as u32), character, inventory)?);
    }
    Ok(units)
}
