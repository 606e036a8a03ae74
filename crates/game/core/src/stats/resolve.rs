//! Final stat resolution for a roster character.
//!
//! Base stats come from [`base_stats`]; equipped records then layer their
//! bonuses in weapon, chip, cosmetic order. Role-restricted records whose
//! restriction does not match contribute nothing.

use super::base::base_stats;
use crate::error::{ErrorSeverity, GameError};
use crate::state::{Character, CharacterStats, Equipment, EquipmentKind, Inventory, ItemId};

/// Errors raised while resolving a character's stats.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum StatsError {
    #[error("{character} has '{item}' equipped but it is not in the inventory")]
    MissingEquipment { character: ItemId, item: ItemId },

    #[error("{character} has '{item}' in the {slot} slot but it is a {found}")]
    WrongSlot {
        character: ItemId,
        item: ItemId,
        slot: EquipmentKind,
        found: EquipmentKind,
    },
}

impl GameError for StatsError {
    fn severity(&self) -> ErrorSeverity {
        ErrorSeverity::Internal
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::MissingEquipment { .. } => "STATS_MISSING_EQUIPMENT",
            Self::WrongSlot { .. } => "STATS_WRONG_SLOT",
        }
    }
}

/// Computes the full stat block of `character` with its equipment applied.
///
/// Current hp is carried over from `character.stats.hp`, clamped to the new
/// maximum. A character at 0 hp stays at 0; battle setup resets hp anyway.
/// Resolving an already resolved character yields the same stats.
pub fn resolve_stats(
    character: &Character,
    inventory: &Inventory,
) -> Result<CharacterStats, StatsError> {
    let role = character.role;
    let mut stats = base_stats(
        character.rarity,
        character.level,
        character.effective_rank(),
        role,
    );

    let slots = [
        (EquipmentKind::Weapon, &character.equipped_weapon),
        (EquipmentKind::Chip, &character.equipped_chip),
        (EquipmentKind::Cosmetic, &character.equipped_cosmetic),
    ];

    for (slot, equipped) in slots {
        let Some(item_id) = equipped else {
            continue;
        };
        let equipment = lookup(character, inventory, item_id, slot)?;
        if !equipment.usable_by(role) {
            tracing::trace!(
                character = %character.id.as_str(),
                item = %item_id.as_str(),
                "equipped item restricted to another role; ignoring"
            );
            continue;
        }

        match equipment {
            Equipment::Weapon(weapon) => {
                stats.atk += weapon.atk;
                stats.crit_rate += weapon.crit_rate;
                stats.armor_pen += weapon.armor_pen;
            }
            Equipment::Chip(chip) => {
                stats.apply(&chip.main_stat);
                if let Some(sub) = &chip.sub_stat {
                    stats.apply(sub);
                }
            }
            Equipment::Cosmetic(cosmetic) => stats.apply(&cosmetic.stat_bonus),
        }
    }

    stats.hp = character.stats.hp.min(stats.max_hp);
    Ok(stats)
}

fn lookup<'a>(
    character: &Character,
    inventory: &'a Inventory,
    item_id: &ItemId,
    slot: EquipmentKind,
) -> Result<&'a Equipment, StatsError> {
    let equipment = inventory
        .get(item_id)
        .ok_or_else(|| StatsError::MissingEquipment {
            character: character.id.clone(),
            item: item_id.clone(),
        })?;

    if equipment.kind() != slot {
        return Err(StatsError::WrongSlot {
            character: character.id.clone(),
            item: item_id.clone(),
            slot,
            found: equipment.kind(),
        });
    }
    Ok(equipment)
}
