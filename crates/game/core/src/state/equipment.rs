use std::collections::BTreeMap;

use super::{ItemId, Rarity, Role, StatBonus};

/// Weapon record. Contributes attack, crit rate and armor penetration.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Weapon {
    pub id: ItemId,
    pub name: String,
    pub rarity: Rarity,
    #[cfg_attr(feature = "serde", serde(default))]
    pub restricted_role: Option<Role>,
    pub atk: i32,
    pub crit_rate: i32,
    #[cfg_attr(feature = "serde", serde(default))]
    pub armor_pen: i32,
}

/// Mod chip record. A main stat plus an optional sub stat.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ModChip {
    pub id: ItemId,
    pub name: String,
    pub rarity: Rarity,
    #[cfg_attr(feature = "serde", serde(default))]
    pub restricted_role: Option<Role>,
    pub main_stat: StatBonus,
    #[cfg_attr(feature = "serde", serde(default))]
    pub sub_stat: Option<StatBonus>,
}

/// Cosmetic background. Always applies its bonus, whatever the role.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Cosmetic {
    pub id: ItemId,
    pub name: String,
    pub rarity: Rarity,
    pub stat_bonus: StatBonus,
}

/// Kind tag of an [`Equipment`] record.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display, strum::AsRefStr)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case")]
pub enum EquipmentKind {
    Weapon,
    Chip,
    Cosmetic,
}

/// Any equippable record from the inventory.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Equipment {
    Weapon(Weapon),
    Chip(ModChip),
    Cosmetic(Cosmetic),
}

impl Equipment {
    pub fn id(&self) -> &ItemId {
        match self {
            Equipment::Weapon(weapon) => &weapon.id,
            Equipment::Chip(chip) => &chip.id,
            Equipment::Cosmetic(cosmetic) => &cosmetic.id,
        }
    }

    pub fn name(&self) -> &str {
        match self {
            Equipment::Weapon(weapon) => &weapon.name,
            Equipment::Chip(chip) => &chip.name,
            Equipment::Cosmetic(cosmetic) => &cosmetic.name,
        }
    }

    pub fn rarity(&self) -> Rarity {
        match self {
            Equipment::Weapon(weapon) => weapon.rarity,
            Equipment::Chip(chip) => chip.rarity,
            Equipment::Cosmetic(cosmetic) => cosmetic.rarity,
        }
    }

    pub fn kind(&self) -> EquipmentKind {
        match self {
            Equipment::Weapon(_) => EquipmentKind::Weapon,
            Equipment::Chip(_) => EquipmentKind::Chip,
            Equipment::Cosmetic(_) => EquipmentKind::Cosmetic,
        }
    }

    /// Whether a unit of `role` gets the bonuses of this record.
    pub fn usable_by(&self, role: Role) -> bool {
        let restriction = match self {
            Equipment::Weapon(weapon) => weapon.restricted_role,
            Equipment::Chip(chip) => chip.restricted_role,
            Equipment::Cosmetic(_) => None,
        };
        restriction.is_none_or(|restricted| restricted == role)
    }
}

/// Equipment records keyed by id.
///
/// Read-only for the duration of a battle; the caller adds dropped items
/// after the battle ends.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Inventory {
    items: BTreeMap<ItemId, Equipment>,
}

impl Inventory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts a record, replacing any previous one with the same id.
    pub fn insert(&mut self, equipment: Equipment) -> Option<Equipment> {
        self.items.insert(equipment.id().clone(), equipment)
    }

    pub fn get(&self, id: &ItemId) -> Option<&Equipment> {
        self.items.get(id)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Equipment> {
        self.items.values()
    }
}

impl FromIterator<Equipment> for Inventory {
    fn from_iter<T: IntoIterator<Item = Equipment>>(iter: T) -> Self {
        let mut inventory = Self::new();
        for equipment in iter {
            inventory.insert(equipment);
        }
        inventory
    }
}

impl Extend<Equipment> for Inventory {
    fn extend<T: IntoIterator<Item = Equipment>>(&mut self, iter: T) {
        for equipment in iter {
            self.insert(equipment);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::StatKind;

    fn medic_weapon() -> Equipment {
        Equipment::Weapon(Weapon {
            id: ItemId::from("medi-system"),
            name: "Medi-System".into(),
            rarity: Rarity::Rare,
            restricted_role: Some(Role::Operator),
            atk: 40,
            crit_rate: 0,
            armor_pen: 0,
        })
    }

    #[test]
    fn restricted_weapon_only_usable_by_its_role() {
        let weapon = medic_weapon();
        assert!(weapon.usable_by(Role::Operator));
        assert!(!weapon.usable_by(Role::Duelist));
    }

    #[test]
    fn cosmetics_are_never_restricted() {
        let cosmetic = Equipment::Cosmetic(Cosmetic {
            id: ItemId::from("holo"),
            name: "Holo-Style".into(),
            rarity: Rarity::Common,
            stat_bonus: StatBonus::new(StatKind::Speed, 15),
        });
        assert!(cosmetic.usable_by(Role::Vanguard));
        assert_eq!(cosmetic.kind(), EquipmentKind::Cosmetic);
    }

    #[test]
    fn inventory_is_keyed_by_id() {
        let mut inventory: Inventory = [medic_weapon()].into_iter().collect();
        assert_eq!(inventory.len(), 1);
        assert!(inventory.insert(medic_weapon()).is_some());
        assert_eq!(inventory.len(), 1);
        assert!(inventory.get(&ItemId::from("medi-system")).is_some());
    }
}
