use super::{CharacterStats, Element, ItemId, Rarity, Role, SkillSet};

/// Persistent roster record of an owned character.
///
/// Battles only read characters; `stats` holds the last computed block and
/// its `hp` is the character's current health between screens.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Character {
    pub id: ItemId,
    pub name: String,
    #[cfg_attr(feature = "serde", serde(default))]
    pub role: Role,
    pub element: Element,
    pub rarity: Rarity,
    pub level: u32,
    /// Refinement rank, 1 through 5.
    pub rank: u32,
    /// Omitted in content files; resolved from role and rarity on first use.
    #[cfg_attr(feature = "serde", serde(default))]
    pub stats: CharacterStats,
    pub skills: SkillSet,
    #[cfg_attr(feature = "serde", serde(default))]
    pub equipped_weapon: Option<ItemId>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub equipped_chip: Option<ItemId>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub equipped_cosmetic: Option<ItemId>,
}

impl Character {
    pub const MIN_RANK: u32 = 1;
    pub const MAX_RANK: u32 = 5;

    /// Rank clamped into the valid refinement range.
    pub fn effective_rank(&self) -> u32 {
        self.rank.clamp(Self::MIN_RANK, Self::MAX_RANK)
    }

    /// Ids of every equipped record, in weapon, chip, cosmetic order.
    pub fn equipped(&self) -> impl Iterator<Item = &ItemId> {
        [
            self.equipped_weapon.as_ref(),
            self.equipped_chip.as_ref(),
            self.equipped_cosmetic.as_ref(),
        ]
        .into_iter()
        .flatten()
    }
}
