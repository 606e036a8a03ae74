use std::fmt;

/// Identifier of a unit inside one battle.
///
/// Unit ids are assigned by the engine when the roster is built and are only
/// meaningful for the lifetime of that battle.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct UnitId(pub u32);

impl fmt::Display for UnitId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Identifier of a persistent record (character or equipment) in the roster.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct ItemId(pub String);

impl ItemId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ItemId {
    fn from(value: &str) -> Self {
        Self(value.to_owned())
    }
}

/// Which side of the field a unit fights for.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum Side {
    Player,
    Enemy,
}

impl Side {
    /// The side this one fights against.
    pub const fn opponent(self) -> Self {
        match self {
            Side::Player => Side::Enemy,
            Side::Enemy => Side::Player,
        }
    }
}

/// Combat class of a character.
///
/// The role drives the stat scaling profile (see [`crate::stats::RoleProfile`])
/// and gates role-restricted equipment.
#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
    strum::EnumIter,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE", ascii_case_insensitive)]
pub enum Role {
    /// Frontline tank: high hp/def, slow.
    Vanguard,
    /// Melee damage dealer. Legacy records without a role fall back here.
    #[default]
    Duelist,
    /// Support/healer: fast, low attack.
    Operator,
    /// Ranged damage: high attack and crit, slow.
    Deadeye,
}

/// Elemental affinity used by the weakness/resistance table.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
    strum::EnumIter,
    strum::EnumCount,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(ascii_case_insensitive)]
pub enum Element {
    Pyro,
    Hydro,
    Dendro,
    Electro,
    Cryo,
}

/// Rarity tier of a character or item.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE", ascii_case_insensitive)]
pub enum Rarity {
    Common,
    Rare,
    Legendary,
    Promo,
}

impl Rarity {
    /// Star count of the tier (3★ common up to 6★ promo).
    pub const fn stars(self) -> u32 {
        match self {
            Rarity::Common => 3,
            Rarity::Rare => 4,
            Rarity::Legendary => 5,
            Rarity::Promo => 6,
        }
    }

    /// Stat multiplier applied to hp/atk/def by the role-scaling formula.
    pub const fn stat_multiplier(self) -> f64 {
        match self {
            Rarity::Common => 1.0,
            Rarity::Rare => 1.5,
            Rarity::Legendary => 2.0,
            Rarity::Promo => 2.5,
        }
    }
}

/// One of the three skills every unit carries.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
    strum::EnumIter,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum SkillSlot {
    Normal,
    Skill,
    Ultimate,
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn role_parses_case_insensitive() {
        assert_eq!(Role::from_str("vanguard").unwrap(), Role::Vanguard);
        assert_eq!(Role::Deadeye.to_string(), "DEADEYE");
    }

    #[test]
    fn rarity_order_matches_stars() {
        assert!(Rarity::Common < Rarity::Rare);
        assert!(Rarity::Legendary < Rarity::Promo);
        assert_eq!(Rarity::Rare.stars(), 4);
    }

    #[test]
    fn side_opponent_flips() {
        assert_eq!(Side::Player.opponent(), Side::Enemy);
        assert_eq!(Side::Enemy.opponent(), Side::Player);
    }
}
