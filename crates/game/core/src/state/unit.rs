use std::fmt;

use super::{CharacterStats, Cooldowns, Element, Rarity, Role, Side, SkillSet, SkillSlot, UnitId};

/// Stability ("poise") amount, stored in half points.
///
/// Critical hits deal an extra half point of stability damage, so whole
/// numbers are not enough; halves keep the arithmetic exact.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Stability(u16);

impl Stability {
    pub const ZERO: Self = Self(0);
    pub const HALF: Self = Self(1);
    pub const ONE: Self = Self(2);

    /// Whole stability points.
    pub const fn points(points: u16) -> Self {
        Self(points * 2)
    }

    pub const fn from_halves(halves: u16) -> Self {
        Self(halves)
    }

    pub const fn halves(self) -> u16 {
        self.0
    }

    pub fn as_f32(self) -> f32 {
        f32::from(self.0) / 2.0
    }

    pub const fn is_depleted(self) -> bool {
        self.0 == 0
    }

    #[must_use]
    pub const fn saturating_add(self, other: Self) -> Self {
        Self(self.0.saturating_add(other.0))
    }

    #[must_use]
    pub const fn saturating_sub(self, other: Self) -> Self {
        Self(self.0.saturating_sub(other.0))
    }

    /// Stability regained after sitting out a stun: half the maximum in whole
    /// points (rounded down), never less than one point.
    pub const fn recovery(max: Self) -> Self {
        let whole = max.0 / 2;
        let regained = whole / 2;
        if regained == 0 {
            Self::ONE
        } else {
            Self::points(regained)
        }
    }
}

impl fmt::Display for Stability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0 % 2 == 0 {
            write!(f, "{}", self.0 / 2)
        } else {
            write!(f, "{}.5", self.0 / 2)
        }
    }
}

/// A unit fighting in one battle.
///
/// Built fresh for every battle by [`crate::factory`] and owned by exactly one
/// [`crate::engine::BattleEngine`]. `stats` is resolved once at battle start
/// and only `stats.hp` changes afterwards.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BattleUnit {
    pub id: UnitId,
    pub name: String,
    pub side: Side,
    pub role: Role,
    pub element: Element,
    pub rarity: Rarity,
    pub level: u32,
    pub rank: u32,
    pub stats: CharacterStats,
    pub skills: SkillSet,
    pub cooldowns: Cooldowns,
    pub stability: Stability,
    pub max_stability: Stability,
    pub is_stunned: bool,
}

impl BattleUnit {
    pub fn is_alive(&self) -> bool {
        self.stats.hp > 0
    }

    pub fn is_enemy(&self) -> bool {
        self.side == Side::Enemy
    }

    pub fn hp(&self) -> u32 {
        self.stats.hp
    }

    pub fn max_hp(&self) -> u32 {
        self.stats.max_hp
    }

    pub fn missing_hp(&self) -> u32 {
        self.stats.max_hp.saturating_sub(self.stats.hp)
    }

    /// Whether `slot` is off cooldown.
    pub fn can_use(&self, slot: SkillSlot) -> bool {
        self.cooldowns.is_ready(slot)
    }

    /// Removes `amount` hp, floored at zero. Returns the hp actually lost.
    pub fn take_damage(&mut self, amount: u32) -> u32 {
        let lost = amount.min(self.stats.hp);
        self.stats.hp -= lost;
        lost
    }

    /// Restores `amount` hp, capped at the maximum. Returns the hp actually gained.
    pub fn heal(&mut self, amount: u32) -> u32 {
        let gained = amount.min(self.missing_hp());
        self.stats.hp += gained;
        gained
    }

    /// Removes stability and reports whether this hit broke the unit's stance.
    ///
    /// A unit that is already stunned stays stunned and never breaks twice.
    pub fn lose_stability(&mut self, amount: Stability) -> bool {
        self.stability = self.stability.saturating_sub(amount);
        if !self.is_stunned && self.stability.is_depleted() {
            self.is_stunned = true;
            return true;
        }
        false
    }

    /// Consumes a stunned turn: clears the stun and regains stability.
    pub fn recover_from_stun(&mut self) -> Stability {
        self.is_stunned = false;
        self.stability = Stability::recovery(self.max_stability).min(self.max_stability);
        self.stability
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn recovery_is_half_max_with_floor_of_one() {
        assert_eq!(Stability::recovery(Stability::points(2)), Stability::points(1));
        assert_eq!(Stability::recovery(Stability::points(3)), Stability::points(1));
        assert_eq!(Stability::recovery(Stability::points(5)), Stability::points(2));
        assert_eq!(Stability::recovery(Stability::points(1)), Stability::points(1));
    }

    #[test]
    fn stability_displays_half_points() {
        assert_eq!(Stability::from_halves(3).to_string(), "1.5");
        assert_eq!(Stability::points(2).to_string(), "2");
        assert_eq!(Stability::from_halves(3).as_f32(), 1.5);
    }

    #[test]
    fn subtraction_saturates() {
        let left = Stability::HALF.saturating_sub(Stability::ONE);
        assert_eq!(left, Stability::ZERO);
    }
}
