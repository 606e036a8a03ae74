//! Combat power (CP) and the pre-battle difficulty hint.

use crate::state::CharacterStats;

/// Unfloored combat power contribution of one stat block.
///
/// `cp = atk + hp / 10 + def + speed`, using current hp.
pub fn combat_power(stats: &CharacterStats) -> f64 {
    f64::from(stats.atk) + f64::from(stats.hp) / 10.0 + f64::from(stats.def) + f64::from(stats.speed)
}

/// Combined combat power of a squad, floored once after summing.
pub fn squad_power<'a>(members: impl IntoIterator<Item = &'a CharacterStats>) -> u32 {
    let total: f64 = members.into_iter().map(combat_power).sum();
    total.max(0.0).floor() as u32
}

/// How a squad measures up against a stage's recommended CP.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display, strum::AsRefStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum DifficultyHint {
    Safe,
    Risky,
    Danger,
}

impl DifficultyHint {
    /// Squads more than this far below the recommendation are in danger.
    pub const DANGER_MARGIN: i64 = 2000;

    pub fn assess(squad_cp: u32, recommended_cp: u32) -> Self {
        let diff = i64::from(squad_cp) - i64::from(recommended_cp);
        if diff < -Self::DANGER_MARGIN {
            Self::Danger
        } else if diff < 0 {
            Self::Risky
        } else {
            Self::Safe
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::stats::base_stats;
    use crate::state::{Rarity, Role};

    #[test]
    fn power_sums_weighted_stats() {
        // Common duelist: 130 + 900/10 + 50 + 110
        let stats = base_stats(Rarity::Common, 1, 1, Role::Duelist);
        assert_eq!(combat_power(&stats), 380.0);
    }

    #[test]
    fn squad_power_floors_after_summing() {
        let mut a = base_stats(Rarity::Common, 1, 1, Role::Duelist);
        let mut b = a;
        a.hp = 905;
        b.hp = 905;
        // 380.5 + 380.5
        assert_eq!(squad_power([&a, &b]), 761);
        assert_eq!(squad_power(std::iter::empty()), 0);
    }

    #[test]
    fn difficulty_thresholds() {
        assert_eq!(DifficultyHint::assess(5000, 5000), DifficultyHint::Safe);
        assert_eq!(DifficultyHint::assess(4999, 5000), DifficultyHint::Risky);
        assert_eq!(DifficultyHint::assess(3000, 5000), DifficultyHint::Risky);
        assert_eq!(DifficultyHint::assess(2999, 5000), DifficultyHint::Danger);
    }
}
