//! Combat result types and single-hit resolution.

use super::damage::{
    DamageFactors, calculate_damage, calculate_heal, effective_defense, mitigation,
    stability_damage,
};
use super::element::Affinity;
use super::hit::{check_critical, check_hit};
use crate::config::BattleConfig;
use crate::env::RandomSource;
use crate::state::{BattleUnit, Skill, Stability};

/// Presentation label of a resolved hit.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display, strum::AsRefStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum HitOutcome {
    Normal,
    Critical,
    Heal,
    Miss,
    /// Elemental advantage; takes precedence over `Critical`.
    Weak,
    /// Elemental disadvantage; takes precedence over `Critical`.
    Resist,
}

/// Result of resolving one skill against one target.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DamageResult {
    /// Damage dealt, or hp restored for `Heal`.
    pub amount: u32,
    /// Tracked separately because `Weak`/`Resist` hide a critical label.
    pub is_critical: bool,
    pub outcome: HitOutcome,
    pub stability_damage: Stability,
}

impl DamageResult {
    pub const MISS: Self = Self {
        amount: 0,
        is_critical: false,
        outcome: HitOutcome::Miss,
        stability_damage: Stability::ZERO,
    };

    pub fn is_miss(&self) -> bool {
        self.outcome == HitOutcome::Miss
    }
}

/// Resolves `skill` used by `attacker` on `defender`.
///
/// Heals draw nothing. Damaging skills draw the hit roll first and, if the
/// hit connects, the critical roll. Nothing is mutated; the engine applies
/// the result.
pub fn resolve(
    attacker: &BattleUnit,
    defender: &BattleUnit,
    skill: &Skill,
    config: &BattleConfig,
    rng: &mut (impl RandomSource + ?Sized),
) -> DamageResult {
    let atk = &attacker.stats;
    let def = &defender.stats;

    if skill.is_heal {
        return DamageResult {
            amount: calculate_heal(atk.atk, skill.multiplier),
            is_critical: false,
            outcome: HitOutcome::Heal,
            stability_damage: Stability::ZERO,
        };
    }

    // 1. Hit check
    if !check_hit(atk.accuracy, def.evasion, rng.next_f64()) {
        return DamageResult::MISS;
    }

    // 2. Critical check
    let is_critical = check_critical(atk.crit_rate, rng.next_f64());
    let crit = if is_critical {
        f64::from(atk.crit_dmg) / 100.0
    } else {
        1.0
    };

    // 3. Element
    let affinity = Affinity::between(attacker.element, defender.element);
    let outcome = match affinity {
        Affinity::Advantage => HitOutcome::Weak,
        Affinity::Disadvantage => HitOutcome::Resist,
        Affinity::Neutral if is_critical => HitOutcome::Critical,
        Affinity::Neutral => HitOutcome::Normal,
    };

    // 4. Overload against a broken stance
    let overload = if defender.is_stunned {
        config.overload_multiplier
    } else {
        1.0
    };

    let factors = DamageFactors {
        crit,
        element: affinity.multiplier(),
        overload,
        mitigation: mitigation(effective_defense(def.def, atk.armor_pen)),
    };

    DamageResult {
        amount: calculate_damage(atk.atk, skill.multiplier, factors),
        is_critical,
        outcome,
        stability_damage: stability_damage(affinity, is_critical),
    }
}
