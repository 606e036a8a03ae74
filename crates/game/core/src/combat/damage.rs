//! Damage, mitigation and stability arithmetic.

use super::element::Affinity;
use crate::state::Stability;

/// Defense left after armor penetration, never negative.
///
/// ```text
/// effective_def = max(0, def × (1 − armor_pen / 100))
/// ```
pub fn effective_defense(def: i32, armor_pen: i32) -> f64 {
    (f64::from(def) * (1.0 - f64::from(armor_pen) / 100.0)).max(0.0)
}

/// Fraction of raw damage that goes through `effective_def`.
///
/// ```text
/// mitigation = 100 / (100 + effective_def)
/// ```
pub fn mitigation(effective_def: f64) -> f64 {
    100.0 / (100.0 + effective_def)
}

/// Multipliers stacked on top of `atk × skill multiplier`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DamageFactors {
    pub crit: f64,
    pub element: f64,
    pub overload: f64,
    pub mitigation: f64,
}

/// Final damage of one hit. Always at least 1.
///
/// ```text
/// damage = max(1, ⌊atk × multiplier × crit × element × overload × mitigation⌋)
/// ```
pub fn calculate_damage(atk: i32, multiplier: f64, factors: DamageFactors) -> u32 {
    let mut damage = f64::from(atk) * multiplier;
    damage *= factors.crit;
    damage *= factors.element;
    damage *= factors.overload;
    let dealt = (damage * factors.mitigation).floor();
    if dealt.is_nan() || dealt < 1.0 { 1 } else { dealt as u32 }
}

/// Healing of one heal skill: `⌊atk × multiplier⌋`.
pub fn calculate_heal(atk: i32, multiplier: f64) -> u32 {
    (f64::from(atk) * multiplier).floor().max(0.0) as u32
}

/// Stability a connecting hit removes.
///
/// One point, two against a weakness, plus half a point on a critical.
pub fn stability_damage(affinity: Affinity, is_critical: bool) -> Stability {
    let base = match affinity {
        Affinity::Advantage => Stability::points(2),
        Affinity::Neutral | Affinity::Disadvantage => Stability::ONE,
    };
    if is_critical {
        base.saturating_add(Stability::HALF)
    } else {
        base
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn plain(mitigation: f64) -> DamageFactors {
        DamageFactors {
            crit: 1.0,
            element: 1.0,
            overload: 1.0,
            mitigation,
        }
    }

    #[test]
    fn armor_pen_reduces_defense_but_not_below_zero() {
        assert_eq!(effective_defense(100, 0), 100.0);
        assert_eq!(effective_defense(100, 25), 75.0);
        assert_eq!(effective_defense(100, 150), 0.0);
        assert_eq!(effective_defense(-20, 0), 0.0);
    }

    #[test]
    fn mitigation_halves_at_one_hundred_defense() {
        assert_eq!(mitigation(0.0), 1.0);
        assert_eq!(mitigation(100.0), 0.5);
    }

    #[test]
    fn damage_is_floored() {
        // 130 × 100/150
        assert_eq!(calculate_damage(130, 1.0, plain(mitigation(50.0))), 86);
    }

    #[test]
    fn damage_never_drops_below_one() {
        assert_eq!(calculate_damage(1, 0.1, plain(0.01)), 1);
        assert_eq!(calculate_damage(0, 1.0, plain(1.0)), 1);
    }

    #[test]
    fn non_finite_multiplier_still_deals_one() {
        assert_eq!(calculate_damage(100, f64::NAN, plain(1.0)), 1);
        assert_eq!(calculate_damage(100, f64::NEG_INFINITY, plain(1.0)), 1);
    }

    #[test]
    fn factors_multiply() {
        let factors = DamageFactors {
            crit: 1.5,
            element: 2.0,
            overload: 1.5,
            mitigation: 0.5,
        };
        // 100 × 1.5 × 2 × 1.5 × 0.5
        assert_eq!(calculate_damage(100, 1.0, factors), 225);
    }

    #[test]
    fn heal_is_attack_times_multiplier() {
        assert_eq!(calculate_heal(70, 1.5), 105);
        assert_eq!(calculate_heal(71, 0.5), 35);
    }

    #[test]
    fn stability_damage_table() {
        assert_eq!(stability_damage(Affinity::Neutral, false), Stability::points(1));
        assert_eq!(stability_damage(Affinity::Advantage, false), Stability::points(2));
        assert_eq!(stability_damage(Affinity::Disadvantage, true), Stability::from_halves(3));
        assert_eq!(stability_damage(Affinity::Advantage, true), Stability::from_halves(5));
    }
}
