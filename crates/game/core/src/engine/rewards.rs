//! Victory rewards.
//!
//! Draw order is fixed: variance, drop chance, then (on a drop) the
//! weapon/chip split and the item id.

use super::result::Rewards;
use crate::config::BattleConfig;
use crate::env::{RandomSource, StageDescriptor};
use crate::state::{Equipment, ItemId, ModChip, Rarity, StatBonus, StatKind, Weapon};

/// Rolls the rewards for clearing `stage`.
pub fn roll_rewards(
    stage: &StageDescriptor,
    config: &BattleConfig,
    rng: &mut (impl RandomSource + ?Sized),
) -> Rewards {
    let variance = rng.uniform(config.reward_variance_min, config.reward_variance_max);
    let scale = |base: u32| (f64::from(base) * variance).floor().max(0.0) as u32;

    let mut rewards = Rewards {
        gold: scale(stage.rewards.gold),
        xp: scale(stage.rewards.xp),
        gems: if stage.boss { config.boss_gems } else { 0 },
        items: Vec::new(),
    };

    let drop_chance = if stage.boss {
        config.boss_drop_chance
    } else {
        config.drop_chance
    };
    if rng.chance(drop_chance) {
        rewards.items.push(roll_drop(stage, config, rng));
    }

    rewards
}

fn roll_drop(
    stage: &StageDescriptor,
    config: &BattleConfig,
    rng: &mut (impl RandomSource + ?Sized),
) -> Equipment {
    let rarity = if stage.id > config.rare_drop_after_stage {
        Rarity::Rare
    } else {
        Rarity::Common
    };
    let stars = rarity.stars() as i32;
    let is_weapon = rng.chance(config.weapon_drop_share);
    let id = ItemId::new(format!("drop-{:08x}", rng.next_u32()));

    if is_weapon {
        Equipment::Weapon(Weapon {
            id,
            name: "Dropped Weapon".into(),
            rarity,
            restricted_role: None,
            atk: 15 * stars,
            crit_rate: stars,
            armor_pen: 0,
        })
    } else {
        Equipment::Chip(ModChip {
            id,
            name: "Salvaged Chip".into(),
            rarity,
            restricted_role: None,
            main_stat: StatBonus::new(StatKind::Hp, 50 * stars),
            sub_stat: None,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::env::SequenceRng;
    use crate::env::stages::tests::stage;

    #[test]
    fn variance_scales_gold_and_xp() {
        // variance = 0.8 + 0.5 × 0.4 = 1.0; no drop
        let mut rng = SequenceRng::new(vec![0.5, 0.99]);
        let rewards = roll_rewards(&stage(2, false), &BattleConfig::default(), &mut rng);
        assert_eq!(rewards.gold, 100);
        assert_eq!(rewards.xp, 50);
        assert_eq!(rewards.gems, 0);
        assert!(rewards.items.is_empty());
        assert_eq!(rng.draws(), 2);
    }

    #[test]
    fn variance_stays_in_band() {
        let mut low = SequenceRng::new(vec![0.0, 0.99]);
        let rewards = roll_rewards(&stage(2, false), &BattleConfig::default(), &mut low);
        assert_eq!(rewards.gold, 80);

        let mut high = SequenceRng::new(vec![0.999, 0.99]);
        let rewards = roll_rewards(&stage(2, false), &BattleConfig::default(), &mut high);
        assert_eq!(rewards.gold, 119);
    }

    #[test]
    fn boss_stage_grants_gems() {
        let mut rng = SequenceRng::new(vec![0.5, 0.99]);
        let rewards = roll_rewards(&stage(3, true), &BattleConfig::default(), &mut rng);
        assert_eq!(rewards.gems, 50);
    }

    #[test]
    fn early_weapon_drop_is_common() {
        // variance, drop (0.05 < 0.1), weapon (0.2 < 0.6), id
        let mut rng = SequenceRng::new(vec![0.5, 0.05, 0.2, 0.0]);
        let rewards = roll_rewards(&stage(2, false), &BattleConfig::default(), &mut rng);

        let [Equipment::Weapon(weapon)] = rewards.items.as_slice() else {
            panic!("expected a single weapon, got {:?}", rewards.items);
        };
        assert_eq!(weapon.rarity, Rarity::Common);
        assert_eq!(weapon.atk, 45);
        assert_eq!(weapon.crit_rate, 3);
        assert_eq!(weapon.armor_pen, 0);
        assert_eq!(weapon.id.as_str(), "drop-00000000");
    }

    #[test]
    fn late_chip_drop_is_rare() {
        let mut rng = SequenceRng::new(vec![0.5, 0.05, 0.9, 0.0]);
        let rewards = roll_rewards(&stage(4, false), &BattleConfig::default(), &mut rng);

        let [Equipment::Chip(chip)] = rewards.items.as_slice() else {
            panic!("expected a single chip, got {:?}", rewards.items);
        };
        assert_eq!(chip.rarity, Rarity::Rare);
        assert_eq!(chip.main_stat, StatBonus::new(StatKind::Hp, 200));
    }

    #[test]
    fn boss_drop_chance_is_higher() {
        let mut rng = SequenceRng::new(vec![0.5, 0.25, 0.2, 0.0]);
        let normal = roll_rewards(&stage(2, false), &BattleConfig::default(), &mut rng);
        assert!(normal.items.is_empty());

        let mut rng = SequenceRng::new(vec![0.5, 0.25, 0.2, 0.0]);
        let boss = roll_rewards(&stage(3, true), &BattleConfig::default(), &mut rng);
        assert_eq!(boss.items.len(), 1);
    }
}
