use arrayvec::ArrayVec;
use strum::{EnumCount, IntoEnumIterator};

use super::SetupError;
use crate::config::BattleConfig;
use crate::env::{Archetype, ArchetypeTable, RandomSource, StageDescriptor, TableError};
use crate::state::{BattleUnit, Cooldowns, Element, Rarity, Side, UnitId};
use crate::stats::{RoleProfile, base_stats};

/// Rarity enemies are generated at for a stage level.
pub fn enemy_rarity(stage_level: u32, is_boss: bool) -> Rarity {
    if is_boss || stage_level > 30 {
        Rarity::Legendary
    } else if stage_level > 10 {
        Rarity::Rare
    } else {
        Rarity::Common
    }
}

/// Builds one enemy for `stage_level`.
///
/// Draws from `rng` in a fixed order: the archetype roll (non-boss only),
/// then the element.
pub fn build_enemy_unit(
    id: UnitId,
    stage_level: u32,
    is_boss: bool,
    archetypes: &ArchetypeTable,
    config: &BattleConfig,
    rng: &mut (impl RandomSource + ?Sized),
) -> Result<BattleUnit, TableError> {
    let archetype: &Archetype = if is_boss {
        archetypes.boss()?
    } else {
        archetypes.draw(stage_level, rng)?
    };

    let rarity = enemy_rarity(stage_level, is_boss);
    let mut stats = base_stats(rarity, stage_level, 1, archetype.role);

    let scaled = |value: f64, multiplier: f64| (value * multiplier).floor();
    let m = archetype.stats;
    stats.max_hp = scaled(f64::from(stats.max_hp), m.hp) as u32;
    stats.hp = stats.max_hp;
    stats.atk = scaled(f64::from(stats.atk), m.atk) as i32;
    stats.def = scaled(f64::from(stats.def), m.def) as i32;
    stats.speed = scaled(f64::from(stats.speed), m.speed) as i32;
    stats.armor_pen = 0;
    stats.crit_rate = config.enemy_crit_rate;

    if stage_level == BattleConfig::TUTORIAL_STAGE {
        stats.speed = stats.speed.min(config.tutorial_speed_cap);
    }

    let element = Element::iter()
        .nth(rng.below(Element::COUNT))
        .unwrap_or(Element::Pyro);

    let max_stability = if is_boss {
        BattleConfig::BOSS_STABILITY
    } else {
        RoleProfile::of(archetype.role).max_stability
    };

    let name = if is_boss {
        format!("BOSS: {}", archetype.name)
    } else {
        format!("{} v{}", archetype.name, stage_level)
    };

    tracing::trace!(
        unit = %id,
        archetype = %archetype.key,
        %element,
        is_boss,
        "spawned enemy"
    );

    Ok(BattleUnit {
        id,
        name,
        side: Side::Enemy,
        role: archetype.role,
        element,
        rarity,
        level: stage_level,
        rank: 1,
        stats,
        skills: archetype.skill_set(),
        cooldowns: Cooldowns::default(),
        stability: max_stability,
        max_stability,
        is_stunned: false,
    })
}

/// Builds the enemy party of `stage`, numbering units from `first_id`.
///
/// On a boss stage the second slot (the only slot of a single-enemy stage) is
/// the boss, and the first slot becomes a second boss with
/// `config.extra_boss_chance`. That chance is drawn before any enemy is built.
pub fn build_enemy_party(
    stage: &StageDescriptor,
    archetypes: &ArchetypeTable,
    config: &BattleConfig,
    rng: &mut (impl RandomSource + ?Sized),
    first_id: u32,
) -> Result<ArrayVec<BattleUnit, { BattleConfig::MAX_ENEMIES }>, SetupError> {
    stage.validate()?;

    let count = stage.enemies.count as usize;
    let boss_slot = if count > 1 { 1 } else { 0 };
    let extra_boss = stage.boss && rng.chance(config.extra_boss_chance);

    let mut party = ArrayVec::new();
    for slot in 0..count {
        let is_boss = stage.boss && (slot == boss_slot || (slot == 0 && extra_boss));
        let id = UnitId(first_id + slot as u32);
        party.push(build_enemy_unit(
            id,
            stage.level(),
            is_boss,
            archetypes,
            config,
            rng,
        )?);
    }
    Ok(party)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::env::SequenceRng;
    use crate::env::archetypes::tests::sample_table;
    use crate::env::stages::tests::stage;
    use crate::state::{Role, Stability};

    #[test]
    fn rarity_bands() {
        assert_eq!(enemy_rarity(1, false), Rarity::Common);
        assert_eq!(enemy_rarity(10, false), Rarity::Common);
        assert_eq!(enemy_rarity(11, false), Rarity::Rare);
        assert_eq!(enemy_rarity(31, false), Rarity::Legendary);
        assert_eq!(enemy_rarity(3, true), Rarity::Legendary);
    }

    #[test]
    fn tutorial_enemies_are_capped_and_flux_rat_scales() {
        let table = sample_table();
        // archetype roll 0.1 → flux_rat, element roll 0.0 → Pyro
        let mut rng = SequenceRng::new(vec![0.1, 0.0]);
        let enemy =
            build_enemy_unit(UnitId(3), 1, false, &table, &BattleConfig::default(), &mut rng)
                .unwrap();

        assert_eq!(enemy.name, "flux rat v1");
        assert_eq!(enemy.role, Role::Duelist);
        assert_eq!(enemy.element, Element::Pyro);
        // ⌊900 × 0.6⌋, ⌊130 × 1.1⌋, ⌊50 × 0.5⌋
        assert_eq!(enemy.max_hp(), 540);
        assert_eq!(enemy.hp(), 540);
        assert_eq!(enemy.stats.atk, 143);
        assert_eq!(enemy.stats.def, 25);
        // ⌊110 × 1.1⌋ = 121, capped to 95 on the tutorial stage
        assert_eq!(enemy.stats.speed, 95);
        assert_eq!(enemy.stats.crit_rate, 5);
        assert_eq!(enemy.stats.armor_pen, 0);
        assert_eq!(enemy.max_stability, Stability::points(2));
        assert_eq!(rng.draws(), 2);
    }

    #[test]
    fn vanguard_enemies_keep_penetration_at_zero() {
        let table = sample_table();
        let mut rng = SequenceRng::new(vec![0.9, 0.99]);
        let enemy =
            build_enemy_unit(UnitId(3), 2, false, &table, &BattleConfig::default(), &mut rng)
                .unwrap();

        assert_eq!(enemy.role, Role::Vanguard);
        assert_eq!(enemy.element, Element::Cryo);
        assert_eq!(enemy.stats.armor_pen, 0);
        assert_eq!(enemy.max_stability, Stability::points(3));
    }

    #[test]
    fn boss_skips_archetype_roll() {
        let table = sample_table();
        let mut rng = SequenceRng::new(vec![0.3]);
        let boss =
            build_enemy_unit(UnitId(4), 3, true, &table, &BattleConfig::default(), &mut rng)
                .unwrap();

        assert_eq!(boss.name, "BOSS: data lich");
        assert_eq!(boss.rarity, Rarity::Legendary);
        assert_eq!(boss.max_stability, Stability::points(5));
        assert_eq!(boss.stability, Stability::points(5));
        assert!(boss.skills.ultimate.is_aoe);
        assert_eq!(rng.draws(), 1);
    }

    #[test]
    fn boss_stage_puts_boss_in_second_slot() {
        let table = sample_table();
        // extra boss roll 0.9 fails; then (archetype, element) per normal slot
        let mut rng = SequenceRng::new(vec![0.9, 0.1, 0.0, 0.2, 0.1, 0.0, 0.4]);
        let party = build_enemy_party(
            &stage(3, true),
            &table,
            &BattleConfig::default(),
            &mut rng,
            3,
        )
        .unwrap();

        assert_eq!(party.len(), 3);
        assert!(!party[0].name.starts_with("BOSS"));
        assert!(party[1].name.starts_with("BOSS"));
        assert!(!party[2].name.starts_with("BOSS"));
        let ids: Vec<_> = party.iter().map(|unit| unit.id).collect();
        assert_eq!(ids, vec![UnitId(3), UnitId(4), UnitId(5)]);
    }

    #[test]
    fn extra_boss_can_take_the_first_slot() {
        let table = sample_table();
        let mut rng = SequenceRng::new(vec![0.1]);
        let party = build_enemy_party(
            &stage(3, true),
            &table,
            &BattleConfig::default(),
            &mut rng,
            3,
        )
        .unwrap();

        assert!(party[0].name.starts_with("BOSS"));
        assert!(party[1].name.starts_with("BOSS"));
    }

    #[test]
    fn single_enemy_boss_stage_uses_first_slot() {
        let table = sample_table();
        let mut lone = stage(3, true);
        lone.enemies.count = 1;
        let mut rng = SequenceRng::new(vec![0.9, 0.0]);
        let party =
            build_enemy_party(&lone, &table, &BattleConfig::default(), &mut rng, 1).unwrap();

        assert_eq!(party.len(), 1);
        assert!(party[0].name.starts_with("BOSS"));
    }

    #[test]
    fn normal_stage_draws_no_boss_roll() {
        let table = sample_table();
        let mut rng = SequenceRng::new(vec![0.1, 0.0]);
        let party = build_enemy_party(
            &stage(2, false),
            &table,
            &BattleConfig::default(),
            &mut rng,
            3,
        )
        .unwrap();

        assert!(party.iter().all(|unit| !unit.name.starts_with("BOSS")));
        assert_eq!(rng.draws(), 6);
    }

    #[test]
    fn invalid_stage_is_rejected() {
        let table = sample_table();
        let mut bad = stage(2, false);
        bad.enemies.count = 0;
        let mut rng = SequenceRng::constant(0.5);
        assert!(matches!(
            build_enemy_party(&bad, &table, &BattleConfig::default(), &mut rng, 3),
            Err(SetupError::Stage(_))
        ));
    }
}
