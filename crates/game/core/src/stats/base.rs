//! Role-scaled base stats shared by player characters and enemies.
//!
//! ```text
//! rarity_mult = 1.0 | 1.5 | 2.0 | 2.5            (common → promo)
//! level_mult  = 1 + (level - 1) × 0.10
//! rank_mult   = 1 + (rank - 1) × 0.05
//!
//! hp  = ⌊1000 × rarity_mult × role.hp  × level_mult × rank_mult⌋
//! atk = ⌊ 100 × rarity_mult × role.atk × level_mult × rank_mult⌋
//! def = ⌊  50 × rarity_mult × role.def × level_mult × rank_mult⌋
//! spd = ⌊ 100 × role.speed + 0.5 × level⌋
//! ```

use crate::state::{CharacterStats, Rarity, Role, Stability};

const BASE_HP: f64 = 1000.0;
const BASE_ATK: f64 = 100.0;
const BASE_DEF: f64 = 50.0;
const BASE_SPEED: f64 = 100.0;
const BASE_CRIT_RATE: i32 = 5;
const BASE_CRIT_DMG: i32 = 150;
const BASE_ACCURACY: i32 = 100;

/// Per-role scaling and flat bonuses.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RoleProfile {
    pub hp: f64,
    pub atk: f64,
    pub def: f64,
    pub speed: f64,
    pub crit_rate_bonus: i32,
    pub crit_dmg_bonus: i32,
    pub evasion: i32,
    pub accuracy: i32,
    pub armor_pen: i32,
    /// Stance meter a unit of this role starts a battle with.
    pub max_stability: Stability,
}

impl RoleProfile {
    const NEUTRAL: Self = Self {
        hp: 1.0,
        atk: 1.0,
        def: 1.0,
        speed: 1.0,
        crit_rate_bonus: 0,
        crit_dmg_bonus: 0,
        evasion: 0,
        accuracy: BASE_ACCURACY,
        armor_pen: 0,
        max_stability: Stability::points(2),
    };

    pub const fn of(role: Role) -> Self {
        match role {
            Role::Vanguard => Self {
                hp: 1.4,
                def: 1.3,
                atk: 0.8,
                speed: 0.9,
                armor_pen: 10,
                max_stability: Stability::points(3),
                ..Self::NEUTRAL
            },
            Role::Duelist => Self {
                atk: 1.3,
                speed: 1.1,
                hp: 0.9,
                crit_dmg_bonus: 20,
                ..Self::NEUTRAL
            },
            Role::Operator => Self {
                speed: 1.15,
                atk: 0.7,
                evasion: 5,
                ..Self::NEUTRAL
            },
            Role::Deadeye => Self {
                atk: 1.4,
                speed: 0.8,
                hp: 0.8,
                crit_rate_bonus: 10,
                accuracy: 110,
                ..Self::NEUTRAL
            },
        }
    }
}

/// Base stats for a rarity/level/rank/role combination at full health.
pub fn base_stats(rarity: Rarity, level: u32, rank: u32, role: Role) -> CharacterStats {
    let profile = RoleProfile::of(role);
    let rarity_mult = rarity.stat_multiplier();
    let level_mult = 1.0 + (f64::from(level) - 1.0) * 0.1;
    let rank_mult = 1.0 + (f64::from(rank) - 1.0) * 0.05;

    let scale = |base: f64, role_mult: f64| -> f64 {
        (base * rarity_mult * role_mult * level_mult * rank_mult).floor()
    };

    let max_hp = scale(BASE_HP, profile.hp) as u32;
    let speed = (BASE_SPEED * profile.speed + f64::from(level) * 0.5).floor() as i32;

    CharacterStats {
        hp: max_hp,
        max_hp,
        atk: scale(BASE_ATK, profile.atk) as i32,
        def: scale(BASE_DEF, profile.def) as i32,
        speed,
        crit_rate: BASE_CRIT_RATE + rank.saturating_sub(1) as i32 + profile.crit_rate_bonus,
        crit_dmg: BASE_CRIT_DMG + profile.crit_dmg_bonus,
        evasion: profile.evasion,
        accuracy: profile.accuracy,
        armor_pen: profile.armor_pen,
    }
}
