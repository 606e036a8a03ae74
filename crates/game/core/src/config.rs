use crate::state::Stability;

/// Battle tuning constants and tunable parameters.
///
/// Runtime-tunable values are loaded from `config.toml` by the content crate;
/// missing keys fall back to the defaults below.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct BattleConfig {
    /// Reward variance is drawn uniformly from `[min, max)`.
    pub reward_variance_min: f64,
    pub reward_variance_max: f64,
    /// Gems granted for clearing a boss stage.
    pub boss_gems: u32,
    /// Chance of a single item drop on a normal stage.
    pub drop_chance: f64,
    /// Chance of a single item drop on a boss stage.
    pub boss_drop_chance: f64,
    /// Share of drops that are weapons; the rest are chips.
    pub weapon_drop_share: f64,
    /// Stages with an id above this drop rare items instead of common ones.
    pub rare_drop_after_stage: u32,
    /// Crit rate every enemy fights with, regardless of archetype.
    pub enemy_crit_rate: i32,
    /// Chance that the first enemy slot of a boss stage is a second boss.
    pub extra_boss_chance: f64,
    /// Damage multiplier against a stunned defender.
    pub overload_multiplier: f64,
    /// Enemy speed ceiling on the tutorial stage.
    pub tutorial_speed_cap: i32,
}

impl BattleConfig {
    // ===== compile-time constants used as type parameters =====
    /// Characters fielded by the player.
    pub const MAX_SQUAD: usize = 3;
    /// Enemies a stage may field.
    pub const MAX_ENEMIES: usize = 3;
    pub const MAX_UNITS: usize = Self::MAX_SQUAD + Self::MAX_ENEMIES;

    /// Stage level whose enemies are slowed down so the squad opens the fight.
    pub const TUTORIAL_STAGE: u32 = 1;
    /// Maximum stability of a boss enemy.
    pub const BOSS_STABILITY: Stability = Stability::points(5);

    // ===== runtime-tunable defaults =====
    pub const DEFAULT_BOSS_GEMS: u32 = 50;
    pub const DEFAULT_ENEMY_CRIT_RATE: i32 = 5;
    pub const DEFAULT_TUTORIAL_SPEED_CAP: i32 = 95;

    pub fn new() -> Self {
        Self {
            reward_variance_min: 0.8,
            reward_variance_max: 1.2,
            boss_gems: Self::DEFAULT_BOSS_GEMS,
            drop_chance: 0.1,
            boss_drop_chance: 0.3,
            weapon_drop_share: 0.6,
            rare_drop_after_stage: 3,
            enemy_crit_rate: Self::DEFAULT_ENEMY_CRIT_RATE,
            extra_boss_chance: 0.33,
            overload_multiplier: 1.5,
            tutorial_speed_cap: Self::DEFAULT_TUTORIAL_SPEED_CAP,
        }
    }
}

impl Default for BattleConfig {
    fn default() -> Self {
        Self::new()
    }
}
