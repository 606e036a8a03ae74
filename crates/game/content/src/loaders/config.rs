//! Battle configuration loader.

use std::path::Path;

use squad_core::BattleConfig;

use crate::loaders::{LoadResult, read_file};

/// Loader for battle tuning from TOML files.
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load config data from a TOML file.
    ///
    /// Missing keys keep their defaults, so an empty file is a valid config.
    pub fn load(path: &Path) -> LoadResult<BattleConfig> {
        let content = read_file(path)?;
        Self::parse(&content)
    }

    /// Parse config data from TOML text.
    pub fn parse(content: &str) -> LoadResult<BattleConfig> {
        let config: BattleConfig = toml::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse config TOML: {}", e))?;

        anyhow::ensure!(
            config.reward_variance_min <= config.reward_variance_max,
            "reward_variance_min ({}) exceeds reward_variance_max ({})",
            config.reward_variance_min,
            config.reward_variance_max
        );
        for (name, chance) in [
            ("drop_chance", config.drop_chance),
            ("boss_drop_chance", config.boss_drop_chance),
            ("weapon_drop_share", config.weapon_drop_share),
            ("extra_boss_chance", config.extra_boss_chance),
        ] {
            anyhow::ensure!(
                (0.0..=1.0).contains(&chance),
                "{name} must be within 0..=1 (got {chance})"
            );
        }

        Ok(config)
    }
}
