//! Content factory for loading every battle data file from one place.

use std::path::{Path, PathBuf};

use squad_core::{ArchetypeTable, BattleConfig, StageCatalog};

use crate::loaders::{
    ArchetypeLoader, ConfigLoader, LoadResult, Roster, RosterLoader, StageLoader,
};

const BUNDLED_CONFIG: &str = include_str!("../../data/config.toml");
const BUNDLED_ARCHETYPES: &str = include_str!("../../data/archetypes.ron");
const BUNDLED_STAGES: &str = include_str!("../../data/stages.ron");
const BUNDLED_ROSTER: &str = include_str!("../../data/roster.ron");

/// Everything a battle front-end needs, loaded and validated.
#[derive(Clone, Debug)]
pub struct GameContent {
    pub config: BattleConfig,
    pub archetypes: ArchetypeTable,
    pub stages: StageCatalog,
    pub roster: Roster,
}

/// Content factory that loads all game content from a data directory.
///
/// # Directory Structure
///
/// ```text
/// data_dir/
/// ├── config.toml
/// ├── archetypes.ron
/// ├── stages.ron
/// └── roster.ron
/// ```
pub struct ContentFactory {
    data_dir: PathBuf,
}

impl ContentFactory {
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
        }
    }

    /// Load battle tuning from `config.toml`.
    pub fn load_config(&self) -> LoadResult<BattleConfig> {
        ConfigLoader::load(&self.data_dir.join("config.toml"))
    }

    /// Load the enemy archetype table from `archetypes.ron`.
    pub fn load_archetypes(&self) -> LoadResult<ArchetypeTable> {
        ArchetypeLoader::load(&self.data_dir.join("archetypes.ron"))
    }

    /// Load the campaign from `stages.ron`.
    pub fn load_stages(&self) -> LoadResult<StageCatalog> {
        StageLoader::load(&self.data_dir.join("stages.ron"))
    }

    /// Load the player roster from `roster.ron`.
    pub fn load_roster(&self) -> LoadResult<Roster> {
        RosterLoader::load(&self.data_dir.join("roster.ron"))
    }

    pub fn load_all(&self) -> LoadResult<GameContent> {
        tracing::info!(dir = %self.data_dir.display(), "loading content");
        Ok(GameContent {
            config: self.load_config()?,
            archetypes: self.load_archetypes()?,
            stages: self.load_stages()?,
            roster: self.load_roster()?,
        })
    }

    /// Content compiled into the binary, used when no data directory is set.
    pub fn bundled() -> LoadResult<GameContent> {
        tracing::info!("loading bundled content");
        Ok(GameContent {
            config: ConfigLoader::parse(BUNDLED_CONFIG)?,
            archetypes: ArchetypeLoader::parse(BUNDLED_ARCHETYPES)?,
            stages: StageLoader::parse(BUNDLED_STAGES)?,
            roster: RosterLoader::parse(BUNDLED_ROSTER)?,
        })
    }

    /// Returns the data directory path.
    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }
}
