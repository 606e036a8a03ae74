use crate::config::BattleConfig;
use crate::state::Rarity;

/// Enemy count and nominal rarity band of a stage.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EnemyComposition {
    pub count: u32,
    pub rarity_range: (Rarity, Rarity),
}

/// Base gold and xp for clearing a stage, before variance.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StageRewards {
    pub gold: u32,
    pub xp: u32,
}

/// One campaign stage as supplied by the campaign catalog.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StageDescriptor {
    pub id: u32,
    pub name: String,
    #[cfg_attr(feature = "serde", serde(default))]
    pub description: String,
    pub recommended_level: u32,
    pub recommended_cp: u32,
    pub enemies: EnemyComposition,
    pub rewards: StageRewards,
    #[cfg_attr(feature = "serde", serde(default))]
    pub boss: bool,
}

/// Errors found while validating stage data.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum StageError {
    #[error("stage ids start at 1 (got {0})")]
    InvalidId(u32),

    #[error("stage {id} fields {count} enemies (allowed 1..={max})")]
    EnemyCount { id: u32, count: u32, max: usize },

    #[error("stage {id} rarity range is inverted")]
    InvertedRarityRange { id: u32 },

    #[error("stage {0} is defined more than once")]
    DuplicateStage(u32),
}

impl StageDescriptor {
    /// Level the stage's enemies are generated at.
    ///
    /// Campaign stages scale enemies by their position in the campaign.
    pub const fn level(&self) -> u32 {
        self.id
    }

    pub fn validate(&self) -> Result<(), StageError> {
        if self.id == 0 {
            return Err(StageError::InvalidId(self.id));
        }
        if self.enemies.count == 0 || self.enemies.count as usize > BattleConfig::MAX_ENEMIES {
            return Err(StageError::EnemyCount {
                id: self.id,
                count: self.enemies.count,
                max: BattleConfig::MAX_ENEMIES,
            });
        }
        let (low, high) = self.enemies.rarity_range;
        if low > high {
            return Err(StageError::InvertedRarityRange { id: self.id });
        }
        Ok(())
    }
}

/// Ordered list of campaign stages.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StageCatalog {
    pub stages: Vec<StageDescriptor>,
}

impl StageCatalog {
    pub fn new(stages: Vec<StageDescriptor>) -> Self {
        Self { stages }
    }

    pub fn get(&self, id: u32) -> Option<&StageDescriptor> {
        self.stages.iter().find(|stage| stage.id == id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &StageDescriptor> {
        self.stages.iter()
    }

    pub fn len(&self) -> usize {
        self.stages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stages.is_empty()
    }

    pub fn validate(&self) -> Result<(), StageError> {
        for (i, stage) in self.stages.iter().enumerate() {
            stage.validate()?;
            if self.stages[..i].iter().any(|other| other.id == stage.id) {
                return Err(StageError::DuplicateStage(stage.id));
            }
        }
        Ok(())
    }
}
