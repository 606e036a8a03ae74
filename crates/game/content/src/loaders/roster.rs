//! Player roster loader: owned characters, equipment, squad and progress.

use std::path::Path;

use squad_core::stats::base_stats;
use squad_core::{Character, Equipment, Inventory, ItemId};

use crate::Progress;
use crate::loaders::{LoadResult, read_file};

/// Save-file shape of a player roster.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Roster {
    pub characters: Vec<Character>,
    #[serde(default)]
    pub inventory: Vec<Equipment>,
    /// Character ids fielded in battle, in slot order.
    pub squad: Vec<ItemId>,
    #[serde(default)]
    pub progress: Progress,
}

impl Roster {
    pub fn character(&self, id: &ItemId) -> Option<&Character> {
        self.characters.iter().find(|character| &character.id == id)
    }

    /// Equipment records keyed by id, as the stat resolver expects them.
    pub fn inventory(&self) -> Inventory {
        self.inventory.iter().cloned().collect()
    }

    /// The fielded characters in squad order.
    pub fn squad_members(&self) -> LoadResult<Vec<Character>> {
        self.squad
            .iter()
            .map(|id| {
                self.character(id)
                    .cloned()
                    .ok_or_else(|| anyhow::anyhow!("Squad references unknown character '{}'", id))
            })
            .collect()
    }

    /// Fills the stat block of characters stored without one.
    fn fill_base_stats(&mut self) {
        for character in &mut self.characters {
            if character.stats.max_hp == 0 {
                character.stats = base_stats(
                    character.rarity,
                    character.level,
                    character.effective_rank(),
                    character.role,
                );
                tracing::trace!(character = %character.id, "filled base stats");
            }
        }
    }
}

/// Loader for the player roster from RON files.
pub struct RosterLoader;

impl RosterLoader {
    pub fn load(path: &Path) -> LoadResult<Roster> {
        let content = read_file(path)?;
        Self::parse(&content)
    }

    pub fn parse(content: &str) -> LoadResult<Roster> {
        let mut roster: Roster = ron::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse roster RON: {}", e))?;

        for (i, character) in roster.characters.iter().enumerate() {
            anyhow::ensure!(
                !roster.characters[..i].iter().any(|c| c.id == character.id),
                "Character id '{}' is defined more than once",
                character.id
            );
            if let Some(skill) = character
                .skills
                .iter()
                .find(|skill| !skill.has_valid_multiplier())
            {
                anyhow::bail!(
                    "Skill '{}' of character '{}' needs a positive, finite multiplier (got {})",
                    skill.name,
                    character.id,
                    skill.multiplier
                );
            }
            for item in character.equipped() {
                anyhow::ensure!(
                    roster.inventory.iter().any(|e| e.id() == item),
                    "Character '{}' equips unknown item '{}'",
                    character.id,
                    item
                );
            }
        }
        roster.squad_members()?;
        roster.fill_base_stats();

        tracing::debug!(
            characters = roster.characters.len(),
            items = roster.inventory.len(),
            squad = roster.squad.len(),
            "loaded roster"
        );
        Ok(roster)
    }
}
