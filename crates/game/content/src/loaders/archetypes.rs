//! Enemy archetype table loader.

use std::path::Path;

use squad_core::ArchetypeTable;

use crate::loaders::{LoadResult, read_file};

/// Loader for the archetype table from RON files.
pub struct ArchetypeLoader;

impl ArchetypeLoader {
    /// Load and validate the archetype table from a RON file.
    pub fn load(path: &Path) -> LoadResult<ArchetypeTable> {
        let content = read_file(path)?;
        Self::parse(&content)
    }

    pub fn parse(content: &str) -> LoadResult<ArchetypeTable> {
        let table: ArchetypeTable = ron::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse archetype RON: {}", e))?;

        table
            .validate()
            .map_err(|e| anyhow::anyhow!("Invalid archetype table: {}", e))?;

        tracing::debug!(
            archetypes = table.archetypes.len(),
            tiers = table.tiers.len(),
            boss = %table.boss,
            "loaded archetype table"
        );
        Ok(table)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TABLE: &str = r#"(
        archetypes: [
            (
                key: "flux_rat",
                name: "Flux Rat",
                role: Duelist,
                stats: (hp: 0.6, atk: 1.1, def: 0.5, speed: 1.1),
                skills: (
                    normal: (name: "Bite", multiplier: 1.0),
                    skill: (name: "Scurry", multiplier: 1.2, cooldown: 3),
                    ultimate: (name: "Swarm Attack", multiplier: 1.8, cooldown: 5),
                ),
            ),
        ],
        boss: "flux_rat",
        tiers: [
            (entries: [(archetype: "flux_rat", weight: 1.0)]),
        ],
    )"#;

    #[test]
    fn parses_minimal_table() {
        let table = ArchetypeLoader::parse(TABLE).unwrap();
        assert_eq!(table.archetypes.len(), 1);
        assert_eq!(table.archetypes[0].skills.skill.cooldown, 3);
        assert!(!table.archetypes[0].skills.normal.is_aoe);
        assert_eq!(table.tiers[0].below_stage, None);
    }

    #[test]
    fn rejects_unknown_boss() {
        let broken = TABLE.replace(r#"boss: "flux_rat""#, r#"boss: "ghost""#);
        let err = ArchetypeLoader::parse(&broken).unwrap_err();
        assert!(err.to_string().contains("ghost"));
    }

    #[test]
    fn rejects_negative_skill_multiplier() {
        let broken = TABLE.replace("multiplier: 1.2", "multiplier: -1.2");
        let err = ArchetypeLoader::parse(&broken).unwrap_err();
        assert!(err.to_string().contains("Scurry"), "{err}");
    }

    #[test]
    fn rejects_malformed_ron() {
        assert!(ArchetypeLoader::parse("(archetypes: [").is_err());
    }
}
