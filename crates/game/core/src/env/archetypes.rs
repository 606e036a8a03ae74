//! Enemy archetype table.
//!
//! Archetypes are named enemy templates (role, stat multipliers, skill
//! flavour). Tiers decide which archetypes a stage level may roll and how
//! likely each one is. The whole table is data, loaded from `archetypes.ron`,
//! so difficulty tuning never touches engine code.

use super::rng::RandomSource;
use crate::state::{Role, Skill, SkillSet};

/// Multipliers applied to the role-scaled base stats of an enemy.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StatMultipliers {
    pub hp: f64,
    pub atk: f64,
    pub def: f64,
    pub speed: f64,
}

/// Skill shape of an archetype slot.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SkillTemplate {
    pub name: String,
    pub multiplier: f64,
    #[cfg_attr(feature = "serde", serde(default))]
    pub cooldown: u32,
    #[cfg_attr(feature = "serde", serde(default))]
    pub is_aoe: bool,
}

impl SkillTemplate {
    pub fn to_skill(&self) -> Skill {
        Skill {
            name: self.name.clone(),
            multiplier: self.multiplier,
            cooldown: self.cooldown,
            is_aoe: self.is_aoe,
            is_heal: false,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ArchetypeSkills {
    pub normal: SkillTemplate,
    pub skill: SkillTemplate,
    pub ultimate: SkillTemplate,
}

/// Named enemy template.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Archetype {
    pub key: String,
    pub name: String,
    pub role: Role,
    pub stats: StatMultipliers,
    pub skills: ArchetypeSkills,
}

impl Archetype {
    pub fn skill_set(&self) -> SkillSet {
        SkillSet {
            normal: self.skills.normal.to_skill(),
            skill: self.skills.skill.to_skill(),
            ultimate: self.skills.ultimate.to_skill(),
        }
    }
}

/// One weighted entry of a tier.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TierEntry {
    pub archetype: String,
    pub weight: f64,
}

/// Archetype pool for a band of stage levels.
///
/// A tier applies to stage levels strictly below `below_stage`; a tier
/// without a bound catches every remaining level.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EnemyTier {
    #[cfg_attr(feature = "serde", serde(default))]
    pub below_stage: Option<u32>,
    pub entries: Vec<TierEntry>,
}

impl EnemyTier {
    fn covers(&self, stage_level: u32) -> bool {
        self.below_stage.is_none_or(|bound| stage_level < bound)
    }

    fn total_weight(&self) -> f64 {
        self.entries.iter().map(|entry| entry.weight).sum()
    }
}

/// Errors found while validating an archetype table.
#[derive(Clone, Debug, PartialEq, thiserror::Error)]
pub enum TableError {
    #[error("archetype '{0}' is referenced but not defined")]
    UnknownArchetype(String),

    #[error("archetype key '{0}' is defined more than once")]
    DuplicateArchetype(String),

    #[error("tier {index} has no entries with a positive weight")]
    EmptyTier { index: usize },

    #[error("no tier covers stage level {0}")]
    NoTierForStage(u32),

    #[error("skill '{skill}' of archetype '{archetype}' has a non-positive or non-finite multiplier")]
    InvalidMultiplier { archetype: String, skill: String },
}

/// The full archetype configuration: templates, the boss key and the tiers.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ArchetypeTable {
    pub archetypes: Vec<Archetype>,
    /// Key of the archetype every boss uses.
    pub boss: String,
    /// Tiers in ascending stage order; the first covering tier wins.
    pub tiers: Vec<EnemyTier>,
}

impl ArchetypeTable {
    pub fn get(&self, key: &str) -> Option<&Archetype> {
        self.archetypes.iter().find(|archetype| archetype.key == key)
    }

    pub fn boss(&self) -> Result<&Archetype, TableError> {
        self.get(&self.boss)
            .ok_or_else(|| TableError::UnknownArchetype(self.boss.clone()))
    }

    pub fn tier_for(&self, stage_level: u32) -> Option<&EnemyTier> {
        self.tiers.iter().find(|tier| tier.covers(stage_level))
    }

    /// Rolls a non-boss archetype for `stage_level`.
    ///
    /// Consumes exactly one draw from `rng`.
    pub fn draw(
        &self,
        stage_level: u32,
        rng: &mut (impl RandomSource + ?Sized),
    ) -> Result<&Archetype, TableError> {
        let (index, tier) = self
            .tiers
            .iter()
            .enumerate()
            .find(|(_, tier)| tier.covers(stage_level))
            .ok_or(TableError::NoTierForStage(stage_level))?;

        let total = tier.total_weight();
        if total <= 0.0 {
            return Err(TableError::EmptyTier { index });
        }

        let roll = rng.next_f64() * total;
        let mut cumulative = 0.0;
        let mut chosen = None;
        for entry in tier.entries.iter().filter(|entry| entry.weight > 0.0) {
            cumulative += entry.weight;
            chosen = Some(entry);
            if roll < cumulative {
                break;
            }
        }

        let entry = chosen.ok_or(TableError::EmptyTier { index })?;
        self.get(&entry.archetype)
            .ok_or_else(|| TableError::UnknownArchetype(entry.archetype.clone()))
    }

    /// Checks that every referenced key exists and every tier can roll.
    pub fn validate(&self) -> Result<(), TableError> {
        for (i, archetype) in self.archetypes.iter().enumerate() {
            if self.archetypes[..i]
                .iter()
                .any(|other| other.key == archetype.key)
            {
                return Err(TableError::DuplicateArchetype(archetype.key.clone()));
            }
            let skills = archetype.skill_set();
            if let Some(bad) = skills.iter().find(|skill| !skill.has_valid_multiplier()) {
                return Err(TableError::InvalidMultiplier {
                    archetype: archetype.key.clone(),
                    skill: bad.name.clone(),
                });
            }
        }

        self.boss()?;

        for (index, tier) in self.tiers.iter().enumerate() {
            if tier.total_weight() <= 0.0 {
                return Err(TableError::EmptyTier { index });
            }
            for entry in &tier.entries {
                if self.get(&entry.archetype).is_none() {
                    return Err(TableError::UnknownArchetype(entry.archetype.clone()));
                }
            }
        }

        if !self.tiers.iter().any(|tier| tier.below_stage.is_none()) {
            let uncovered = self
                .tiers
                .iter()
                .filter_map(|tier| tier.below_stage)
                .max()
                .unwrap_or(0);
            return Err(TableError::NoTierForStage(uncovered));
        }

        Ok(())
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::env::rng::SequenceRng;

    fn template(name: &str, multiplier: f64, cooldown: u32, is_aoe: bool) -> SkillTemplate {
        SkillTemplate {
            name: name.into(),
            multiplier,
            cooldown,
            is_aoe,
        }
    }

    fn archetype(key: &str, role: Role, stats: StatMultipliers, aoe: bool) -> Archetype {
        Archetype {
            key: key.into(),
            name: key.replace('_', " "),
            role,
            stats,
            skills: ArchetypeSkills {
                normal: template("Strike", 1.0, 0, false),
                skill: template("Burst", 1.2, 3, aoe),
                ultimate: template("Finisher", 1.8, 5, aoe),
            },
        }
    }

    /// Small table shaped like the shipped content.
    pub(crate) fn sample_table() -> ArchetypeTable {
        let flat = |hp, atk, def, speed| StatMultipliers { hp, atk, def, speed };
        ArchetypeTable {
            archetypes: vec![
                archetype("flux_rat", Role::Duelist, flat(0.6, 1.1, 0.5, 1.1), false),
                archetype("security_droid", Role::Vanguard, flat(1.2, 0.8, 1.3, 0.8), false),
                archetype("cyber_sniper", Role::Deadeye, flat(0.7, 1.4, 0.6, 1.0), false),
                archetype("data_lich", Role::Deadeye, flat(2.5, 1.3, 1.2, 0.9), true),
            ],
            boss: "data_lich".into(),
            tiers: vec![
                EnemyTier {
                    below_stage: Some(5),
                    entries: vec![
                        TierEntry { archetype: "flux_rat".into(), weight: 0.5 },
                        TierEntry { archetype: "security_droid".into(), weight: 0.5 },
                    ],
                },
                EnemyTier {
                    below_stage: None,
                    entries: vec![
                        TierEntry { archetype: "cyber_sniper".into(), weight: 0.7 },
                        TierEntry { archetype: "security_droid".into(), weight: 0.3 },
                    ],
                },
            ],
        }
    }

    #[test]
    fn sample_table_is_valid() {
        assert_eq!(sample_table().validate(), Ok(()));
    }

    #[test]
    fn draw_uses_cumulative_weights() {
        let table = sample_table();
        let mut rng = SequenceRng::new(vec![0.2, 0.7]);
        assert_eq!(table.draw(1, &mut rng).unwrap().key, "flux_rat");
        assert_eq!(table.draw(1, &mut rng).unwrap().key, "security_droid");
    }

    #[test]
    fn later_stages_use_later_tiers() {
        let table = sample_table();
        let mut rng = SequenceRng::constant(0.1);
        assert_eq!(table.draw(5, &mut rng).unwrap().key, "cyber_sniper");
        assert_eq!(table.draw(40, &mut rng).unwrap().key, "cyber_sniper");
    }

    #[test]
    fn unknown_reference_fails_validation() {
        let mut table = sample_table();
        table.tiers[0].entries[0].archetype = "ghost".into();
        assert_eq!(
            table.validate(),
            Err(TableError::UnknownArchetype("ghost".into()))
        );
    }

    #[test]
    fn missing_catch_all_tier_fails_validation() {
        let mut table = sample_table();
        table.tiers.pop();
        assert_eq!(table.validate(), Err(TableError::NoTierForStage(5)));
        let mut rng = SequenceRng::constant(0.0);
        assert_eq!(
            table.draw(9, &mut rng).unwrap_err(),
            TableError::NoTierForStage(9)
        );
    }

    #[test]
    fn broken_skill_multiplier_fails_validation() {
        for bad in [f64::NAN, -1.0, 0.0] {
            let mut table = sample_table();
            table.archetypes[1].skills.skill.multiplier = bad;
            assert_eq!(
                table.validate(),
                Err(TableError::InvalidMultiplier {
                    archetype: "security_droid".into(),
                    skill: "Burst".into(),
                })
            );
        }
    }

    #[test]
    fn boss_lookup_follows_key() {
        let table = sample_table();
        assert_eq!(table.boss().unwrap().key, "data_lich");
        assert!(table.boss().unwrap().skills.ultimate.is_aoe);
    }
}
