use super::SkillSlot;

/// A single skill definition.
///
/// Skills are reference data: a battle copies them from the owning character
/// and never mutates them. Cooldown progress lives on the unit instead.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Skill {
    pub name: String,
    /// Damage (or heal) multiplier applied to attack, e.g. `1.5` for 150%.
    pub multiplier: f64,
    /// Turns the skill stays unavailable after use.
    #[cfg_attr(feature = "serde", serde(default))]
    pub cooldown: u32,
    #[cfg_attr(feature = "serde", serde(default))]
    pub is_aoe: bool,
    #[cfg_attr(feature = "serde", serde(default))]
    pub is_heal: bool,
}

impl Skill {
    pub fn new(name: impl Into<String>, multiplier: f64, cooldown: u32) -> Self {
        Self {
            name: name.into(),
            multiplier,
            cooldown,
            is_aoe: false,
            is_heal: false,
        }
    }

    #[must_use]
    pub fn aoe(mut self) -> Self {
        self.is_aoe = true;
        self
    }

    #[must_use]
    pub fn heal(mut self) -> Self {
        self.is_heal = true;
        self
    }

    /// Whether the multiplier is a finite, positive number.
    pub fn has_valid_multiplier(&self) -> bool {
        self.multiplier.is_finite() && self.multiplier > 0.0
    }
}

/// The three skills every unit carries.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SkillSet {
    pub normal: Skill,
    pub skill: Skill,
    pub ultimate: Skill,
}

impl SkillSet {
    pub fn get(&self, slot: SkillSlot) -> &Skill {
        match slot {
            SkillSlot::Normal => &self.normal,
            SkillSlot::Skill => &self.skill,
            SkillSlot::Ultimate => &self.ultimate,
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = &Skill> {
        [&self.normal, &self.skill, &self.ultimate].into_iter()
    }
}

/// Remaining cooldown turns of the two cooldown-bearing slots.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Cooldowns {
    pub skill: u32,
    pub ultimate: u32,
}

impl Cooldowns {
    /// Remaining turns for a slot; the normal attack never cools down.
    pub const fn remaining(&self, slot: SkillSlot) -> u32 {
        match slot {
            SkillSlot::Normal => 0,
            SkillSlot::Skill => self.skill,
            SkillSlot::Ultimate => self.ultimate,
        }
    }

    pub const fn is_ready(&self, slot: SkillSlot) -> bool {
        self.remaining(slot) == 0
    }

    /// Starts the cooldown of `slot`. No-op for the normal attack.
    pub fn trigger(&mut self, slot: SkillSlot, turns: u32) {
        match slot {
            SkillSlot::Normal => {}
            SkillSlot::Skill => self.skill = turns,
            SkillSlot::Ultimate => self.ultimate = turns,
        }
    }

    /// One round elapsed: every counter drops by one, floored at zero.
    pub fn tick(&mut self) {
        self.skill = self.skill.saturating_sub(1);
        self.ultimate = self.ultimate.saturating_sub(1);
    }
}
