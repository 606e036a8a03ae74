/// Full combat stat block of a character or battle unit.
///
/// Percent-based stats (`crit_rate`, `crit_dmg`, `evasion`, `accuracy`,
/// `armor_pen`) are stored as whole percentages: `crit_dmg = 150` means ×1.5.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CharacterStats {
    pub hp: u32,
    pub max_hp: u32,
    pub atk: i32,
    pub def: i32,
    pub speed: i32,
    pub crit_rate: i32,
    pub crit_dmg: i32,
    pub evasion: i32,
    pub accuracy: i32,
    pub armor_pen: i32,
}

impl CharacterStats {
    /// Adds a single stat bonus in place.
    ///
    /// `Hp` grows the health pool (both current and maximum); `MaxHp` only
    /// raises the ceiling. Current hp never exceeds the maximum afterwards.
    pub fn add(&mut self, kind: StatKind, value: i32) {
        match kind {
            StatKind::Hp => {
                self.max_hp = offset(self.max_hp, value);
                self.hp = offset(self.hp, value);
            }
            StatKind::MaxHp => self.max_hp = offset(self.max_hp, value),
            StatKind::Atk => self.atk += value,
            StatKind::Def => self.def += value,
            StatKind::Speed => self.speed += value,
            StatKind::CritRate => self.crit_rate += value,
            StatKind::CritDmg => self.crit_dmg += value,
            StatKind::Evasion => self.evasion += value,
            StatKind::Accuracy => self.accuracy += value,
            StatKind::ArmorPen => self.armor_pen += value,
        }
        self.hp = self.hp.min(self.max_hp);
    }

    /// Applies a [`StatBonus`].
    pub fn apply(&mut self, bonus: &StatBonus) {
        self.add(bonus.kind, bonus.value);
    }

    /// Reads a stat by kind.
    pub fn get(&self, kind: StatKind) -> i64 {
        match kind {
            StatKind::Hp => self.hp as i64,
            StatKind::MaxHp => self.max_hp as i64,
            StatKind::Atk => self.atk as i64,
            StatKind::Def => self.def as i64,
            StatKind::Speed => self.speed as i64,
            StatKind::CritRate => self.crit_rate as i64,
            StatKind::CritDmg => self.crit_dmg as i64,
            StatKind::Evasion => self.evasion as i64,
            StatKind::Accuracy => self.accuracy as i64,
            StatKind::ArmorPen => self.armor_pen as i64,
        }
    }
}

fn offset(base: u32, value: i32) -> u32 {
    base.saturating_add_signed(value)
}

/// The fixed set of stats that equipment bonuses may target.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
    strum::EnumIter,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum StatKind {
    Hp,
    MaxHp,
    Atk,
    Def,
    Speed,
    CritRate,
    CritDmg,
    Evasion,
    Accuracy,
    ArmorPen,
}

/// A flat bonus to one stat, as carried by chips and cosmetics.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StatBonus {
    pub kind: StatKind,
    pub value: i32,
}

impl StatBonus {
    pub const fn new(kind: StatKind, value: i32) -> Self {
        Self { kind, value }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> CharacterStats {
        CharacterStats {
            hp: 800,
            max_hp: 1000,
            atk: 100,
            def: 50,
            speed: 100,
            crit_rate: 5,
            crit_dmg: 150,
            evasion: 0,
            accuracy: 100,
            armor_pen: 0,
        }
    }

    #[test]
    fn hp_bonus_grows_pool_and_current() {
        let mut stats = sample();
        stats.add(StatKind::Hp, 150);
        assert_eq!(stats.max_hp, 1150);
        assert_eq!(stats.hp, 950);
    }

    #[test]
    fn max_hp_bonus_leaves_current() {
        let mut stats = sample();
        stats.add(StatKind::MaxHp, 40);
        assert_eq!(stats.max_hp, 1040);
        assert_eq!(stats.hp, 800);
    }

    #[test]
    fn negative_max_hp_clamps_current() {
        let mut stats = sample();
        stats.add(StatKind::MaxHp, -500);
        assert_eq!(stats.max_hp, 500);
        assert_eq!(stats.hp, 500);
    }

    #[test]
    fn percent_stats_map_to_their_fields() {
        let mut stats = sample();
        stats.apply(&StatBonus::new(StatKind::CritRate, 7));
        stats.apply(&StatBonus::new(StatKind::ArmorPen, 12));
        assert_eq!(stats.get(StatKind::CritRate), 12);
        assert_eq!(stats.get(StatKind::ArmorPen), 12);
    }
}
