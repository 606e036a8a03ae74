//! Elemental weakness table.
//!
//! ```text
//! Pyro → Dendro → Hydro → Pyro      (×2.0 along the arrows, ×0.5 against them)
//! Electro ↔ Cryo                    (×2.0 both ways)
//! ```

use crate::state::Element;

/// How an attacking element fares against a defending one.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display, strum::AsRefStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case")]
pub enum Affinity {
    Neutral,
    /// Defender is weak to the attacking element.
    Advantage,
    /// Defender resists the attacking element.
    Disadvantage,
}

impl Affinity {
    pub fn between(attacker: Element, defender: Element) -> Self {
        use Element::*;

        match (attacker, defender) {
            (Pyro, Dendro) | (Dendro, Hydro) | (Hydro, Pyro) | (Electro, Cryo) | (Cryo, Electro) => {
                Self::Advantage
            }
            (Dendro, Pyro) | (Hydro, Dendro) | (Pyro, Hydro) => Self::Disadvantage,
            _ => Self::Neutral,
        }
    }

    pub const fn multiplier(self) -> f64 {
        match self {
            Self::Neutral => 1.0,
            Self::Advantage => 2.0,
            Self::Disadvantage => 0.5,
        }
    }
}

/// Damage multiplier of `attacker` hitting `defender`.
pub fn element_multiplier(attacker: Element, defender: Element) -> f64 {
    Affinity::between(attacker, defender).multiplier()
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn cycle_is_weak_one_way_and_resisted_the_other() {
        assert_eq!(element_multiplier(Element::Pyro, Element::Dendro), 2.0);
        assert_eq!(element_multiplier(Element::Dendro, Element::Hydro), 2.0);
        assert_eq!(element_multiplier(Element::Hydro, Element::Pyro), 2.0);

        assert_eq!(element_multiplier(Element::Dendro, Element::Pyro), 0.5);
        assert_eq!(element_multiplier(Element::Hydro, Element::Dendro), 0.5);
        assert_eq!(element_multiplier(Element::Pyro, Element::Hydro), 0.5);
    }

    #[test]
    fn electro_and_cryo_are_mutually_weak() {
        assert_eq!(element_multiplier(Element::Electro, Element::Cryo), 2.0);
        assert_eq!(element_multiplier(Element::Cryo, Element::Electro), 2.0);
    }

    #[test]
    fn everything_else_is_neutral() {
        for element in Element::iter() {
            assert_eq!(element_multiplier(element, element), 1.0);
        }
        assert_eq!(element_multiplier(Element::Pyro, Element::Cryo), 1.0);
        assert_eq!(element_multiplier(Element::Electro, Element::Hydro), 1.0);
    }

    #[test]
    fn table_has_exactly_eight_non_neutral_pairs() {
        let non_neutral = Element::iter()
            .flat_map(|a| Element::iter().map(move |d| Affinity::between(a, d)))
            .filter(|affinity| *affinity != Affinity::Neutral)
            .count();
        assert_eq!(non_neutral, 8);
    }
}
