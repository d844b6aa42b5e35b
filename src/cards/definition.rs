//! Card definitions - static card data.
//!
//! `CardDefinition` holds the immutable properties of a card: its
//! category (with unit stats where applicable) and its ability list.
//! Instance-specific data (damage taken, attack modifiers, the per-turn
//! attack flag) is stored separately in `CardInstance`.

use serde::{Deserialize, Serialize};

use super::ability::Ability;
use super::category::{CardCategory, UnitStats};

/// Unique identifier for a card definition.
///
/// This identifies the "kind" of card (e.g., "Shield Maiden"), not a
/// specific copy in a match.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CardId(pub u32);

impl CardId {
    /// Create a new card ID.
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    /// Get the raw ID value.
    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }
}

impl std::fmt::Display for CardId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Card({})", self.0)
    }
}

/// Static card definition.
///
/// ## Example
///
/// ```
/// use duelcore::cards::{Ability, CardDefinition, CardId};
///
/// let raider = CardDefinition::unit(CardId::new(1), "Raider", 3, 2);
/// assert!(raider.category.is_unit());
///
/// let volley = CardDefinition::order(CardId::new(2), "Volley")
///     .with_ability(Ability::DamageUnits { amount: 2 });
/// assert!(volley.category.is_order());
/// assert_eq!(volley.abilities.len(), 1);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CardDefinition {
    /// Unique identifier for this definition.
    pub id: CardId,

    /// Card name (for display/debugging).
    pub name: String,

    /// Category, with unit stats where applicable.
    pub category: CardCategory,

    /// Abilities activated when this card resolves.
    ///
    /// Order cards need at least one to do anything; units may carry
    /// abilities for future keyword support but none are activated by
    /// the current rules.
    pub abilities: Vec<Ability>,
}

impl CardDefinition {
    /// Create a unit definition with the given combat stats.
    #[must_use]
    pub fn unit(id: CardId, name: impl Into<String>, attack: i64, health: i64) -> Self {
        Self {
            id,
            name: name.into(),
            category: CardCategory::unit(attack, health),
            abilities: Vec::new(),
        }
    }

    /// Create an Order definition. Add abilities with `with_ability`.
    #[must_use]
    pub fn order(id: CardId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            category: CardCategory::Order,
            abilities: Vec::new(),
        }
    }

    /// Add an ability (builder pattern).
    #[must_use]
    pub fn with_ability(mut self, ability: Ability) -> Self {
        self.abilities.push(ability);
        self
    }

    /// Get the unit stats, if this is a Unit card.
    #[must_use]
    pub fn unit_stats(&self) -> Option<&UnitStats> {
        self.category.unit_stats()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_card_id() {
        let id = CardId::new(42);
        assert_eq!(id.raw(), 42);
        assert_eq!(format!("{}", id), "Card(42)");
    }

    #[test]
    fn test_unit_definition() {
        let def = CardDefinition::unit(CardId::new(1), "Raider", 3, 2);

        assert_eq!(def.name, "Raider");
        assert!(def.category.is_unit());
        let stats = def.unit_stats().unwrap();
        assert_eq!(stats.attack, 3);
        assert_eq!(stats.health, 2);
        assert!(def.abilities.is_empty());
    }

    #[test]
    fn test_order_definition_builder() {
        let def = CardDefinition::order(CardId::new(2), "Volley")
            .with_ability(Ability::DamageUnits { amount: 2 })
            .with_ability(Ability::DrawCards { count: 1 });

        assert!(def.category.is_order());
        assert!(def.unit_stats().is_none());
        assert_eq!(def.abilities.len(), 2);
    }

    #[test]
    fn test_definition_serialization() {
        let def = CardDefinition::unit(CardId::new(1), "Raider", 3, 2);
        let json = serde_json::to_string(&def).unwrap();
        let deserialized: CardDefinition = serde_json::from_str(&json).unwrap();
        assert_eq!(def, deserialized);
    }
}
