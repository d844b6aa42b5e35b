//! Card instances - runtime card state.
//!
//! `CardInstance` represents a specific card in a match at a specific
//! moment: accumulated damage, attack modifiers from Order abilities,
//! and the per-turn attack flag. Static data lives in `CardDefinition`.

use serde::{Deserialize, Serialize};

use super::definition::{CardDefinition, CardId};
use crate::core::{InstanceId, PlayerId};

/// A card instance in a match.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CardInstance {
    /// Unique identity of this copy.
    pub instance: InstanceId,

    /// Reference to the card definition.
    pub card: CardId,

    /// The player whose deck this card came from.
    pub owner: PlayerId,

    /// Damage accumulated this match. A unit is destroyed when damage
    /// reaches its health.
    pub damage: i64,

    /// Net attack adjustment from Order abilities and board effects.
    pub attack_modifier: i64,

    /// Has this card attacked during the current turn?
    pub has_attacked: bool,
}

impl CardInstance {
    /// Create a fresh instance of a card.
    #[must_use]
    pub fn new(instance: InstanceId, card: CardId, owner: PlayerId) -> Self {
        Self {
            instance,
            card,
            owner,
            damage: 0,
            attack_modifier: 0,
            has_attacked: false,
        }
    }

    /// Effective attack against the given definition, floored at zero.
    ///
    /// Order cards have no attack.
    #[must_use]
    pub fn effective_attack(&self, def: &CardDefinition) -> i64 {
        match def.unit_stats() {
            Some(stats) => (stats.attack + self.attack_modifier).max(0),
            None => 0,
        }
    }

    /// Health left after accumulated damage. Zero or below means the
    /// unit is destroyed.
    #[must_use]
    pub fn remaining_health(&self, def: &CardDefinition) -> i64 {
        match def.unit_stats() {
            Some(stats) => stats.health - self.damage,
            None => 0,
        }
    }

    /// Whether accumulated damage has destroyed this unit.
    #[must_use]
    pub fn is_destroyed(&self, def: &CardDefinition) -> bool {
        match def.unit_stats() {
            Some(stats) => self.damage >= stats.health,
            None => false,
        }
    }

    /// Mark this card as having attacked this turn.
    pub fn mark_attacked(&mut self) {
        self.has_attacked = true;
    }

    /// Clear the per-turn attack flag.
    pub fn reset_attack_flag(&mut self) {
        self.has_attacked = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn raider() -> CardDefinition {
        CardDefinition::unit(CardId::new(1), "Raider", 3, 2)
    }

    fn instance() -> CardInstance {
        CardInstance::new(InstanceId::new(10), CardId::new(1), PlayerId::new(0))
    }

    #[test]
    fn test_new_instance_is_pristine() {
        let inst = instance();
        assert_eq!(inst.damage, 0);
        assert_eq!(inst.attack_modifier, 0);
        assert!(!inst.has_attacked);
    }

    #[test]
    fn test_effective_attack() {
        let def = raider();
        let mut inst = instance();

        assert_eq!(inst.effective_attack(&def), 3);

        inst.attack_modifier = -1;
        assert_eq!(inst.effective_attack(&def), 2);

        // Floored at zero, never negative
        inst.attack_modifier = -10;
        assert_eq!(inst.effective_attack(&def), 0);
    }

    #[test]
    fn test_damage_and_destruction() {
        let def = raider();
        let mut inst = instance();

        inst.damage = 1;
        assert_eq!(inst.remaining_health(&def), 1);
        assert!(!inst.is_destroyed(&def));

        inst.damage = 2;
        assert_eq!(inst.remaining_health(&def), 0);
        assert!(inst.is_destroyed(&def));
    }

    #[test]
    fn test_order_card_has_no_combat_stats() {
        let def = CardDefinition::order(CardId::new(2), "Volley");
        let inst = CardInstance::new(InstanceId::new(11), CardId::new(2), PlayerId::new(0));

        assert_eq!(inst.effective_attack(&def), 0);
        assert!(!inst.is_destroyed(&def));
    }

    #[test]
    fn test_attack_flag() {
        let mut inst = instance();

        inst.mark_attacked();
        assert!(inst.has_attacked);

        inst.reset_attack_flag();
        assert!(!inst.has_attacked);
    }

    #[test]
    fn test_instance_serialization() {
        let inst = instance();
        let json = serde_json::to_string(&inst).unwrap();
        let deserialized: CardInstance = serde_json::from_str(&json).unwrap();
        assert_eq!(inst, deserialized);
    }
}
