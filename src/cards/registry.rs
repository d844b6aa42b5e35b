//! Card definition lookup.
//!
//! The registry owns every card definition available to a match. It is
//! constructed by the host and passed explicitly into board operations
//! that need definitions - never fetched through ambient lookup.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use super::definition::{CardDefinition, CardId};

/// Card definition lookup by id.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct CardRegistry {
    definitions: FxHashMap<CardId, CardDefinition>,
}

impl CardRegistry {
    /// Create an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a definition, replacing any previous one with the same id.
    pub fn register(&mut self, definition: CardDefinition) {
        self.definitions.insert(definition.id, definition);
    }

    /// Look up a definition.
    #[must_use]
    pub fn get(&self, id: CardId) -> Option<&CardDefinition> {
        self.definitions.get(&id)
    }

    /// Check whether a definition is registered.
    #[must_use]
    pub fn contains(&self, id: CardId) -> bool {
        self.definitions.contains_key(&id)
    }

    /// Number of registered definitions.
    #[must_use]
    pub fn len(&self) -> usize {
        self.definitions.len()
    }

    /// Check if the registry is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.definitions.is_empty()
    }

    /// Iterate over all definitions.
    pub fn iter(&self) -> impl Iterator<Item = &CardDefinition> {
        self.definitions.values()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_register_and_get() {
        let mut registry = CardRegistry::new();
        assert!(registry.is_empty());

        registry.register(CardDefinition::unit(CardId::new(1), "Raider", 3, 2));

        assert_eq!(registry.len(), 1);
        assert!(registry.contains(CardId::new(1)));
        assert_eq!(registry.get(CardId::new(1)).unwrap().name, "Raider");
        assert!(registry.get(CardId::new(99)).is_none());
    }

    #[test]
    fn test_register_replaces() {
        let mut registry = CardRegistry::new();

        registry.register(CardDefinition::unit(CardId::new(1), "Raider", 3, 2));
        registry.register(CardDefinition::unit(CardId::new(1), "Veteran Raider", 4, 3));

        assert_eq!(registry.len(), 1);
        assert_eq!(registry.get(CardId::new(1)).unwrap().name, "Veteran Raider");
    }

    #[test]
    fn test_iter() {
        let mut registry = CardRegistry::new();
        registry.register(CardDefinition::unit(CardId::new(1), "Raider", 3, 2));
        registry.register(CardDefinition::order(CardId::new(2), "Volley"));

        let names: Vec<_> = registry.iter().map(|d| d.name.as_str()).collect();
        assert_eq!(names.len(), 2);
        assert!(names.contains(&"Raider"));
        assert!(names.contains(&"Volley"));
    }
}
