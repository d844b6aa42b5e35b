//! Battlefield slots.
//!
//! A battlefield is a fixed row of indexed slots, each holding at most
//! one card. Slot indices are stable for the match: destroying a unit
//! leaves a gap rather than shifting its neighbors.

use serde::{Deserialize, Serialize};

use crate::core::InstanceId;

/// Default number of battlefield slots per player.
pub const DEFAULT_SLOT_COUNT: usize = 6;

/// A player's battlefield: fixed indexed slots.
///
/// ```
/// use duelcore::core::InstanceId;
/// use duelcore::player::Battlefield;
///
/// let mut field = Battlefield::new(4);
/// assert!(field.place(2, InstanceId::new(10)));
/// assert_eq!(field.card_at(2), Some(InstanceId::new(10)));
/// assert!(!field.place(2, InstanceId::new(11))); // occupied
/// assert!(!field.place(9, InstanceId::new(11))); // out of range
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Battlefield {
    slots: Vec<Option<InstanceId>>,
}

impl Battlefield {
    /// Create a battlefield with `slot_count` empty slots.
    #[must_use]
    pub fn new(slot_count: usize) -> Self {
        Self {
            slots: vec![None; slot_count],
        }
    }

    /// Number of slots.
    #[must_use]
    pub fn slot_count(&self) -> usize {
        self.slots.len()
    }

    /// The card in a slot. `None` for empty or out-of-range indices.
    #[must_use]
    pub fn card_at(&self, index: usize) -> Option<InstanceId> {
        self.slots.get(index).copied().flatten()
    }

    /// Whether `index` is in range and currently empty.
    #[must_use]
    pub fn is_empty_slot(&self, index: usize) -> bool {
        matches!(self.slots.get(index), Some(None))
    }

    /// Place a card in a slot.
    ///
    /// Returns false (leaving the battlefield unchanged) if the index is
    /// out of range or the slot is occupied.
    pub fn place(&mut self, index: usize, card: InstanceId) -> bool {
        match self.slots.get_mut(index) {
            Some(slot @ None) => {
                *slot = Some(card);
                true
            }
            _ => false,
        }
    }

    /// Empty a slot, returning the card that was there.
    pub fn take_at(&mut self, index: usize) -> Option<InstanceId> {
        self.slots.get_mut(index).and_then(Option::take)
    }

    /// Remove a card wherever it is. Returns false if not present.
    pub fn remove(&mut self, card: InstanceId) -> bool {
        for slot in &mut self.slots {
            if *slot == Some(card) {
                *slot = None;
                return true;
            }
        }
        false
    }

    /// Whether the card occupies any slot.
    #[must_use]
    pub fn contains(&self, card: InstanceId) -> bool {
        self.slots.contains(&Some(card))
    }

    /// The slot a card occupies, if any.
    #[must_use]
    pub fn position_of(&self, card: InstanceId) -> Option<usize> {
        self.slots.iter().position(|slot| *slot == Some(card))
    }

    /// Iterate over occupied slots in slot order.
    pub fn cards(&self) -> impl Iterator<Item = InstanceId> + '_ {
        self.slots.iter().filter_map(|slot| *slot)
    }

    /// Number of occupied slots.
    #[must_use]
    pub fn occupied_count(&self) -> usize {
        self.slots.iter().filter(|slot| slot.is_some()).count()
    }

    /// Whether every slot is occupied.
    #[must_use]
    pub fn is_full(&self) -> bool {
        self.slots.iter().all(Option::is_some)
    }
}

impl Default for Battlefield {
    fn default() -> Self {
        Self::new(DEFAULT_SLOT_COUNT)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_battlefield_is_empty() {
        let field = Battlefield::new(6);
        assert_eq!(field.slot_count(), 6);
        assert_eq!(field.occupied_count(), 0);
        assert!(!field.is_full());

        for i in 0..6 {
            assert!(field.is_empty_slot(i));
            assert_eq!(field.card_at(i), None);
        }
    }

    #[test]
    fn test_place_and_query() {
        let mut field = Battlefield::new(3);
        let card = InstanceId::new(10);

        assert!(field.place(1, card));
        assert_eq!(field.card_at(1), Some(card));
        assert!(field.contains(card));
        assert_eq!(field.position_of(card), Some(1));
        assert!(!field.is_empty_slot(1));
        assert_eq!(field.occupied_count(), 1);
    }

    #[test]
    fn test_place_occupied_slot_fails() {
        let mut field = Battlefield::new(3);

        assert!(field.place(0, InstanceId::new(10)));
        assert!(!field.place(0, InstanceId::new(11)));
        assert_eq!(field.card_at(0), Some(InstanceId::new(10)));
    }

    #[test]
    fn test_place_out_of_range_fails() {
        let mut field = Battlefield::new(3);
        assert!(!field.place(3, InstanceId::new(10)));
        assert!(!field.is_empty_slot(3));
        assert_eq!(field.occupied_count(), 0);
    }

    #[test]
    fn test_take_and_remove() {
        let mut field = Battlefield::new(3);
        let card = InstanceId::new(10);

        field.place(2, card);
        assert_eq!(field.take_at(2), Some(card));
        assert!(field.is_empty_slot(2));
        assert_eq!(field.take_at(2), None);

        field.place(0, card);
        assert!(field.remove(card));
        assert!(!field.contains(card));
        assert!(!field.remove(card));
    }

    #[test]
    fn test_cards_iterates_in_slot_order() {
        let mut field = Battlefield::new(5);
        field.place(3, InstanceId::new(30));
        field.place(0, InstanceId::new(10));
        field.place(4, InstanceId::new(40));

        let cards: Vec<_> = field.cards().collect();
        assert_eq!(
            cards,
            vec![InstanceId::new(10), InstanceId::new(30), InstanceId::new(40)]
        );
    }

    #[test]
    fn test_destruction_leaves_gap() {
        let mut field = Battlefield::new(3);
        field.place(0, InstanceId::new(10));
        field.place(1, InstanceId::new(11));
        field.place(2, InstanceId::new(12));
        assert!(field.is_full());

        field.remove(InstanceId::new(11));

        // Neighbors keep their slots
        assert_eq!(field.card_at(0), Some(InstanceId::new(10)));
        assert_eq!(field.card_at(1), None);
        assert_eq!(field.card_at(2), Some(InstanceId::new(12)));
    }

    #[test]
    fn test_serialization() {
        let mut field = Battlefield::new(3);
        field.place(1, InstanceId::new(10));

        let json = serde_json::to_string(&field).unwrap();
        let deserialized: Battlefield = serde_json::from_str(&json).unwrap();
        assert_eq!(field, deserialized);
    }
}
