//! Players and their zones.
//!
//! A `Player` owns the card containers on its side of the match: hand,
//! deck, discard pile, and battlefield. All containers hold
//! `InstanceId`s; the instances themselves live in the board's card
//! store.

pub mod battlefield;

pub use battlefield::{Battlefield, DEFAULT_SLOT_COUNT};

use serde::{Deserialize, Serialize};

use crate::core::{InstanceId, PlayerId};

/// One side of a duel.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    /// Opaque, stable identity.
    pub id: PlayerId,

    /// Display name.
    pub name: String,

    /// Current health. Defeated at zero or below.
    pub health: i64,

    /// Cards in hand, in draw order.
    hand: Vec<InstanceId>,

    /// Cards in deck; the top of the deck is the end of the vec.
    deck: Vec<InstanceId>,

    /// Destroyed units and consumed Order cards, oldest first.
    discard_pile: Vec<InstanceId>,

    /// Battlefield slots.
    pub battlefield: Battlefield,
}

impl Player {
    /// Create a player with empty zones.
    #[must_use]
    pub fn new(id: PlayerId, name: impl Into<String>, health: i64, slot_count: usize) -> Self {
        Self {
            id,
            name: name.into(),
            health,
            hand: Vec::new(),
            deck: Vec::new(),
            discard_pile: Vec::new(),
            battlefield: Battlefield::new(slot_count),
        }
    }

    // === Hand ===

    /// Cards in hand.
    #[must_use]
    pub fn hand(&self) -> &[InstanceId] {
        &self.hand
    }

    /// Whether the hand contains a card.
    #[must_use]
    pub fn hand_contains(&self, card: InstanceId) -> bool {
        self.hand.contains(&card)
    }

    /// Add a card to the hand.
    pub fn add_to_hand(&mut self, card: InstanceId) {
        self.hand.push(card);
    }

    /// Remove a card from the hand. Returns false if not present.
    pub fn remove_from_hand(&mut self, card: InstanceId) -> bool {
        if let Some(pos) = self.hand.iter().position(|&c| c == card) {
            self.hand.remove(pos);
            true
        } else {
            false
        }
    }

    // === Deck ===

    /// Replace the deck contents (top = end).
    pub fn set_deck(&mut self, deck: Vec<InstanceId>) {
        self.deck = deck;
    }

    /// Cards in the deck, bottom first (top = end).
    #[must_use]
    pub fn deck(&self) -> &[InstanceId] {
        &self.deck
    }

    /// Cards left in the deck.
    #[must_use]
    pub fn deck_size(&self) -> usize {
        self.deck.len()
    }

    /// Draw the top card of the deck into the hand.
    ///
    /// Returns the drawn card, or `None` if the deck is empty.
    pub fn draw_from_deck(&mut self) -> Option<InstanceId> {
        let card = self.deck.pop()?;
        self.hand.push(card);
        Some(card)
    }

    // === Discard pile ===

    /// Cards in the discard pile, oldest first.
    #[must_use]
    pub fn discard_pile(&self) -> &[InstanceId] {
        &self.discard_pile
    }

    /// Put a card on the discard pile.
    pub fn add_to_discard(&mut self, card: InstanceId) {
        self.discard_pile.push(card);
    }

    // === Health ===

    /// Heal by `amount`.
    pub fn heal(&mut self, amount: i64) {
        self.health += amount;
    }

    /// Take `amount` damage.
    pub fn take_damage(&mut self, amount: i64) {
        self.health -= amount;
    }

    /// Whether this player has been defeated.
    #[must_use]
    pub fn is_defeated(&self) -> bool {
        self.health <= 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn player() -> Player {
        Player::new(PlayerId::new(0), "Aria", 30, 6)
    }

    #[test]
    fn test_new_player() {
        let p = player();
        assert_eq!(p.id, PlayerId::new(0));
        assert_eq!(p.health, 30);
        assert!(p.hand().is_empty());
        assert_eq!(p.deck_size(), 0);
        assert!(p.discard_pile().is_empty());
        assert!(!p.is_defeated());
    }

    #[test]
    fn test_hand_management() {
        let mut p = player();
        let card = InstanceId::new(5);

        p.add_to_hand(card);
        assert!(p.hand_contains(card));
        assert_eq!(p.hand(), &[card]);

        assert!(p.remove_from_hand(card));
        assert!(!p.hand_contains(card));
        assert!(!p.remove_from_hand(card));
    }

    #[test]
    fn test_draw_from_deck() {
        let mut p = player();
        p.set_deck(vec![InstanceId::new(1), InstanceId::new(2), InstanceId::new(3)]);

        // Top of the deck is the end of the vec
        assert_eq!(p.draw_from_deck(), Some(InstanceId::new(3)));
        assert_eq!(p.deck_size(), 2);
        assert!(p.hand_contains(InstanceId::new(3)));
    }

    #[test]
    fn test_draw_from_empty_deck() {
        let mut p = player();
        assert_eq!(p.draw_from_deck(), None);
        assert!(p.hand().is_empty());
    }

    #[test]
    fn test_discard_pile_order() {
        let mut p = player();
        p.add_to_discard(InstanceId::new(1));
        p.add_to_discard(InstanceId::new(2));
        assert_eq!(p.discard_pile(), &[InstanceId::new(1), InstanceId::new(2)]);
    }

    #[test]
    fn test_health_and_defeat() {
        let mut p = player();

        p.take_damage(10);
        assert_eq!(p.health, 20);
        assert!(!p.is_defeated());

        p.heal(5);
        assert_eq!(p.health, 25);

        p.take_damage(25);
        assert!(p.is_defeated());
    }

    #[test]
    fn test_player_serialization() {
        let mut p = player();
        p.add_to_hand(InstanceId::new(1));
        p.battlefield.place(0, InstanceId::new(2));

        let json = serde_json::to_string(&p).unwrap();
        let deserialized: Player = serde_json::from_str(&json).unwrap();
        assert_eq!(p, deserialized);
    }
}
