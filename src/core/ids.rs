//! Identifier newtypes for match entities.
//!
//! Identifiers are opaque and stable: the engine compares them for
//! equality and never interprets their value. A lobby or test harness
//! assigns `PlayerId`s; the board allocates `InstanceId`s as cards are
//! spawned into a match.

use serde::{Deserialize, Serialize};

/// Opaque, stable identifier for a player.
///
/// A duel registers exactly two players. Their ids may be any two
/// distinct values - nothing assumes they are 0 and 1.
///
/// ```
/// use duelcore::core::PlayerId;
///
/// let a = PlayerId::new(7);
/// let b = PlayerId::new(9);
/// assert_ne!(a, b);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PlayerId(pub u8);

impl PlayerId {
    /// Create a new player ID.
    #[must_use]
    pub const fn new(id: u8) -> Self {
        Self(id)
    }

    /// Get the raw ID value.
    #[must_use]
    pub const fn raw(self) -> u8 {
        self.0
    }
}

impl std::fmt::Display for PlayerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Player({})", self.0)
    }
}

/// Runtime identity of a card in a match.
///
/// Distinct from `CardId`, which identifies a card *definition*: two
/// copies of the same card in a deck share a `CardId` but each gets its
/// own `InstanceId` when spawned onto the board.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct InstanceId(pub u32);

impl InstanceId {
    /// Create a new instance ID.
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

impl std::fmt::Display for InstanceId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Instance({})", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_player_id_basics() {
        let p = PlayerId::new(3);
        assert_eq!(p.raw(), 3);
        assert_eq!(format!("{}", p), "Player(3)");
    }

    #[test]
    fn test_instance_id_basics() {
        let i = InstanceId::new(42);
        assert_eq!(i.raw(), 42);
        assert_eq!(format!("{}", i), "Instance(42)");
    }

    #[test]
    fn test_id_equality() {
        assert_eq!(PlayerId::new(1), PlayerId::new(1));
        assert_ne!(PlayerId::new(1), PlayerId::new(2));
        assert_eq!(InstanceId::new(5), InstanceId::new(5));
        assert_ne!(InstanceId::new(5), InstanceId::new(6));
    }

    #[test]
    fn test_id_serialization() {
        let p = PlayerId::new(2);
        let json = serde_json::to_string(&p).unwrap();
        let deserialized: PlayerId = serde_json::from_str(&json).unwrap();
        assert_eq!(p, deserialized);
    }
}
