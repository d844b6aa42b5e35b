//! Action log entries.
//!
//! Every mutation that goes through the orchestration surface is
//! recorded on the board, giving replays and debugging a complete
//! account of the match.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::core::{InstanceId, PlayerId};

/// A logged match action.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum MatchAction {
    /// Unit deployed from hand to a battlefield slot.
    Deploy { card: InstanceId, slot: usize },

    /// Attack declared between two battlefield cards.
    Attack {
        source: InstanceId,
        target: InstanceId,
    },

    /// Order card consumed, with the targets it resolved against.
    /// SmallVec keeps the common 0-4 target case off the heap.
    PlayOrder {
        card: InstanceId,
        targets: SmallVec<[InstanceId; 4]>,
    },

    /// Card drawn from the deck.
    Draw { card: InstanceId },

    /// Turn boundary processed.
    EndTurn,
}

/// A recorded action with the acting player and turn number.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActionRecord {
    /// The player who took this action.
    pub player: PlayerId,

    /// The action taken.
    pub action: MatchAction,

    /// Turn number when the action was taken.
    pub turn: u32,
}

impl ActionRecord {
    /// Create a new action record.
    #[must_use]
    pub fn new(player: PlayerId, action: MatchAction, turn: u32) -> Self {
        Self {
            player,
            action,
            turn,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_action_equality() {
        let a1 = MatchAction::Deploy {
            card: InstanceId::new(1),
            slot: 2,
        };
        let a2 = MatchAction::Deploy {
            card: InstanceId::new(1),
            slot: 2,
        };
        let a3 = MatchAction::Deploy {
            card: InstanceId::new(1),
            slot: 3,
        };

        assert_eq!(a1, a2);
        assert_ne!(a1, a3);
    }

    #[test]
    fn test_record() {
        let record = ActionRecord::new(
            PlayerId::new(0),
            MatchAction::Attack {
                source: InstanceId::new(5),
                target: InstanceId::new(9),
            },
            3,
        );

        assert_eq!(record.player, PlayerId::new(0));
        assert_eq!(record.turn, 3);
    }

    #[test]
    fn test_record_serialization() {
        let record = ActionRecord::new(
            PlayerId::new(1),
            MatchAction::PlayOrder {
                card: InstanceId::new(7),
                targets: SmallVec::from_slice(&[InstanceId::new(1), InstanceId::new(2)]),
            },
            2,
        );

        let json = serde_json::to_string(&record).unwrap();
        let deserialized: ActionRecord = serde_json::from_str(&json).unwrap();
        assert_eq!(record, deserialized);
    }
}
