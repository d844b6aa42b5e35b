//! Error taxonomy for the rules core.
//!
//! Three classes of failure exist, and only one of them is an `Err`:
//!
//! - **Invalid arguments** (an unregistered player id, an unknown card
//!   definition) surface as `RulesError` values and are never silently
//!   swallowed.
//! - **Illegal actions** (deploying out of turn, attacking twice) are
//!   reported as `false` returns from the orchestration surface so UI
//!   collaborators can react without special-case handling.
//! - **Invariant violations** are states no valid operation sequence can
//!   reach; the core fails fast instead of dereferencing absent state.

use thiserror::Error;

use super::ids::PlayerId;
use crate::cards::CardId;

/// Errors raised by board construction and state operations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RulesError {
    /// A player id that matches neither registered player.
    #[error("unknown player id: {0}")]
    UnknownPlayer(PlayerId),

    /// Both players of a duel were given the same id.
    #[error("duplicate player id: {0}")]
    DuplicatePlayers(PlayerId),

    /// A deck list referenced a card definition the registry does not hold.
    #[error("unknown card definition: {0}")]
    UnknownCard(CardId),

    /// Match state no valid operation sequence can reach.
    #[error("match state invariant violated: {detail}")]
    InvariantViolation { detail: String },
}
