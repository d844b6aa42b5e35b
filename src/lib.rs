//! # duelcore
//!
//! Match rules core for a two-player collectible card duel.
//!
//! ## Design Principles
//!
//! 1. **Headless**: No rendering, input, or networking. Presentation
//!    collaborators call the orchestration surface and read state back
//!    out through synchronous queries.
//!
//! 2. **Closed Variants**: Card categories, abilities, and effect kinds
//!    are tagged enums matched exhaustively. Adding a variant forces
//!    every decision point through the compiler.
//!
//! 3. **Explicit Dependencies**: The registry and board are constructed
//!    by the host and passed in - no singletons, no ambient lookup.
//!
//! ## Architecture
//!
//! - **Boolean legality, hard errors for bad arguments**: Illegal
//!   actions (deploying out of turn, attacking twice) return `false`;
//!   invalid arguments (an unregistered player id) return `RulesError`.
//!
//! - **Persistent Data Structures**: The effect list and action log use
//!   `im` vectors, so the two-phase effect passes iterate cheap
//!   snapshots and board clones stay inexpensive.
//!
//! - **Deterministic**: Decks shuffle from a seed; the RNG position is
//!   part of the snapshot, so saved matches replay exactly.
//!
//! ## Modules
//!
//! - `core`: Identifiers, errors, match RNG
//! - `cards`: Categories, abilities, definitions, instances, registry
//! - `effects`: Timed board effects and Order-card targeting
//! - `player`: Players and their zones (hand, deck, discard, battlefield)
//! - `board`: The authoritative match-state container
//! - `duel`: The orchestration surface UI collaborators call

pub mod board;
pub mod cards;
pub mod core;
pub mod duel;
pub mod effects;
pub mod player;

// Re-export commonly used types
pub use crate::core::{InstanceId, MatchRng, MatchRngState, PlayerId, RulesError};

pub use crate::cards::{
    Ability, CardCategory, CardDefinition, CardId, CardInstance, CardRegistry, UnitStats,
};

pub use crate::effects::{EffectDuration, EffectId, EffectKind, GameEffect, TargetChoice};

pub use crate::player::{Battlefield, Player, DEFAULT_SLOT_COUNT};

pub use crate::board::{ActionRecord, Board, MatchAction};

pub use crate::duel::{Duel, DuelBuilder, DuelResult};
