//! Match-wide timed effects.
//!
//! A `GameEffect` is a modifier attached to the board for a duration:
//! permanent, or counting down once per elapsed turn-end. Effect
//! behavior is a closed tagged variant (`EffectKind`) paired with
//! kind-specific data; the board dispatches turn-start and turn-end
//! actions by matching on the kind. There is no open-ended subclassing.
//!
//! ## Lifecycle
//!
//! Created externally (or granted by an Order-card ability), appended to
//! the board's active set, ticked down during end-of-turn processing,
//! and removed on the same pass that expires it. `Board::clear_expired_effects`
//! removes stragglers again.

use serde::{Deserialize, Serialize};

use crate::core::PlayerId;

/// Unique identifier for an active effect.
///
/// Allocated by the board when an effect is attached; the stable key
/// used for removal.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct EffectId(pub u32);

impl EffectId {
    /// Create a new effect ID.
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

impl std::fmt::Display for EffectId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Effect({})", self.0)
    }
}

/// How long an effect stays active.
///
/// ```
/// use duelcore::effects::EffectDuration;
///
/// let mut d = EffectDuration::Turns(2);
/// assert!(d.is_active());
/// d.tick();
/// assert!(d.is_active());
/// d.tick();
/// assert!(!d.is_active());
///
/// let mut p = EffectDuration::Permanent;
/// p.tick();
/// assert!(p.is_active());
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EffectDuration {
    /// Never expires by countdown.
    Permanent,
    /// Remaining turn-ends before expiry. `Turns(0)` is expired.
    Turns(u32),
}

impl EffectDuration {
    /// An effect is active while permanent or with turns remaining.
    #[must_use]
    pub fn is_active(&self) -> bool {
        match self {
            EffectDuration::Permanent => true,
            EffectDuration::Turns(remaining) => *remaining > 0,
        }
    }

    /// Count down one elapsed turn-end. Permanent durations never change.
    pub fn tick(&mut self) {
        match self {
            EffectDuration::Permanent => {}
            EffectDuration::Turns(remaining) => {
                *remaining = remaining.saturating_sub(1);
            }
        }
    }

    /// Remaining turns, if this duration counts down.
    #[must_use]
    pub fn remaining_turns(&self) -> Option<u32> {
        match self {
            EffectDuration::Permanent => None,
            EffectDuration::Turns(remaining) => Some(*remaining),
        }
    }
}

/// Closed set of effect behaviors, with kind-specific data.
///
/// Each kind defines what happens at turn start and turn end; the board
/// dispatches by exhaustive match. Kinds with no action at a boundary
/// simply do nothing there.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum EffectKind {
    /// Heals `player` by `amount` at the start of every turn.
    Regeneration { player: PlayerId, amount: i64 },
    /// Damages `player` by `amount` at the end of every turn.
    Corrosion { player: PlayerId, amount: i64 },
    /// Adds `amount` attack to every unit on `player`'s battlefield at
    /// the start of every turn. Stacks across turns while active.
    Rally { player: PlayerId, amount: i64 },
}

/// A timed or permanent modifier attached to the board.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameEffect {
    /// Unique identifier; the stable removal key.
    pub id: EffectId,
    /// Human-readable text for logs and presentation.
    pub description: String,
    /// Behavior of this effect.
    pub kind: EffectKind,
    /// Remaining lifetime.
    pub duration: EffectDuration,
}

impl GameEffect {
    /// Create a new effect.
    #[must_use]
    pub fn new(
        id: EffectId,
        kind: EffectKind,
        duration: EffectDuration,
        description: impl Into<String>,
    ) -> Self {
        Self {
            id,
            description: description.into(),
            kind,
            duration,
        }
    }

    /// Whether this effect is still active.
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.duration.is_active()
    }

    /// Count down one elapsed turn-end.
    pub fn tick_turn_end(&mut self) {
        self.duration.tick();
    }
}
