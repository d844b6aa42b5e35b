//! Card abilities.
//!
//! Abilities are the atomic actions an Order card performs when it
//! resolves. A card lists one or more of them; activation applies each
//! ability in sequence to every target. Unit-directed abilities skip
//! targets that are not units or no longer on a battlefield.

use serde::{Deserialize, Serialize};

use crate::effects::{EffectDuration, EffectKind};

/// An atomic card ability.
///
/// Unit-directed abilities (`DamageUnits`, `WeakenAttack`,
/// `DestroyUnits`) apply per target; the rest act on the casting player
/// or the board and ignore the target list.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Ability {
    /// Deal `amount` damage to each target unit.
    DamageUnits { amount: i64 },
    /// Permanently lower each target unit's attack by `amount`.
    WeakenAttack { amount: i64 },
    /// Destroy each target unit outright.
    DestroyUnits,
    /// Heal the casting player by `amount`.
    HealOwner { amount: i64 },
    /// Draw `count` cards for the casting player.
    DrawCards { count: usize },
    /// Attach a timed effect to the board.
    GrantEffect {
        kind: EffectKind,
        duration: EffectDuration,
        description: String,
    },
}
