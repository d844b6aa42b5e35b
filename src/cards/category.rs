//! Card categorization.
//!
//! `CardCategory` is a closed tagged variant: a card is either a Unit
//! (occupies a battlefield slot, fights with attack/health stats) or an
//! Order (consumed on deploy, resolves its abilities immediately).
//! Every decision point matches exhaustively, so adding a third category
//! forces each call site to be revisited by the compiler.

use serde::{Deserialize, Serialize};

/// Closed set of card categories, with category-specific data.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CardCategory {
    /// Occupies a battlefield slot and can attack.
    Unit(UnitStats),
    /// Consumed immediately on deploy; never occupies a slot.
    Order,
}

/// Combat statistics for a Unit card.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct UnitStats {
    /// Damage dealt when this unit attacks or retaliates.
    pub attack: i64,
    /// Total damage this unit absorbs before it is destroyed.
    pub health: i64,
}

impl CardCategory {
    /// Create a Unit category with the given stats.
    #[must_use]
    pub const fn unit(attack: i64, health: i64) -> Self {
        Self::Unit(UnitStats { attack, health })
    }

    /// Check whether this is a Unit card.
    #[must_use]
    pub fn is_unit(&self) -> bool {
        match self {
            CardCategory::Unit(_) => true,
            CardCategory::Order => false,
        }
    }

    /// Check whether this is an Order card.
    #[must_use]
    pub fn is_order(&self) -> bool {
        match self {
            CardCategory::Unit(_) => false,
            CardCategory::Order => true,
        }
    }

    /// Get the unit stats, if this is a Unit card.
    #[must_use]
    pub fn unit_stats(&self) -> Option<&UnitStats> {
        match self {
            CardCategory::Unit(stats) => Some(stats),
            CardCategory::Order => None,
        }
    }
}

impl std::fmt::Display for CardCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CardCategory::Unit(stats) => write!(f, "Unit({}/{})", stats.attack, stats.health),
            CardCategory::Order => write!(f, "Order"),
        }
    }
}
