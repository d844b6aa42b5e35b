//! Order-card target selection.
//!
//! The two targeting behaviors are a discriminated input rather than a
//! sentinel: callers either name their targets or explicitly request
//! auto-resolution against the opponent's battlefield.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::core::InstanceId;

/// Target input for Order-card resolution.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum TargetChoice {
    /// Resolve against every card currently on the opponent's battlefield.
    Auto,
    /// Resolve against exactly these cards.
    Explicit(SmallVec<[InstanceId; 4]>),
}

impl TargetChoice {
    /// Build an explicit target list.
    #[must_use]
    pub fn explicit(targets: impl IntoIterator<Item = InstanceId>) -> Self {
        Self::Explicit(targets.into_iter().collect())
    }

    /// Target a single card.
    #[must_use]
    pub fn single(target: InstanceId) -> Self {
        Self::Explicit(SmallVec::from_slice(&[target]))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_explicit_targets() {
        let choice = TargetChoice::explicit([InstanceId::new(1), InstanceId::new(2)]);
        match choice {
            TargetChoice::Explicit(targets) => {
                assert_eq!(targets.as_slice(), &[InstanceId::new(1), InstanceId::new(2)]);
            }
            TargetChoice::Auto => panic!("Expected Explicit"),
        }
    }

    #[test]
    fn test_single_target() {
        let choice = TargetChoice::single(InstanceId::new(7));
        match choice {
            TargetChoice::Explicit(targets) => assert_eq!(targets.len(), 1),
            TargetChoice::Auto => panic!("Expected Explicit"),
        }
    }

    #[test]
    fn test_serialization() {
        let choice = TargetChoice::Auto;
        let json = serde_json::to_string(&choice).unwrap();
        let deserialized: TargetChoice = serde_json::from_str(&json).unwrap();
        assert_eq!(choice, deserialized);
    }
}
