//! Core types: identifiers, errors, and the match RNG.

pub mod error;
pub mod ids;
pub mod rng;

pub use error::RulesError;
pub use ids::{InstanceId, PlayerId};
pub use rng::{MatchRng, MatchRngState};
