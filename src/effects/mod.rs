//! Match-wide effect system.
//!
//! - `GameEffect`: a timed or permanent board modifier with an identity,
//!   a kind, and a remaining-duration counter
//! - `EffectKind`: closed tagged variant of effect behaviors
//! - `EffectDuration`: permanent, or turns remaining
//! - `TargetChoice`: discriminated auto-vs-explicit target input for
//!   Order-card resolution

mod effect;
mod targeting;

pub use effect::{EffectDuration, EffectId, EffectKind, GameEffect};
pub use targeting::TargetChoice;
