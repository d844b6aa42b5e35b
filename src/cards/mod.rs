//! Card system: categories, abilities, definitions, instances, registry.
//!
//! ## Key Types
//!
//! - `CardId`: Identifier for card definitions
//! - `CardCategory`: Closed Unit/Order tagged variant with unit stats
//! - `Ability`: Atomic actions an Order card performs on resolution
//! - `CardDefinition`: Static card data
//! - `CardInstance`: Runtime card state (damage, modifiers, attack flag)
//! - `CardRegistry`: Card definition lookup

pub mod ability;
pub mod category;
pub mod definition;
pub mod instance;
pub mod registry;

pub use ability::Ability;
pub use category::{CardCategory, UnitStats};
pub use definition::{CardDefinition, CardId};
pub use instance::CardInstance;
pub use registry::CardRegistry;
