//! Domain Layer
//!
//! Contains all domain entities and core abstractions.
//! This layer has NO dependencies beyond serde and rust_decimal.

mod entity;
mod ids;
mod item;
pub mod money;
mod participant;

pub use entity::{position_by_id, DomainError, DomainResult, Entity};
pub use ids::{IdAllocator, ItemId, ParticipantId};
pub use item::Item;
pub use participant::Participant;
