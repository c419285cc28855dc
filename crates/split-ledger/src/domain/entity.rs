//! Domain Layer - Core Entity Trait
//!
//! Basic contract shared by participants and items, plus the error type
//! every fallible ledger operation returns.

use serde::{Deserialize, Serialize};

/// Core trait for all domain entities
pub trait Entity: Sized + Clone {
    /// The type of the entity's unique identifier
    type Id: Copy + Eq + Ord + std::hash::Hash;

    /// Returns the entity's unique identifier
    fn id(&self) -> Self::Id;
}

/// Index of the entity with `id` in an insertion-ordered slice
pub fn position_by_id<T: Entity>(entities: &[T], id: T::Id) -> Option<usize> {
    entities.iter().position(|e| e.id() == id)
}

/// Common result type for domain operations
pub type DomainResult<T> = Result<T, DomainError>;

/// Domain-level errors
///
/// Every variant describes a rejected user action. Callers in the UI treat
/// all of them as a silent no-op.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum DomainError {
    /// Name was empty or whitespace only
    EmptyName,
    /// Price missing, unparseable or negative
    InvalidPrice(String),
    /// No participant selected for an item
    NoSharers,
    /// Split-with-everyone requested on an empty roster
    EmptyRoster,
    /// Referenced participant is not on the roster
    NotFound(String),
    /// Configuration value could not be understood
    InvalidConfig(String),
}

impl std::fmt::Display for DomainError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DomainError::EmptyName => write!(f, "Name must not be empty"),
            DomainError::InvalidPrice(raw) => write!(f, "Invalid price: {:?}", raw),
            DomainError::NoSharers => write!(f, "Select at least one participant"),
            DomainError::EmptyRoster => write!(f, "Add a participant first"),
            DomainError::NotFound(msg) => write!(f, "Not found: {}", msg),
            DomainError::InvalidConfig(msg) => write!(f, "Invalid config: {}", msg),
        }
    }
}

impl std::error::Error for DomainError {}
