//! Participant Entity
//!
//! A person who can be charged for shared items.

use serde::{Deserialize, Serialize};

use super::entity::{DomainError, DomainResult, Entity};
use super::ids::ParticipantId;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Participant {
    /// Unique identifier
    pub id: ParticipantId,
    /// Display name, stored trimmed
    pub name: String,
}

impl Participant {
    /// Create a participant, trimming the name. Blank names are rejected.
    pub fn new(id: ParticipantId, name: &str) -> DomainResult<Self> {
        let name = name.trim();
        if name.is_empty() {
            return Err(DomainError::EmptyName);
        }
        Ok(Self {
            id,
            name: name.to_string(),
        })
    }
}

impl Entity for Participant {
    type Id = ParticipantId;

    fn id(&self) -> Self::Id {
        self.id
    }
}
