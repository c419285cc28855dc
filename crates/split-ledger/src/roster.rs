//! Roster Manager
//!
//! Ordered list of participants. Removing a participant never touches the
//! items they shared; stale ids are tolerated by the ledger.

use crate::domain::{
    position_by_id, DomainError, DomainResult, IdAllocator, Participant, ParticipantId,
};

#[derive(Debug, Clone, Default)]
pub struct Roster {
    participants: Vec<Participant>,
    ids: IdAllocator,
}

impl Roster {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a participant with a fresh id. Blank names are rejected.
    pub fn add(&mut self, name: &str) -> DomainResult<ParticipantId> {
        if name.trim().is_empty() {
            log::debug!("[ROSTER] Rejected blank participant name");
            return Err(DomainError::EmptyName);
        }
        let id = ParticipantId(self.ids.allocate());
        let participant = Participant::new(id, name)?;
        log::info!("[ROSTER] Added participant #{} {:?}", id, participant.name);
        self.participants.push(participant);
        Ok(id)
    }

    /// Remove by id. Absent ids are a no-op and return `None`.
    pub fn remove(&mut self, id: ParticipantId) -> Option<Participant> {
        let index = position_by_id(&self.participants, id)?;
        let removed = self.participants.remove(index);
        log::info!("[ROSTER] Removed participant #{} {:?}", id, removed.name);
        Some(removed)
    }

    pub fn get(&self, id: ParticipantId) -> Option<&Participant> {
        self.participants.iter().find(|p| p.id == id)
    }

    pub fn contains(&self, id: ParticipantId) -> bool {
        self.get(id).is_some()
    }

    /// Participants in insertion order
    pub fn participants(&self) -> &[Participant] {
        &self.participants
    }

    pub fn ids(&self) -> impl Iterator<Item = ParticipantId> + '_ {
        self.participants.iter().map(|p| p.id)
    }

    pub fn len(&self) -> usize {
        self.participants.len()
    }

    pub fn is_empty(&self) -> bool {
        self.participants.is_empty()
    }
}
