//! Item Entity
//!
//! A single purchase shared among a set of participants. Stored once; the
//! per-participant view is derived from `shared_with` and `dismissed_by`.

use std::collections::BTreeSet;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::entity::{DomainError, DomainResult, Entity};
use super::ids::{ItemId, ParticipantId};
use super::money::{per_head, validate_price};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    /// Unique identifier
    pub id: ItemId,
    /// Item name, stored trimmed
    pub name: String,
    /// Full price of the purchase
    pub price: Decimal,
    /// Participants liable for the cost. Its size is the per-head divisor.
    pub shared_with: BTreeSet<ParticipantId>,
    /// Sharers who removed the item from their own view
    pub dismissed_by: BTreeSet<ParticipantId>,
}

impl Item {
    pub fn new(
        id: ItemId,
        name: &str,
        price: Decimal,
        shared_with: BTreeSet<ParticipantId>,
    ) -> DomainResult<Self> {
        let name = name.trim();
        if name.is_empty() {
            return Err(DomainError::EmptyName);
        }
        validate_price(price)?;
        if shared_with.is_empty() {
            return Err(DomainError::NoSharers);
        }
        Ok(Self {
            id,
            name: name.to_string(),
            price,
            shared_with,
            dismissed_by: BTreeSet::new(),
        })
    }

    /// Whether the item shows up in `participant`'s list
    pub fn is_visible_to(&self, participant: ParticipantId) -> bool {
        self.shared_with.contains(&participant) && !self.dismissed_by.contains(&participant)
    }

    /// Cost of one share
    pub fn share(&self) -> Decimal {
        per_head(self.price, self.shared_with.len())
    }

    /// What `participant` owes for this item; zero if not liable
    pub fn share_for(&self, participant: ParticipantId) -> Decimal {
        if self.is_visible_to(participant) {
            self.share()
        } else {
            Decimal::ZERO
        }
    }
}

impl Entity for Item {
    type Id = ItemId;

    fn id(&self) -> Self::Id {
        self.id
    }
}
