//! Bill
//!
//! The single owned state object: roster, ledger and config together.
//! Both views read and mutate the bill only through these methods.

use rust_decimal::Decimal;

use crate::config::BillConfig;
use crate::domain::money::{format_amount, format_currency};
use crate::domain::{DomainResult, ItemId, Participant, ParticipantId};
use crate::ledger::{ItemShare, Ledger};
use crate::roster::Roster;

#[derive(Debug, Clone, Default)]
pub struct Bill {
    roster: Roster,
    ledger: Ledger,
    config: BillConfig,
}

impl Bill {
    pub fn new(config: BillConfig) -> Self {
        Self {
            config,
            ..Self::default()
        }
    }

    pub fn roster(&self) -> &Roster {
        &self.roster
    }

    pub fn ledger(&self) -> &Ledger {
        &self.ledger
    }

    pub fn config(&self) -> &BillConfig {
        &self.config
    }

    pub fn participants(&self) -> &[Participant] {
        self.roster.participants()
    }

    pub fn add_participant(&mut self, name: &str) -> DomainResult<ParticipantId> {
        self.roster.add(name)
    }

    /// Remove a participant. Their shares stay on co-sharers' items and the
    /// divisor is unchanged, so nobody else's total moves.
    pub fn remove_participant(&mut self, id: ParticipantId) -> Option<Participant> {
        let removed = self.roster.remove(id)?;
        self.ledger.prune(&self.roster);
        Some(removed)
    }

    pub fn add_item_for_all(&mut self, name: &str, price: Decimal) -> DomainResult<ItemId> {
        self.ledger.add_for_all(&self.roster, name, price)
    }

    pub fn add_item_for_subset<I>(&mut self, name: &str, price: Decimal, sharers: I) -> DomainResult<ItemId>
    where
        I: IntoIterator<Item = ParticipantId>,
    {
        self.ledger.add_for_subset(&self.roster, name, price, sharers)
    }

    /// Remove an item from one participant's list per the configured policy
    pub fn remove_item(&mut self, participant: ParticipantId, item: ItemId) -> bool {
        let removed = self.ledger.remove_for(participant, item, self.config.removal);
        if removed {
            self.ledger.prune(&self.roster);
        }
        removed
    }

    /// Items on a participant's list. Empty for anyone not on the roster.
    pub fn items_for(&self, participant: ParticipantId) -> Vec<ItemShare<'_>> {
        if !self.roster.contains(participant) {
            return Vec::new();
        }
        self.ledger.items_for(participant)
    }

    /// Unrounded total owed. Zero for anyone not on the roster.
    pub fn total_for(&self, participant: ParticipantId) -> Decimal {
        if !self.roster.contains(participant) {
            return Decimal::ZERO;
        }
        self.ledger.total_for(participant)
    }

    /// Total owed rendered with two decimals, e.g. `"25.00"`
    pub fn compute_total(&self, participant: ParticipantId) -> String {
        format_amount(self.total_for(participant))
    }

    pub fn bill_total(&self) -> Decimal {
        self.ledger.bill_total()
    }

    /// Amount rendered with the configured currency symbol
    pub fn format_money(&self, amount: Decimal) -> String {
        format_currency(&self.config.currency, amount)
    }
}
