//! Split Ledger
//!
//! Participants, shared items and per-head totals for splitting a bill.
//!
//! Layout:
//! - domain: ids, entities, money helpers and the error type
//! - roster: ordered participant list
//! - ledger: normalized item store and total computation
//! - bill: the single owned state object tying the two together
//! - flow: roster/items screen transitions
//! - config: removal policy and currency symbol

mod bill;
pub mod config;
pub mod domain;
pub mod flow;
mod ledger;
mod roster;

pub use bill::Bill;
pub use config::{BillConfig, RemovalPolicy};
pub use domain::money::{format_amount, format_currency, parse_price};
pub use domain::{DomainError, DomainResult, Item, ItemId, Participant, ParticipantId};
pub use flow::Screen;
pub use ledger::{ItemShare, Ledger};
pub use roster::Roster;
