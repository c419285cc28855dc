//! Global Application State Store
//!
//! The one `Bill` both screens read and mutate, held in a reactive_stores
//! `Store` so every card recomputes when it changes.

use std::collections::BTreeSet;

use leptos::prelude::*;
use reactive_stores::Store;
use split_ledger::{parse_price, Bill, BillConfig, DomainResult, ItemId, ParticipantId};

#[derive(Clone, Debug, Default, Store)]
pub struct AppState {
    /// Roster, items and config
    pub bill: Bill,
}

impl AppState {
    pub fn new(config: BillConfig) -> Self {
        Self {
            bill: Bill::new(config),
        }
    }
}

/// Type alias for the store
pub type AppStore = Store<AppState>;

/// Get the app store from context
pub fn use_app_store() -> AppStore {
    expect_context::<AppStore>()
}

// ========================
// Store Helper Functions
// ========================
//
// Each returns whether the action took effect. Rejections are silent in
// the UI and only logged.

fn accepted<T>(action: &str, result: DomainResult<T>) -> bool {
    match result {
        Ok(_) => true,
        Err(e) => {
            log::debug!("[STORE] {} rejected: {}", action, e);
            false
        }
    }
}

/// Add a participant by name
pub fn store_add_participant(store: &AppStore, name: &str) -> bool {
    let result = store.bill().write().add_participant(name);
    accepted("add participant", result)
}

/// Remove a participant by ID
pub fn store_remove_participant(store: &AppStore, id: ParticipantId) {
    store.bill().write().remove_participant(id);
}

/// Parse the raw price input and add the item for `sharers`
fn add_item_from_input(
    bill: &mut Bill,
    name: &str,
    price: &str,
    sharers: &BTreeSet<ParticipantId>,
) -> DomainResult<ItemId> {
    let price = parse_price(price)?;
    bill.add_item_for_subset(name, price, sharers.iter().copied())
}

/// Parse the raw price input and add the item for everyone
fn add_item_for_all_from_input(bill: &mut Bill, name: &str, price: &str) -> DomainResult<ItemId> {
    let price = parse_price(price)?;
    bill.add_item_for_all(name, price)
}

/// Add an item split among the selected participants
pub fn store_add_item(store: &AppStore, name: &str, price: &str, sharers: &BTreeSet<ParticipantId>) -> bool {
    let result = add_item_from_input(&mut store.bill().write(), name, price, sharers);
    accepted("add item", result)
}

/// Add an item split among everyone on the roster
pub fn store_add_item_for_all(store: &AppStore, name: &str, price: &str) -> bool {
    let result = add_item_for_all_from_input(&mut store.bill().write(), name, price);
    accepted("add item for all", result)
}

/// Remove an item from one participant's list
pub fn store_remove_item(store: &AppStore, participant: ParticipantId, item: ItemId) {
    store.bill().write().remove_item(participant, item);
}
