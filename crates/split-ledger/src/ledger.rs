//! Ledger Manager
//!
//! Normalized item store keyed by item id. Ids are monotonic, so iterating
//! the map yields items in insertion order. Which items a participant sees
//! is derived on every read; nothing is copied per participant.

use std::collections::{BTreeMap, BTreeSet};

use rust_decimal::Decimal;

use crate::config::RemovalPolicy;
use crate::domain::{DomainError, DomainResult, IdAllocator, Item, ItemId, ParticipantId};
use crate::roster::Roster;

/// One row of a participant's item list
#[derive(Debug, Clone, PartialEq)]
pub struct ItemShare<'a> {
    pub item: &'a Item,
    /// Per-head cost for this participant
    pub share: Decimal,
}

#[derive(Debug, Clone, Default)]
pub struct Ledger {
    items: BTreeMap<ItemId, Item>,
    ids: IdAllocator,
}

impl Ledger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an item shared by every participant currently on the roster
    pub fn add_for_all(&mut self, roster: &Roster, name: &str, price: Decimal) -> DomainResult<ItemId> {
        if roster.is_empty() {
            log::debug!("[LEDGER] Rejected {:?}: roster is empty", name);
            return Err(DomainError::EmptyRoster);
        }
        self.insert(name, price, roster.ids().collect())
    }

    /// Add an item shared by exactly `sharers`, all of whom must be on the roster
    pub fn add_for_subset<I>(
        &mut self,
        roster: &Roster,
        name: &str,
        price: Decimal,
        sharers: I,
    ) -> DomainResult<ItemId>
    where
        I: IntoIterator<Item = ParticipantId>,
    {
        let sharers: BTreeSet<ParticipantId> = sharers.into_iter().collect();
        if let Some(unknown) = sharers.iter().find(|id| !roster.contains(**id)) {
            log::debug!("[LEDGER] Rejected {:?}: participant #{} not on roster", name, unknown);
            return Err(DomainError::NotFound(format!("participant #{}", unknown)));
        }
        self.insert(name, price, sharers)
    }

    fn insert(&mut self, name: &str, price: Decimal, sharers: BTreeSet<ParticipantId>) -> DomainResult<ItemId> {
        // Rejected adds must not consume an id
        let item = Item::new(ItemId(0), name, price, sharers).inspect_err(|e| {
            log::debug!("[LEDGER] Rejected item {:?}: {}", name, e);
        })?;
        let id = ItemId(self.ids.allocate());
        let item = Item { id, ..item };
        log::info!(
            "[LEDGER] Added item #{} {:?} price={} sharers={}",
            id,
            item.name,
            item.price,
            item.shared_with.len()
        );
        self.items.insert(id, item);
        Ok(id)
    }

    /// Remove `item_id` from `participant`'s list, applying `policy` to
    /// co-sharers. Returns false when the participant did not see the item.
    pub fn remove_for(&mut self, participant: ParticipantId, item_id: ItemId, policy: RemovalPolicy) -> bool {
        let Some(item) = self.items.get_mut(&item_id) else {
            return false;
        };
        if !item.is_visible_to(participant) {
            return false;
        }

        match policy {
            RemovalPolicy::Detach => {
                item.dismissed_by.insert(participant);
            }
            RemovalPolicy::DropShare => {
                item.shared_with.remove(&participant);
                item.dismissed_by.remove(&participant);
                if item.shared_with.is_empty() {
                    self.items.remove(&item_id);
                }
            }
            RemovalPolicy::DeleteItem => {
                self.items.remove(&item_id);
            }
        }
        log::info!(
            "[LEDGER] Removed item #{} for participant #{} ({})",
            item_id,
            participant,
            policy.as_str()
        );
        true
    }

    /// Drop items nobody on the roster can still see. Returns how many went.
    ///
    /// Only unseen items are dropped, so no live participant's total moves.
    pub fn prune(&mut self, roster: &Roster) -> usize {
        let before = self.items.len();
        self.items
            .retain(|_, item| item.shared_with.iter().any(|p| roster.contains(*p) && item.is_visible_to(*p)));
        let pruned = before - self.items.len();
        if pruned > 0 {
            log::debug!("[LEDGER] Pruned {} orphaned item(s)", pruned);
        }
        pruned
    }

    pub fn get(&self, id: ItemId) -> Option<&Item> {
        self.items.get(&id)
    }

    /// All stored items in insertion order
    pub fn items(&self) -> impl Iterator<Item = &Item> {
        self.items.values()
    }

    /// Items visible to `participant`, in insertion order, with their share
    pub fn items_for(&self, participant: ParticipantId) -> Vec<ItemShare<'_>> {
        self.items
            .values()
            .filter(|item| item.is_visible_to(participant))
            .map(|item| ItemShare {
                item,
                share: item.share(),
            })
            .collect()
    }

    /// Sum of per-head shares over the participant's visible items
    pub fn total_for(&self, participant: ParticipantId) -> Decimal {
        self.items.values().map(|item| item.share_for(participant)).sum()
    }

    /// Sum of full prices of every stored item
    pub fn bill_total(&self) -> Decimal {
        self.items.values().map(|item| item.price).sum()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn roster_of(names: &[&str]) -> (Roster, Vec<ParticipantId>) {
        let mut roster = Roster::new();
        let ids = names.iter().map(|n| roster.add(n).unwrap()).collect();
        (roster, ids)
    }

    #[test]
    fn test_add_for_all_requires_roster() {
        let roster = Roster::new();
        let mut ledger = Ledger::new();
        assert_eq!(ledger.add_for_all(&roster, "Coffee", dec!(9)), Err(DomainError::EmptyRoster));
        assert!(ledger.is_empty());
    }

    #[test]
    fn test_add_for_all_shares_with_everyone() {
        let (roster, ids) = roster_of(&["A", "B", "C"]);
        let mut ledger = Ledger::new();
        let coffee = ledger.add_for_all(&roster, "Coffee", dec!(9)).unwrap();

        let item = ledger.get(coffee).unwrap();
        assert_eq!(item.shared_with.len(), 3);
        for id in ids {
            assert_eq!(ledger.total_for(id), dec!(3));
        }
    }

    #[test]
    fn test_add_for_subset_only_reaches_selected() {
        let (roster, ids) = roster_of(&["A", "B", "C"]);
        let mut ledger = Ledger::new();
        ledger.add_for_subset(&roster, "Wine", dec!(20), [ids[0], ids[1]]).unwrap();

        assert_eq!(ledger.items_for(ids[0]).len(), 1);
        assert_eq!(ledger.items_for(ids[2]).len(), 0);
        assert_eq!(ledger.total_for(ids[2]), Decimal::ZERO);
    }

    #[test]
    fn test_add_for_subset_rejections() {
        let (roster, ids) = roster_of(&["A"]);
        let mut ledger = Ledger::new();
        assert_eq!(
            ledger.add_for_subset(&roster, "Wine", dec!(20), Vec::<ParticipantId>::new()),
            Err(DomainError::NoSharers)
        );
        assert_eq!(
            ledger.add_for_subset(&roster, " ", dec!(20), [ids[0]]),
            Err(DomainError::EmptyName)
        );
        assert!(matches!(
            ledger.add_for_subset(&roster, "Wine", dec!(20), [ParticipantId(42)]),
            Err(DomainError::NotFound(_))
        ));
        assert!(ledger.is_empty());
    }

    #[test]
    fn test_items_for_keeps_insertion_order() {
        let (roster, ids) = roster_of(&["A"]);
        let mut ledger = Ledger::new();
        ledger.add_for_all(&roster, "First", dec!(1)).unwrap();
        ledger.add_for_all(&roster, "Second", dec!(2)).unwrap();

        let names: Vec<_> = ledger.items_for(ids[0]).iter().map(|s| s.item.name.clone()).collect();
        assert_eq!(names, ["First", "Second"]);
    }

    #[test]
    fn test_remove_detach_keeps_co_sharer_total() {
        let (roster, ids) = roster_of(&["A", "B"]);
        let mut ledger = Ledger::new();
        let taxi = ledger.add_for_all(&roster, "Taxi", dec!(50)).unwrap();

        assert!(ledger.remove_for(ids[0], taxi, RemovalPolicy::Detach));
        assert!(ledger.items_for(ids[0]).is_empty());
        assert_eq!(ledger.total_for(ids[0]), Decimal::ZERO);
        assert_eq!(ledger.total_for(ids[1]), dec!(25));
    }

    #[test]
    fn test_remove_drop_share_recomputes() {
        let (roster, ids) = roster_of(&["A", "B"]);
        let mut ledger = Ledger::new();
        let taxi = ledger.add_for_all(&roster, "Taxi", dec!(50)).unwrap();

        assert!(ledger.remove_for(ids[0], taxi, RemovalPolicy::DropShare));
        assert_eq!(ledger.total_for(ids[1]), dec!(50));

        assert!(ledger.remove_for(ids[1], taxi, RemovalPolicy::DropShare));
        assert!(ledger.get(taxi).is_none());
    }

    #[test]
    fn test_remove_delete_item_clears_everyone() {
        let (roster, ids) = roster_of(&["A", "B"]);
        let mut ledger = Ledger::new();
        let taxi = ledger.add_for_all(&roster, "Taxi", dec!(50)).unwrap();

        assert!(ledger.remove_for(ids[0], taxi, RemovalPolicy::DeleteItem));
        assert_eq!(ledger.total_for(ids[1]), Decimal::ZERO);
        assert!(ledger.is_empty());
    }

    #[test]
    fn test_remove_absent_is_noop() {
        let (roster, ids) = roster_of(&["A", "B"]);
        let mut ledger = Ledger::new();
        let wine = ledger.add_for_subset(&roster, "Wine", dec!(20), [ids[0]]).unwrap();

        assert!(!ledger.remove_for(ids[0], ItemId(999), RemovalPolicy::Detach));
        assert!(!ledger.remove_for(ids[1], wine, RemovalPolicy::DeleteItem));
        assert!(ledger.get(wine).is_some());
    }

    #[test]
    fn test_prune_drops_only_unseen_items() {
        let (mut roster, ids) = roster_of(&["A", "B"]);
        let mut ledger = Ledger::new();
        let solo = ledger.add_for_subset(&roster, "Solo", dec!(10), [ids[0]]).unwrap();
        let shared = ledger.add_for_all(&roster, "Shared", dec!(10)).unwrap();

        roster.remove(ids[0]);
        assert_eq!(ledger.prune(&roster), 1);
        assert!(ledger.get(solo).is_none());
        assert!(ledger.get(shared).is_some());
        assert_eq!(ledger.total_for(ids[1]), dec!(5));
    }

    #[test]
    fn test_bill_total() {
        let (roster, ids) = roster_of(&["A", "B"]);
        let mut ledger = Ledger::new();
        ledger.add_for_all(&roster, "Taxi", dec!(50)).unwrap();
        ledger.add_for_subset(&roster, "Wine", dec!(12.5), [ids[1]]).unwrap();
        assert_eq!(ledger.bill_total(), dec!(62.5));
    }
}
