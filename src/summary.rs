//! Card Summaries
//!
//! Plain view models for the participant cards on the items screen.

use split_ledger::{Bill, ItemId, ParticipantId};

/// Card height before any item rows, in px
const CARD_BASE_HEIGHT: u32 = 200;
/// Extra height per item row, in px
const CARD_ROW_HEIGHT: u32 = 40;
/// Cards never grow past this, in px; the list scrolls instead
const CARD_MAX_HEIGHT: u32 = 500;
/// Header and footer space inside a card, in px
const CARD_CHROME_HEIGHT: u32 = 130;

/// One item line on a card
#[derive(Debug, Clone, PartialEq)]
pub struct ItemRow {
    pub item_id: ItemId,
    pub name: String,
    /// Per-head cost with currency symbol
    pub share: String,
}

/// Everything a participant card renders
#[derive(Debug, Clone, PartialEq)]
pub struct CardSummary {
    pub participant: ParticipantId,
    pub name: String,
    pub rows: Vec<ItemRow>,
    /// Running total with currency symbol
    pub total: String,
    /// Copyable payment request text
    pub request_note: String,
    pub height_px: u32,
}

impl CardSummary {
    /// Height of the scrolling item list
    pub fn list_height_px(&self) -> u32 {
        self.height_px.saturating_sub(CARD_CHROME_HEIGHT)
    }
}

/// Card height for `item_count` rows
pub fn card_height(item_count: usize) -> u32 {
    let rows = u32::try_from(item_count).unwrap_or(u32::MAX);
    CARD_BASE_HEIGHT
        .saturating_add(rows.saturating_mul(CARD_ROW_HEIGHT))
        .min(CARD_MAX_HEIGHT)
}

/// `"Alice: $25.00 for Taxi, Pizza"`, or just the amount with no items
pub fn request_note(name: &str, total: &str, item_names: &[&str]) -> String {
    if item_names.is_empty() {
        format!("{}: {}", name, total)
    } else {
        format!("{}: {} for {}", name, total, item_names.join(", "))
    }
}

/// One card per participant, in roster order
pub fn card_summaries(bill: &Bill) -> Vec<CardSummary> {
    bill.participants()
        .iter()
        .map(|participant| {
            let shares = bill.items_for(participant.id);
            let rows: Vec<ItemRow> = shares
                .iter()
                .map(|row| ItemRow {
                    item_id: row.item.id,
                    name: row.item.name.clone(),
                    share: bill.format_money(row.share),
                })
                .collect();
            let total = bill.format_money(bill.total_for(participant.id));
            let item_names: Vec<&str> = shares.iter().map(|row| row.item.name.as_str()).collect();

            CardSummary {
                participant: participant.id,
                name: participant.name.clone(),
                request_note: request_note(&participant.name, &total, &item_names),
                height_px: card_height(rows.len()),
                rows,
                total,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_card_height() {
        assert_eq!(card_height(0), 200);
        assert_eq!(card_height(3), 320);
        assert_eq!(card_height(7), 480);
        assert_eq!(card_height(8), 500);
        assert_eq!(card_height(100), 500);
    }

    #[test]
    fn test_request_note() {
        assert_eq!(request_note("Alice", "$25.00", &["Taxi", "Pizza"]), "Alice: $25.00 for Taxi, Pizza");
        assert_eq!(request_note("Bob", "$0.00", &[]), "Bob: $0.00");
    }

    #[test]
    fn test_card_summaries() {
        let mut bill = Bill::default();
        let alice = bill.add_participant("Alice").unwrap();
        let bob = bill.add_participant("Bob").unwrap();
        bill.add_item_for_subset("Taxi", dec!(50), [alice, bob]).unwrap();
        bill.add_item_for_subset("Pizza", dec!(30), [alice]).unwrap();

        let cards = card_summaries(&bill);
        assert_eq!(cards.len(), 2);

        let alice_card = &cards[0];
        assert_eq!(alice_card.name, "Alice");
        assert_eq!(alice_card.rows.len(), 2);
        assert_eq!(alice_card.rows[0].share, "$25.00");
        assert_eq!(alice_card.rows[1].share, "$30.00");
        assert_eq!(alice_card.total, "$55.00");
        assert_eq!(alice_card.request_note, "Alice: $55.00 for Taxi, Pizza");
        assert_eq!(alice_card.height_px, 280);
        assert_eq!(alice_card.list_height_px(), 150);

        let bob_card = &cards[1];
        assert_eq!(bob_card.participant, bob);
        assert_eq!(bob_card.total, "$25.00");
    }
}
