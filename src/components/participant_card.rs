//! Participant Card Component
//!
//! One person's items with per-head cost, their running total and a
//! payment request line.

use leptos::prelude::*;

use crate::store::{store_remove_item, use_app_store};
use crate::summary::CardSummary;

#[component]
pub fn ParticipantCard(card: CardSummary) -> impl IntoView {
    let store = use_app_store();
    let participant = card.participant;
    let list_height = card.list_height_px();

    view! {
        <div class="card participant-card items" style=format!("height: {}px;", card.height_px)>
            <h3 class="card-title">{card.name}</h3>
            <ul class="item-list" style=format!("height: {}px;", list_height)>
                {card.rows.into_iter().map(|row| {
                    let item_id = row.item_id;
                    view! {
                        <li class="item-row">
                            <span class="item-text">{row.name} " - " {row.share}</span>
                            <button
                                class="delete-btn ghost"
                                title="Remove from this list"
                                on:click=move |_| store_remove_item(&store, participant, item_id)
                            >
                                "🗑"
                            </button>
                        </li>
                    }
                }).collect_view()}
            </ul>
            <div class="card-total">
                <span>"Total:"</span>
                <span>{card.total}</span>
            </div>
            <p class="request-note">{card.request_note}</p>
        </div>
    }
}
