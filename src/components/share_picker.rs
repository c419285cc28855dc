//! Share Picker Component
//!
//! Toggle buttons, one per participant, for choosing who splits an item.

use std::collections::BTreeSet;

use leptos::prelude::*;
use split_ledger::ParticipantId;

use crate::store::{use_app_store, AppStateStoreFields};

#[component]
pub fn SharePicker(
    selected: ReadSignal<BTreeSet<ParticipantId>>,
    on_toggle: impl Fn(ParticipantId) + Copy + Send + Sync + 'static,
) -> impl IntoView {
    let store = use_app_store();
    let participants = move || store.bill().read().participants().to_vec();

    view! {
        <div class="share-picker">
            <For
                each=participants
                key=|p| p.id
                children=move |p| {
                    let id = p.id;
                    let is_selected = move || selected.get().contains(&id);
                    view! {
                        <button
                            type="button"
                            class=move || if is_selected() { "share-btn active" } else { "share-btn" }
                            on:click=move |_| on_toggle(id)
                        >
                            {p.name}
                        </button>
                    }
                }
            />
        </div>
    }
}
