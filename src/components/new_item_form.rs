//! New Item Form Component
//!
//! Item name, price and who shares it. "Add Item" splits among the picked
//! participants; "Split with everyone" ignores the picks.

use std::collections::BTreeSet;

use leptos::html::Input;
use leptos::prelude::*;
use split_ledger::ParticipantId;

use crate::components::SharePicker;
use crate::store::{store_add_item, store_add_item_for_all, use_app_store};

#[component]
pub fn NewItemForm() -> impl IntoView {
    let store = use_app_store();

    let (name, set_name) = signal(String::new());
    let (price, set_price) = signal(String::new());
    let (selected, set_selected) = signal(BTreeSet::<ParticipantId>::new());
    let name_ref = NodeRef::<Input>::new();

    let focus_name = move || {
        if let Some(input) = name_ref.get_untracked() {
            let _ = input.focus();
        }
    };

    Effect::new(move |_| {
        if let Some(input) = name_ref.get() {
            let _ = input.focus();
        }
    });

    let reset = move || {
        set_name.set(String::new());
        set_price.set(String::new());
        set_selected.set(BTreeSet::new());
        focus_name();
    };

    let toggle = move |id: ParticipantId| {
        set_selected.update(|picked| {
            if !picked.remove(&id) {
                picked.insert(id);
            }
        });
    };

    let add_item = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let added = selected.with_untracked(|picked| {
            store_add_item(&store, &name.get_untracked(), &price.get_untracked(), picked)
        });
        if added {
            reset();
        }
    };

    let add_for_all = move |_: web_sys::MouseEvent| {
        if store_add_item_for_all(&store, &name.get_untracked(), &price.get_untracked()) {
            reset();
        }
    };

    view! {
        <form class="card new-item-form" on:submit=add_item>
            <h2 class="card-title">"🛒 Add New Item"</h2>

            <label for="item-name">"Item Name"</label>
            <input
                id="item-name"
                type="text"
                placeholder="Enter item name"
                node_ref=name_ref
                prop:value=move || name.get()
                on:input=move |ev| set_name.set(event_target_value(&ev))
            />

            <label for="item-price">"Price"</label>
            <input
                id="item-price"
                type="number"
                min="0"
                step="0.01"
                placeholder="Enter price"
                prop:value=move || price.get()
                on:input=move |ev| set_price.set(event_target_value(&ev))
            />

            <label>"Split with:"</label>
            <SharePicker selected=selected on_toggle=toggle />

            <div class="form-row">
                <button type="submit" class="primary-btn wide">"+ Add Item"</button>
                <button type="button" class="secondary-btn" on:click=add_for_all>
                    "Split with everyone"
                </button>
            </div>
        </form>
    }
}
