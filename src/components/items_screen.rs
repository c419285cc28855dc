//! Items Screen Component
//!
//! Second screen: add items and watch everyone's total update.

use leptos::prelude::*;

use crate::components::{NewItemForm, ParticipantCard};
use crate::context::AppContext;
use crate::store::{use_app_store, AppStateStoreFields};
use crate::summary::card_summaries;

#[component]
pub fn ItemsScreen() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");
    let store = use_app_store();

    let cards = move || card_summaries(&store.bill().read());
    let bill_total = move || {
        let bill = store.bill().read();
        bill.format_money(bill.bill_total())
    };

    view! {
        <NewItemForm />

        <div class="card-grid">
            {move || cards().into_iter().map(|card| view! { <ParticipantCard card=card /> }).collect_view()}
        </div>

        <p class="bill-total">"Bill total: " {bill_total}</p>

        <button class="next-btn" on:click=move |_| ctx.back()>
            "← Back to People"
        </button>
    }
}
