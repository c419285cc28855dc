//! Roster Screen Component
//!
//! First screen: build the list of people splitting the bill.

use leptos::prelude::*;

use crate::components::{DeleteConfirmButton, NewParticipantForm};
use crate::context::AppContext;
use crate::store::{store_remove_participant, use_app_store, AppStateStoreFields};

#[component]
pub fn RosterScreen() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");
    let store = use_app_store();

    let participants = move || store.bill().read().participants().to_vec();
    let roster_len = move || store.bill().read().participants().len();

    view! {
        <NewParticipantForm />

        <div class="card-grid">
            <For
                each=participants
                key=|p| p.id
                children=move |p| {
                    let id = p.id;
                    view! {
                        <div class="card participant-card">
                            <span class="participant-name">{p.name.clone()}</span>
                            <DeleteConfirmButton
                                button_class="delete-btn"
                                title=format!("Remove {}", p.name)
                                on_confirm=Callback::new(move |()| store_remove_participant(&store, id))
                            />
                        </div>
                    }
                }
            />
        </div>

        <Show when=move || ctx.can_advance(roster_len())>
            <button class="next-btn" on:click=move |_| ctx.advance(roster_len())>
                "Next: Add Items →"
            </button>
        </Show>
    }
}
