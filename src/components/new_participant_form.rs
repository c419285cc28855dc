//! New Participant Form Component
//!
//! Name input plus "Add". The input takes focus when the form mounts.

use leptos::html::Input;
use leptos::prelude::*;

use crate::store::{store_add_participant, use_app_store};

#[component]
pub fn NewParticipantForm() -> impl IntoView {
    let store = use_app_store();
    let (name, set_name) = signal(String::new());
    let input_ref = NodeRef::<Input>::new();

    Effect::new(move |_| {
        if let Some(input) = input_ref.get() {
            let _ = input.focus();
        }
    });

    let add_participant = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        if store_add_participant(&store, &name.get_untracked()) {
            set_name.set(String::new());
        }
    };

    view! {
        <form class="card new-participant-form" on:submit=add_participant>
            <h2 class="card-title">"👥 Add New Person"</h2>
            <div class="form-row">
                <input
                    type="text"
                    placeholder="Enter name"
                    node_ref=input_ref
                    prop:value=move || name.get()
                    on:input=move |ev| set_name.set(event_target_value(&ev))
                />
                <button type="submit" class="primary-btn">"+ Add"</button>
            </div>
        </form>
    }
}
