//! Split Bill App
//!
//! Root component: owns the store and the screen signal and switches
//! between the roster and items screens.

use leptos::prelude::*;
use reactive_stores::Store;
use split_ledger::Screen;

use crate::components::{ItemsScreen, LogPanel, RosterScreen};
use crate::config;
use crate::context::AppContext;
use crate::store::AppState;

#[component]
pub fn App() -> impl IntoView {
    let store = Store::new(AppState::new(config::load_config()));
    let (screen, set_screen) = signal(Screen::default());

    // Provide state to both screens
    provide_context(store);
    provide_context(AppContext::new((screen, set_screen)));

    view! {
        <div class="app-layout">
            <main class="main-content">
                <h1>"Venmo Request Manager"</h1>
                {move || match screen.get() {
                    Screen::Roster => view! { <RosterScreen /> }.into_any(),
                    Screen::Items => view! { <ItemsScreen /> }.into_any(),
                }}
                <LogPanel />
            </main>
        </div>
    }
}
