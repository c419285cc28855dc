//! Application Context
//!
//! Current screen, provided via Leptos Context API.

use leptos::prelude::*;
use split_ledger::Screen;

#[derive(Clone, Copy)]
pub struct AppContext {
    /// Screen being shown - read
    pub screen: ReadSignal<Screen>,
    /// Screen being shown - write
    set_screen: WriteSignal<Screen>,
}

impl AppContext {
    pub fn new(screen: (ReadSignal<Screen>, WriteSignal<Screen>)) -> Self {
        Self {
            screen: screen.0,
            set_screen: screen.1,
        }
    }

    /// Whether "next" should be offered for a roster of `roster_len`
    pub fn can_advance(&self, roster_len: usize) -> bool {
        self.screen.get().can_advance(roster_len)
    }

    /// Move to the items screen if the guard allows it
    pub fn advance(&self, roster_len: usize) {
        if let Some(next) = self.screen.get_untracked().advance(roster_len) {
            log::debug!("[APP] Screen -> {:?}", next);
            self.set_screen.set(next);
        }
    }

    /// Return to the roster screen
    pub fn back(&self) {
        self.set_screen.update(|screen| *screen = screen.back());
    }
}
