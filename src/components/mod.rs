//! UI Components
//!
//! Leptos components for the two screens.

mod delete_confirm_button;
mod items_screen;
mod log_panel;
mod new_item_form;
mod new_participant_form;
mod participant_card;
mod roster_screen;
mod share_picker;

pub use delete_confirm_button::DeleteConfirmButton;
pub use items_screen::ItemsScreen;
pub use log_panel::LogPanel;
pub use new_item_form::NewItemForm;
pub use new_participant_form::NewParticipantForm;
pub use participant_card::ParticipantCard;
pub use roster_screen::RosterScreen;
pub use share_picker::SharePicker;
