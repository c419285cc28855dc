//! Screen Flow
//!
//! Two screens and two transitions. Transitions are pure; the caller owns
//! the current screen.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Screen {
    /// Adding and removing participants
    #[default]
    Roster,
    /// Adding items and reading totals
    Items,
}

impl Screen {
    /// Whether "next" is offered from this screen
    pub fn can_advance(self, roster_len: usize) -> bool {
        self == Screen::Roster && roster_len > 0
    }

    /// `Roster -> Items`, only with at least one participant
    pub fn advance(self, roster_len: usize) -> Option<Screen> {
        self.can_advance(roster_len).then_some(Screen::Items)
    }

    /// `Items -> Roster`, unconditionally
    pub fn back(self) -> Screen {
        Screen::Roster
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_at_roster() {
        assert_eq!(Screen::default(), Screen::Roster);
    }

    #[test]
    fn test_advance_guarded_by_roster() {
        assert_eq!(Screen::Roster.advance(0), None);
        assert!(!Screen::Roster.can_advance(0));
        assert_eq!(Screen::Roster.advance(1), Some(Screen::Items));
    }

    #[test]
    fn test_no_advance_from_items() {
        assert_eq!(Screen::Items.advance(3), None);
    }

    #[test]
    fn test_back() {
        assert_eq!(Screen::Items.back(), Screen::Roster);
        assert_eq!(Screen::Roster.back(), Screen::Roster);
    }
}
