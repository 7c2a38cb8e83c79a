//! Navigation graph between the sign-up and notes editor screens.
//!
//! # Responsibility
//! - Name every destination and its route string.
//! - Provide the back-navigation contract consumed by the editor.
//!
//! # Invariants
//! - `Screen::parse(screen.route()) == Some(screen)` for every destination.
//! - A back stack never pops its start destination.

use log::debug;

const SIGN_UP_ROUTE: &str = "sign_up";
const NOTES_ROUTE_PREFIX: &str = "notes/";

/// Navigation destinations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    SignUp,
    /// Notes editor; non-positive ids open a new note.
    Notes { id: i64 },
}

impl Screen {
    /// Renders the route string for this destination.
    pub fn route(&self) -> String {
        match self {
            Self::SignUp => SIGN_UP_ROUTE.to_string(),
            Self::Notes { id } => format!("{NOTES_ROUTE_PREFIX}{id}"),
        }
    }

    /// Parses a route string produced by [`Screen::route`].
    pub fn parse(route: &str) -> Option<Self> {
        if route == SIGN_UP_ROUTE {
            return Some(Self::SignUp);
        }
        let id = route.strip_prefix(NOTES_ROUTE_PREFIX)?.parse().ok()?;
        Some(Self::Notes { id })
    }
}

/// Back-navigation contract.
pub trait Navigator {
    /// Leaves the current screen. Returns `false` when there is nowhere to go.
    fn navigate_back(&mut self) -> bool;
}

/// In-memory back stack rooted at a start destination.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BackStack {
    entries: Vec<Screen>,
}

impl BackStack {
    pub fn new(start: Screen) -> Self {
        Self {
            entries: vec![start],
        }
    }

    pub fn navigate(&mut self, screen: Screen) {
        debug!(
            "event=navigate module=navigation status=ok route={}",
            screen.route()
        );
        self.entries.push(screen);
    }

    pub fn current(&self) -> Screen {
        // `entries` is never empty: `new` seeds it and `navigate_back` keeps the root.
        self.entries[self.entries.len() - 1]
    }
}

impl Navigator for BackStack {
    fn navigate_back(&mut self) -> bool {
        if self.entries.len() <= 1 {
            debug!("event=navigate_back module=navigation status=at_root");
            return false;
        }
        self.entries.pop();
        debug!(
            "event=navigate_back module=navigation status=ok route={}",
            self.current().route()
        );
        true
    }
}

#[cfg(test)]
mod tests {
    use super::{BackStack, Navigator, Screen};

    #[test]
    fn routes_round_trip() {
        for screen in [Screen::SignUp, Screen::Notes { id: 5 }, Screen::Notes { id: -1 }] {
            assert_eq!(Screen::parse(&screen.route()), Some(screen));
        }
        assert_eq!(Screen::Notes { id: 12 }.route(), "notes/12");
    }

    #[test]
    fn parse_rejects_unknown_routes() {
        assert_eq!(Screen::parse("settings"), None);
        assert_eq!(Screen::parse("notes/abc"), None);
        assert_eq!(Screen::parse("notes/"), None);
    }

    #[test]
    fn back_stack_keeps_start_destination() {
        let mut stack = BackStack::new(Screen::SignUp);
        stack.navigate(Screen::Notes { id: 3 });
        assert_eq!(stack.current(), Screen::Notes { id: 3 });

        assert!(stack.navigate_back());
        assert_eq!(stack.current(), Screen::SignUp);
        assert!(!stack.navigate_back());
        assert_eq!(stack.current(), Screen::SignUp);
    }
}
