//! Session state machine

use super::events::Event;

/// Picklist session states
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum State {
    /// Accepting movement and actions
    Browsing,
    /// Primary action pressed; selection frozen
    Confirmed,
    /// Secondary action pressed; no selection
    Cancelled,
}

/// Final result of a picklist session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Selection {
    /// Index of the chosen entry
    Confirmed(usize),
    Cancelled,
}

impl Selection {
    /// Integer form: the index, or -1 when cancelled
    pub fn as_raw(self) -> i32 {
        match self {
            Selection::Confirmed(index) => index as i32,
            Selection::Cancelled => -1,
        }
    }

    pub fn index(self) -> Option<usize> {
        match self {
            Selection::Confirmed(index) => Some(index),
            Selection::Cancelled => None,
        }
    }
}

impl From<Selection> for i32 {
    fn from(selection: Selection) -> i32 {
        selection.as_raw()
    }
}

impl State {
    /// Check if the session is over
    pub fn is_terminal(&self) -> bool {
        !matches!(self, State::Browsing)
    }

    /// Process an event and return the next state
    pub fn transition(self, event: Event) -> Self {
        use Event::*;
        use State::*;

        match (self, event) {
            (Browsing, Confirm) => Confirmed,
            (Browsing, Cancel) => Cancelled,

            // Terminal states ignore everything
            _ => self,
        }
    }
}
