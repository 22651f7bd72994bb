use crossterm::event::KeyEvent;

use crate::core::msg::ballot::BallotMsg;

/// Raw external events before translation into domain messages.
///
/// Terminal input and contract results both arrive here; the translator
/// decides what they mean given the current state.
#[derive(Debug, Clone, PartialEq)]
pub enum RawMsg {
    // Terminal
    Key(KeyEvent),
    Resize(u16, u16),
    Tick,
    Render,
    Quit,

    // Background services
    Ballot(BallotMsg),
    Error(String),
}

impl RawMsg {
    /// Helper to exclude frequent messages during debugging
    pub fn is_frequent(&self) -> bool {
        matches!(self, RawMsg::Tick | RawMsg::Render)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_raw_msg_frequent_detection() {
        assert!(RawMsg::Tick.is_frequent());
        assert!(RawMsg::Render.is_frequent());
        assert!(!RawMsg::Quit.is_frequent());
        assert!(!RawMsg::Ballot(BallotMsg::Load).is_frequent());
    }
}
