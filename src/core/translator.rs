use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::{
    core::{
        msg::{ballot::BallotMsg, system::SystemMsg, Msg},
        raw_msg::RawMsg,
        state::AppState,
    },
    infrastructure::keybindings::Action,
};

/// Translates raw external events into domain messages
/// This function is pure and contains no side effects
pub fn translate_raw_to_domain(raw: RawMsg, state: &AppState) -> Vec<Msg> {
    match raw {
        // System events - direct mapping
        RawMsg::Quit => vec![Msg::System(SystemMsg::Quit)],
        RawMsg::Resize(width, height) => vec![Msg::System(SystemMsg::Resize(width, height))],

        // User input - translate based on context and key bindings
        RawMsg::Key(key) => translate_key_event(key, state),

        // Contract results are already domain messages
        RawMsg::Ballot(msg) => vec![Msg::Ballot(msg)],

        RawMsg::Error(error) => vec![Msg::System(SystemMsg::ShowError(error))],

        // Ignore frequent system events in domain layer
        RawMsg::Tick | RawMsg::Render => vec![],
    }
}

/// Translates keyboard input to domain events based on current application state
fn translate_key_event(key: KeyEvent, state: &AppState) -> Vec<Msg> {
    if let KeyEvent {
        code: KeyCode::Char('c'),
        modifiers: KeyModifiers::CONTROL,
        ..
    } = key
    {
        return vec![Msg::System(SystemMsg::Quit)];
    }

    if state.system.has_notice() {
        translate_notice_mode_keys(key, state)
    } else {
        translate_normal_mode_keys(key, state)
    }
}

/// While a notice is shown only acknowledging it or quitting does anything
fn translate_notice_mode_keys(key: KeyEvent, state: &AppState) -> Vec<Msg> {
    match key.code {
        KeyCode::Enter | KeyCode::Esc => vec![Msg::System(SystemMsg::DismissNotice)],
        _ => match state.config.config.keybindings.get(&vec![key]) {
            Some(Action::DismissNotice) => vec![Msg::System(SystemMsg::DismissNotice)],
            Some(Action::Quit) => vec![Msg::System(SystemMsg::Quit)],
            _ => vec![],
        },
    }
}

/// Key bindings when browsing the candidate list
fn translate_normal_mode_keys(key: KeyEvent, state: &AppState) -> Vec<Msg> {
    match state.config.config.keybindings.get(&vec![key]) {
        Some(action) => translate_action_to_msg(action),
        None => vec![],
    }
}

fn translate_action_to_msg(action: &Action) -> Vec<Msg> {
    match action {
        Action::ScrollUp => vec![Msg::Ballot(BallotMsg::ScrollUp)],
        Action::ScrollDown => vec![Msg::Ballot(BallotMsg::ScrollDown)],
        Action::ScrollToTop => vec![Msg::Ballot(BallotMsg::ScrollToTop)],
        Action::ScrollToBottom => vec![Msg::Ballot(BallotMsg::ScrollToBottom)],
        Action::Vote => vec![Msg::Ballot(BallotMsg::VoteSelected)],
        Action::Reload => vec![Msg::Ballot(BallotMsg::Load)],
        Action::DismissNotice => vec![],
        Action::Quit => vec![Msg::System(SystemMsg::Quit)],
    }
}
