//! Status bar component
//!
//! Two lines at the bottom of the screen: connection info, then the latest
//! status message.

use ratatui::{prelude::*, widgets::*};

use crate::{
    core::state::{ballot::Phase, AppState},
    domain::text::shorten_hex,
};

#[derive(Debug, Clone, Default)]
pub struct StatusBarComponent;

impl StatusBarComponent {
    pub fn new() -> Self {
        Self
    }

    pub fn view(&self, state: &AppState, frame: &mut Frame, area: Rect) {
        let layout = Layout::new(
            Direction::Vertical,
            [
                Constraint::Length(1), // Connection line
                Constraint::Length(1), // Status message line
            ],
        )
        .split(area);

        frame.render_widget(Clear, area);

        let connection = Span::styled(
            self.connection_line(state),
            Style::default().fg(Color::Gray).italic(),
        );
        frame.render_widget(
            Paragraph::new(connection).style(Style::default().bg(Color::Black)),
            layout[0],
        );

        frame.render_widget(Paragraph::new(self.message_line(state)), layout[1]);
    }

    /// Account and phase, e.g. `0xf39f:2266 | Connected`
    pub fn connection_line(&self, state: &AppState) -> String {
        let account = state
            .ballot
            .account
            .map(|account| shorten_hex(account.to_string()))
            .unwrap_or_else(|| "no account".to_string());

        match state.ballot.phase {
            Phase::Voting => format!(
                "{account} | {} ({} pending)",
                Phase::Voting,
                state.ballot.pending_votes
            ),
            phase => format!("{account} | {phase}"),
        }
    }

    pub fn message_line(&self, state: &AppState) -> String {
        match state.system.status_message() {
            Some(message) => message.clone(),
            None if state.system.is_loading => "Loading...".to_string(),
            None => String::new(),
        }
    }
}
