//! Candidate list component
//!
//! Displays every candidate with its tally and highlights the selection.

use ratatui::{prelude::*, widgets::*};

use crate::core::state::{ballot::Phase, AppState};

pub const TITLE: &str = "Voting System";

/// Stateless renderer for the candidate list
#[derive(Debug, Clone, Default)]
pub struct CandidateListComponent;

impl CandidateListComponent {
    pub fn new() -> Self {
        Self
    }

    pub fn view(&self, state: &AppState, frame: &mut Frame, area: Rect) {
        let block = Block::default()
            .borders(Borders::ALL)
            .title(Line::from(TITLE).bold())
            .title_bottom(Line::from(Self::hint(state)).dark_gray())
            .padding(Padding::horizontal(1));

        if state.ballot.candidates.is_empty() {
            let text = if state.system.is_loading {
                "Loading candidates..."
            } else {
                "No candidates"
            };
            let empty = Paragraph::new(text)
                .style(Style::default().fg(Color::DarkGray))
                .alignment(Alignment::Center)
                .block(block);
            frame.render_widget(empty, area);
            return;
        }

        let items: Vec<ListItem> = state
            .ballot
            .candidates
            .iter()
            .map(|candidate| ListItem::new(candidate.label()))
            .collect();

        let list = List::new(items)
            .block(block)
            .style(Style::default().fg(Color::White))
            .highlight_style(Style::default().add_modifier(Modifier::REVERSED))
            .highlight_symbol("> ");

        let mut list_state = ListState::default();
        list_state.select(state.ballot.selected_index);
        frame.render_stateful_widget(list, area, &mut list_state);
    }

    /// Key hint shown under the list
    pub fn hint(state: &AppState) -> &'static str {
        match state.ballot.phase {
            Phase::Disconnected => " [r] Reload  [q] Quit ",
            Phase::Connected | Phase::Voting => " [j/k] Select  [v] Vote  [r] Reload  [q] Quit ",
        }
    }
}

#[cfg(test)]
mod tests {
    use alloy::primitives::U256;
    use ratatui::{backend::TestBackend, Terminal};

    use super::*;
    use crate::domain::candidate::Candidate;

    fn render(state: &AppState) -> Vec<String> {
        let mut terminal = Terminal::new(TestBackend::new(60, 8)).unwrap();
        terminal
            .draw(|f| CandidateListComponent::new().view(state, f, f.area()))
            .unwrap();
        let buffer = terminal.backend().buffer();
        (0..buffer.area.height)
            .map(|y| {
                (0..buffer.area.width)
                    .map(|x| buffer[(x, y)].symbol())
                    .collect::<String>()
            })
            .collect()
    }

    #[test]
    fn test_renders_labels_in_order() {
        let mut state = AppState::default();
        state.ballot.phase = Phase::Connected;
        state.ballot.candidates = vec![
            Candidate::new("Alice", U256::from(3u64)),
            Candidate::new("Bob", U256::ZERO),
        ];
        state.ballot.selected_index = Some(1);

        let lines = render(&state);

        assert!(lines[0].contains(TITLE));
        assert!(lines[1].contains("Alice - Votes: 3"));
        assert!(lines[2].contains("> Bob - Votes: 0"));
    }

    #[test]
    fn test_empty_list_after_load() {
        let mut state = AppState::default();
        state.system.is_loading = false;

        let lines = render(&state);

        assert!(lines.iter().any(|l| l.contains("No candidates")));
    }

    #[test]
    fn test_loading_placeholder() {
        let lines = render(&AppState::default());
        assert!(lines.iter().any(|l| l.contains("Loading candidates...")));
    }
}
