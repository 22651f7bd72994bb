//! Component collection
//!
//! Components are stateless renderers that receive state as parameters.

use ratatui::prelude::*;

use crate::core::state::AppState;

pub mod candidate_list;
pub mod notice;
pub mod status_bar;

pub use candidate_list::CandidateListComponent;
pub use notice::NoticeComponent;
pub use status_bar::StatusBarComponent;

/// Collection of all components
#[derive(Debug, Clone, Default)]
pub struct Components {
    pub candidate_list: CandidateListComponent,
    pub status_bar: StatusBarComponent,
    pub notice: NoticeComponent,
}

impl Components {
    pub fn new() -> Self {
        Self::default()
    }

    /// Main rendering entry point: list, status bar, then any notice on top.
    pub fn render(&self, frame: &mut Frame, state: &AppState) {
        let area = frame.area();

        let layout = Layout::default()
            .direction(Direction::Vertical)
            .constraints(vec![
                Constraint::Min(0),    // Candidate list
                Constraint::Length(2), // Status bar (2 rows)
            ])
            .split(area);

        self.candidate_list.view(state, frame, layout[0]);
        self.status_bar.view(state, frame, layout[1]);
        self.notice.view(state, frame, area);
    }
}
