//! Blocking notice popup

use ratatui::{prelude::*, widgets::*};

use crate::{core::state::AppState, domain::notice::Notice};

const MAX_WIDTH: u16 = 60;

#[derive(Debug, Clone, Default)]
pub struct NoticeComponent;

impl NoticeComponent {
    pub fn new() -> Self {
        Self
    }

    /// Draws the front notice centered over `area`; nothing when none is queued.
    pub fn view(&self, state: &AppState, frame: &mut Frame, area: Rect) {
        let Some(notice) = state.system.notice() else {
            return;
        };

        let queued = state.system.notices.len();
        let popup = Self::popup_area(notice, area);
        let color = if notice.is_error() {
            Color::Red
        } else {
            Color::Green
        };

        let mut footer = String::from(" [Enter] OK ");
        if queued > 1 {
            footer = format!(" [Enter] OK (+{} more) ", queued - 1);
        }

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(color))
            .title(Line::from(format!(" {} ", notice.title())).bold())
            .title_bottom(Line::from(footer).right_aligned())
            .padding(Padding::horizontal(1));

        let body = Self::body(notice).block(block);

        frame.render_widget(Clear, popup);
        frame.render_widget(body, popup);
    }

    fn body(notice: &Notice) -> Paragraph<'_> {
        Paragraph::new(notice.message.as_str()).wrap(Wrap { trim: true })
    }

    /// Centered rectangle sized to the word-wrapped message, clamped to `area`.
    pub fn popup_area(notice: &Notice, area: Rect) -> Rect {
        let width = MAX_WIDTH.min(area.width);
        // Borders plus horizontal padding
        let inner_width = width.saturating_sub(4).max(1);
        let lines = Self::body(notice).line_count(inner_width).max(1);
        let lines = u16::try_from(lines).unwrap_or(u16::MAX);
        let height = lines.saturating_add(2).min(area.height);

        Rect {
            x: area.x + (area.width - width) / 2,
            y: area.y + (area.height - height) / 2,
            width,
            height,
        }
    }
}
