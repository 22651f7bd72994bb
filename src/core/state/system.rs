use std::collections::VecDeque;

use crate::{
    core::{
        cmd::{Cmd, TuiCommand},
        msg::system::SystemMsg,
    },
    domain::notice::Notice,
};

/// System-related state
#[derive(Debug, Clone)]
pub struct SystemState {
    pub should_quit: bool,
    pub status_message: Option<String>,
    pub is_loading: bool,
    /// Blocking notices in arrival order; the front one is on screen.
    pub notices: VecDeque<Notice>,
}

impl Default for SystemState {
    fn default() -> Self {
        Self {
            should_quit: false,
            status_message: None,
            is_loading: true,
            notices: VecDeque::new(),
        }
    }
}

impl SystemState {
    pub fn status_message(&self) -> Option<&String> {
        self.status_message.as_ref()
    }

    /// The notice currently blocking the view, if any
    pub fn notice(&self) -> Option<&Notice> {
        self.notices.front()
    }

    pub fn has_notice(&self) -> bool {
        !self.notices.is_empty()
    }

    /// System-specific update function
    /// Returns: Generated commands
    pub fn update(&mut self, msg: SystemMsg) -> Vec<Cmd> {
        match msg {
            SystemMsg::Quit => {
                self.should_quit = true;
                vec![]
            }

            SystemMsg::Resize(width, height) => {
                vec![Cmd::Tui(TuiCommand::Resize { width, height })]
            }

            SystemMsg::UpdateStatusMessage(message) => {
                self.status_message = Some(message);
                vec![]
            }

            SystemMsg::ClearStatusMessage => {
                self.status_message = None;
                vec![]
            }

            SystemMsg::SetLoading(loading) => {
                self.is_loading = loading;
                vec![]
            }

            SystemMsg::ShowError(error) => {
                self.status_message = Some(format!("Error: {error}"));
                vec![Cmd::LogError { message: error }]
            }

            SystemMsg::ShowNotice(notice) => {
                let cmd = if notice.is_error() {
                    Cmd::LogError {
                        message: notice.message.clone(),
                    }
                } else {
                    Cmd::LogInfo {
                        message: notice.message.clone(),
                    }
                };
                self.notices.push_back(notice);
                vec![cmd]
            }

            SystemMsg::DismissNotice => {
                self.notices.pop_front();
                vec![]
            }
        }
    }
}
