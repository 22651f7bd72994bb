use serde::{Deserialize, Serialize};

/// UI (TUI) specific sub-commands executed by the host/runtime
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum TuiCommand {
    Resize { width: u16, height: u16 },
}

/// Elm-like command definitions
/// Represents side effects (contract calls, terminal control, logging).
/// Cmd captures what the application wants; `BallotOperation` in the
/// infrastructure layer captures how the service carries it out.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Cmd {
    // Contract-related commands
    LoadBallot,
    SubmitVote { index: usize },

    // UI-related commands
    Tui(TuiCommand),

    // Logging related
    LogError { message: String },
    LogInfo { message: String },
}

impl Cmd {
    /// Human-readable name for execution logs
    pub fn name(&self) -> String {
        match self {
            Cmd::LoadBallot => "LoadBallot".to_string(),
            Cmd::SubmitVote { index } => format!("SubmitVote({index})"),
            Cmd::Tui(TuiCommand::Resize { .. }) => "Tui(Resize)".to_string(),
            Cmd::LogError { .. } => "LogError".to_string(),
            Cmd::LogInfo { .. } => "LogInfo".to_string(),
        }
    }
}
