use color_eyre::eyre::Result;
use tokio::sync::mpsc;

use crate::{
    core::cmd::{Cmd, TuiCommand},
    infrastructure::ballot_service::BallotOperation,
};

/// Command executor that routes Elm commands to the ballot service and the TUI
#[derive(Clone, Default)]
pub struct CmdExecutor {
    ballot_sender: Option<mpsc::UnboundedSender<BallotOperation>>,
    tui_sender: Option<mpsc::UnboundedSender<TuiCommand>>,
}

impl CmdExecutor {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a new command executor wired to a BallotService
    pub fn new_with_ballot(ballot_sender: mpsc::UnboundedSender<BallotOperation>) -> Self {
        Self {
            ballot_sender: Some(ballot_sender),
            tui_sender: None,
        }
    }

    pub fn set_ballot_sender(&mut self, ballot_sender: mpsc::UnboundedSender<BallotOperation>) {
        self.ballot_sender = Some(ballot_sender);
    }

    /// Inject TUI command sender for executing TuiCommand asynchronously.
    pub fn set_tui_sender(&mut self, sender: mpsc::UnboundedSender<TuiCommand>) {
        self.tui_sender = Some(sender);
    }

    /// Execute a single command
    pub fn execute_command(&self, cmd: &Cmd) -> Result<()> {
        match cmd {
            Cmd::LoadBallot => self.send_ballot(BallotOperation::Load)?,

            Cmd::SubmitVote { index } => {
                log::info!("CmdExecutor: submitting vote for #{index}");
                self.send_ballot(BallotOperation::Vote { index: *index })?;
            }

            Cmd::Tui(tui_cmd) => match &self.tui_sender {
                Some(tx) => tx.send(tui_cmd.clone())?,
                None => log::warn!("CmdExecutor: TUI sender not configured; dropping {tui_cmd:?}"),
            },

            Cmd::LogError { message } => {
                log::error!("Elm command error: {}", message);
            }

            Cmd::LogInfo { message } => {
                log::info!("Elm command info: {}", message);
            }
        }

        Ok(())
    }

    /// Execute multiple commands, continuing past failures
    pub fn execute_commands(&self, commands: &[Cmd]) -> Vec<String> {
        let mut execution_log = Vec::new();

        for cmd in commands {
            match self.execute_command(cmd) {
                Ok(()) => {
                    execution_log.push(format!("✓ Executed: {}", cmd.name()));
                }
                Err(e) => {
                    let error_msg = format!("✗ Failed to execute {}: {}", cmd.name(), e);
                    log::error!("{}", error_msg);
                    execution_log.push(error_msg);
                }
            }
        }

        execution_log
    }

    pub fn get_stats(&self) -> CmdExecutorStats {
        CmdExecutorStats {
            has_ballot_sender: self.ballot_sender.is_some(),
            is_ballot_sender_closed: self.ballot_sender.as_ref().map(|s| s.is_closed()),
            has_tui_sender: self.tui_sender.is_some(),
        }
    }

    fn send_ballot(&self, op: BallotOperation) -> Result<()> {
        match &self.ballot_sender {
            Some(sender) => sender.send(op)?,
            None => log::warn!("{op:?} ignored: BallotService not available"),
        }
        Ok(())
    }
}

/// Command executor statistics
#[derive(Debug, Clone)]
pub struct CmdExecutorStats {
    pub has_ballot_sender: bool,
    pub is_ballot_sender_closed: Option<bool>,
    pub has_tui_sender: bool,
}
