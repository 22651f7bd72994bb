use alloy::primitives::Address;
use strum::Display;

use crate::{
    core::{
        cmd::Cmd,
        msg::{ballot::BallotMsg, system::SystemMsg},
    },
    domain::{candidate::Candidate, notice::Notice, text::shorten_hex, wallet::WalletError},
};

/// Connection lifecycle as seen by the view
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Display)]
pub enum Phase {
    #[default]
    Disconnected,
    Connected,
    /// At least one vote submission is outstanding
    Voting,
}

/// Candidate list and voting state
#[derive(Debug, Clone, Default)]
pub struct BallotState {
    pub phase: Phase,
    pub account: Option<Address>,
    pub candidates: Vec<Candidate>,
    pub selected_index: Option<usize>,
    pub pending_votes: usize,
}

impl BallotState {
    pub fn is_connected(&self) -> bool {
        self.phase != Phase::Disconnected
    }

    /// Ballot-specific update function
    /// Returns: generated commands and follow-up system messages
    pub fn update(&mut self, msg: BallotMsg) -> (Vec<Cmd>, Vec<SystemMsg>) {
        match msg {
            BallotMsg::Load => (
                vec![Cmd::LoadBallot],
                vec![
                    SystemMsg::SetLoading(true),
                    SystemMsg::UpdateStatusMessage("Connecting to wallet...".to_string()),
                ],
            ),

            BallotMsg::WalletMissing => {
                self.phase = Phase::Disconnected;
                self.account = None;
                (
                    vec![],
                    vec![
                        SystemMsg::SetLoading(false),
                        SystemMsg::ClearStatusMessage,
                        SystemMsg::ShowNotice(Notice::error(WalletError::Missing.to_string())),
                    ],
                )
            }

            BallotMsg::Connected { account } => {
                self.account = Some(account);
                self.phase = self.settled_phase();
                let status = format!("Connected as {}", shorten_hex(account.to_string()));
                (vec![], vec![SystemMsg::UpdateStatusMessage(status)])
            }

            BallotMsg::CandidatesLoaded(candidates) => {
                let count = candidates.len();
                self.candidates = candidates;
                self.clamp_selection();
                (
                    vec![],
                    vec![
                        SystemMsg::SetLoading(false),
                        SystemMsg::UpdateStatusMessage(format!("Loaded {count} candidates")),
                    ],
                )
            }

            BallotMsg::LoadFailed(error) => (
                vec![],
                vec![
                    SystemMsg::SetLoading(false),
                    SystemMsg::ClearStatusMessage,
                    SystemMsg::ShowNotice(Notice::error(format!(
                        "Failed to load candidates: {error}"
                    ))),
                ],
            ),

            BallotMsg::ScrollUp => {
                self.selected_index = match self.selected_index {
                    Some(current) => Some(current.saturating_sub(1)),
                    None => self.first_index(),
                };
                (vec![], vec![])
            }

            BallotMsg::ScrollDown => {
                let max_index = self.candidates.len().saturating_sub(1);
                self.selected_index = match self.selected_index {
                    Some(current) => Some((current + 1).min(max_index)),
                    None => self.first_index(),
                };
                (vec![], vec![])
            }

            BallotMsg::ScrollToTop => {
                self.selected_index = self.first_index();
                (vec![], vec![])
            }

            BallotMsg::ScrollToBottom => {
                self.selected_index = self.candidates.len().checked_sub(1);
                (vec![], vec![])
            }

            BallotMsg::VoteSelected => match self.selected_index {
                Some(index) => self.update(BallotMsg::Vote(index)),
                None => (
                    vec![],
                    vec![SystemMsg::UpdateStatusMessage(
                        "No candidate selected".to_string(),
                    )],
                ),
            },

            BallotMsg::Vote(index) => self.start_vote(index),

            BallotMsg::VoteSubmitted { index, tx_hash } => {
                self.finish_vote();
                let name = self.candidate_name(index);
                (
                    vec![],
                    vec![
                        SystemMsg::UpdateStatusMessage(format!(
                            "[Voted] {name} (tx {})",
                            shorten_hex(tx_hash.to_string())
                        )),
                        SystemMsg::ShowNotice(Notice::info("Voted successfully!")),
                    ],
                )
            }

            BallotMsg::VoteFailed { index, error } => {
                self.finish_vote();
                let name = self.candidate_name(index);
                (
                    vec![],
                    vec![SystemMsg::ShowNotice(Notice::error(format!(
                        "Vote for {name} failed: {error}"
                    )))],
                )
            }
        }
    }

    fn start_vote(&mut self, index: usize) -> (Vec<Cmd>, Vec<SystemMsg>) {
        if !self.is_connected() {
            return (
                vec![],
                vec![SystemMsg::ShowNotice(Notice::error(
                    WalletError::NotConnected.to_string(),
                ))],
            );
        }

        let Some(candidate) = self.candidates.get(index) else {
            return (
                vec![],
                vec![SystemMsg::ShowNotice(Notice::error(format!(
                    "No candidate at position {index}"
                )))],
            );
        };

        // Repeated requests are not coalesced: each one becomes a transaction.
        let status = format!("Submitting vote for {}...", candidate.name);
        self.pending_votes += 1;
        self.phase = Phase::Voting;
        (
            vec![Cmd::SubmitVote { index }],
            vec![SystemMsg::UpdateStatusMessage(status)],
        )
    }

    fn finish_vote(&mut self) {
        self.pending_votes = self.pending_votes.saturating_sub(1);
        if self.is_connected() {
            self.phase = self.settled_phase();
        }
    }

    fn settled_phase(&self) -> Phase {
        if self.pending_votes > 0 {
            Phase::Voting
        } else {
            Phase::Connected
        }
    }

    fn candidate_name(&self, index: usize) -> String {
        self.candidates
            .get(index)
            .map(|c| c.name.clone())
            .unwrap_or_else(|| format!("#{index}"))
    }

    fn first_index(&self) -> Option<usize> {
        if self.candidates.is_empty() {
            None
        } else {
            Some(0)
        }
    }

    fn clamp_selection(&mut self) {
        self.selected_index = match (self.selected_index, self.candidates.len()) {
            (_, 0) => None,
            (None, _) => Some(0),
            (Some(current), len) => Some(current.min(len - 1)),
        };
    }
}

#[cfg(test)]
mod tests {
    use alloy::primitives::{TxHash, U256};
    use pretty_assertions::assert_eq;

    use super::*;

    fn candidates(names: &[&str]) -> Vec<Candidate> {
        names
            .iter()
            .enumerate()
            .map(|(i, name)| Candidate::new(*name, U256::from(i as u64)))
            .collect()
    }

    fn connected_state(names: &[&str]) -> BallotState {
        let mut ballot = BallotState::default();
        ballot.update(BallotMsg::Connected {
            account: Address::repeat_byte(0x11),
        });
        ballot.update(BallotMsg::CandidatesLoaded(candidates(names)));
        ballot
    }

    #[test]
    fn test_load_requests_command() {
        let mut ballot = BallotState::default();
        let (cmds, sys) = ballot.update(BallotMsg::Load);

        assert_eq!(cmds, vec![Cmd::LoadBallot]);
        assert!(sys.contains(&SystemMsg::SetLoading(true)));
    }

    #[test]
    fn test_connected_then_loaded() {
        let ballot = connected_state(&["Alice", "Bob"]);

        assert_eq!(ballot.phase, Phase::Connected);
        assert_eq!(ballot.account, Some(Address::repeat_byte(0x11)));
        assert_eq!(ballot.candidates.len(), 2);
        assert_eq!(ballot.selected_index, Some(0));
    }

    #[test]
    fn test_wallet_missing_emits_single_notice() {
        let mut ballot = BallotState::default();
        let (cmds, sys) = ballot.update(BallotMsg::WalletMissing);

        assert!(cmds.is_empty());
        let notices: Vec<_> = sys
            .iter()
            .filter(|m| matches!(m, SystemMsg::ShowNotice(_)))
            .collect();
        assert_eq!(notices.len(), 1);
        assert_eq!(ballot.phase, Phase::Disconnected);
    }

    #[test]
    fn test_load_failed_keeps_previous_candidates() {
        let mut ballot = connected_state(&["Alice", "Bob"]);

        let (_, sys) = ballot.update(BallotMsg::LoadFailed(WalletError::Call {
            call: "getCandidate",
            reason: "execution reverted".to_string(),
        }));

        assert_eq!(ballot.candidates, candidates(&["Alice", "Bob"]));
        assert!(sys.iter().any(|m| matches!(
            m,
            SystemMsg::ShowNotice(n) if n.message.contains("execution reverted")
        )));
    }

    #[test]
    fn test_empty_load_clears_selection() {
        let mut ballot = connected_state(&["Alice"]);
        ballot.update(BallotMsg::CandidatesLoaded(vec![]));

        assert!(ballot.candidates.is_empty());
        assert_eq!(ballot.selected_index, None);
    }

    #[test]
    fn test_reload_clamps_selection() {
        let mut ballot = connected_state(&["A", "B", "C"]);
        ballot.update(BallotMsg::ScrollToBottom);
        assert_eq!(ballot.selected_index, Some(2));

        ballot.update(BallotMsg::CandidatesLoaded(candidates(&["A"])));
        assert_eq!(ballot.selected_index, Some(0));
    }

    #[test]
    fn test_scrolling_bounds() {
        let mut ballot = connected_state(&["A", "B", "C"]);

        ballot.update(BallotMsg::ScrollUp);
        assert_eq!(ballot.selected_index, Some(0));

        ballot.update(BallotMsg::ScrollDown);
        ballot.update(BallotMsg::ScrollDown);
        ballot.update(BallotMsg::ScrollDown);
        assert_eq!(ballot.selected_index, Some(2));

        ballot.update(BallotMsg::ScrollToTop);
        assert_eq!(ballot.selected_index, Some(0));
    }

    #[test]
    fn test_scrolling_empty_list() {
        let mut ballot = BallotState::default();
        ballot.update(BallotMsg::ScrollDown);
        assert_eq!(ballot.selected_index, None);
        ballot.update(BallotMsg::ScrollToBottom);
        assert_eq!(ballot.selected_index, None);
    }

    #[test]
    fn test_vote_generates_single_command() {
        let mut ballot = connected_state(&["Alice", "Bob"]);

        let (cmds, _) = ballot.update(BallotMsg::Vote(1));

        assert_eq!(cmds, vec![Cmd::SubmitVote { index: 1 }]);
        assert_eq!(ballot.phase, Phase::Voting);
        assert_eq!(ballot.pending_votes, 1);
    }

    #[test]
    fn test_vote_selected_uses_selection() {
        let mut ballot = connected_state(&["Alice", "Bob"]);
        ballot.update(BallotMsg::ScrollDown);

        let (cmds, _) = ballot.update(BallotMsg::VoteSelected);

        assert_eq!(cmds, vec![Cmd::SubmitVote { index: 1 }]);
    }

    #[test]
    fn test_vote_out_of_range_sends_nothing() {
        let mut ballot = connected_state(&["Alice"]);

        let (cmds, sys) = ballot.update(BallotMsg::Vote(5));

        assert!(cmds.is_empty());
        assert_eq!(sys.len(), 1);
        assert_eq!(ballot.phase, Phase::Connected);
    }

    #[test]
    fn test_vote_while_disconnected_sends_nothing() {
        let mut ballot = BallotState {
            candidates: candidates(&["Alice"]),
            ..Default::default()
        };

        let (cmds, sys) = ballot.update(BallotMsg::Vote(0));

        assert!(cmds.is_empty());
        assert_eq!(
            sys,
            vec![SystemMsg::ShowNotice(Notice::error(
                WalletError::NotConnected.to_string()
            ))]
        );
    }

    #[test]
    fn test_repeated_votes_are_not_coalesced() {
        let mut ballot = connected_state(&["Alice"]);

        let (first, _) = ballot.update(BallotMsg::Vote(0));
        let (second, _) = ballot.update(BallotMsg::Vote(0));

        assert_eq!(first, vec![Cmd::SubmitVote { index: 0 }]);
        assert_eq!(second, vec![Cmd::SubmitVote { index: 0 }]);
        assert_eq!(ballot.pending_votes, 2);

        ballot.update(BallotMsg::VoteSubmitted {
            index: 0,
            tx_hash: TxHash::ZERO,
        });
        assert_eq!(ballot.phase, Phase::Voting);

        ballot.update(BallotMsg::VoteFailed {
            index: 0,
            error: WalletError::Rejected("user denied".to_string()),
        });
        assert_eq!(ballot.phase, Phase::Connected);
        assert_eq!(ballot.pending_votes, 0);
    }

    #[test]
    fn test_vote_submitted_shows_success_without_touching_tally() {
        let mut ballot = connected_state(&["Alice"]);
        ballot.update(BallotMsg::Vote(0));

        let (_, sys) = ballot.update(BallotMsg::VoteSubmitted {
            index: 0,
            tx_hash: TxHash::repeat_byte(0xab),
        });

        assert!(sys.contains(&SystemMsg::ShowNotice(Notice::info("Voted successfully!"))));
        assert_eq!(ballot.candidates[0].votes, U256::ZERO);
    }

    #[test]
    fn test_vote_failed_shows_error_notice() {
        let mut ballot = connected_state(&["Alice"]);
        ballot.update(BallotMsg::Vote(0));

        let (cmds, sys) = ballot.update(BallotMsg::VoteFailed {
            index: 0,
            error: WalletError::Rejected("execution reverted".to_string()),
        });

        assert!(cmds.is_empty());
        assert_eq!(
            sys,
            vec![SystemMsg::ShowNotice(Notice::error(
                "Vote for Alice failed: Transaction rejected: execution reverted"
            ))]
        );
    }

    #[test]
    fn test_phase_display() {
        assert_eq!(Phase::Disconnected.to_string(), "Disconnected");
        assert_eq!(Phase::Voting.to_string(), "Voting");
    }
}
