use alloy::primitives::{Address, TxHash};

use crate::domain::{candidate::Candidate, wallet::WalletError};

/// Messages specific to BallotState
#[derive(Debug, Clone, PartialEq)]
pub enum BallotMsg {
    // Loading (initial and reload)
    Load,
    WalletMissing,
    Connected { account: Address },
    CandidatesLoaded(Vec<Candidate>),
    LoadFailed(WalletError),

    // Selection
    ScrollUp,
    ScrollDown,
    ScrollToTop,
    ScrollToBottom,

    // Voting
    VoteSelected,
    Vote(usize),
    VoteSubmitted { index: usize, tx_hash: TxHash },
    VoteFailed { index: usize, error: WalletError },
}

impl BallotMsg {
    /// Whether this message carries a result from the contract
    pub fn is_contract_result(&self) -> bool {
        matches!(
            self,
            BallotMsg::WalletMissing
                | BallotMsg::Connected { .. }
                | BallotMsg::CandidatesLoaded(_)
                | BallotMsg::LoadFailed(_)
                | BallotMsg::VoteSubmitted { .. }
                | BallotMsg::VoteFailed { .. }
        )
    }
}
