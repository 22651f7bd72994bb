//! Voting contract binding over JSON-RPC

use alloy::{
    primitives::{Address, TxHash, U256},
    providers::DynProvider,
    sol,
};
use futures::future::BoxFuture;

use crate::domain::wallet::{VotingContract, WalletError};

sol! {
    #[sol(rpc)]
    contract Voting {
        function addCandidate(string memory _name) public;
        function vote(uint256 _candidateId) public;
        function getCandidate(uint256 _candidateId) public view returns (string memory, uint256);
        function candidateCount() public view returns (uint256);
    }
}

/// [`VotingContract`] backed by a deployed contract, signing through the
/// provider's wallet.
pub struct RpcVotingContract {
    instance: Voting::VotingInstance<DynProvider>,
}

impl RpcVotingContract {
    pub fn new(address: Address, provider: DynProvider) -> Self {
        Self {
            instance: Voting::new(address, provider),
        }
    }

    pub fn address(&self) -> &Address {
        self.instance.address()
    }
}

fn call_error(call: &'static str, error: impl std::fmt::Display) -> WalletError {
    WalletError::Call {
        call,
        reason: error.to_string(),
    }
}

impl VotingContract for RpcVotingContract {
    fn candidate_count(&self) -> BoxFuture<'_, Result<U256, WalletError>> {
        Box::pin(async move {
            self.instance
                .candidateCount()
                .call()
                .await
                .map_err(|e| call_error("candidateCount", e))
        })
    }

    fn get_candidate(
        &self,
        candidate_id: U256,
    ) -> BoxFuture<'_, Result<(String, U256), WalletError>> {
        Box::pin(async move {
            let candidate = self
                .instance
                .getCandidate(candidate_id)
                .call()
                .await
                .map_err(|e| call_error("getCandidate", e))?;
            Ok((candidate._0, candidate._1))
        })
    }

    fn vote(&self, candidate_id: U256) -> BoxFuture<'_, Result<TxHash, WalletError>> {
        Box::pin(async move {
            let pending = self
                .instance
                .vote(candidate_id)
                .send()
                .await
                .map_err(|e| WalletError::Rejected(e.to_string()))?;
            Ok(*pending.tx_hash())
        })
    }
}
