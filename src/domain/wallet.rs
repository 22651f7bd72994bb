//! Wallet and contract seams
//!
//! The client never talks to a chain directly. It goes through a
//! [`WalletProvider`], which grants account access and binds
//! [`VotingContract`] handles. Both are injected so tests can substitute
//! doubles for the real JSON-RPC implementation.

use std::fmt;
use std::sync::Arc;

use alloy::primitives::{Address, TxHash, U256};
use futures::future::BoxFuture;
use thiserror::Error;

/// Errors surfaced at the wallet/contract boundary
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WalletError {
    #[error("Please install a wallet: set `rpc_url` and `privatekey` in your config")]
    Missing,
    #[error("Account access failed: {0}")]
    AccountAccess(String),
    #[error("Wallet returned no accounts")]
    NoAccounts,
    #[error("Invalid contract address `{0}`")]
    InvalidAddress(String),
    #[error("Contract call `{call}` failed: {reason}")]
    Call { call: &'static str, reason: String },
    #[error("Transaction rejected: {0}")]
    Rejected(String),
    #[error("Candidate count {0} is out of range")]
    CountOutOfRange(String),
    #[error("Not connected to a wallet")]
    NotConnected,
}

/// Handle to a deployed voting contract.
///
/// Each call is a single suspension point. Implementations must not retry.
pub trait VotingContract: Send + Sync {
    /// `candidateCount() -> uint256`
    fn candidate_count(&self) -> BoxFuture<'_, Result<U256, WalletError>>;

    /// `getCandidate(uint256) -> (string, uint256)`
    fn get_candidate(&self, candidate_id: U256)
        -> BoxFuture<'_, Result<(String, U256), WalletError>>;

    /// `vote(uint256)`. Resolves once the node has accepted the transaction,
    /// not when it is mined.
    fn vote(&self, candidate_id: U256) -> BoxFuture<'_, Result<TxHash, WalletError>>;
}

/// An account-holding wallet able to sign for contract calls
pub trait WalletProvider: Send + Sync {
    /// Asks the wallet for account access. The first account signs.
    fn request_accounts(&self) -> BoxFuture<'_, Result<Vec<Address>, WalletError>>;

    /// Binds a contract handle at `address`, signed by this wallet.
    fn contract(&self, address: Address) -> Result<Arc<dyn VotingContract>, WalletError>;
}

/// Established connection: the signing account and the bound contract.
#[derive(Clone)]
pub struct Connection {
    pub account: Address,
    pub contract: Arc<dyn VotingContract>,
}

impl fmt::Debug for Connection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Connection")
            .field("account", &self.account)
            .finish_non_exhaustive()
    }
}

/// Parses a contract address, rejecting anything that is not 20 bytes of hex.
pub fn parse_contract_address(raw: &str) -> Result<Address, WalletError> {
    raw.trim()
        .parse::<Address>()
        .map_err(|_| WalletError::InvalidAddress(raw.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_contract_address_valid() {
        let address = parse_contract_address("0x5FbDB2315678afecb367f032d93F642f64180aa3");
        assert!(address.is_ok());
    }

    #[test]
    fn test_parse_contract_address_placeholder() {
        assert_eq!(
            parse_contract_address("CONTRACT_ADDRESS"),
            Err(WalletError::InvalidAddress("CONTRACT_ADDRESS".to_string()))
        );
    }

    #[test]
    fn test_missing_wallet_message() {
        assert!(WalletError::Missing
            .to_string()
            .starts_with("Please install a wallet"));
    }

    #[test]
    fn test_call_error_message() {
        let error = WalletError::Call {
            call: "getCandidate",
            reason: "execution reverted".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Contract call `getCandidate` failed: execution reverted"
        );
    }
}
