use std::sync::Arc;

use alloy::primitives::{TxHash, U256};
use tokio::sync::mpsc;
use tokio_util::sync::CancellationToken;

use crate::{
    core::{msg::ballot::BallotMsg, raw_msg::RawMsg},
    domain::{
        candidate::Candidate,
        wallet::{parse_contract_address, Connection, VotingContract, WalletError, WalletProvider},
    },
};

/// Operations the service carries out on behalf of the update loop
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BallotOperation {
    /// Connect and read every candidate (initial load and reload)
    Load,
    /// Submit a vote for the candidate at a displayed index
    Vote { index: usize },
}

/// Outcome of a successful load
#[derive(Debug)]
pub struct Loaded {
    pub connection: Connection,
    pub candidates: Vec<Candidate>,
}

/// Requests account access and binds the contract.
///
/// Nothing is constructed when `wallet` is `None`.
pub async fn connect(
    wallet: Option<&dyn WalletProvider>,
    contract_address: &str,
) -> Result<Connection, WalletError> {
    let wallet = wallet.ok_or(WalletError::Missing)?;

    let accounts = wallet.request_accounts().await?;
    let account = accounts.first().copied().ok_or(WalletError::NoAccounts)?;

    let address = parse_contract_address(contract_address)?;
    let contract = wallet.contract(address)?;

    Ok(Connection { account, contract })
}

/// Reads the candidate count, then each candidate one at a time in index order.
///
/// The first failing read aborts the load; nothing partial is returned.
pub async fn fetch_candidates(contract: &dyn VotingContract) -> Result<Vec<Candidate>, WalletError> {
    let count = contract.candidate_count().await?;
    let count =
        usize::try_from(count).map_err(|_| WalletError::CountOutOfRange(count.to_string()))?;

    let mut candidates = Vec::with_capacity(count);
    for index in 0..count {
        let candidate = contract.get_candidate(U256::from(index)).await?;
        candidates.push(Candidate::from(candidate));
    }
    Ok(candidates)
}

/// Full load: connect, then fetch every candidate.
pub async fn initialize(
    wallet: Option<&dyn WalletProvider>,
    contract_address: &str,
) -> Result<Loaded, WalletError> {
    let connection = connect(wallet, contract_address).await?;
    let candidates = fetch_candidates(connection.contract.as_ref()).await?;
    Ok(Loaded {
        connection,
        candidates,
    })
}

/// Submits one vote transaction for the displayed index.
///
/// The index is passed to the contract as the candidate id; the displayed list
/// always mirrors contract order `0..count`.
pub async fn vote(connection: &Connection, index: usize) -> Result<TxHash, WalletError> {
    connection.contract.vote(U256::from(index)).await
}

/// BallotService owns the wallet connection and performs contract I/O off the
/// UI loop, one operation at a time, reporting results as [`RawMsg`]s.
pub struct BallotService {
    wallet: Option<Arc<dyn WalletProvider>>,
    contract_address: String,
    connection: Option<Connection>,
    // Incoming channels
    op_rx: mpsc::UnboundedReceiver<BallotOperation>,
    cancel_token: CancellationToken,
    // Outgoing channels
    raw_tx: mpsc::UnboundedSender<RawMsg>,
}

pub type NewBallotService = (
    mpsc::UnboundedSender<BallotOperation>, // op_tx - operations to send
    CancellationToken,                      // shutdown signal
    BallotService,
);

impl BallotService {
    pub fn new(
        wallet: Option<Arc<dyn WalletProvider>>,
        contract_address: impl Into<String>,
        raw_tx: mpsc::UnboundedSender<RawMsg>,
    ) -> NewBallotService {
        let (op_tx, op_rx) = mpsc::unbounded_channel();
        let cancel_token = CancellationToken::new();

        (
            op_tx,
            cancel_token.clone(),
            Self {
                wallet,
                contract_address: contract_address.into(),
                connection: None,
                op_rx,
                cancel_token,
                raw_tx,
            },
        )
    }

    /// Run the service in a background task
    pub fn run(mut self) -> tokio::task::JoinHandle<()> {
        tokio::spawn(async move {
            self.run_service().await;
        })
    }

    async fn run_service(&mut self) {
        loop {
            tokio::select! {
                result = self.op_rx.recv() => {
                    match result {
                        Some(op) => self.handle_operation(op).await,
                        None => {
                            log::info!("BallotService: operation channel closed");
                            break;
                        }
                    }
                }

                _ = self.cancel_token.cancelled() => {
                    log::info!("BallotService received cancellation signal");
                    break;
                }
            }
        }
    }

    /// Handles every operation already queued, without waiting for more.
    /// Returns how many were handled.
    pub async fn process_pending(&mut self) -> usize {
        let mut handled = 0;
        while let Ok(op) = self.op_rx.try_recv() {
            self.handle_operation(op).await;
            handled += 1;
        }
        handled
    }

    /// Performs one operation and reports its outcome.
    pub async fn handle_operation(&mut self, op: BallotOperation) {
        log::debug!("Handling BallotOperation: {op:?}");

        match op {
            BallotOperation::Load => self.load().await,
            BallotOperation::Vote { index } => self.vote(index).await,
        }
    }

    async fn load(&mut self) {
        let connection = match connect(self.wallet.as_deref(), &self.contract_address).await {
            Ok(connection) => connection,
            Err(WalletError::Missing) => {
                log::warn!("No wallet configured");
                self.connection = None;
                self.report(BallotMsg::WalletMissing);
                return;
            }
            Err(e) => {
                log::error!("Failed to connect wallet: {e}");
                self.report(BallotMsg::LoadFailed(e));
                return;
            }
        };

        log::info!(
            "Connected as {}, contract {}",
            connection.account,
            self.contract_address
        );
        self.report(BallotMsg::Connected {
            account: connection.account,
        });

        match fetch_candidates(connection.contract.as_ref()).await {
            Ok(candidates) => {
                log::info!("Loaded {} candidates", candidates.len());
                self.report(BallotMsg::CandidatesLoaded(candidates));
            }
            Err(e) => {
                log::error!("Failed to load candidates: {e}");
                self.report(BallotMsg::LoadFailed(e));
            }
        }
        self.connection = Some(connection);
    }

    async fn vote(&mut self, index: usize) {
        let Some(connection) = &self.connection else {
            log::warn!("Vote for #{index} ignored: not connected");
            self.report(BallotMsg::VoteFailed {
                index,
                error: WalletError::NotConnected,
            });
            return;
        };

        match vote(connection, index).await {
            Ok(tx_hash) => {
                log::info!("Vote for #{index} accepted: {tx_hash}");
                self.report(BallotMsg::VoteSubmitted { index, tx_hash });
            }
            Err(e) => {
                log::error!("Vote for #{index} failed: {e}");
                self.report(BallotMsg::VoteFailed { index, error: e });
            }
        }
    }

    fn report(&self, msg: BallotMsg) {
        if self.raw_tx.send(RawMsg::Ballot(msg)).is_err() {
            log::warn!("BallotService: update loop is gone, dropping result");
        }
    }
}

#[cfg(test)]
mod tests {
    use alloy::primitives::Address;
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::test_helpers::{MockContract, MockWallet, TEST_CONTRACT_ADDRESS};

    fn service_with(
        wallet: Option<Arc<dyn WalletProvider>>,
    ) -> (BallotService, mpsc::UnboundedReceiver<RawMsg>) {
        let (raw_tx, raw_rx) = mpsc::unbounded_channel();
        let (_op_tx, _cancel, service) = BallotService::new(wallet, TEST_CONTRACT_ADDRESS, raw_tx);
        (service, raw_rx)
    }

    fn drain(rx: &mut mpsc::UnboundedReceiver<RawMsg>) -> Vec<RawMsg> {
        let mut msgs = Vec::new();
        while let Ok(msg) = rx.try_recv() {
            msgs.push(msg);
        }
        msgs
    }

    #[tokio::test]
    async fn test_fetch_candidates_reads_in_index_order() {
        let contract = MockContract::with_candidates(&[("Alice", 3), ("Bob", 0), ("Carol", 7)]);

        let candidates = fetch_candidates(&contract).await.unwrap();

        assert_eq!(
            candidates,
            vec![
                Candidate::new("Alice", U256::from(3u64)),
                Candidate::new("Bob", U256::ZERO),
                Candidate::new("Carol", U256::from(7u64)),
            ]
        );
        assert_eq!(
            contract.get_candidate_calls(),
            vec![U256::from(0u64), U256::from(1u64), U256::from(2u64)]
        );
    }

    #[tokio::test]
    async fn test_fetch_candidates_count_out_of_range() {
        let contract = MockContract::with_candidates(&[]).count_override(U256::MAX);

        let result = fetch_candidates(&contract).await;

        assert!(matches!(result, Err(WalletError::CountOutOfRange(_))));
        assert!(contract.get_candidate_calls().is_empty());
    }

    #[tokio::test]
    async fn test_connect_rejects_invalid_address() {
        let wallet = MockWallet::new(MockContract::with_candidates(&[]));

        let result = connect(Some(&wallet), "CONTRACT_ADDRESS").await;

        assert_eq!(
            result.err(),
            Some(WalletError::InvalidAddress("CONTRACT_ADDRESS".to_string()))
        );
        assert_eq!(wallet.contract_constructions(), 0);
    }

    #[tokio::test]
    async fn test_connect_without_accounts() {
        let wallet = MockWallet::new(MockContract::with_candidates(&[])).with_accounts(vec![]);

        let result = connect(Some(&wallet), TEST_CONTRACT_ADDRESS).await;

        assert_eq!(result.err(), Some(WalletError::NoAccounts));
    }

    #[tokio::test]
    async fn test_service_load_reports_connection_then_candidates() {
        let wallet = Arc::new(MockWallet::new(MockContract::with_candidates(&[(
            "Alice", 1,
        )])));
        let (mut service, mut rx) = service_with(Some(wallet as Arc<dyn WalletProvider>));

        service.handle_operation(BallotOperation::Load).await;

        assert_eq!(
            drain(&mut rx),
            vec![
                RawMsg::Ballot(BallotMsg::Connected {
                    account: Address::repeat_byte(0xaa)
                }),
                RawMsg::Ballot(BallotMsg::CandidatesLoaded(vec![Candidate::new(
                    "Alice",
                    U256::from(1u64)
                )])),
            ]
        );
    }

    #[tokio::test]
    async fn test_service_vote_before_load_is_not_connected() {
        let wallet = Arc::new(MockWallet::new(MockContract::with_candidates(&[(
            "Alice", 1,
        )])));
        let (mut service, mut rx) = service_with(Some(Arc::clone(&wallet) as Arc<dyn WalletProvider>));

        service.handle_operation(BallotOperation::Vote { index: 0 }).await;

        assert_eq!(
            drain(&mut rx),
            vec![RawMsg::Ballot(BallotMsg::VoteFailed {
                index: 0,
                error: WalletError::NotConnected
            })]
        );
        assert!(wallet.mock_contract().vote_calls().is_empty());
    }

    #[tokio::test]
    async fn test_service_runs_until_cancelled() {
        let wallet = Arc::new(MockWallet::new(MockContract::with_candidates(&[])));
        let (raw_tx, mut raw_rx) = mpsc::unbounded_channel();
        let (op_tx, cancel, service) = BallotService::new(
            Some(wallet as Arc<dyn WalletProvider>),
            TEST_CONTRACT_ADDRESS,
            raw_tx,
        );
        let handle = service.run();

        op_tx.send(BallotOperation::Load).unwrap();
        let first = raw_rx.recv().await.unwrap();
        assert!(matches!(first, RawMsg::Ballot(BallotMsg::Connected { .. })));
        let second = raw_rx.recv().await.unwrap();
        assert_eq!(second, RawMsg::Ballot(BallotMsg::CandidatesLoaded(vec![])));

        cancel.cancel();
        handle.await.unwrap();
    }
}
