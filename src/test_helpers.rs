//! Test doubles for the wallet seams and a harness that drives the update loop
//! and the ballot service in lockstep.

use std::sync::{
    atomic::{AtomicUsize, Ordering},
    Arc, Mutex, MutexGuard,
};

use alloy::primitives::{Address, TxHash, U256};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use futures::future::{self, BoxFuture};

use crate::{
    core::{msg::Msg, raw_msg::RawMsg, state::AppState},
    domain::wallet::{VotingContract, WalletError, WalletProvider},
    infrastructure::{ballot_service::BallotService, config::Config},
    integration::runtime::Runtime,
};

/// Any well-formed address works for the doubles
pub const TEST_CONTRACT_ADDRESS: &str = "0x5FbDB2315678afecb367f032d93F642f64180aa3";

#[derive(Debug, Default)]
struct ContractLog {
    candidates: Vec<(String, U256)>,
    count_override: Option<U256>,
    failing_candidate: Option<U256>,
    vote_error: Option<WalletError>,
    count_calls: usize,
    get_candidate_calls: Vec<U256>,
    vote_calls: Vec<U256>,
}

/// In-memory [`VotingContract`] that records every call.
///
/// Clones share state, so a test can keep one handle while the code under
/// test holds another.
#[derive(Debug, Clone, Default)]
pub struct MockContract {
    inner: Arc<Mutex<ContractLog>>,
}

impl MockContract {
    pub fn with_candidates(candidates: &[(&str, u64)]) -> Self {
        let contract = Self::default();
        contract.log().candidates = candidates
            .iter()
            .map(|(name, votes)| (name.to_string(), U256::from(*votes)))
            .collect();
        contract
    }

    /// Replaces a candidate's tally, e.g. with a value beyond `u64`.
    pub fn set_votes(self, index: usize, votes: U256) -> Self {
        if let Some(candidate) = self.log().candidates.get_mut(index) {
            candidate.1 = votes;
        }
        self
    }

    /// Reports `count` from `candidateCount()` regardless of the stored list.
    pub fn count_override(self, count: U256) -> Self {
        self.log().count_override = Some(count);
        self
    }

    /// Makes `getCandidate(id)` fail.
    pub fn fail_candidate(self, id: u64) -> Self {
        self.log().failing_candidate = Some(U256::from(id));
        self
    }

    /// Makes every `vote` fail with `error`.
    pub fn fail_votes(self, error: WalletError) -> Self {
        self.log().vote_error = Some(error);
        self
    }

    pub fn count_calls(&self) -> usize {
        self.log().count_calls
    }

    pub fn get_candidate_calls(&self) -> Vec<U256> {
        self.log().get_candidate_calls.clone()
    }

    pub fn vote_calls(&self) -> Vec<U256> {
        self.log().vote_calls.clone()
    }

    fn log(&self) -> MutexGuard<'_, ContractLog> {
        match self.inner.lock() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        }
    }
}

impl VotingContract for MockContract {
    fn candidate_count(&self) -> BoxFuture<'_, Result<U256, WalletError>> {
        let mut log = self.log();
        log.count_calls += 1;
        let count = log
            .count_override
            .unwrap_or(U256::from(log.candidates.len()));
        Box::pin(future::ready(Ok(count)))
    }

    fn get_candidate(
        &self,
        candidate_id: U256,
    ) -> BoxFuture<'_, Result<(String, U256), WalletError>> {
        let mut log = self.log();
        log.get_candidate_calls.push(candidate_id);

        let result = if log.failing_candidate == Some(candidate_id) {
            Err(WalletError::Call {
                call: "getCandidate",
                reason: "execution reverted".to_string(),
            })
        } else {
            usize::try_from(candidate_id)
                .ok()
                .and_then(|i| log.candidates.get(i).cloned())
                .ok_or_else(|| WalletError::Call {
                    call: "getCandidate",
                    reason: "invalid candidate".to_string(),
                })
        };
        Box::pin(future::ready(result))
    }

    fn vote(&self, candidate_id: U256) -> BoxFuture<'_, Result<TxHash, WalletError>> {
        let mut log = self.log();
        log.vote_calls.push(candidate_id);

        let result = match &log.vote_error {
            Some(error) => Err(error.clone()),
            None => Ok(TxHash::with_last_byte(log.vote_calls.len() as u8)),
        };
        Box::pin(future::ready(result))
    }
}

/// [`WalletProvider`] double handing out a shared [`MockContract`].
#[derive(Debug)]
pub struct MockWallet {
    contract: MockContract,
    accounts: Result<Vec<Address>, WalletError>,
    constructions: AtomicUsize,
}

impl MockWallet {
    /// Wallet with a single account, `0xaaaa…aaaa`.
    pub fn new(contract: MockContract) -> Self {
        Self {
            contract,
            accounts: Ok(vec![Address::repeat_byte(0xaa)]),
            constructions: AtomicUsize::new(0),
        }
    }

    pub fn with_accounts(mut self, accounts: Vec<Address>) -> Self {
        self.accounts = Ok(accounts);
        self
    }

    /// Makes account access fail, as when the user declines the request.
    pub fn denying(mut self, error: WalletError) -> Self {
        self.accounts = Err(error);
        self
    }

    pub fn mock_contract(&self) -> &MockContract {
        &self.contract
    }

    /// How many contract handles have been bound
    pub fn contract_constructions(&self) -> usize {
        self.constructions.load(Ordering::SeqCst)
    }
}

impl WalletProvider for MockWallet {
    fn request_accounts(&self) -> BoxFuture<'_, Result<Vec<Address>, WalletError>> {
        Box::pin(future::ready(self.accounts.clone()))
    }

    fn contract(&self, _address: Address) -> Result<Arc<dyn VotingContract>, WalletError> {
        self.constructions.fetch_add(1, Ordering::SeqCst);
        Ok(Arc::new(self.contract.clone()))
    }
}

/// Runtime plus an unspawned [`BallotService`], stepped together so tests see
/// every contract result without timing races.
pub struct BallotHarness {
    pub runtime: Runtime,
    service: BallotService,
}

impl BallotHarness {
    pub fn new(wallet: Option<Arc<dyn WalletProvider>>) -> Self {
        let config = Config::defaults()
            .map(|config| Config {
                contract_address: TEST_CONTRACT_ADDRESS.to_string(),
                ..config
            })
            .unwrap_or_default();
        let mut runtime = Runtime::new(AppState::new_with_config(config));
        let (op_tx, _cancel, service) =
            BallotService::new(wallet, TEST_CONTRACT_ADDRESS, runtime.get_raw_sender());
        runtime.add_ballot_sender(op_tx);
        Self { runtime, service }
    }

    pub fn state(&self) -> &AppState {
        self.runtime.state()
    }

    pub async fn send(&mut self, msg: impl Into<Msg>) {
        self.runtime.send_msg(msg.into());
        self.settle().await;
    }

    pub async fn press(&mut self, code: KeyCode) {
        self.runtime
            .send_raw_msg(RawMsg::Key(KeyEvent::new(code, KeyModifiers::empty())));
        self.settle().await;
    }

    /// Alternates update cycles and service work until nothing is left.
    pub async fn settle(&mut self) {
        loop {
            self.runtime.run_update_cycle();
            if self.service.process_pending().await == 0 {
                break;
            }
        }
    }
}
