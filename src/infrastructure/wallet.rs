//! Local wallet: a private key signing through an HTTP JSON-RPC node

use std::sync::Arc;

use alloy::{
    network::EthereumWallet,
    primitives::Address,
    providers::{Provider, ProviderBuilder},
    signers::local::PrivateKeySigner,
    transports::http::reqwest::Url,
};
use futures::future::BoxFuture;
use secrecy::ExposeSecret;

use crate::{
    domain::wallet::{VotingContract, WalletError, WalletProvider},
    infrastructure::{config::WalletSettings, contract::RpcVotingContract},
};

/// [`WalletProvider`] that holds its own key instead of delegating to an
/// external signer.
pub struct LocalWallet {
    settings: WalletSettings,
}

impl LocalWallet {
    pub fn new(settings: WalletSettings) -> Self {
        Self { settings }
    }

    fn signer(&self) -> Result<PrivateKeySigner, WalletError> {
        self.settings
            .private_key
            .expose_secret()
            .trim()
            .parse::<PrivateKeySigner>()
            .map_err(|_| WalletError::AccountAccess("invalid private key".to_string()))
    }

    fn rpc_url(&self) -> Result<Url, WalletError> {
        self.settings.rpc_url.parse::<Url>().map_err(|e| {
            WalletError::AccountAccess(format!("invalid rpc_url `{}`: {e}", self.settings.rpc_url))
        })
    }
}

impl WalletProvider for LocalWallet {
    fn request_accounts(&self) -> BoxFuture<'_, Result<Vec<Address>, WalletError>> {
        Box::pin(async move {
            let signer = self.signer()?;
            let provider = ProviderBuilder::new().connect_http(self.rpc_url()?);

            // The key is local, so access is implicit; this confirms the node answers.
            let chain_id = provider
                .get_chain_id()
                .await
                .map_err(|e| WalletError::AccountAccess(e.to_string()))?;
            log::info!(
                "Wallet {} connected to chain {chain_id} via {}",
                signer.address(),
                self.settings.rpc_url
            );

            Ok(vec![signer.address()])
        })
    }

    fn contract(&self, address: Address) -> Result<Arc<dyn VotingContract>, WalletError> {
        let wallet = EthereumWallet::from(self.signer()?);
        let provider = ProviderBuilder::new()
            .wallet(wallet)
            .connect_http(self.rpc_url()?)
            .erased();
        let contract = RpcVotingContract::new(address, provider);
        log::debug!("Bound voting contract at {}", contract.address());
        Ok(Arc::new(contract))
    }
}

#[cfg(test)]
mod tests {
    use secrecy::SecretString;

    use super::*;

    // Well-known development key; never holds funds.
    const DEV_KEY: &str = "0xac0974bec39a17e36ba4a6b4d238ff944bacb478cbed5efcae784d7bf4f2ff80";

    fn wallet(rpc_url: &str, key: &str) -> LocalWallet {
        LocalWallet::new(WalletSettings {
            rpc_url: rpc_url.to_string(),
            private_key: SecretString::from(key),
        })
    }

    #[test]
    fn test_signer_address_from_key() {
        let signer = wallet("http://localhost:8545", DEV_KEY).signer().unwrap();
        assert_eq!(
            signer.address().to_string(),
            "0xf39Fd6e51aad88F6F4ce6aB8827279cffFb92266"
        );
    }

    #[test]
    fn test_invalid_key_is_account_access_error() {
        let result = wallet("http://localhost:8545", "not-a-key").signer();
        assert_eq!(
            result.err(),
            Some(WalletError::AccountAccess("invalid private key".to_string()))
        );
    }

    #[test]
    fn test_invalid_rpc_url() {
        let result = wallet("not a url", DEV_KEY).contract(Address::ZERO);
        assert!(matches!(result, Err(WalletError::AccountAccess(_))));
    }

    #[tokio::test]
    async fn test_contract_binding_needs_no_network() {
        let result = wallet("http://localhost:8545", DEV_KEY).contract(Address::ZERO);
        assert!(result.is_ok());
    }
}
