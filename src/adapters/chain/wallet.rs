//! RPC Wallet - `Wallet` Port over the Shared Provider
//!
//! A wallet is "installed" when a signing key was loaded. The signer
//! handed out on connect is the key's account.

use std::sync::Arc;

use anyhow::{Context, Result};
use async_trait::async_trait;
use tracing::instrument;

use crate::domain::address::AccountAddress;
use crate::domain::session::SignerHandle;
use crate::domain::transaction::{PendingTx, TxReceipt};
use crate::ports::wallet::Wallet;

use super::provider::RpcProvider;

/// Wallet backed by an RPC endpoint and a local signing key.
pub struct RpcWallet {
    /// Shared RPC provider.
    provider: Arc<RpcProvider>,
}

impl RpcWallet {
    /// Create a wallet over `provider`.
    pub const fn new(provider: Arc<RpcProvider>) -> Self {
        Self { provider }
    }
}

#[async_trait]
impl Wallet for RpcWallet {
    fn is_installed(&self) -> bool {
        self.provider.signer_address().is_some()
    }

    #[instrument(skip(self))]
    async fn chain_id(&self) -> Result<u64> {
        self.provider.chain_id().await
    }

    async fn switch_chain(&self, chain_id: u64) -> Result<()> {
        self.provider.switch_chain(chain_id).await
    }

    async fn request_signer(&self) -> Result<SignerHandle> {
        let address = self
            .provider
            .signer_address()
            .context("No signing key loaded")?;
        Ok(SignerHandle::new(AccountAddress::new(address)))
    }

    #[instrument(skip(self), fields(tx_hash = %tx.hash))]
    async fn wait_for_confirmation(&self, tx: &PendingTx) -> Result<TxReceipt> {
        self.provider.wait_for_receipt(tx.hash).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::NetworkConfig;

    #[tokio::test]
    async fn keyless_wallet_is_not_installed() {
        let provider = Arc::new(RpcProvider::new(&NetworkConfig::default(), None).unwrap());
        let wallet = RpcWallet::new(provider);

        assert!(!wallet.is_installed());
        assert!(wallet.request_signer().await.is_err());
    }

    #[tokio::test]
    async fn keyed_wallet_hands_out_its_account() {
        let key = "0x59c6995e998f97a5a0044966f0945389dc9e86dae88c7a8412f4603b6b78690d";
        let provider = Arc::new(RpcProvider::new(&NetworkConfig::default(), Some(key)).unwrap());
        let wallet = RpcWallet::new(Arc::clone(&provider));

        assert!(wallet.is_installed());
        let signer = wallet.request_signer().await.unwrap();
        assert_eq!(Some(signer.account.as_address()), provider.signer_address());
    }
}
