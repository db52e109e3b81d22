//! RPC Provider - alloy-rs 0.9 Connection Management
//!
//! Wraps the JSON-RPC endpoint that stands in for the browser's injected
//! wallet provider. When a signing key is configured the provider carries
//! an `EthereumWallet` filler, so transactions sent `from` that account
//! are signed locally before submission.
//!
//! The keyed and keyless builders produce different filler stacks, so
//! both are stored as a type-erased `dyn Provider`.

use std::sync::Arc;
use std::time::Duration;

use alloy::network::{EthereumWallet, ReceiptResponse};
use alloy::primitives::{Address, Bytes, TxHash, U256};
use alloy::providers::{Provider, ProviderBuilder};
use alloy::rpc::types::TransactionRequest;
use alloy::signers::local::PrivateKeySigner;
use alloy::transports::http::reqwest::Url;
use alloy::transports::http::{Client, Http};
use anyhow::{Context, Result, bail};
use serde_json::json;
use tracing::{debug, info, instrument};

use crate::config::NetworkConfig;
use crate::domain::session::SignerHandle;
use crate::domain::transaction::{PendingTx, TxReceipt};

/// Environment variable holding the hex-encoded signing key.
pub const PRIVATE_KEY_ENV: &str = "WALLET_PRIVATE_KEY";

/// Shared RPC provider backed by alloy-rs 0.9.
///
/// All chain adapters share a single provider instance to avoid
/// redundant connections.
pub struct RpcProvider {
    /// The alloy HTTP provider (type-erased, wallet filler when keyed).
    provider: Arc<dyn Provider<Http<Client>> + Send + Sync>,
    /// Account of the configured signing key, if any.
    signer_address: Option<Address>,
    /// Delay between receipt polls.
    poll_interval: Duration,
    /// Upper bound on waiting for a receipt.
    confirmation_timeout: Duration,
}

impl RpcProvider {
    /// Build the provider from network config and an optional signing key.
    ///
    /// Does not touch the network; the chain id is checked on connect.
    #[instrument(skip_all)]
    pub fn new(config: &NetworkConfig, private_key: Option<&str>) -> Result<Self> {
        let url: Url = config.rpc_url.parse().context("Invalid RPC URL")?;

        let (provider, signer_address): (Arc<dyn Provider<Http<Client>> + Send + Sync>, _) =
            match private_key {
                Some(key) => {
                    let signer: PrivateKeySigner = key
                        .trim()
                        .parse()
                        .with_context(|| format!("Invalid {PRIVATE_KEY_ENV}"))?;
                    let address = signer.address();
                    let provider = ProviderBuilder::new()
                        .with_recommended_fillers()
                        .wallet(EthereumWallet::from(signer))
                        .on_http(url);
                    (Arc::new(provider), Some(address))
                }
                None => (Arc::new(ProviderBuilder::new().on_http(url)), None),
            };

        info!(
            keyed = signer_address.is_some(),
            account = ?signer_address,
            "RPC provider ready"
        );

        Ok(Self {
            provider,
            signer_address,
            poll_interval: Duration::from_millis(config.poll_interval_ms),
            confirmation_timeout: Duration::from_secs(config.confirmation_timeout_seconds),
        })
    }

    /// Build from config, reading the key from [`PRIVATE_KEY_ENV`].
    pub fn from_env(config: &NetworkConfig) -> Result<Self> {
        let key = std::env::var(PRIVATE_KEY_ENV).ok().filter(|k| !k.trim().is_empty());
        Self::new(config, key.as_deref())
    }

    /// Account of the configured signing key.
    pub const fn signer_address(&self) -> Option<Address> {
        self.signer_address
    }

    /// `eth_chainId`.
    pub async fn chain_id(&self) -> Result<u64> {
        self.provider
            .get_chain_id()
            .await
            .context("Failed to query chain ID")
    }

    /// `wallet_switchEthereumChain` with the hex chain id.
    ///
    /// Plain nodes do not implement this method and answer with an
    /// error, which the caller treats as a rejected switch.
    #[instrument(skip(self))]
    pub async fn switch_chain(&self, chain_id: u64) -> Result<()> {
        let params = serde_json::value::to_raw_value(&[json!({ "chainId": format!("{chain_id:#x}") })])
            .context("Failed to encode switch request")?;

        self.provider
            .raw_request_dyn("wallet_switchEthereumChain".into(), &params)
            .await
            .context("Wallet rejected network switch")?;

        Ok(())
    }

    /// `eth_call` against `to`, optionally `from` an account.
    pub async fn read(&self, to: Address, from: Option<Address>, calldata: Vec<u8>) -> Result<Bytes> {
        let mut tx = TransactionRequest::default()
            .to(to)
            .input(Bytes::from(calldata).into());
        if let Some(from) = from {
            tx = tx.from(from);
        }

        self.provider
            .call(&tx)
            .await
            .with_context(|| format!("eth_call to {to} failed"))
    }

    /// Sign and submit a transaction as `signer`.
    ///
    /// Returns once the node has accepted it; does not wait for mining.
    #[instrument(skip(self, calldata), fields(to = %to, value = %value))]
    pub async fn submit(
        &self,
        signer: &SignerHandle,
        to: Address,
        calldata: Vec<u8>,
        value: U256,
    ) -> Result<PendingTx> {
        let from = signer.account.as_address();
        if self.signer_address != Some(from) {
            bail!("No signing key loaded for account {}", signer.account);
        }

        let tx = TransactionRequest::default()
            .from(from)
            .to(to)
            .value(value)
            .input(Bytes::from(calldata).into());

        let pending = self
            .provider
            .send_transaction(tx)
            .await
            .context("Transaction submission failed")?;

        let hash = *pending.tx_hash();
        debug!(tx_hash = %hash, "Transaction submitted");
        Ok(PendingTx::new(hash))
    }

    /// Poll for the receipt of `hash` until it appears or the timeout hits.
    #[instrument(skip(self))]
    pub async fn wait_for_receipt(&self, hash: TxHash) -> Result<TxReceipt> {
        let poll = async {
            loop {
                let receipt = self
                    .provider
                    .get_transaction_receipt(hash)
                    .await
                    .context("Receipt query failed")?;

                if let Some(receipt) = receipt {
                    return Ok::<_, anyhow::Error>(TxReceipt {
                        hash,
                        block_number: receipt.block_number(),
                        success: receipt.status(),
                    });
                }

                tokio::time::sleep(self.poll_interval).await;
            }
        };

        match tokio::time::timeout(self.confirmation_timeout, poll).await {
            Ok(result) => result,
            Err(_) => bail!(
                "Timed out after {}s waiting for {hash}",
                self.confirmation_timeout.as_secs()
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // Anvil's first dev account.
    const DEV_KEY: &str = "0xac0974bec39a17e36ba4a6b4d238ff944bacb478cbed5efcae784d7bf4f2ff80";
    const DEV_ACCOUNT: &str = "0xf39Fd6e51aad88F6F4ce6aB8827279cffFb92266";

    #[test]
    fn keyed_provider_exposes_account() {
        let provider = RpcProvider::new(&NetworkConfig::default(), Some(DEV_KEY)).unwrap();
        let expected: Address = DEV_ACCOUNT.parse().unwrap();
        assert_eq!(provider.signer_address(), Some(expected));
    }

    #[test]
    fn keyless_provider_has_no_account() {
        let provider = RpcProvider::new(&NetworkConfig::default(), None).unwrap();
        assert!(provider.signer_address().is_none());
    }

    #[test]
    fn rejects_bad_key_and_url() {
        assert!(RpcProvider::new(&NetworkConfig::default(), Some("0x1234")).is_err());

        let config = NetworkConfig {
            rpc_url: "not a url".to_string(),
            ..NetworkConfig::default()
        };
        assert!(RpcProvider::new(&config, None).is_err());
    }
}
