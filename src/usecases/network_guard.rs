//! Network Guard - Required Chain Enforcement
//!
//! Reads the wallet's chain id and, on mismatch, asks the wallet to
//! switch. A rejected or failed switch aborts the caller's flow; there
//! is no retry.

use tracing::{info, instrument, warn};

use crate::error::ClientError;
use crate::ports::wallet::Wallet;

/// Ensures the wallet is on one specific chain.
#[derive(Debug, Clone)]
pub struct NetworkGuard {
  /// Chain the wallet must be on.
  required_chain_id: u64,
  /// Display name for notices and logs.
  network_name: String,
}

impl NetworkGuard {
  /// Create a guard for `required_chain_id`.
  pub fn new(required_chain_id: u64, network_name: impl Into<String>) -> Self {
    Self {
      required_chain_id,
      network_name: network_name.into(),
    }
  }

  /// Required network's display name.
  pub fn network_name(&self) -> &str {
    &self.network_name
  }

  /// Check the wallet's chain and request a switch if needed.
  ///
  /// # Errors
  /// - `Chain` if the chain id cannot be read
  /// - `WrongNetwork` if the switch request is rejected
  #[instrument(skip(self, wallet), fields(required = self.required_chain_id))]
  pub async fn ensure<W: Wallet + ?Sized>(&self, wallet: &W) -> Result<(), ClientError> {
    let current = wallet.chain_id().await?;
    if current == self.required_chain_id {
      return Ok(());
    }

    info!(current, "Wallet on wrong chain, requesting switch");

    match wallet.switch_chain(self.required_chain_id).await {
      Ok(()) => {
        info!(chain_id = self.required_chain_id, "Wallet switched network");
        Ok(())
      }
      Err(e) => {
        warn!(current, error = %e, "Network switch rejected");
        Err(ClientError::WrongNetwork {
          expected: self.required_chain_id,
          actual: current,
        })
      }
    }
  }
}
