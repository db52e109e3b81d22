//! Wallet Port - Injected Provider Interface
//!
//! Everything the client asks of the user's wallet: which chain it is
//! on, a request to change chain, a signer for the active account, and
//! waiting for a submitted transaction to confirm.

use async_trait::async_trait;

use crate::domain::session::SignerHandle;
use crate::domain::transaction::{PendingTx, TxReceipt};

/// Trait for wallet providers.
///
/// Timeouts are the implementor's concern; callers never retry.
#[async_trait]
pub trait Wallet: Send + Sync + 'static {
  /// Whether a wallet is available at all.
  fn is_installed(&self) -> bool;

  /// Chain id the wallet is currently connected to.
  async fn chain_id(&self) -> anyhow::Result<u64>;

  /// Ask the wallet to switch to `chain_id`.
  ///
  /// # Errors
  /// Returns error if the wallet rejects or cannot perform the switch.
  async fn switch_chain(&self, chain_id: u64) -> anyhow::Result<()>;

  /// Obtain a signer for the wallet's active account.
  async fn request_signer(&self) -> anyhow::Result<SignerHandle>;

  /// Wait until `tx` is mined and return its receipt.
  ///
  /// A reverted transaction is returned as a receipt with
  /// `success == false`, not as an error.
  async fn wait_for_confirmation(&self, tx: &PendingTx) -> anyhow::Result<TxReceipt>;
}
