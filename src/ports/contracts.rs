//! Contract Ports - NFT and Marketplace Call Surface
//!
//! The fixed call surface of the two pre-deployed contracts. Mutating
//! calls take a [`SignerHandle`] and return as soon as the wallet has
//! accepted the transaction; confirmation goes through
//! [`Wallet::wait_for_confirmation`](super::wallet::Wallet::wait_for_confirmation).

use alloy::primitives::{Address, U256};
use async_trait::async_trait;

use crate::domain::address::AccountAddress;
use crate::domain::listing::{Listing, TokenId};
use crate::domain::session::SignerHandle;
use crate::domain::transaction::PendingTx;

/// Context a read-only call is issued under.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReadContext {
  /// Plain provider, no account.
  Provider,
  /// Issued as the connected signer.
  Signer(SignerHandle),
}

impl ReadContext {
  /// Account the call is made from, if any.
  #[must_use]
  pub const fn from_account(&self) -> Option<AccountAddress> {
    match self {
      Self::Provider => None,
      Self::Signer(signer) => Some(signer.account),
    }
  }
}

/// The NFT contract.
#[async_trait]
pub trait NftContract: Send + Sync + 'static {
  /// `mint()` — issues the next sequential token to the signer.
  async fn mint(&self, signer: &SignerHandle) -> anyhow::Result<PendingTx>;

  /// `approveNFT(marketplace, tokenId)`.
  async fn approve_nft(
    &self,
    signer: &SignerHandle,
    marketplace: Address,
    token_id: TokenId,
  ) -> anyhow::Result<PendingTx>;

  /// `ownerOf(tokenId)`.
  async fn owner_of(&self, token_id: TokenId, ctx: ReadContext) -> anyhow::Result<AccountAddress>;

  /// `tokenCounter()` — total tokens minted so far.
  async fn token_counter(&self, ctx: ReadContext) -> anyhow::Result<U256>;
}

/// The marketplace contract.
#[async_trait]
pub trait MarketplaceContract: Send + Sync + 'static {
  /// Deployed address, used as the approval target.
  fn address(&self) -> Address;

  /// `listNFT(tokenId, price)`.
  async fn list_nft(
    &self,
    signer: &SignerHandle,
    token_id: TokenId,
    price_wei: U256,
  ) -> anyhow::Result<PendingTx>;

  /// `buyNFT(tokenId)`, payable; `value` must equal the listing price.
  async fn buy_nft(
    &self,
    signer: &SignerHandle,
    token_id: TokenId,
    value: U256,
  ) -> anyhow::Result<PendingTx>;

  /// `getAllListings()`, in contract order, active or not.
  async fn get_all_listings(&self, ctx: ReadContext) -> anyhow::Result<Vec<Listing>>;
}
