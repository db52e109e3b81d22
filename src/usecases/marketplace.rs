//! Marketplace Client - Connect, Browse, Mint-and-List, Buy
//!
//! The single controller that owns [`AppState`] and sequences calls
//! against the wallet and the two contracts.
//!
//! Flow of every mutating action:
//! 1. Take the busy gate (a second action while one is in flight is refused)
//! 2. Submit each transaction and wait for its confirmation before the next
//! 3. Release the gate on every exit path
//! 4. Surface one notice, then reload listings on success
//!
//! Listings are never edited locally. After any mutation the full set is
//! re-read from the marketplace contract.

use std::sync::Arc;

use alloy::primitives::U256;
use anyhow::Context;
use tracing::{Instrument, debug, error, info, info_span, instrument, warn};
use uuid::Uuid;

use crate::domain::address::AccountAddress;
use crate::domain::busy::BusyFlag;
use crate::domain::listing::TokenId;
use crate::domain::notice::Notice;
use crate::domain::price::EthAmount;
use crate::domain::session::{AppState, SignerHandle};
use crate::domain::stage::MintListStage;
use crate::domain::transaction::{PendingTx, TxReceipt};
use crate::domain::view::{MarketplaceView, Ownership, classify};
use crate::error::ClientError;
use crate::ports::contracts::{MarketplaceContract, NftContract, ReadContext};
use crate::ports::notifier::Notifier;
use crate::ports::wallet::Wallet;

use super::network_guard::NetworkGuard;

/// Marketplace controller.
pub struct MarketplaceClient<W, F, M, N>
where
  W: Wallet,
  F: NftContract,
  M: MarketplaceContract,
  N: Notifier,
{
  /// Wallet port.
  wallet: Arc<W>,
  /// NFT contract port.
  nft: Arc<F>,
  /// Marketplace contract port.
  marketplace: Arc<M>,
  /// Notice sink.
  notifier: Arc<N>,
  /// Required-network check run on connect.
  guard: NetworkGuard,
  /// Transient session state.
  state: AppState,
  /// Stage of the most recent mint-and-list.
  mint_stage: MintListStage,
}

impl<W, F, M, N> MarketplaceClient<W, F, M, N>
where
  W: Wallet,
  F: NftContract,
  M: MarketplaceContract,
  N: Notifier,
{
  /// Create a controller over the given ports and initial state.
  pub fn new(
    wallet: Arc<W>,
    nft: Arc<F>,
    marketplace: Arc<M>,
    notifier: Arc<N>,
    guard: NetworkGuard,
    state: AppState,
  ) -> Self {
    Self {
      wallet,
      nft,
      marketplace,
      notifier,
      guard,
      state,
      mint_stage: MintListStage::Idle,
    }
  }

  /// Connect the wallet.
  ///
  /// Checks a wallet is installed, enforces the required network,
  /// obtains the signer, then loads listings as that signer.
  ///
  /// # Errors
  /// - `WalletNotInstalled` (notice shown)
  /// - `WrongNetwork` or `Chain` from the network guard (notice shown)
  /// - `Chain` if the wallet refuses to hand out a signer
  #[instrument(skip(self))]
  pub async fn connect(&mut self) -> Result<AccountAddress, ClientError> {
    if !self.wallet.is_installed() {
      warn!("No wallet installed");
      self.notifier.notify(Notice::InstallWallet);
      return Err(ClientError::WalletNotInstalled);
    }

    if let Err(e) = self.guard.ensure(self.wallet.as_ref()).await {
      warn!(error = %e, "Network check failed, connect aborted");
      self.notifier.notify(Notice::SwitchNetwork {
        network: self.guard.network_name().to_string(),
      });
      return Err(e);
    }

    let signer = self.wallet.request_signer().await.map_err(|e| {
      error!(error = %e, "Wallet did not provide a signer");
      ClientError::Chain(e)
    })?;

    self.state.connect(signer);
    info!(account = %signer.account, "Wallet connected");

    self.load_listings(ReadContext::Signer(signer)).await;
    Ok(signer.account)
  }

  /// Reload listings under `ctx`.
  ///
  /// Failures are logged only; the previous cache stays in place.
  #[instrument(skip(self))]
  pub async fn load_listings(&mut self, ctx: ReadContext) {
    match self.marketplace.get_all_listings(ctx).await {
      Ok(fetched) => {
        let total = fetched.len();
        self.state.replace_listings(fetched);
        debug!(total, active = self.state.listings().len(), "Listings loaded");
      }
      Err(e) => {
        error!(error = %e, "Listing query failed, keeping previous listings");
      }
    }
  }

  /// Reload listings as the signer if connected, else via the provider.
  pub async fn refresh_listings(&mut self) {
    let ctx = self
      .state
      .signer()
      .map_or(ReadContext::Provider, ReadContext::Signer);
    self.load_listings(ctx).await;
  }

  /// Update the price input used by the next mint-and-list.
  pub fn set_price_input(&mut self, price: impl Into<String>) {
    self.state.set_price_input(price);
  }

  /// Mint a token and list it at the current price input.
  ///
  /// Steps run strictly in order, each confirmed before the next:
  /// `mint()`, `tokenCounter()`, `approveNFT()`, `listNFT()`. The new
  /// token id is inferred as `tokenCounter() - 1`.
  ///
  /// # Errors
  /// - `NotConnected` (notice shown, nothing submitted)
  /// - `Busy` if another sequence is in flight
  /// - `InvalidPrice`, `NoTokenMinted`, `Reverted` or `Chain` (notice shown)
  pub async fn mint_and_list(&mut self) -> Result<TokenId, ClientError> {
    let Some(signer) = self.state.signer() else {
      warn!("Mint-and-list requested before connecting");
      self.notifier.notify(Notice::ConnectFirst);
      return Err(ClientError::NotConnected);
    };

    let price = match EthAmount::parse_ether(self.state.price_input()) {
      Ok(price) => price,
      Err(e) => {
        error!(error = %e, "Price input rejected");
        self.notifier.notify(Notice::TransactionFailed);
        return Err(e);
      }
    };

    let Some(busy) = self.state.busy_flag().try_acquire() else {
      warn!("Mint-and-list refused, another operation in progress");
      return Err(ClientError::Busy);
    };

    let operation_id = Uuid::new_v4();
    let span = info_span!("mint_and_list", %operation_id, account = %signer.account, price_eth = %price);
    let result = self.run_mint_and_list(signer, price).instrument(span).await;
    drop(busy);

    match result {
      Ok(token_id) => {
        info!(%operation_id, %token_id, "NFT minted and listed");
        self.notifier.notify(Notice::Listed { token_id });
        self.load_listings(ReadContext::Signer(signer)).await;
        Ok(token_id)
      }
      Err(e) => {
        self.mint_stage = self.mint_stage.fail();
        error!(%operation_id, stage = ?self.mint_stage, error = %e, "Mint-and-list failed");
        self.notifier.notify(Notice::TransactionFailed);
        Err(e)
      }
    }
  }

  async fn run_mint_and_list(
    &mut self,
    signer: SignerHandle,
    price: EthAmount,
  ) -> Result<TokenId, ClientError> {
    self.set_stage(self.mint_stage.start());

    let mint = self
      .nft
      .mint(&signer)
      .await
      .context("mint() was not submitted")?;
    self.confirm(&mint).await?;

    let counter = self
      .nft
      .token_counter(ReadContext::Signer(signer))
      .await
      .context("tokenCounter() read failed")?;
    let token_id = counter
      .checked_sub(U256::from(1))
      .ok_or(ClientError::NoTokenMinted)?;
    self.set_stage(self.mint_stage.minted(token_id));

    let approve = self
      .nft
      .approve_nft(&signer, self.marketplace.address(), token_id)
      .await
      .context("approveNFT() was not submitted")?;
    self.confirm(&approve).await?;
    self.set_stage(self.mint_stage.approved());

    let list = self
      .marketplace
      .list_nft(&signer, token_id, price.wei())
      .await
      .context("listNFT() was not submitted")?;
    self.confirm(&list).await?;
    self.set_stage(self.mint_stage.listed());

    Ok(token_id)
  }

  /// Buy the listed token `token_id`, paying exactly its listed price.
  ///
  /// The signer is not checked up front; without one the call fails
  /// and is reported like any other purchase failure.
  ///
  /// # Errors
  /// - `Busy` if another sequence is in flight
  /// - `NotConnected`, `UnknownListing`, `Reverted` or `Chain` (notice shown)
  pub async fn buy(&mut self, token_id: TokenId) -> Result<TxReceipt, ClientError> {
    let Some(busy) = self.state.busy_flag().try_acquire() else {
      warn!(%token_id, "Purchase refused, another operation in progress");
      return Err(ClientError::Busy);
    };

    let operation_id = Uuid::new_v4();
    let span = info_span!("buy", %operation_id, %token_id);
    let result = self.submit_purchase(token_id).instrument(span).await;
    drop(busy);

    match result {
      Ok(receipt) => {
        info!(%operation_id, %token_id, tx_hash = %receipt.hash, "NFT purchased");
        self.refresh_listings().await;
        Ok(receipt)
      }
      Err(e) => {
        error!(%operation_id, %token_id, error = %e, "Purchase failed");
        self.notifier.notify(Notice::PurchaseFailed);
        Err(e)
      }
    }
  }

  async fn submit_purchase(&self, token_id: TokenId) -> Result<TxReceipt, ClientError> {
    let signer = self.state.signer().ok_or(ClientError::NotConnected)?;
    let price = self
      .state
      .listing(token_id)
      .map(|l| l.price)
      .ok_or(ClientError::UnknownListing(token_id))?;

    let pending = self
      .marketplace
      .buy_nft(&signer, token_id, price)
      .await
      .context("buyNFT() was not submitted")?;
    self.confirm(&pending).await
  }

  /// Current owner of `token_id`, classified against the connected account.
  ///
  /// # Errors
  /// Returns `Chain` if the `ownerOf()` read fails.
  #[instrument(skip(self))]
  pub async fn owner_of(&self, token_id: TokenId) -> Result<(AccountAddress, Ownership), ClientError> {
    let ctx = self
      .state
      .signer()
      .map_or(ReadContext::Provider, ReadContext::Signer);
    let owner = self
      .nft
      .owner_of(token_id, ctx)
      .await
      .context("ownerOf() read failed")?;
    Ok((owner, classify(&owner, self.state.account().as_ref())))
  }

  /// Wait for `pending` and treat a reverted receipt as an error.
  async fn confirm(&self, pending: &PendingTx) -> Result<TxReceipt, ClientError> {
    let receipt = self
      .wallet
      .wait_for_confirmation(pending)
      .await
      .with_context(|| format!("no confirmation for {}", pending.hash))?;

    if !receipt.success {
      warn!(tx_hash = %receipt.hash, "Transaction reverted");
      return Err(ClientError::Reverted { tx_hash: receipt.hash });
    }

    debug!(tx_hash = %receipt.hash, block = ?receipt.block_number, "Transaction confirmed");
    Ok(receipt)
  }

  fn set_stage(&mut self, stage: MintListStage) {
    debug!(?stage, "Mint-and-list stage");
    self.mint_stage = stage;
  }

  /// Whether a wallet is available to connect.
  pub fn wallet_installed(&self) -> bool {
    self.wallet.is_installed()
  }

  /// Render snapshot of the current state.
  pub fn view(&self) -> MarketplaceView {
    MarketplaceView::from_state(&self.state, self.guard.network_name())
  }

  /// Current session state.
  pub const fn state(&self) -> &AppState {
    &self.state
  }

  /// Stage of the most recent mint-and-list.
  pub const fn mint_stage(&self) -> MintListStage {
    self.mint_stage
  }

  /// Shared busy flag (for render-time button disablement).
  pub fn busy_flag(&self) -> BusyFlag {
    self.state.busy_flag()
  }
}
