//! Contract Clients - NFT and Marketplace Ports via alloy-rs
//!
//! Implements the contract ports by ABI-encoding calls with the `sol!`
//! bindings in [`super::abi`] and sending them through the shared
//! [`RpcProvider`]. Contract addresses come from `config.toml`.

use std::sync::Arc;

use alloy::primitives::{Address, U256};
use alloy::sol_types::SolCall;
use anyhow::{Context, Result};
use async_trait::async_trait;
use tracing::{debug, instrument};

use crate::domain::address::AccountAddress;
use crate::domain::listing::{Listing, TokenId};
use crate::domain::session::SignerHandle;
use crate::domain::transaction::PendingTx;
use crate::ports::contracts::{MarketplaceContract, NftContract, ReadContext};

use super::abi::{IMarketplace, IOpenNft, MarketListing};
use super::provider::RpcProvider;

/// NFT contract bound to a deployed address.
pub struct NftContractClient {
    /// Shared RPC provider.
    provider: Arc<RpcProvider>,
    /// Deployed contract address.
    address: Address,
}

impl NftContractClient {
    /// Bind to the NFT contract at `address`.
    pub const fn new(provider: Arc<RpcProvider>, address: Address) -> Self {
        Self { provider, address }
    }
}

#[async_trait]
impl NftContract for NftContractClient {
    #[instrument(skip_all, fields(account = %signer.account))]
    async fn mint(&self, signer: &SignerHandle) -> Result<PendingTx> {
        let call = IOpenNft::mintCall {};
        self.provider
            .submit(signer, self.address, call.abi_encode(), U256::ZERO)
            .await
    }

    #[instrument(skip(self, signer), fields(account = %signer.account))]
    async fn approve_nft(
        &self,
        signer: &SignerHandle,
        marketplace: Address,
        token_id: TokenId,
    ) -> Result<PendingTx> {
        let call = IOpenNft::approveNFTCall {
            marketplace,
            tokenId: token_id,
        };
        self.provider
            .submit(signer, self.address, call.abi_encode(), U256::ZERO)
            .await
    }

    #[instrument(skip(self))]
    async fn owner_of(&self, token_id: TokenId, ctx: ReadContext) -> Result<AccountAddress> {
        let call = IOpenNft::ownerOfCall { tokenId: token_id };
        let data = self
            .provider
            .read(self.address, ctx.from_account().map(|a| a.as_address()), call.abi_encode())
            .await?;

        let decoded = IOpenNft::ownerOfCall::abi_decode_returns(&data, true)
            .context("Failed to decode ownerOf() result")?;
        Ok(AccountAddress::new(decoded._0))
    }

    #[instrument(skip(self))]
    async fn token_counter(&self, ctx: ReadContext) -> Result<U256> {
        let call = IOpenNft::tokenCounterCall {};
        let data = self
            .provider
            .read(self.address, ctx.from_account().map(|a| a.as_address()), call.abi_encode())
            .await?;

        let decoded = IOpenNft::tokenCounterCall::abi_decode_returns(&data, true)
            .context("Failed to decode tokenCounter() result")?;
        Ok(decoded._0)
    }
}

/// Marketplace contract bound to a deployed address.
pub struct MarketplaceContractClient {
    /// Shared RPC provider.
    provider: Arc<RpcProvider>,
    /// Deployed contract address.
    address: Address,
}

impl MarketplaceContractClient {
    /// Bind to the marketplace contract at `address`.
    pub const fn new(provider: Arc<RpcProvider>, address: Address) -> Self {
        Self { provider, address }
    }
}

impl From<MarketListing> for Listing {
    fn from(raw: MarketListing) -> Self {
        Self {
            token_id: raw.tokenId,
            seller: AccountAddress::new(raw.seller),
            price: raw.price,
            active: raw.active,
        }
    }
}

#[async_trait]
impl MarketplaceContract for MarketplaceContractClient {
    fn address(&self) -> Address {
        self.address
    }

    #[instrument(skip(self, signer), fields(account = %signer.account))]
    async fn list_nft(
        &self,
        signer: &SignerHandle,
        token_id: TokenId,
        price_wei: U256,
    ) -> Result<PendingTx> {
        let call = IMarketplace::listNFTCall {
            tokenId: token_id,
            price: price_wei,
        };
        self.provider
            .submit(signer, self.address, call.abi_encode(), U256::ZERO)
            .await
    }

    #[instrument(skip(self, signer), fields(account = %signer.account))]
    async fn buy_nft(
        &self,
        signer: &SignerHandle,
        token_id: TokenId,
        value: U256,
    ) -> Result<PendingTx> {
        let call = IMarketplace::buyNFTCall { tokenId: token_id };
        self.provider
            .submit(signer, self.address, call.abi_encode(), value)
            .await
    }

    #[instrument(skip(self))]
    async fn get_all_listings(&self, ctx: ReadContext) -> Result<Vec<Listing>> {
        let call = IMarketplace::getAllListingsCall {};
        let data = self
            .provider
            .read(self.address, ctx.from_account().map(|a| a.as_address()), call.abi_encode())
            .await?;

        let decoded = IMarketplace::getAllListingsCall::abi_decode_returns(&data, true)
            .context("Failed to decode getAllListings() result")?;

        debug!(count = decoded._0.len(), "Listings decoded");
        Ok(decoded._0.into_iter().map(Listing::from).collect())
    }
}

#[cfg(test)]
mod tests {
    use alloy::sol_types::SolValue;

    use super::*;

    #[test]
    fn listing_tuple_decodes_into_domain_listing() {
        let seller = Address::repeat_byte(0x42);
        let encoded = vec![
            MarketListing {
                tokenId: U256::from(4),
                seller,
                price: U256::from(500_000_000_000_000_000u128),
                active: true,
            },
            MarketListing {
                tokenId: U256::from(5),
                seller,
                price: U256::from(1u64),
                active: false,
            },
        ]
        .abi_encode();

        let decoded = IMarketplace::getAllListingsCall::abi_decode_returns(&encoded, true).unwrap();
        let listings: Vec<Listing> = decoded._0.into_iter().map(Listing::from).collect();

        assert_eq!(listings.len(), 2);
        assert_eq!(listings[0].token_id, U256::from(4));
        assert_eq!(listings[0].seller, AccountAddress::new(seller));
        assert!(listings[0].active);
        assert!(!listings[1].active);
    }

    #[test]
    fn approve_calldata_uses_declared_selector() {
        let call = IOpenNft::approveNFTCall {
            marketplace: Address::ZERO,
            tokenId: U256::from(4),
        };
        let data = call.abi_encode();

        assert_eq!(&data[..4], &IOpenNft::approveNFTCall::SELECTOR);
        assert_eq!(data.len(), 4 + 32 * 2);
    }
}
