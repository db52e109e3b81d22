//! Render model.
//!
//! A plain snapshot of what the user should see, derived from
//! [`AppState`] at render time. Ownership is decided here and nowhere
//! else.

use super::address::AccountAddress;
use super::listing::{Listing, TokenId};
use super::price::EthAmount;
use super::session::AppState;

/// What a listing row offers the connected user.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Ownership {
    /// Seller is the connected account; no purchase action.
    OwnedByYou,
    /// Anyone else's listing; can be bought.
    Purchasable,
}

/// Classify a seller against the connected account.
///
/// Both sides are [`AccountAddress`] values, so letter case in the
/// original text has no effect.
#[must_use]
pub fn classify(seller: &AccountAddress, account: Option<&AccountAddress>) -> Ownership {
    match account {
        Some(account) if account == seller => Ownership::OwnedByYou,
        _ => Ownership::Purchasable,
    }
}

/// One rendered listing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListingRow {
    /// Token on offer.
    pub token_id: TokenId,
    /// Price formatted in ETH.
    pub price_eth: String,
    /// Owned-by-you marker or purchase action.
    pub ownership: Ownership,
}

impl ListingRow {
    fn from_listing(listing: &Listing, account: Option<&AccountAddress>) -> Self {
        Self {
            token_id: listing.token_id,
            price_eth: EthAmount::from_wei(listing.price).to_string(),
            ownership: classify(&listing.seller, account),
        }
    }
}

/// Everything the terminal renderer needs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MarketplaceView {
    /// Connected account, if any.
    pub account: Option<AccountAddress>,
    /// Required network's display name.
    pub network: String,
    /// Whether a transaction sequence is in flight.
    pub busy: bool,
    /// Current price input.
    pub price_input: String,
    /// Active listings in on-chain order.
    pub rows: Vec<ListingRow>,
}

impl MarketplaceView {
    /// Snapshot `state` for rendering.
    #[must_use]
    pub fn from_state(state: &AppState, network: &str) -> Self {
        let account = state.account();
        Self {
            account,
            network: network.to_string(),
            busy: state.is_busy(),
            price_input: state.price_input().to_string(),
            rows: state
                .listings()
                .iter()
                .map(|l| ListingRow::from_listing(l, account.as_ref()))
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use alloy::primitives::U256;

    use super::*;
    use crate::domain::session::SignerHandle;

    const SELLER_CHECKSUM: &str = "0xeD2feAB16BF7080E8100E070a19a89D4975D170B";

    #[test]
    fn classification_ignores_case() {
        let seller: AccountAddress = SELLER_CHECKSUM.parse().unwrap();
        let account: AccountAddress = SELLER_CHECKSUM.to_lowercase().parse().unwrap();
        assert_eq!(classify(&seller, Some(&account)), Ownership::OwnedByYou);
    }

    #[test]
    fn disconnected_sees_everything_purchasable() {
        let seller: AccountAddress = SELLER_CHECKSUM.parse().unwrap();
        assert_eq!(classify(&seller, None), Ownership::Purchasable);
    }

    #[test]
    fn view_formats_rows() {
        let seller: AccountAddress = SELLER_CHECKSUM.parse().unwrap();
        let mut state = AppState::default();
        state.connect(SignerHandle::new(seller));
        state.replace_listings(vec![Listing {
            token_id: U256::from(4),
            seller,
            price: U256::from(500_000_000_000_000_000u128),
            active: true,
        }]);

        let view = MarketplaceView::from_state(&state, "Sepolia");
        assert_eq!(view.rows.len(), 1);
        assert_eq!(view.rows[0].price_eth, "0.5");
        assert_eq!(view.rows[0].ownership, Ownership::OwnedByYou);
        assert_eq!(view.account, Some(seller));
        assert!(!view.busy);
    }
}
