//! Marketplace listings as returned by `getAllListings()`.

use alloy::primitives::U256;

use super::address::AccountAddress;

/// ERC-721 token identifier (uint256 on-chain).
pub type TokenId = U256;

/// A sale offer held by the marketplace contract for one token.
///
/// Never mutated locally; the client reloads the full set after every
/// state-changing transaction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Listing {
    /// Token being offered.
    pub token_id: TokenId,
    /// Account that listed the token.
    pub seller: AccountAddress,
    /// Asking price in wei.
    pub price: U256,
    /// Whether the offer is still open.
    pub active: bool,
}

/// Keep only active listings, preserving their on-chain order.
#[must_use]
pub fn active_only(listings: Vec<Listing>) -> Vec<Listing> {
    listings.into_iter().filter(|l| l.active).collect()
}

#[cfg(test)]
mod tests {
    use alloy::primitives::Address;

    use super::*;

    fn listing(id: u64, active: bool) -> Listing {
        Listing {
            token_id: U256::from(id),
            seller: AccountAddress::new(Address::repeat_byte(0x11)),
            price: U256::from(1_000u64),
            active,
        }
    }

    #[test]
    fn drops_inactive_and_keeps_order() {
        let fetched = vec![
            listing(3, true),
            listing(1, false),
            listing(7, true),
            listing(2, true),
        ];

        let ids: Vec<U256> = active_only(fetched).iter().map(|l| l.token_id).collect();
        assert_eq!(ids, vec![U256::from(3), U256::from(7), U256::from(2)]);
    }

    #[test]
    fn empty_when_nothing_active() {
        assert!(active_only(vec![listing(1, false)]).is_empty());
    }
}
