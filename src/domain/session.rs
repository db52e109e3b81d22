//! Session State - Connection, Listing Cache, Price Input, Busy Gate
//!
//! All transient client state lives in [`AppState`], owned by the
//! marketplace controller. Mutation goes through the named transition
//! methods below; nothing else writes these fields. State is never
//! persisted and resets when the process exits.

use super::address::AccountAddress;
use super::busy::BusyFlag;
use super::listing::{Listing, TokenId, active_only};

/// Capability to submit state-changing calls from one account.
///
/// Only the wallet port hands these out, on a successful connect.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SignerHandle {
    /// Account that signs and pays gas.
    pub account: AccountAddress,
}

impl SignerHandle {
    /// Create a handle for `account`.
    #[must_use]
    pub const fn new(account: AccountAddress) -> Self {
        Self { account }
    }
}

/// Wallet connection status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
enum ConnectionState {
    /// No wallet connected yet.
    #[default]
    Disconnected,
    /// Connected with an obtained signer.
    Connected(SignerHandle),
}

/// Transient client state.
#[derive(Debug, Clone)]
pub struct AppState {
    connection: ConnectionState,
    listings: Vec<Listing>,
    price_input: String,
    busy: BusyFlag,
}

impl AppState {
    /// Fresh, disconnected state with the given price input.
    #[must_use]
    pub fn new(price_input: impl Into<String>) -> Self {
        Self {
            connection: ConnectionState::Disconnected,
            listings: Vec::new(),
            price_input: price_input.into(),
            busy: BusyFlag::new(),
        }
    }

    /// Record a successful wallet connection.
    pub fn connect(&mut self, signer: SignerHandle) {
        self.connection = ConnectionState::Connected(signer);
    }

    /// Replace the listing cache with the active subset of `fetched`.
    pub fn replace_listings(&mut self, fetched: Vec<Listing>) {
        self.listings = active_only(fetched);
    }

    /// Update the price input (whole-ETH decimal text).
    pub fn set_price_input(&mut self, price: impl Into<String>) {
        self.price_input = price.into();
    }

    /// Signer, if connected.
    #[must_use]
    pub const fn signer(&self) -> Option<SignerHandle> {
        match self.connection {
            ConnectionState::Connected(signer) => Some(signer),
            ConnectionState::Disconnected => None,
        }
    }

    /// Connected account, if any.
    #[must_use]
    pub const fn account(&self) -> Option<AccountAddress> {
        match self.connection {
            ConnectionState::Connected(signer) => Some(signer.account),
            ConnectionState::Disconnected => None,
        }
    }

    /// Cached active listings.
    #[must_use]
    pub fn listings(&self) -> &[Listing] {
        &self.listings
    }

    /// Cached listing for `token_id`.
    #[must_use]
    pub fn listing(&self, token_id: TokenId) -> Option<&Listing> {
        self.listings.iter().find(|l| l.token_id == token_id)
    }

    /// Raw price input.
    #[must_use]
    pub fn price_input(&self) -> &str {
        &self.price_input
    }

    /// Shared handle to the busy gate.
    #[must_use]
    pub fn busy_flag(&self) -> BusyFlag {
        self.busy.clone()
    }

    /// Whether a transaction sequence is in flight.
    #[must_use]
    pub fn is_busy(&self) -> bool {
        self.busy.is_busy()
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new("0.01")
    }
}

#[cfg(test)]
mod tests {
    use alloy::primitives::{Address, U256};

    use super::*;

    fn listing(id: u64, active: bool) -> Listing {
        Listing {
            token_id: U256::from(id),
            seller: AccountAddress::new(Address::repeat_byte(0x22)),
            price: U256::from(5u64),
            active,
        }
    }

    #[test]
    fn starts_disconnected() {
        let state = AppState::default();
        assert!(state.signer().is_none());
        assert_eq!(state.price_input(), "0.01");
        assert!(!state.is_busy());
    }

    #[test]
    fn connect_stores_signer_and_account() {
        let account = AccountAddress::new(Address::repeat_byte(0xab));
        let mut state = AppState::default();
        state.connect(SignerHandle::new(account));

        assert_eq!(state.account(), Some(account));
        assert_eq!(state.signer(), Some(SignerHandle::new(account)));
    }

    #[test]
    fn replace_listings_filters_and_overwrites() {
        let mut state = AppState::default();
        state.replace_listings(vec![listing(1, true), listing(2, false)]);
        assert_eq!(state.listings().len(), 1);
        assert!(state.listing(U256::from(1)).is_some());
        assert!(state.listing(U256::from(2)).is_none());

        state.replace_listings(vec![listing(9, true)]);
        assert_eq!(state.listings().len(), 1);
        assert!(state.listing(U256::from(1)).is_none());
    }
}
