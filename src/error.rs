//! Client Error Taxonomy
//!
//! Every failure a marketplace operation can end in. Controller
//! operations surface the matching notice first and then return one
//! of these, so callers can branch without parsing notice text.

use alloy::primitives::TxHash;
use thiserror::Error;

use crate::domain::listing::TokenId;

/// Errors returned by the marketplace controller and domain parsers.
#[derive(Debug, Error)]
pub enum ClientError {
    /// No signing wallet is configured.
    #[error("no wallet installed")]
    WalletNotInstalled,

    /// Wallet is on the wrong chain and refused to switch.
    #[error("wallet is on chain {actual}, expected {expected}")]
    WrongNetwork {
        /// Chain the client requires.
        expected: u64,
        /// Chain the wallet reported.
        actual: u64,
    },

    /// A signer is required but no wallet has been connected.
    #[error("wallet not connected")]
    NotConnected,

    /// Another transaction sequence is still in flight.
    #[error("another operation is already in progress")]
    Busy,

    /// Price input could not be converted to wei.
    #[error("invalid price {input:?}: {reason}")]
    InvalidPrice {
        /// Raw user input.
        input: String,
        /// Why it was rejected.
        reason: String,
    },

    /// Address text could not be parsed.
    #[error("invalid address {0:?}")]
    InvalidAddress(String),

    /// Purchase requested for a token with no cached active listing.
    #[error("no active listing for token #{0}")]
    UnknownListing(TokenId),

    /// Token counter was zero after a confirmed mint.
    #[error("token counter is zero after mint")]
    NoTokenMinted,

    /// Transaction was mined but reverted.
    #[error("transaction {tx_hash} reverted")]
    Reverted {
        /// Hash of the reverted transaction.
        tx_hash: TxHash,
    },

    /// Wallet, RPC or contract call failure.
    #[error(transparent)]
    Chain(#[from] anyhow::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wrong_network_display() {
        let err = ClientError::WrongNetwork {
            expected: 11_155_111,
            actual: 1,
        };
        assert_eq!(err.to_string(), "wallet is on chain 1, expected 11155111");
    }

    #[test]
    fn chain_error_is_transparent() {
        let err = ClientError::from(anyhow::anyhow!("execution reverted"));
        assert_eq!(err.to_string(), "execution reverted");
    }
}
