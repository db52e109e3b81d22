//! User-facing notices.

use std::fmt;

use super::listing::TokenId;

/// A blocking message shown to the user.
///
/// Failure notices are deliberately generic; details go to the log.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notice {
    /// No wallet configured.
    InstallWallet,
    /// Wallet refused to switch to the required network.
    SwitchNetwork {
        /// Display name of the required network.
        network: String,
    },
    /// A mutating action was attempted before connecting.
    ConnectFirst,
    /// Mint-and-list finished.
    Listed {
        /// Token that was listed.
        token_id: TokenId,
    },
    /// Mint-and-list failed at some step.
    TransactionFailed,
    /// Purchase failed.
    PurchaseFailed,
}

impl Notice {
    /// Whether this notice reports a failure.
    #[must_use]
    pub const fn is_error(&self) -> bool {
        !matches!(self, Self::Listed { .. })
    }
}

impl fmt::Display for Notice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InstallWallet => {
                write!(f, "Please install a wallet (set WALLET_PRIVATE_KEY)")
            }
            Self::SwitchNetwork { network } => {
                write!(f, "Please switch your wallet to the {network} network")
            }
            Self::ConnectFirst => write!(f, "Connect wallet first"),
            Self::Listed { token_id } => write!(f, "Success! NFT #{token_id} listed."),
            Self::TransactionFailed => write!(f, "Transaction failed. Check the log."),
            Self::PurchaseFailed => write!(f, "Purchase failed"),
        }
    }
}

#[cfg(test)]
mod tests {
    use alloy::primitives::U256;

    use super::*;

    #[test]
    fn listed_message_contains_token_id() {
        let notice = Notice::Listed {
            token_id: U256::from(4),
        };
        assert_eq!(notice.to_string(), "Success! NFT #4 listed.");
        assert!(!notice.is_error());
    }

    #[test]
    fn failures_are_errors() {
        assert!(Notice::PurchaseFailed.is_error());
        assert!(Notice::InstallWallet.is_error());
    }
}
