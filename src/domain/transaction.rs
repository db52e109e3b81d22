//! Submitted transactions and their confirmations.

use alloy::primitives::TxHash;

/// Handle returned once the wallet has accepted a transaction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PendingTx {
    /// Transaction hash.
    pub hash: TxHash,
}

impl PendingTx {
    #[must_use]
    pub const fn new(hash: TxHash) -> Self {
        Self { hash }
    }
}

/// Outcome of a mined transaction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TxReceipt {
    /// Transaction hash.
    pub hash: TxHash,
    /// Block the transaction was included in.
    pub block_number: Option<u64>,
    /// `false` if execution reverted.
    pub success: bool,
}
