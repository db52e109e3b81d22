//! Mint-and-list stage machine.
//!
//! `Idle → Minting → Approving → Listing → Done`, with `Failed` reachable
//! from any in-flight stage. Each forward transition is taken only after
//! the previous step's transaction has confirmed.

use std::fmt;

use super::listing::TokenId;

/// Step of the sequence that was running when it failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MintListStep {
    Mint,
    Approve,
    List,
}

impl fmt::Display for MintListStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Mint => write!(f, "mint"),
            Self::Approve => write!(f, "approve"),
            Self::List => write!(f, "list"),
        }
    }
}

/// Where a mint-and-list sequence currently stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MintListStage {
    /// Nothing submitted yet.
    #[default]
    Idle,
    /// `mint()` submitted, awaiting confirmation and the counter read.
    Minting,
    /// `approveNFT()` submitted for the inferred token.
    Approving {
        /// Token being approved.
        token_id: TokenId,
    },
    /// `listNFT()` submitted.
    Listing {
        /// Token being listed.
        token_id: TokenId,
    },
    /// All three transactions confirmed.
    Done {
        /// Token now listed.
        token_id: TokenId,
    },
    /// Sequence aborted.
    Failed {
        /// Step that failed.
        step: MintListStep,
    },
}

impl MintListStage {
    /// Begin a sequence. Any previous sequence's terminal stage is discarded.
    #[must_use]
    pub const fn start(self) -> Self {
        Self::Minting
    }

    /// Mint confirmed and token id inferred.
    #[must_use]
    pub const fn minted(self, token_id: TokenId) -> Self {
        match self {
            Self::Minting => Self::Approving { token_id },
            other => other.fail(),
        }
    }

    /// Approval confirmed.
    #[must_use]
    pub const fn approved(self) -> Self {
        match self {
            Self::Approving { token_id } => Self::Listing { token_id },
            other => other.fail(),
        }
    }

    /// Listing confirmed.
    #[must_use]
    pub const fn listed(self) -> Self {
        match self {
            Self::Listing { token_id } => Self::Done { token_id },
            other => other.fail(),
        }
    }

    /// Abort from the current stage. Terminal stages are left unchanged.
    #[must_use]
    pub const fn fail(self) -> Self {
        match self {
            Self::Idle | Self::Minting => Self::Failed {
                step: MintListStep::Mint,
            },
            Self::Approving { .. } => Self::Failed {
                step: MintListStep::Approve,
            },
            Self::Listing { .. } => Self::Failed {
                step: MintListStep::List,
            },
            terminal @ (Self::Done { .. } | Self::Failed { .. }) => terminal,
        }
    }
}
