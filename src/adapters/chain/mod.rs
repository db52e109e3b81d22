//! Chain Adapters - Sepolia Interaction Layer
//!
//! Provides on-chain access via alloy-rs 0.9 for:
//! - RPC provider management with an optional local signing key
//! - The `Wallet` port (chain id, network switch, signer, receipts)
//! - NFT and marketplace contract calls

pub mod abi;
pub mod contracts;
pub mod provider;
pub mod wallet;

pub use contracts::{MarketplaceContractClient, NftContractClient};
pub use provider::RpcProvider;
pub use wallet::RpcWallet;
