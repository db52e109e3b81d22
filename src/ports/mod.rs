//! Ports Layer - Hexagonal Architecture Boundaries
//!
//! Defines the interfaces (traits) that the use-case layer requires
//! from the outside world. Adapters implement these traits.
//!
//! Port categories:
//! - `Wallet`: chain id, network switch, signer, confirmations
//! - `NftContract` / `MarketplaceContract`: the two deployed contracts
//! - `Notifier`: blocking user-facing notices

pub mod contracts;
pub mod notifier;
pub mod wallet;

pub use contracts::{MarketplaceContract, NftContract, ReadContext};
pub use notifier::Notifier;
pub use wallet::Wallet;
