//! Use Cases Layer - Application Business Logic
//!
//! Orchestrates domain types with port interfaces to implement the
//! client's workflows.
//!
//! Use cases:
//! - `NetworkGuard`: make sure the wallet is on the required chain
//! - `MarketplaceClient`: connect, load listings, mint-and-list, buy

pub mod marketplace;
pub mod network_guard;

pub use marketplace::MarketplaceClient;
pub use network_guard::NetworkGuard;
