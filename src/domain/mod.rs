//! Domain layer - Core marketplace client types.
//!
//! Pure types for the OpenNFT client: addresses, listings, ETH amounts,
//! session state, the busy gate, the mint-and-list stage machine, and the
//! render model. No I/O here (hexagonal architecture inner ring).

pub mod address;
pub mod busy;
pub mod listing;
pub mod notice;
pub mod price;
pub mod session;
pub mod stage;
pub mod transaction;
pub mod view;

// Re-export core types for convenience
pub use address::AccountAddress;
pub use busy::{BusyFlag, BusyGuard};
pub use listing::{Listing, TokenId};
pub use notice::Notice;
pub use price::EthAmount;
pub use session::{AppState, SignerHandle};
pub use stage::{MintListStage, MintListStep};
pub use transaction::{PendingTx, TxReceipt};
pub use view::{ListingRow, MarketplaceView, Ownership};
