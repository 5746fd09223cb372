//! High-level persistence for the application's two durable stores: the
//! client credential cache and the playlist ledger. Both live as JSON files
//! under the platform-specific local data directory.

pub mod credentials;
pub mod ledger;

pub use credentials::CredentialManager;
pub use ledger::{LedgerError, LedgerManager};
