//! Command-line interface implementations.
//!
//! Each submodule backs one subcommand: saving credentials, resolving a
//! playlist into the ledger, reviewing a record interactively, driving the
//! downloader, and listing ledger contents.

mod auth;
mod download;
mod edit;
mod list;
mod resolve;

pub use auth::auth;
pub use download::download;
pub use edit::edit;
pub use list::list;
pub use resolve::resolve;
