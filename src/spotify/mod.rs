//! Spotify Web API client implementation.
//!
//! Authentication uses the client-credentials flow: the cached client id and
//! secret are exchanged for a short-lived access token, which is re-requested
//! transparently when it expires. Playlist reads go through the
//! [`CatalogSource`] trait so the resolution logic can be exercised against
//! a fake catalog in tests.

pub mod auth;
pub mod playlist;

use async_trait::async_trait;

use crate::types::PlaylistPage;

pub use playlist::CatalogClient;

/// Failure talking to the catalog API.
#[derive(Debug)]
pub enum CatalogError {
    Http(reqwest::Error),
    Status(reqwest::StatusCode),
    Auth(String),
}

impl std::fmt::Display for CatalogError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CatalogError::Http(e) => write!(f, "{}", e),
            CatalogError::Status(code) => write!(f, "unexpected status {}", code),
            CatalogError::Auth(e) => write!(f, "authentication failed: {}", e),
        }
    }
}

impl From<reqwest::Error> for CatalogError {
    fn from(err: reqwest::Error) -> Self {
        CatalogError::Http(err)
    }
}

/// Paginated access to a playlist's tracks.
///
/// One page per call, offset/limit addressed. Production code uses
/// [`CatalogClient`]; tests substitute an in-memory fake.
#[async_trait]
pub trait CatalogSource {
    async fn playlist_page(
        &mut self,
        playlist_id: &str,
        offset: u32,
        limit: u32,
    ) -> Result<PlaylistPage, CatalogError>;
}
