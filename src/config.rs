//! Configuration management for the playlist album downloader.
//!
//! This module handles loading and accessing configuration values from
//! environment variables and `.env` files. API endpoints, the downloader
//! binary and the timing knobs all carry sensible defaults, so a plain
//! installation works without any configuration at all.
//!
//! The configuration system follows a hierarchical approach:
//! 1. Environment variables (highest priority)
//! 2. `.env` file in the local data directory
//! 3. Application defaults

use dotenv;
use std::{env, path::PathBuf};

/// Loads environment variables from a `.env` file in the local data directory.
///
/// Creates the necessary directory structure if it doesn't exist and loads
/// environment variables from a `.env` file located in the platform-specific
/// local data directory under `spladl/.env`. A missing `.env` file is not an
/// error since every setting has a default.
///
/// # Directory Structure
///
/// The function looks for the `.env` file in:
/// - Linux: `~/.local/share/spladl/.env`
/// - macOS: `~/Library/Application Support/spladl/.env`
/// - Windows: `%LOCALAPPDATA%/spladl/.env`
pub async fn load_env() -> Result<(), String> {
    let mut path = dirs::data_local_dir().unwrap_or_else(|| PathBuf::from("."));
    path.push("spladl/.env");
    if let Some(parent) = path.parent() {
        async_fs::create_dir_all(parent)
            .await
            .map_err(|e| e.to_string())?;
    }

    let _ = dotenv::from_path(path);
    Ok(())
}

/// Returns the Spotify Web API base URL.
///
/// Overridable via `SPOTIFY_API_URL`, e.g. to point at a local stub.
pub fn spotify_apiurl() -> String {
    env::var("SPOTIFY_API_URL").unwrap_or_else(|_| "https://api.spotify.com/v1".to_string())
}

/// Returns the Spotify token exchange URL used by the client-credentials flow.
///
/// Overridable via `SPOTIFY_API_TOKEN_URL`.
pub fn spotify_apitoken_url() -> String {
    env::var("SPOTIFY_API_TOKEN_URL")
        .unwrap_or_else(|_| "https://accounts.spotify.com/api/token".to_string())
}

/// Returns the name of the external downloader binary.
///
/// Overridable via `SPLADL_DOWNLOADER`. The binary is resolved against the
/// PATH at download time.
pub fn downloader_bin() -> String {
    env::var("SPLADL_DOWNLOADER").unwrap_or_else(|_| "spotdl".to_string())
}

/// Returns the per-album download timeout in seconds.
///
/// Overridable via `SPLADL_DOWNLOAD_TIMEOUT`. A downloader invocation that
/// exceeds this bound counts as a failed attempt.
pub fn download_timeout_secs() -> u64 {
    env::var("SPLADL_DOWNLOAD_TIMEOUT")
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(500)
}

/// Returns the pause between playlist page requests in milliseconds.
///
/// Overridable via `SPLADL_PAGE_DELAY_MS`. Kept at one second by default to
/// stay well clear of upstream rate limits.
pub fn page_delay_ms() -> u64 {
    env::var("SPLADL_PAGE_DELAY_MS")
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(1000)
}
