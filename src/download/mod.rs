//! Download orchestration.
//!
//! The driver walks a playlist's pending ledger entries in stored order and
//! hands each one to a [`Downloader`]. The external tool sits behind that
//! narrow trait so the orchestration logic is testable without spawning
//! real processes; production code uses [`SpotdlRunner`].

pub mod spotdl;

use std::path::Path;

use async_trait::async_trait;

use crate::{
    management::{LedgerError, LedgerManager},
    warning,
};

pub use spotdl::SpotdlRunner;

/// Black-box album download attempt.
///
/// Implementations map every failure mode (spawn error, nonzero exit,
/// timeout) uniformly to `false`.
#[async_trait]
pub trait Downloader {
    async fn fetch_album(&self, url: &str, output_dir: &Path) -> bool;
}

#[derive(Debug)]
pub enum DriverError {
    PlaylistNotFound(String),
    Ledger(LedgerError),
}

impl From<LedgerError> for DriverError {
    fn from(err: LedgerError) -> Self {
        DriverError::Ledger(err)
    }
}

/// Completion signal of one driver run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunSummary {
    pub attempted: u32,
    pub succeeded: u32,
    pub failed: u32,
}

/// Drives the downloader over a playlist's pending entries.
///
/// Entries are attempted in stored order, at most `max_count` of them per
/// run (`None` means all pending). A successful attempt flips the entry's
/// flag and persists the whole ledger before the next entry starts, so a
/// crash loses at most the in-flight download. A failed attempt leaves the
/// flag untouched and the run continues; the entry is not retried within
/// the same run.
pub async fn run(
    ledger: &mut LedgerManager,
    downloader: &impl Downloader,
    playlist_id: &str,
    output_dir: &Path,
    max_count: Option<u32>,
) -> Result<RunSummary, DriverError> {
    let record = ledger
        .get(playlist_id)
        .ok_or_else(|| DriverError::PlaylistNotFound(playlist_id.to_string()))?;

    let pending: Vec<String> = record
        .entries
        .iter()
        .filter(|e| !e.downloaded)
        .map(|e| e.album.url.clone())
        .collect();

    let mut summary = RunSummary::default();

    for url in pending {
        if let Some(max) = max_count {
            if summary.attempted >= max {
                break;
            }
        }

        summary.attempted += 1;

        if downloader.fetch_album(&url, output_dir).await {
            summary.succeeded += 1;
            ledger.mark_downloaded(playlist_id, &url).await?;
        } else {
            summary.failed += 1;
            warning!("Download failed for {}. Will stay pending.", url);
        }
    }

    Ok(summary)
}
