use std::{path::PathBuf, time::Duration};

use indicatif::{ProgressBar, ProgressStyle};

use crate::{
    config,
    download::{DriverError, SpotdlRunner},
    error, management::LedgerManager, success, utils, warning,
};

/// Drives the external downloader over a playlist's pending entries.
pub async fn download(playlist: String, output: Option<PathBuf>, count: Option<u32>) {
    let playlist_id = utils::parse_playlist_id(&playlist);
    let output_dir =
        output.unwrap_or_else(|| std::env::current_dir().unwrap_or_else(|_| PathBuf::from(".")));

    let mut ledger = match LedgerManager::open().load().await {
        Ok(ledger) => ledger,
        Err(e) => error!("Cannot read ledger. Err: {:?}", e),
    };

    let Some(runner) = SpotdlRunner::from_env() else {
        error!(
            "Downloader binary '{}' not found in PATH.",
            config::downloader_bin()
        );
    };

    let pb = ProgressBar::new_spinner();
    pb.set_message(format!(
        "Downloading pending albums for playlist {} into {}...",
        playlist_id,
        output_dir.display()
    ));
    pb.enable_steady_tick(Duration::from_millis(100));
    pb.set_style(
        ProgressStyle::with_template("{spinner:.blue} {msg}")
            .unwrap()
            .tick_chars("⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏"),
    );

    let result = crate::download::run(&mut ledger, &runner, &playlist_id, &output_dir, count).await;
    pb.finish_and_clear();

    match result {
        Ok(summary) => {
            if summary.attempted == 0 {
                success!("Nothing pending for playlist {}.", playlist_id);
                return;
            }
            if summary.failed > 0 {
                warning!(
                    "{} of {} attempted downloads failed. Re-run to retry them.",
                    summary.failed,
                    summary.attempted
                );
            }
            success!(
                "{} attempted, {} succeeded, {} failed.",
                summary.attempted,
                summary.succeeded,
                summary.failed
            );
        }
        Err(DriverError::PlaylistNotFound(id)) => error!(
            "No ledger record for playlist {}. Run spladl resolve first.",
            id
        ),
        Err(DriverError::Ledger(e)) => error!("Cannot write ledger. Err: {:?}", e),
    }
}
