use std::{
    path::{Path, PathBuf},
    time::Duration,
};

use async_trait::async_trait;
use tokio::{process::Command, time::timeout};

use crate::{config, download::Downloader, warning};

/// Downloader backed by the external `spotdl` binary.
///
/// Invokes `spotdl <album_url> --output <dir>` per album, bounded by the
/// configured timeout. The child is killed if the timeout expires.
pub struct SpotdlRunner {
    binary_path: PathBuf,
    timeout: Duration,
}

impl SpotdlRunner {
    pub fn new(binary_path: PathBuf, timeout: Duration) -> Self {
        Self {
            binary_path,
            timeout,
        }
    }

    /// Locates the configured downloader binary in PATH.
    ///
    /// Returns `None` when the binary cannot be found.
    pub fn from_env() -> Option<Self> {
        which::which(config::downloader_bin())
            .ok()
            .map(|path| Self::new(path, Duration::from_secs(config::download_timeout_secs())))
    }
}

#[async_trait]
impl Downloader for SpotdlRunner {
    async fn fetch_album(&self, url: &str, output_dir: &Path) -> bool {
        let mut command = Command::new(&self.binary_path);
        command
            .arg(url)
            .arg("--output")
            .arg(output_dir)
            .kill_on_drop(true);

        match timeout(self.timeout, command.output()).await {
            Ok(Ok(output)) => {
                if !output.status.success() {
                    warning!("Downloader exited with {} for {}.", output.status, url);
                }
                output.status.success()
            }
            Ok(Err(e)) => {
                warning!("Failed to execute downloader: {}", e);
                false
            }
            Err(_) => {
                warning!(
                    "Downloader timed out after {} seconds for {}.",
                    self.timeout.as_secs(),
                    url
                );
                false
            }
        }
    }
}
