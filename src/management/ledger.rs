use std::{collections::HashMap, io::Error, io::ErrorKind, path::PathBuf};

use chrono::Utc;

use crate::{
    types::{AlbumEntry, AlbumRef, PlaylistRecord},
    warning,
};

#[derive(Debug)]
pub enum LedgerError {
    IoError(Error),
    SerdeError(serde_json::Error),
}

impl From<Error> for LedgerError {
    fn from(err: Error) -> Self {
        LedgerError::IoError(err)
    }
}

/// Durable mapping from playlist id to its resolved album record.
///
/// The whole ledger is one JSON file: every operation reads or writes the
/// entire mapping, and writes go through a temp file plus rename so a crash
/// never leaves a partial record behind. This is safe for one process at a
/// time only; concurrent invocations may lose each other's writes.
pub struct LedgerManager {
    path: PathBuf,
    records: HashMap<String, PlaylistRecord>,
}

impl LedgerManager {
    /// Creates a manager over an explicit ledger file path.
    pub fn at(path: PathBuf) -> Self {
        Self {
            path,
            records: HashMap::new(),
        }
    }

    /// Creates a manager over the default ledger file in the data directory.
    pub fn open() -> Self {
        Self::at(Self::default_path())
    }

    /// Reads the ledger from disk.
    ///
    /// A missing file is an empty ledger. Malformed content is logged and
    /// also treated as empty, so the next write recovers the file. Any other
    /// I/O failure is surfaced to the caller.
    pub async fn load(mut self) -> Result<Self, LedgerError> {
        match async_fs::read_to_string(&self.path).await {
            Ok(content) => match serde_json::from_str(&content) {
                Ok(records) => self.records = records,
                Err(_) => {
                    warning!("Ledger file is malformed. Starting from an empty ledger.");
                    self.records = HashMap::new();
                }
            },
            Err(e) if e.kind() == ErrorKind::NotFound => {
                self.records = HashMap::new();
            }
            Err(e) => return Err(LedgerError::IoError(e)),
        }

        Ok(self)
    }

    pub fn get(&self, playlist_id: &str) -> Option<&PlaylistRecord> {
        self.records.get(playlist_id)
    }

    pub fn records(&self) -> &HashMap<String, PlaylistRecord> {
        &self.records
    }

    /// Overwrites or creates the record for a playlist with a fresh
    /// timestamp and all entries marked pending, then persists.
    ///
    /// Prior `downloaded` flags for the playlist are discarded on purpose;
    /// re-resolution starts a record from scratch.
    pub async fn write_record(
        &mut self,
        playlist_id: &str,
        albums: Vec<AlbumRef>,
    ) -> Result<(), LedgerError> {
        let entries = albums
            .into_iter()
            .map(|album| AlbumEntry {
                album,
                downloaded: false,
            })
            .collect();

        self.records.insert(
            playlist_id.to_string(),
            PlaylistRecord {
                playlist_id: playlist_id.to_string(),
                resolved_at: Utc::now().to_rfc3339(),
                entries,
            },
        );

        self.persist().await
    }

    /// Replaces a playlist's entry list in place (keeping its timestamp)
    /// and persists. Records of other playlists are untouched; an unknown
    /// playlist id writes nothing.
    pub async fn replace_entries(
        &mut self,
        playlist_id: &str,
        entries: Vec<AlbumEntry>,
    ) -> Result<(), LedgerError> {
        let Some(record) = self.records.get_mut(playlist_id) else {
            return Ok(());
        };
        record.entries = entries;

        self.persist().await
    }

    /// Flips the download flag for one entry and persists immediately, so
    /// completed work survives a crash before the next entry. An unknown
    /// playlist id writes nothing.
    pub async fn mark_downloaded(
        &mut self,
        playlist_id: &str,
        url: &str,
    ) -> Result<(), LedgerError> {
        let Some(record) = self.records.get_mut(playlist_id) else {
            return Ok(());
        };
        if let Some(entry) = record.entries.iter_mut().find(|e| e.album.url == url) {
            entry.downloaded = true;
        }

        self.persist().await
    }

    pub async fn persist(&self) -> Result<(), LedgerError> {
        if let Some(parent) = self.path.parent() {
            async_fs::create_dir_all(parent)
                .await
                .map_err(|e| LedgerError::IoError(e))?;
        }

        let json =
            serde_json::to_string_pretty(&self.records).map_err(|e| LedgerError::SerdeError(e))?;

        // Whole-file replacement: write aside, then rename over the ledger.
        let tmp = self.path.with_extension("json.tmp");
        async_fs::write(&tmp, json)
            .await
            .map_err(|e| LedgerError::IoError(e))?;
        async_fs::rename(&tmp, &self.path)
            .await
            .map_err(|e| LedgerError::IoError(e))
    }

    fn default_path() -> PathBuf {
        let mut path = dirs::data_local_dir().unwrap_or_else(|| PathBuf::from("."));
        path.push("spladl/ledger.json");
        path
    }
}
