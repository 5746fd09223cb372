use std::hash::{Hash, Hasher};

use serde::{Deserialize, Serialize};
use tabled::Tabled;

/// Access token obtained via the client-credentials flow.
///
/// Client-credentials tokens carry no refresh token; an expired token is
/// simply re-requested with the cached client id and secret.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Token {
    pub access_token: String,
    pub expires_in: u64,
    pub obtained_at: u64,
}

/// Identity of a resolved album.
///
/// Equality and hashing go by `url` alone, the natural catalog identity.
/// `name` and `artist` are display metadata only.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AlbumRef {
    pub url: String,
    pub name: String,
    pub artist: String,
}

impl PartialEq for AlbumRef {
    fn eq(&self, other: &Self) -> bool {
        self.url == other.url
    }
}

impl Eq for AlbumRef {}

impl Hash for AlbumRef {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.url.hash(state);
    }
}

/// One ledger line: an album plus its download-completion flag.
///
/// The flag only ever flips from false to true; it is never reverted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AlbumEntry {
    pub album: AlbumRef,
    pub downloaded: bool,
}

/// The durable per-playlist record of resolved albums.
///
/// Re-resolving a playlist fully overwrites the prior record, including
/// any accumulated `downloaded` flags.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlaylistRecord {
    pub playlist_id: String,
    pub resolved_at: String,
    pub entries: Vec<AlbumEntry>,
}

/// One page of a playlist's tracks as returned by the Web API.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlaylistPage {
    pub items: Vec<TrackItem>,
    pub total: u32,
}

/// A playlist item. `track` can be null for local or removed tracks.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrackItem {
    pub track: Option<PlaylistTrack>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlaylistTrack {
    pub album: TrackAlbum,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrackAlbum {
    pub name: String,
    pub artists: Vec<AlbumArtist>,
    pub external_urls: ExternalUrls,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AlbumArtist {
    pub name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExternalUrls {
    pub spotify: Option<String>,
}

#[derive(Tabled)]
pub struct RecordTableRow {
    pub playlist: String,
    pub resolved: String,
    pub albums: usize,
    pub pending: usize,
}

#[derive(Tabled)]
pub struct EntryTableRow {
    pub status: String,
    pub name: String,
    pub artist: String,
}
