use std::collections::HashSet;

use crate::types::AlbumRef;

/// Extracts the bare playlist id from operator input.
///
/// Accepts a raw id, a `spotify:playlist:` URI, or an
/// `open.spotify.com/playlist/` share link (query parameters stripped).
pub fn parse_playlist_id(input: &str) -> String {
    let input = input.trim();

    if let Some(rest) = input.strip_prefix("spotify:playlist:") {
        return rest.to_string();
    }

    if let Some(pos) = input.find("/playlist/") {
        let rest = &input[pos + "/playlist/".len()..];
        return rest
            .split(|c| c == '?' || c == '/')
            .next()
            .unwrap_or(rest)
            .to_string();
    }

    input.to_string()
}

/// Drops albums with an already-seen URL, keeping first occurrences in order.
pub fn remove_duplicate_albums(albums: &mut Vec<AlbumRef>) {
    let mut seen_urls = HashSet::new();
    albums.retain(|album| seen_urls.insert(album.url.clone()));
}
