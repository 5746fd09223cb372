use std::{collections::HashSet, time::Duration};

use tokio::time::sleep;

use crate::{
    config,
    spotify::{CatalogError, CatalogSource},
    types::AlbumRef,
};

/// Fixed page size for playlist track requests.
pub const PAGE_SIZE: u32 = 30;

/// Outcome of resolving one playlist.
///
/// When an upstream error interrupts pagination, everything accumulated up
/// to that point is kept and the error is carried alongside instead of
/// discarding the partial result.
pub struct Resolution {
    pub albums: Vec<AlbumRef>,
    pub error: Option<CatalogError>,
}

impl Resolution {
    pub fn is_partial(&self) -> bool {
        self.error.is_some()
    }
}

/// Turns a playlist into its deduplicated album set via pagination.
pub struct Resolver {
    page_size: u32,
    page_delay: Duration,
}

impl Resolver {
    pub fn new(page_size: u32, page_delay: Duration) -> Self {
        Self {
            page_size,
            page_delay,
        }
    }

    /// Pages through the playlist and collects album identities.
    ///
    /// Albums are deduplicated by URL while keeping first-seen order. The
    /// loop ends on an empty page, once the offset reaches the reported
    /// total, or on an upstream error (partial result, see [`Resolution`]).
    /// A fixed delay separates page requests to respect upstream rate
    /// limits.
    pub async fn resolve(
        &self,
        source: &mut impl CatalogSource,
        playlist_id: &str,
    ) -> Resolution {
        let mut albums: Vec<AlbumRef> = Vec::new();
        let mut seen: HashSet<String> = HashSet::new();
        let mut offset: u32 = 0;

        loop {
            let page = match source
                .playlist_page(playlist_id, offset, self.page_size)
                .await
            {
                Ok(page) => page,
                Err(e) => {
                    return Resolution {
                        albums,
                        error: Some(e),
                    };
                }
            };

            if page.items.is_empty() {
                break; // no more tracks to fetch
            }

            for item in &page.items {
                let Some(track) = &item.track else {
                    continue; // local or removed track without album data
                };
                let Some(url) = track.album.external_urls.spotify.clone() else {
                    continue;
                };

                if seen.insert(url.clone()) {
                    albums.push(AlbumRef {
                        url,
                        name: track.album.name.clone(),
                        artist: track
                            .album
                            .artists
                            .first()
                            .map(|a| a.name.clone())
                            .unwrap_or_default(),
                    });
                }
            }

            offset += self.page_size;
            if offset >= page.total {
                break;
            }

            if !self.page_delay.is_zero() {
                sleep(self.page_delay).await;
            }
        }

        Resolution {
            albums,
            error: None,
        }
    }
}

impl Default for Resolver {
    fn default() -> Self {
        Self::new(PAGE_SIZE, Duration::from_millis(config::page_delay_ms()))
    }
}
