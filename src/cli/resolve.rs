use std::time::Duration;

use indicatif::{ProgressBar, ProgressStyle};

use crate::{
    error,
    management::{CredentialManager, LedgerManager},
    resolve::Resolver,
    spotify::CatalogClient,
    success, utils, warning,
};

/// Resolves a playlist into its album set and writes the ledger record.
pub async fn resolve(playlist: String) {
    let playlist_id = utils::parse_playlist_id(&playlist);

    let credentials = CredentialManager::load().await;
    let Some((client_id, client_secret)) = credentials.pair() else {
        error!("No cached credentials. Run spladl auth first.");
    };

    let mut client = match CatalogClient::connect(client_id, client_secret).await {
        Ok(client) => client,
        Err(e) => error!("Cannot authenticate against the Spotify API. Err: {}", e),
    };

    let pb = ProgressBar::new_spinner();
    pb.set_message(format!("Resolving playlist {}...", playlist_id));
    pb.enable_steady_tick(Duration::from_millis(100));
    pb.set_style(
        ProgressStyle::with_template("{spinner:.blue} {msg}")
            .unwrap()
            .tick_chars("⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏"),
    );

    let resolution = Resolver::default().resolve(&mut client, &playlist_id).await;
    pb.finish_and_clear();

    if let Some(e) = &resolution.error {
        warning!(
            "Playlist fetch stopped early: {}. Keeping the {} albums resolved so far.",
            e,
            resolution.albums.len()
        );
    }

    if resolution.albums.is_empty() {
        warning!("No albums resolved for playlist {}.", playlist_id);
        return;
    }

    let mut ledger = match LedgerManager::open().load().await {
        Ok(ledger) => ledger,
        Err(e) => error!("Cannot read ledger. Err: {:?}", e),
    };

    let count = resolution.albums.len();
    match ledger.write_record(&playlist_id, resolution.albums).await {
        Ok(_) => success!(
            "Resolved {} albums for playlist {}. Run spladl edit or spladl download next.",
            count,
            playlist_id
        ),
        Err(e) => error!("Cannot write ledger. Err: {:?}", e),
    }
}
