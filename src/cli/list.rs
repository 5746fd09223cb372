use tabled::Table;

use crate::{
    error, info,
    management::LedgerManager,
    types::{EntryTableRow, RecordTableRow},
    utils, warning,
};

/// Lists ledger records, or the entries of one playlist's record.
pub async fn list(playlist: Option<String>) {
    let ledger = match LedgerManager::open().load().await {
        Ok(ledger) => ledger,
        Err(e) => error!("Cannot read ledger. Err: {:?}", e),
    };

    match playlist {
        Some(playlist) => {
            let playlist_id = utils::parse_playlist_id(&playlist);
            let Some(record) = ledger.get(&playlist_id) else {
                warning!("No ledger record for playlist {}.", playlist_id);
                return;
            };

            info!(
                "Playlist {} resolved at {}.",
                record.playlist_id, record.resolved_at
            );

            let rows: Vec<EntryTableRow> = record
                .entries
                .iter()
                .map(|e| EntryTableRow {
                    status: if e.downloaded { "done" } else { "pending" }.to_string(),
                    name: e.album.name.clone(),
                    artist: e.album.artist.clone(),
                })
                .collect();

            let table = Table::new(rows);
            println!("{}", table);
        }
        None => {
            if ledger.records().is_empty() {
                info!("Ledger is empty. Run spladl resolve <playlist> first.");
                return;
            }

            let mut rows: Vec<RecordTableRow> = ledger
                .records()
                .values()
                .map(|r| RecordTableRow {
                    playlist: r.playlist_id.clone(),
                    resolved: r.resolved_at.clone(),
                    albums: r.entries.len(),
                    pending: r.entries.iter().filter(|e| !e.downloaded).count(),
                })
                .collect();

            rows.sort_by(|a, b| a.playlist.cmp(&b.playlist));

            let table = Table::new(rows);
            println!("{}", table);
        }
    }
}
