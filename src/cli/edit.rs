use std::io::{self, Write};

use crate::{
    editor::{self, Decision},
    error, info,
    management::LedgerManager,
    success, utils, warning,
};

/// Interactively prunes a playlist's ledger entries before download.
///
/// The edited list is persisted only after the full pass completes; an
/// interrupted pass leaves the stored record unchanged.
pub async fn edit(playlist: String) {
    let playlist_id = utils::parse_playlist_id(&playlist);

    let mut ledger = match LedgerManager::open().load().await {
        Ok(ledger) => ledger,
        Err(e) => error!("Cannot read ledger. Err: {:?}", e),
    };

    let record = match ledger.get(&playlist_id) {
        Some(record) => record.clone(),
        None => error!(
            "No ledger record for playlist {}. Run spladl resolve first.",
            playlist_id
        ),
    };

    info!(
        "Reviewing {} albums. Answer n to drop an entry, anything else keeps it.",
        record.entries.len()
    );

    let result = editor::review(&record.entries, |album| {
        print!("Keep {} - {}? [Y/n] ", album.artist, album.name);
        io::stdout().flush()?;

        let mut line = String::new();
        if io::stdin().read_line(&mut line)? == 0 {
            // EOF mid-pass counts as an interruption, not a decision.
            return Err(io::Error::new(io::ErrorKind::UnexpectedEof, "input closed"));
        }

        Ok(Decision::parse(&line))
    });

    match result {
        Ok(kept) => {
            let dropped = record.entries.len() - kept.len();
            match ledger.replace_entries(&playlist_id, kept).await {
                Ok(_) => success!("Edit saved. Dropped {} entries.", dropped),
                Err(e) => error!("Cannot write ledger. Err: {:?}", e),
            }
        }
        Err(e) => warning!("Edit aborted, ledger left unchanged. Err: {}", e),
    }
}
