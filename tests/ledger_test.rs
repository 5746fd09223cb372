use spladl::management::LedgerManager;
use spladl::types::AlbumRef;
use tempfile::tempdir;

// Helper function to create a test album
fn album(url: &str, name: &str, artist: &str) -> AlbumRef {
    AlbumRef {
        url: url.to_string(),
        name: name.to_string(),
        artist: artist.to_string(),
    }
}

#[tokio::test]
async fn write_then_read_round_trips() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("ledger.json");

    let mut ledger = LedgerManager::at(path.clone());
    ledger
        .write_record(
            "p1",
            vec![album("u1", "A1", "X"), album("u2", "A2", "Y")],
        )
        .await
        .unwrap();

    let reloaded = LedgerManager::at(path).load().await.unwrap();
    let record = reloaded.get("p1").unwrap();

    assert_eq!(record.playlist_id, "p1");
    assert_eq!(record.entries.len(), 2);
    assert!(record.entries.iter().all(|e| !e.downloaded));
    // insertion order survives the round trip
    assert_eq!(record.entries[0].album.url, "u1");
    assert_eq!(record.entries[1].album.url, "u2");
    assert_eq!(record.entries[1].album.name, "A2");
    assert_eq!(record.entries[1].album.artist, "Y");
}

#[tokio::test]
async fn rewrite_discards_prior_download_flags() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("ledger.json");

    let mut ledger = LedgerManager::at(path.clone());
    ledger
        .write_record(
            "p1",
            vec![album("u1", "A1", "X"), album("u2", "A2", "Y")],
        )
        .await
        .unwrap();
    ledger.mark_downloaded("p1", "u1").await.unwrap();

    // re-resolution overwrites the record wholesale
    ledger
        .write_record(
            "p1",
            vec![album("u1", "A1", "X"), album("u2", "A2", "Y")],
        )
        .await
        .unwrap();

    let reloaded = LedgerManager::at(path).load().await.unwrap();
    let record = reloaded.get("p1").unwrap();
    assert!(record.entries.iter().all(|e| !e.downloaded));
}

#[tokio::test]
async fn mutation_keeps_other_playlists_intact() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("ledger.json");

    let mut ledger = LedgerManager::at(path.clone());
    ledger
        .write_record("p1", vec![album("u1", "A1", "X")])
        .await
        .unwrap();
    ledger
        .write_record("p2", vec![album("u2", "A2", "Y")])
        .await
        .unwrap();
    ledger.mark_downloaded("p1", "u1").await.unwrap();

    let reloaded = LedgerManager::at(path).load().await.unwrap();
    assert!(reloaded.get("p1").unwrap().entries[0].downloaded);

    let other = reloaded.get("p2").unwrap();
    assert_eq!(other.entries.len(), 1);
    assert!(!other.entries[0].downloaded);
}

#[tokio::test]
async fn mutating_an_unknown_playlist_writes_nothing() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("ledger.json");

    let mut ledger = LedgerManager::at(path.clone());
    ledger.mark_downloaded("nope", "u1").await.unwrap();
    ledger
        .replace_entries("nope", Vec::new())
        .await
        .unwrap();

    // no record, no write: the ledger file is never created
    assert!(!path.exists());
}

#[tokio::test]
async fn missing_file_loads_as_empty_ledger() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("does-not-exist.json");

    let ledger = LedgerManager::at(path).load().await.unwrap();
    assert!(ledger.records().is_empty());
}

#[tokio::test]
async fn malformed_file_loads_as_empty_ledger() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("ledger.json");
    std::fs::write(&path, "this is not json {{{").unwrap();

    let ledger = LedgerManager::at(path.clone()).load().await.unwrap();
    assert!(ledger.records().is_empty());
}

#[tokio::test]
async fn malformed_file_recovers_by_overwrite() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("ledger.json");
    std::fs::write(&path, "[1, 2, oops").unwrap();

    let mut ledger = LedgerManager::at(path.clone()).load().await.unwrap();
    ledger
        .write_record("p1", vec![album("u1", "A1", "X")])
        .await
        .unwrap();

    let reloaded = LedgerManager::at(path).load().await.unwrap();
    assert_eq!(reloaded.get("p1").unwrap().entries.len(), 1);
}
