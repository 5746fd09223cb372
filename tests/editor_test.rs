use std::io;

use spladl::editor::{Decision, review};
use spladl::management::LedgerManager;
use spladl::types::{AlbumEntry, AlbumRef};
use tempfile::tempdir;

// Helper function to create a test entry
fn entry(url: &str, name: &str) -> AlbumEntry {
    AlbumEntry {
        album: AlbumRef {
            url: url.to_string(),
            name: name.to_string(),
            artist: "Artist".to_string(),
        },
        downloaded: false,
    }
}

fn entries(count: usize) -> Vec<AlbumEntry> {
    (1..=count)
        .map(|i| entry(&format!("u{}", i), &format!("Album {}", i)))
        .collect()
}

fn scripted(decisions: Vec<Decision>) -> impl FnMut(&AlbumRef) -> io::Result<Decision> {
    let mut iter = decisions.into_iter();
    move |_| Ok(iter.next().unwrap())
}

#[test]
fn dropping_two_of_five_preserves_order() {
    use Decision::{Drop, Keep};
    let input = entries(5);

    let kept = review(&input, scripted(vec![Keep, Drop, Keep, Drop, Keep])).unwrap();

    assert_eq!(kept.len(), 3);
    assert_eq!(kept[0].album.url, "u1");
    assert_eq!(kept[1].album.url, "u3");
    assert_eq!(kept[2].album.url, "u5");
}

#[test]
fn consecutive_drops_do_not_skip_the_next_entry() {
    // Removing from the list under iteration would skip u3 after dropping
    // u2; filtering a snapshot must still offer every entry.
    use Decision::{Drop, Keep};
    let input = entries(4);
    let mut offered = Vec::new();

    let mut iter = vec![Keep, Drop, Drop, Keep].into_iter();
    let kept = review(&input, |album| {
        offered.push(album.url.clone());
        Ok(iter.next().unwrap())
    })
    .unwrap();

    assert_eq!(offered, vec!["u1", "u2", "u3", "u4"]);
    assert_eq!(kept.len(), 2);
    assert_eq!(kept[0].album.url, "u1");
    assert_eq!(kept[1].album.url, "u4");
}

#[test]
fn keeping_everything_returns_the_full_list() {
    let input = entries(3);
    let kept = review(&input, |_| Ok(Decision::Keep)).unwrap();
    assert_eq!(kept, input);
}

#[test]
fn prompt_error_aborts_the_whole_pass() {
    let input = entries(3);
    let mut asked = 0;

    let result = review(&input, |_| {
        asked += 1;
        if asked == 2 {
            Err(io::Error::new(io::ErrorKind::UnexpectedEof, "input closed"))
        } else {
            Ok(Decision::Keep)
        }
    });

    // the caller gets no partial list to persist
    assert!(result.is_err());
    assert_eq!(asked, 2);
}

#[tokio::test]
async fn aborted_edit_leaves_the_stored_record_untouched() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("ledger.json");

    let mut ledger = LedgerManager::at(path.clone());
    ledger
        .write_record("p1", entries(3).into_iter().map(|e| e.album).collect())
        .await
        .unwrap();
    let before = std::fs::read(&path).unwrap();

    // same flow as the edit command: review first, persist only on success
    let record = ledger.get("p1").unwrap().clone();
    let mut asked = 0;
    let result = review(&record.entries, |_| {
        asked += 1;
        if asked == 2 {
            Err(io::Error::new(io::ErrorKind::UnexpectedEof, "input closed"))
        } else {
            Ok(Decision::Drop)
        }
    });

    if let Ok(kept) = result {
        ledger.replace_entries("p1", kept).await.unwrap();
    }

    let after = std::fs::read(&path).unwrap();
    assert_eq!(before, after);
}

#[test]
fn parse_only_drops_on_explicit_no() {
    assert_eq!(Decision::parse("n"), Decision::Drop);
    assert_eq!(Decision::parse("N"), Decision::Drop);
    assert_eq!(Decision::parse("no\n"), Decision::Drop);
    assert_eq!(Decision::parse(" NO "), Decision::Drop);

    assert_eq!(Decision::parse(""), Decision::Keep);
    assert_eq!(Decision::parse("\n"), Decision::Keep);
    assert_eq!(Decision::parse("y"), Decision::Keep);
    assert_eq!(Decision::parse("yes"), Decision::Keep);
    assert_eq!(Decision::parse("nope?"), Decision::Keep);
}
