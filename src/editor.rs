use std::io;

use crate::types::{AlbumEntry, AlbumRef};

/// Operator verdict for a single ledger entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Decision {
    Keep,
    Drop,
}

impl Decision {
    /// Parses a prompt answer. Only an explicit "n"/"no" drops the entry;
    /// everything else, including an empty answer, keeps it.
    pub fn parse(answer: &str) -> Decision {
        match answer.trim().to_lowercase().as_str() {
            "n" | "no" => Decision::Drop,
            _ => Decision::Keep,
        }
    }
}

/// Runs one review pass over a record's entries.
///
/// Each entry is offered to `ask` in original order; kept entries land in
/// the output list in the same relative order. The pass filters a snapshot
/// rather than removing from the list under iteration, so consecutive drops
/// never skip the following entry.
///
/// Any error from `ask` aborts the whole pass: the caller gets the error
/// and must leave the stored record untouched, making the edit
/// all-or-nothing.
pub fn review<F>(entries: &[AlbumEntry], mut ask: F) -> io::Result<Vec<AlbumEntry>>
where
    F: FnMut(&AlbumRef) -> io::Result<Decision>,
{
    let mut kept = Vec::with_capacity(entries.len());

    for entry in entries {
        match ask(&entry.album)? {
            Decision::Keep => kept.push(entry.clone()),
            Decision::Drop => {}
        }
    }

    Ok(kept)
}
