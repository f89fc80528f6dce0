//! Append-only leaderboard log.

use super::{JsonStore, StoreError};
use crate::domain::LeaderboardEntry;

/// Append one completed-quiz entry to the log.
pub fn append_entry(store: &JsonStore, entry: LeaderboardEntry) -> Result<(), StoreError> {
    store.update(|all: &mut Vec<LeaderboardEntry>| {
        all.push(entry);
    })
}

/// Top entries by score for display, highest first. Ties keep insertion
/// order (earlier entry ranks higher).
pub fn top_entries(store: &JsonStore, limit: usize) -> Vec<LeaderboardEntry> {
    let mut all: Vec<LeaderboardEntry> = store.read_object();
    all.sort_by(|a, b| b.score.cmp(&a.score));
    all.truncate(limit);
    all
}
