//! User statistics store, keyed by email.

use std::collections::HashMap;

use super::{JsonStore, StoreError};
use crate::domain::UserStats;

type StatsMap = HashMap<String, UserStats>;

/// Load one user's stats, zeroed if the user has no record yet.
pub fn load_user_stats(store: &JsonStore, email: &str) -> UserStats {
    let all: StatsMap = store.read_object();
    all.get(email).cloned().unwrap_or_default()
}

/// Write one user's stats back, preserving every other user's record.
pub fn save_user_stats(store: &JsonStore, email: &str, stats: &UserStats) -> Result<(), StoreError> {
    store.update(|all: &mut StatsMap| {
        all.insert(email.to_string(), stats.clone());
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_unknown_user_gets_zeroed_stats() {
        let temp = TempDir::new().unwrap();
        let store = JsonStore::new(temp.path().join("user_stats.json"));

        let stats = load_user_stats(&store, "new@example.com");
        assert_eq!(stats, UserStats::default());
    }

    #[test]
    fn test_save_and_reload() {
        let temp = TempDir::new().unwrap();
        let store = JsonStore::new(temp.path().join("user_stats.json"));

        let stats = UserStats {
            quizzes_played: 2,
            total_score: 15,
            ..Default::default()
        };
        save_user_stats(&store, "a@example.com", &stats).unwrap();

        assert_eq!(load_user_stats(&store, "a@example.com"), stats);
    }

    #[test]
    fn test_save_keeps_other_users() {
        let temp = TempDir::new().unwrap();
        let store = JsonStore::new(temp.path().join("user_stats.json"));

        let first = UserStats {
            quizzes_played: 1,
            ..Default::default()
        };
        let second = UserStats {
            quizzes_played: 7,
            ..Default::default()
        };
        save_user_stats(&store, "a@example.com", &first).unwrap();
        save_user_stats(&store, "b@example.com", &second).unwrap();

        assert_eq!(load_user_stats(&store, "a@example.com"), first);
        assert_eq!(load_user_stats(&store, "b@example.com"), second);
    }

    #[test]
    fn test_corrupt_store_resets_silently() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("user_stats.json");
        std::fs::write(&path, "{{{").unwrap();

        let store = JsonStore::new(&path);
        assert_eq!(load_user_stats(&store, "a@example.com"), UserStats::default());
    }
}
