//! Project path functions - single source of truth for all file paths.
//!
//! This module centralizes path definitions to avoid hardcoded strings
//! scattered throughout the codebase.
//!
//! ## Environment Variables
//!
//! - `DATA_DIR`: Override the base data directory (default: "data")
//!
//! This allows running isolated instances side by side:
//! ```bash
//! DATA_DIR=data/test/flow cargo run
//! ```

use std::env;
use std::sync::OnceLock;

/// Lazily initialized data directory from DATA_DIR env var
static DATA_DIR_VALUE: OnceLock<String> = OnceLock::new();

/// Get the base data directory (from DATA_DIR env var or default "data")
pub fn data_dir() -> &'static str {
    DATA_DIR_VALUE.get_or_init(|| env::var("DATA_DIR").unwrap_or_else(|_| "data".to_string()))
}

/// Per-user cumulative statistics, keyed by email
pub fn user_stats_path() -> String {
    format!("{}/user_stats.json", data_dir())
}

/// Append-only leaderboard log
pub fn leaderboard_path() -> String {
    format!("{}/leaderboard.json", data_dir())
}

/// Append-only suggestion log (newline-delimited JSON)
pub fn suggestions_path() -> String {
    format!("{}/suggestions.json", data_dir())
}

/// Returning-user continuity record
pub fn continuity_path() -> String {
    format!("{}/user_session.json", data_dir())
}

/// Directory of category question files (one JSON file per category)
pub fn quizdata_dir() -> String {
    format!("{}/quizdata", data_dir())
}

// ==================== Tests ====================

#[cfg(test)]
mod tests {
    use super::*;

    // Note: We can't easily test env var override because OnceLock
    // initializes once. These tests verify the default behavior.

    #[test]
    fn test_data_dir_default() {
        let dir = data_dir();
        assert!(!dir.is_empty());
    }

    #[test]
    fn test_store_path_formats() {
        assert!(user_stats_path().ends_with("/user_stats.json"));
        assert!(leaderboard_path().ends_with("/leaderboard.json"));
        assert!(suggestions_path().ends_with("/suggestions.json"));
        assert!(continuity_path().ends_with("/user_session.json"));
    }

    #[test]
    fn test_quizdata_dir() {
        assert!(quizdata_dir().ends_with("/quizdata"));
    }
}
