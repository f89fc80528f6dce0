//! Append-only store records and the session continuity token.

use serde::{Deserialize, Serialize};

use super::Language;

/// Returning-user token persisted after name entry. Lets a user skip
/// re-verification within the validity window.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContinuityRecord {
    pub email: String,
    pub name: String,
    /// Unix timestamp (seconds) at which the record was issued.
    pub timestamp: i64,
}

/// One leaderboard row per completed quiz.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LeaderboardEntry {
    pub name: String,
    pub score: i64,
    pub category: String,
    /// Local wall-clock time, "YYYY-MM-DD HH:MM:SS".
    pub timestamp: String,
    pub language: Language,
}

/// A user-contributed question, stored as submitted. The answer text is
/// free-form and intentionally not checked against the options.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SuggestionRecord {
    pub question: String,
    pub options: Vec<String>,
    pub answer: String,
    pub language: Language,
}
