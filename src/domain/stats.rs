//! Cumulative per-user statistics.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Per-category slice of a user's statistics.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryStats {
    pub attempts: i64,
    pub total_score: i64,
    pub highest_score: i64,
}

impl CategoryStats {
    pub fn average_score(&self) -> f64 {
        if self.attempts > 0 {
            self.total_score as f64 / self.attempts as f64
        } else {
            0.0
        }
    }
}

/// Cumulative statistics for one user, keyed by email in the stats store.
///
/// Mutated only by the progress aggregator at quiz completion.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UserStats {
    pub quizzes_played: i64,
    pub total_score: i64,
    /// Total quiz time in seconds.
    pub time_spent: i64,
    #[serde(default)]
    pub categories: HashMap<String, CategoryStats>,
    #[serde(default)]
    pub achievements: Vec<String>,
    pub last_played: Option<NaiveDate>,
    pub streak: i64,
}

impl UserStats {
    pub fn has_achievement(&self, id: &str) -> bool {
        self.achievements.iter().any(|a| a == id)
    }

    /// Number of distinct categories the user has played.
    pub fn categories_played(&self) -> usize {
        self.categories.len()
    }

    pub fn minutes_spent(&self) -> i64 {
        self.time_spent / 60
    }
}
