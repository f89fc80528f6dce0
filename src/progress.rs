//! Quiz-completion aggregation: cumulative stats, streaks, achievements.
//!
//! The fold is a pure function of the prior stats and the completed quiz;
//! the wrapper handles loading, today's date, and persistence.

use chrono::{Local, NaiveDate};

use crate::domain::UserStats;
use crate::store::{self, JsonStore, StoreError};

/// Questions-per-quiz baseline assumed by the high-score predicate,
/// regardless of the configured question count.
const HIGH_SCORE_BASELINE: f64 = 10.0;

/// Fold one completed quiz into cumulative stats.
pub fn fold_quiz_result(
    mut stats: UserStats,
    category: &str,
    score: i64,
    question_count: i64,
    time_taken_secs: i64,
    today: NaiveDate,
    total_categories: usize,
) -> UserStats {
    let score = score.clamp(0, question_count);

    stats.quizzes_played += 1;
    stats.total_score += score;
    stats.time_spent += time_taken_secs;

    let bucket = stats.categories.entry(category.to_string()).or_default();
    bucket.attempts += 1;
    bucket.total_score += score;
    if score > bucket.highest_score {
        bucket.highest_score = score;
    }

    stats.streak = match stats.last_played {
        Some(last) => {
            let gap = (today - last).num_days();
            if gap == 1 {
                stats.streak + 1
            } else if gap > 1 {
                1
            } else {
                // Same-day repeat keeps the streak
                stats.streak
            }
        }
        None => 1,
    };
    stats.last_played = Some(today);

    // Full re-evaluation each time; merging is a set union, so an already
    // earned achievement is a no-op and none is ever revoked.
    for id in evaluate_achievements(&stats, total_categories) {
        if !stats.has_achievement(id) {
            stats.achievements.push(id.to_string());
        }
    }

    stats
}

/// Achievement predicates over the current stats.
pub fn evaluate_achievements(stats: &UserStats, total_categories: usize) -> Vec<&'static str> {
    let mut earned = Vec::new();

    if stats.quizzes_played == 1 {
        earned.push("first_quiz");
    }

    if stats
        .categories
        .values()
        .any(|c| c.highest_score as f64 >= 0.9 * c.attempts as f64 * HIGH_SCORE_BASELINE)
    {
        earned.push("high_score");
    }

    if total_categories > 0 && stats.categories_played() >= total_categories {
        earned.push("category_master");
    }

    if stats.streak >= 3 {
        earned.push("streak_3");
    }
    if stats.streak >= 7 {
        earned.push("streak_7");
    }

    earned
}

/// Fold a completed quiz into the user's persisted stats.
///
/// Returns the updated stats plus any write error separately: the
/// in-memory result stands even when persistence fails.
pub fn record_completion(
    stats_store: &JsonStore,
    email: &str,
    category: &str,
    score: i64,
    question_count: i64,
    time_taken_secs: i64,
    total_categories: usize,
) -> (UserStats, Option<StoreError>) {
    let current = store::stats::load_user_stats(stats_store, email);
    let today = Local::now().date_naive();
    let updated = fold_quiz_result(
        current,
        category,
        score,
        question_count,
        time_taken_secs,
        today,
        total_categories,
    );
    let err = store::stats::save_user_stats(stats_store, email, &updated).err();
    (updated, err)
}
