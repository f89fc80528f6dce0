//! JSON views returned to the client.

use chrono::Utc;
use serde::Serialize;

use crate::config;
use crate::domain::UserStats;
use crate::engine::{Notice, Session, Stage};
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct NoticeView {
    pub level: &'static str,
    pub message: String,
}

impl NoticeView {
    pub fn from_notice(notice: &Notice) -> Self {
        Self {
            level: notice.level(),
            message: notice.message(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            level: "error",
            message: message.into(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct QuestionView {
    /// 1-based position in the current quiz
    pub number: usize,
    pub total: usize,
    pub question: String,
    /// Display order for this attempt
    pub options: Vec<String>,
    /// Seconds left on the per-question countdown, when enabled
    pub remaining_secs: Option<i64>,
}

#[derive(Debug, Serialize)]
pub struct CountChoicesView {
    pub min: usize,
    pub max: usize,
    pub step: usize,
    pub default: usize,
}

#[derive(Debug, Serialize)]
pub struct ScoreView {
    pub score: usize,
    pub total: usize,
}

/// The current screen, rendered for the client.
#[derive(Debug, Serialize)]
pub struct ScreenView {
    pub stage: &'static str,
    pub language: &'static str,
    pub verified: bool,
    pub name: String,
    pub category: String,
    pub confirm_quit: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub categories: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub counts: Option<CountChoicesView>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub question: Option<QuestionView>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub score: Option<ScoreView>,
    pub notices: Vec<NoticeView>,
}

pub fn screen_view(state: &AppState, session: &Session, notices: Vec<NoticeView>) -> ScreenView {
    let categories = matches!(session.stage, Stage::Category | Stage::ChooseCount)
        .then(|| state.bank.list_categories());

    let counts = (session.stage == Stage::ChooseCount).then(|| CountChoicesView {
        min: config::QUESTION_COUNT_MIN,
        max: config::QUESTION_COUNT_MAX,
        step: config::QUESTION_COUNT_STEP,
        default: config::QUESTION_COUNT_DEFAULT,
    });

    let question = (session.stage == Stage::Quiz)
        .then(|| session.current_question())
        .flatten()
        .map(|prepared| {
            let remaining_secs = session.variant.question_timer_secs.map(|limit| {
                let elapsed = session
                    .question_started_at
                    .map(|started| (Utc::now() - started).num_seconds())
                    .unwrap_or(0);
                (limit - elapsed).max(0)
            });
            QuestionView {
                number: session.index + 1,
                total: session.question_count,
                question: prepared.question.question.clone(),
                options: prepared.shuffled_options.clone(),
                remaining_secs,
            }
        });

    let score = (session.stage == Stage::Summary).then(|| ScoreView {
        score: session.score.min(session.question_count),
        total: session.question_count,
    });

    ScreenView {
        stage: session.stage.as_str(),
        language: session.language.as_str(),
        verified: session.verified,
        name: session.name.clone(),
        category: session.category.clone(),
        confirm_quit: session.confirm_quit,
        categories,
        counts,
        question,
        score,
        notices,
    }
}

// ==================== Dashboard ====================

#[derive(Debug, Serialize)]
pub struct CategoryPerformanceView {
    pub category: String,
    pub attempts: i64,
    pub average_score: f64,
    pub highest_score: i64,
}

#[derive(Debug, Serialize)]
pub struct AchievementView {
    pub id: String,
    pub name: String,
    pub icon: String,
    pub desc: String,
}

#[derive(Debug, Serialize)]
pub struct DashboardView {
    pub name: String,
    pub quizzes_played: i64,
    pub total_points: i64,
    pub minutes_spent: i64,
    pub streak: i64,
    pub categories: Vec<CategoryPerformanceView>,
    pub achievements: Vec<AchievementView>,
}

pub fn dashboard_view(name: &str, stats: &UserStats) -> DashboardView {
    let mut categories: Vec<CategoryPerformanceView> = stats
        .categories
        .iter()
        .map(|(category, bucket)| CategoryPerformanceView {
            category: category.clone(),
            attempts: bucket.attempts,
            average_score: bucket.average_score(),
            highest_score: bucket.highest_score,
        })
        .collect();
    categories.sort_by(|a, b| a.category.cmp(&b.category));

    let achievements = stats
        .achievements
        .iter()
        .map(|id| match config::get_achievement_info(id) {
            Some(info) => AchievementView {
                id: info.id.to_string(),
                name: info.name.to_string(),
                icon: info.icon.to_string(),
                desc: info.desc.to_string(),
            },
            None => AchievementView {
                id: id.clone(),
                name: id.clone(),
                icon: String::new(),
                desc: String::new(),
            },
        })
        .collect();

    DashboardView {
        name: name.to_string(),
        quizzes_played: stats.quizzes_played,
        total_points: stats.total_score,
        minutes_spent: stats.minutes_spent(),
        streak: stats.streak,
        categories,
        achievements,
    }
}
