//! The per-user session value.

use chrono::{DateTime, Utc};

use crate::config::{self, VariantConfig};
use crate::domain::{Language, ResolvedQuestion, UserStats};

/// Screen the session is currently on. The flow is linear with two branch
/// points (quit back to Category, and Summary forking to Suggest).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    Email,
    Code,
    Name,
    Category,
    ChooseCount,
    Quiz,
    Summary,
    Suggest,
}

impl Stage {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Email => "email",
            Self::Code => "code",
            Self::Name => "name",
            Self::Category => "category",
            Self::ChooseCount => "choose_count",
            Self::Quiz => "quiz",
            Self::Summary => "summary",
            Self::Suggest => "suggest",
        }
    }
}

/// One question drawn for the current attempt. The display order is a
/// per-attempt permutation; the canonical question is never mutated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PreparedQuestion {
    pub question: ResolvedQuestion,
    pub shuffled_options: Vec<String>,
}

/// One user's progress through the screens.
#[derive(Debug, Clone)]
pub struct Session {
    pub stage: Stage,
    pub variant: VariantConfig,
    pub language: Language,
    pub email: String,
    pub name: String,
    pub verified: bool,
    /// Issued one-time code; lives only here, never on disk.
    pub issued_code: Option<String>,
    pub category: String,
    pub questions: Vec<PreparedQuestion>,
    pub question_count: usize,
    pub index: usize,
    pub score: usize,
    pub quiz_started_at: Option<DateTime<Utc>>,
    pub question_started_at: Option<DateTime<Utc>>,
    pub confirm_quit: bool,
    pub stats: Option<UserStats>,
}

impl Session {
    pub fn new(variant: VariantConfig) -> Self {
        Self {
            stage: Stage::Email,
            variant,
            language: Language::default(),
            email: String::new(),
            name: String::new(),
            verified: false,
            issued_code: None,
            category: String::new(),
            questions: Vec::new(),
            question_count: config::QUESTION_COUNT_DEFAULT,
            index: 0,
            score: 0,
            quiz_started_at: None,
            question_started_at: None,
            confirm_quit: false,
            stats: None,
        }
    }

    /// Session restored from a valid continuity record: verification is
    /// skipped and the user lands on the category screen.
    pub fn resumed(variant: VariantConfig, email: String, name: String, stats: UserStats) -> Self {
        Self {
            stage: Stage::Category,
            email,
            name,
            verified: true,
            stats: Some(stats),
            ..Self::new(variant)
        }
    }

    pub fn current_question(&self) -> Option<&PreparedQuestion> {
        self.questions.get(self.index)
    }

    /// Completion is detected by the index reaching the configured count.
    pub fn quiz_finished(&self) -> bool {
        self.index >= self.question_count
    }

    /// Drop all per-attempt state (used on quit and when going home).
    pub(crate) fn reset_quiz(&mut self) {
        self.questions.clear();
        self.index = 0;
        self.score = 0;
        self.quiz_started_at = None;
        self.question_started_at = None;
        self.confirm_quit = false;
    }
}
