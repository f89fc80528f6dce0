//! Application state passed to all handlers.

use crate::bank::QuestionBank;
use crate::config::VariantConfig;
use crate::mailer::Mailer;
use crate::store::Stores;

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    /// JSON-backed named stores (stats, leaderboard, suggestions, continuity)
    pub stores: Stores,

    /// Question bank over the quizdata directory
    pub bank: QuestionBank,

    /// One-time-code transport
    pub mailer: Mailer,

    /// Behavioral variant knobs (timer, bilingual)
    pub variant: VariantConfig,
}

impl AppState {
    pub fn new(stores: Stores, bank: QuestionBank, mailer: Mailer, variant: VariantConfig) -> Self {
        Self {
            stores,
            bank,
            mailer,
            variant,
        }
    }
}
