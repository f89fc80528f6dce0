//! Application configuration constants.
//!
//! This module centralizes all configurable values that were previously
//! hardcoded throughout the codebase.

use serde::Deserialize;

// ==================== Variant Configuration ====================

/// Configuration file structure for config.toml
#[derive(Debug, Deserialize)]
struct AppConfig {
    variant: Option<VariantSection>,
}

#[derive(Debug, Deserialize)]
struct VariantSection {
    question_timer: Option<bool>,
    question_timer_secs: Option<i64>,
    bilingual: Option<bool>,
}

/// Behavioral knobs that distinguish the deployed theme variants.
///
/// Presentation-only differences (colors, sounds) never reach the engine;
/// only the per-question countdown and bilingual content selection do.
#[derive(Debug, Clone, Copy)]
pub struct VariantConfig {
    /// Per-question countdown in seconds; None disables the timer.
    pub question_timer_secs: Option<i64>,
    /// Whether the quiz offers a language choice.
    pub bilingual: bool,
}

impl Default for VariantConfig {
    fn default() -> Self {
        Self {
            question_timer_secs: None,
            bilingual: true,
        }
    }
}

/// Load variant config with priority: config.toml > default
pub fn load_variant_config() -> VariantConfig {
    // Load .env file if present
    let _ = dotenvy::dotenv();

    let mut variant = VariantConfig::default();

    if let Ok(contents) = std::fs::read_to_string("config.toml") {
        if let Ok(config) = toml::from_str::<AppConfig>(&contents) {
            if let Some(section) = config.variant {
                let timer_enabled =
                    section.question_timer.unwrap_or(false) || section.question_timer_secs.is_some();
                if timer_enabled {
                    let secs = section
                        .question_timer_secs
                        .unwrap_or(DEFAULT_QUESTION_TIMER_SECS);
                    tracing::info!("Per-question timer enabled: {}s", secs);
                    variant.question_timer_secs = Some(secs);
                }
                if let Some(bilingual) = section.bilingual {
                    variant.bilingual = bilingual;
                }
            }
        }
    }

    variant
}

// ==================== Server Configuration ====================

/// Server address to bind to
pub const SERVER_ADDR: &str = "0.0.0.0";

/// Server port
pub const SERVER_PORT: u16 = 3000;

/// Get the full server bind address
pub fn server_bind_addr() -> String {
    format!("{}:{}", SERVER_ADDR, SERVER_PORT)
}

// ==================== Verification Configuration ====================

/// One-time code range (inclusive); codes are 4-digit numeric strings
pub const OTP_MIN: u32 = 1000;
pub const OTP_MAX: u32 = 9999;

// ==================== Session Configuration ====================

/// Idle expiration for in-memory interactive sessions, in hours
pub const SESSION_EXPIRY_HOURS: i64 = 12;

/// Probability threshold for session cleanup (0-255, lower = more frequent)
/// Value of 25 means ~10% chance (25/256) on each session access
pub const SESSION_CLEANUP_THRESHOLD: u8 = 25;

/// Validity window for the on-disk continuity record, in days
pub const CONTINUITY_EXPIRY_DAYS: i64 = 30;

// ==================== Quiz Configuration ====================

/// Question count bounds offered to the user (slider step 5)
pub const QUESTION_COUNT_MIN: usize = 5;
pub const QUESTION_COUNT_MAX: usize = 20;
pub const QUESTION_COUNT_STEP: usize = 5;
pub const QUESTION_COUNT_DEFAULT: usize = 10;

/// Default per-question countdown for timer variants, in seconds
pub const DEFAULT_QUESTION_TIMER_SECS: i64 = 30;

/// Default number of rows returned by the leaderboard view
pub const LEADERBOARD_TOP_DEFAULT: usize = 5;

// ==================== Achievement Catalog ====================

/// Achievement metadata struct
pub struct AchievementInfo {
    pub id: &'static str,
    pub name: &'static str,
    pub icon: &'static str,
    pub desc: &'static str,
}

/// All achievement definitions
pub const ACHIEVEMENTS: [AchievementInfo; 6] = [
    AchievementInfo {
        id: "first_quiz",
        name: "First Quiz",
        icon: "🥇",
        desc: "Completed your first quiz",
    },
    AchievementInfo {
        id: "high_score",
        name: "High Scorer",
        icon: "🏆",
        desc: "Scored 90% or above in any quiz",
    },
    AchievementInfo {
        id: "category_master",
        name: "Category Master",
        icon: "🎯",
        desc: "Completed all quizzes in a category",
    },
    AchievementInfo {
        id: "streak_3",
        name: "3-Day Streak",
        icon: "🔥",
        desc: "Played quizzes for 3 consecutive days",
    },
    AchievementInfo {
        id: "streak_7",
        name: "7-Day Streak",
        icon: "🚀",
        desc: "Played quizzes for 7 consecutive days",
    },
    AchievementInfo {
        id: "suggestor",
        name: "Contributor",
        icon: "💡",
        desc: "Suggested a question that was approved",
    },
];

/// Get achievement info by id
pub fn get_achievement_info(id: &str) -> Option<&'static AchievementInfo> {
    ACHIEVEMENTS.iter().find(|a| a.id == id)
}
