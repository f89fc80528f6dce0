//! HTTP handlers for the screen flow and read-only views.

mod flow;
mod views;

pub use flow::{
    cancel_quit, choose_category, confirm_quit, current_state, dashboard, go_home, leaderboard,
    logout, open_suggest, request_quit, start_quiz, submit_answer, submit_code, submit_email,
    submit_name, submit_suggestion, switch_language,
};
pub use views::{
    AchievementView, CategoryPerformanceView, CountChoicesView, DashboardView, NoticeView,
    QuestionView, ScoreView, ScreenView,
};
