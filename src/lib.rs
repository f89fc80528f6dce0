pub mod bank;
pub mod config;
pub mod domain;
pub mod engine;
pub mod handlers;
pub mod mailer;
pub mod otp;
pub mod paths;
pub mod progress;
pub mod session;
pub mod state;
pub mod store;

use axum::{routing::get, routing::post, Router};
use tower_http::trace::TraceLayer;

use crate::state::AppState;

/// Build the application router. Routes correspond 1:1 to screen actions.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/state", get(handlers::current_state))
        .route("/email", post(handlers::submit_email))
        .route("/code", post(handlers::submit_code))
        .route("/name", post(handlers::submit_name))
        .route("/language", post(handlers::switch_language))
        .route("/category", post(handlers::choose_category))
        .route("/start", post(handlers::start_quiz))
        .route("/answer", post(handlers::submit_answer))
        .route("/quit", post(handlers::request_quit))
        .route("/quit/confirm", post(handlers::confirm_quit))
        .route("/quit/cancel", post(handlers::cancel_quit))
        .route("/home", post(handlers::go_home))
        .route("/suggest/open", post(handlers::open_suggest))
        .route("/suggest", post(handlers::submit_suggestion))
        .route("/logout", post(handlers::logout))
        .route("/leaderboard", get(handlers::leaderboard))
        .route("/stats", get(handlers::dashboard))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
