//! Screen-flow handlers.
//!
//! Each handler loads the caller's session, dispatches one event through
//! the reducer, runs the resulting effects, stores the session back, and
//! returns the rendered screen. Delivery and aggregation outcomes re-enter
//! the reducer as follow-up events.

use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::{Form, Json};
use axum_extra::extract::cookie::{Cookie, CookieJar};
use chrono::{Local, Utc};
use serde::Deserialize;
use std::collections::VecDeque;

use crate::config;
use crate::domain::{Language, LeaderboardEntry};
use crate::engine::{self, Effect, Event, Session, Stage};
use crate::progress;
use crate::session;
use crate::state::AppState;
use crate::store;

use super::views::{dashboard_view, screen_view, NoticeView, ScreenView};

const SESSION_COOKIE_NAME: &str = "quiznix_session";

// ==================== Forms ====================

#[derive(Deserialize)]
pub struct EmailForm {
    pub email: String,
}

#[derive(Deserialize)]
pub struct CodeForm {
    pub code: String,
}

#[derive(Deserialize)]
pub struct NameForm {
    pub name: String,
}

#[derive(Deserialize)]
pub struct LanguageForm {
    pub language: String,
}

#[derive(Deserialize)]
pub struct CategoryForm {
    pub category: String,
}

#[derive(Deserialize)]
pub struct StartForm {
    #[serde(default)]
    pub count: Option<usize>,
    #[serde(default)]
    pub language: Option<String>,
}

#[derive(Deserialize)]
pub struct AnswerForm {
    #[serde(default)]
    pub option: Option<String>,
}

#[derive(Deserialize)]
pub struct SuggestForm {
    pub question: String,
    pub options: String,
    pub answer: String,
}

#[derive(Deserialize)]
pub struct LeaderboardQuery {
    #[serde(default)]
    pub limit: Option<usize>,
}

// ==================== Session plumbing ====================

/// Existing cookie id, or a fresh one added to the jar.
fn ensure_cookie(jar: CookieJar) -> (CookieJar, String) {
    if let Some(cookie) = jar.get(SESSION_COOKIE_NAME) {
        let id = cookie.value().to_string();
        if !id.is_empty() {
            return (jar, id);
        }
    }

    let id = session::generate_session_id();
    let cookie = Cookie::build((SESSION_COOKIE_NAME, id.clone()))
        .path("/")
        .http_only(true)
        .max_age(time::Duration::hours(config::SESSION_EXPIRY_HOURS))
        .build();
    (jar.add(cookie), id)
}

/// Fresh session, resumed from the continuity record when one is valid.
fn bootstrap(state: &AppState) -> Session {
    let fresh = Session::new(state.variant);

    let Some(record) = store::continuity::load(&state.stores.continuity) else {
        return fresh;
    };

    tracing::debug!("Resuming session for {}", record.email);
    let stats = store::stats::load_user_stats(&state.stores.stats, &record.email);
    engine::apply(
        fresh,
        Event::Resume {
            email: record.email,
            name: record.name,
            stats,
        },
        Utc::now(),
        &mut rand::rng(),
    )
    .session
}

/// On the quiz screen the countdown is evaluated at access time, before
/// the incoming event.
fn entry_events(session: &Session, event: Option<Event>) -> Vec<Event> {
    let mut events = Vec::new();
    if session.stage == Stage::Quiz && session.variant.question_timer_secs.is_some() {
        events.push(Event::TimeExpired);
    }
    events.extend(event);
    events
}

/// Run events through the reducer, executing effects as they come out.
/// Effect outcomes (delivery result, updated stats) are fed back in.
async fn drive(
    state: &AppState,
    mut session: Session,
    events: Vec<Event>,
) -> (Session, Vec<NoticeView>) {
    let mut notices = Vec::new();
    let mut queue: VecDeque<Event> = events.into();

    while let Some(event) = queue.pop_front() {
        let transition = engine::apply(session, event, Utc::now(), &mut rand::rng());
        session = transition.session;
        if let Some(notice) = &transition.notice {
            notices.push(NoticeView::from_notice(notice));
        }

        for effect in transition.effects {
            match effect {
                Effect::DeliverCode { email, code } => {
                    let ok = state.mailer.deliver(&email, &code).await;
                    queue.push_back(Event::DeliveryResult { ok });
                }
                Effect::SaveContinuity { email, name } => {
                    if let Err(e) = store::continuity::save(&state.stores.continuity, &email, &name)
                    {
                        tracing::error!("Continuity save failed: {}", e);
                        notices.push(NoticeView::error(e.user_message()));
                    }
                }
                Effect::ClearContinuity => {
                    if let Err(e) = store::continuity::clear(&state.stores.continuity) {
                        tracing::error!("Continuity clear failed: {}", e);
                        notices.push(NoticeView::error(e.user_message()));
                    }
                }
                Effect::CompleteQuiz {
                    email,
                    category,
                    score,
                    question_count,
                    time_taken_secs,
                } => {
                    let (stats, err) = progress::record_completion(
                        &state.stores.stats,
                        &email,
                        &category,
                        score,
                        question_count,
                        time_taken_secs,
                        state.bank.category_count(),
                    );
                    if let Some(e) = err {
                        tracing::error!("Stats save failed: {}", e);
                        notices.push(NoticeView::error(e.user_message()));
                    }
                    queue.push_back(Event::StatsUpdated { stats });
                }
                Effect::AppendLeaderboard {
                    name,
                    score,
                    category,
                    language,
                } => {
                    let entry = LeaderboardEntry {
                        name,
                        score,
                        category,
                        timestamp: Local::now().format("%Y-%m-%d %H:%M:%S").to_string(),
                        language,
                    };
                    if let Err(e) = store::leaderboard::append_entry(&state.stores.leaderboard, entry)
                    {
                        tracing::error!("Leaderboard append failed: {}", e);
                        notices.push(NoticeView::error(e.user_message()));
                    }
                }
                Effect::AppendSuggestion {
                    question,
                    options,
                    answer,
                    language,
                } => {
                    let record = crate::domain::SuggestionRecord {
                        question,
                        options,
                        answer,
                        language,
                    };
                    if let Err(e) =
                        store::suggestions::append_suggestion(&state.stores.suggestions, &record)
                    {
                        tracing::error!("Suggestion append failed: {}", e);
                        notices.push(NoticeView::error(e.user_message()));
                    }
                }
            }
        }
    }

    (session, notices)
}

/// Shared path for handlers whose event needs no session context.
async fn respond(
    state: AppState,
    jar: CookieJar,
    event: Option<Event>,
) -> (CookieJar, Json<ScreenView>) {
    let (jar, sid) = ensure_cookie(jar);
    let current = session::get_session(&sid, || bootstrap(&state));
    let events = entry_events(&current, event);
    let (next, notices) = drive(&state, current, events).await;
    session::update_session(&sid, next.clone());
    (jar, Json(screen_view(&state, &next, notices)))
}

// ==================== Screen handlers ====================

/// GET /state - Current screen (re-evaluates the countdown)
pub async fn current_state(State(state): State<AppState>, jar: CookieJar) -> impl IntoResponse {
    respond(state, jar, None).await
}

/// POST /email - Submit email, issue and deliver a code
pub async fn submit_email(
    State(state): State<AppState>,
    jar: CookieJar,
    Form(form): Form<EmailForm>,
) -> impl IntoResponse {
    respond(state, jar, Some(Event::SubmitEmail { email: form.email })).await
}

/// POST /code - Verify the entered code
pub async fn submit_code(
    State(state): State<AppState>,
    jar: CookieJar,
    Form(form): Form<CodeForm>,
) -> impl IntoResponse {
    respond(state, jar, Some(Event::SubmitCode { entered: form.code })).await
}

/// POST /name - Set display name, persist continuity, load stats
pub async fn submit_name(
    State(state): State<AppState>,
    jar: CookieJar,
    Form(form): Form<NameForm>,
) -> impl IntoResponse {
    let (jar, sid) = ensure_cookie(jar);
    let current = session::get_session(&sid, || bootstrap(&state));

    let stats = store::stats::load_user_stats(&state.stores.stats, &current.email);
    let events = entry_events(
        &current,
        Some(Event::SubmitName {
            name: form.name,
            stats,
        }),
    );
    let (next, notices) = drive(&state, current, events).await;
    session::update_session(&sid, next.clone());
    (jar, Json(screen_view(&state, &next, notices)))
}

/// POST /language - Switch content language (category screen)
pub async fn switch_language(
    State(state): State<AppState>,
    jar: CookieJar,
    Form(form): Form<LanguageForm>,
) -> impl IntoResponse {
    let event = Language::from_str(&form.language).map(|language| Event::SwitchLanguage { language });
    respond(state, jar, event).await
}

/// POST /category - Choose a quiz category
pub async fn choose_category(
    State(state): State<AppState>,
    jar: CookieJar,
    Form(form): Form<CategoryForm>,
) -> impl IntoResponse {
    respond(
        state,
        jar,
        Some(Event::ChooseCategory {
            category: form.category,
        }),
    )
    .await
}

/// POST /start - Load the category's questions and start the quiz
pub async fn start_quiz(
    State(state): State<AppState>,
    jar: CookieJar,
    Form(form): Form<StartForm>,
) -> impl IntoResponse {
    let (jar, sid) = ensure_cookie(jar);
    let current = session::get_session(&sid, || bootstrap(&state));

    let mut notices = Vec::new();
    let mut event = None;
    if current.stage == Stage::ChooseCount {
        let language = if state.variant.bilingual {
            form.language
                .as_deref()
                .and_then(Language::from_str)
                .unwrap_or(current.language)
        } else {
            current.language
        };

        match state.bank.load(&current.category, language) {
            Ok(questions) => {
                event = Some(Event::StartQuiz {
                    count: form.count.unwrap_or(config::QUESTION_COUNT_DEFAULT),
                    language,
                    questions,
                });
            }
            Err(e) => {
                tracing::warn!("Question load failed for '{}': {}", current.category, e);
                notices.push(NoticeView::error(e.user_message()));
            }
        }
    }

    let events = entry_events(&current, event);
    let (next, mut drive_notices) = drive(&state, current, events).await;
    notices.append(&mut drive_notices);
    session::update_session(&sid, next.clone());
    (jar, Json(screen_view(&state, &next, notices)))
}

/// POST /answer - Submit the selected option for the current question
pub async fn submit_answer(
    State(state): State<AppState>,
    jar: CookieJar,
    Form(form): Form<AnswerForm>,
) -> impl IntoResponse {
    respond(state, jar, Some(Event::SubmitAnswer { option: form.option })).await
}

/// POST /quit - Ask to leave the quiz (first confirmation step)
pub async fn request_quit(State(state): State<AppState>, jar: CookieJar) -> impl IntoResponse {
    respond(state, jar, Some(Event::RequestQuit)).await
}

/// POST /quit/confirm - Discard progress and return to categories
pub async fn confirm_quit(State(state): State<AppState>, jar: CookieJar) -> impl IntoResponse {
    respond(state, jar, Some(Event::ConfirmQuit)).await
}

/// POST /quit/cancel - Keep playing
pub async fn cancel_quit(State(state): State<AppState>, jar: CookieJar) -> impl IntoResponse {
    respond(state, jar, Some(Event::CancelQuit)).await
}

/// POST /home - Back to the category screen
pub async fn go_home(State(state): State<AppState>, jar: CookieJar) -> impl IntoResponse {
    respond(state, jar, Some(Event::GoHome)).await
}

/// POST /suggest/open - Open the suggestion screen from the summary
pub async fn open_suggest(State(state): State<AppState>, jar: CookieJar) -> impl IntoResponse {
    respond(state, jar, Some(Event::OpenSuggest)).await
}

/// POST /suggest - Submit a question suggestion
pub async fn submit_suggestion(
    State(state): State<AppState>,
    jar: CookieJar,
    Form(form): Form<SuggestForm>,
) -> impl IntoResponse {
    respond(
        state,
        jar,
        Some(Event::SubmitSuggestion {
            question: form.question,
            options: form.options,
            answer: form.answer,
        }),
    )
    .await
}

/// POST /logout - Clear the continuity record and start over
pub async fn logout(State(state): State<AppState>, jar: CookieJar) -> impl IntoResponse {
    respond(state, jar, Some(Event::Logout)).await
}

// ==================== Read-only views ====================

/// GET /leaderboard - Top scores
pub async fn leaderboard(
    State(state): State<AppState>,
    Query(query): Query<LeaderboardQuery>,
) -> impl IntoResponse {
    let limit = query.limit.unwrap_or(config::LEADERBOARD_TOP_DEFAULT);
    Json(store::leaderboard::top_entries(&state.stores.leaderboard, limit))
}

/// GET /stats - Dashboard for the verified user
pub async fn dashboard(State(state): State<AppState>, jar: CookieJar) -> impl IntoResponse {
    let (jar, sid) = ensure_cookie(jar);
    let current = session::get_session(&sid, || bootstrap(&state));

    if !current.verified {
        return (jar, StatusCode::UNAUTHORIZED.into_response());
    }

    let stats = match &current.stats {
        Some(stats) => stats.clone(),
        None => store::stats::load_user_stats(&state.stores.stats, &current.email),
    };
    let view = dashboard_view(&current.name, &stats);
    (jar, Json(view).into_response())
}
