//! The pure transition function for the quiz flow.
//!
//! `apply(session, event, now, rng)` returns the next session, the side
//! effects the caller must run, and an optional user-visible notice.
//! Validation failures keep the current stage. Events that do not belong
//! to the current stage are ignored.

use chrono::{DateTime, Utc};
use rand::seq::SliceRandom;
use rand::Rng;

use crate::config;
use crate::domain::{Language, ResolvedQuestion, UserStats};
use crate::otp;

use super::session::{PreparedQuestion, Session, Stage};

/// User or driver input to the state machine.
#[derive(Debug, Clone)]
pub enum Event {
    SubmitEmail { email: String },
    /// Outcome of the delivery effect, fed back by the driver.
    DeliveryResult { ok: bool },
    SubmitCode { entered: String },
    /// Driver pre-loads the user's stats (zeroed default when absent).
    SubmitName { name: String, stats: UserStats },
    /// Continuity fast-path straight to the category screen.
    Resume { email: String, name: String, stats: UserStats },
    SwitchLanguage { language: Language },
    ChooseCategory { category: String },
    /// Driver pre-loads the category's questions for the chosen language.
    StartQuiz { count: usize, language: Language, questions: Vec<ResolvedQuestion> },
    SubmitAnswer { option: Option<String> },
    /// Driver observed the per-question deadline passing.
    TimeExpired,
    RequestQuit,
    ConfirmQuit,
    CancelQuit,
    /// Aggregator output fed back after quiz completion.
    StatsUpdated { stats: UserStats },
    GoHome,
    OpenSuggest,
    SubmitSuggestion { question: String, options: String, answer: String },
    Logout,
}

/// Side effects for the caller to run after a transition.
#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    DeliverCode { email: String, code: String },
    SaveContinuity { email: String, name: String },
    ClearContinuity,
    CompleteQuiz {
        email: String,
        category: String,
        score: i64,
        question_count: i64,
        time_taken_secs: i64,
    },
    AppendLeaderboard {
        name: String,
        score: i64,
        category: String,
        language: Language,
    },
    AppendSuggestion {
        question: String,
        options: Vec<String>,
        answer: String,
        language: Language,
    },
}

/// User-visible outcome of a transition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notice {
    InvalidEmail,
    CodeSent,
    DeliveryFailed,
    CodeVerified,
    CodeMismatch,
    EmptyName,
    NoQuestions,
    SelectAnswer,
    AnswerCorrect,
    AnswerIncorrect { answer: String },
    TimeUp { answer: String },
    IncompleteSuggestion,
    SuggestionSaved,
}

impl Notice {
    pub fn level(&self) -> &'static str {
        match self {
            Notice::CodeSent
            | Notice::CodeVerified
            | Notice::AnswerCorrect
            | Notice::SuggestionSaved => "success",
            Notice::InvalidEmail
            | Notice::EmptyName
            | Notice::SelectAnswer
            | Notice::IncompleteSuggestion => "warning",
            Notice::DeliveryFailed
            | Notice::CodeMismatch
            | Notice::NoQuestions
            | Notice::AnswerIncorrect { .. }
            | Notice::TimeUp { .. } => "error",
        }
    }

    pub fn message(&self) -> String {
        match self {
            Notice::InvalidEmail => "Please enter a valid email.".to_string(),
            Notice::CodeSent => "OTP sent successfully!".to_string(),
            Notice::DeliveryFailed => "Failed to send OTP. Try again.".to_string(),
            Notice::CodeVerified => "OTP Verified!".to_string(),
            Notice::CodeMismatch => "Incorrect OTP. Try again.".to_string(),
            Notice::EmptyName => "Name cannot be empty.".to_string(),
            Notice::NoQuestions => "No questions available".to_string(),
            Notice::SelectAnswer => "Please select an answer before submitting!".to_string(),
            Notice::AnswerCorrect => "Correct!".to_string(),
            Notice::AnswerIncorrect { answer } => {
                format!("Incorrect! Correct answer: {answer}")
            }
            Notice::TimeUp { answer } => format!("Time's up! Correct answer: {answer}"),
            Notice::IncompleteSuggestion => "Please fill all fields.".to_string(),
            Notice::SuggestionSaved => {
                "Thank you! Your suggestion has been recorded.".to_string()
            }
        }
    }
}

/// Result of one transition.
#[derive(Debug)]
pub struct Transition {
    pub session: Session,
    pub effects: Vec<Effect>,
    pub notice: Option<Notice>,
}

impl Transition {
    fn stay(session: Session) -> Self {
        Self {
            session,
            effects: Vec::new(),
            notice: None,
        }
    }

    fn with_notice(session: Session, notice: Notice) -> Self {
        Self {
            session,
            effects: Vec::new(),
            notice: Some(notice),
        }
    }
}

/// Apply one event to the session.
pub fn apply(
    mut session: Session,
    event: Event,
    now: DateTime<Utc>,
    rng: &mut impl Rng,
) -> Transition {
    match event {
        Event::SubmitEmail { email } if session.stage == Stage::Email => {
            if !is_plausible_email(&email) {
                return Transition::with_notice(session, Notice::InvalidEmail);
            }

            let code = otp::generate_code(rng);
            session.email = email.clone();
            session.issued_code = Some(code.clone());
            Transition {
                session,
                effects: vec![Effect::DeliverCode { email, code }],
                notice: None,
            }
        }

        Event::DeliveryResult { ok } if session.stage == Stage::Email => {
            if session.issued_code.is_none() {
                return Transition::stay(session);
            }
            if ok {
                session.stage = Stage::Code;
                Transition::with_notice(session, Notice::CodeSent)
            } else {
                Transition::with_notice(session, Notice::DeliveryFailed)
            }
        }

        Event::SubmitCode { entered } if session.stage == Stage::Code => {
            let issued = session.issued_code.as_deref().unwrap_or_default();
            if otp::verify(&entered, issued) {
                session.verified = true;
                session.issued_code = None;
                session.stage = Stage::Name;
                Transition::with_notice(session, Notice::CodeVerified)
            } else {
                Transition::with_notice(session, Notice::CodeMismatch)
            }
        }

        Event::SubmitName { name, stats } if session.stage == Stage::Name => {
            let name = name.trim().to_string();
            if name.is_empty() {
                return Transition::with_notice(session, Notice::EmptyName);
            }

            let email = session.email.clone();
            session.name = name.clone();
            session.stats = Some(stats);
            session.stage = Stage::Category;
            Transition {
                session,
                effects: vec![Effect::SaveContinuity { email, name }],
                notice: None,
            }
        }

        Event::Resume { email, name, stats }
            if session.stage == Stage::Email && !session.verified =>
        {
            Transition::stay(Session::resumed(session.variant, email, name, stats))
        }

        Event::SwitchLanguage { language } if session.stage == Stage::Category => {
            if session.variant.bilingual {
                session.language = language;
            }
            Transition::stay(session)
        }

        Event::ChooseCategory { category } if session.stage == Stage::Category => {
            if category.trim().is_empty() {
                return Transition::stay(session);
            }
            session.category = category;
            session.stage = Stage::ChooseCount;
            Transition::stay(session)
        }

        Event::StartQuiz {
            count,
            language,
            questions,
        } if session.stage == Stage::ChooseCount => {
            if questions.is_empty() {
                return Transition::with_notice(session, Notice::NoQuestions);
            }

            let upper = config::QUESTION_COUNT_MAX.min(questions.len());
            let lower = config::QUESTION_COUNT_MIN.min(upper);
            let count = count.clamp(lower, upper);

            let drawn = rand::seq::index::sample(rng, questions.len(), count);
            let prepared: Vec<PreparedQuestion> = drawn
                .iter()
                .map(|i| {
                    let question = questions[i].clone();
                    let mut shuffled_options = question.options.clone();
                    shuffled_options.shuffle(rng);
                    PreparedQuestion {
                        question,
                        shuffled_options,
                    }
                })
                .collect();

            session.language = language;
            session.questions = prepared;
            session.question_count = count;
            session.index = 0;
            session.score = 0;
            session.quiz_started_at = Some(now);
            session.question_started_at = Some(now);
            session.confirm_quit = false;
            session.stage = Stage::Quiz;
            Transition::stay(session)
        }

        Event::SubmitAnswer { option } if session.stage == Stage::Quiz => {
            if session.quiz_finished() {
                return Transition::stay(session);
            }

            let Some(option) = option else {
                return Transition::with_notice(session, Notice::SelectAnswer);
            };

            // Equality on the canonical answer value, never on position
            let answer = session.questions[session.index].question.answer.clone();
            let correct = option == answer;
            if correct {
                session.score += 1;
            }

            let notice = if correct {
                Notice::AnswerCorrect
            } else {
                Notice::AnswerIncorrect { answer }
            };
            let effects = advance_question(&mut session, now);
            Transition {
                session,
                effects,
                notice: Some(notice),
            }
        }

        Event::TimeExpired if session.stage == Stage::Quiz => {
            let Some(limit) = session.variant.question_timer_secs else {
                return Transition::stay(session);
            };
            if session.quiz_finished() {
                return Transition::stay(session);
            }
            let expired = session
                .question_started_at
                .is_some_and(|started| (now - started).num_seconds() >= limit);
            if !expired {
                return Transition::stay(session);
            }

            // Unanswered question scores as incorrect and auto-advances
            let answer = session.questions[session.index].question.answer.clone();
            let effects = advance_question(&mut session, now);
            Transition {
                session,
                effects,
                notice: Some(Notice::TimeUp { answer }),
            }
        }

        Event::RequestQuit if session.stage == Stage::Quiz => {
            session.confirm_quit = true;
            Transition::stay(session)
        }

        Event::ConfirmQuit if session.stage == Stage::Quiz && session.confirm_quit => {
            session.reset_quiz();
            session.stage = Stage::Category;
            Transition::stay(session)
        }

        Event::CancelQuit if session.stage == Stage::Quiz => {
            session.confirm_quit = false;
            Transition::stay(session)
        }

        Event::StatsUpdated { stats } => {
            session.stats = Some(stats);
            Transition::stay(session)
        }

        Event::GoHome if matches!(session.stage, Stage::Summary | Stage::Suggest) => {
            session.reset_quiz();
            session.stage = Stage::Category;
            Transition::stay(session)
        }

        Event::OpenSuggest if session.stage == Stage::Summary => {
            session.stage = Stage::Suggest;
            Transition::stay(session)
        }

        Event::SubmitSuggestion {
            question,
            options,
            answer,
        } if session.stage == Stage::Suggest => {
            let question = question.trim().to_string();
            let answer = answer.trim().to_string();
            let options: Vec<String> = options
                .split(',')
                .map(|o| o.trim().to_string())
                .filter(|o| !o.is_empty())
                .collect();

            if question.is_empty() || options.is_empty() || answer.is_empty() {
                return Transition::with_notice(session, Notice::IncompleteSuggestion);
            }

            let language = session.language;
            session.reset_quiz();
            session.stage = Stage::Category;
            Transition {
                session,
                effects: vec![Effect::AppendSuggestion {
                    question,
                    options,
                    answer,
                    language,
                }],
                notice: Some(Notice::SuggestionSaved),
            }
        }

        Event::Logout => Transition {
            session: Session::new(session.variant),
            effects: vec![Effect::ClearContinuity],
            notice: None,
        },

        // Event does not belong to the current stage
        _ => Transition::stay(session),
    }
}

fn is_plausible_email(email: &str) -> bool {
    email.contains('@') && email.contains('.')
}

/// Move to the next question; on the last one, run completion processing.
fn advance_question(session: &mut Session, now: DateTime<Utc>) -> Vec<Effect> {
    session.index += 1;
    session.question_started_at = Some(now);

    if !session.quiz_finished() {
        return Vec::new();
    }

    // Defensive clamp; correct scoring cannot exceed the count
    let score = session.score.min(session.question_count) as i64;
    let time_taken_secs = session
        .quiz_started_at
        .map(|started| (now - started).num_seconds().max(0))
        .unwrap_or(0);

    session.stage = Stage::Summary;
    vec![
        Effect::CompleteQuiz {
            email: session.email.clone(),
            category: session.category.clone(),
            score,
            question_count: session.question_count as i64,
            time_taken_secs,
        },
        Effect::AppendLeaderboard {
            name: session.name.clone(),
            score,
            category: session.category.clone(),
            language: session.language,
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use std::collections::HashSet;

    use crate::config::VariantConfig;

    fn rng() -> StdRng {
        StdRng::seed_from_u64(7)
    }

    fn now() -> DateTime<Utc> {
        Utc::now()
    }

    fn fresh() -> Session {
        Session::new(VariantConfig::default())
    }

    fn questions(n: usize) -> Vec<ResolvedQuestion> {
        (0..n)
            .map(|i| ResolvedQuestion {
                question: format!("question {i}"),
                options: vec![
                    format!("right {i}"),
                    format!("wrong-a {i}"),
                    format!("wrong-b {i}"),
                    format!("wrong-c {i}"),
                ],
                answer: format!("right {i}"),
            })
            .collect()
    }

    /// Session parked on the count screen, verified, category chosen.
    fn at_choose_count() -> Session {
        let mut session = fresh();
        session.stage = Stage::ChooseCount;
        session.email = "ada@example.com".to_string();
        session.name = "Ada".to_string();
        session.verified = true;
        session.category = "science".to_string();
        session
    }

    fn start_quiz(count: usize, available: usize) -> Session {
        let t = apply(
            at_choose_count(),
            Event::StartQuiz {
                count,
                language: Language::English,
                questions: questions(available),
            },
            now(),
            &mut rng(),
        );
        t.session
    }

    #[test]
    fn test_invalid_email_stays() {
        let t = apply(
            fresh(),
            Event::SubmitEmail {
                email: "not-an-email".to_string(),
            },
            now(),
            &mut rng(),
        );
        assert_eq!(t.session.stage, Stage::Email);
        assert!(t.effects.is_empty());
        assert_eq!(t.notice, Some(Notice::InvalidEmail));
    }

    #[test]
    fn test_valid_email_issues_exactly_one_code() {
        let t = apply(
            fresh(),
            Event::SubmitEmail {
                email: "ada@example.com".to_string(),
            },
            now(),
            &mut rng(),
        );

        // Stage waits for the delivery outcome
        assert_eq!(t.session.stage, Stage::Email);
        assert_eq!(t.effects.len(), 1);
        let Effect::DeliverCode { email, code } = &t.effects[0] else {
            panic!("expected DeliverCode");
        };
        assert_eq!(email, "ada@example.com");
        assert_eq!(code.len(), 4);
        assert_eq!(t.session.issued_code.as_deref(), Some(code.as_str()));
    }

    #[test]
    fn test_delivery_outcome_gates_code_stage() {
        let t = apply(
            fresh(),
            Event::SubmitEmail {
                email: "ada@example.com".to_string(),
            },
            now(),
            &mut rng(),
        );

        let failed = apply(
            t.session.clone(),
            Event::DeliveryResult { ok: false },
            now(),
            &mut rng(),
        );
        assert_eq!(failed.session.stage, Stage::Email);
        assert_eq!(failed.notice, Some(Notice::DeliveryFailed));

        let sent = apply(t.session, Event::DeliveryResult { ok: true }, now(), &mut rng());
        assert_eq!(sent.session.stage, Stage::Code);
        assert_eq!(sent.notice, Some(Notice::CodeSent));
    }

    #[test]
    fn test_code_verification() {
        let mut session = fresh();
        session.stage = Stage::Code;
        session.email = "ada@example.com".to_string();
        session.issued_code = Some("4821".to_string());

        let wrong = apply(
            session.clone(),
            Event::SubmitCode {
                entered: "1111".to_string(),
            },
            now(),
            &mut rng(),
        );
        assert_eq!(wrong.session.stage, Stage::Code);
        assert_eq!(wrong.notice, Some(Notice::CodeMismatch));

        let right = apply(
            session,
            Event::SubmitCode {
                entered: "4821".to_string(),
            },
            now(),
            &mut rng(),
        );
        assert_eq!(right.session.stage, Stage::Name);
        assert!(right.session.verified);
        assert!(right.session.issued_code.is_none());
    }

    #[test]
    fn test_empty_name_rejected() {
        let mut session = fresh();
        session.stage = Stage::Name;
        session.verified = true;

        let t = apply(
            session,
            Event::SubmitName {
                name: "   ".to_string(),
                stats: UserStats::default(),
            },
            now(),
            &mut rng(),
        );
        assert_eq!(t.session.stage, Stage::Name);
        assert_eq!(t.notice, Some(Notice::EmptyName));
        assert!(t.effects.is_empty());
    }

    #[test]
    fn test_name_entry_saves_continuity_and_loads_stats() {
        let mut session = fresh();
        session.stage = Stage::Name;
        session.email = "ada@example.com".to_string();
        session.verified = true;

        let stats = UserStats {
            quizzes_played: 4,
            ..Default::default()
        };
        let t = apply(
            session,
            Event::SubmitName {
                name: "Ada".to_string(),
                stats,
            },
            now(),
            &mut rng(),
        );

        assert_eq!(t.session.stage, Stage::Category);
        assert_eq!(t.session.name, "Ada");
        assert_eq!(t.session.stats.as_ref().unwrap().quizzes_played, 4);
        assert_eq!(
            t.effects,
            vec![Effect::SaveContinuity {
                email: "ada@example.com".to_string(),
                name: "Ada".to_string(),
            }]
        );
    }

    #[test]
    fn test_resume_skips_verification() {
        let t = apply(
            fresh(),
            Event::Resume {
                email: "ada@example.com".to_string(),
                name: "Ada".to_string(),
                stats: UserStats::default(),
            },
            now(),
            &mut rng(),
        );
        assert_eq!(t.session.stage, Stage::Category);
        assert!(t.session.verified);
    }

    #[test]
    fn test_sample_is_distinct_and_sized() {
        let session = start_quiz(5, 8);

        assert_eq!(session.stage, Stage::Quiz);
        assert_eq!(session.questions.len(), 5);
        assert_eq!(session.question_count, 5);

        let texts: HashSet<_> = session
            .questions
            .iter()
            .map(|q| q.question.question.as_str())
            .collect();
        assert_eq!(texts.len(), 5);
    }

    #[test]
    fn test_requested_count_clamped_to_available() {
        let session = start_quiz(20, 8);
        assert_eq!(session.question_count, 8);

        let session = start_quiz(1, 8);
        assert_eq!(session.question_count, 5);
    }

    #[test]
    fn test_shuffled_options_are_a_permutation() {
        let session = start_quiz(8, 8);

        for prepared in &session.questions {
            let mut canonical = prepared.question.options.clone();
            let mut shuffled = prepared.shuffled_options.clone();
            canonical.sort();
            shuffled.sort();
            assert_eq!(canonical, shuffled);
        }
    }

    #[test]
    fn test_empty_bank_stays_on_count_screen() {
        let t = apply(
            at_choose_count(),
            Event::StartQuiz {
                count: 10,
                language: Language::English,
                questions: Vec::new(),
            },
            now(),
            &mut rng(),
        );
        assert_eq!(t.session.stage, Stage::ChooseCount);
        assert_eq!(t.notice, Some(Notice::NoQuestions));
    }

    #[test]
    fn test_score_counts_exact_answer_matches() {
        let mut session = start_quiz(5, 8);
        let mut r = rng();

        // Answer the first three correctly, the remaining two wrong
        for i in 0..5 {
            let answer = session.questions[session.index].question.answer.clone();
            let option = if i < 3 {
                answer
            } else {
                "definitely wrong".to_string()
            };
            let t = apply(
                session,
                Event::SubmitAnswer { option: Some(option) },
                now(),
                &mut r,
            );
            session = t.session;
        }

        assert_eq!(session.score, 3);
        assert_eq!(session.stage, Stage::Summary);
    }

    #[test]
    fn test_missing_selection_warns_without_advancing() {
        let session = start_quiz(5, 8);
        let t = apply(
            session,
            Event::SubmitAnswer { option: None },
            now(),
            &mut rng(),
        );
        assert_eq!(t.session.index, 0);
        assert_eq!(t.notice, Some(Notice::SelectAnswer));
    }

    #[test]
    fn test_completion_emits_stats_and_leaderboard_effects() {
        let mut session = start_quiz(5, 8);
        session.name = "Ada".to_string();
        let started = now() - Duration::seconds(90);
        session.quiz_started_at = Some(started);
        let mut r = rng();

        let mut final_effects = Vec::new();
        for _ in 0..5 {
            let answer = session.questions[session.index].question.answer.clone();
            let t = apply(
                session,
                Event::SubmitAnswer {
                    option: Some(answer),
                },
                now(),
                &mut r,
            );
            session = t.session;
            final_effects = t.effects;
        }

        assert_eq!(session.stage, Stage::Summary);
        assert_eq!(session.score, 5);
        assert_eq!(final_effects.len(), 2);

        let Effect::CompleteQuiz {
            score,
            question_count,
            time_taken_secs,
            ..
        } = &final_effects[0]
        else {
            panic!("expected CompleteQuiz first");
        };
        assert_eq!(*score, 5);
        assert_eq!(*question_count, 5);
        assert!(*time_taken_secs >= 90);

        let Effect::AppendLeaderboard { name, score, .. } = &final_effects[1] else {
            panic!("expected AppendLeaderboard second");
        };
        assert_eq!(name, "Ada");
        assert_eq!(*score, 5);
    }

    #[test]
    fn test_quit_requires_confirmation() {
        let session = start_quiz(5, 8);

        let t = apply(session, Event::RequestQuit, now(), &mut rng());
        assert!(t.session.confirm_quit);
        assert_eq!(t.session.stage, Stage::Quiz);

        let cancelled = apply(t.session.clone(), Event::CancelQuit, now(), &mut rng());
        assert!(!cancelled.session.confirm_quit);
        assert_eq!(cancelled.session.stage, Stage::Quiz);

        let quit = apply(t.session, Event::ConfirmQuit, now(), &mut rng());
        assert_eq!(quit.session.stage, Stage::Category);
        assert!(quit.session.questions.is_empty());
        assert_eq!(quit.session.score, 0);
    }

    #[test]
    fn test_confirm_quit_without_request_is_ignored() {
        let session = start_quiz(5, 8);
        let t = apply(session, Event::ConfirmQuit, now(), &mut rng());
        assert_eq!(t.session.stage, Stage::Quiz);
    }

    #[test]
    fn test_timer_disabled_ignores_expiry() {
        let mut session = start_quiz(5, 8);
        session.question_started_at = Some(now() - Duration::seconds(600));

        let t = apply(session, Event::TimeExpired, now(), &mut rng());
        assert_eq!(t.session.index, 0);
        assert!(t.notice.is_none());
    }

    #[test]
    fn test_timer_expiry_scores_unanswered_and_advances() {
        let mut session = at_choose_count();
        session.variant.question_timer_secs = Some(30);
        let t = apply(
            session,
            Event::StartQuiz {
                count: 5,
                language: Language::English,
                questions: questions(8),
            },
            now(),
            &mut rng(),
        );
        let mut session = t.session;

        // Deadline not yet passed: nothing happens
        let early = apply(session.clone(), Event::TimeExpired, now(), &mut rng());
        assert_eq!(early.session.index, 0);

        session.question_started_at = Some(now() - Duration::seconds(31));
        let t = apply(session, Event::TimeExpired, now(), &mut rng());
        assert_eq!(t.session.index, 1);
        assert_eq!(t.session.score, 0);
        assert!(matches!(t.notice, Some(Notice::TimeUp { .. })));
    }

    #[test]
    fn test_suggestion_requires_all_fields() {
        let mut session = fresh();
        session.stage = Stage::Suggest;

        let t = apply(
            session,
            Event::SubmitSuggestion {
                question: "A question?".to_string(),
                options: "  ,  ".to_string(),
                answer: "yes".to_string(),
            },
            now(),
            &mut rng(),
        );
        assert_eq!(t.session.stage, Stage::Suggest);
        assert_eq!(t.notice, Some(Notice::IncompleteSuggestion));
        assert!(t.effects.is_empty());
    }

    #[test]
    fn test_suggestion_parses_options_and_returns_home() {
        let mut session = fresh();
        session.stage = Stage::Suggest;
        session.language = Language::Hinglish;

        let t = apply(
            session,
            Event::SubmitSuggestion {
                question: "Largest planet?".to_string(),
                options: "Jupiter, Mars , Venus".to_string(),
                answer: "Jupiter".to_string(),
            },
            now(),
            &mut rng(),
        );

        assert_eq!(t.session.stage, Stage::Category);
        assert_eq!(
            t.effects,
            vec![Effect::AppendSuggestion {
                question: "Largest planet?".to_string(),
                options: vec![
                    "Jupiter".to_string(),
                    "Mars".to_string(),
                    "Venus".to_string()
                ],
                answer: "Jupiter".to_string(),
                language: Language::Hinglish,
            }]
        );
    }

    #[test]
    fn test_language_toggle_only_on_category_screen() {
        let mut session = fresh();
        session.stage = Stage::Category;

        let t = apply(
            session,
            Event::SwitchLanguage {
                language: Language::Hinglish,
            },
            now(),
            &mut rng(),
        );
        assert_eq!(t.session.language, Language::Hinglish);

        let elsewhere = apply(
            fresh(),
            Event::SwitchLanguage {
                language: Language::Hinglish,
            },
            now(),
            &mut rng(),
        );
        assert_eq!(elsewhere.session.language, Language::English);
    }

    #[test]
    fn test_logout_resets_and_clears_continuity() {
        let session = start_quiz(5, 8);
        let t = apply(session, Event::Logout, now(), &mut rng());

        assert_eq!(t.session.stage, Stage::Email);
        assert!(!t.session.verified);
        assert!(t.session.email.is_empty());
        assert_eq!(t.effects, vec![Effect::ClearContinuity]);
    }

    #[test]
    fn test_out_of_stage_events_are_ignored() {
        let t = apply(
            fresh(),
            Event::SubmitAnswer {
                option: Some("anything".to_string()),
            },
            now(),
            &mut rng(),
        );
        assert_eq!(t.session.stage, Stage::Email);
        assert!(t.effects.is_empty());
        assert!(t.notice.is_none());
    }
}
