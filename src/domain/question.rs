//! Question types and language resolution.
//!
//! Category files store two record shapes side by side: single-language
//! records, and bilingual records carrying a full english/hinglish variant
//! each. Both resolve to a canonical `ResolvedQuestion` at load time.

use serde::{Deserialize, Serialize};

/// Content language for questions and answers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    English,
    Hinglish,
}

impl Language {
    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "english" => Some(Self::English),
            "hinglish" => Some(Self::Hinglish),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::English => "english",
            Self::Hinglish => "hinglish",
        }
    }
}

impl std::fmt::Display for Language {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A question body in one language.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuestionText {
    pub question: String,
    pub options: Vec<String>,
    pub answer: String,
}

/// A raw question record as stored in a category file.
///
/// Bilingual records carry a full body per language; the variants are
/// distinguished structurally (a bilingual record has no top-level
/// `question` field).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RawQuestion {
    Multilingual {
        english: QuestionText,
        hinglish: QuestionText,
    },
    Monolingual(QuestionText),
}

impl RawQuestion {
    /// Resolve this record to the requested language.
    ///
    /// Monolingual records ignore the requested language and return their
    /// single body.
    pub fn resolve(&self, language: Language) -> ResolvedQuestion {
        let body = match self {
            RawQuestion::Multilingual { english, hinglish } => match language {
                Language::English => english,
                Language::Hinglish => hinglish,
            },
            RawQuestion::Monolingual(body) => body,
        };

        ResolvedQuestion {
            question: body.question.clone(),
            options: body.options.clone(),
            answer: body.answer.clone(),
        }
    }
}

/// A question after language resolution. Immutable once loaded; display
/// shuffling happens per quiz attempt and never touches this value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResolvedQuestion {
    pub question: String,
    pub options: Vec<String>,
    pub answer: String,
}
