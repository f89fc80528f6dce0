//! Question bank - category discovery and question loading.
//!
//! One JSON document per category lives in the quizdata directory:
//! `{ "questions": [...] }`. Categories are derived from the file names.

use serde::Deserialize;
use std::fs;
use std::path::PathBuf;

use crate::domain::{Language, RawQuestion, ResolvedQuestion};
use crate::paths;

/// Bank-related errors. Load failures are soft: the caller shows a notice
/// and stays on the current screen.
#[derive(Debug)]
pub enum BankError {
    CategoryNotFound(String),
    IoError(String, String),
    ParseError(String, String),
}

impl std::fmt::Display for BankError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            BankError::CategoryNotFound(category) => {
                write!(f, "No question file for category '{}'", category)
            }
            BankError::IoError(path, err) => write!(f, "IO error reading {}: {}", path, err),
            BankError::ParseError(path, err) => write!(f, "Parse error in {}: {}", path, err),
        }
    }
}

impl BankError {
    /// Returns a user-facing error message without exposing filesystem paths.
    pub fn user_message(&self) -> &'static str {
        match self {
            BankError::CategoryNotFound(_) => "No questions available",
            BankError::IoError(_, _) => "Failed to read questions",
            BankError::ParseError(_, _) => "Failed to parse questions",
        }
    }
}

impl std::error::Error for BankError {}

/// On-disk category file schema.
#[derive(Debug, Deserialize)]
struct CategoryFile {
    #[serde(default)]
    questions: Vec<RawQuestion>,
}

/// Read-only view over the quizdata directory.
#[derive(Debug, Clone)]
pub struct QuestionBank {
    dir: PathBuf,
}

impl QuestionBank {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Bank at its configured location under the data directory.
    pub fn from_paths() -> Self {
        Self::new(paths::quizdata_dir())
    }

    /// Ordered category identifiers, one per `*.json` file.
    ///
    /// An unreadable directory yields an empty list rather than an error.
    pub fn list_categories(&self) -> Vec<String> {
        let entries = match fs::read_dir(&self.dir) {
            Ok(entries) => entries,
            Err(_) => return Vec::new(),
        };

        let mut categories: Vec<String> = entries
            .filter_map(|e| e.ok())
            .map(|e| e.path())
            .filter(|p| p.extension().is_some_and(|ext| ext == "json"))
            .filter_map(|p| p.file_stem().map(|s| s.to_string_lossy().into_owned()))
            .collect();

        categories.sort();
        categories
    }

    /// Total number of known categories (achievement threshold input).
    pub fn category_count(&self) -> usize {
        self.list_categories().len()
    }

    /// Load a category's questions in stored order, resolved to the
    /// requested language. No filtering, no dedup.
    pub fn load(
        &self,
        category: &str,
        language: Language,
    ) -> Result<Vec<ResolvedQuestion>, BankError> {
        // Category identifiers come from file stems; anything with a path
        // separator cannot name a category.
        if category.contains(['/', '\\']) || category.contains("..") {
            return Err(BankError::CategoryNotFound(category.to_string()));
        }

        let path = self.dir.join(format!("{category}.json"));
        if !path.exists() {
            return Err(BankError::CategoryNotFound(category.to_string()));
        }

        let contents = fs::read_to_string(&path)
            .map_err(|e| BankError::IoError(path.display().to_string(), e.to_string()))?;

        let file: CategoryFile = serde_json::from_str(&contents)
            .map_err(|e| BankError::ParseError(path.display().to_string(), e.to_string()))?;

        Ok(file
            .questions
            .iter()
            .map(|q| q.resolve(language))
            .collect())
    }
}
