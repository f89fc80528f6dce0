pub mod question;
pub mod records;
pub mod stats;

pub use question::{Language, QuestionText, RawQuestion, ResolvedQuestion};
pub use records::{ContinuityRecord, LeaderboardEntry, SuggestionRecord};
pub use stats::{CategoryStats, UserStats};
