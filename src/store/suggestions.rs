//! Append-only suggestion log, one JSON record per line.

use super::{JsonStore, StoreError};
use crate::domain::SuggestionRecord;

pub fn append_suggestion(store: &JsonStore, record: &SuggestionRecord) -> Result<(), StoreError> {
    store.append_line(record)
}

pub fn load_suggestions(store: &JsonStore) -> Vec<SuggestionRecord> {
    store.read_lines()
}
