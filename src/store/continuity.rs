//! Returning-user continuity record.
//!
//! A single-object store holding `{email, name, timestamp}`. A valid record
//! lets a returning user skip re-verification; absence or age beyond the
//! validity window means not-logged-in.

use chrono::Utc;

use super::{JsonStore, StoreError};
use crate::config;
use crate::domain::ContinuityRecord;

/// Persist the record for the just-verified user.
pub fn save(store: &JsonStore, email: &str, name: &str) -> Result<(), StoreError> {
    let record = ContinuityRecord {
        email: email.to_string(),
        name: name.to_string(),
        timestamp: Utc::now().timestamp(),
    };
    store.write_object(&record)
}

/// Load the record if present and still inside the validity window.
/// An expired record is deleted on sight.
pub fn load(store: &JsonStore) -> Option<ContinuityRecord> {
    load_at(store, Utc::now().timestamp())
}

/// Window check against an explicit clock, for tests.
pub fn load_at(store: &JsonStore, now_ts: i64) -> Option<ContinuityRecord> {
    let record: ContinuityRecord = store.read_optional()?;

    let max_age = config::CONTINUITY_EXPIRY_DAYS * 24 * 60 * 60;
    if now_ts - record.timestamp >= max_age {
        if let Err(e) = store.remove() {
            tracing::warn!("Failed to delete expired continuity record: {}", e);
        }
        return None;
    }

    Some(record)
}

/// Explicit logout: drop the record.
pub fn clear(store: &JsonStore) -> Result<(), StoreError> {
    store.remove()
}
