//! Simple in-memory storage for interactive sessions.
//!
//! Stores the quiz Session keyed by session ID (from cookie).
//! Sessions auto-expire after a configurable duration of inactivity.

use crate::config;
use crate::engine::Session;
use chrono::{DateTime, Duration, Utc};
use std::collections::HashMap;
use std::sync::{LazyLock, Mutex};

/// Session entry with last access time for expiration
struct SessionEntry {
  session: Session,
  last_access: DateTime<Utc>,
}

/// Global session store
static SESSIONS: LazyLock<Mutex<HashMap<String, SessionEntry>>> =
  LazyLock::new(|| Mutex::new(HashMap::new()));

/// Get the session for the given ID, creating one via `fresh` if absent
pub fn get_session(session_id: &str, fresh: impl FnOnce() -> Session) -> Session {
  let mut sessions = SESSIONS.lock().expect("Session store lock poisoned");

  // Clean up expired sessions occasionally (~10% chance)
  if rand::random::<u8>() < config::SESSION_CLEANUP_THRESHOLD {
    cleanup_expired(&mut sessions);
  }

  // Get existing or create new
  if let Some(entry) = sessions.get_mut(session_id) {
    entry.last_access = Utc::now();
    entry.session.clone()
  } else {
    let session = fresh();
    sessions.insert(
      session_id.to_string(),
      SessionEntry {
        session: session.clone(),
        last_access: Utc::now(),
      },
    );
    session
  }
}

/// Update a session
pub fn update_session(session_id: &str, session: Session) {
  let mut sessions = SESSIONS.lock().expect("Session store lock poisoned");
  sessions.insert(
    session_id.to_string(),
    SessionEntry {
      session,
      last_access: Utc::now(),
    },
  );
}

/// Clean up expired sessions
fn cleanup_expired(sessions: &mut HashMap<String, SessionEntry>) {
  let expiry = Utc::now() - Duration::hours(config::SESSION_EXPIRY_HOURS);
  sessions.retain(|_, entry| entry.last_access > expiry);
}

/// Generate a new session ID
pub fn generate_session_id() -> String {
  use rand::Rng;
  let mut rng = rand::rng();
  (0..32)
    .map(|_| {
      let idx = rng.random_range(0..36);
      if idx < 10 {
        (b'0' + idx) as char
      } else {
        (b'a' + idx - 10) as char
      }
    })
    .collect()
}
