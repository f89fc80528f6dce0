//! Quiz session state machine.
//!
//! The session value is immutable per transition: `reducer::apply` consumes
//! a session and an event and returns the next session plus a list of side
//! effects for the caller to run. Reads (stats, question banks) are resolved
//! by the caller and carried in on events; writes leave as effects.

pub mod reducer;
pub mod session;

pub use reducer::{apply, Effect, Event, Notice, Transition};
pub use session::{PreparedQuestion, Session, Stage};
