//! One-time code generation and verification.
//!
//! Codes are 4-digit numeric strings held only in the active session,
//! never persisted. Verification is exact string equality; there is no
//! expiry and no attempt limit.

use rand::Rng;

use crate::config;

/// Generate a 4-digit code in the configured range.
pub fn generate_code(rng: &mut impl Rng) -> String {
    rng.random_range(config::OTP_MIN..=config::OTP_MAX).to_string()
}

/// Compare the user-entered code to the issued one.
pub fn verify(entered: &str, issued: &str) -> bool {
    entered == issued
}
