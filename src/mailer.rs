//! Outbound one-time-code delivery.
//!
//! Delivery is a boolean: the flow only advances past the email screen
//! when the transport reports success. The Resend transport sends a
//! plain-text message; the log transport is for development and tests.

use serde::Serialize;

pub const OTP_SUBJECT: &str = "Your Quiznix OTP Code";

#[derive(Serialize)]
struct SendEmailRequest {
    from: String,
    to: Vec<String>,
    subject: String,
    text: String,
}

fn otp_body(code: &str) -> String {
    format!("Hello,\n\nYour OTP code is: {code}\n\nDon't share this code.\n\n- Quiznix Team")
}

/// OTP transport.
#[derive(Clone)]
pub enum Mailer {
    /// Log the code instead of sending it (development).
    Log,
    /// Deliver via the Resend API.
    Resend { api_key: String, from: String },
    /// Record the last code instead of sending it (tests).
    Capture(std::sync::Arc<std::sync::Mutex<Option<String>>>),
}

impl Mailer {
    /// Resend transport when RESEND_API_KEY is set, log transport otherwise.
    pub fn from_env() -> Self {
        match std::env::var("RESEND_API_KEY") {
            Ok(api_key) if !api_key.is_empty() => {
                let from = std::env::var("MAIL_FROM")
                    .unwrap_or_else(|_| "Quiznix <noreply@quiznix.example>".to_string());
                Mailer::Resend { api_key, from }
            }
            _ => {
                tracing::info!("RESEND_API_KEY not set, logging OTP codes instead of sending");
                Mailer::Log
            }
        }
    }

    /// Deliver the code. Returns false on any transport failure.
    pub async fn deliver(&self, email: &str, code: &str) -> bool {
        match self {
            Mailer::Log => {
                tracing::info!("OTP for {email}: {code}");
                true
            }
            Mailer::Resend { api_key, from } => send_via_resend(api_key, from, email, code).await,
            Mailer::Capture(slot) => {
                *slot.lock().expect("Capture slot lock poisoned") = Some(code.to_string());
                true
            }
        }
    }
}

async fn send_via_resend(api_key: &str, from: &str, to_email: &str, code: &str) -> bool {
    let client = reqwest::Client::new();

    let body = SendEmailRequest {
        from: from.to_string(),
        to: vec![to_email.to_string()],
        subject: OTP_SUBJECT.to_string(),
        text: otp_body(code),
    };

    let resp = match client
        .post("https://api.resend.com/emails")
        .bearer_auth(api_key)
        .json(&body)
        .send()
        .await
    {
        Ok(resp) => resp,
        Err(e) => {
            tracing::error!("Resend request failed: {e}");
            return false;
        }
    };

    if !resp.status().is_success() {
        let status = resp.status();
        let text = resp.text().await.unwrap_or_default();
        tracing::error!("Resend API error: {status} - {text}");
        return false;
    }

    tracing::info!("OTP email sent to {to_email}");
    true
}
