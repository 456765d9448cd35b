use serde::{Deserialize, Serialize};

/// Message left through the public contact form
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactMessage {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub message: String,
    /// RFC 3339 submission time
    pub created_at: String,
}

/// Incoming contact form submission
#[derive(Debug, Clone, Deserialize)]
pub struct ContactRequest {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub message: String,
}

/// Outcome of a contact submission. `email_sent` reports whether the
/// notifier delivered; a failed delivery does not fail the submission.
#[derive(Debug, Clone, Serialize)]
pub struct ContactOutcome {
    pub message: ContactMessage,
    pub email_sent: bool,
}
