use serde::{Deserialize, Serialize};

use crate::models::account::Role;

/// Identity claims packed into the session token. The token itself is the
/// base64 encoding of these claims as JSON; nothing about it is recorded
/// server-side and there is no revocation list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TokenClaims {
    pub user_id: i64,
    pub username: String,
    pub role: Role,
    /// Issue time, epoch milliseconds
    pub timestamp: i64,
}

/// Result of token verification
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VerifiedSession {
    pub valid: bool,
    pub claims: TokenClaims,
}

/// Result of a successful login
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginOutcome {
    pub token: String,
    pub user: crate::models::account::AccountView,
}
