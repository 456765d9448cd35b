use base64::{engine::general_purpose, Engine as _};
use chrono::Utc;

use crate::error::{AdminError, Result};
use crate::models::account::Account;
use crate::models::session::TokenClaims;

/// Issue a token for an account: base64 over the JSON claims, stamped with
/// the current time in epoch milliseconds.
pub fn issue_token(account: &Account) -> Result<String> {
    let claims = TokenClaims {
        user_id: account.id,
        username: account.username.clone(),
        role: account.role,
        timestamp: Utc::now().timestamp_millis(),
    };
    encode_claims(&claims)
}

/// Encode claims into the opaque token string
pub fn encode_claims(claims: &TokenClaims) -> Result<String> {
    let json = serde_json::to_vec(claims)?;
    Ok(general_purpose::STANDARD.encode(json))
}

/// Decode a token back into claims without checking expiry
pub fn decode_token(token: &str) -> Result<TokenClaims> {
    let bytes = general_purpose::STANDARD
        .decode(token)
        .map_err(|_| AdminError::InvalidToken)?;
    serde_json::from_slice(&bytes).map_err(|_| AdminError::InvalidToken)
}

/// Decode and verify a token. The token is valid while strictly less than
/// `expiry_hours` have passed since its issue timestamp.
pub fn verify_token(token: &str, expiry_hours: i64) -> Result<TokenClaims> {
    let claims = decode_token(token)?;

    let age_ms = Utc::now().timestamp_millis() - claims.timestamp;
    let window_ms = expiry_hours * 60 * 60 * 1000;
    if age_ms >= window_ms {
        return Err(AdminError::TokenExpired);
    }

    Ok(claims)
}
