use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Unified error type for the entire application
#[derive(Debug, Error, Clone, Serialize, Deserialize)]
pub enum AdminError {
    #[error("Credenciales incorrectas")]
    InvalidCredentials,

    #[error("El usuario o correo ya está registrado")]
    DuplicateUser,

    #[error("Usuario no encontrado: {0}")]
    UserNotFound(String),

    #[error("Token inválido")]
    InvalidToken,

    #[error("Sesión expirada")]
    TokenExpired,

    #[error("Validación fallida en '{field}': {reason}")]
    ValidationFailed { field: String, reason: String },

    #[error("Stored value under '{0}' is corrupt")]
    StorageCorrupt(String),

    #[error("Store error: {0}")]
    Store(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Network error: {0}")]
    Network(String),

    #[error("Serialization error: {0}")]
    Serialization(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

/// Result type alias for convenience
pub type Result<T> = std::result::Result<T, AdminError>;

impl AdminError {
    /// Create a validation error for a named field
    pub fn validation(field: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::ValidationFailed {
            field: field.into(),
            reason: reason.into(),
        }
    }

    /// Create a new store error
    pub fn store<T: Into<String>>(msg: T) -> Self {
        Self::Store(msg.into())
    }

    /// Create a new config error
    pub fn config<T: Into<String>>(msg: T) -> Self {
        Self::Config(msg.into())
    }

    /// Create a new internal error
    pub fn internal<T: Into<String>>(msg: T) -> Self {
        Self::Internal(msg.into())
    }

    /// Get error category for logging
    pub fn category(&self) -> &'static str {
        match self {
            AdminError::InvalidCredentials => "auth",
            AdminError::DuplicateUser => "auth",
            AdminError::UserNotFound(_) => "not_found",
            AdminError::InvalidToken => "token",
            AdminError::TokenExpired => "token",
            AdminError::ValidationFailed { .. } => "validation",
            AdminError::StorageCorrupt(_) => "storage",
            AdminError::Store(_) => "storage",
            AdminError::Config(_) => "config",
            AdminError::Network(_) => "network",
            AdminError::Serialization(_) => "serialization",
            AdminError::Internal(_) => "internal",
        }
    }

    /// Whether the error is a user-facing rejection rather than a fault.
    /// User-facing errors cross the presentation contract as messages;
    /// faults are logged and surfaced generically.
    pub fn is_user_facing(&self) -> bool {
        matches!(
            self,
            AdminError::InvalidCredentials
                | AdminError::DuplicateUser
                | AdminError::UserNotFound(_)
                | AdminError::InvalidToken
                | AdminError::TokenExpired
                | AdminError::ValidationFailed { .. }
        )
    }
}

// I/O error conversions
impl From<std::io::Error> for AdminError {
    fn from(err: std::io::Error) -> Self {
        AdminError::Store(format!("I/O error: {}", err))
    }
}

// Serialization error conversions
impl From<serde_json::Error> for AdminError {
    fn from(err: serde_json::Error) -> Self {
        AdminError::Serialization(format!("JSON error: {}", err))
    }
}

// Network error conversions
impl From<reqwest::Error> for AdminError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            AdminError::Network(format!("HTTP timeout: {}", err))
        } else if err.is_connect() {
            AdminError::Network(format!("HTTP connection error: {}", err))
        } else {
            AdminError::Network(format!("HTTP error: {}", err))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validation_error_carries_field_and_reason() {
        let err = AdminError::validation("phone", "solo números");
        match err {
            AdminError::ValidationFailed { field, reason } => {
                assert_eq!(field, "phone");
                assert_eq!(reason, "solo números");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn user_facing_split() {
        assert!(AdminError::InvalidCredentials.is_user_facing());
        assert!(AdminError::TokenExpired.is_user_facing());
        assert!(!AdminError::Store("disk".into()).is_user_facing());
    }
}
