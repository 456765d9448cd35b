use serde::Serialize;

use crate::error::AdminError;

/// Envelope every presentation-contract call returns: `success` plus either
/// `data` or `error`, never an exception across the boundary.
#[derive(Debug, Clone, Serialize)]
pub struct ApiResponse<T> {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl<T> ApiResponse<T> {
    /// Create a success response carrying data
    pub fn ok(data: T) -> Self {
        Self {
            success: true,
            data: Some(data),
            error: None,
        }
    }

    /// Create a success response with no payload
    pub fn ok_empty() -> Self {
        Self {
            success: true,
            data: None,
            error: None,
        }
    }

    /// Create an error response from a message
    pub fn err(message: impl Into<String>) -> Self {
        Self {
            success: false,
            data: None,
            error: Some(message.into()),
        }
    }

    /// Unwrap the data for tests and in-process callers
    pub fn into_data(self) -> Option<T> {
        self.data
    }
}

impl<T> From<crate::error::Result<T>> for ApiResponse<T> {
    fn from(result: crate::error::Result<T>) -> Self {
        match result {
            Ok(data) => ApiResponse::ok(data),
            Err(e) => ApiResponse::from_error(e),
        }
    }
}

impl<T> ApiResponse<T> {
    /// Map a service error onto the envelope. User-facing rejections keep
    /// their message; faults are logged and surfaced generically.
    pub fn from_error(error: AdminError) -> Self {
        if error.is_user_facing() {
            ApiResponse::err(error.to_string())
        } else {
            tracing::error!(category = error.category(), error = %error, "operation failed");
            ApiResponse::err("Error interno, intenta nuevamente")
        }
    }
}
