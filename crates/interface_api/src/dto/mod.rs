//! Request/Response data transfer objects

pub mod expenses;
pub mod settlements;

use serde::Serialize;

/// Success envelope wrapping every API response.
#[derive(Debug, Serialize)]
pub struct ApiEnvelope<T> {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    pub message: String,
}

impl<T> ApiEnvelope<T> {
    /// Wraps a payload with a success message.
    pub fn ok(data: T, message: impl Into<String>) -> Self {
        Self {
            success: true,
            data: Some(data),
            message: message.into(),
        }
    }
}

impl ApiEnvelope<()> {
    /// A success envelope with no payload.
    pub fn message(message: impl Into<String>) -> Self {
        Self {
            success: true,
            data: None,
            message: message.into(),
        }
    }
}
