use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::core::error::AppError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EnvelopeStatus {
    Success,
    Error,
}

// `status == error` exactly when `code` carries a non-2xx value, and
// `status == success` exactly when `data` is present.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Envelope {
    pub status: EnvelopeStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code: Option<u16>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl Envelope {
    pub fn success(data: Value) -> Self {
        Self {
            status: EnvelopeStatus::Success,
            data: Some(data),
            code: None,
            message: None,
        }
    }

    pub fn error(code: u16, message: impl Into<String>) -> Self {
        Self {
            status: EnvelopeStatus::Error,
            data: None,
            code: Some(code),
            message: Some(message.into()),
        }
    }

    pub fn from_error(error: &AppError) -> Self {
        Self::error(error.status_code(), error.envelope_message())
    }

    pub fn is_error(&self) -> bool {
        self.status == EnvelopeStatus::Error
    }

    pub fn http_status(&self) -> StatusCode {
        match self.code {
            Some(code) if self.is_error() => {
                StatusCode::from_u16(code).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR)
            }
            _ => StatusCode::OK,
        }
    }
}

impl From<AppError> for Envelope {
    fn from(error: AppError) -> Self {
        Self::from_error(&error)
    }
}

impl IntoResponse for Envelope {
    fn into_response(self) -> Response {
        (self.http_status(), Json(self)).into_response()
    }
}
