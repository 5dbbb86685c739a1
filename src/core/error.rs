use axum::response::{IntoResponse, Response};
use thiserror::Error;

use crate::core::envelope::Envelope;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AppError {
    #[error("configuration error: {0}")]
    Configuration(String),
    #[error("missing identifier: {0}")]
    MissingIdentifier(String),
    #[error("invalid parameter: {0}")]
    InvalidParameter(String),
    #[error("unauthenticated: {0}")]
    Unauthenticated(String),
    #[error("forbidden: {0}")]
    Forbidden(String),
    #[error("not found: {0}")]
    NotFound(String),
    #[error("method not allowed: {0}")]
    MethodNotAllowed(String),
    #[error("upstream error: {0}")]
    Upstream(String),
    #[error("internal error: {0}")]
    Internal(String),
}

impl AppError {
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration(message.into())
    }

    pub fn missing_identifier(message: impl Into<String>) -> Self {
        Self::MissingIdentifier(message.into())
    }

    pub fn invalid_parameter(message: impl Into<String>) -> Self {
        Self::InvalidParameter(message.into())
    }

    pub fn unauthenticated(message: impl Into<String>) -> Self {
        Self::Unauthenticated(message.into())
    }

    pub fn forbidden(message: impl Into<String>) -> Self {
        Self::Forbidden(message.into())
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self::NotFound(message.into())
    }

    pub fn method_not_allowed(message: impl Into<String>) -> Self {
        Self::MethodNotAllowed(message.into())
    }

    pub fn upstream(message: impl Into<String>) -> Self {
        Self::Upstream(message.into())
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal(message.into())
    }

    pub fn status_code(&self) -> u16 {
        match self {
            Self::MissingIdentifier(_) | Self::InvalidParameter(_) => 400,
            Self::Unauthenticated(_) => 401,
            Self::Forbidden(_) => 403,
            Self::NotFound(_) => 404,
            Self::MethodNotAllowed(_) => 405,
            Self::Configuration(_) | Self::Upstream(_) | Self::Internal(_) => 500,
        }
    }

    // Upstream failures are not classified; the raw cause follows `Error: `.
    pub fn envelope_message(&self) -> String {
        match self {
            Self::Upstream(cause) | Self::Internal(cause) | Self::Configuration(cause) => {
                format!("Error: {cause}")
            }
            Self::MissingIdentifier(message)
            | Self::InvalidParameter(message)
            | Self::Unauthenticated(message)
            | Self::Forbidden(message)
            | Self::NotFound(message)
            | Self::MethodNotAllowed(message) => message.clone(),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        Envelope::from_error(&self).into_response()
    }
}
