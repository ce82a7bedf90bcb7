use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use cnol_badge::{BadgeError, ValidationError};
use serde_json::json;

#[derive(Debug, thiserror::Error)]
pub enum ServiceError {
    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    /// The body could not be read as JSON at all (too large, wrong type).
    #[error("{message}")]
    Rejected { status: StatusCode, message: String },

    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("Service overloaded, please try again later")]
    ServiceOverloaded,

    #[error("Badge generation failed: {0}")]
    Generation(BadgeError),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl From<BadgeError> for ServiceError {
    fn from(err: BadgeError) -> Self {
        match err {
            BadgeError::Validation(e) => Self::Validation(e),
            other => Self::Generation(other),
        }
    }
}

impl From<JsonRejection> for ServiceError {
    fn from(rejection: JsonRejection) -> Self {
        match rejection {
            JsonRejection::JsonSyntaxError(_) | JsonRejection::JsonDataError(_) => {
                Self::InvalidRequest(rejection.body_text())
            }
            other => Self::Rejected {
                status: other.status(),
                message: other.body_text(),
            },
        }
    }
}

impl ServiceError {
    pub fn status(&self) -> StatusCode {
        match self {
            Self::InvalidRequest(_) | Self::Validation(_) => StatusCode::BAD_REQUEST,
            Self::Rejected { status, .. } => *status,
            Self::ServiceOverloaded => StatusCode::SERVICE_UNAVAILABLE,
            Self::Generation(_) | Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ServiceError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            tracing::error!("Request failed: {}", self);
        } else {
            tracing::debug!("Request rejected: {}", self);
        }

        let body = Json(json!({ "error": self.to_string() }));
        (status, body).into_response()
    }
}

pub type Result<T> = std::result::Result<T, ServiceError>;
