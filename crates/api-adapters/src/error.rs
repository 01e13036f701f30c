//! # ApiError
//!
//! Maps every failure a handler can hit onto a status code and a fixed
//! plain-text body. Bodies never carry error details; those go to the log.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use domains::DomainError;
use thiserror::Error;
use tracing::{error, warn};

pub const NOT_FOUND_TEXT: &str = "the requested resource could not be found";
pub const BAD_REQUEST_TEXT: &str = "the request parameters are invalid";
pub const TEMPLATE_TEXT: &str = "the page template could not be rendered";
pub const INTERNAL_TEXT: &str = "internal server error";

#[derive(Error, Debug)]
pub enum ApiError {
    #[error(transparent)]
    Domain(#[from] DomainError),

    #[error("template rendering failed: {0}")]
    Template(#[from] askama::Error),

    /// Raised on purpose by `/throw`
    #[error("forced failure")]
    Forced,
}

impl ApiError {
    pub fn bad_request(reason: impl Into<String>) -> Self {
        Self::Domain(DomainError::bad_request(reason))
    }

    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::Domain(DomainError::NotFound { .. }) => StatusCode::NOT_FOUND,
            ApiError::Domain(DomainError::BadRequest(_)) => StatusCode::BAD_REQUEST,
            ApiError::Domain(DomainError::Internal(_))
            | ApiError::Template(_)
            | ApiError::Forced => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn body(&self) -> &'static str {
        match self {
            ApiError::Domain(DomainError::NotFound { .. }) => NOT_FOUND_TEXT,
            ApiError::Domain(DomainError::BadRequest(_)) => BAD_REQUEST_TEXT,
            ApiError::Template(_) => TEMPLATE_TEXT,
            ApiError::Domain(DomainError::Internal(_)) | ApiError::Forced => INTERNAL_TEXT,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            error!(error = %self, status = status.as_u16(), "request failed");
        } else {
            warn!(error = %self, status = status.as_u16(), "request rejected");
        }

        (status, self.body()).into_response()
    }
}
