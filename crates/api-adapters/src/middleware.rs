//! message-board/crates/api-adapters/src/middleware.rs
//!
//! Admin basic-auth gate and generic status pages.

use std::any::Any;

use auth_adapters::BasicCredentials;
use axum::{
    body::Body,
    extract::{Request, State},
    http::{header, HeaderValue, StatusCode},
    middleware::Next,
    response::{IntoResponse, Response},
};
use tracing::{debug, error, warn};

use crate::{error::INTERNAL_TEXT, AppState};

pub const BAD_REQUEST_PAGE: &str = "check the request parameters";
pub const NOT_FOUND_PAGE: &str = "resource not found";
pub const UNAUTHORIZED_PAGE: &str = "authentication required";
pub const SERVER_ERROR_PAGE: &str = "server error";

const REALM_CHALLENGE: &str = r#"Basic realm="admin", charset="UTF-8""#;

/// Re-authenticates every `/admin` request against the credential table.
pub async fn require_admin(State(state): State<AppState>, request: Request, next: Next) -> Response {
    let presented = request
        .headers()
        .get(header::AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
        .and_then(BasicCredentials::parse);

    let Some(credentials) = presented else {
        warn!(path = %request.uri().path(), "admin request without credentials");
        return challenge();
    };

    let username = credentials.username.clone();
    let verifier = state.credentials.clone();
    // argon2 verification blocks for tens of milliseconds
    let verified = tokio::task::spawn_blocking(move || {
        verifier.verify(&credentials.username, &credentials.password)
    })
    .await
    .unwrap_or_else(|err| {
        error!(error = %err, "credential verification task failed");
        false
    });

    if !verified {
        warn!(username = %username, "admin authentication failed");
        return challenge();
    }

    debug!(username = %username, "admin authenticated");
    next.run(request).await
}

fn challenge() -> Response {
    (
        StatusCode::UNAUTHORIZED,
        [(header::WWW_AUTHENTICATE, REALM_CHALLENGE)],
    )
        .into_response()
}

/// Turns a panic caught by `CatchPanicLayer` into the same 500 page as any
/// other internal failure.
pub fn panic_response(payload: Box<dyn Any + Send + 'static>) -> Response {
    let message = payload
        .downcast_ref::<&str>()
        .copied()
        .or_else(|| payload.downcast_ref::<String>().map(String::as_str))
        .unwrap_or("non-string panic payload");
    error!(panic = message, "request handler panicked");

    (StatusCode::INTERNAL_SERVER_ERROR, INTERNAL_TEXT).into_response()
}

/// Gives bare error statuses (no content type yet) a plain-text body.
/// Responses built by `ApiError` already carry one and pass through.
pub async fn fill_status_page(response: Response) -> Response {
    if response.headers().contains_key(header::CONTENT_TYPE) {
        return response;
    }

    let text = match response.status() {
        StatusCode::BAD_REQUEST => BAD_REQUEST_PAGE,
        StatusCode::NOT_FOUND => NOT_FOUND_PAGE,
        StatusCode::UNAUTHORIZED => UNAUTHORIZED_PAGE,
        StatusCode::INTERNAL_SERVER_ERROR => SERVER_ERROR_PAGE,
        _ => return response,
    };

    let (mut parts, _) = response.into_parts();
    parts.headers.remove(header::CONTENT_LENGTH);
    parts.headers.insert(
        header::CONTENT_TYPE,
        HeaderValue::from_static("text/plain; charset=utf-8"),
    );
    Response::from_parts(parts, Body::from(text))
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::to_bytes;

    async fn body_text(response: Response) -> String {
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        String::from_utf8(bytes.to_vec()).unwrap()
    }

    fn bare(status: StatusCode) -> Response {
        status.into_response()
    }

    #[tokio::test]
    async fn bare_statuses_get_plain_text_pages() {
        for (status, page) in [
            (StatusCode::BAD_REQUEST, BAD_REQUEST_PAGE),
            (StatusCode::NOT_FOUND, NOT_FOUND_PAGE),
            (StatusCode::UNAUTHORIZED, UNAUTHORIZED_PAGE),
            (StatusCode::INTERNAL_SERVER_ERROR, SERVER_ERROR_PAGE),
        ] {
            let response = fill_status_page(bare(status)).await;
            assert_eq!(response.status(), status);
            assert_eq!(
                response.headers()[header::CONTENT_TYPE],
                "text/plain; charset=utf-8"
            );
            assert_eq!(body_text(response).await, page);
        }
    }

    #[tokio::test]
    async fn responses_with_a_content_type_pass_through() {
        let original = (StatusCode::BAD_REQUEST, "already explained").into_response();
        let response = fill_status_page(original).await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(body_text(response).await, "already explained");

        let teapot = fill_status_page(bare(StatusCode::IM_A_TEAPOT)).await;
        assert!(!teapot.headers().contains_key(header::CONTENT_TYPE));
    }

    #[tokio::test]
    async fn panic_payloads_become_the_internal_error_page() {
        for payload in [
            Box::new("static message") as Box<dyn Any + Send>,
            Box::new(String::from("formatted message")),
            Box::new(42_u8),
        ] {
            let response = panic_response(payload);
            assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
            assert_eq!(body_text(response).await, INTERNAL_TEXT);
        }
    }
}
