//! # api-adapters
//!
//! The web routing and orchestration layer for the message board.

pub mod error;
pub mod forms;
pub mod handlers;
pub mod middleware;
pub mod views;

use std::{path::Path, sync::Arc};

use axum::{
    http::{header, HeaderName, HeaderValue},
    middleware::{from_fn_with_state, map_response},
    routing::get,
    Router,
};
use domains::{BoardRepository, CredentialVerifier};
use services::BoardService;
use tower::ServiceBuilder;
use tower_http::{
    catch_panic::CatchPanicLayer,
    compression::CompressionLayer,
    request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer},
    services::ServeDir,
    set_header::SetResponseHeaderLayer,
    trace::TraceLayer,
};

pub use error::ApiError;

const REQUEST_ID_HEADER: &str = "x-request-id";

/// State shared across all request handlers. Immutable after startup.
#[derive(Clone)]
pub struct AppState {
    pub boards: Arc<BoardService>,
    pub credentials: Arc<dyn CredentialVerifier>,
}

impl AppState {
    pub fn new(repo: Arc<dyn BoardRepository>, credentials: Arc<dyn CredentialVerifier>) -> Self {
        Self {
            boards: Arc::new(BoardService::new(repo)),
            credentials,
        }
    }
}

/// Builds the full application router.
///
/// `static_dir` is served under `/static`; everything else is board pages,
/// the login stub and the basic-auth protected `/admin` scope.
pub fn router(state: AppState, static_dir: impl AsRef<Path>) -> Router {
    let admin = Router::new()
        .route("/main", get(handlers::admin_main))
        .route_layer(from_fn_with_state(state.clone(), middleware::require_admin));

    let request_id = HeaderName::from_static(REQUEST_ID_HEADER);

    Router::new()
        .route("/", get(handlers::index))
        .route(
            "/login",
            get(handlers::login_form).post(handlers::login_submit),
        )
        .route("/board/list", get(handlers::board_list))
        .route(
            "/board/create",
            get(handlers::board_create_form).post(handlers::board_create),
        )
        .route(
            "/board/edit",
            get(handlers::board_edit_form).post(handlers::board_edit),
        )
        .route("/board/detail", get(handlers::board_detail))
        .route("/board/delete", get(handlers::board_delete))
        .route("/throw", get(handlers::throw))
        .nest("/admin", admin)
        .nest_service("/static", ServeDir::new(static_dir.as_ref()))
        .fallback(handlers::no_route)
        .layer(CatchPanicLayer::custom(middleware::panic_response))
        .layer(map_response(middleware::fill_status_page))
        .layer(
            ServiceBuilder::new()
                .layer(SetRequestIdLayer::new(request_id.clone(), MakeRequestUuid))
                .layer(TraceLayer::new_for_http())
                .layer(PropagateRequestIdLayer::new(request_id))
                .layer(CompressionLayer::new())
                .layer(SetResponseHeaderLayer::if_not_present(
                    header::SERVER,
                    HeaderValue::from_static("message-board"),
                )),
        )
        .with_state(state)
}
