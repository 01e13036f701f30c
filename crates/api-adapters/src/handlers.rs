//! # Handlers
//!
//! Each handler binds its form, validates it, calls `BoardService`, and either
//! renders a template or redirects. Failures propagate as `ApiError`.

use axum::{
    extract::State,
    http::{StatusCode, Uri},
    response::{Html, Redirect},
};
use domains::BoardId;
use tracing::{info, warn};

use crate::{
    error::ApiError,
    forms::{BodyForm, CreateForm, EditForm, IdQuery, ListQuery, LoginForm, QueryForm},
    views::{
        render, BoardCreatePage, BoardDetailPage, BoardEditPage, BoardListPage, IndexPage,
        LoginPage,
    },
    AppState,
};

pub const BOARD_LIST_PATH: &str = "/board/list";

fn detail_path(id: BoardId) -> String {
    format!("/board/detail?id={id}")
}

pub async fn index() -> Result<Html<String>, ApiError> {
    render(&IndexPage)
}

pub async fn login_form() -> Result<Html<String>, ApiError> {
    render(&LoginPage)
}

/// Records the attempt and nothing else: there is no session to create.
pub async fn login_submit(BodyForm(form): BodyForm<LoginForm>) -> StatusCode {
    info!(
        login_id = %form.login_id,
        password_len = form.login_password.len(),
        "login form submitted"
    );
    StatusCode::NO_CONTENT
}

pub async fn board_list(
    State(state): State<AppState>,
    QueryForm(query): QueryForm<ListQuery>,
) -> Result<Html<String>, ApiError> {
    let page = state.boards.list(query.validate()?).await?;
    render(&BoardListPage::from(&page))
}

pub async fn board_create_form() -> Result<Html<String>, ApiError> {
    render(&BoardCreatePage)
}

pub async fn board_create(
    State(state): State<AppState>,
    BodyForm(form): BodyForm<CreateForm>,
) -> Result<Redirect, ApiError> {
    let id = state.boards.create(form.validate()?).await?;
    Ok(Redirect::to(&detail_path(id)))
}

pub async fn board_edit_form(
    State(state): State<AppState>,
    QueryForm(query): QueryForm<IdQuery>,
) -> Result<Html<String>, ApiError> {
    let board = state.boards.get(query.validate()?).await?;
    render(&BoardEditPage { board: &board })
}

pub async fn board_edit(
    State(state): State<AppState>,
    BodyForm(form): BodyForm<EditForm>,
) -> Result<Redirect, ApiError> {
    let (id, changes) = form.validate()?;
    state.boards.update(id, changes).await?;
    Ok(Redirect::to(&detail_path(id)))
}

pub async fn board_detail(
    State(state): State<AppState>,
    QueryForm(query): QueryForm<IdQuery>,
) -> Result<Html<String>, ApiError> {
    let board = state.boards.get(query.validate()?).await?;
    render(&BoardDetailPage { board: &board })
}

pub async fn board_delete(
    State(state): State<AppState>,
    QueryForm(query): QueryForm<IdQuery>,
) -> Result<Redirect, ApiError> {
    state.boards.delete(query.validate()?).await?;
    Ok(Redirect::to(BOARD_LIST_PATH))
}

pub async fn admin_main() -> &'static str {
    "admin main"
}

pub async fn throw() -> Result<(), ApiError> {
    Err(ApiError::Forced)
}

/// Router fallback; the status-page layer supplies the body.
pub async fn no_route(uri: Uri) -> StatusCode {
    warn!(%uri, "no route");
    StatusCode::NOT_FOUND
}
