//! askama page templates. Files live under `crates/api-adapters/templates`.

use askama::Template;
use axum::response::Html;
use domains::{Board, BoardPage};

use crate::error::ApiError;

#[derive(Template)]
#[template(path = "index.html")]
pub struct IndexPage;

#[derive(Template)]
#[template(path = "login.html")]
pub struct LoginPage;

#[derive(Template)]
#[template(path = "board/list.html")]
pub struct BoardListPage<'a> {
    pub boards: &'a [Board],
    pub page: u32,
    pub previous_page: Option<u32>,
    pub next_page: Option<u32>,
}

impl<'a> From<&'a BoardPage> for BoardListPage<'a> {
    fn from(page: &'a BoardPage) -> Self {
        Self {
            boards: &page.boards,
            page: page.page,
            previous_page: page.has_previous().then(|| page.page - 1),
            next_page: page.has_next.then(|| page.page + 1),
        }
    }
}

#[derive(Template)]
#[template(path = "board/create.html")]
pub struct BoardCreatePage;

#[derive(Template)]
#[template(path = "board/edit.html")]
pub struct BoardEditPage<'a> {
    pub board: &'a Board,
}

#[derive(Template)]
#[template(path = "board/detail.html")]
pub struct BoardDetailPage<'a> {
    pub board: &'a Board,
}

pub fn render(template: &impl Template) -> Result<Html<String>, ApiError> {
    Ok(Html(template.render()?))
}
