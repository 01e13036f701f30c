//! # Request forms
//!
//! One typed struct per route. Wire fields are `Option`s so a missing field
//! and an explicit `0` are both caught by `validate()` as BadRequest, instead
//! of silently binding a default. Extraction failures (e.g. `id=abc`) become
//! BadRequest through the `QueryForm` / `BodyForm` extractors.

use axum::{
    extract::{FromRequest, FromRequestParts, Query, Request},
    http::request::Parts,
    Form,
};
use domains::{BoardChanges, BoardId, DomainError, NewBoard, PageRequest, Result as DomainResult};
use serde::{de::DeserializeOwned, Deserialize};

use crate::error::ApiError;

/// `Query<T>` whose rejection is our BadRequest page.
#[derive(Debug, Clone, Copy, Default)]
pub struct QueryForm<T>(pub T);

impl<S, T> FromRequestParts<S> for QueryForm<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Query(value) = Query::<T>::from_request_parts(parts, state)
            .await
            .map_err(|rejection| ApiError::bad_request(rejection.body_text()))?;
        Ok(Self(value))
    }
}

/// `Form<T>` (urlencoded body) whose rejection is our BadRequest page.
#[derive(Debug, Clone, Copy, Default)]
pub struct BodyForm<T>(pub T);

impl<S, T> FromRequest<S> for BodyForm<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Form(value) = Form::<T>::from_request(req, state)
            .await
            .map_err(|rejection| ApiError::bad_request(rejection.body_text()))?;
        Ok(Self(value))
    }
}

fn required<T>(value: Option<T>, field: &str) -> DomainResult<T> {
    value.ok_or_else(|| DomainError::bad_request(format!("missing required field `{field}`")))
}

/// `GET /board/list?page=N`
#[derive(Debug, Default, Deserialize)]
pub struct ListQuery {
    pub page: Option<u32>,
}

impl ListQuery {
    /// Absent page means the first one.
    pub fn validate(self) -> DomainResult<PageRequest> {
        match self.page {
            Some(page) => PageRequest::new(page),
            None => Ok(PageRequest::first()),
        }
    }
}

/// `?id=N` on edit, detail and delete.
#[derive(Debug, Default, Deserialize)]
pub struct IdQuery {
    pub id: Option<i64>,
}

impl IdQuery {
    pub fn validate(self) -> DomainResult<BoardId> {
        BoardId::new(required(self.id, "id")?)
    }
}

/// `POST /board/create`
#[derive(Debug, Default, Deserialize)]
pub struct CreateForm {
    pub title: Option<String>,
    pub content: Option<String>,
}

impl CreateForm {
    pub fn validate(self) -> DomainResult<NewBoard> {
        NewBoard::new(
            required(self.title, "title")?,
            required(self.content, "content")?,
        )
    }
}

/// `POST /board/edit`
#[derive(Debug, Default, Deserialize)]
pub struct EditForm {
    pub id: Option<i64>,
    pub title: Option<String>,
    pub content: Option<String>,
}

impl EditForm {
    pub fn validate(self) -> DomainResult<(BoardId, BoardChanges)> {
        let id = BoardId::new(required(self.id, "id")?)?;
        let changes = BoardChanges::new(
            required(self.title, "title")?,
            required(self.content, "content")?,
        )?;
        Ok((id, changes))
    }
}

/// `POST /login`. Stays permissive: nothing is checked against it.
#[derive(Default, Deserialize)]
pub struct LoginForm {
    #[serde(rename = "loginId", default)]
    pub login_id: String,
    #[serde(rename = "loginPassword", default)]
    pub login_password: String,
}
