//! # Domain Models
//!
//! A `Board` is a single post on the message board. Rows are never physically
//! removed: `deleted_at` marks a post as gone and every read path filters on it.
//!
//! Input types (`NewBoard`, `BoardChanges`, `PageRequest`, `BoardId`) can only
//! be built through their validating constructors, so anything that reaches a
//! repository has already passed the BadRequest checks.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{DomainError, Result};

/// Fixed number of boards shown per list page.
pub const PAGE_SIZE: u32 = 10;

/// Upper bound of `boards.title` (`VARCHAR(200)`), counted in characters.
pub const TITLE_MAX_CHARS: usize = 200;

/// Primary key of a board. Always strictly positive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BoardId(i64);

impl BoardId {
    /// `0` is what an absent id used to bind to, so it is rejected along with
    /// negatives.
    pub fn new(raw: i64) -> Result<Self> {
        if raw <= 0 {
            return Err(DomainError::bad_request(format!("invalid board id {raw}")));
        }
        Ok(Self(raw))
    }

    pub fn get(self) -> i64 {
        self.0
    }
}

impl fmt::Display for BoardId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// A post as stored in the `boards` table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Board {
    pub id: BoardId,
    pub title: String,
    pub content: String,
    pub created_at: DateTime<Utc>,
    /// Set on every edit, `None` until the first one
    pub updated_at: Option<DateTime<Utc>>,
    pub deleted_at: Option<DateTime<Utc>>,
}

impl Board {
    pub fn is_deleted(&self) -> bool {
        self.deleted_at.is_some()
    }
}

/// Validated payload for inserting a board.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewBoard {
    title: String,
    content: String,
}

impl NewBoard {
    pub fn new(title: impl Into<String>, content: impl Into<String>) -> Result<Self> {
        Ok(Self {
            title: validate_title(title.into())?,
            content: content.into(),
        })
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn content(&self) -> &str {
        &self.content
    }
}

/// Validated payload for editing a board. Same rules as `NewBoard`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoardChanges {
    title: String,
    content: String,
}

impl BoardChanges {
    pub fn new(title: impl Into<String>, content: impl Into<String>) -> Result<Self> {
        Ok(Self {
            title: validate_title(title.into())?,
            content: content.into(),
        })
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn content(&self) -> &str {
        &self.content
    }
}

fn validate_title(title: String) -> Result<String> {
    if title.trim().is_empty() {
        return Err(DomainError::bad_request("title must not be blank"));
    }
    let chars = title.chars().count();
    if chars > TITLE_MAX_CHARS {
        return Err(DomainError::bad_request(format!(
            "title is {chars} characters, limit is {TITLE_MAX_CHARS}"
        )));
    }
    Ok(title)
}

/// 1-based page number of the board list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    page: u32,
}

impl PageRequest {
    pub fn new(page: u32) -> Result<Self> {
        if page == 0 {
            return Err(DomainError::bad_request("page numbers start at 1"));
        }
        Ok(Self { page })
    }

    pub fn first() -> Self {
        Self { page: 1 }
    }

    pub fn page(self) -> u32 {
        self.page
    }

    pub fn limit(self) -> i64 {
        i64::from(PAGE_SIZE)
    }

    pub fn offset(self) -> i64 {
        i64::from(self.page - 1) * i64::from(PAGE_SIZE)
    }
}

/// One page of the board list, newest first.
#[derive(Debug, Clone, PartialEq)]
pub struct BoardPage {
    pub boards: Vec<Board>,
    pub page: u32,
    pub has_next: bool,
}

impl BoardPage {
    pub fn has_previous(&self) -> bool {
        self.page > 1
    }
}
