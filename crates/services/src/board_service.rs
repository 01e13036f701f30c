//! # BoardService
//!
//! Orchestrates the board CRUD flow on top of a `BoardRepository`.
//! Inputs arrive already validated (`BoardId`, `PageRequest`, ...), so this
//! layer owns the NotFound decisions and the list look-ahead.

use std::sync::Arc;

use anyhow::Context;
use domains::{
    Board, BoardChanges, BoardId, BoardPage, BoardRepository, DomainError, NewBoard, PageRequest,
    Result, PAGE_SIZE,
};
use tracing::{debug, info};

const RESOURCE: &str = "board";

pub struct BoardService {
    repo: Arc<dyn BoardRepository>,
}

impl BoardService {
    pub fn new(repo: Arc<dyn BoardRepository>) -> Self {
        Self { repo }
    }

    /// Fetches one page of live boards. Asks for one extra row so the page
    /// knows whether a next page exists without a COUNT query.
    pub async fn list(&self, page: PageRequest) -> Result<BoardPage> {
        let mut boards = self
            .repo
            .list(page.limit() + 1, page.offset())
            .await
            .with_context(|| format!("failed to list boards on page {}", page.page()))?;

        let has_next = boards.len() > PAGE_SIZE as usize;
        boards.truncate(PAGE_SIZE as usize);
        debug!(page = page.page(), count = boards.len(), has_next, "listed boards");

        Ok(BoardPage {
            boards,
            page: page.page(),
            has_next,
        })
    }

    pub async fn create(&self, board: NewBoard) -> Result<BoardId> {
        let id = self
            .repo
            .insert(&board)
            .await
            .context("failed to insert board")?;
        info!(board_id = %id, "board created");
        Ok(id)
    }

    pub async fn get(&self, id: BoardId) -> Result<Board> {
        self.repo
            .find(id)
            .await
            .with_context(|| format!("failed to load board {id}"))?
            .ok_or_else(|| not_found(id))
    }

    pub async fn update(&self, id: BoardId, changes: BoardChanges) -> Result<()> {
        let updated = self
            .repo
            .update(id, &changes)
            .await
            .with_context(|| format!("failed to update board {id}"))?;
        if !updated {
            return Err(not_found(id));
        }
        info!(board_id = %id, "board updated");
        Ok(())
    }

    /// Soft delete. An absent or already deleted board is NotFound, same as
    /// for `get` and `update`.
    pub async fn delete(&self, id: BoardId) -> Result<()> {
        let deleted = self
            .repo
            .soft_delete(id)
            .await
            .with_context(|| format!("failed to delete board {id}"))?;
        if !deleted {
            return Err(not_found(id));
        }
        info!(board_id = %id, "board soft-deleted");
        Ok(())
    }
}

fn not_found(id: BoardId) -> DomainError {
    DomainError::NotFound {
        resource: RESOURCE,
        id: id.get(),
    }
}
