//! # PostgreSQL `BoardRepository`
//!
//! The production backend. Writes run inside a transaction that is committed
//! before the call returns; an error drops the transaction, which rolls it back.

use anyhow::Context;
use async_trait::async_trait;
use chrono::Utc;
use domains::{Board, BoardChanges, BoardId, BoardRepository, NewBoard};
use sqlx::postgres::{PgPool, PgPoolOptions};
use tracing::info;

use crate::row::{into_boards, BoardRow};

const SCHEMA: &str = r#"
CREATE TABLE IF NOT EXISTS boards (
    id          BIGSERIAL PRIMARY KEY,
    title       VARCHAR(200) NOT NULL,
    content     TEXT NOT NULL,
    created_at  TIMESTAMPTZ NOT NULL DEFAULT now(),
    updated_at  TIMESTAMPTZ NULL,
    deleted_at  TIMESTAMPTZ NULL
)"#;

pub struct PgBoardRepository {
    pool: PgPool,
}

impl PgBoardRepository {
    /// Opens the pool and creates the `boards` table if it is missing.
    pub async fn connect(url: &str, max_connections: u32) -> anyhow::Result<Self> {
        let pool = PgPoolOptions::new()
            .max_connections(max_connections)
            .connect(url)
            .await
            .context("failed to connect to PostgreSQL")?;

        let repo = Self::from_pool(pool);
        repo.init_schema().await?;
        Ok(repo)
    }

    pub fn from_pool(pool: PgPool) -> Self {
        Self { pool }
    }

    pub fn pool(&self) -> &PgPool {
        &self.pool
    }

    pub async fn init_schema(&self) -> anyhow::Result<()> {
        let mut tx = self.pool.begin().await?;
        sqlx::query(SCHEMA)
            .execute(&mut *tx)
            .await
            .context("failed to create boards table")?;
        tx.commit().await?;
        info!("PostgreSQL schema ready");
        Ok(())
    }
}

#[async_trait]
impl BoardRepository for PgBoardRepository {
    async fn list(&self, limit: i64, offset: i64) -> anyhow::Result<Vec<Board>> {
        let rows = sqlx::query_as::<_, BoardRow>(
            "SELECT id, title, content, created_at, updated_at, deleted_at FROM boards \
             WHERE deleted_at IS NULL ORDER BY id DESC LIMIT $1 OFFSET $2",
        )
        .bind(limit)
        .bind(offset)
        .fetch_all(&self.pool)
        .await?;

        into_boards(rows)
    }

    async fn find(&self, id: BoardId) -> anyhow::Result<Option<Board>> {
        let row = sqlx::query_as::<_, BoardRow>(
            "SELECT id, title, content, created_at, updated_at, deleted_at FROM boards \
             WHERE id = $1 AND deleted_at IS NULL",
        )
        .bind(id.get())
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(Board::try_from).transpose()?)
    }

    async fn insert(&self, board: &NewBoard) -> anyhow::Result<BoardId> {
        let mut tx = self.pool.begin().await?;

        let id: i64 = sqlx::query_scalar(
            "INSERT INTO boards (title, content, created_at) VALUES ($1, $2, $3) RETURNING id",
        )
        .bind(board.title())
        .bind(board.content())
        .bind(Utc::now())
        .fetch_one(&mut *tx)
        .await?;

        tx.commit().await?;
        Ok(BoardId::new(id)?)
    }

    async fn update(&self, id: BoardId, changes: &BoardChanges) -> anyhow::Result<bool> {
        let mut tx = self.pool.begin().await?;

        let result = sqlx::query(
            "UPDATE boards SET title = $1, content = $2, updated_at = $3 \
             WHERE id = $4 AND deleted_at IS NULL",
        )
        .bind(changes.title())
        .bind(changes.content())
        .bind(Utc::now())
        .bind(id.get())
        .execute(&mut *tx)
        .await?;

        tx.commit().await?;
        Ok(result.rows_affected() > 0)
    }

    async fn soft_delete(&self, id: BoardId) -> anyhow::Result<bool> {
        let mut tx = self.pool.begin().await?;

        let result = sqlx::query(
            "UPDATE boards SET deleted_at = $1 WHERE id = $2 AND deleted_at IS NULL",
        )
        .bind(Utc::now())
        .bind(id.get())
        .execute(&mut *tx)
        .await?;

        tx.commit().await?;
        Ok(result.rows_affected() > 0)
    }
}
