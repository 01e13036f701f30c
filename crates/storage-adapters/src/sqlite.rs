//! # SQLite `BoardRepository`
//!
//! Used for local development and the test suites. `sqlite::memory:` gets a
//! single-connection pool so every query sees the same in-memory database.

use std::str::FromStr;

use anyhow::Context;
use async_trait::async_trait;
use chrono::Utc;
use domains::{Board, BoardChanges, BoardId, BoardRepository, NewBoard};
use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions};
use tracing::info;

use crate::row::{into_boards, BoardRow};

const SCHEMA: &str = r#"
CREATE TABLE IF NOT EXISTS boards (
    id          INTEGER PRIMARY KEY AUTOINCREMENT,
    title       VARCHAR(200) NOT NULL,
    content     TEXT NOT NULL,
    created_at  TIMESTAMP NOT NULL DEFAULT CURRENT_TIMESTAMP,
    updated_at  TIMESTAMP NULL,
    deleted_at  TIMESTAMP NULL
)"#;

pub struct SqliteBoardRepository {
    pool: SqlitePool,
}

impl SqliteBoardRepository {
    /// Opens (creating if needed) the database file and the `boards` table.
    pub async fn connect(url: &str, max_connections: u32) -> anyhow::Result<Self> {
        let options = SqliteConnectOptions::from_str(url)
            .context("invalid SQLite url")?
            .create_if_missing(true);

        let mut pool_options = SqlitePoolOptions::new().max_connections(max_connections);
        if url.contains(":memory:") {
            pool_options = pool_options
                .max_connections(1)
                .idle_timeout(None)
                .max_lifetime(None);
        }

        let pool = pool_options
            .connect_with(options)
            .await
            .context("failed to open SQLite database")?;

        let repo = Self::from_pool(pool);
        repo.init_schema().await?;
        Ok(repo)
    }

    pub async fn in_memory() -> anyhow::Result<Self> {
        Self::connect("sqlite::memory:", 1).await
    }

    pub fn from_pool(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    pub async fn init_schema(&self) -> anyhow::Result<()> {
        let mut tx = self.pool.begin().await?;
        sqlx::query(SCHEMA)
            .execute(&mut *tx)
            .await
            .context("failed to create boards table")?;
        tx.commit().await?;
        info!("SQLite schema ready");
        Ok(())
    }
}

#[async_trait]
impl BoardRepository for SqliteBoardRepository {
    async fn list(&self, limit: i64, offset: i64) -> anyhow::Result<Vec<Board>> {
        let rows = sqlx::query_as::<_, BoardRow>(
            "SELECT id, title, content, created_at, updated_at, deleted_at FROM boards \
             WHERE deleted_at IS NULL ORDER BY id DESC LIMIT ? OFFSET ?",
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
             WHERE id = ? AND deleted_at IS NULL",
        )
        .bind(id.get())
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(Board::try_from).transpose()?)
    }

    async fn insert(&self, board: &NewBoard) -> anyhow::Result<BoardId> {
        let mut tx = self.pool.begin().await?;

        let id: i64 = sqlx::query_scalar(
            "INSERT INTO boards (title, content, created_at) VALUES (?, ?, ?) RETURNING id",
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
            "UPDATE boards SET title = ?, content = ?, updated_at = ? \
             WHERE id = ? AND deleted_at IS NULL",
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

        let result =
            sqlx::query("UPDATE boards SET deleted_at = ? WHERE id = ? AND deleted_at IS NULL")
                .bind(Utc::now())
                .bind(id.get())
                .execute(&mut *tx)
                .await?;

        tx.commit().await?;
        Ok(result.rows_affected() > 0)
    }
}
