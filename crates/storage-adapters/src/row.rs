//! Mapping between the `boards` table and the domain `Board`.

use chrono::{DateTime, Utc};
use domains::{Board, BoardId, DomainError};

#[derive(Debug, sqlx::FromRow)]
pub(crate) struct BoardRow {
    pub id: i64,
    pub title: String,
    pub content: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: Option<DateTime<Utc>>,
    pub deleted_at: Option<DateTime<Utc>>,
}

impl TryFrom<BoardRow> for Board {
    type Error = DomainError;

    fn try_from(row: BoardRow) -> Result<Self, Self::Error> {
        Ok(Board {
            id: BoardId::new(row.id)?,
            title: row.title,
            content: row.content,
            created_at: row.created_at,
            updated_at: row.updated_at,
            deleted_at: row.deleted_at,
        })
    }
}

pub(crate) fn into_boards(rows: Vec<BoardRow>) -> anyhow::Result<Vec<Board>> {
    rows.into_iter()
        .map(|row| Board::try_from(row).map_err(anyhow::Error::from))
        .collect()
}
