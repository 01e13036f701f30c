//! # storage-adapters
//!
//! sqlx implementations of `BoardRepository`. Backends are compiled in by
//! feature (`db-postgres`, `db-sqlite`) and picked at runtime from the
//! database url scheme.

use std::sync::Arc;

use domains::BoardRepository;
use tracing::info;

mod row;

#[cfg(feature = "db-postgres")]
pub mod postgres;
#[cfg(feature = "db-sqlite")]
pub mod sqlite;

#[cfg(feature = "db-postgres")]
pub use postgres::PgBoardRepository;
#[cfg(feature = "db-sqlite")]
pub use sqlite::SqliteBoardRepository;

/// Connects to the backend named by `url` and makes sure the schema exists.
pub async fn connect(url: &str, max_connections: u32) -> anyhow::Result<Arc<dyn BoardRepository>> {
    let scheme = url.split(':').next().unwrap_or_default();
    info!(backend = scheme, max_connections, "connecting to database");

    match scheme {
        #[cfg(feature = "db-postgres")]
        "postgres" | "postgresql" => Ok(Arc::new(
            PgBoardRepository::connect(url, max_connections).await?,
        )),
        #[cfg(feature = "db-sqlite")]
        "sqlite" => Ok(Arc::new(
            SqliteBoardRepository::connect(url, max_connections).await?,
        )),
        other => anyhow::bail!(
            "unsupported database scheme {other:?}; compiled backends: {}",
            compiled_backends().join(", ")
        ),
    }
}

/// Names of the backends this build can talk to.
pub fn compiled_backends() -> Vec<&'static str> {
    let mut backends = Vec::new();
    if cfg!(feature = "db-postgres") {
        backends.push("postgres");
    }
    if cfg!(feature = "db-sqlite") {
        backends.push("sqlite");
    }
    backends
}
