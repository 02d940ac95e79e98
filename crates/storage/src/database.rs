use std::str::FromStr;
use std::sync::Arc;

use sqlx::postgres::PgPoolOptions;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::{PgPool, SqlitePool};

use crate::error::Result;
use crate::repository::lift::{LiftStore, PgLiftRepository, SqliteLiftRepository};

const MAX_CONNECTIONS: u32 = 10;

/// Connection pool for one of the supported backends.
///
/// The backend is picked from the URL scheme: `sqlite:` opens SQLite,
/// anything else is handed to Postgres.
#[derive(Debug, Clone)]
pub enum Database {
    Postgres(PgPool),
    Sqlite(SqlitePool),
}

impl Database {
    pub async fn new(database_url: &str) -> Result<Self> {
        if is_sqlite_url(database_url) {
            let options = SqliteConnectOptions::from_str(database_url)?.create_if_missing(true);
            let pool = SqlitePoolOptions::new()
                .max_connections(MAX_CONNECTIONS)
                .connect_with(options)
                .await?;
            return Ok(Self::Sqlite(pool));
        }

        let pool = PgPoolOptions::new()
            .max_connections(MAX_CONNECTIONS)
            .connect(database_url)
            .await?;

        Ok(Self::Postgres(pool))
    }

    /// Private SQLite database living as long as the returned handle.
    ///
    /// Every connection to `sqlite::memory:` opens its own database, so the
    /// pool is pinned to a single connection that is never recycled.
    pub async fn in_memory() -> Result<Self> {
        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .min_connections(1)
            .idle_timeout(None)
            .max_lifetime(None)
            .connect("sqlite::memory:")
            .await?;

        Ok(Self::Sqlite(pool))
    }

    pub async fn run_migrations(&self) -> Result<()> {
        match self {
            Self::Postgres(pool) => sqlx::migrate!("./migrations/postgres").run(pool).await?,
            Self::Sqlite(pool) => sqlx::migrate!("./migrations/sqlite").run(pool).await?,
        }

        Ok(())
    }

    pub fn backend_name(&self) -> &'static str {
        match self {
            Self::Postgres(_) => "postgres",
            Self::Sqlite(_) => "sqlite",
        }
    }

    /// Lift store sharing this pool
    pub fn lifts(&self) -> Arc<dyn LiftStore> {
        match self {
            Self::Postgres(pool) => Arc::new(PgLiftRepository::new(pool.clone())),
            Self::Sqlite(pool) => Arc::new(SqliteLiftRepository::new(pool.clone())),
        }
    }

    pub async fn close(&self) {
        match self {
            Self::Postgres(pool) => pool.close().await,
            Self::Sqlite(pool) => pool.close().await,
        }
    }
}

fn is_sqlite_url(database_url: &str) -> bool {
    database_url.starts_with("sqlite:")
}
