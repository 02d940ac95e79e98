use std::str::FromStr;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use sqlx::{FromRow, SqlitePool};

use super::LiftStore;
use crate::error::{Result, StorageError};
use crate::models::Lift;

/// SQLite has no exact numeric type, so `max` is stored as a decimal string.
#[derive(Debug, FromRow)]
struct LiftRow {
    id: i64,
    name: String,
    max: Option<String>,
    created_at: DateTime<Utc>,
}

impl TryFrom<LiftRow> for Lift {
    type Error = StorageError;

    fn try_from(row: LiftRow) -> Result<Self> {
        let max = match row.max.as_deref() {
            None => Decimal::ZERO,
            Some(raw) => Decimal::from_str(raw).map_err(|e| {
                StorageError::InvalidData(format!("lift {} has malformed max {raw:?}: {e}", row.id))
            })?,
        };

        Ok(Lift {
            id: row.id,
            name: row.name,
            max,
            created_at: Some(row.created_at),
        })
    }
}

#[derive(Debug, Clone)]
pub struct SqliteLiftRepository {
    pool: SqlitePool,
}

impl SqliteLiftRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl LiftStore for SqliteLiftRepository {
    async fn create(&self, lift: &mut Lift) -> Result<()> {
        lift.check_required()?;

        let id: i64 = sqlx::query_scalar(
            r#"
            INSERT INTO lifts (name, max, created_at)
            VALUES (?1, ?2, ?3)
            RETURNING id
            "#,
        )
        .bind(&lift.name)
        .bind(lift.max.to_string())
        .bind(lift.created_at)
        .fetch_one(&self.pool)
        .await?;

        lift.id = id;
        tracing::debug!(lift_id = id, "lift created");

        Ok(())
    }

    async fn get_lift(&self, id: i64) -> Result<Lift> {
        let row = sqlx::query_as::<_, LiftRow>(
            r#"
            SELECT id, name, max, created_at
            FROM lifts
            WHERE id = ?1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?
        .ok_or(StorageError::NotFound)?;

        Lift::try_from(row)
    }

    async fn update(&self, lift: &Lift) -> Result<()> {
        let result = sqlx::query(
            r#"
            UPDATE lifts
            SET name = ?2,
                max = ?3,
                created_at = COALESCE(?4, created_at)
            WHERE id = ?1
            "#,
        )
        .bind(lift.id)
        .bind(&lift.name)
        .bind(lift.max.to_string())
        .bind(lift.created_at)
        .execute(&self.pool)
        .await?;

        if result.rows_affected() == 0 {
            return Err(StorageError::NotFound);
        }

        tracing::debug!(lift_id = lift.id, "lift updated");
        Ok(())
    }

    async fn delete(&self, lift: &Lift) -> Result<()> {
        let result = sqlx::query("DELETE FROM lifts WHERE id = ?1")
            .bind(lift.id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(StorageError::NotFound);
        }

        tracing::debug!(lift_id = lift.id, "lift deleted");
        Ok(())
    }

    async fn list(&self) -> Result<Vec<Lift>> {
        sqlx::query_as::<_, LiftRow>(
            r#"
            SELECT id, name, max, created_at
            FROM lifts
            ORDER BY id
            "#,
        )
        .fetch_all(&self.pool)
        .await?
        .into_iter()
        .map(Lift::try_from)
        .collect()
    }
}
