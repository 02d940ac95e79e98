use async_trait::async_trait;
use sqlx::PgPool;

use super::LiftStore;
use crate::error::{Result, StorageError};
use crate::models::Lift;

#[derive(Debug, Clone)]
pub struct PgLiftRepository {
    pool: PgPool,
}

impl PgLiftRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl LiftStore for PgLiftRepository {
    async fn create(&self, lift: &mut Lift) -> Result<()> {
        lift.check_required()?;

        let id: i64 = sqlx::query_scalar(
            r#"
            INSERT INTO lifts (name, max, created_at)
            VALUES ($1, $2, $3)
            RETURNING id
            "#,
        )
        .bind(&lift.name)
        .bind(lift.max)
        .bind(lift.created_at)
        .fetch_one(&self.pool)
        .await?;

        lift.id = id;
        tracing::debug!(lift_id = id, "lift created");

        Ok(())
    }

    async fn get_lift(&self, id: i64) -> Result<Lift> {
        let lift = sqlx::query_as::<_, Lift>(
            r#"
            SELECT id, name, COALESCE(max, 0) AS max, created_at
            FROM lifts
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?
        .ok_or(StorageError::NotFound)?;

        Ok(lift)
    }

    async fn update(&self, lift: &Lift) -> Result<()> {
        // An unset created_at keeps the stored one
        let result = sqlx::query(
            r#"
            UPDATE lifts
            SET name = $2,
                max = $3,
                created_at = COALESCE($4, created_at)
            WHERE id = $1
            "#,
        )
        .bind(lift.id)
        .bind(&lift.name)
        .bind(lift.max)
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
        let result = sqlx::query("DELETE FROM lifts WHERE id = $1")
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
        let lifts = sqlx::query_as::<_, Lift>(
            r#"
            SELECT id, name, COALESCE(max, 0) AS max, created_at
            FROM lifts
            ORDER BY id
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(lifts)
    }
}
