//! Lift persistence.
//!
//! Every operation is a single statement against the pool. Validation runs
//! before the first statement, so a rejected create never touches the store.

use async_trait::async_trait;

use crate::error::Result;
use crate::models::Lift;

mod postgres;
mod sqlite;

pub use postgres::PgLiftRepository;
pub use sqlite::SqliteLiftRepository;

#[async_trait]
pub trait LiftStore: Send + Sync {
    /// Inserts `lift` and writes the assigned id back into it.
    ///
    /// Fails with `MissingField` when a required field is unset; `lift.id`
    /// is left untouched on every error.
    async fn create(&self, lift: &mut Lift) -> Result<()>;

    /// Fails with `NotFound` when no row has this id.
    async fn get_lift(&self, id: i64) -> Result<Lift>;

    /// Overwrites every field but the id. Never inserts.
    async fn update(&self, lift: &Lift) -> Result<()>;

    async fn delete(&self, lift: &Lift) -> Result<()>;

    /// All lifts ordered by id
    async fn list(&self) -> Result<Vec<Lift>>;
}
