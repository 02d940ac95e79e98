use std::sync::Arc;

use storage::{Database, LiftStore};

#[derive(Clone)]
pub struct AppState {
    pub lifts: Arc<dyn LiftStore>,
}

impl AppState {
    pub fn new(db: &Database) -> Self {
        Self { lifts: db.lifts() }
    }
}
