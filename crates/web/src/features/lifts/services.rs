use chrono::Utc;
use storage::{
    Lift, LiftStore,
    dto::lift::{CreateLiftRequest, UpdateLiftRequest},
    error::Result,
};

/// List all lifts
pub async fn list_lifts(store: &dyn LiftStore) -> Result<Vec<Lift>> {
    store.list().await
}

/// Get lift by id
pub async fn get_lift(store: &dyn LiftStore, id: i64) -> Result<Lift> {
    store.get_lift(id).await
}

/// Create a new lift, stamping the creation time when the request has none
pub async fn create_lift(store: &dyn LiftStore, request: CreateLiftRequest) -> Result<Lift> {
    let mut lift = request.into_lift(Utc::now());
    store.create(&mut lift).await?;
    Ok(lift)
}

/// Update a lift
pub async fn update_lift(
    store: &dyn LiftStore,
    id: i64,
    request: UpdateLiftRequest,
) -> Result<Lift> {
    let mut lift = store.get_lift(id).await?;
    request.apply(&mut lift);
    store.update(&lift).await?;
    Ok(lift)
}

/// Delete a lift
pub async fn delete_lift(store: &dyn LiftStore, id: i64) -> Result<()> {
    let lift = store.get_lift(id).await?;
    store.delete(&lift).await
}
