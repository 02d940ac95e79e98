use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use storage::dto::lift::{CreateLiftRequest, LiftResponse, UpdateLiftRequest};

use crate::error::WebResult;
use crate::state::AppState;

use super::services;

#[utoipa::path(
    get,
    path = "/api/lifts",
    responses(
        (status = 200, description = "List all lifts successfully", body = Vec<LiftResponse>)
    ),
    tag = "lifts"
)]
pub async fn list_lifts(State(state): State<AppState>) -> WebResult<Response> {
    let lifts = services::list_lifts(state.lifts.as_ref()).await?;

    let response: Vec<LiftResponse> = lifts.into_iter().map(LiftResponse::from).collect();

    Ok(Json(response).into_response())
}

#[utoipa::path(
    get,
    path = "/api/lifts/{id}",
    params(
        ("id" = i64, Path, description = "Lift id")
    ),
    responses(
        (status = 200, description = "Lift found", body = LiftResponse),
        (status = 404, description = "Lift not found")
    ),
    tag = "lifts"
)]
pub async fn get_lift(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> WebResult<Response> {
    let lift = services::get_lift(state.lifts.as_ref(), id).await?;

    Ok(Json(LiftResponse::from(lift)).into_response())
}

#[utoipa::path(
    post,
    path = "/api/lifts",
    request_body = CreateLiftRequest,
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 201, description = "Lift created successfully", body = LiftResponse),
        (status = 401, description = "Unauthorized"),
        (status = 422, description = "Missing required field")
    ),
    tag = "lifts"
)]
pub async fn create_lift(
    State(state): State<AppState>,
    Json(req): Json<CreateLiftRequest>,
) -> WebResult<Response> {
    let lift = services::create_lift(state.lifts.as_ref(), req).await?;

    Ok((StatusCode::CREATED, Json(LiftResponse::from(lift))).into_response())
}

#[utoipa::path(
    put,
    path = "/api/lifts/{id}",
    params(
        ("id" = i64, Path, description = "Lift id")
    ),
    request_body = UpdateLiftRequest,
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 200, description = "Lift updated successfully", body = LiftResponse),
        (status = 401, description = "Unauthorized"),
        (status = 404, description = "Lift not found")
    ),
    tag = "lifts"
)]
pub async fn update_lift(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(update_req): Json<UpdateLiftRequest>,
) -> WebResult<Response> {
    let updated = services::update_lift(state.lifts.as_ref(), id, update_req).await?;

    Ok(Json(LiftResponse::from(updated)).into_response())
}

#[utoipa::path(
    delete,
    path = "/api/lifts/{id}",
    params(
        ("id" = i64, Path, description = "Lift id")
    ),
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 204, description = "Lift deleted successfully"),
        (status = 401, description = "Unauthorized"),
        (status = 404, description = "Lift not found")
    ),
    tag = "lifts"
)]
pub async fn delete_lift(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> WebResult<Response> {
    services::delete_lift(state.lifts.as_ref(), id).await?;

    Ok(StatusCode::NO_CONTENT.into_response())
}
