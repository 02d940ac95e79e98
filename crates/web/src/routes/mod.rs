use axum::{Router, routing::get};
use tower_http::cors::CorsLayer;

use crate::features::lifts;
use crate::middleware::auth::ApiKeys;
use crate::openapi::openapi_json;
use crate::state::AppState;

pub fn router(state: AppState, api_keys: ApiKeys) -> Router {
    Router::new()
        .nest("/api", lifts::routes::routes(api_keys))
        .route("/api-docs/openapi.json", get(openapi_json))
        .layer(CorsLayer::permissive())
        .with_state(state)
}
