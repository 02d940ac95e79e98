use axum::{
    Router, middleware,
    routing::{get, post, put},
};

use super::handlers::{create_lift, delete_lift, get_lift, list_lifts, update_lift};
use crate::middleware::auth::{ApiKeys, require_auth};
use crate::state::AppState;

pub fn routes(api_keys: ApiKeys) -> Router<AppState> {
    let protected = Router::new()
        .route("/lifts", post(create_lift))
        .route("/lifts/:id", put(update_lift).delete(delete_lift))
        .route_layer(middleware::from_fn_with_state(api_keys, require_auth));

    Router::new()
        .route("/lifts", get(list_lifts))
        .route("/lifts/:id", get(get_lift))
        .merge(protected)
}
