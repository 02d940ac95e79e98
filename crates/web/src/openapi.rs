use axum::{Json, response::IntoResponse};
use utoipa::OpenApi;

use crate::features;

#[derive(OpenApi)]
#[openapi(
    paths(
        features::lifts::handlers::list_lifts,
        features::lifts::handlers::get_lift,
        features::lifts::handlers::create_lift,
        features::lifts::handlers::update_lift,
        features::lifts::handlers::delete_lift,
    ),
    components(
        schemas(
            storage::dto::lift::CreateLiftRequest,
            storage::dto::lift::UpdateLiftRequest,
            storage::dto::lift::LiftResponse,
        )
    ),
    tags(
        (name = "lifts", description = "Lift endpoints"),
    ),
    modifiers(&SecurityAddon)
)]
pub struct ApiDoc;

struct SecurityAddon;

impl utoipa::Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "bearer_auth",
                utoipa::openapi::security::SecurityScheme::Http(
                    utoipa::openapi::security::HttpBuilder::new()
                        .scheme(utoipa::openapi::security::HttpAuthScheme::Bearer)
                        .bearer_format("API Key")
                        .build(),
                ),
            )
        }
    }
}

pub async fn openapi_json() -> impl IntoResponse {
    Json(ApiDoc::openapi())
}
