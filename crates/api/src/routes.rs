//! Route configuration.

use axum::Router;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use common::{AppError, AppResult};
use domain::{MSG_METHOD_NOT_ALLOWED, MSG_ROUTE_NOT_FOUND};

use crate::handlers::{health_routes, user_routes};
use crate::openapi::ApiDoc;
use crate::state::AppState;

/// Create the main router with all routes.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .nest("/health", health_routes())
        // Swagger UI
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .nest("/users", user_routes())
        .fallback(route_not_found)
        // Registered after every route so nested method routers pick it up
        .method_not_allowed_fallback(method_not_allowed)
        .with_state(state)
}

async fn route_not_found() -> AppResult<()> {
    Err(AppError::not_found(MSG_ROUTE_NOT_FOUND))
}

async fn method_not_allowed() -> AppResult<()> {
    Err(AppError::method_not_allowed(MSG_METHOD_NOT_ALLOWED))
}
