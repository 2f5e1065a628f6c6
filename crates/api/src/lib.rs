//! Users API Library
//!
//! HTTP surface over the user repository: list, get, create and delete
//! users, every response wrapped in the `{ success, data }` envelope.

pub mod config;
pub mod extractors;
pub mod handlers;
pub mod openapi;
pub mod routes;
pub mod state;

use std::net::SocketAddr;
use std::sync::Arc;

use axum::Router;
use tower_http::trace::TraceLayer;
use tracing::info;

use common::{AppError, AppResult};
use user_service_lib::{UserRepository, UserStore};

use crate::config::ApiConfig;
use crate::routes::create_router;
use crate::state::AppState;

/// Build the application router around a repository.
pub fn app(users: Arc<dyn UserRepository>) -> Router {
    create_router(AppState::new(users))
}

/// Run the HTTP server with the given configuration.
pub async fn run(config: ApiConfig) -> AppResult<()> {
    let store = UserStore::from_config(&config.repository);
    info!("User store ready with {} users", store.len().await);

    // Build router
    let router = app(Arc::new(store)).layer(TraceLayer::new_for_http());

    // Build address
    let addr: SocketAddr = config
        .server_addr()
        .parse()
        .map_err(|e| AppError::internal(format!("Invalid address {}: {}", config.server_addr(), e)))?;

    // Run server
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .map_err(|e| AppError::internal(format!("Failed to bind to {}: {}", addr, e)))?;
    info!("Users API listening on http://{}", addr);

    axum::serve(listener, router)
        .await
        .map_err(|e| AppError::internal(format!("Server error: {}", e)))?;

    Ok(())
}
