//! User handlers.
//!
//! Each handler calls the repository once and turns the outcome into a
//! single envelope: list and lookup go through the response transformer,
//! writes answer with a message.

use axum::{
    extract::State,
    routing::get,
    Router,
};
use serde::Deserialize;
use utoipa::ToSchema;
use validator::Validate;

use common::{ApiResponse, AppError, AppResult, Created, OptionExt};
use domain::{
    to_response, to_response_list, User, MSG_USER_CREATED, MSG_USER_CREATE_FAILED, MSG_USER_DELETED,
    MSG_USER_DELETE_FAILED, MSG_USER_NOT_FOUND,
};

use crate::extractors::{UserId, ValidatedJson};
use crate::state::AppState;

/// User creation request
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateUserRequest {
    /// Caller-assigned identifier
    pub id: i64,
    /// Display name
    #[validate(length(min = 1, message = "O nome do usuário é obrigatório"))]
    pub name: String,
    /// Age in years
    pub age: u32,
}

impl From<CreateUserRequest> for User {
    fn from(request: CreateUserRequest) -> Self {
        User::new(request.id, request.name, request.age)
    }
}

/// Create user routes
pub fn user_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(list_users).post(create_user))
        .route("/:id", get(get_user).delete(delete_user))
}

/// List all users
#[utoipa::path(
    get,
    path = "/users",
    tag = "Users",
    responses(
        (status = 200, description = "Envelope with every stored user", body = [UserResponse])
    )
)]
pub async fn list_users(State(state): State<AppState>) -> ApiResponse {
    let users = state.users.list().await;
    tracing::debug!(count = users.len(), "Listing users");

    ApiResponse::success(to_response_list(&users))
}

/// Get user by ID
#[utoipa::path(
    get,
    path = "/users/{id}",
    tag = "Users",
    params(
        ("id" = i64, Path, description = "User ID")
    ),
    responses(
        (status = 200, description = "Envelope with the user", body = UserResponse),
        (status = 400, description = "Id is not an integer"),
        (status = 404, description = "User not found")
    )
)]
pub async fn get_user(
    State(state): State<AppState>,
    UserId(id): UserId,
) -> AppResult<ApiResponse> {
    let user = state
        .users
        .find_one(id)
        .await
        .ok_or_not_found(MSG_USER_NOT_FOUND)?;

    Ok(ApiResponse::success(to_response(&user)))
}

/// Create a user
#[utoipa::path(
    post,
    path = "/users",
    tag = "Users",
    request_body = CreateUserRequest,
    responses(
        (status = 201, description = "User created"),
        (status = 400, description = "Missing or malformed fields"),
        (status = 500, description = "Store rejected the user")
    )
)]
pub async fn create_user(
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<CreateUserRequest>,
) -> AppResult<Created> {
    let user = User::from(payload);
    let id = user.id;

    if !state.users.save(user).await {
        return Err(AppError::operation_failed(MSG_USER_CREATE_FAILED));
    }

    tracing::info!(id, "User created");
    Ok(Created(ApiResponse::success(MSG_USER_CREATED)))
}

/// Delete user by ID
#[utoipa::path(
    delete,
    path = "/users/{id}",
    tag = "Users",
    params(
        ("id" = i64, Path, description = "User ID")
    ),
    responses(
        (status = 200, description = "User deleted"),
        (status = 400, description = "Id is not an integer"),
        (status = 500, description = "User could not be removed")
    )
)]
pub async fn delete_user(
    State(state): State<AppState>,
    UserId(id): UserId,
) -> AppResult<ApiResponse> {
    // A missing id is reported the same way as a failed removal
    if !state.users.delete(id).await {
        return Err(AppError::operation_failed(MSG_USER_DELETE_FAILED));
    }

    tracing::info!(id, "User deleted");
    Ok(ApiResponse::success(MSG_USER_DELETED))
}
