//! OpenAPI documentation.

use utoipa::OpenApi;

use crate::handlers::user_handler::CreateUserRequest;
use domain::UserResponse;

/// API documentation struct.
///
/// Every response body is wrapped as `{ "success": bool, "data": ... }`;
/// the schemas below describe what `data` carries.
#[derive(OpenApi)]
#[openapi(
    paths(
        crate::handlers::user_handler::list_users,
        crate::handlers::user_handler::get_user,
        crate::handlers::user_handler::create_user,
        crate::handlers::user_handler::delete_user,
    ),
    components(
        schemas(
            UserResponse,
            CreateUserRequest,
        )
    ),
    tags(
        (name = "Users", description = "User management endpoints"),
    )
)]
pub struct ApiDoc;
