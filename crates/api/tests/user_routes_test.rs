//! Integration tests for the user endpoints.
//!
//! Each test builds its own router around a mock or in-memory repository
//! and drives it in-process.

use std::sync::Arc;

use axum::{
    body::{to_bytes, Body},
    http::{header, Method, Request, StatusCode},
    Router,
};
use mockall::predicate::eq;
use serde_json::{json, Value};
use tower::ServiceExt;

use api_lib::app;
use common::ApiResponse;
use domain::User;
use user_service_lib::{MockUserRepository, UserStore};

// =============================================================================
// Test Helpers
// =============================================================================

fn ninjas() -> Vec<User> {
    vec![
        User::new(1, "Naruto", 10),
        User::new(2, "Sasuke", 18),
        User::new(3, "Kakashi", 50),
    ]
}

fn mock_app(repo: MockUserRepository) -> Router {
    app(Arc::new(repo))
}

fn store_app() -> (Router, Arc<UserStore>) {
    let store = Arc::new(UserStore::seeded());
    (app(store.clone()), store)
}

fn request(method: Method, uri: &str) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

fn post_json(uri: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method(Method::POST)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

async fn send(app: Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    (status, serde_json::from_slice(&bytes).unwrap())
}

async fn send_envelope(app: Router, request: Request<Body>) -> (StatusCode, ApiResponse) {
    let (status, body) = send(app, request).await;
    (status, serde_json::from_value(body).unwrap())
}

// =============================================================================
// List
// =============================================================================

#[tokio::test]
async fn test_list_users_derives_is_of_age() {
    let mut repo = MockUserRepository::new();
    repo.expect_list().times(1).returning(ninjas);

    let (status, body) = send(mock_app(repo), request(Method::GET, "/users")).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        json!({
            "success": true,
            "data": [
                { "id": 1, "name": "Naruto", "age": 10, "isOfAge": false },
                { "id": 2, "name": "Sasuke", "age": 18, "isOfAge": true },
                { "id": 3, "name": "Kakashi", "age": 50, "isOfAge": true }
            ]
        })
    );
}

#[tokio::test]
async fn test_list_users_empty() {
    let mut repo = MockUserRepository::new();
    repo.expect_list().times(1).returning(Vec::new);

    let (status, body) = send(mock_app(repo), request(Method::GET, "/users")).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "success": true, "data": [] }));
}

#[tokio::test]
async fn test_list_users_single() {
    let mut repo = MockUserRepository::new();
    repo.expect_list()
        .times(1)
        .returning(|| vec![User::new(1, "Naruto", 10)]);

    let (status, body) = send(mock_app(repo), request(Method::GET, "/users")).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        json!({
            "success": true,
            "data": [{ "id": 1, "name": "Naruto", "age": 10, "isOfAge": false }]
        })
    );
}

// =============================================================================
// Get one
// =============================================================================

#[tokio::test]
async fn test_get_user() {
    let mut repo = MockUserRepository::new();
    repo.expect_find_one()
        .with(eq(1i64))
        .times(1)
        .returning(|id| Some(User::new(id, "Naruto", 10)));

    let (status, body) = send(mock_app(repo), request(Method::GET, "/users/1")).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        json!({
            "success": true,
            "data": { "id": 1, "name": "Naruto", "age": 10, "isOfAge": false }
        })
    );
}

#[tokio::test]
async fn test_get_user_not_found() {
    let mut repo = MockUserRepository::new();
    repo.expect_find_one()
        .with(eq(999i64))
        .times(1)
        .returning(|_| None);

    let (status, body) = send(mock_app(repo), request(Method::GET, "/users/999")).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, json!({ "success": false, "data": "Usuário não encontrado" }));
}

#[tokio::test]
async fn test_get_user_rejects_non_integer_id() {
    let mut repo = MockUserRepository::new();
    repo.expect_find_one().never();

    let (status, body) = send_envelope(mock_app(repo), request(Method::GET, "/users/abc")).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(!body.success);
    assert_eq!(body.message(), Some("Identificador de usuário inválido"));
}

#[tokio::test]
async fn test_age_boundary_through_http() {
    let mut repo = MockUserRepository::new();
    repo.expect_find_one()
        .with(eq(17i64))
        .returning(|id| Some(User::new(id, "Sakura", 17)));
    repo.expect_find_one()
        .with(eq(18i64))
        .returning(|id| Some(User::new(id, "Sakura", 18)));
    let app = mock_app(repo);

    let (_, body) = send(app.clone(), request(Method::GET, "/users/17")).await;
    assert_eq!(body["data"]["isOfAge"], json!(false));

    let (_, body) = send(app, request(Method::GET, "/users/18")).await;
    assert_eq!(body["data"]["isOfAge"], json!(true));
}

// =============================================================================
// Create
// =============================================================================

#[tokio::test]
async fn test_create_user() {
    let mut repo = MockUserRepository::new();
    repo.expect_save()
        .with(eq(User::new(1, "Naruto", 10)))
        .times(1)
        .returning(|_| true);

    let (status, body) = send(
        mock_app(repo),
        post_json("/users", json!({ "id": 1, "name": "Naruto", "age": 10 })),
    )
    .await;

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body, json!({ "success": true, "data": "Usuário criado com sucesso" }));
}

#[tokio::test]
async fn test_create_user_store_failure() {
    let mut repo = MockUserRepository::new();
    repo.expect_save().times(1).returning(|_| false);

    let (status, body) = send(
        mock_app(repo),
        post_json("/users", json!({ "id": 1, "name": "Naruto", "age": 10 })),
    )
    .await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body, json!({ "success": false, "data": "Falha ao criar o usuário" }));
}

#[tokio::test]
async fn test_create_user_missing_field() {
    let mut repo = MockUserRepository::new();
    repo.expect_save().never();

    let (status, body) = send_envelope(
        mock_app(repo),
        post_json("/users", json!({ "id": 1, "name": "Naruto" })),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(!body.success);
    assert!(body
        .message()
        .unwrap()
        .starts_with("Corpo da requisição inválido"));
}

#[tokio::test]
async fn test_create_user_negative_age() {
    let mut repo = MockUserRepository::new();
    repo.expect_save().never();

    let (status, body) = send_envelope(
        mock_app(repo),
        post_json("/users", json!({ "id": 1, "name": "Naruto", "age": -1 })),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(!body.success);
}

#[tokio::test]
async fn test_create_user_empty_name() {
    let mut repo = MockUserRepository::new();
    repo.expect_save().never();

    let (status, body) = send(
        mock_app(repo),
        post_json("/users", json!({ "id": 1, "name": "", "age": 10 })),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, json!({ "success": false, "data": "O nome do usuário é obrigatório" }));
}

// =============================================================================
// Delete
// =============================================================================

#[tokio::test]
async fn test_delete_user() {
    let mut repo = MockUserRepository::new();
    repo.expect_delete()
        .with(eq(1i64))
        .times(1)
        .returning(|_| true);

    let (status, body) = send(mock_app(repo), request(Method::DELETE, "/users/1")).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "success": true, "data": "Usuário excluído com sucesso" }));
}

#[tokio::test]
async fn test_delete_user_failure() {
    let mut repo = MockUserRepository::new();
    repo.expect_delete().times(1).returning(|_| false);

    let (status, body) = send(mock_app(repo), request(Method::DELETE, "/users/1")).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body, json!({ "success": false, "data": "Falha ao remover o usuário" }));
}

// =============================================================================
// In-memory store
// =============================================================================

#[tokio::test]
async fn test_seeded_store_lists_demo_users() {
    let (app, _store) = store_app();

    let (status, body) = send(app, request(Method::GET, "/users")).await;

    assert_eq!(status, StatusCode::OK);
    let flags: Vec<_> = body["data"]
        .as_array()
        .unwrap()
        .iter()
        .map(|u| u["isOfAge"].as_bool().unwrap())
        .collect();
    assert_eq!(flags, vec![false, true, true]);
}

#[tokio::test]
async fn test_store_lifecycle() {
    let (app, store) = store_app();

    let (status, _) = send(
        app.clone(),
        post_json("/users", json!({ "id": 4, "name": "Sakura", "age": 17 })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(store.len().await, 4);

    // Duplicate id is rejected by the store
    let (status, body) = send_envelope(
        app.clone(),
        post_json("/users", json!({ "id": 4, "name": "Hinata", "age": 17 })),
    )
    .await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body.message(), Some("Falha ao criar o usuário"));

    let (status, body) = send(app.clone(), request(Method::GET, "/users/4")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["name"], json!("Sakura"));

    let (status, _) = send(app.clone(), request(Method::DELETE, "/users/4")).await;
    assert_eq!(status, StatusCode::OK);

    let (status, _) = send(app.clone(), request(Method::GET, "/users/4")).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    // Deleting again reports a failed removal
    let (status, body) = send_envelope(app, request(Method::DELETE, "/users/4")).await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body.message(), Some("Falha ao remover o usuário"));
    assert_eq!(store.len().await, 3);
}

// =============================================================================
// Other routes
// =============================================================================

#[tokio::test]
async fn test_health_reports_user_count() {
    let (app, _store) = store_app();

    let (status, body) = send(app, request(Method::GET, "/health")).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "status": "healthy", "users": 3 }));
}

#[tokio::test]
async fn test_unknown_route_uses_envelope() {
    let (app, _store) = store_app();

    let (status, body) = send(app, request(Method::GET, "/posts")).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, json!({ "success": false, "data": "Rota não encontrada" }));
}

#[tokio::test]
async fn test_openapi_document_lists_user_paths() {
    let (app, _store) = store_app();

    let (status, body) = send(app, request(Method::GET, "/api-docs/openapi.json")).await;

    assert_eq!(status, StatusCode::OK);
    assert!(body["paths"].get("/users").is_some());
    assert!(body["paths"].get("/users/{id}").is_some());
}

#[tokio::test]
async fn test_health_counts_without_listing() {
    let mut repo = MockUserRepository::new();
    repo.expect_count().times(1).returning(|| 7);
    repo.expect_list().never();

    let (status, body) = send(mock_app(repo), request(Method::GET, "/health")).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "status": "healthy", "users": 7 }));
}

#[tokio::test]
async fn test_wrong_method_uses_envelope() {
    // No expectations: the repository must not be reached
    let repo = MockUserRepository::new();

    let (status, body) = send(mock_app(repo), request(Method::PUT, "/users/1")).await;

    assert_eq!(status, StatusCode::METHOD_NOT_ALLOWED);
    assert_eq!(body, json!({ "success": false, "data": "Método não permitido" }));
}

#[tokio::test]
async fn test_wrong_method_on_collection_uses_envelope() {
    let (app, store) = store_app();

    let (status, body) = send(app, request(Method::PATCH, "/users")).await;

    assert_eq!(status, StatusCode::METHOD_NOT_ALLOWED);
    assert_eq!(body["success"], json!(false));
    assert_eq!(store.len().await, 3);
}

#[tokio::test]
async fn test_openapi_document_describes_user_schemas() {
    let (app, _store) = store_app();

    let (status, body) = send(app, request(Method::GET, "/api-docs/openapi.json")).await;

    assert_eq!(status, StatusCode::OK);
    let schemas = &body["components"]["schemas"];
    assert!(schemas["UserResponse"]["properties"].get("isOfAge").is_some());
    assert!(schemas["CreateUserRequest"]["properties"].get("name").is_some());
}
