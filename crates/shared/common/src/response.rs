//! Uniform response envelope.
//!
//! Every HTTP response body has the shape `{ "success": bool, "data": ... }`
//! where `data` is a user, a list of users, or a message string.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use domain::UserResponse;
use serde::{Deserialize, Serialize};

/// Payload carried in the `data` field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ResponseData {
    Users(Vec<UserResponse>),
    User(UserResponse),
    Message(String),
}

impl From<Vec<UserResponse>> for ResponseData {
    fn from(users: Vec<UserResponse>) -> Self {
        ResponseData::Users(users)
    }
}

impl From<UserResponse> for ResponseData {
    fn from(user: UserResponse) -> Self {
        ResponseData::User(user)
    }
}

impl From<String> for ResponseData {
    fn from(message: String) -> Self {
        ResponseData::Message(message)
    }
}

impl From<&str> for ResponseData {
    fn from(message: &str) -> Self {
        ResponseData::Message(message.to_string())
    }
}

/// Standard API response wrapper
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiResponse {
    pub success: bool,
    pub data: ResponseData,
}

impl ApiResponse {
    pub fn success(data: impl Into<ResponseData>) -> Self {
        Self {
            success: true,
            data: data.into(),
        }
    }

    pub fn failure(message: impl Into<String>) -> Self {
        Self {
            success: false,
            data: ResponseData::Message(message.into()),
        }
    }

    /// Message text, if this envelope carries one
    pub fn message(&self) -> Option<&str> {
        match &self.data {
            ResponseData::Message(message) => Some(message),
            _ => None,
        }
    }
}

impl IntoResponse for ApiResponse {
    fn into_response(self) -> Response {
        (StatusCode::OK, Json(self)).into_response()
    }
}

/// Created response helper for POST endpoints
pub struct Created(pub ApiResponse);

impl IntoResponse for Created {
    fn into_response(self) -> Response {
        (StatusCode::CREATED, Json(self.0)).into_response()
    }
}
