//! User domain entity and related types.

use serde::{Deserialize, Serialize};

use crate::constants::ADULT_AGE;

/// User domain entity
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Caller-assigned identifier, unique within the store
    pub id: i64,
    pub name: String,
    pub age: u32,
}

impl User {
    /// Create a new user
    pub fn new(id: i64, name: impl Into<String>, age: u32) -> Self {
        Self {
            id,
            name: name.into(),
            age,
        }
    }

    /// Check if user has reached the adult age
    pub fn is_of_age(&self) -> bool {
        self.age >= ADULT_AGE
    }
}

/// User response (derived on every read, never stored)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct UserResponse {
    /// User identifier
    pub id: i64,
    /// User display name
    pub name: String,
    /// User age in years
    pub age: u32,
    /// Whether the user is 18 or older
    pub is_of_age: bool,
}

impl From<&User> for UserResponse {
    fn from(user: &User) -> Self {
        Self {
            id: user.id,
            name: user.name.clone(),
            age: user.age,
            is_of_age: user.is_of_age(),
        }
    }
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        let is_of_age = user.is_of_age();
        Self {
            id: user.id,
            name: user.name,
            age: user.age,
            is_of_age,
        }
    }
}

/// Project a single user into its response shape.
pub fn to_response(user: &User) -> UserResponse {
    UserResponse::from(user)
}

/// Project a list of users, preserving order and length.
pub fn to_response_list(users: &[User]) -> Vec<UserResponse> {
    users.iter().map(to_response).collect()
}
