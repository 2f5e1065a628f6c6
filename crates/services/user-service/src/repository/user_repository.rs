//! User repository with an in-memory implementation.

use async_trait::async_trait;
use tokio::sync::RwLock;

use domain::User;

use crate::config::RepositoryConfig;

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// User repository trait for dependency injection.
///
/// Outcomes are plain values: a missing user is `None` and a rejected
/// write is `false`. Callers decide how to report them.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// All users in insertion order
    async fn list(&self) -> Vec<User>;

    /// Find user by ID
    async fn find_one(&self, id: i64) -> Option<User>;

    /// Store a new user, returns false if the store rejects it
    async fn save(&self, user: User) -> bool;

    /// Remove user by ID, returns false if nothing was removed
    async fn delete(&self, id: i64) -> bool;

    /// Number of users currently held
    async fn count(&self) -> usize;
}

/// Demo users loaded at startup.
pub fn seed_users() -> Vec<User> {
    vec![
        User::new(1, "Naruto", 10),
        User::new(2, "Sasuke", 18),
        User::new(3, "Kakashi", 50),
    ]
}

/// In-memory implementation of UserRepository
#[derive(Debug, Default)]
pub struct UserStore {
    users: RwLock<Vec<User>>,
}

impl UserStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store holding `users` in the given order
    pub fn with_users(users: Vec<User>) -> Self {
        Self {
            users: RwLock::new(users),
        }
    }

    /// Create a store holding the demo users
    pub fn seeded() -> Self {
        Self::with_users(seed_users())
    }

    /// Create a store according to configuration
    pub fn from_config(config: &RepositoryConfig) -> Self {
        if config.seed_users {
            Self::seeded()
        } else {
            Self::new()
        }
    }

    /// Number of users currently held
    pub async fn len(&self) -> usize {
        self.users.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.users.read().await.is_empty()
    }
}

#[async_trait]
impl UserRepository for UserStore {
    async fn list(&self) -> Vec<User> {
        self.users.read().await.clone()
    }

    async fn find_one(&self, id: i64) -> Option<User> {
        self.users
            .read()
            .await
            .iter()
            .find(|user| user.id == id)
            .cloned()
    }

    async fn save(&self, user: User) -> bool {
        let mut users = self.users.write().await;

        // Ids are caller-assigned and must stay unique
        if users.iter().any(|existing| existing.id == user.id) {
            tracing::debug!(id = user.id, "Rejecting user with duplicate id");
            return false;
        }

        users.push(user);
        true
    }

    async fn delete(&self, id: i64) -> bool {
        let mut users = self.users.write().await;

        match users.iter().position(|user| user.id == id) {
            Some(index) => {
                users.remove(index);
                true
            }
            None => false,
        }
    }

    async fn count(&self) -> usize {
        self.len().await
    }
}
