//! User Service Library
//!
//! Owns the user collection. The HTTP layer only sees the
//! [`UserRepository`] trait, so the in-memory [`UserStore`] can be swapped
//! for a persistent backend or a test double.

pub mod config;
pub mod repository;

pub use config::RepositoryConfig;
pub use repository::{seed_users, UserRepository, UserStore};

#[cfg(any(test, feature = "test-utils"))]
pub use repository::MockUserRepository;
