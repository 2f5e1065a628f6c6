//! Repository layer for data access.

mod user_repository;

pub use user_repository::{seed_users, UserRepository, UserStore};

#[cfg(any(test, feature = "test-utils"))]
pub use user_repository::MockUserRepository;
