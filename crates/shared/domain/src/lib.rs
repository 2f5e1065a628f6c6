//! Domain layer - Core business entities and value objects.
//!
//! This crate contains pure domain logic with no infrastructure dependencies:
//! the user entity, its client-facing projection and the rules that derive it.

pub mod constants;
pub mod user;

pub use constants::*;
pub use user::{to_response, to_response_list, User, UserResponse};
