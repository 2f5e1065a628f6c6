//! Repository configuration.

use std::env;

/// Repository configuration.
#[derive(Debug, Clone)]
pub struct RepositoryConfig {
    /// Populate the store with the demo users at startup
    pub seed_users: bool,
}

impl RepositoryConfig {
    /// Load configuration from environment variables.
    pub fn from_env() -> Self {
        Self {
            seed_users: env::var("SEED_USERS")
                .ok()
                .and_then(|v| parse_flag(&v))
                .unwrap_or(true),
        }
    }
}

impl Default for RepositoryConfig {
    fn default() -> Self {
        Self { seed_users: true }
    }
}

fn parse_flag(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}
