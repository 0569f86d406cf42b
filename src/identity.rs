//! Current-user resolution.
//!
//! The components only need to know *who* owns the records they load and
//! write. A user comes from `identity.email` in the config or, failing that,
//! from the environment variable named by `identity.email_env`. No user means
//! nothing is loaded.

use serde::{Deserialize, Serialize};

use crate::config::IdentityConfig;

/// The signed-in user
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Owner id that scopes every stored record
    pub id: String,
    pub email: String,
}

impl User {
    /// Build a user from an email address; the owner id is the normalized email.
    /// Returns `None` for blank input.
    pub fn from_email(email: &str) -> Option<Self> {
        let email = email.trim();
        if email.is_empty() {
            return None;
        }
        Some(Self {
            id: email.to_lowercase(),
            email: email.to_string(),
        })
    }
}

/// Resolve the current user from configuration, then from the environment
pub fn resolve_user(config: &IdentityConfig) -> Option<User> {
    if let Some(user) = User::from_email(&config.email) {
        return Some(user);
    }

    if config.email_env.is_empty() {
        return None;
    }

    std::env::var(&config.email_env)
        .ok()
        .and_then(|email| User::from_email(&email))
}
