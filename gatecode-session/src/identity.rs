//! Identity and login prompting
//!
//! The session never authenticates anyone itself. It asks an
//! [`IdentityProvider`] who is signed in and, when nobody is, tells an
//! [`AuthPrompt`] to ask the user to log in.

use gatecode_client::BearerToken;
use tracing::warn;

/// A signed-in user
#[derive(Debug, Clone)]
pub struct Identity {
    pub user_id: String,
    pub token: BearerToken,
}

/// Source of the current user
pub trait IdentityProvider: Send + Sync {
    /// The signed-in user, if any
    fn current_user(&self) -> Option<Identity>;
}

/// Fixed identity, set once at startup
#[derive(Debug, Clone, Default)]
pub struct StaticIdentity {
    identity: Option<Identity>,
}

impl StaticIdentity {
    pub fn anonymous() -> Self {
        Self { identity: None }
    }

    pub fn signed_in(user_id: impl Into<String>, token: impl Into<String>) -> Self {
        Self {
            identity: Some(Identity {
                user_id: user_id.into(),
                token: BearerToken::new(token),
            }),
        }
    }
}

impl IdentityProvider for StaticIdentity {
    fn current_user(&self) -> Option<Identity> {
        self.identity.clone()
    }
}

/// Asks the user to authenticate
pub trait AuthPrompt: Send + Sync {
    fn prompt_login(&self, problem: &str);
}

/// Prompt that only logs
#[derive(Debug, Clone, Copy, Default)]
pub struct LogAuthPrompt;

impl AuthPrompt for LogAuthPrompt {
    fn prompt_login(&self, problem: &str) {
        warn!("Sign in required to submit solutions for {}", problem);
    }
}
