//! Configuration module
//!
//! Turns CLI flags into session configuration and an identity.

use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use gatecode_session::{SessionConfig, SolvedStore, StaticIdentity, open_solved_store};

/// CLI configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// Judge backend base URL
    pub backend_url: String,

    /// Deadline for quick runs, in seconds
    pub run_timeout_secs: u64,

    /// Signed-in user id
    pub user: Option<String>,

    /// Bearer token of the signed-in user
    pub token: Option<String>,

    /// JSON document holding solved problems
    pub solved_store: Option<PathBuf>,
}

impl Config {
    /// Session configuration derived from the flags
    pub fn session_config(&self) -> anyhow::Result<SessionConfig> {
        let mut config = SessionConfig::new(&self.backend_url)
            .with_run_timeout(Duration::from_secs(self.run_timeout_secs));
        if let Some(path) = &self.solved_store {
            config = config.with_solved_store(path);
        }
        config.validate()?;
        Ok(config)
    }

    /// Identity from `--user` and `--token`; both are needed to sign in
    pub fn identity(&self) -> StaticIdentity {
        match (&self.user, &self.token) {
            (Some(user), Some(token)) if !user.is_empty() && !token.is_empty() => {
                StaticIdentity::signed_in(user, token)
            }
            _ => StaticIdentity::anonymous(),
        }
    }

    pub fn solved_store(&self) -> Arc<dyn SolvedStore> {
        open_solved_store(self.solved_store.as_deref())
    }
}
