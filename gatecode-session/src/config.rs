//! Session configuration
//!
//! Defines the tunables of a playground session: where the judge backend
//! lives, how long an interactive run may take, and where solved problems
//! are persisted.

use std::path::PathBuf;
use std::time::Duration;

/// Default backend used by local development setups
pub const DEFAULT_BACKEND_URL: &str = "http://localhost:8081";

/// Session configuration
#[derive(Debug, Clone)]
pub struct SessionConfig {
    /// Judge backend base URL (e.g., "http://localhost:8081")
    pub backend_url: String,

    /// Client-side deadline for quick runs; judging has none
    pub run_timeout: Duration,

    /// Number of history records fetched per request
    pub history_limit: u32,

    /// JSON document holding solved problems, in-memory when unset
    pub solved_store_path: Option<PathBuf>,
}

impl SessionConfig {
    /// Creates a new configuration with defaults
    pub fn new(backend_url: impl Into<String>) -> Self {
        Self {
            backend_url: backend_url.into(),
            run_timeout: Duration::from_secs(5),
            history_limit: 20,
            solved_store_path: None,
        }
    }

    pub fn with_run_timeout(mut self, run_timeout: Duration) -> Self {
        self.run_timeout = run_timeout;
        self
    }

    pub fn with_history_limit(mut self, history_limit: u32) -> Self {
        self.history_limit = history_limit;
        self
    }

    pub fn with_solved_store(mut self, path: impl Into<PathBuf>) -> Self {
        self.solved_store_path = Some(path.into());
        self
    }

    /// Validates the configuration
    pub fn validate(&self) -> anyhow::Result<()> {
        if self.backend_url.is_empty() {
            anyhow::bail!("backend_url cannot be empty");
        }

        if !self.backend_url.starts_with("http://") && !self.backend_url.starts_with("https://") {
            anyhow::bail!("backend_url must start with http:// or https://");
        }

        if self.run_timeout.is_zero() {
            anyhow::bail!("run_timeout must be greater than 0");
        }

        if self.history_limit == 0 {
            anyhow::bail!("history_limit must be greater than 0");
        }

        Ok(())
    }
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self::new(DEFAULT_BACKEND_URL)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = SessionConfig::default();
        assert_eq!(config.backend_url, "http://localhost:8081");
        assert_eq!(config.run_timeout, Duration::from_secs(5));
        assert_eq!(config.history_limit, 20);
        assert!(config.solved_store_path.is_none());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_config_validation() {
        let mut config = SessionConfig::default();

        config.backend_url = "judge.local".to_string();
        assert!(config.validate().is_err());

        config.backend_url = "https://judge.local".to_string();
        assert!(config.validate().is_ok());

        config.run_timeout = Duration::ZERO;
        assert!(config.validate().is_err());

        config.run_timeout = Duration::from_millis(1500);
        config.history_limit = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_builders() {
        let config = SessionConfig::new("http://judge")
            .with_run_timeout(Duration::from_secs(2))
            .with_history_limit(5)
            .with_solved_store("/tmp/solved.json");

        assert_eq!(config.run_timeout, Duration::from_secs(2));
        assert_eq!(config.history_limit, 5);
        assert_eq!(
            config.solved_store_path,
            Some(PathBuf::from("/tmp/solved.json"))
        );
    }
}
