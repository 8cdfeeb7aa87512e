//! Solved problem tracking
//!
//! A user's solved set only ever grows. Marking the same problem twice is a
//! no-op, so retries and duplicate accepted submissions are harmless.

use std::collections::{BTreeMap, BTreeSet, HashMap};
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use tracing::debug;

use crate::error::Result;

/// Persistence for solved problems
#[async_trait]
pub trait SolvedStore: Send + Sync {
    /// Record `problem_id` as solved by `user_id`
    async fn add_solved(&self, user_id: &str, problem_id: &str) -> Result<()>;

    /// All problems solved by `user_id`, sorted
    async fn get_solved(&self, user_id: &str) -> Result<Vec<String>>;
}

/// JSON file store at `path`, in-memory store when there is none
pub fn open_solved_store(path: Option<&Path>) -> Arc<dyn SolvedStore> {
    match path {
        Some(path) => Arc::new(JsonFileSolvedStore::new(path)),
        None => Arc::new(InMemorySolvedStore::new()),
    }
}

/// Process-local store
#[derive(Debug, Default)]
pub struct InMemorySolvedStore {
    solved: Mutex<HashMap<String, BTreeSet<String>>>,
}

impl InMemorySolvedStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl SolvedStore for InMemorySolvedStore {
    async fn add_solved(&self, user_id: &str, problem_id: &str) -> Result<()> {
        let mut solved = self.solved.lock().unwrap();
        solved
            .entry(user_id.to_string())
            .or_default()
            .insert(problem_id.to_string());
        Ok(())
    }

    async fn get_solved(&self, user_id: &str) -> Result<Vec<String>> {
        let solved = self.solved.lock().unwrap();
        Ok(solved
            .get(user_id)
            .map(|set| set.iter().cloned().collect())
            .unwrap_or_default())
    }
}

/// Store backed by a JSON document mapping user ids to solved problem ids
///
/// ```json
/// { "ada": ["climbing-stairs", "two-sum"] }
/// ```
///
/// A missing file reads as an empty store. Writes are read-modify-write and
/// serialized through an async lock.
#[derive(Debug)]
pub struct JsonFileSolvedStore {
    path: PathBuf,
    lock: tokio::sync::Mutex<()>,
}

type SolvedDocument = BTreeMap<String, BTreeSet<String>>;

impl JsonFileSolvedStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            lock: tokio::sync::Mutex::new(()),
        }
    }

    async fn load(&self) -> Result<SolvedDocument> {
        match tokio::fs::read(&self.path).await {
            Ok(bytes) if bytes.is_empty() => Ok(SolvedDocument::new()),
            Ok(bytes) => Ok(serde_json::from_slice(&bytes)?),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(SolvedDocument::new()),
            Err(err) => Err(err.into()),
        }
    }

    async fn save(&self, document: &SolvedDocument) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                tokio::fs::create_dir_all(parent).await?;
            }
        }
        let bytes = serde_json::to_vec_pretty(document)?;
        tokio::fs::write(&self.path, bytes).await?;
        Ok(())
    }
}

#[async_trait]
impl SolvedStore for JsonFileSolvedStore {
    async fn add_solved(&self, user_id: &str, problem_id: &str) -> Result<()> {
        let _guard = self.lock.lock().await;

        let mut document = self.load().await?;
        let inserted = document
            .entry(user_id.to_string())
            .or_default()
            .insert(problem_id.to_string());

        if inserted {
            self.save(&document).await?;
            debug!("Marked {} solved for {} in {}", problem_id, user_id, self.path.display());
        }
        Ok(())
    }

    async fn get_solved(&self, user_id: &str) -> Result<Vec<String>> {
        let _guard = self.lock.lock().await;

        let mut document = self.load().await?;
        Ok(document
            .remove(user_id)
            .map(|set| set.into_iter().collect())
            .unwrap_or_default())
    }
}
