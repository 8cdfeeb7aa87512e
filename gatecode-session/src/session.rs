//! Playground session controller
//!
//! One [`PlaygroundSession`] backs one problem screen. It owns the
//! [`PresentationReducer`], issues requests through a [`JudgeApi`], and turns
//! every failure into something the panel can render so it never stays busy.
//!
//! Reducer state sits behind a `std::sync::Mutex` that is only held for
//! synchronous steps, never across an `.await`.

use std::sync::{Arc, Mutex};

use gatecode_client::{ClientError, JudgeApi, JudgeClient};
use gatecode_core::domain::language::Language;
use gatecode_core::domain::result::{JudgeResult, RunResult};
use gatecode_core::domain::submission::SubmissionRecord;
use gatecode_core::dto::judge::JudgeRequest;
use gatecode_core::dto::run::RunRequest;
use gatecode_core::interpret::is_accepted;
use gatecode_core::stats::{NoStatistics, StatisticsProvider};
use tokio::task::JoinHandle;
use tracing::{debug, info, warn};
use uuid::Uuid;

use crate::config::SessionConfig;
use crate::error::Result;
use crate::identity::{AuthPrompt, IdentityProvider, LogAuthPrompt};
use crate::solved::{SolvedStore, open_solved_store};
use crate::state::{Phase, PresentationReducer, SubmissionUiState, Transition};
use crate::view::{PanelView, ViewContext, derive_view};

/// How a run call ended for its caller
#[derive(Debug, Clone, PartialEq)]
pub enum RunOutcome {
    /// The result is now on the panel
    Completed(RunResult),
    /// A newer request or a reset took over; the result was discarded
    Superseded,
}

/// How a submit call ended for its caller
#[derive(Debug, Clone, PartialEq)]
pub enum SubmitOutcome {
    Completed(JudgeResult),
    Superseded,
    /// Nobody is signed in (or the service rejected the credential)
    AuthRequired,
}

struct Inner {
    problem: String,
    language: Language,
    reducer: PresentationReducer,
}

/// Session driving the submission panel of a single problem screen
pub struct PlaygroundSession {
    id: Uuid,
    config: SessionConfig,
    api: Arc<dyn JudgeApi>,
    identity: Arc<dyn IdentityProvider>,
    solved: Arc<dyn SolvedStore>,
    stats: Arc<dyn StatisticsProvider>,
    auth_prompt: Arc<dyn AuthPrompt>,
    inner: Mutex<Inner>,
    side_effects: Mutex<Vec<JoinHandle<()>>>,
}

impl PlaygroundSession {
    pub fn new(
        config: SessionConfig,
        problem: impl Into<String>,
        language: Language,
        api: Arc<dyn JudgeApi>,
        identity: Arc<dyn IdentityProvider>,
        solved: Arc<dyn SolvedStore>,
    ) -> Self {
        let id = Uuid::new_v4();
        let problem = problem.into();
        info!("Session {} opened for {} ({})", id, problem, language);

        Self {
            id,
            config,
            api,
            identity,
            solved,
            stats: Arc::new(NoStatistics),
            auth_prompt: Arc::new(LogAuthPrompt),
            inner: Mutex::new(Inner {
                problem,
                language,
                reducer: PresentationReducer::new(),
            }),
            side_effects: Mutex::new(Vec::new()),
        }
    }

    /// Wire a session to the HTTP judge client and the configured solved store
    pub fn from_config(
        config: SessionConfig,
        problem: impl Into<String>,
        language: Language,
        identity: Arc<dyn IdentityProvider>,
    ) -> Self {
        let api: Arc<dyn JudgeApi> = Arc::new(JudgeClient::new(config.backend_url.clone()));
        let solved = open_solved_store(config.solved_store_path.as_deref());
        Self::new(config, problem, language, api, identity, solved)
    }

    pub fn with_statistics(mut self, stats: Arc<dyn StatisticsProvider>) -> Self {
        self.stats = stats;
        self
    }

    pub fn with_auth_prompt(mut self, auth_prompt: Arc<dyn AuthPrompt>) -> Self {
        self.auth_prompt = auth_prompt;
        self
    }

    pub fn problem(&self) -> String {
        self.inner.lock().unwrap().problem.clone()
    }

    pub fn language(&self) -> Language {
        self.inner.lock().unwrap().language
    }

    pub fn state(&self) -> SubmissionUiState {
        self.inner.lock().unwrap().reducer.state().clone()
    }

    pub fn phase(&self) -> Phase {
        self.inner.lock().unwrap().reducer.phase()
    }

    /// What the panel should render right now
    pub fn view(&self) -> PanelView {
        let inner = self.inner.lock().unwrap();
        let ctx = ViewContext {
            problem: &inner.problem,
            language: inner.language,
        };
        derive_view(inner.reducer.state(), ctx, self.stats.as_ref())
    }

    // =============================================================================
    // Run
    // =============================================================================

    /// Run code against the first test case
    ///
    /// Bounded by `config.run_timeout`. On expiry the request future is
    /// dropped and a client-side `SystemError` result is shown instead.
    pub async fn run(&self, code: &str) -> RunOutcome {
        let (token, problem, request) = {
            let mut inner = self.inner.lock().unwrap();
            let token = inner.reducer.start_run();
            (
                token,
                inner.problem.clone(),
                RunRequest::new(inner.language, code),
            )
        };

        let result = match request.validate() {
            Err(err) => RunResult::client_error(ClientError::from(err).to_string()),
            Ok(()) => self.run_with_deadline(&problem, &request).await,
        };

        let transition = self.inner.lock().unwrap().reducer.run_completed(token, result.clone());
        match transition {
            Transition::Applied => RunOutcome::Completed(result),
            Transition::Stale => RunOutcome::Superseded,
        }
    }

    async fn run_with_deadline(&self, problem: &str, request: &RunRequest) -> RunResult {
        let deadline = self.config.run_timeout;

        match tokio::time::timeout(deadline, self.api.run(problem, request)).await {
            Ok(Ok(result)) => result,
            Ok(Err(err)) => {
                log_failure("Run", problem, &err);
                RunResult::client_error(err.to_string())
            }
            Err(_) => {
                let err = ClientError::Timeout { after: deadline };
                warn!("Run of {} abandoned: {}", problem, err);
                RunResult::client_error(err.to_string())
            }
        }
    }

    // =============================================================================
    // Submit
    // =============================================================================

    /// Judge code against the full test suite
    ///
    /// Signed-out callers get [`SubmitOutcome::AuthRequired`], a login prompt
    /// and no network traffic. An accepted verdict marks the problem solved in
    /// the background.
    pub async fn submit(&self, code: &str, run_all: bool) -> SubmitOutcome {
        let identity = self.identity.current_user();

        let (started, problem, language) = {
            let mut inner = self.inner.lock().unwrap();
            let started = inner.reducer.start_submit(identity.is_some());
            (started, inner.problem.clone(), inner.language)
        };

        let (token, identity) = match (started, identity) {
            (Ok(token), Some(identity)) => (token, identity),
            _ => {
                self.auth_prompt.prompt_login(&problem);
                return SubmitOutcome::AuthRequired;
            }
        };

        let request = JudgeRequest::new(language, code).with_run_all(run_all);
        let result = match request.validate() {
            Err(err) => JudgeResult::client_error(ClientError::from(err).to_string()),
            Ok(()) => match self.api.judge(&problem, &request, Some(&identity.token)).await {
                Ok(result) => result,
                Err(ClientError::AuthRequired) => {
                    let transition = self.inner.lock().unwrap().reducer.abandon(token);
                    if transition == Transition::Stale {
                        return SubmitOutcome::Superseded;
                    }
                    warn!("Judge service rejected credentials for {}", identity.user_id);
                    self.auth_prompt.prompt_login(&problem);
                    return SubmitOutcome::AuthRequired;
                }
                Err(err) => {
                    log_failure("Judge", &problem, &err);
                    JudgeResult::client_error(err.to_string())
                }
            },
        };

        let transition = self
            .inner
            .lock()
            .unwrap()
            .reducer
            .judge_completed(token, result.clone());

        match transition {
            Transition::Applied => {
                if is_accepted(&result) {
                    self.mark_solved(identity.user_id, problem);
                }
                SubmitOutcome::Completed(result)
            }
            Transition::Stale => SubmitOutcome::Superseded,
        }
    }

    fn mark_solved(&self, user_id: String, problem: String) {
        let store = Arc::clone(&self.solved);
        let handle = tokio::spawn(async move {
            match store.add_solved(&user_id, &problem).await {
                Ok(()) => info!("Marked {} solved for {}", problem, user_id),
                Err(err) => warn!("Failed to mark {} solved for {}: {}", problem, user_id, err),
            }
        });

        let mut pending = self.side_effects.lock().unwrap();
        pending.retain(|handle| !handle.is_finished());
        pending.push(handle);
    }

    /// Wait for background side effects spawned so far
    pub async fn settle(&self) {
        let pending = std::mem::take(&mut *self.side_effects.lock().unwrap());
        for handle in pending {
            if let Err(err) = handle.await {
                warn!("Background task failed: {}", err);
            }
        }
    }

    // =============================================================================
    // History and solved problems
    // =============================================================================

    /// Recent submissions of the signed-in user; empty on any failure
    pub async fn history(&self) -> Vec<SubmissionRecord> {
        let Some(identity) = self.identity.current_user() else {
            debug!("History skipped: not signed in");
            return Vec::new();
        };

        let problem = self.problem();
        match self
            .api
            .list_submissions(&problem, self.config.history_limit, Some(&identity.token))
            .await
        {
            Ok(records) => records,
            Err(err) => {
                log_failure("History", &problem, &err);
                Vec::new()
            }
        }
    }

    /// Problems solved by the signed-in user; empty when signed out
    pub async fn solved(&self) -> Result<Vec<String>> {
        match self.identity.current_user() {
            Some(identity) => self.solved.get_solved(&identity.user_id).await,
            None => Ok(Vec::new()),
        }
    }

    // =============================================================================
    // Context switches
    // =============================================================================

    /// Switch the editor language; in-flight results are discarded
    pub fn switch_language(&self, language: Language) {
        let mut inner = self.inner.lock().unwrap();
        if inner.language != language {
            info!("Session {}: language {} -> {}", self.id, inner.language, language);
            inner.language = language;
            inner.reducer.reset();
        }
    }

    /// Move to another problem; in-flight results are discarded
    pub fn switch_problem(&self, problem: impl Into<String>) {
        let problem = problem.into();
        let mut inner = self.inner.lock().unwrap();
        if inner.problem != problem {
            info!("Session {}: problem {} -> {}", self.id, inner.problem, problem);
            inner.problem = problem;
            inner.reducer.reset();
        }
    }
}

fn log_failure(action: &str, problem: &str, err: &ClientError) {
    if err.is_transport_failure() {
        warn!("{} of {} never got an answer: {}", action, problem, err);
    } else {
        warn!("{} of {} was refused: {}", action, problem, err);
    }
}

impl std::fmt::Debug for PlaygroundSession {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PlaygroundSession")
            .field("id", &self.id)
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}
