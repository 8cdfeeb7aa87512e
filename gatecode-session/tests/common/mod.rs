#![allow(dead_code)]

use std::collections::VecDeque;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use async_trait::async_trait;
use gatecode_client::{BearerToken, ClientError, JudgeApi};
use gatecode_core::domain::language::Language;
use gatecode_core::domain::outcome::OutcomeKind;
use gatecode_core::domain::result::{FailedCase, JudgeResult, ResultOrigin, RunResult};
use gatecode_core::domain::submission::SubmissionRecord;
use gatecode_core::dto::judge::JudgeRequest;
use gatecode_core::dto::run::RunRequest;
use gatecode_core::stats::{Percentiles, StatisticsProvider};
use gatecode_session::{
    AuthPrompt, PlaygroundSession, SessionConfig, SessionError, SolvedStore, StaticIdentity,
};
use tokio::sync::{Notify, mpsc};

type Scripted<T> = (Duration, Result<T, ClientError>);

/// Judge fake answering from queued responses after a virtual delay
#[derive(Default)]
pub struct ScriptedJudge {
    runs: Mutex<VecDeque<Scripted<RunResult>>>,
    judges: Mutex<VecDeque<Scripted<JudgeResult>>>,
    histories: Mutex<VecDeque<Scripted<Vec<SubmissionRecord>>>>,
    pub run_calls: AtomicUsize,
    pub judge_calls: AtomicUsize,
    pub history_calls: AtomicUsize,
    pub last_judge: Mutex<Option<JudgeRequest>>,
}

impl ScriptedJudge {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn push_run(&self, delay: Duration, response: Result<RunResult, ClientError>) {
        self.runs.lock().unwrap().push_back((delay, response));
    }

    pub fn push_judge(&self, delay: Duration, response: Result<JudgeResult, ClientError>) {
        self.judges.lock().unwrap().push_back((delay, response));
    }

    pub fn push_history(&self, response: Result<Vec<SubmissionRecord>, ClientError>) {
        self.histories
            .lock()
            .unwrap()
            .push_back((Duration::ZERO, response));
    }

    pub fn runs(&self) -> usize {
        self.run_calls.load(Ordering::SeqCst)
    }

    pub fn judges(&self) -> usize {
        self.judge_calls.load(Ordering::SeqCst)
    }

    pub fn history_requests(&self) -> usize {
        self.history_calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl JudgeApi for ScriptedJudge {
    async fn run(&self, _problem: &str, _req: &RunRequest) -> gatecode_client::Result<RunResult> {
        self.run_calls.fetch_add(1, Ordering::SeqCst);
        let (delay, response) = self
            .runs
            .lock()
            .unwrap()
            .pop_front()
            .expect("unscripted run call");
        tokio::time::sleep(delay).await;
        response
    }

    async fn judge(
        &self,
        _problem: &str,
        req: &JudgeRequest,
        token: Option<&BearerToken>,
    ) -> gatecode_client::Result<JudgeResult> {
        assert!(token.is_some(), "judge called without a token");
        self.judge_calls.fetch_add(1, Ordering::SeqCst);
        *self.last_judge.lock().unwrap() = Some(req.clone());
        let (delay, response) = self
            .judges
            .lock()
            .unwrap()
            .pop_front()
            .expect("unscripted judge call");
        tokio::time::sleep(delay).await;
        response
    }

    async fn list_submissions(
        &self,
        _problem: &str,
        _limit: u32,
        _token: Option<&BearerToken>,
    ) -> gatecode_client::Result<Vec<SubmissionRecord>> {
        self.history_calls.fetch_add(1, Ordering::SeqCst);
        let (_, response) = self
            .histories
            .lock()
            .unwrap()
            .pop_front()
            .expect("unscripted history call");
        response
    }
}

/// Solved store that reports each call and waits for a gate before recording
pub struct GatedSolvedStore {
    gate: Arc<Notify>,
    calls: mpsc::UnboundedSender<(String, String)>,
    solved: Mutex<Vec<String>>,
    pub add_calls: AtomicUsize,
}

impl GatedSolvedStore {
    pub fn with_gate() -> (Arc<Self>, Arc<Notify>, mpsc::UnboundedReceiver<(String, String)>) {
        let gate = Arc::new(Notify::new());
        let (tx, rx) = mpsc::unbounded_channel();
        let store = Arc::new(Self {
            gate: Arc::clone(&gate),
            calls: tx,
            solved: Mutex::new(Vec::new()),
            add_calls: AtomicUsize::new(0),
        });
        (store, gate, rx)
    }

    pub fn adds(&self) -> usize {
        self.add_calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl SolvedStore for GatedSolvedStore {
    async fn add_solved(&self, user_id: &str, problem_id: &str) -> Result<(), SessionError> {
        self.add_calls.fetch_add(1, Ordering::SeqCst);
        let _ = self.calls.send((user_id.to_string(), problem_id.to_string()));
        self.gate.notified().await;
        self.solved.lock().unwrap().push(problem_id.to_string());
        Ok(())
    }

    async fn get_solved(&self, _user_id: &str) -> Result<Vec<String>, SessionError> {
        Ok(self.solved.lock().unwrap().clone())
    }
}

#[derive(Default)]
pub struct CountingPrompt {
    pub prompts: AtomicUsize,
}

impl CountingPrompt {
    pub fn count(&self) -> usize {
        self.prompts.load(Ordering::SeqCst)
    }
}

impl AuthPrompt for CountingPrompt {
    fn prompt_login(&self, _problem: &str) {
        self.prompts.fetch_add(1, Ordering::SeqCst);
    }
}

pub struct FixedStatistics;

impl StatisticsProvider for FixedStatistics {
    fn percentiles(&self, _: &str, _: Language, _: u64, _: Option<u64>) -> Option<Percentiles> {
        Some(Percentiles::new(93.0, Some(61.0)))
    }
}

pub fn config() -> SessionConfig {
    SessionConfig::default().with_run_timeout(Duration::from_secs(2))
}

pub fn session(
    api: Arc<ScriptedJudge>,
    identity: StaticIdentity,
    solved: Arc<dyn SolvedStore>,
) -> PlaygroundSession {
    PlaygroundSession::new(
        config(),
        "two-sum",
        Language::Python3,
        api,
        Arc::new(identity),
        solved,
    )
}

pub fn signed_in() -> StaticIdentity {
    StaticIdentity::signed_in("ada", "tok-ada")
}

pub fn run_ok(stdout: &str) -> RunResult {
    RunResult {
        status: OutcomeKind::Accepted,
        stdout: stdout.to_string(),
        stderr: String::new(),
        runtime_ms: 7,
        origin: ResultOrigin::Server,
    }
}

pub fn accepted() -> JudgeResult {
    JudgeResult {
        status: OutcomeKind::Accepted,
        passed_count: 50,
        total_count: 50,
        runtime_ms: 31,
        memory_kb: Some(14_200),
        failed_case: None,
        all_cases: None,
        error_message: None,
        origin: ResultOrigin::Server,
    }
}

pub fn wrong_answer() -> JudgeResult {
    JudgeResult {
        status: OutcomeKind::WrongAnswer,
        passed_count: 12,
        total_count: 50,
        runtime_ms: 9,
        memory_kb: None,
        failed_case: Some(FailedCase {
            index: 12,
            input: Some("[3,3]\n6".to_string()),
            expected: Some("[0,1]".to_string()),
            actual: Some("[]".to_string()),
        }),
        all_cases: None,
        error_message: None,
        origin: ResultOrigin::Server,
    }
}
