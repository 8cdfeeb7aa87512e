//! Presentation state machine
//!
//! `Idle -> {Running | Submitting} -> {ShowingRunResult | ShowingJudgeResult}`,
//! reusable across any number of cycles.
//!
//! Every start hands out a fresh [`RequestToken`]. A completion is applied
//! only when its token is the one the busy state is waiting for, so the last
//! request wins regardless of the order responses arrive in.

use gatecode_core::domain::result::{JudgeResult, RunResult};
use serde::Serialize;
use tracing::debug;

/// Monotonic identifier of a run or submit request
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct RequestToken(u64);

/// Coarse phase of the submission panel
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Phase {
    Idle,
    Running,
    Submitting,
    ShowingRunResult,
    ShowingJudgeResult,
}

/// Everything the panel renders from
///
/// Each variant carries exactly the artifact its phase allows, so a stale
/// run result can never sit next to a live judge result.
#[derive(Debug, Clone, PartialEq)]
pub enum SubmissionUiState {
    Idle,
    Running { token: RequestToken },
    Submitting { token: RequestToken },
    ShowingRunResult(RunResult),
    ShowingJudgeResult(JudgeResult),
}

impl SubmissionUiState {
    pub fn phase(&self) -> Phase {
        match self {
            SubmissionUiState::Idle => Phase::Idle,
            SubmissionUiState::Running { .. } => Phase::Running,
            SubmissionUiState::Submitting { .. } => Phase::Submitting,
            SubmissionUiState::ShowingRunResult(_) => Phase::ShowingRunResult,
            SubmissionUiState::ShowingJudgeResult(_) => Phase::ShowingJudgeResult,
        }
    }

    pub fn is_busy(&self) -> bool {
        matches!(
            self,
            SubmissionUiState::Running { .. } | SubmissionUiState::Submitting { .. }
        )
    }

    pub fn run_result(&self) -> Option<&RunResult> {
        match self {
            SubmissionUiState::ShowingRunResult(result) => Some(result),
            _ => None,
        }
    }

    pub fn judge_result(&self) -> Option<&JudgeResult> {
        match self {
            SubmissionUiState::ShowingJudgeResult(result) => Some(result),
            _ => None,
        }
    }
}

/// Whether a completion changed the state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    Applied,
    /// A newer request (or a reset) superseded this one
    Stale,
}

/// Why a submit was refused
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitRejection {
    AuthRequired,
}

/// Reducer owning the single [`SubmissionUiState`] of a problem screen
#[derive(Debug, Clone)]
pub struct PresentationReducer {
    state: SubmissionUiState,
    issued: u64,
}

impl PresentationReducer {
    pub fn new() -> Self {
        Self {
            state: SubmissionUiState::Idle,
            issued: 0,
        }
    }

    pub fn state(&self) -> &SubmissionUiState {
        &self.state
    }

    pub fn phase(&self) -> Phase {
        self.state.phase()
    }

    fn next_token(&mut self) -> RequestToken {
        self.issued += 1;
        RequestToken(self.issued)
    }

    /// Enter `Running`, dropping whatever result was shown
    pub fn start_run(&mut self) -> RequestToken {
        let token = self.next_token();
        debug!("start_run: {:?} -> Running ({:?})", self.phase(), token);
        self.state = SubmissionUiState::Running { token };
        token
    }

    /// Enter `Submitting`; refused without any state change when signed out
    pub fn start_submit(&mut self, authenticated: bool) -> Result<RequestToken, SubmitRejection> {
        if !authenticated {
            debug!("start_submit rejected: not authenticated");
            return Err(SubmitRejection::AuthRequired);
        }

        let token = self.next_token();
        debug!("start_submit: {:?} -> Submitting ({:?})", self.phase(), token);
        self.state = SubmissionUiState::Submitting { token };
        Ok(token)
    }

    pub fn run_completed(&mut self, token: RequestToken, result: RunResult) -> Transition {
        match self.state {
            SubmissionUiState::Running { token: waiting } if waiting == token => {
                self.state = SubmissionUiState::ShowingRunResult(result);
                Transition::Applied
            }
            _ => {
                debug!("Discarding stale run completion {:?}", token);
                Transition::Stale
            }
        }
    }

    pub fn judge_completed(&mut self, token: RequestToken, result: JudgeResult) -> Transition {
        match self.state {
            SubmissionUiState::Submitting { token: waiting } if waiting == token => {
                self.state = SubmissionUiState::ShowingJudgeResult(result);
                Transition::Applied
            }
            _ => {
                debug!("Discarding stale judge completion {:?}", token);
                Transition::Stale
            }
        }
    }

    /// Leave a busy state without a result, e.g. when the server revoked auth mid-flight
    pub fn abandon(&mut self, token: RequestToken) -> Transition {
        match self.state {
            SubmissionUiState::Running { token: waiting }
            | SubmissionUiState::Submitting { token: waiting }
                if waiting == token =>
            {
                self.state = SubmissionUiState::Idle;
                Transition::Applied
            }
            _ => Transition::Stale,
        }
    }

    /// Back to `Idle`; every outstanding token becomes stale
    pub fn reset(&mut self) {
        debug!("reset: {:?} -> Idle", self.phase());
        self.state = SubmissionUiState::Idle;
    }
}

impl Default for PresentationReducer {
    fn default() -> Self {
        Self::new()
    }
}
