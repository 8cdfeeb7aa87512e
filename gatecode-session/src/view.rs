//! Panel view derivation
//!
//! Turns the current [`SubmissionUiState`] into exactly what the result panel
//! should show. Pure apart from the statistics lookup, which is injected.

use gatecode_core::domain::language::Language;
use gatecode_core::domain::outcome::OutcomeKind;
use gatecode_core::domain::result::{CaseResult, FailedCase, JudgeResult, ResultOrigin, RunResult};
use gatecode_core::interpret::{DiffLine, compute_diff, has_failing_case, is_accepted, is_compile_failure};
use gatecode_core::stats::{Percentiles, StatisticsProvider};

use crate::state::SubmissionUiState;

/// What the result panel renders
#[derive(Debug, Clone, PartialEq)]
pub enum PanelView {
    /// Nothing run yet
    Placeholder,
    /// Waiting on the judge service
    Busy { submitting: bool },
    RunOutput(RunOutputView),
    JudgeOutput(JudgeOutputView),
}

#[derive(Debug, Clone, PartialEq)]
pub struct RunOutputView {
    pub status: OutcomeKind,
    pub label: &'static str,
    pub runtime_ms: Option<u64>,
    pub stdout: Option<String>,
    pub stderr: Option<String>,
    pub origin: ResultOrigin,
}

#[derive(Debug, Clone, PartialEq)]
pub struct JudgeOutputView {
    pub status: OutcomeKind,
    pub label: &'static str,
    pub passed: u32,
    pub total: u32,
    pub runtime_ms: Option<u64>,
    pub memory_kb: Option<u64>,
    pub detail: JudgeDetail,
    /// Per-case outcomes of a run-all submission
    pub cases: Option<Vec<CaseResult>>,
    pub percentiles: Option<Percentiles>,
    pub origin: ResultOrigin,
}

/// The part of a judge result worth looking at
#[derive(Debug, Clone, PartialEq)]
pub enum JudgeDetail {
    None,
    /// Wrong answer with the expected output available
    Diff {
        case_number: u64,
        input: Option<String>,
        lines: Vec<DiffLine>,
    },
    /// Any other failing case
    FailingCase {
        case_number: u64,
        input: Option<String>,
        expected: Option<String>,
        output_label: &'static str,
        output: Option<String>,
    },
    CompilerOutput(String),
    /// Failure not tied to a test case, from either side
    Message(String),
}

/// Identifies the problem and language a view is derived for
#[derive(Debug, Clone, Copy)]
pub struct ViewContext<'a> {
    pub problem: &'a str,
    pub language: Language,
}

/// Derive the panel view for a state
pub fn derive_view(
    state: &SubmissionUiState,
    ctx: ViewContext<'_>,
    stats: &dyn StatisticsProvider,
) -> PanelView {
    match state {
        SubmissionUiState::Idle => PanelView::Placeholder,
        SubmissionUiState::Running { .. } => PanelView::Busy { submitting: false },
        SubmissionUiState::Submitting { .. } => PanelView::Busy { submitting: true },
        SubmissionUiState::ShowingRunResult(result) => PanelView::RunOutput(run_view(result)),
        SubmissionUiState::ShowingJudgeResult(result) => {
            PanelView::JudgeOutput(judge_view(result, ctx, stats))
        }
    }
}

fn run_view(result: &RunResult) -> RunOutputView {
    RunOutputView {
        status: result.status,
        label: result.status.label(),
        runtime_ms: positive(result.runtime_ms),
        stdout: non_empty(&result.stdout),
        stderr: non_empty(&result.stderr),
        origin: result.origin,
    }
}

fn judge_view(
    result: &JudgeResult,
    ctx: ViewContext<'_>,
    stats: &dyn StatisticsProvider,
) -> JudgeOutputView {
    let percentiles = if is_accepted(result) {
        stats.percentiles(ctx.problem, ctx.language, result.runtime_ms, result.memory_kb)
    } else {
        None
    };

    JudgeOutputView {
        status: result.status,
        label: result.status.label(),
        passed: result.passed_count,
        total: result.total_count,
        runtime_ms: positive(result.runtime_ms),
        memory_kb: result.memory_kb,
        detail: judge_detail(result),
        cases: result.all_cases.clone(),
        percentiles,
        origin: result.origin,
    }
}

fn judge_detail(result: &JudgeResult) -> JudgeDetail {
    if let Some(message) = &result.error_message {
        return JudgeDetail::Message(message.clone());
    }

    if is_compile_failure(result) {
        let output = result
            .failed_case
            .as_ref()
            .and_then(|case| case.actual.clone())
            .unwrap_or_default();
        return JudgeDetail::CompilerOutput(output);
    }

    // sentinel without a compile error: the judge itself failed
    if let Some(case) = result.failed_case.as_ref().filter(|c| c.is_compile_sentinel()) {
        let message = case
            .actual
            .clone()
            .unwrap_or_else(|| result.status.label().to_string());
        return JudgeDetail::Message(message);
    }

    if !has_failing_case(result) {
        return JudgeDetail::None;
    }

    match &result.failed_case {
        Some(case) => failing_case_detail(result.status, case),
        None => JudgeDetail::None,
    }
}

fn failing_case_detail(status: OutcomeKind, case: &FailedCase) -> JudgeDetail {
    // index is non-negative here, presented 1-based
    let case_number = case.index.unsigned_abs() + 1;

    // empty output arrives without `actual`
    if status == OutcomeKind::WrongAnswer {
        if let Some(expected) = &case.expected {
            return JudgeDetail::Diff {
                case_number,
                input: case.input.clone(),
                lines: compute_diff(expected, case.actual.as_deref().unwrap_or_default()),
            };
        }
    }

    JudgeDetail::FailingCase {
        case_number,
        input: case.input.clone(),
        expected: case.expected.clone(),
        output_label: if status.reports_error_stream() {
            "Error"
        } else {
            "Your output"
        },
        output: case.actual.clone(),
    }
}

fn positive(value: u64) -> Option<u64> {
    (value > 0).then_some(value)
}

fn non_empty(text: &str) -> Option<String> {
    (!text.is_empty()).then(|| text.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::PresentationReducer;
    use gatecode_core::interpret::interpret_judge;
    use gatecode_core::stats::NoStatistics;
    use serde_json::json;

    struct FixedStatistics;

    impl StatisticsProvider for FixedStatistics {
        fn percentiles(&self, _: &str, _: Language, _: u64, _: Option<u64>) -> Option<Percentiles> {
            Some(Percentiles::new(87.0, Some(42.0)))
        }
    }

    const CTX: ViewContext<'static> = ViewContext {
        problem: "two-sum",
        language: Language::Rust,
    };

    fn judge(status: OutcomeKind, failed_case: Option<FailedCase>) -> JudgeResult {
        JudgeResult {
            status,
            passed_count: 3,
            total_count: 10,
            runtime_ms: 12,
            memory_kb: Some(2048),
            failed_case,
            all_cases: None,
            error_message: None,
            origin: ResultOrigin::Server,
        }
    }

    fn showing(result: JudgeResult) -> PanelView {
        derive_view(
            &SubmissionUiState::ShowingJudgeResult(result),
            CTX,
            &FixedStatistics,
        )
    }

    fn detail_of(view: PanelView) -> JudgeDetail {
        match view {
            PanelView::JudgeOutput(judge) => judge.detail,
            other => panic!("expected judge output, got {other:?}"),
        }
    }

    #[test]
    fn test_idle_and_busy_views() {
        let mut reducer = PresentationReducer::new();
        assert_eq!(
            derive_view(reducer.state(), CTX, &NoStatistics),
            PanelView::Placeholder
        );

        reducer.start_run();
        assert_eq!(
            derive_view(reducer.state(), CTX, &NoStatistics),
            PanelView::Busy { submitting: false }
        );

        reducer.start_submit(true).unwrap();
        assert_eq!(
            derive_view(reducer.state(), CTX, &NoStatistics),
            PanelView::Busy { submitting: true }
        );
    }

    #[test]
    fn test_wrong_answer_shows_diff() {
        let view = showing(judge(
            OutcomeKind::WrongAnswer,
            Some(FailedCase {
                index: 3,
                input: Some("[2,7,11,15]\n9".into()),
                expected: Some("[0,1]".into()),
                actual: Some("[1,0]".into()),
            }),
        ));

        match detail_of(view) {
            JudgeDetail::Diff {
                case_number, lines, ..
            } => {
                assert_eq!(case_number, 4);
                assert_eq!(lines.len(), 1);
                assert!(lines[0].differs);
            }
            other => panic!("expected diff, got {other:?}"),
        }
    }

    #[test]
    fn test_runtime_error_labels_output_as_error() {
        let view = showing(judge(
            OutcomeKind::RuntimeError,
            Some(FailedCase {
                index: 0,
                input: Some("[]".into()),
                expected: None,
                actual: Some("IndexError".into()),
            }),
        ));

        match detail_of(view) {
            JudgeDetail::FailingCase {
                case_number,
                output_label,
                output,
                ..
            } => {
                assert_eq!(case_number, 1);
                assert_eq!(output_label, "Error");
                assert_eq!(output.as_deref(), Some("IndexError"));
            }
            other => panic!("expected failing case, got {other:?}"),
        }
    }

    #[test]
    fn test_compile_failure_shows_compiler_output() {
        let view = showing(judge(
            OutcomeKind::CompileError,
            Some(FailedCase {
                index: FailedCase::COMPILE_FAILURE,
                input: None,
                expected: None,
                actual: Some("error[E0308]: mismatched types".into()),
            }),
        ));

        assert_eq!(
            detail_of(view),
            JudgeDetail::CompilerOutput("error[E0308]: mismatched types".into())
        );
    }

    #[test]
    fn test_accepted_includes_percentiles() {
        match showing(judge(OutcomeKind::Accepted, None)) {
            PanelView::JudgeOutput(view) => {
                assert_eq!(view.detail, JudgeDetail::None);
                assert_eq!(view.percentiles, Some(Percentiles::new(87.0, Some(42.0))));
                assert_eq!(view.label, "Accepted");
            }
            other => panic!("unexpected view {other:?}"),
        }
    }

    #[test]
    fn test_failures_never_carry_percentiles() {
        match showing(judge(OutcomeKind::TimeLimitExceeded, None)) {
            PanelView::JudgeOutput(view) => assert!(view.percentiles.is_none()),
            other => panic!("unexpected view {other:?}"),
        }
    }

    #[test]
    fn test_client_error_shows_message() {
        let view = showing(JudgeResult::client_error("Network request failed: refused"));
        assert_eq!(
            detail_of(view),
            JudgeDetail::Message("Network request failed: refused".into())
        );
    }

    fn ingest(payload: serde_json::Value) -> JudgeResult {
        interpret_judge(serde_json::from_value(payload).unwrap())
    }

    #[test]
    fn test_judge_failure_message_is_shown() {
        let result = ingest(json!({
            "status": "SystemError",
            "passed": 0,
            "total": 12,
            "failed_case": { "index": -1, "actual": "batch exec error: container gone" }
        }));

        assert_eq!(
            detail_of(showing(result)),
            JudgeDetail::Message("batch exec error: container gone".into())
        );
    }

    #[test]
    fn test_wrong_answer_with_no_output_still_diffs() {
        let result = ingest(json!({
            "status": "Wrong Answer",
            "passed": 0,
            "total": 3,
            "failed_case": { "index": 0, "input": "[1]", "expected": "1" }
        }));

        match detail_of(showing(result)) {
            JudgeDetail::Diff {
                case_number, lines, ..
            } => {
                assert_eq!(case_number, 1);
                assert_eq!(lines.len(), 1);
                assert_eq!(lines[0].expected_line, "1");
                assert_eq!(lines[0].actual_line, "");
                assert!(lines[0].differs);
            }
            other => panic!("expected diff, got {other:?}"),
        }
    }

    #[test]
    fn test_run_all_cases_reach_the_view() {
        let result = ingest(json!({
            "status": "WA",
            "passed": 1,
            "total": 2,
            "failed_case": { "index": 1, "expected": "2", "actual": "3" },
            "all_cases": [
                { "index": 0, "status": "AC", "actual": "1" },
                { "index": 1, "status": "Wrong Answer", "actual": "3" }
            ]
        }));

        match showing(result) {
            PanelView::JudgeOutput(view) => {
                let cases = view.cases.expect("per-case outcomes");
                assert_eq!(cases.len(), 2);
                assert_eq!(cases[0].status, OutcomeKind::Accepted);
                assert_eq!(cases[1].status, OutcomeKind::WrongAnswer);
                assert_eq!(cases[1].actual, "3");
            }
            other => panic!("unexpected view {other:?}"),
        }

        match showing(judge(OutcomeKind::Accepted, None)) {
            PanelView::JudgeOutput(view) => assert!(view.cases.is_none()),
            other => panic!("unexpected view {other:?}"),
        }
    }

    #[test]
    fn test_run_view_hides_empty_streams() {
        let state = SubmissionUiState::ShowingRunResult(RunResult::client_error("timed out"));
        match derive_view(&state, CTX, &NoStatistics) {
            PanelView::RunOutput(run) => {
                assert_eq!(run.status, OutcomeKind::SystemError);
                assert_eq!(run.stdout, None);
                assert_eq!(run.stderr.as_deref(), Some("timed out"));
                assert_eq!(run.runtime_ms, None);
                assert_eq!(run.origin, ResultOrigin::Client);
            }
            other => panic!("unexpected view {other:?}"),
        }
    }
}
