//! Result interpretation
//!
//! Pure functions that turn raw judge payloads into canonical results and
//! answer the questions the presentation layer asks about them.

use tracing::warn;

use crate::domain::language::Language;
use crate::domain::outcome::{OutcomeKind, Verdict};
use crate::domain::result::{CaseResult, FailedCase, JudgeResult, ResultOrigin, RunResult};
use crate::domain::submission::SubmissionRecord;
use crate::dto::judge::{FailedCaseDto, JudgeResponse};
use crate::dto::run::RunResponse;
use crate::dto::submission::SubmissionRecordDto;

// =============================================================================
// Status Canonicalization
// =============================================================================

/// Map a raw status string onto the canonical outcome
///
/// Matching ignores case, whitespace, `_` and `-`, so `"TLE"`,
/// `"Time Limit Exceeded"` and `"TimeLimitExceeded"` all agree. Anything
/// unrecognized is a `SystemError`.
pub fn canonicalize_status(raw: &str) -> OutcomeKind {
    let folded: String = raw
        .chars()
        .filter(|c| !c.is_whitespace() && *c != '_' && *c != '-')
        .flat_map(char::to_lowercase)
        .collect();

    match folded.as_str() {
        "accepted" | "ac" => OutcomeKind::Accepted,
        "wronganswer" | "wa" => OutcomeKind::WrongAnswer,
        "timelimitexceeded" | "tle" => OutcomeKind::TimeLimitExceeded,
        "compileerror" | "compilationerror" | "ce" => OutcomeKind::CompileError,
        "runtimeerror" | "re" => OutcomeKind::RuntimeError,
        "memorylimitexceeded" | "mle" => OutcomeKind::MemoryLimitExceeded,
        "systemerror" | "se" | "error" => OutcomeKind::SystemError,
        _ => {
            warn!("Unrecognized judge status '{}', treating as SystemError", raw);
            OutcomeKind::SystemError
        }
    }
}

// =============================================================================
// Predicates
// =============================================================================

pub fn is_accepted(result: &impl Verdict) -> bool {
    result.outcome() == OutcomeKind::Accepted
}

/// Compile failure reported through the `index == -1` sentinel
pub fn is_compile_failure(result: &JudgeResult) -> bool {
    result.status == OutcomeKind::CompileError
        && result
            .failed_case
            .as_ref()
            .is_some_and(FailedCase::is_compile_sentinel)
}

/// A concrete test case (not the compile sentinel) failed
pub fn has_failing_case(result: &JudgeResult) -> bool {
    result.failed_case.as_ref().is_some_and(|case| case.index >= 0)
}

// =============================================================================
// Output Diff
// =============================================================================

/// One aligned line pair of an expected/actual comparison
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiffLine {
    pub line_index: usize,
    pub expected_line: String,
    pub actual_line: String,
    pub differs: bool,
}

/// Line-by-line comparison of expected and actual output
///
/// The shorter side is padded with empty lines. A trailing `\r` is stripped
/// from every line so CRLF output compares equal to LF output.
pub fn compute_diff(expected: &str, actual: &str) -> Vec<DiffLine> {
    let expected: Vec<&str> = split_lines(expected);
    let actual: Vec<&str> = split_lines(actual);
    let len = expected.len().max(actual.len());

    (0..len)
        .map(|i| {
            let expected_line = expected.get(i).copied().unwrap_or("");
            let actual_line = actual.get(i).copied().unwrap_or("");
            DiffLine {
                line_index: i,
                expected_line: expected_line.to_string(),
                actual_line: actual_line.to_string(),
                differs: expected_line != actual_line,
            }
        })
        .collect()
}

fn split_lines(text: &str) -> Vec<&str> {
    text.split('\n')
        .map(|line| line.strip_suffix('\r').unwrap_or(line))
        .collect()
}

// =============================================================================
// Ingestion
// =============================================================================

/// Canonicalize a raw run response
pub fn interpret_run(raw: RunResponse) -> RunResult {
    RunResult {
        status: canonicalize_status(&raw.status),
        stdout: raw.stdout,
        stderr: raw.stderr,
        runtime_ms: non_negative(raw.runtime_ms),
        origin: ResultOrigin::Server,
    }
}

/// Canonicalize a raw judge response
///
/// Enforces `passed <= total` and drops any failed case attached to an
/// accepted verdict.
pub fn interpret_judge(raw: JudgeResponse) -> JudgeResult {
    let status = canonicalize_status(&raw.status);

    let total_count = count(raw.total);
    let mut passed_count = count(raw.passed);
    if passed_count > total_count {
        warn!(
            "Judge reported {} passed out of {} total, clamping",
            raw.passed, raw.total
        );
        passed_count = total_count;
    }

    let failed_case = match (status, raw.failed_case) {
        (OutcomeKind::Accepted, Some(_)) => {
            warn!("Judge attached a failed case to an accepted verdict, dropping it");
            None
        }
        (_, case) => case.map(interpret_failed_case),
    };

    let all_cases = raw.all_cases.map(|cases| {
        cases
            .into_iter()
            .map(|case| CaseResult {
                index: case.index,
                status: canonicalize_status(&case.status),
                actual: case.actual,
            })
            .collect()
    });

    JudgeResult {
        status,
        passed_count,
        total_count,
        runtime_ms: non_negative(raw.runtime_ms),
        memory_kb: raw.memory_kb.map(non_negative),
        failed_case,
        all_cases,
        error_message: None,
        origin: ResultOrigin::Server,
    }
}

/// Canonicalize a raw history record
pub fn interpret_submission(raw: SubmissionRecordDto) -> SubmissionRecord {
    let language = raw
        .language
        .parse::<Language>()
        .map(|lang| lang.display_name().to_string())
        .unwrap_or(raw.language);

    SubmissionRecord {
        id: raw.id,
        status: canonicalize_status(&raw.status),
        language,
        runtime_ms: non_negative(raw.runtime_ms),
        memory_kb: raw.memory_kb.map(non_negative),
        code: raw.code,
        error_message: raw.error_message.filter(|m| !m.is_empty()),
        created_at: raw.created_at,
    }
}

fn interpret_failed_case(raw: FailedCaseDto) -> FailedCase {
    FailedCase {
        index: raw.index.max(FailedCase::COMPILE_FAILURE),
        input: raw.input.filter(|s| !s.is_empty()),
        expected: raw.expected.filter(|s| !s.is_empty()),
        actual: raw.actual.filter(|s| !s.is_empty()),
    }
}

fn non_negative(value: i64) -> u64 {
    u64::try_from(value).unwrap_or(0)
}

fn count(value: i64) -> u32 {
    u32::try_from(value.max(0)).unwrap_or(u32::MAX)
}
