//! Outcome taxonomy
//!
//! The closed set of verdicts the presentation layer may see.

use serde::{Deserialize, Serialize};

/// Canonical judge outcome
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum OutcomeKind {
    Accepted,
    WrongAnswer,
    TimeLimitExceeded,
    CompileError,
    RuntimeError,
    MemoryLimitExceeded,
    SystemError,
}

impl OutcomeKind {
    pub const ALL: [OutcomeKind; 7] = [
        OutcomeKind::Accepted,
        OutcomeKind::WrongAnswer,
        OutcomeKind::TimeLimitExceeded,
        OutcomeKind::CompileError,
        OutcomeKind::RuntimeError,
        OutcomeKind::MemoryLimitExceeded,
        OutcomeKind::SystemError,
    ];

    /// Canonical identifier, identical to the serialized form
    pub fn as_str(&self) -> &'static str {
        match self {
            OutcomeKind::Accepted => "Accepted",
            OutcomeKind::WrongAnswer => "WrongAnswer",
            OutcomeKind::TimeLimitExceeded => "TimeLimitExceeded",
            OutcomeKind::CompileError => "CompileError",
            OutcomeKind::RuntimeError => "RuntimeError",
            OutcomeKind::MemoryLimitExceeded => "MemoryLimitExceeded",
            OutcomeKind::SystemError => "SystemError",
        }
    }

    /// Human readable label for result panels
    pub fn label(&self) -> &'static str {
        match self {
            OutcomeKind::Accepted => "Accepted",
            OutcomeKind::WrongAnswer => "Wrong Answer",
            OutcomeKind::TimeLimitExceeded => "Time Limit Exceeded",
            OutcomeKind::CompileError => "Compile Error",
            OutcomeKind::RuntimeError => "Runtime Error",
            OutcomeKind::MemoryLimitExceeded => "Memory Limit Exceeded",
            OutcomeKind::SystemError => "System Error",
        }
    }

    /// Whether a failing case's output is an error stream rather than program output
    pub fn reports_error_stream(&self) -> bool {
        matches!(self, OutcomeKind::RuntimeError | OutcomeKind::CompileError)
    }
}

impl std::fmt::Display for OutcomeKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Anything that carries a canonical outcome
pub trait Verdict {
    fn outcome(&self) -> OutcomeKind;
}

impl Verdict for OutcomeKind {
    fn outcome(&self) -> OutcomeKind {
        *self
    }
}
