//! Submission statistics
//!
//! Percentile feedback ("faster than N% of submissions") needs historical
//! data the client does not own, so it is sourced through a provider trait.

use serde::{Deserialize, Serialize};

use crate::domain::language::Language;

/// Runtime and memory percentiles for an accepted submission, 0 to 100
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Percentiles {
    pub runtime: u8,
    pub memory: Option<u8>,
}

impl Percentiles {
    /// Build percentiles, clamping both values into 0..=100
    pub fn new(runtime: f64, memory: Option<f64>) -> Self {
        Self {
            runtime: clamp_percent(runtime),
            memory: memory.map(clamp_percent),
        }
    }
}

fn clamp_percent(value: f64) -> u8 {
    if value.is_nan() {
        return 0;
    }
    value.round().clamp(0.0, 100.0) as u8
}

/// Source of percentile statistics
pub trait StatisticsProvider: Send + Sync {
    /// Percentiles for an accepted submission, if known
    fn percentiles(
        &self,
        problem: &str,
        language: Language,
        runtime_ms: u64,
        memory_kb: Option<u64>,
    ) -> Option<Percentiles>;
}

/// Provider used when no statistics backend is configured
#[derive(Debug, Clone, Copy, Default)]
pub struct NoStatistics;

impl StatisticsProvider for NoStatistics {
    fn percentiles(&self, _: &str, _: Language, _: u64, _: Option<u64>) -> Option<Percentiles> {
        None
    }
}
