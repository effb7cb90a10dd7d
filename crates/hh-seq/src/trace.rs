//! Verdicts and reduction traces.

use std::fmt;

use hh_core::{Degree, RawDegree};
use serde::Serialize;

/// Why a sequence is not graphical.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Reason {
    /// Input contained a negative value (only under `NegativeInputPolicy::NonGraphical`).
    NegativeInput { index: usize, value: RawDegree },
    /// The degrees sum to an odd number.
    OddSum,
    /// The largest remaining degree has too few partners left.
    DegreeExceedsRemaining { degree: Degree, remaining: usize },
}

impl fmt::Display for Reason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Reason::NegativeInput { index, value } => {
                write!(f, "negative degree {} at position {}", value, index)
            }
            Reason::OddSum => write!(f, "degree sum is odd"),
            Reason::DegreeExceedsRemaining { degree, remaining } => write!(
                f,
                "degree {} exceeds the {} remaining vertices",
                degree, remaining
            ),
        }
    }
}

/// Outcome of one reduction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "verdict", rename_all = "snake_case")]
pub enum Verdict {
    Graphical,
    NotGraphical { reason: Reason },
}

impl Verdict {
    pub fn is_graphical(&self) -> bool {
        matches!(self, Verdict::Graphical)
    }

    pub fn reason(&self) -> Option<Reason> {
        match self {
            Verdict::Graphical => None,
            Verdict::NotGraphical { reason } => Some(*reason),
        }
    }
}

/// One Havel–Hakimi step: the removed maximum and what is left, sorted non-increasing.
///
/// `remaining` is captured after the decrement and before zeros are pruned.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReductionStep {
    pub removed: Degree,
    pub remaining: Vec<Degree>,
}

/// Full record of a reduction, for diagnostics and test fixtures.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReductionTrace {
    /// The caller's sequence, as given.
    pub initial: Vec<RawDegree>,
    pub steps: Vec<ReductionStep>,
    pub verdict: Verdict,
}

/// Receives each reduction step as it happens.
pub trait StepSink {
    fn record(&mut self, removed: Degree, remaining: &[Degree]);
}

/// Sink that drops every step.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoTrace;

impl StepSink for NoTrace {
    #[inline]
    fn record(&mut self, _removed: Degree, _remaining: &[Degree]) {}
}

impl StepSink for Vec<ReductionStep> {
    fn record(&mut self, removed: Degree, remaining: &[Degree]) {
        self.push(ReductionStep {
            removed,
            remaining: remaining.to_vec(),
        });
    }
}
