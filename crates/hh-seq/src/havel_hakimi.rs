//! The Havel–Hakimi reduction.

use hh_core::{Degree, DegreeSource, HhError, HhResult, RawDegree, sum_is_even};
use tracing::{debug, trace};

use crate::config::{NegativeInputPolicy, ValidatorConfig};
use crate::trace::{NoTrace, Reason, ReductionStep, ReductionTrace, StepSink, Verdict};

/// Degree-sequence validator.
///
/// Stateless apart from its configuration; every call works on its own
/// working copy, so one validator can be shared across threads.
#[derive(Debug, Clone, Copy, Default)]
pub struct Validator {
    config: ValidatorConfig,
}

impl Validator {
    pub fn new(config: ValidatorConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ValidatorConfig {
        &self.config
    }

    /// Whether `degrees` is the degree sequence of a simple undirected graph.
    ///
    /// The input is never modified.
    pub fn check(&self, degrees: &[RawDegree]) -> HhResult<bool> {
        self.reduce(degrees, &mut NoTrace).map(|v| v.is_graphical())
    }

    /// Like [`check`](Self::check), on a sequence pulled from a degree source.
    pub fn check_source<S: DegreeSource + ?Sized>(&self, source: &S) -> HhResult<bool> {
        self.check(&source.degree_sequence())
    }

    /// Run the reduction and keep every intermediate state.
    pub fn trace(&self, degrees: &[RawDegree]) -> HhResult<ReductionTrace> {
        let mut steps: Vec<ReductionStep> = Vec::new();
        let verdict = self.reduce(degrees, &mut steps)?;
        Ok(ReductionTrace {
            initial: degrees.to_vec(),
            steps,
            verdict,
        })
    }

    /// Core reduction, reporting each step to `sink`.
    ///
    /// Re-sorts the whole working copy on every pass (stable sort, descending),
    /// so the worst case is O(N² log N). Each pass removes one vertex, so there
    /// are at most N passes.
    pub fn reduce<K: StepSink + ?Sized>(
        &self,
        degrees: &[RawDegree],
        sink: &mut K,
    ) -> HhResult<Verdict> {
        let mut work = match self.working_copy(degrees)? {
            Ok(work) => work,
            Err(reason) => return Ok(not_graphical(reason)),
        };

        if !sum_is_even(degrees) {
            return Ok(not_graphical(Reason::OddSum));
        }

        work.retain(|&d| d != 0);
        sort_descending(&mut work);

        loop {
            if work.is_empty() {
                debug!(n = degrees.len(), "sequence is graphical");
                return Ok(Verdict::Graphical);
            }

            let d = work.remove(0);
            // Only reachable if zeros were not pruned above.
            if d == 0 {
                return Ok(Verdict::Graphical);
            }

            if d > work.len() {
                return Ok(not_graphical(Reason::DegreeExceedsRemaining {
                    degree: d,
                    remaining: work.len(),
                }));
            }

            for slot in &mut work[..d] {
                *slot = slot.checked_sub(1).ok_or(HhError::Invariant {
                    what: "Havel-Hakimi decrement went below zero",
                })?;
            }

            sort_descending(&mut work);
            trace!(removed = d, remaining = ?work, "reduction step");
            sink.record(d, &work);

            // Zeros sort last, so this only trims the tail.
            work.retain(|&d| d != 0);
        }
    }

    /// Owned per-call copy of the input, or the reason it cannot be reduced.
    fn working_copy(&self, degrees: &[RawDegree]) -> HhResult<Result<Vec<Degree>, Reason>> {
        let mut work = Vec::with_capacity(degrees.len());
        for (index, &value) in degrees.iter().enumerate() {
            if value < 0 {
                return match self.config.negative_input {
                    NegativeInputPolicy::Reject => Err(HhError::NegativeDegree { index, value }),
                    NegativeInputPolicy::NonGraphical => {
                        Ok(Err(Reason::NegativeInput { index, value }))
                    }
                };
            }
            let degree = Degree::try_from(value).map_err(|_| HhError::InvalidArg {
                what: "degree does not fit in usize",
            })?;
            work.push(degree);
        }
        Ok(Ok(work))
    }
}

fn sort_descending(work: &mut [Degree]) {
    work.sort_by(|a, b| b.cmp(a));
}

fn not_graphical(reason: Reason) -> Verdict {
    debug!(%reason, "sequence is not graphical");
    Verdict::NotGraphical { reason }
}

/// Check a literal sequence with the default configuration.
pub fn is_graphical(degrees: &[RawDegree]) -> HhResult<bool> {
    Validator::default().check(degrees)
}

/// Check the degree sequence of any [`DegreeSource`] with the default configuration.
pub fn is_graphical_source<S: DegreeSource + ?Sized>(source: &S) -> HhResult<bool> {
    Validator::default().check_source(source)
}

/// Trace the reduction of a literal sequence with the default configuration.
pub fn trace_reduction(degrees: &[RawDegree]) -> HhResult<ReductionTrace> {
    Validator::default().trace(degrees)
}
