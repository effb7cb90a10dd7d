//! hh-seq: graphicality test for degree sequences.
//!
//! Decides whether a sequence of non-negative integers is the degree
//! sequence of some simple undirected graph, using the Havel–Hakimi
//! reduction: repeatedly remove the largest degree `d` and connect it to
//! the `d` next-largest vertices. The reduction is exact, so no
//! backtracking is needed.
//!
//! # Example
//!
//! ```
//! use hh_seq::{is_graphical, trace_reduction};
//!
//! assert!(is_graphical(&[3, 3, 1, 1, 1, 1]).unwrap());
//! assert!(!is_graphical(&[4, 4, 1, 1]).unwrap());
//!
//! let trace = trace_reduction(&[2, 2, 2]).unwrap();
//! assert!(trace.verdict.is_graphical());
//! assert_eq!(trace.steps[0].remaining, vec![1, 1]);
//! ```

pub mod batch;
pub mod config;
pub mod havel_hakimi;
pub mod trace;

pub use batch::validate_batch;
pub use config::{NegativeInputPolicy, ValidatorConfig};
pub use havel_hakimi::{Validator, is_graphical, is_graphical_source, trace_reduction};
pub use trace::{NoTrace, Reason, ReductionStep, ReductionTrace, StepSink, Verdict};
