//! Action execution.
//!
//! An experiment is a sequence of actions that communicate through shared
//! [`continuity_types::DataHolder`]s. Actions report, they do not throw: each
//! execution ends in a [`StepOutcome`] and every failure is absorbed at the
//! action boundary.

mod sequence;

pub use sequence::{ActionReport, ActionSequence};

use continuity_types::StepOutcome;

/// A single step of an experiment.
pub trait Action {
    /// Short identifier used in logs and reports.
    fn name(&self) -> &str;

    /// Run the action once. Implementations must not panic on remote failures;
    /// they record them in their output holders and in the returned outcome.
    fn execute(&self) -> StepOutcome;
}
