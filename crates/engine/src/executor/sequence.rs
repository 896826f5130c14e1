//! Sequential action execution.

use continuity_types::StepOutcome;
use serde::Serialize;
use tracing::{debug, info, warn};

use super::Action;

/// Outcome of one action within a sequence run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ActionReport {
    /// Name of the executed action.
    pub name: String,
    /// What the action ended with.
    pub outcome: StepOutcome,
}

/// Ordered list of actions executed one after another.
///
/// A broken outcome ends the run: later actions usually consume the outputs of
/// earlier ones and would only operate on unset holders.
#[derive(Default)]
pub struct ActionSequence {
    actions: Vec<Box<dyn Action>>,
}

impl ActionSequence {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an action to the end of the sequence.
    pub fn then(mut self, action: impl Action + 'static) -> Self {
        self.actions.push(Box::new(action));
        self
    }

    pub fn push(&mut self, action: Box<dyn Action>) {
        self.actions.push(action);
    }

    pub fn len(&self) -> usize {
        self.actions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.actions.is_empty()
    }

    /// Execute all actions in order, stopping after the first broken outcome.
    ///
    /// Returns one report per executed action.
    pub fn run(&self) -> Vec<ActionReport> {
        info!(action_count = self.actions.len(), "action sequence started");
        let mut reports = Vec::with_capacity(self.actions.len());

        for (index, action) in self.actions.iter().enumerate() {
            debug!(action = action.name(), index, "action started");
            let outcome = action.execute();
            let broken = outcome.is_broken();
            reports.push(ActionReport {
                name: action.name().to_string(),
                outcome,
            });

            if broken {
                let skipped = self.actions.len() - index - 1;
                warn!(action = action.name(), skipped, "action sequence aborted after broken run");
                return reports;
            }
        }

        info!(action_count = reports.len(), "action sequence finished");
        reports
    }
}
