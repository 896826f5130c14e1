//! Workload model generation.
//!
//! Asks the ContinuITy frontend to create a workload model from a monitoring
//! data link, waits until the model is finished, and stores the link of the
//! created model in an output holder. Failures never escape [`Action::execute`]:
//! they set the broken holder so the experiment can decide how to proceed.

use std::sync::Arc;

use anyhow::{Context, Result, anyhow};
use chrono::{DateTime, Local};
use continuity_api::{ApiError, ContinuityClient, JsonObject, RestClient};
use continuity_types::{DataHolder, PollPolicy, RestEndpoint, StepOutcome};
use continuity_util::{append_time_range, json_value_to_text};
use serde_json::{Value, json};
use tracing::{debug, error, info};

use super::wait::{WaitStatus, wait_for_workload_model};
use crate::executor::Action;

/// Path of the create endpoint for a workload model type.
///
/// ```rust
/// use continuity_engine::actions::workload_model::create_path;
///
/// assert_eq!(create_path("wessbas"), "/workloadmodel/wessbas/create");
/// ```
pub fn create_path(wm_type: &str) -> String {
    format!("/workloadmodel/{wm_type}/create")
}

/// Input and output holders of a [`WorkloadModelGeneration`].
#[derive(Debug, Clone, Default)]
pub struct WorkloadModelBindings {
    /// Input: link used to retrieve the monitoring data.
    pub data_link: DataHolder<String>,
    /// Input: optional start of the monitoring data range.
    pub start_time: DataHolder<DateTime<Local>>,
    /// Input: optional end of the monitoring data range.
    pub stop_time: DataHolder<DateTime<Local>>,
    /// Output: link of the generated workload model, usable as
    /// `<frontend>/workloadmodel/get/<link>`.
    pub workload_link: DataHolder<String>,
    /// Output: set to `true` when the run failed.
    pub broken: DataHolder<bool>,
}

/// Causes generation of a workload model and stores its link.
pub struct WorkloadModelGeneration {
    client: Arc<dyn RestClient>,
    wm_type: String,
    tag: String,
    bindings: WorkloadModelBindings,
    poll_policy: PollPolicy,
}

impl WorkloadModelGeneration {
    /// Create the action against `endpoint` with a default HTTP client.
    ///
    /// `wm_type` is the workload model type (for example `wessbas`); `tag` groups
    /// the created model with its monitoring data.
    pub fn new(
        endpoint: &RestEndpoint,
        wm_type: impl Into<String>,
        tag: impl Into<String>,
        bindings: WorkloadModelBindings,
    ) -> Result<Self, ApiError> {
        let client = ContinuityClient::new(endpoint)?;
        Ok(Self::with_client(Arc::new(client), wm_type, tag, bindings))
    }

    /// Create the action using an externally supplied client.
    pub fn with_client(
        client: Arc<dyn RestClient>,
        wm_type: impl Into<String>,
        tag: impl Into<String>,
        bindings: WorkloadModelBindings,
    ) -> Self {
        Self {
            client,
            wm_type: wm_type.into(),
            tag: tag.into(),
            bindings,
            poll_policy: PollPolicy::default(),
        }
    }

    /// Replace the default wait bounds.
    pub fn with_poll_policy(mut self, poll_policy: PollPolicy) -> Self {
        self.poll_policy = poll_policy;
        self
    }

    pub fn bindings(&self) -> &WorkloadModelBindings {
        &self.bindings
    }

    /// Data reference sent to the frontend: the data link, with a
    /// `fromDate`/`toDate` range when both range holders are set.
    pub fn data_reference(&self) -> Option<String> {
        let data_link = self.bindings.data_link.get()?;
        let start = self.bindings.start_time.get();
        let stop = self.bindings.stop_time.get();
        Some(append_time_range(&data_link, start.as_ref(), stop.as_ref()))
    }

    fn generate(&self) -> Result<StepOutcome> {
        let data = self.data_reference().context("data link holder is not set")?;
        let request_body = json!({ "data": data, "tag": self.tag });
        let path = create_path(&self.wm_type);
        debug!(path = %path, data = %data, tag = %self.tag, "requesting workload model creation");

        let response = self
            .client
            .post_json(&path, &request_body)?
            .ok_or_else(|| anyhow!("empty response from {path}"))?;

        let message = response_message(&response);
        let Some(link) = response_link(&response) else {
            error!(message = %message, "the response did not contain a link");
            return Ok(StepOutcome::NoLink { message });
        };

        info!(
            message = %message,
            link = %link,
            "workload model creation initiated; waiting for creation to finish"
        );

        let wait = wait_for_workload_model(self.client.as_ref(), &link, &self.poll_policy)?;
        self.bindings.workload_link.set(link.clone());

        Ok(match wait.status {
            WaitStatus::Finished => StepOutcome::Finished {
                link,
                attempts: wait.attempts,
            },
            WaitStatus::TimedOut => StepOutcome::TimedOut {
                link,
                attempts: wait.attempts,
            },
        })
    }

    fn mark_broken(&self, reason: String) -> StepOutcome {
        self.bindings.broken.set(true);
        StepOutcome::Broken { reason }
    }
}

impl Action for WorkloadModelGeneration {
    fn name(&self) -> &str {
        "workload-model-generation"
    }

    fn execute(&self) -> StepOutcome {
        match self.generate() {
            Ok(outcome) => outcome,
            Err(error) => match error.downcast_ref::<ApiError>() {
                Some(ApiError::Status { status, reason, body }) => {
                    error!(
                        status,
                        reason = %reason,
                        body = %body,
                        "error response from server during workload model generation"
                    );
                    self.mark_broken(error.to_string())
                }
                _ => {
                    error!("unknown error during workload model creation; aborting this run");
                    debug!(error = ?error, "workload model creation failure detail");
                    self.mark_broken(error.to_string())
                }
            },
        }
    }
}

fn response_message(response: &JsonObject) -> String {
    response.get("message").map(json_value_to_text).unwrap_or_default()
}

// Absent and `null` are both "no link"; the check happens before stringification.
fn response_link(response: &JsonObject) -> Option<String> {
    match response.get("link") {
        None | Some(Value::Null) => None,
        Some(value) => Some(json_value_to_text(value)),
    }
}
