//! Waiting for a workload model to be finished.
//!
//! The frontend's wait endpoint long-polls for up to the requested timeout and
//! answers with an empty body (or `{}`) while the model is still being created.
//! Any non-empty object means the model is finished.

use std::thread;

use continuity_api::{ApiError, RestClient};
use continuity_types::PollPolicy;
use tracing::{debug, error, info};

/// How a wait loop ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WaitStatus {
    /// The frontend reported the model as finished.
    Finished,
    /// The attempt bound was exceeded first.
    TimedOut,
}

/// Result of waiting for a workload model.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WaitResult {
    pub status: WaitStatus,
    /// Number of wait requests issued.
    pub attempts: u32,
}

/// Path of the wait endpoint for `link`.
///
/// ```rust
/// use continuity_engine::actions::wait::wait_path;
///
/// assert_eq!(wait_path("abc123", 40_000), "/workloadmodel/wait/abc123?timeout=40000");
/// ```
pub fn wait_path(link: &str, timeout_ms: u64) -> String {
    format!("/workloadmodel/wait/{link}?timeout={timeout_ms}")
}

/// Poll the wait endpoint until the model is finished or the policy bound is exceeded.
///
/// The loop counter starts at 0 and the bound is checked before each request, so
/// at most `policy.max_loop_counter + 1` requests are issued. Exceeding the bound
/// is not an error. Request failures end the loop immediately.
pub fn wait_for_workload_model(client: &dyn RestClient, link: &str, policy: &PollPolicy) -> Result<WaitResult, ApiError> {
    let path = wait_path(link, policy.wait_timeout_ms);
    let mut loop_counter = 0u32;

    loop {
        if loop_counter > policy.max_loop_counter {
            error!(
                link,
                attempts = loop_counter,
                wait_timeout_ms = policy.wait_timeout_ms,
                "workload model still not finished after the maximum number of waits; aborting"
            );
            return Ok(WaitResult {
                status: WaitStatus::TimedOut,
                attempts: loop_counter,
            });
        }

        let response = client.get_json(&path)?;
        loop_counter += 1;

        if response.is_some_and(|body| !body.is_empty()) {
            info!(link, attempts = loop_counter, "workload model finished");
            return Ok(WaitResult {
                status: WaitStatus::Finished,
                attempts: loop_counter,
            });
        }

        debug!(link, attempts = loop_counter, "workload model not finished yet");
        if !policy.interval.is_zero() && loop_counter <= policy.max_loop_counter {
            thread::sleep(policy.interval);
        }
    }
}
