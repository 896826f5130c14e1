//! Shared type definitions for ContinuITy experiment actions.
//!
//! The types here are consumed by the API client, the action engine, and the CLI:
//!
//! - [`DataHolder`]: a shared, settable slot used to pass values between actions
//! - [`RestEndpoint`]: host/port configuration of the ContinuITy frontend
//! - [`PollPolicy`]: bounds for waiting on a workload model to finish
//! - [`StepOutcome`]: what a single action execution ended with

pub mod data_holder;
pub mod endpoint;
pub mod outcome;

pub use data_holder::DataHolder;
pub use endpoint::{DEFAULT_PORT, PollPolicy, RestEndpoint};
pub use outcome::StepOutcome;
