//! # ContinuITy Engine
//!
//! Experiment actions that drive the ContinuITy frontend, plus the minimal
//! machinery to run them in sequence.
//!
//! ## Key Features
//!
//! - **Workload model generation**: create a workload model from monitoring data
//!   and wait until it is finished
//! - **Shared holders**: actions read inputs from and write outputs to
//!   [`continuity_types::DataHolder`]s owned by the experiment
//! - **Report, don't throw**: failures are recorded in a broken holder instead of
//!   being propagated, so an experiment can decide how to continue
//!
//! ## Usage
//!
//! ```rust,no_run
//! use continuity_engine::{Action, WorkloadModelBindings, WorkloadModelGeneration};
//! use continuity_types::{DataHolder, RestEndpoint};
//!
//! let bindings = WorkloadModelBindings {
//!     data_link: DataHolder::with_value("http://session-logs:8080/logs/shop".to_string()),
//!     ..Default::default()
//! };
//! let generation = WorkloadModelGeneration::new(
//!     &RestEndpoint::with_default_port("continuity-frontend"),
//!     "wessbas",
//!     "shop",
//!     bindings.clone(),
//! )?;
//!
//! generation.execute();
//! if bindings.broken.get() == Some(true) {
//!     eprintln!("workload model generation failed");
//! } else if let Some(link) = bindings.workload_link.get() {
//!     println!("workload model: {link}");
//! }
//! # Ok::<(), continuity_api::ApiError>(())
//! ```

pub mod actions;
pub mod executor;

pub use actions::workload_model::{WorkloadModelBindings, WorkloadModelGeneration};
pub use executor::{Action, ActionReport, ActionSequence};
