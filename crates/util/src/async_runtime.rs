//! Async runtime helpers for blocking callers.
//!
//! Experiment actions execute synchronously while the HTTP client is async.
//! This module provides the single entry point that drives a future to completion
//! on the calling thread, reusing the current Tokio runtime when available.

use anyhow::anyhow;
use std::future::Future;
use tokio::runtime::{Handle, RuntimeFlavor};
use tokio::task;

/// Execute an async future from synchronous code.
///
/// # Arguments
/// - `future`: The future to run to completion.
///
/// # Returns
/// Returns the future's output or an error if no runtime can be used.
///
/// # Notes
/// - Reuses the current multi-threaded runtime via `block_in_place`.
/// - Falls back to a fresh single-threaded runtime for call sites outside Tokio.
/// - Calling from inside a current-thread runtime is an error: blocking there
///   would stall the only worker.
pub fn block_on_future<F, T>(future: F) -> anyhow::Result<T>
where
    F: Future<Output = anyhow::Result<T>> + Send + 'static,
    T: Send + 'static,
{
    if let Ok(handle) = Handle::try_current() {
        if handle.runtime_flavor() == RuntimeFlavor::CurrentThread {
            return Err(anyhow!("cannot block inside a current-thread Tokio runtime"));
        }
        task::block_in_place(|| handle.block_on(future))
    } else {
        tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
            .map_err(|error| anyhow!(error))?
            .block_on(future)
    }
}
