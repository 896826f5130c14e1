//! Utility helpers shared by the ContinuITy API client, engine, and CLI.

pub mod async_runtime;
pub mod date_handling;
pub mod text_processing;

pub use async_runtime::block_on_future;
pub use date_handling::{DATA_RANGE_PATTERN, append_time_range, format_range_timestamp};
pub use text_processing::json_value_to_text;
