//! Concrete experiment actions.

pub mod wait;
pub mod workload_model;

#[cfg(test)]
pub(crate) mod test_support;
