//! Utility modules: retry, timeout.

pub mod retry;
pub mod timeout;
