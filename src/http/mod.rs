//! HTTP client layer — `NetworkCampHttp` with an explicit retry policy.

pub mod client;
pub mod retry;

pub use client::{NetworkCampHttp, DEFAULT_RESPONSE_SERIES_LIMIT};
pub use retry::{RetryConfig, RetryPolicy};
