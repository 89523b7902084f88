//! Shared client utilities for API access, configuration, and errors.
//!
//! Feature action creators go through these helpers so every request gets the
//! same timeout, user agent, and response normalization. The helpers attach
//! tokens provided by callers but never store or log them.

pub mod api;
pub mod config;
pub mod errors;

pub use api::ApiClient;
pub use config::AppConfig;
pub use errors::AppError;
