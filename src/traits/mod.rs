//! Trait abstractions for dependency injection and testability.
//!
//! # Traits
//!
//! - [`HttpClient`] - HTTP client operations (GET)
//! - [`ReportSource`] - Anything that can produce a credit report

pub mod http;
pub mod report;

pub use http::{Headers, HttpClient, HttpError, Response};
pub use report::ReportSource;
