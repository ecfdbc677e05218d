//! Mock implementations for testing.
//!
//! # Available Mocks
//!
//! - [`MockHttpClient`] - HTTP client with configurable responses
//! - [`MockReportSource`] - Report source with scripted, optionally gated results

pub mod http;
pub mod report;

pub use http::{MockHttpClient, MockResponse};
pub use report::{sample_report, MockReportSource};
