//! Concrete implementations of trait abstractions.
//!
//! # Adapters
//!
//! - [`ReqwestHttpClient`] - HTTP client using reqwest
//!
//! # Mock Implementations
//!
//! The [`mock`] submodule provides test doubles:
//! - [`mock::MockHttpClient`] - Configurable HTTP responses
//! - [`mock::MockReportSource`] - Scripted credit report reads

pub mod mock;
pub mod reqwest_http;

pub use mock::{MockHttpClient, MockReportSource};
pub use reqwest_http::ReqwestHttpClient;
