//! Mock configurations for test fixtures.
//!
//! Re-exports the mocks from `creditscore::adapters::mock` and adds a
//! builder for canned HTTP responses.

pub use creditscore::adapters::mock::{sample_report, MockHttpClient, MockReportSource, MockResponse};
pub use creditscore::traits::{HttpError, Response};

use bytes::Bytes;

/// Builder for a `MockHttpClient` with canned responses.
pub struct MockHttpConfig {
    client: MockHttpClient,
}

impl MockHttpConfig {
    pub fn new() -> Self {
        Self {
            client: MockHttpClient::new(),
        }
    }

    /// Respond to `url` with `status` and a JSON body.
    pub fn with_json_response(self, url: &str, status: u16, json: &str) -> Self {
        self.client.set_response(
            url,
            MockResponse::Success(Response::new(status, Bytes::from(json.to_string()))),
        );
        self
    }

    /// Fail requests to `url` at the transport level.
    pub fn with_transport_error(self, url: &str, error: HttpError) -> Self {
        self.client.set_response(url, MockResponse::Error(error));
        self
    }

    pub fn build(self) -> MockHttpClient {
        self.client
    }
}

impl Default for MockHttpConfig {
    fn default() -> Self {
        Self::new()
    }
}
