//! Credit report API client.
//!
//! Issues the single `GET` for the report document and decodes it. No retries,
//! no pagination, no auth headers.

use std::sync::Arc;

use crate::adapters::ReqwestHttpClient;
use crate::config::AppConfig;
use crate::error::{ReportError, ReportResult};
use crate::models::CreditReportResponse;
use crate::traits::{Headers, HttpClient};

/// Client for the credit report endpoint.
#[derive(Clone)]
pub struct CreditReportClient {
    /// Full URL of the report document
    url: String,
    http: Arc<dyn HttpClient>,
}

impl CreditReportClient {
    /// Create a client for `config` using the given transport.
    pub fn new(config: &AppConfig, http: Arc<dyn HttpClient>) -> Self {
        Self {
            url: config.endpoint_url(),
            http,
        }
    }

    /// Create a client backed by reqwest with the configured timeout.
    pub fn from_config(config: &AppConfig) -> ReportResult<Self> {
        let http = ReqwestHttpClient::with_timeout(config.request_timeout)?;
        Ok(Self::new(config, Arc::new(http)))
    }

    /// URL this client reads from.
    pub fn url(&self) -> &str {
        &self.url
    }

    /// Fetch and decode the report document.
    pub async fn get_credit_report(&self) -> ReportResult<CreditReportResponse> {
        let mut headers = Headers::new();
        headers.insert("Accept".to_string(), "application/json".to_string());

        let response = self.http.get(&self.url, &headers).await?;

        if !response.is_success() {
            let body = response.text_lossy();
            tracing::debug!(status = response.status, body = %body, "report endpoint returned an error");
            return Err(ReportError::Status {
                status: response.status,
                message: status_summary(response.status, &body),
            });
        }

        Ok(response.json::<CreditReportResponse>()?)
    }
}

/// Longest error body excerpt kept in a `Status` message.
const MAX_STATUS_MESSAGE_CHARS: usize = 80;

/// Short, single-line description of an error response.
///
/// S3-style XML bodies yield their `<Code>`; other bodies yield their first
/// non-empty line, capped. An empty body falls back to the status reason.
fn status_summary(status: u16, body: &str) -> String {
    if let Some(code) = xml_error_code(body) {
        return code.to_string();
    }

    match body.lines().map(str::trim).find(|line| !line.is_empty()) {
        Some(line) if line.chars().count() > MAX_STATUS_MESSAGE_CHARS => {
            let excerpt: String = line.chars().take(MAX_STATUS_MESSAGE_CHARS).collect();
            format!("{}...", excerpt)
        }
        Some(line) => line.to_string(),
        None => reqwest::StatusCode::from_u16(status)
            .ok()
            .and_then(|code| code.canonical_reason())
            .unwrap_or("no response body")
            .to_string(),
    }
}

fn xml_error_code(body: &str) -> Option<&str> {
    let start = body.find("<Code>")? + "<Code>".len();
    let len = body[start..].find("</Code>")?;
    Some(body[start..start + len].trim()).filter(|code| !code.is_empty())
}
