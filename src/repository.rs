//! Report store.
//!
//! A pass-through from [`ReportSource`] to [`CreditReportClient`].

use async_trait::async_trait;

use crate::client::CreditReportClient;
use crate::error::ReportResult;
use crate::models::CreditReportResponse;
use crate::traits::ReportSource;

/// Forwards report reads to the API client.
#[derive(Clone)]
pub struct CreditReportRepository {
    client: CreditReportClient,
}

impl CreditReportRepository {
    pub fn new(client: CreditReportClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl ReportSource for CreditReportRepository {
    async fn get_credit_report(&self) -> ReportResult<CreditReportResponse> {
        self.client.get_credit_report().await
    }
}
