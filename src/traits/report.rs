//! Report source trait.

use async_trait::async_trait;

use crate::error::ReportResult;
use crate::models::CreditReportResponse;

/// A source of credit reports.
///
/// The fetch state machine depends only on this trait. Production code uses
/// [`crate::repository::CreditReportRepository`]; tests use
/// [`crate::adapters::mock::MockReportSource`].
#[async_trait]
pub trait ReportSource: Send + Sync {
    /// Read the current credit report.
    async fn get_credit_report(&self) -> ReportResult<CreditReportResponse>;
}
