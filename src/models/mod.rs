//! Wire types for the credit report endpoint.

mod credit_report;

pub use credit_report::{CoachingSummary, CreditReportInfo, CreditReportResponse};
