//! Credit report payload types.
//!
//! These mirror the JSON document served by the report endpoint. Keys are
//! camelCase on the wire.

use serde::{Deserialize, Serialize};

/// Score details and debt counters for a single credit report.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreditReportInfo {
    pub score: i32,
    pub score_band: i32,
    pub client_ref: String,
    pub status: String,
    pub max_score_value: i32,
    pub min_score_value: i32,
    pub months_since_last_defaulted: i32,
    pub has_ever_defaulted: bool,
    pub months_since_last_delinquent: i32,
    pub has_ever_been_delinquent: bool,
    pub percentage_credit_used: i32,
    pub percentage_credit_used_direction_flag: i32,
    pub changed_score: i32,
    pub current_short_term_debt: i32,
    pub current_short_term_non_promotional_debt: i32,
    pub current_short_term_credit_limit: i32,
    pub current_short_term_credit_utilisation: i32,
    pub change_in_short_term_debt: i32,
    pub current_long_term_debt: i32,
    pub current_long_term_non_promotional_debt: i32,
    pub current_long_term_credit_limit: Option<i32>,
    pub current_long_term_credit_utilisation: Option<i32>,
    pub change_in_long_term_debt: i32,
    pub num_positive_score_factors: i32,
    pub num_negative_score_factors: i32,
    pub equifax_score_band: i32,
    pub equifax_score_band_description: String,
    pub days_until_next_report: i32,
}

impl CreditReportInfo {
    /// Whether `score` lies within `[min_score_value, max_score_value]`.
    ///
    /// The endpoint does not guarantee this; callers only log when it fails.
    pub fn is_score_in_range(&self) -> bool {
        self.min_score_value <= self.score && self.score <= self.max_score_value
    }
}

/// Coaching flags attached to a report.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CoachingSummary {
    pub active_todo: bool,
    pub active_chat: bool,
    pub number_of_todo_items: i32,
    pub number_of_completed_todo_items: i32,
    pub selected: bool,
}

/// Top-level document returned by the report endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreditReportResponse {
    #[serde(rename = "accountIDVStatus")]
    pub account_idv_status: String,
    pub credit_report_info: CreditReportInfo,
    pub dashboard_status: String,
    pub persona_type: String,
    #[serde(default)]
    pub coaching_summary: Option<CoachingSummary>,
    /// Opaque; always null in the documents seen so far.
    #[serde(default)]
    pub augmented_credit_score: Option<serde_json::Value>,
}
