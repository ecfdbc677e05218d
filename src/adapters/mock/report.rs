//! Scripted report source for testing.
//!
//! Each call to [`ReportSource::get_credit_report`] pops the next scripted
//! result. A result can be gated so that it only settles once the test
//! releases it, which is how overlapping fetches are exercised.

use async_trait::async_trait;
use std::collections::VecDeque;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;
use tokio::sync::oneshot;

use crate::error::{ReportError, ReportResult};
use crate::models::{CoachingSummary, CreditReportInfo, CreditReportResponse};
use crate::traits::{HttpError, ReportSource};

struct ScriptedRead {
    result: ReportResult<CreditReportResponse>,
    gate: Option<oneshot::Receiver<()>>,
}

/// Mock report source returning scripted results in order.
#[derive(Default)]
pub struct MockReportSource {
    script: Mutex<VecDeque<ScriptedRead>>,
    calls: AtomicUsize,
}

impl MockReportSource {
    /// Create a source with an empty script.
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue a successful read.
    pub fn push_ok(&self, report: CreditReportResponse) {
        self.push(Ok(report), None);
    }

    /// Queue a failing read.
    pub fn push_err(&self, err: ReportError) {
        self.push(Err(err), None);
    }

    /// Queue a read that settles only after the returned sender fires (or drops).
    pub fn push_gated(&self, result: ReportResult<CreditReportResponse>) -> oneshot::Sender<()> {
        let (tx, rx) = oneshot::channel();
        self.push(result, Some(rx));
        tx
    }

    /// Number of reads performed so far.
    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    fn push(&self, result: ReportResult<CreditReportResponse>, gate: Option<oneshot::Receiver<()>>) {
        self.script
            .lock()
            .unwrap()
            .push_back(ScriptedRead { result, gate });
    }
}

#[async_trait]
impl ReportSource for MockReportSource {
    async fn get_credit_report(&self) -> ReportResult<CreditReportResponse> {
        self.calls.fetch_add(1, Ordering::SeqCst);

        // Lock is released before awaiting the gate
        let next = self.script.lock().unwrap().pop_front();
        match next {
            Some(ScriptedRead { result, gate }) => {
                if let Some(gate) = gate {
                    let _ = gate.await;
                }
                result
            }
            None => Err(HttpError::Other("No scripted report".to_string()).into()),
        }
    }
}

/// A report matching the document served by the live endpoint.
pub fn sample_report() -> CreditReportResponse {
    CreditReportResponse {
        account_idv_status: "PASS".to_string(),
        credit_report_info: CreditReportInfo {
            score: 514,
            score_band: 4,
            client_ref: "CS-SED-655426-708782".to_string(),
            status: "MATCH".to_string(),
            max_score_value: 700,
            min_score_value: 0,
            months_since_last_defaulted: -1,
            has_ever_defaulted: false,
            months_since_last_delinquent: 1,
            has_ever_been_delinquent: true,
            percentage_credit_used: 44,
            percentage_credit_used_direction_flag: 1,
            changed_score: 0,
            current_short_term_debt: 13758,
            current_short_term_non_promotional_debt: 13758,
            current_short_term_credit_limit: 30600,
            current_short_term_credit_utilisation: 44,
            change_in_short_term_debt: 549,
            current_long_term_debt: 24682,
            current_long_term_non_promotional_debt: 24682,
            current_long_term_credit_limit: None,
            current_long_term_credit_utilisation: None,
            change_in_long_term_debt: -327,
            num_positive_score_factors: 9,
            num_negative_score_factors: 0,
            equifax_score_band: 4,
            equifax_score_band_description: "Excellent".to_string(),
            days_until_next_report: 9,
        },
        dashboard_status: "PASS".to_string(),
        persona_type: "INEXPERIENCED".to_string(),
        coaching_summary: Some(CoachingSummary {
            active_todo: false,
            active_chat: true,
            number_of_todo_items: 0,
            number_of_completed_todo_items: 0,
            selected: true,
        }),
        augmented_credit_score: None,
    }
}
