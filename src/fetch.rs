//! Fetch state machine.
//!
//! Holds the single observable [`FetchState`] and drives report reads.
//!
//! Every fetch first moves the state to `Loading`, performs exactly one read
//! through the [`ReportSource`], then settles to `Success` or `Error`.
//! Observers subscribe through a `tokio::sync::watch` channel and are woken
//! only when the state actually changes.
//!
//! Each fetch takes a generation number when it starts. A read that settles
//! after a newer fetch has started is dropped, so the state always reflects
//! the most recent trigger.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use tokio::sync::watch;
use tokio::task::JoinHandle;

use crate::error::ReportResult;
use crate::models::CreditReportResponse;
use crate::traits::ReportSource;

/// Latest outcome of the report fetch.
#[derive(Debug, Clone, PartialEq)]
pub enum FetchState {
    /// A read is in flight (or none has started yet)
    Loading,
    /// The most recent read returned this report
    Success(CreditReportResponse),
    /// The most recent read failed with this message
    Error(String),
}

impl FetchState {
    pub fn is_loading(&self) -> bool {
        matches!(self, FetchState::Loading)
    }

    /// The report, if the state is `Success`.
    pub fn report(&self) -> Option<&CreditReportResponse> {
        match self {
            FetchState::Success(report) => Some(report),
            _ => None,
        }
    }

    /// The error message, if the state is `Error`.
    pub fn error_message(&self) -> Option<&str> {
        match self {
            FetchState::Error(message) => Some(message),
            _ => None,
        }
    }
}

/// Owns the fetch state and the source it reads from.
///
/// Cheap to clone; clones share the same state and generation counter.
#[derive(Clone)]
pub struct FetchStateMachine {
    source: Arc<dyn ReportSource>,
    state: Arc<watch::Sender<FetchState>>,
    generation: Arc<AtomicU64>,
}

impl FetchStateMachine {
    /// Create a machine in the `Loading` state. No read is started.
    pub fn new(source: Arc<dyn ReportSource>) -> Self {
        let (state, _) = watch::channel(FetchState::Loading);
        Self {
            source,
            state: Arc::new(state),
            generation: Arc::new(AtomicU64::new(0)),
        }
    }

    /// Snapshot of the current state.
    pub fn state(&self) -> FetchState {
        self.state.borrow().clone()
    }

    /// Subscribe to state changes.
    pub fn subscribe(&self) -> watch::Receiver<FetchState> {
        self.state.subscribe()
    }

    /// Generation of the most recently started fetch (0 before any).
    pub fn generation(&self) -> u64 {
        self.generation.load(Ordering::SeqCst)
    }

    /// Start a fetch in a background task.
    ///
    /// The state is `Loading` when this returns. Must be called from within a
    /// tokio runtime.
    pub fn trigger(&self) -> JoinHandle<()> {
        let generation = self.begin();
        let machine = self.clone();
        tokio::spawn(async move {
            machine.run(generation).await;
        })
    }

    /// Run a fetch to completion on the current task.
    ///
    /// Returns `false` if a newer fetch started while this one was in flight,
    /// in which case its result was discarded.
    pub async fn fetch(&self) -> bool {
        let generation = self.begin();
        self.run(generation).await
    }

    /// Move to `Loading` and claim a new generation.
    fn begin(&self) -> u64 {
        let mut generation = 0;
        self.state.send_if_modified(|state| {
            generation = self.generation.fetch_add(1, Ordering::SeqCst) + 1;
            if state.is_loading() {
                false
            } else {
                *state = FetchState::Loading;
                true
            }
        });
        generation
    }

    async fn run(&self, generation: u64) -> bool {
        tracing::info!(generation, "fetching credit report");

        let outcome = self.source.get_credit_report().await;
        match &outcome {
            Ok(report) => {
                let info = &report.credit_report_info;
                tracing::debug!(
                    generation,
                    score = info.score,
                    max_score = info.max_score_value,
                    "credit report fetched"
                );
                if !info.is_score_in_range() {
                    tracing::warn!(
                        score = info.score,
                        min = info.min_score_value,
                        max = info.max_score_value,
                        "score outside reported range"
                    );
                }
            }
            Err(err) => {
                tracing::warn!(generation, error = %err, "credit report fetch failed");
            }
        }

        let applied = self.settle(generation, outcome);
        if !applied {
            tracing::debug!(
                generation,
                current = self.generation(),
                "discarding stale fetch result"
            );
        }
        applied
    }

    /// Publish the outcome unless a newer fetch has started.
    fn settle(&self, generation: u64, outcome: ReportResult<CreditReportResponse>) -> bool {
        let next = match outcome {
            Ok(report) => FetchState::Success(report),
            Err(err) => FetchState::Error(err.to_string()),
        };

        let mut applied = false;
        self.state.send_if_modified(|state| {
            // Checked under the channel lock so `begin` cannot interleave
            if self.generation.load(Ordering::SeqCst) != generation {
                return false;
            }
            applied = true;
            *state = next;
            true
        });
        applied
    }
}
