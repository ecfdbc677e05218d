//! Error types for creditscore.
//!
//! Report reads fail with [`ReportError`]. The fetch state machine turns any
//! failure into a plain message, so nothing above the state machine matches
//! on error variants. Binary-level plumbing uses `color_eyre::Result`.

mod report;

pub use report::ReportError;

/// Result alias for report reads.
pub type ReportResult<T> = Result<T, ReportError>;
