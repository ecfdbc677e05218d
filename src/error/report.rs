//! Errors raised while reading a credit report.

use thiserror::Error;

use crate::traits::HttpError;

/// Failure of a single report read.
///
/// The UI never branches on the variant; it shows the `Display` text.
/// The variants exist so logs and tests can tell transport, status and
/// payload failures apart.
#[derive(Debug, Error)]
pub enum ReportError {
    /// The request never produced a response
    #[error("{0}")]
    Http(#[from] HttpError),

    /// The server answered with a non-2xx status
    #[error("Server error ({status}): {message}")]
    Status { status: u16, message: String },

    /// The body did not match the expected document shape
    #[error("Invalid credit report: {0}")]
    Decode(#[from] serde_json::Error),
}

impl ReportError {
    /// Whether the failure happened before any response arrived.
    pub fn is_transport(&self) -> bool {
        matches!(self, ReportError::Http(_))
    }
}
