//! Failures of a single exchange with the remote sheet service.
//!
//! The `Display` text is shown to the operator as-is.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum SyncError {
    /// No endpoint URL was configured
    #[error("The remote endpoint URL is not configured (set NIROCHECK_ENDPOINT_URL or [remote].endpoint_url).")]
    MissingEndpoint,

    /// Request body could not be encoded
    #[error("Failed to encode request: {0}")]
    Encode(#[source] serde_json::Error),

    /// Push exceeded its hard deadline and was abandoned
    #[error("Request timed out after {seconds}s")]
    Timeout { seconds: u64 },

    /// Transport failure before a response was read
    #[error("Connection failed: {0}")]
    Connection(#[source] reqwest::Error),

    /// Non-2xx HTTP status
    #[error("Network error: {status} - {reason}. Response: {body}")]
    Status {
        status: u16,
        reason: String,
        body: String,
    },

    /// Body was not the expected JSON document
    #[error("Invalid server response: {body}")]
    InvalidResponse { body: String },

    /// The service answered but reported failure
    #[error("{message}")]
    Rejected { message: String },

    /// A stock row could not be mapped to (code, name, quantity)
    #[error("Stock row {index} is malformed: {row}")]
    MalformedRow { index: usize, row: String },
}

impl SyncError {
    /// Stable kind label for logs.
    pub fn kind(&self) -> &'static str {
        match self {
            SyncError::MissingEndpoint => "missing_endpoint",
            SyncError::Encode(_) => "encode",
            SyncError::Timeout { .. } => "timeout",
            SyncError::Connection(_) => "connection",
            SyncError::Status { .. } => "status",
            SyncError::InvalidResponse { .. } => "invalid_response",
            SyncError::Rejected { .. } => "rejected",
            SyncError::MalformedRow { .. } => "malformed_row",
        }
    }
}
