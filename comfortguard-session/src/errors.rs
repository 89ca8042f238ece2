//! Session error types
//!
//! Every failure is reported as a value; a failed load never touches the
//! state it would have replaced.

use thiserror_no_std::Error;

/// Result type for session operations
pub type SessionResult<T> = Result<T, SessionError>;

/// Session record failures
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SessionError {
    /// Document is not a usable session record
    #[error("malformed session record: {reason}")]
    MalformedRecord {
        /// What was wrong with it
        reason: String,
    },

    /// A timestamp cannot be represented in the record
    #[error("timestamp {value} ms cannot be represented as a calendar date")]
    Timestamp {
        /// The offending value (ms since Unix epoch)
        value: u64,
    },

    /// Reading or writing a session file failed
    #[error("session file {path}: {reason}")]
    Io {
        /// File involved
        path: String,
        /// Underlying I/O error text
        reason: String,
    },
}

impl SessionError {
    pub(crate) fn malformed(reason: impl Into<String>) -> Self {
        let reason = reason.into();
        log::warn!("rejecting session record: {}", reason);
        Self::MalformedRecord { reason }
    }
}
