// src/error.rs
//! Error taxonomy shared by every parser.
//!
//! Callers can tell from the variant whether to fix their input
//! (`InvalidArgument`), or retry/report (`QueryFailed`). `MalformedRecord`
//! is produced per row by the transmuters; parsers log and skip it.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    #[error("malformed {kind} record: {reason}")]
    MalformedRecord { kind: &'static str, reason: String },

    #[error("query against {table} failed: {source}")]
    QueryFailed {
        table: String,
        #[source]
        source: SiteError,
    },
}

/// Failures surfaced by a [`crate::site::Site`] implementation.
#[derive(Debug, Error)]
pub enum SiteError {
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("request timed out")]
    Timeout,

    #[error("remote rejected query ({code}): {info}")]
    Rejected { code: String, info: String },

    #[error("could not decode response: {0}")]
    Decode(String),

    #[error("service unavailable: {0}")]
    Unavailable(String),
}

pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    pub(crate) fn invalid(msg: impl Into<String>) -> Self {
        Error::InvalidArgument(msg.into())
    }

    pub(crate) fn malformed(kind: &'static str, reason: impl Into<String>) -> Self {
        Error::MalformedRecord { kind, reason: reason.into() }
    }

    /// True when retrying the same call might succeed.
    pub fn is_transient(&self) -> bool {
        matches!(
            self,
            Error::QueryFailed { source: SiteError::Timeout | SiteError::Transport(_) | SiteError::Unavailable(_), .. }
        )
    }
}

impl From<serde_json::Error> for SiteError {
    fn from(e: serde_json::Error) -> Self {
        SiteError::Decode(e.to_string())
    }
}
