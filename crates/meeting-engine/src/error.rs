//! Error types for meeting-engine operations.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EngineError {
    /// A time range was outside `[0, 1440]` or had `start >= end`.
    #[error("Invalid time range [{start}, {end}): must satisfy 0 <= start < end <= 1440")]
    InvalidTimeRange { start: u32, end: u32 },

    #[error("Invalid meeting duration: {0} minutes (must be greater than zero)")]
    InvalidDuration(u32),

    #[error("Invalid comment limit '{0}': expected an integer between 1 and 10")]
    InvalidCommentLimit(String),

    /// A write was attempted without a logged-in user.
    #[error("Not logged in; sign in at {login_url}")]
    NotAuthenticated { login_url: String },

    #[error("Comment store error: {0}")]
    Store(String),
}

pub type Result<T> = std::result::Result<T, EngineError>;
