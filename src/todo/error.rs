use chrono::NaiveDate;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum TodoError {
    /// A schedule may start today or later, never in the past.
    #[error("Cannot start from a past day ({0})")]
    PastStartDate(NaiveDate),

    /// A concrete period (week/month/year) was required but `Never` was
    /// passed. Internal misuse, not a user error.
    #[error("A concrete repeat period is required, got 'Never'")]
    InvalidPeriod,

    #[error("Invalid date '{0}', expected YYYY-MM-DD")]
    DateParse(String),

    #[error("Date arithmetic out of range")]
    DateRange,

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Store error: {0}")]
    Store(String),

    #[error("{0}")]
    Api(String),
}

pub type Result<T> = std::result::Result<T, TodoError>;
