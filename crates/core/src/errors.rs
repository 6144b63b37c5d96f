//! Core error types for the Folio portfolio tracker.
//!
//! The aggregation path never fails: absent or malformed numbers are treated
//! as zero. These errors cover the surrounding plumbing (sessions, sources,
//! snapshot files, settings).

use thiserror::Error;

/// Type alias for Result using our Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Root error type for the portfolio core.
#[derive(Error, Debug)]
pub enum Error {
    #[error("Input validation failed: {0}")]
    Validation(#[from] ValidationError),

    #[error("Portfolio source error: {0}")]
    Source(#[from] SourceError),

    #[error("Session error: {0}")]
    Session(#[from] SessionError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization failed: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Invalid configuration value: {0}")]
    InvalidConfigValue(String),

    #[error("Unexpected error: {0}")]
    Unexpected(String),
}

/// Validation errors for user input and data parsing.
#[derive(Error, Debug)]
pub enum ValidationError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Required field '{0}' is missing")]
    MissingField(String),

    #[error("Failed to parse decimal number: {0}")]
    DecimalParse(#[from] rust_decimal::Error),
}

/// Errors raised by a portfolio data source.
#[derive(Error, Debug)]
pub enum SourceError {
    /// The source could not produce the portfolio list.
    #[error("Failed to list portfolios: {0}")]
    ListFailed(String),

    /// A single portfolio's valuation could not be fetched.
    #[error("Failed to fetch valuation for portfolio {portfolio_id}: {reason}")]
    ValuationFailed { portfolio_id: String, reason: String },

    /// A single portfolio's holdings could not be fetched.
    #[error("Failed to fetch holdings for portfolio {portfolio_id}: {reason}")]
    HoldingsFailed { portfolio_id: String, reason: String },

    #[error("Portfolio {0} not found")]
    NotFound(String),
}

/// Errors raised by the session context and its stores.
#[derive(Error, Debug)]
pub enum SessionError {
    #[error("Not authenticated")]
    NotAuthenticated,

    #[error("Session expired")]
    Expired,

    #[error("Session store failure: {0}")]
    Store(String),
}

impl From<rust_decimal::Error> for Error {
    fn from(err: rust_decimal::Error) -> Self {
        Error::Validation(ValidationError::DecimalParse(err))
    }
}

impl From<Error> for String {
    fn from(err: Error) -> Self {
        err.to_string()
    }
}
