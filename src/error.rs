use std::result;

use thiserror::Error;

/// Error types for paper fetching operations
#[derive(Error, Debug)]
pub enum FetcherError {
    /// Search query was empty or whitespace only
    #[error("Query cannot be empty")]
    EmptyQuery,

    /// Detail fetch was requested without any paper IDs
    #[error("No valid paper IDs provided")]
    NoPaperIds,

    /// HTTP request failed
    #[error("HTTP request failed: {0}")]
    RequestError(#[from] reqwest::Error),

    /// Generic API error with HTTP status code
    #[error("API error {status}: {message}")]
    ApiError { status: u16, message: String },

    /// JSON parsing failed
    #[error("JSON parsing failed: {0}")]
    JsonError(#[from] serde_json::Error),

    /// XML parsing failed
    #[error("XML parsing failed: {0}")]
    XmlError(String),

    /// IO error for file operations
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// CSV serialization or write failed
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
}

/// Coarse classification of a [`FetcherError`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    EmptyQuery,
    NetworkFailure,
    ParseFailure,
    FileWriteFailure,
}

impl FetcherError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            FetcherError::EmptyQuery | FetcherError::NoPaperIds => ErrorKind::EmptyQuery,
            FetcherError::RequestError(err) if err.is_decode() => ErrorKind::ParseFailure,
            FetcherError::RequestError(_) | FetcherError::ApiError { .. } => {
                ErrorKind::NetworkFailure
            }
            FetcherError::JsonError(_) | FetcherError::XmlError(_) => ErrorKind::ParseFailure,
            FetcherError::Io(_) | FetcherError::Csv(_) => ErrorKind::FileWriteFailure,
        }
    }
}

pub type Result<T> = result::Result<T, FetcherError>;
