// ==========================================
// Kashi Kravings Dashboard - API Layer Errors
// ==========================================
// Converts importer/repository errors into user-facing messages.
// Every variant carries an explicit reason; the transport wrapping
// this crate turns them into its own generic failure responses.
// ==========================================

use crate::importer::error::ImportError;
use crate::repository::error::RepositoryError;
use thiserror::Error;

/// API layer error type
#[derive(Error, Debug)]
pub enum ApiError {
    #[error("invalid input: {0}")]
    InvalidInput(String),

    #[error("sales data source unavailable: {0}")]
    UpstreamUnavailable(String),

    #[error("invoice upload rejected: {0}")]
    InvalidUpload(String),

    #[error("invoice storage failed: {0}")]
    StorageError(String),

    #[error("internal error: {0}")]
    InternalError(String),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl From<RepositoryError> for ApiError {
    fn from(err: RepositoryError) -> Self {
        match err {
            RepositoryError::RowFetchError(msg) | RepositoryError::Unauthorized(msg) => {
                ApiError::UpstreamUnavailable(msg)
            }
            RepositoryError::FileReadError(msg)
            | RepositoryError::FileWriteError(msg)
            | RepositoryError::CorruptData(msg) => ApiError::StorageError(msg),
            RepositoryError::InternalError(msg) => ApiError::InternalError(msg),
            RepositoryError::Other(err) => ApiError::Other(err),
        }
    }
}

impl From<ImportError> for ApiError {
    fn from(err: ImportError) -> Self {
        match err {
            ImportError::InternalError(msg) => ApiError::InternalError(msg),
            ImportError::Other(err) => ApiError::Other(err),
            structural => ApiError::InvalidUpload(structural.to_string()),
        }
    }
}

/// Result type alias
pub type ApiResult<T> = Result<T, ApiError>;
