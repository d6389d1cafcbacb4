// ==========================================
// Kashi Kravings Dashboard - Repository Errors
// ==========================================
// Failures at the collaborator boundary: the remote row source and
// the invoice file store. Upstream failures are hard errors - the
// engine performs no retry and no silent fallback here (fallback is
// an API-layer policy decision).
// ==========================================

use thiserror::Error;

/// Repository layer error type
#[derive(Error, Debug)]
pub enum RepositoryError {
    // ===== Row source =====
    #[error("row source fetch failed: {0}")]
    RowFetchError(String),

    #[error("row source rejected credentials: {0}")]
    Unauthorized(String),

    // ===== Invoice file store =====
    #[error("invoice file read failed: {0}")]
    FileReadError(String),

    #[error("invoice file write failed: {0}")]
    FileWriteError(String),

    #[error("invoice file is corrupt: {0}")]
    CorruptData(String),

    // ===== Generic =====
    #[error("internal repository error: {0}")]
    InternalError(String),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl From<std::io::Error> for RepositoryError {
    fn from(err: std::io::Error) -> Self {
        RepositoryError::FileReadError(err.to_string())
    }
}

impl From<serde_json::Error> for RepositoryError {
    fn from(err: serde_json::Error) -> Self {
        RepositoryError::CorruptData(err.to_string())
    }
}

/// Result type alias
pub type RepositoryResult<T> = Result<T, RepositoryError>;
