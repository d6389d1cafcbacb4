// ==========================================
// Kashi Kravings Dashboard - Import Errors
// ==========================================
// Errors raised by the record builders. Note the deliberate scoping:
// a bad *cell* (unparsable number or date) is never an error here,
// it is coerced to a safe default by the field parsers. Only
// structural problems with a whole upload surface as ImportError.
// ==========================================

use thiserror::Error;

/// Import module error type
#[derive(Error, Debug)]
pub enum ImportError {
    // ===== Invoice CSV structure =====
    #[error("could not find \"Invoice No\" header row in CSV")]
    HeaderNotFound,

    // ===== Generic =====
    #[error("internal import error: {0}")]
    InternalError(String),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Result type alias
pub type ImportResult<T> = Result<T, ImportError>;
