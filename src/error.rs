//! Error taxonomy for the idea core
//!
//! Every failure is either rejected with a named condition or recovered
//! to a safe default. Nothing here is fatal to the process.

use thiserror::Error;

use crate::catalog::Category;

/// Errors surfaced by core operations
#[derive(Debug, Error)]
pub enum SparkError {
    #[error("unknown category: {0} (expected art, startup or design)")]
    UnknownCategory(String),

    #[error("Idea already in favorites!")]
    AlreadyFavorited,

    #[error("no ideas available for category {0}")]
    EmptyCategory(Category),

    /// Malformed or unreadable slot. Recovered by the adapter, never returned from `load`.
    #[error("failed to read `{key}` from storage: {reason}")]
    PersistenceRead { key: String, reason: String },

    #[error("failed to write `{key}` to storage")]
    PersistenceWrite {
        key: String,
        #[source]
        source: StorageError,
    },
}

/// Errors from a key-value backend
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("storage io: {0}")]
    Io(#[from] std::io::Error),

    #[error("storage unavailable: {0}")]
    Unavailable(String),
}

pub type Result<T, E = SparkError> = std::result::Result<T, E>;
