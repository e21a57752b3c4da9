//! Error types for Tabulon

use thiserror::Error;

/// Core error type for Tabulon operations
///
/// Engine transitions themselves never fail; errors can only arise from a
/// construction-contract violation or from row ingestion.
#[derive(Error, Debug)]
pub enum TableError {
    #[error("Duplicate column key: {0}")]
    DuplicateColumnKey(String),

    #[error("Invalid page size: {0}")]
    InvalidPageSize(usize),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Result type alias for Tabulon operations
pub type Result<T> = std::result::Result<T, TableError>;
