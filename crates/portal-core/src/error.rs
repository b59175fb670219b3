//! Error types for the Campus Placement Portal

use thiserror::Error;

/// Main error type for portal operations
///
/// None of these ever reach the person using the portal. Components catch
/// them at their boundary, log, and carry on with a reduced experience.
#[derive(Error, Debug)]
pub enum PortalError {
    /// Database creation/opening error
    #[error("Database error: {0}")]
    Database(#[from] redb::DatabaseError),

    /// Transaction error
    #[error("Transaction error: {0}")]
    Transaction(#[from] redb::TransactionError),

    /// Table error
    #[error("Table error: {0}")]
    Table(#[from] redb::TableError),

    /// Storage operation error
    #[error("Storage operation error: {0}")]
    StorageOp(#[from] redb::StorageError),

    /// Commit error
    #[error("Commit error: {0}")]
    Commit(#[from] redb::CommitError),

    /// Persisted value could not be encoded or decoded
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// General I/O error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Opening an external address was refused by the host environment
    #[error("Could not open {url}: {reason}")]
    OpenBlocked { url: String, reason: String },

    /// The tracing subscriber could not be installed
    #[error("Logging setup failed: {0}")]
    Logging(String),
}

/// Result type alias using PortalError
pub type PortalResult<T> = Result<T, PortalError>;
