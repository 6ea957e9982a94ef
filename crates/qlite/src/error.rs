//! Error types for qlite

use thiserror::Error;

/// Result type alias for query building operations
pub type QueryResult<T> = Result<T, QueryError>;

/// Error types for query rendering
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum QueryError {
    /// Rendering was requested before any statement was configured
    #[error("no statement configured: call select() before rendering")]
    MissingStatement,
}
