//! Error types for the schema-mapping library.

use thiserror::Error;

/// Main error type for schema-mapping operations.
#[derive(Error, Debug)]
pub enum SchemaMapError {
    /// The session artifact is missing an expected entry, or the derived
    /// lookups disagree with the raw schema it was built from. A static
    /// data problem; retrying cannot fix it.
    #[error("Configuration error: {0}")]
    Config(String),

    /// The requested source table has no target counterpart: the
    /// conversion step dropped it. An expected condition that callers
    /// handle by skipping the table rather than aborting the run.
    #[error("Dropped table: {0}")]
    DroppedTable(String),

    /// A lookup key (table name) does not exist in an index.
    #[error("Not found: {0}")]
    NotFound(String),

    /// Connection acquisition failed at the pool boundary.
    #[error("Connection error: {message}\n  Context: {context}")]
    Connection { message: String, context: String },
}

impl SchemaMapError {
    /// Create a Config error.
    pub fn config(message: impl Into<String>) -> Self {
        SchemaMapError::Config(message.into())
    }

    /// Create a DroppedTable error.
    pub fn dropped_table(message: impl Into<String>) -> Self {
        SchemaMapError::DroppedTable(message.into())
    }

    /// Create a NotFound error.
    pub fn not_found(message: impl Into<String>) -> Self {
        SchemaMapError::NotFound(message.into())
    }

    /// Create a Connection error with context about where it occurred.
    pub fn connection(message: impl Into<String>, context: impl Into<String>) -> Self {
        SchemaMapError::Connection {
            message: message.into(),
            context: context.into(),
        }
    }

    /// Whether this error is the recoverable dropped-table condition.
    ///
    /// Pipelines branch on this to skip a table instead of failing the
    /// whole run.
    pub fn is_dropped_table(&self) -> bool {
        matches!(self, SchemaMapError::DroppedTable(_))
    }
}

/// Result type alias for schema-mapping operations.
pub type Result<T> = std::result::Result<T, SchemaMapError>;
