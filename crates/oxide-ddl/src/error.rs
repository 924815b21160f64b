//! Error types for DDL generation.

/// Errors raised while declaring or rendering a table.
///
/// Every error is reported by the call that caused it; a builder that
/// returned an error from a setter is consumed and must be rebuilt.
#[derive(Debug, thiserror::Error)]
pub enum DdlError {
    /// A required argument was missing or empty.
    #[error("{0} can't be empty")]
    NullArgument(&'static str),

    /// A table, constraint or column name breaks the identifier rules.
    #[error("{message}")]
    InvalidIdentifier {
        /// The rejected value, as supplied.
        value: String,
        /// Which rule was violated.
        message: String,
    },

    /// `build()` was called before any column was added.
    #[error("at least one column must be specified")]
    EmptyTable,

    /// The `AUTO_INCREMENT` flag was put on a column that cannot carry it.
    #[error("{0}")]
    InvalidAutoIncrement(&'static str),

    /// A second primary key column was flagged `AUTO_INCREMENT`.
    #[error("There can't be more than one auto increment column")]
    DuplicateAutoIncrement,

    /// A dialect identifier outside the supported set.
    #[error("Unsupported dialect id {0}")]
    UnsupportedDialect(String),

    /// Internal inconsistency in builder state.
    #[error("Illegal state: {0}")]
    IllegalState(String),

    /// A table definition document could not be read.
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Result type for DDL operations.
pub type Result<T> = std::result::Result<T, DdlError>;
