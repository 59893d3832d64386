//! Common error types for the booking site

use thiserror::Error;

/// Common result type for booking operations
pub type Result<T> = std::result::Result<T, Error>;

/// Common error types across the record store and query layer
#[derive(Error, Debug)]
pub enum Error {
    /// Database operation error (wraps sqlx::Error)
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// I/O operation error (wraps std::io::Error)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Genre list (de)serialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Configuration loading or validation error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Requested record not found
    #[error("Not found: {0}")]
    NotFound(String),

    /// Missing or unparseable form field
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Foreign key, unique or not-null constraint rejected a write
    #[error("Constraint violation: {0}")]
    Constraint(String),

    /// A show row whose venue or artist no longer resolves
    #[error("Show {show_id} references a missing {missing}")]
    MissingCounterpart { show_id: i64, missing: &'static str },
}

impl Error {
    /// Stable label for the failure kind, used as a structured log field
    pub fn kind(&self) -> &'static str {
        match self {
            Error::Database(_) => "database",
            Error::Io(_) => "io",
            Error::Serialization(_) => "serialization",
            Error::Config(_) => "config",
            Error::NotFound(_) => "not_found",
            Error::InvalidInput(_) => "invalid_input",
            Error::Constraint(_) => "constraint",
            Error::MissingCounterpart { .. } => "missing_counterpart",
        }
    }

    /// Classify a failed write: constraint rejections get their own variant so
    /// they stay distinguishable from connectivity faults in the logs.
    pub fn from_write(err: sqlx::Error) -> Self {
        if let sqlx::Error::Database(db_err) = &err {
            match db_err.kind() {
                sqlx::error::ErrorKind::ForeignKeyViolation
                | sqlx::error::ErrorKind::UniqueViolation
                | sqlx::error::ErrorKind::NotNullViolation
                | sqlx::error::ErrorKind::CheckViolation => {
                    return Error::Constraint(db_err.message().to_string());
                }
                _ => {}
            }
        }
        Error::Database(err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_labels() {
        assert_eq!(Error::NotFound("venue 1".into()).kind(), "not_found");
        assert_eq!(Error::Constraint("fk".into()).kind(), "constraint");
        assert_eq!(
            Error::MissingCounterpart { show_id: 3, missing: "artist" }.kind(),
            "missing_counterpart"
        );
    }

    #[test]
    fn test_missing_counterpart_message() {
        let err = Error::MissingCounterpart { show_id: 7, missing: "venue" };
        assert_eq!(err.to_string(), "Show 7 references a missing venue");
    }

    #[test]
    fn test_non_database_write_error_stays_database() {
        let err = Error::from_write(sqlx::Error::RowNotFound);
        assert_eq!(err.kind(), "database");
    }
}
