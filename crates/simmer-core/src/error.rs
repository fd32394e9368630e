//! Error types for the scheduling library.

use std::path::PathBuf;

use thiserror::Error;

/// Error type for every fallible scheduling operation.
#[derive(Error, Debug)]
pub enum ScheduleError {
    /// A step failed validation and the whole plan was rejected
    #[error("Invalid input for field '{field}': {reason}")]
    InvalidInput { field: String, reason: String },
    /// Two steps share the same id
    #[error("Step with ID {id} appears more than once")]
    DuplicateStep { id: u64 },
    /// The dependency graph has no topological order
    #[error("Circular dependency detected between steps {}", format_ids(.ids))]
    CyclicDependency { ids: Vec<u64> },
    /// File system operation errors
    #[error("File system error at path '{path}': {source}")]
    FileSystem {
        path: PathBuf,
        source: std::io::Error,
    },
    /// Serialization/deserialization errors
    #[error("Serialization error: {source}")]
    Serialization {
        #[from]
        source: serde_json::Error,
    },
    /// Configuration errors
    #[error("Configuration error: {message}")]
    Configuration { message: String },
}

fn format_ids(ids: &[u64]) -> String {
    ids.iter()
        .map(u64::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

/// Builder for creating input validation errors.
pub struct InvalidInputBuilder {
    field: String,
}

impl InvalidInputBuilder {
    /// Create a new invalid input error builder for a field.
    pub fn new(field: impl Into<String>) -> Self {
        Self {
            field: field.into(),
        }
    }

    /// Build the error with the given reason.
    pub fn with_reason(self, reason: impl Into<String>) -> ScheduleError {
        ScheduleError::InvalidInput {
            field: self.field,
            reason: reason.into(),
        }
    }
}

impl ScheduleError {
    /// Creates a builder for input validation errors.
    pub fn invalid_input(field: impl Into<String>) -> InvalidInputBuilder {
        InvalidInputBuilder::new(field)
    }

    /// Whether the error was caused by the submitted plan rather than by the
    /// environment (files, configuration).
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            ScheduleError::InvalidInput { .. }
                | ScheduleError::DuplicateStep { .. }
                | ScheduleError::CyclicDependency { .. }
        )
    }
}

/// Result type alias for scheduling operations
pub type Result<T> = std::result::Result<T, ScheduleError>;
