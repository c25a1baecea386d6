//! Error types for edgegraph-core
//!
//! Provides unified error handling across the crate. All variants carry
//! enough context to identify which stage and which input triggered them.

use thiserror::Error;

/// Main error type for edge projection operations
#[derive(Debug, Error)]
pub enum ProjectError {
    /// A record is missing a field at a configured index.
    ///
    /// This signals a structural mismatch between the projection policy and
    /// the data, not a transient fault, so the build aborts fail-fast.
    #[error(
        "record {record_index}: field index {field_index} out of range \
         (record has {field_count} fields)"
    )]
    Schema {
        /// Ordinal position of the offending record (0-based)
        record_index: usize,
        /// The configured field index that could not be satisfied
        field_index: usize,
        /// How many fields the record actually had
        field_count: usize,
    },

    /// A configured weight field could not be parsed as a number
    #[error("record {record_index}: weight field {field_index} value '{value}' is not numeric")]
    WeightParse {
        record_index: usize,
        field_index: usize,
        value: String,
    },

    /// An operation that needs edge weights was asked about a graph with none
    #[error("{operation}: graph has no edges")]
    EmptyGraph { operation: &'static str },

    /// Invalid configuration, rejected before any record is processed
    #[error("configuration error: {0}")]
    Config(String),
}

impl ProjectError {
    /// Create a configuration error
    pub fn config(msg: impl Into<String>) -> Self {
        ProjectError::Config(msg.into())
    }

    /// Create an empty-graph error for the named operation
    pub fn empty_graph(operation: &'static str) -> Self {
        ProjectError::EmptyGraph { operation }
    }
}

/// Result type alias for edge projection operations
pub type Result<T> = std::result::Result<T, ProjectError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_schema_error_names_record_and_field() {
        let err = ProjectError::Schema {
            record_index: 41,
            field_index: 3,
            field_count: 2,
        };
        let msg = err.to_string();
        assert!(msg.contains("record 41"));
        assert!(msg.contains("field index 3"));
        assert!(msg.contains("2 fields"));
    }

    #[test]
    fn test_empty_graph_error_names_operation() {
        let err = ProjectError::empty_graph("weight_histogram");
        assert!(err.to_string().contains("weight_histogram"));
    }
}
