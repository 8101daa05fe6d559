//! Error types and utilities for tripgraph

use thiserror::Error;

/// Result type alias for tripgraph operations
pub type Result<T> = std::result::Result<T, TripGraphError>;

/// Main error type for tripgraph operations
#[derive(Error, Debug)]
pub enum TripGraphError {
    /// The trip data file is missing or unreadable
    #[error("Data file error: {message}")]
    DataFile {
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// I/O related errors
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Malformed CSV records
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// A required column is absent from the input header
    #[error("Schema error: required column '{column}' is missing")]
    Schema { column: String },

    /// A timestamp value does not match the fixed input format
    #[error("Timestamp parse error at data row {row}: '{value}' does not match format '{format}'")]
    Timestamp {
        row: usize,
        value: String,
        format: &'static str,
    },

    /// Validation errors for configuration or caller-supplied values
    #[error("Validation error: {message}")]
    Validation {
        message: String,
        field: Option<String>,
    },

    /// Configuration related errors
    #[error("Configuration error: {message}")]
    Config {
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// Chart generation and plotting errors
    #[error("Graph error: {message}")]
    Graph {
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },
}

impl TripGraphError {
    /// Create a new data file error
    pub fn data_file(msg: impl Into<String>) -> Self {
        Self::DataFile {
            message: msg.into(),
            source: None,
        }
    }

    /// Create a new data file error with source
    pub fn data_file_with_source(
        msg: impl Into<String>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        Self::DataFile {
            message: msg.into(),
            source: Some(Box::new(source)),
        }
    }

    /// Create a new schema error for a missing column
    pub fn schema(column: impl Into<String>) -> Self {
        Self::Schema {
            column: column.into(),
        }
    }

    /// Create a new timestamp parse error
    pub fn timestamp(row: usize, value: impl Into<String>, format: &'static str) -> Self {
        Self::Timestamp {
            row,
            value: value.into(),
            format,
        }
    }

    /// Create a new validation error
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation {
            message: msg.into(),
            field: None,
        }
    }

    /// Create a new validation error with field name
    pub fn validation_field(msg: impl Into<String>, field: impl Into<String>) -> Self {
        Self::Validation {
            message: msg.into(),
            field: Some(field.into()),
        }
    }

    /// Create a new configuration error
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config {
            message: msg.into(),
            source: None,
        }
    }

    /// Create a new configuration error with source
    pub fn config_with_source(
        msg: impl Into<String>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        Self::Config {
            message: msg.into(),
            source: Some(Box::new(source)),
        }
    }

    /// Create a new graph error
    pub fn graph(msg: impl Into<String>) -> Self {
        Self::Graph {
            message: msg.into(),
            source: None,
        }
    }

    /// Create a new graph error with source
    pub fn graph_with_source(
        msg: impl Into<String>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        Self::Graph {
            message: msg.into(),
            source: Some(Box::new(source)),
        }
    }
}

#[cfg(feature = "plotters")]
/// Convert from plotters drawing errors to TripGraphError
impl<T> From<plotters::drawing::DrawingAreaErrorKind<T>> for TripGraphError
where
    T: std::error::Error + Send + Sync + 'static,
{
    fn from(err: plotters::drawing::DrawingAreaErrorKind<T>) -> Self {
        Self::graph_with_source("Chart rendering failed", err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::{error::Error, io};

    #[test]
    fn test_error_creation() {
        let data_error = TripGraphError::data_file("no such file");
        assert!(data_error.to_string().contains("Data file error"));
        assert!(data_error.to_string().contains("no such file"));

        let schema_error = TripGraphError::schema("Date/Time");
        assert!(schema_error.to_string().contains("Schema error"));
        assert!(schema_error.to_string().contains("Date/Time"));

        let validation_error = TripGraphError::validation_field("east must exceed west", "east");
        assert!(validation_error.to_string().contains("Validation error"));
        assert!(validation_error.to_string().contains("east must exceed west"));

        let graph_error = TripGraphError::graph("backend unavailable");
        assert!(graph_error.to_string().contains("Graph error"));
    }

    #[test]
    fn test_timestamp_error_carries_row_and_value() {
        let error = TripGraphError::timestamp(17, "not-a-date", "%m/%d/%Y %H:%M:%S");
        let display = error.to_string();
        assert!(display.contains("row 17"));
        assert!(display.contains("not-a-date"));
        assert!(display.contains("%m/%d/%Y %H:%M:%S"));
    }

    #[test]
    fn test_error_with_source() {
        let io_error = io::Error::new(io::ErrorKind::NotFound, "File not found");
        let wrapped = TripGraphError::data_file_with_source("failed to open trips.csv", io_error);

        assert!(wrapped.to_string().contains("failed to open trips.csv"));
        assert!(wrapped.source().is_some());
    }

    #[test]
    fn test_io_error_conversion() {
        let io_error = io::Error::new(io::ErrorKind::PermissionDenied, "denied");
        let error: TripGraphError = io_error.into();

        assert!(error.to_string().contains("I/O error"));
        assert!(error.source().is_some());
    }

    #[test]
    fn test_result_type_alias() {
        fn returns_result() -> Result<u32> {
            Ok(42)
        }

        fn returns_error() -> Result<u32> {
            Err(TripGraphError::validation("bad bounds"))
        }

        assert!(returns_result().is_ok());
        assert!(returns_error().is_err());
    }
}
