//! GFF3 Table Reader Library
//!
//! A Rust library for loading GFF3 genome annotation files into a typed,
//! column-oriented in-memory table.
//!
//! This library provides tools for:
//! - Scanning GFF3 files in two passes (schema discovery, then fill)
//! - Discovering attribute tags in file order and exposing them as columns
//! - Selecting and reordering the nine fixed GFF3 fields
//! - Filtering records by feature type
//! - Collecting `##` pragma lines verbatim
//! - Exporting parsed tables to Polars DataFrames and Parquet files

pub mod config;
pub mod constants;

// Core application modules
pub mod app {
    pub mod models;
    pub mod services {
        pub mod gff_parser;
    }
    pub mod adapters {
        pub mod dataframe;
        pub mod line_reader;
    }
}

// CLI modules
pub mod cli {
    pub mod args;
    pub mod commands;
}

// Re-export commonly used types
pub use app::adapters::line_reader::{BufLineReader, Line, LineReader};
pub use app::models::{Column, ColumnKind, ColumnValues, FixedField, Table};
pub use app::services::gff_parser::{
    ColumnSelection, FeatureTypeFilter, GffParser, ParseOptions, ParseResult, ParseStats,
    TagRegistry, fixed_column_names,
};
pub use config::ParserConfig;

/// Result type alias for the GFF3 table reader
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for GFF3 reading operations
///
/// Parse failures carry the 1-based line number of the offending line. They
/// abort the whole parse: no partially filled table is ever returned.
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// Record has a 9th tab (a would-be 10th field)
    #[error("reading GFF file: line {line} has more than {max} tabs")]
    TooManyTabs { line: usize, max: usize },

    /// Record has fewer tabs than the minimum accepted
    #[error("reading GFF file: line {line} has less than {min} tabs")]
    TooFewTabs { line: usize, min: usize },

    /// Line exceeds the reader's maximum line length
    #[error("reading GFF file: cannot read line {line}, line is too long")]
    LineTooLong { line: usize },

    /// Underlying reader failed mid-scan
    #[error("reading GFF file: read error while reading characters from line {line}")]
    Read {
        line: usize,
        #[source]
        source: std::io::Error,
    },

    /// Second pass saw a different number of rows than the first
    #[error(
        "reading GFF file: input changed between passes (expected {expected} rows, found {found})"
    )]
    ReplayMismatch { expected: usize, found: usize },

    /// I/O operation failed outside of line scanning
    #[error("I/O error: {message}")]
    Io {
        message: String,
        #[source]
        source: std::io::Error,
    },

    /// Configuration error
    #[error("Configuration error: {message}")]
    Configuration { message: String },

    /// Polars export or Parquet write error
    #[error("Polars error: {0}")]
    Polars(#[from] polars::error::PolarsError),
}

impl Error {
    /// Create an I/O error with context
    pub fn io(message: impl Into<String>, source: std::io::Error) -> Self {
        Self::Io {
            message: message.into(),
            source,
        }
    }

    /// Create a configuration error
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }

    /// Create a read error for the given line
    pub fn read(line: usize, source: std::io::Error) -> Self {
        Self::Read { line, source }
    }

    /// Line number of a fatal parse failure, if this error has one
    pub fn line(&self) -> Option<usize> {
        match self {
            Self::TooManyTabs { line, .. }
            | Self::TooFewTabs { line, .. }
            | Self::LineTooLong { line }
            | Self::Read { line, .. } => Some(*line),
            _ => None,
        }
    }

    /// Check if this error was raised while scanning the input
    pub fn is_parse_error(&self) -> bool {
        self.line().is_some() || matches!(self, Self::ReplayMismatch { .. })
    }
}
