//! Command-line argument definitions for the GFF3 table reader
//!
//! This module defines the CLI interface using the clap derive API.

use crate::config::ParserConfig;
use crate::constants::DEFAULT_MAX_LINE_LENGTH;
use crate::{Error, Result};
use clap::Parser;
use std::path::PathBuf;

/// CLI arguments for the GFF3 table reader
///
/// Loads a GFF3 annotation file into a typed table, reports what was found
/// and optionally writes the table to Parquet.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "gff-table",
    version,
    about = "Load GFF3 annotation files into a typed column table",
    long_about = "Reads a GFF3 file in two passes: the first discovers the attribute tags, \
                  pragmas and row count, the second fills a table with the nine fixed GFF3 \
                  columns followed by one column per attribute tag. The table can be written \
                  to Parquet for analysis with Polars, pandas or Arrow-based tools."
)]
pub struct Args {
    /// GFF3 file to read
    #[arg(
        value_name = "FILE",
        required_unless_present = "list_columns",
        help = "GFF3 file to read"
    )]
    pub input: Option<PathBuf>,

    /// Fixed columns to load, in output order (comma-separated)
    ///
    /// Defaults to all nine: seqid, source, type, start, end, score,
    /// strand, phase, attributes.
    #[arg(
        short = 'c',
        long = "columns",
        value_name = "LIST",
        value_delimiter = ',',
        help = "Fixed columns to load, in output order"
    )]
    pub columns: Option<Vec<String>>,

    /// Attribute tags to load as columns (comma-separated)
    ///
    /// If not specified, every tag found in the file becomes a column,
    /// in the order tags are first encountered.
    #[arg(
        short = 't',
        long = "tags",
        value_name = "LIST",
        value_delimiter = ',',
        conflicts_with = "no_tags",
        help = "Attribute tags to load as columns"
    )]
    pub tags: Option<Vec<String>>,

    /// Do not create any attribute tag column
    #[arg(long = "no-tags", help = "Do not create any attribute tag column")]
    pub no_tags: bool,

    /// Only load records of these feature types (comma-separated)
    #[arg(
        short = 'f',
        long = "feature-types",
        value_name = "LIST",
        value_delimiter = ',',
        help = "Only load records of these feature types"
    )]
    pub feature_types: Option<Vec<String>>,

    /// Maximum accepted line length in bytes
    #[arg(
        long = "max-line-length",
        value_name = "BYTES",
        default_value_t = DEFAULT_MAX_LINE_LENGTH,
        help = "Maximum accepted line length in bytes"
    )]
    pub max_line_length: usize,

    /// Write the parsed table to this Parquet file
    #[arg(
        short = 'o',
        long = "output",
        value_name = "PATH",
        help = "Write the parsed table to this Parquet file"
    )]
    pub output_path: Option<PathBuf>,

    /// Print collected pragma lines
    #[arg(long = "pragmas", help = "Print collected pragma lines")]
    pub show_pragmas: bool,

    /// Print the fixed GFF3 column names and exit
    #[arg(long = "list-columns", help = "Print the fixed GFF3 column names and exit")]
    pub list_columns: bool,

    /// Logging verbosity level
    #[arg(
        short = 'v',
        long = "verbose",
        action = clap::ArgAction::Count,
        help = "Increase logging verbosity (-v: info, -vv: debug, -vvv: trace)"
    )]
    pub verbose: u8,

    /// Suppress output (quiet mode)
    ///
    /// Only show errors. Overrides verbose settings.
    #[arg(
        short = 'q',
        long = "quiet",
        conflicts_with = "verbose",
        help = "Suppress all output except errors"
    )]
    pub quiet: bool,
}

impl Args {
    /// Validate the arguments for consistency
    pub fn validate(&self) -> Result<()> {
        if let Some(input) = &self.input {
            if !input.exists() {
                return Err(Error::configuration(format!(
                    "Input file does not exist: {}",
                    input.display()
                )));
            }
            if !input.is_file() {
                return Err(Error::configuration(format!(
                    "Input path is not a file: {}",
                    input.display()
                )));
            }
        }

        if let Some(output) = &self.output_path {
            if let Some(parent) = output.parent() {
                if !parent.as_os_str().is_empty() && !parent.exists() {
                    return Err(Error::configuration(format!(
                        "Output directory does not exist: {}",
                        parent.display()
                    )));
                }
            }
        }

        Ok(())
    }

    /// Build the parser configuration from the arguments
    pub fn to_config(&self) -> ParserConfig {
        let defaults = ParserConfig::default();
        ParserConfig {
            columns: self.columns.clone().unwrap_or(defaults.columns),
            tags: if self.no_tags {
                Some(Vec::new())
            } else {
                self.tags.clone()
            },
            feature_types: self.feature_types.clone(),
            max_line_length: self.max_line_length,
        }
    }

    /// Get the log level based on verbosity settings
    pub fn get_log_level(&self) -> &'static str {
        if self.quiet {
            "error"
        } else {
            match self.verbose {
                0 => "warn",
                1 => "info",
                2 => "debug",
                _ => "trace",
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_list_arguments() {
        let args = Args::try_parse_from([
            "gff-table",
            "genes.gff3",
            "--columns",
            "seqid,type,start",
            "--tags",
            "ID,Name",
            "-f",
            "gene,mRNA",
        ])
        .unwrap();

        assert_eq!(args.input, Some(PathBuf::from("genes.gff3")));
        let config = args.to_config();
        assert_eq!(config.columns, vec!["seqid", "type", "start"]);
        assert_eq!(config.tags, Some(vec!["ID".to_string(), "Name".to_string()]));
        assert_eq!(
            config.feature_types,
            Some(vec!["gene".to_string(), "mRNA".to_string()])
        );
    }

    #[test]
    fn test_defaults() {
        let args = Args::try_parse_from(["gff-table", "a.gff3"]).unwrap();
        let config = args.to_config();

        assert_eq!(config, ParserConfig::default());
        assert_eq!(args.get_log_level(), "warn");
    }

    #[test]
    fn test_no_tags_and_log_levels() {
        let args = Args::try_parse_from(["gff-table", "a.gff3", "--no-tags", "-vv"]).unwrap();
        assert_eq!(args.to_config().tags, Some(Vec::new()));
        assert_eq!(args.get_log_level(), "debug");

        let args = Args::try_parse_from(["gff-table", "a.gff3", "-q"]).unwrap();
        assert_eq!(args.get_log_level(), "error");

        assert!(Args::try_parse_from(["gff-table", "a.gff3", "-q", "-v"]).is_err());
        assert!(Args::try_parse_from(["gff-table", "a.gff3", "--no-tags", "--tags", "ID"]).is_err());
    }

    #[test]
    fn test_list_columns_without_input() {
        let args = Args::try_parse_from(["gff-table", "--list-columns"]).unwrap();
        assert!(args.list_columns);
        assert!(args.input.is_none());

        assert!(Args::try_parse_from(["gff-table"]).is_err());
    }

    #[test]
    fn test_validate_missing_input() {
        let args = Args::try_parse_from(["gff-table", "/nonexistent/file.gff3"]).unwrap();
        assert!(matches!(args.validate(), Err(Error::Configuration { .. })));
    }
}
