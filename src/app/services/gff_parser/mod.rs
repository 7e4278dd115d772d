//! Two-pass GFF3 parser
//!
//! Loads GFF3 annotation files into a typed column [`Table`]: the nine
//! fixed fields (optionally reordered or omitted) followed by one text
//! column per attribute tag.
//!
//! ## Architecture
//!
//! The parser is organized into logical components:
//! - [`parser`] - Two-pass orchestration (discovery, then fill)
//! - [`column_mapping`] - Validated selection and ordering of fixed columns
//! - [`record_parser`] - Line tokenizing, attribute splitting and cell loading
//! - [`field_parsers`] - Strict integer/real coercion with missing sentinels
//! - [`tag_registry`] - Ordered, duplicate-free attribute tag names
//! - [`filter`] - Feature-type row filter
//! - [`table_builder`] - Output schema and table allocation
//! - [`stats`] - Line classification statistics and result structures
//!
//! ## Usage
//!
//! ```rust
//! use std::io::Cursor;
//! use gff_table::{BufLineReader, GffParser, ParseOptions};
//!
//! # fn example() -> gff_table::Result<()> {
//! let gff = "##gff-version 3\nchr1\t.\tgene\t100\t200\t.\t+\t.\tID=g1;Name=Foo\n";
//! let mut reader = BufLineReader::new(Cursor::new(gff.as_bytes().to_vec()));
//!
//! let parser = GffParser::new(ParseOptions::new().with_feature_types(["gene"]));
//! let table = parser.parse(&mut reader)?;
//!
//! assert_eq!(table.nrow(), 1);
//! assert_eq!(table.tags(), vec!["ID", "Name"]);
//! # Ok(())
//! # }
//! # example().unwrap();
//! ```
//!
//! [`Table`]: crate::app::models::Table

pub mod column_mapping;
pub mod field_parsers;
pub mod filter;
pub mod parser;
pub mod record_parser;
pub mod stats;
pub mod table_builder;
pub mod tag_registry;

#[cfg(test)]
pub mod tests;

use crate::constants::{FIXED_COLUMN_NAMES, GFF_NCOL};

// Re-export main types for easy access
pub use column_mapping::ColumnSelection;
pub use filter::FeatureTypeFilter;
pub use parser::{GffParser, ParseOptions};
pub use stats::{ParseResult, ParseStats};
pub use tag_registry::TagRegistry;

/// Names of the nine fixed GFF3 columns, in file order
pub fn fixed_column_names() -> &'static [&'static str; GFF_NCOL] {
    &FIXED_COLUMN_NAMES
}
