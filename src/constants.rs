//! Application constants for the GFF3 table reader
//!
//! Fixed column layout, line classification markers and reader limits
//! shared by the parser, the configuration layer and the CLI.

use crate::app::models::ColumnKind;

// =============================================================================
// Fixed GFF3 Columns
// =============================================================================

/// Number of tab-separated fields in a GFF3 record
pub const GFF_NCOL: usize = 9;

/// Names of the nine fixed GFF3 fields, in file order
pub const FIXED_COLUMN_NAMES: [&str; GFF_NCOL] = [
    "seqid",
    "source",
    "type",
    "start",
    "end",
    "score",
    "strand",
    "phase",
    "attributes",
];

/// Value kind of each fixed field, aligned with [`FIXED_COLUMN_NAMES`]
pub const FIXED_COLUMN_KINDS: [ColumnKind; GFF_NCOL] = [
    ColumnKind::Text,    // seqid
    ColumnKind::Text,    // source
    ColumnKind::Text,    // type
    ColumnKind::Integer, // start
    ColumnKind::Integer, // end
    ColumnKind::Real,    // score
    ColumnKind::Text,    // strand
    ColumnKind::Integer, // phase
    ColumnKind::Text,    // attributes
];

/// A record with more tabs than this is malformed
pub const MAX_TABS: usize = GFF_NCOL - 1;

/// A record with fewer tabs than this is malformed (attributes may be absent)
pub const MIN_TABS: usize = GFF_NCOL - 2;

// =============================================================================
// Line Classification
// =============================================================================

/// First byte of comment and pragma lines
pub const COMMENT_MARKER: u8 = b'#';

/// Lines starting with this prefix are collected verbatim as pragmas
pub const PRAGMA_PREFIX: &[u8] = b"##";

/// First byte of a FASTA header; scanning stops at the first one
pub const FASTA_MARKER: u8 = b'>';

// =============================================================================
// Field Values
// =============================================================================

/// Sole content of a text field that denotes a missing value
pub const MISSING_FIELD: &[u8] = b".";

/// Strand value stored for unknown or unstranded features
pub const UNKNOWN_STRAND: &str = "*";

/// Separator between tag=value pairs in the attributes column
pub const ATTRIBUTE_SEPARATOR: u8 = b';';

/// Separator between a tag and its value
pub const TAG_VALUE_SEPARATOR: u8 = b'=';

// =============================================================================
// Reader Limits
// =============================================================================

/// Default maximum line length in bytes, line terminator included
pub const DEFAULT_MAX_LINE_LENGTH: usize = 20_001;
