//! Parsing statistics and result structures for GFF3 processing
//!
//! Statistics describe how the lines of the input were classified during
//! the discovery pass.

use crate::app::models::Table;

/// Parsed table together with its discovery-pass statistics
#[derive(Debug, Clone)]
pub struct ParseResult {
    /// Fully populated table
    pub table: Table,

    /// Line classification counts
    pub stats: ParseStats,
}

/// Line classification counts for one pass over the input
#[derive(Debug, Clone, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct ParseStats {
    /// Lines read before scanning ended
    pub lines_read: usize,

    /// Empty lines (terminator only)
    pub blank_lines: usize,

    /// Single-`#` human-readable comments
    pub comment_lines: usize,

    /// `##` pragma lines
    pub pragma_lines: usize,

    /// Data records tokenized, whether kept or not
    pub records: usize,

    /// Records dropped by the feature-type filter
    pub rows_excluded: usize,

    /// Records kept as table rows
    pub rows: usize,

    /// Scanning ended at a `>` FASTA header
    pub stopped_at_fasta: bool,
}

impl ParseStats {
    pub fn new() -> Self {
        Self::default()
    }

    /// Percentage of tokenized records kept as rows
    pub fn inclusion_rate(&self) -> f64 {
        if self.records == 0 {
            0.0
        } else {
            (self.rows as f64 / self.records as f64) * 100.0
        }
    }

    /// One-line summary for logging
    pub fn summary(&self) -> String {
        format!(
            "{} lines: {} records ({} kept, {} excluded), {} pragmas, {} comments, {} blank{}",
            self.lines_read,
            self.records,
            self.rows,
            self.rows_excluded,
            self.pragma_lines,
            self.comment_lines,
            self.blank_lines,
            if self.stopped_at_fasta {
                ", stopped at FASTA"
            } else {
                ""
            }
        )
    }
}
