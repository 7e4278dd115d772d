//! Core two-pass GFF3 parser implementation
//!
//! Pass 1 walks the whole input to count rows, discover attribute tags and
//! collect pragmas without allocating per-row storage. Pass 2 rewinds the
//! reader, replays the same line classification and fills a table sized by
//! pass 1. Both passes share [`scan_records`], so row order and row count
//! are identical between them.

use std::collections::HashSet;
use std::path::Path;
use tracing::{debug, info, trace};

use super::column_mapping::ColumnSelection;
use super::field_parsers::decode_text;
use super::filter::FeatureTypeFilter;
use super::record_parser::{
    RecordFields, discover_tags, load_fixed_field, load_tag_values, tokenize_line,
};
use super::stats::{ParseResult, ParseStats};
use super::table_builder::allocate_table;
use super::tag_registry::TagRegistry;
use crate::app::adapters::line_reader::{BufLineReader, LineReader};
use crate::app::models::{FixedField, Table};
use crate::constants::{COMMENT_MARKER, FASTA_MARKER, PRAGMA_PREFIX};
use crate::{Error, Result};

/// What to load from a GFF3 file
#[derive(Debug, Clone, Default)]
pub struct ParseOptions {
    /// Fixed columns to materialize and their order
    pub selection: ColumnSelection,

    /// Tags to expose as columns; `None` discovers every tag in the file
    pub tags: Option<Vec<String>>,

    /// Feature types to keep
    pub feature_types: FeatureTypeFilter,
}

impl ParseOptions {
    /// All fixed columns, every discovered tag, no filtering
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_selection(mut self, selection: ColumnSelection) -> Self {
        self.selection = selection;
        self
    }

    pub fn with_tags<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.tags = Some(tags.into_iter().map(Into::into).collect());
        self
    }

    pub fn with_feature_types<I, S>(mut self, types: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.feature_types = FeatureTypeFilter::only(types);
        self
    }

    /// Reject explicit tag lists that name a tag twice
    pub fn validate(&self) -> Result<()> {
        if let Some(tags) = &self.tags {
            let mut seen = HashSet::new();
            for tag in tags {
                if !seen.insert(tag.as_str()) {
                    return Err(Error::configuration(format!(
                        "Tag '{}' is requested more than once",
                        tag
                    )));
                }
            }
        }
        Ok(())
    }
}

/// Classification of a line by its leading bytes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineKind {
    Blank,
    Comment,
    Pragma,
    FastaStart,
    Record,
}

/// Classify a raw line, terminator included
pub fn classify_line(line: &[u8]) -> LineKind {
    match line {
        [] | [b'\n', ..] | [b'\r', b'\n', ..] => LineKind::Blank,
        _ if line.starts_with(PRAGMA_PREFIX) => LineKind::Pragma,
        [c, ..] if *c == COMMENT_MARKER => LineKind::Comment,
        [c, ..] if *c == FASTA_MARKER => LineKind::FastaStart,
        _ => LineKind::Record,
    }
}

/// Walk every line of `reader`, calling `on_row` for each kept record
///
/// Pragmas are appended to `pragmas` when given. Returns the number of rows
/// passed to `on_row`. Any tokenizer or reader failure aborts the scan.
pub fn scan_records<L, F>(
    reader: &mut L,
    filter: &FeatureTypeFilter,
    stats: &mut ParseStats,
    mut pragmas: Option<&mut Vec<String>>,
    mut on_row: F,
) -> Result<usize>
where
    L: LineReader + ?Sized,
    F: FnMut(&RecordFields<'_>, usize) -> Result<()>,
{
    let mut row_idx = 0;
    let mut lineno = 1;

    loop {
        let line = match reader.read_line() {
            Ok(Some(line)) => line,
            Ok(None) => break,
            Err(e) => return Err(Error::read(lineno, e)),
        };
        if !line.is_complete() {
            return Err(Error::LineTooLong { line: lineno });
        }
        let bytes = line.bytes();
        stats.lines_read += 1;

        match classify_line(bytes) {
            LineKind::Blank => stats.blank_lines += 1,
            LineKind::Comment => stats.comment_lines += 1,
            LineKind::Pragma => {
                stats.pragma_lines += 1;
                if let Some(pragmas) = pragmas.as_deref_mut() {
                    pragmas.push(decode_text(bytes));
                }
            }
            LineKind::FastaStart => {
                trace!("FASTA block at line {}, stopping", lineno);
                stats.stopped_at_fasta = true;
                break;
            }
            LineKind::Record => {
                let fields = tokenize_line(bytes, lineno)?;
                stats.records += 1;
                if filter.includes(fields.feature_type()) {
                    on_row(&fields, row_idx)?;
                    row_idx += 1;
                } else {
                    stats.rows_excluded += 1;
                }
            }
        }
        lineno += 1;
    }

    stats.rows = row_idx;
    Ok(row_idx)
}

/// Two-pass GFF3 parser
///
/// Parsing is all-or-nothing: a fatal condition in either pass discards all
/// work and reports the first failure with its line number.
#[derive(Debug, Clone, Default)]
pub struct GffParser {
    options: ParseOptions,
}

impl GffParser {
    pub fn new(options: ParseOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &ParseOptions {
        &self.options
    }

    /// Open and parse a GFF3 file
    pub fn parse_file(&self, path: &Path) -> Result<ParseResult> {
        info!("Parsing GFF3 file: {}", path.display());
        let mut reader = BufLineReader::open(path)?;
        self.parse_with_stats(&mut reader)
    }

    /// Parse `reader` into a table
    pub fn parse<L: LineReader + ?Sized>(&self, reader: &mut L) -> Result<Table> {
        self.parse_with_stats(reader).map(|result| result.table)
    }

    /// Parse `reader` into a table, keeping the discovery-pass statistics
    pub fn parse_with_stats<L: LineReader + ?Sized>(&self, reader: &mut L) -> Result<ParseResult> {
        self.options.validate()?;

        let (nrow, tag_keys, pragmas, stats) = self.discover(reader)?;
        let mut table = allocate_table(&self.options.selection, &tag_keys, nrow, pragmas);
        self.fill(reader, &tag_keys, &mut table)?;

        info!(
            "Parsed {} rows into {} fixed and {} tag columns ({} pragmas)",
            table.nrow(),
            table.fixed_column_count(),
            table.tag_column_count(),
            table.pragmas().len()
        );

        Ok(ParseResult { table, stats })
    }

    /// Pass 1: count rows, collect pragmas, discover tags when none were given
    fn discover<L: LineReader + ?Sized>(
        &self,
        reader: &mut L,
    ) -> Result<(usize, Vec<Vec<u8>>, Vec<String>, ParseStats)> {
        let mut stats = ParseStats::new();
        let mut pragmas = Vec::new();
        let mut registry = self.options.tags.is_none().then(TagRegistry::new);

        reader
            .rewind()
            .map_err(|e| Error::io("Failed to rewind input before discovery pass", e))?;
        let nrow = scan_records(
            reader,
            &self.options.feature_types,
            &mut stats,
            Some(&mut pragmas),
            |fields, _row| {
                if let (Some(registry), Some(attributes)) = (registry.as_mut(), fields.attributes())
                {
                    discover_tags(attributes, registry);
                }
                Ok(())
            },
        )?;

        let tag_keys = match (&self.options.tags, registry) {
            (Some(tags), _) => tags.iter().map(|t| t.as_bytes().to_vec()).collect(),
            (None, Some(registry)) => registry.into_keys(),
            (None, None) => Vec::new(),
        };
        debug!("Discovery pass: {}", stats.summary());
        debug!(
            "Tag columns: {:?}",
            tag_keys
                .iter()
                .map(|t| String::from_utf8_lossy(t))
                .collect::<Vec<_>>()
        );

        Ok((nrow, tag_keys, pragmas, stats))
    }

    /// Pass 2: replay the input and fill every selected cell
    ///
    /// An absent attributes field (7-tab record) loads as empty text.
    fn fill<L: LineReader + ?Sized>(
        &self,
        reader: &mut L,
        tag_keys: &[Vec<u8>],
        table: &mut Table,
    ) -> Result<()> {
        let selection = &self.options.selection;
        let expected = table.nrow();
        let has_tags = table.tag_column_count() > 0;
        let mut stats = ParseStats::new();

        reader
            .rewind()
            .map_err(|e| Error::io("Failed to rewind input before fill pass", e))?;
        let filled = scan_records(
            reader,
            &self.options.feature_types,
            &mut stats,
            None,
            |fields, row| {
                if row >= expected {
                    return Err(Error::ReplayMismatch {
                        expected,
                        found: row + 1,
                    });
                }
                for field in FixedField::ALL {
                    if let Some(position) = selection.target(field) {
                        let data = fields.get(field).unwrap_or_default();
                        load_fixed_field(table.column_mut(position), field, row, data);
                    }
                }
                if has_tags {
                    if let Some(attributes) = fields.attributes() {
                        load_tag_values(attributes, tag_keys, table.tag_columns_mut(), row);
                    }
                }
                Ok(())
            },
        )?;

        if filled != expected {
            return Err(Error::ReplayMismatch {
                expected,
                found: filled,
            });
        }
        debug!("Fill pass: {} rows loaded", filled);
        Ok(())
    }
}
