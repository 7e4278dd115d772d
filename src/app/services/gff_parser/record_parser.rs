//! Individual GFF3 record processing
//!
//! Splits a raw line into its tab-separated fields, splits the attributes
//! field into `tag=value` pairs, and loads coerced values into table cells.

use super::field_parsers::{decode_text, is_missing_text, parse_integer, parse_real};
use super::tag_registry::TagRegistry;
use crate::app::models::{Column, ColumnValues, FixedField};
use crate::constants::{
    ATTRIBUTE_SEPARATOR, GFF_NCOL, MAX_TABS, MIN_TABS, TAG_VALUE_SEPARATOR, UNKNOWN_STRAND,
};
use crate::{Error, Result};

/// Fields of one tokenized record, borrowed from the line buffer
///
/// Holds 8 or 9 fields: a record whose attributes column is absent
/// entirely is accepted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RecordFields<'a> {
    fields: [&'a [u8]; GFF_NCOL],
    count: usize,
}

impl<'a> RecordFields<'a> {
    /// Raw content of `field`, `None` if the record stops before it
    pub fn get(&self, field: FixedField) -> Option<&'a [u8]> {
        let index = field.index();
        (index < self.count).then(|| self.fields[index])
    }

    /// Content of the `type` field
    pub fn feature_type(&self) -> &'a [u8] {
        self.fields[FixedField::Type.index()]
    }

    /// Content of the attributes field, if present
    pub fn attributes(&self) -> Option<&'a [u8]> {
        self.get(FixedField::Attributes)
    }

    /// Number of fields found on the line
    pub fn len(&self) -> usize {
        self.count
    }

    pub fn is_empty(&self) -> bool {
        self.count == 0
    }
}

/// Remove a trailing `\n` or `\r\n`
pub fn strip_line_ending(data: &[u8]) -> &[u8] {
    let data = data.strip_suffix(b"\n").unwrap_or(data);
    data.strip_suffix(b"\r").unwrap_or(data)
}

/// Split `line` on tabs into the fixed GFF3 fields
///
/// A 9th tab is fatal, as is finishing with fewer than 7 tabs. The line
/// terminator is stripped from the last field only.
pub fn tokenize_line(line: &[u8], lineno: usize) -> Result<RecordFields<'_>> {
    let mut fields: [&[u8]; GFF_NCOL] = [&[]; GFF_NCOL];
    let mut col_idx = 0;
    let mut start = 0;

    for (i, &c) in line.iter().enumerate() {
        if c != b'\t' {
            continue;
        }
        if col_idx >= MAX_TABS {
            return Err(Error::TooManyTabs {
                line: lineno,
                max: MAX_TABS,
            });
        }
        fields[col_idx] = &line[start..i];
        col_idx += 1;
        start = i + 1;
    }

    if col_idx < MIN_TABS {
        return Err(Error::TooFewTabs {
            line: lineno,
            min: MIN_TABS,
        });
    }
    fields[col_idx] = strip_line_ending(&line[start..]);

    Ok(RecordFields {
        fields,
        count: col_idx + 1,
    })
}

/// Iterate over the `tag=value` pairs of an attributes field
///
/// The tag is everything before the first `=`, the value everything after
/// it (possibly empty). Spans without `=` are skipped.
pub fn tag_values(attributes: &[u8]) -> impl Iterator<Item = (&[u8], &[u8])> {
    attributes
        .split(|&c| c == ATTRIBUTE_SEPARATOR)
        .filter_map(|span| {
            let eq = span.iter().position(|&c| c == TAG_VALUE_SEPARATOR)?;
            Some((&span[..eq], &span[eq + 1..]))
        })
}

/// Register every tag of an attributes field
pub fn discover_tags(attributes: &[u8], registry: &mut TagRegistry) {
    for (tag, _) in tag_values(attributes) {
        registry.insert_unique(tag);
    }
}

/// Store each tag's value in its tag column at `row`
///
/// `tag_keys` holds the raw tag bytes of each column in `tag_columns`, so
/// tags that are not valid UTF-8 still reach their column. Keys are searched
/// from the last one backwards. Tags without a column are dropped.
pub fn load_tag_values(
    attributes: &[u8],
    tag_keys: &[Vec<u8>],
    tag_columns: &mut [Column],
    row: usize,
) {
    for (tag, value) in tag_values(attributes) {
        let Some(index) = tag_keys.iter().rposition(|key| key.as_slice() == tag) else {
            continue;
        };
        if let ColumnValues::Text(values) = tag_columns[index].values_mut() {
            values[row] = Some(decode_text(value));
        }
    }
}

/// Normalize a fixed text field
///
/// On the strand field a sole `.` or `?` becomes `*`; on any other text field
/// a sole `.` is missing.
pub fn coerce_text(field: FixedField, data: &[u8]) -> Option<String> {
    if field == FixedField::Strand && (data == b"." || data == b"?") {
        return Some(UNKNOWN_STRAND.to_string());
    }
    if is_missing_text(data) {
        return None;
    }
    Some(decode_text(data))
}

/// Coerce `data` by the column's kind and store it at `row`
pub fn load_fixed_field(column: &mut Column, field: FixedField, row: usize, data: &[u8]) {
    match column.values_mut() {
        ColumnValues::Text(values) => values[row] = coerce_text(field, data),
        ColumnValues::Integer(values) => values[row] = parse_integer(data),
        ColumnValues::Real(values) => values[row] = parse_real(data),
    }
}
