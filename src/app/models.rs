//! Core data structures for parsed GFF3 tables
//!
//! Defines the fixed GFF3 fields, typed column storage and the [`Table`]
//! returned by a completed parse.

use crate::constants::{FIXED_COLUMN_KINDS, FIXED_COLUMN_NAMES, GFF_NCOL};
use serde::{Deserialize, Serialize};

/// Value kind stored by a column
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ColumnKind {
    Text,
    Integer,
    Real,
}

/// One of the nine fixed GFF3 fields
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum FixedField {
    Seqid,
    Source,
    Type,
    Start,
    End,
    Score,
    Strand,
    Phase,
    Attributes,
}

impl FixedField {
    /// All fixed fields in file order
    pub const ALL: [FixedField; GFF_NCOL] = [
        FixedField::Seqid,
        FixedField::Source,
        FixedField::Type,
        FixedField::Start,
        FixedField::End,
        FixedField::Score,
        FixedField::Strand,
        FixedField::Phase,
        FixedField::Attributes,
    ];

    /// Zero-based position of this field in a GFF3 record
    pub fn index(self) -> usize {
        self as usize
    }

    /// Field for a zero-based record position
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    /// Column name of this field
    pub fn name(self) -> &'static str {
        FIXED_COLUMN_NAMES[self.index()]
    }

    /// Value kind of this field
    pub fn kind(self) -> ColumnKind {
        FIXED_COLUMN_KINDS[self.index()]
    }

    /// Look up a field by its column name
    pub fn from_name(name: &str) -> Option<Self> {
        FIXED_COLUMN_NAMES
            .iter()
            .position(|&n| n == name)
            .and_then(Self::from_index)
    }
}

/// Typed value store of a column; `None` is the missing marker
#[derive(Debug, Clone, PartialEq)]
pub enum ColumnValues {
    Text(Vec<Option<String>>),
    Integer(Vec<Option<i32>>),
    Real(Vec<Option<f64>>),
}

impl ColumnValues {
    /// Allocate `nrow` missing values of the given kind
    pub fn missing(kind: ColumnKind, nrow: usize) -> Self {
        match kind {
            ColumnKind::Text => ColumnValues::Text(vec![None; nrow]),
            ColumnKind::Integer => ColumnValues::Integer(vec![None; nrow]),
            ColumnKind::Real => ColumnValues::Real(vec![None; nrow]),
        }
    }

    pub fn kind(&self) -> ColumnKind {
        match self {
            ColumnValues::Text(_) => ColumnKind::Text,
            ColumnValues::Integer(_) => ColumnKind::Integer,
            ColumnValues::Real(_) => ColumnKind::Real,
        }
    }

    pub fn len(&self) -> usize {
        match self {
            ColumnValues::Text(v) => v.len(),
            ColumnValues::Integer(v) => v.len(),
            ColumnValues::Real(v) => v.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Check whether the slot at `row` holds the missing marker
    pub fn is_missing(&self, row: usize) -> bool {
        match self {
            ColumnValues::Text(v) => v.get(row).is_none_or(Option::is_none),
            ColumnValues::Integer(v) => v.get(row).is_none_or(Option::is_none),
            ColumnValues::Real(v) => v.get(row).is_none_or(Option::is_none),
        }
    }

    /// Number of missing slots
    pub fn missing_count(&self) -> usize {
        (0..self.len()).filter(|&row| self.is_missing(row)).count()
    }
}

/// A named, typed column of a [`Table`]
#[derive(Debug, Clone, PartialEq)]
pub struct Column {
    name: String,
    values: ColumnValues,
}

impl Column {
    /// Create a column with every slot set to missing
    pub fn missing(name: impl Into<String>, kind: ColumnKind, nrow: usize) -> Self {
        Self {
            name: name.into(),
            values: ColumnValues::missing(kind, nrow),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn kind(&self) -> ColumnKind {
        self.values.kind()
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn values(&self) -> &ColumnValues {
        &self.values
    }

    pub(crate) fn values_mut(&mut self) -> &mut ColumnValues {
        &mut self.values
    }

    /// Text value at `row`, `None` if missing or not a text column
    pub fn text(&self, row: usize) -> Option<&str> {
        match &self.values {
            ColumnValues::Text(v) => v.get(row).and_then(|s| s.as_deref()),
            _ => None,
        }
    }

    /// Integer value at `row`, `None` if missing or not an integer column
    pub fn integer(&self, row: usize) -> Option<i32> {
        match &self.values {
            ColumnValues::Integer(v) => v.get(row).copied().flatten(),
            _ => None,
        }
    }

    /// Real value at `row`, `None` if missing or not a real column
    pub fn real(&self, row: usize) -> Option<f64> {
        match &self.values {
            ColumnValues::Real(v) => v.get(row).copied().flatten(),
            _ => None,
        }
    }
}

/// Result of a completed parse
///
/// Columns are ordered as the selected fixed fields followed by the tag
/// columns. Every column holds exactly [`Table::nrow`] values.
#[derive(Debug, Clone, PartialEq)]
pub struct Table {
    columns: Vec<Column>,
    nrow: usize,
    fixed_column_count: usize,
    tag_column_count: usize,
    pragmas: Vec<String>,
}

impl Table {
    pub(crate) fn new(
        columns: Vec<Column>,
        nrow: usize,
        fixed_column_count: usize,
        pragmas: Vec<String>,
    ) -> Self {
        let tag_column_count = columns.len() - fixed_column_count;
        Self {
            columns,
            nrow,
            fixed_column_count,
            tag_column_count,
            pragmas,
        }
    }

    /// Number of rows
    pub fn nrow(&self) -> usize {
        self.nrow
    }

    /// Total number of columns (fixed + tag)
    pub fn ncol(&self) -> usize {
        self.columns.len()
    }

    /// Number of fixed GFF3 columns materialized
    pub fn fixed_column_count(&self) -> usize {
        self.fixed_column_count
    }

    /// Number of attribute tag columns
    pub fn tag_column_count(&self) -> usize {
        self.tag_column_count
    }

    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    /// The fixed columns, in output order
    pub fn fixed_columns(&self) -> &[Column] {
        &self.columns[..self.fixed_column_count]
    }

    /// The tag columns, in output order
    pub fn tag_columns(&self) -> &[Column] {
        &self.columns[self.fixed_column_count..]
    }

    pub(crate) fn tag_columns_mut(&mut self) -> &mut [Column] {
        &mut self.columns[self.fixed_column_count..]
    }

    pub(crate) fn column_mut(&mut self, position: usize) -> &mut Column {
        &mut self.columns[position]
    }

    /// Column names in output order
    pub fn column_names(&self) -> Vec<&str> {
        self.columns.iter().map(Column::name).collect()
    }

    /// First column with the given name, in output order
    pub fn column(&self, name: &str) -> Option<&Column> {
        self.columns.iter().find(|c| c.name() == name)
    }

    /// Column holding a fixed field, if it was selected
    pub fn fixed_column(&self, field: FixedField) -> Option<&Column> {
        self.fixed_columns().iter().find(|c| c.name() == field.name())
    }

    /// Tag column with the given name
    pub fn tag_column(&self, tag: &str) -> Option<&Column> {
        self.tag_columns().iter().find(|c| c.name() == tag)
    }

    /// Tag names in column order
    pub fn tags(&self) -> Vec<&str> {
        self.tag_columns().iter().map(Column::name).collect()
    }

    /// `##` lines in file order, verbatim
    pub fn pragmas(&self) -> &[String] {
        &self.pragmas
    }

    pub fn is_empty(&self) -> bool {
        self.nrow == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixed_field_lookup() {
        assert_eq!(FixedField::from_name("score"), Some(FixedField::Score));
        assert_eq!(FixedField::from_name("Score"), None);
        assert_eq!(FixedField::Phase.index(), 7);
        assert_eq!(FixedField::Start.kind(), ColumnKind::Integer);
        assert_eq!(FixedField::Score.kind(), ColumnKind::Real);
        assert_eq!(FixedField::Strand.kind(), ColumnKind::Text);
        assert_eq!(FixedField::from_index(9), None);

        for (i, field) in FixedField::ALL.iter().enumerate() {
            assert_eq!(field.index(), i);
            assert_eq!(FixedField::from_name(field.name()), Some(*field));
        }
    }

    #[test]
    fn test_missing_column_allocation() {
        let column = Column::missing("ID", ColumnKind::Text, 3);
        assert_eq!(column.len(), 3);
        assert_eq!(column.values().missing_count(), 3);
        assert_eq!(column.text(0), None);
        assert_eq!(column.integer(0), None);

        let empty = Column::missing("start", ColumnKind::Integer, 0);
        assert!(empty.is_empty());
        assert!(empty.values().is_missing(0));
    }

    #[test]
    fn test_table_column_partitions() {
        let columns = vec![
            Column::missing("seqid", ColumnKind::Text, 2),
            Column::missing("start", ColumnKind::Integer, 2),
            Column::missing("ID", ColumnKind::Text, 2),
        ];
        let table = Table::new(columns, 2, 2, vec!["##gff-version 3\n".to_string()]);

        assert_eq!(table.ncol(), 3);
        assert_eq!(table.fixed_column_count(), 2);
        assert_eq!(table.tag_column_count(), 1);
        assert_eq!(table.tags(), vec!["ID"]);
        assert!(table.fixed_column(FixedField::Start).is_some());
        assert!(table.fixed_column(FixedField::End).is_none());
        assert!(table.tag_column("seqid").is_none());
        assert_eq!(table.column_names(), vec!["seqid", "start", "ID"]);
    }
}
