//! Output schema construction and table allocation
//!
//! Turns the column selection and the tag list (explicit or discovered)
//! into a table sized for the fill pass, every cell initialized to missing.

use super::column_mapping::ColumnSelection;
use super::field_parsers::decode_text;
use crate::app::models::{Column, ColumnKind, Table};
use tracing::debug;

/// Allocate a table of `nrow` rows
///
/// Fixed columns come first in their selected order, followed by one text
/// column per tag in the given order. Tag column names are the raw tags
/// decoded as lossy UTF-8.
pub fn allocate_table(
    selection: &ColumnSelection,
    tags: &[Vec<u8>],
    nrow: usize,
    pragmas: Vec<String>,
) -> Table {
    let mut columns = Vec::with_capacity(selection.fixed_column_count() + tags.len());

    for field in selection.fields_in_output_order() {
        columns.push(Column::missing(field.name(), field.kind(), nrow));
    }
    for tag in tags {
        columns.push(Column::missing(decode_text(tag), ColumnKind::Text, nrow));
    }

    debug!(
        "Allocated table: {} rows, {} fixed columns, {} tag columns",
        nrow,
        selection.fixed_column_count(),
        tags.len()
    );

    Table::new(columns, nrow, selection.fixed_column_count(), pragmas)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::models::FixedField;

    #[test]
    fn test_allocation_order_and_kinds() {
        let selection = ColumnSelection::from_names(&["end", "seqid", "score"]).unwrap();
        let tags = vec![b"ID".to_vec(), b"Parent".to_vec()];
        let table = allocate_table(&selection, &tags, 4, Vec::new());

        assert_eq!(table.column_names(), vec!["end", "seqid", "score", "ID", "Parent"]);
        assert_eq!(table.fixed_column_count(), 3);
        assert_eq!(table.tag_column_count(), 2);
        assert_eq!(table.columns()[0].kind(), ColumnKind::Integer);
        assert_eq!(table.columns()[2].kind(), ColumnKind::Real);
        assert_eq!(table.columns()[3].kind(), ColumnKind::Text);
        assert!(table.columns().iter().all(|c| c.len() == 4));
        assert!(table.columns().iter().all(|c| c.values().missing_count() == 4));
        assert!(table.fixed_column(FixedField::Start).is_none());
    }

    #[test]
    fn test_allocation_without_rows() {
        let table = allocate_table(&ColumnSelection::all(), &[], 0, Vec::new());
        assert_eq!(table.ncol(), 9);
        assert!(table.is_empty());
    }
}
