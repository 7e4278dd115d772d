//! Caller-controlled selection and ordering of the fixed GFF3 columns
//!
//! A [`ColumnSelection`] maps each of the nine fixed fields either to a
//! position in the output table or to "omit". Assigned positions must be
//! contiguous from 0 with no gaps or duplicates.

use crate::app::models::FixedField;
use crate::constants::GFF_NCOL;
use crate::{Error, Result};

/// Validated mapping from fixed fields to output positions
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnSelection {
    targets: [Option<usize>; GFF_NCOL],
    fixed_column_count: usize,
}

impl Default for ColumnSelection {
    fn default() -> Self {
        Self::all()
    }
}

impl ColumnSelection {
    /// Select all nine fields in file order
    pub fn all() -> Self {
        Self {
            targets: std::array::from_fn(Some),
            fixed_column_count: GFF_NCOL,
        }
    }

    /// Select no fixed field (tag columns only)
    pub fn none() -> Self {
        Self {
            targets: [None; GFF_NCOL],
            fixed_column_count: 0,
        }
    }

    /// Build from explicit 0-based target positions, indexed by field
    pub fn from_positions(targets: [Option<usize>; GFF_NCOL]) -> Result<Self> {
        let assigned: Vec<usize> = targets.iter().flatten().copied().collect();
        let mut seen = [false; GFF_NCOL];

        for &position in &assigned {
            if position >= assigned.len() {
                return Err(Error::configuration(format!(
                    "Column position {} leaves a gap: {} columns selected, positions must be 0..{}",
                    position,
                    assigned.len(),
                    assigned.len()
                )));
            }
            if seen[position] {
                return Err(Error::configuration(format!(
                    "Column position {} is assigned more than once",
                    position
                )));
            }
            seen[position] = true;
        }

        Ok(Self {
            targets,
            fixed_column_count: assigned.len(),
        })
    }

    /// Build from column names; output order follows `names`
    pub fn from_names<S: AsRef<str>>(names: &[S]) -> Result<Self> {
        let mut targets = [None; GFF_NCOL];

        for (position, name) in names.iter().enumerate() {
            let name = name.as_ref();
            let field = FixedField::from_name(name).ok_or_else(|| {
                Error::configuration(format!(
                    "Unknown GFF column '{}' (expected one of: {})",
                    name,
                    super::fixed_column_names().join(", ")
                ))
            })?;
            if targets[field.index()].is_some() {
                return Err(Error::configuration(format!(
                    "Column '{}' is selected more than once",
                    name
                )));
            }
            targets[field.index()] = Some(position);
        }

        Self::from_positions(targets)
    }

    /// Output position of `field`, `None` if omitted
    pub fn target(&self, field: FixedField) -> Option<usize> {
        self.targets[field.index()]
    }

    /// Number of fixed columns materialized
    pub fn fixed_column_count(&self) -> usize {
        self.fixed_column_count
    }

    pub fn is_selected(&self, field: FixedField) -> bool {
        self.target(field).is_some()
    }

    /// Selected fields sorted by output position
    pub fn fields_in_output_order(&self) -> Vec<FixedField> {
        let mut fields: Vec<(usize, FixedField)> = FixedField::ALL
            .iter()
            .filter_map(|&f| self.target(f).map(|p| (p, f)))
            .collect();
        fields.sort_unstable();
        fields.into_iter().map(|(_, f)| f).collect()
    }
}
