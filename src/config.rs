//! Configuration management and validation.
//!
//! Provides the serializable parser configuration used by the CLI and by
//! library callers that prefer naming columns over building a
//! [`ColumnSelection`] by hand.

use crate::app::services::gff_parser::{
    ColumnSelection, FeatureTypeFilter, ParseOptions, fixed_column_names,
};
use crate::constants::DEFAULT_MAX_LINE_LENGTH;
use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Parser configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ParserConfig {
    /// Fixed columns to load, in output order
    pub columns: Vec<String>,

    /// Attribute tags to load; `None` loads every tag found in the file
    pub tags: Option<Vec<String>>,

    /// Feature types to keep; `None` keeps every record
    pub feature_types: Option<Vec<String>>,

    /// Maximum line length in bytes, line terminator included
    pub max_line_length: usize,
}

impl Default for ParserConfig {
    fn default() -> Self {
        Self {
            columns: fixed_column_names().iter().map(|s| s.to_string()).collect(),
            tags: None,
            feature_types: None,
            max_line_length: DEFAULT_MAX_LINE_LENGTH,
        }
    }
}

impl ParserConfig {
    /// Validate the configuration
    pub fn validate(&self) -> Result<()> {
        ColumnSelection::from_names(&self.columns)?;

        if self.max_line_length == 0 {
            return Err(Error::configuration(
                "Maximum line length must be greater than 0".to_string(),
            ));
        }

        self.parse_options_unchecked().validate()
    }

    /// Build validated parse options
    pub fn to_options(&self) -> Result<ParseOptions> {
        self.validate()?;
        let options = self.parse_options_unchecked();
        debug!(
            "Parse options: {} fixed columns, tags {:?}, feature filter active: {}",
            options.selection.fixed_column_count(),
            options.tags,
            options.feature_types.is_active()
        );
        Ok(options)
    }

    fn parse_options_unchecked(&self) -> ParseOptions {
        ParseOptions {
            selection: ColumnSelection::from_names(&self.columns).unwrap_or_default(),
            tags: self.tags.clone(),
            feature_types: match &self.feature_types {
                Some(types) => FeatureTypeFilter::only(types),
                None => FeatureTypeFilter::allow_all(),
            },
        }
    }
}
