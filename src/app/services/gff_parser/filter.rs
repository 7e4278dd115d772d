//! Feature-type row filter

use std::collections::HashSet;

/// Optional whitelist on the `type` field
///
/// Matching is byte-exact and case-sensitive. Without a whitelist every
/// syntactically valid record is kept.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FeatureTypeFilter {
    allowed: Option<HashSet<Vec<u8>>>,
}

impl FeatureTypeFilter {
    /// Filter that keeps every record
    pub fn allow_all() -> Self {
        Self { allowed: None }
    }

    /// Filter that keeps only records whose type is one of `types`
    pub fn only<I, S>(types: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            allowed: Some(
                types
                    .into_iter()
                    .map(|t| t.as_ref().as_bytes().to_vec())
                    .collect(),
            ),
        }
    }

    pub fn is_active(&self) -> bool {
        self.allowed.is_some()
    }

    /// Check whether a record with this `type` field is included
    pub fn includes(&self, feature_type: &[u8]) -> bool {
        match &self.allowed {
            Some(allowed) => allowed.contains(feature_type),
            None => true,
        }
    }
}
