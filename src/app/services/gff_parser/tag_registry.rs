//! Ordered registry of attribute tags discovered in a GFF3 file
//!
//! Files carry a small number of distinct tags (tens, not thousands), so
//! lookups are a plain linear scan over the registered names.

/// Duplicate-free list of tag names in first-encounter order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TagRegistry {
    tags: Vec<Vec<u8>>,
}

impl TagRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Index of `tag`, if registered
    pub fn find(&self, tag: &[u8]) -> Option<usize> {
        self.tags
            .iter()
            .position(|t| t.len() == tag.len() && t.as_slice() == tag)
    }

    /// Register `tag` unless already present; returns its index
    pub fn insert_unique(&mut self, tag: &[u8]) -> usize {
        match self.find(tag) {
            Some(index) => index,
            None => {
                self.tags.push(tag.to_vec());
                self.tags.len() - 1
            }
        }
    }

    pub fn len(&self) -> usize {
        self.tags.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tags.is_empty()
    }

    /// Registered tags as raw bytes, in insertion order
    pub fn iter(&self) -> impl Iterator<Item = &[u8]> {
        self.tags.iter().map(Vec::as_slice)
    }

    /// Registered tags decoded as column names, in insertion order
    pub fn names(&self) -> Vec<String> {
        self.iter()
            .map(|t| String::from_utf8_lossy(t).into_owned())
            .collect()
    }

    /// Consume the registry, returning the raw tags in insertion order
    pub fn into_keys(self) -> Vec<Vec<u8>> {
        self.tags
    }
}
