//! Sorted, de-duplicated request categories.

use std::collections::BTreeMap;
use std::fmt;

use tracing::warn;

use super::normalize_category;
use super::source::CategorySource;
use crate::types::is_metric_identifier;
use crate::{Result, SchemaError};

/// A request type name (e.g. `"Produce"`) with its derived metric prefix.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RequestCategory {
    name: String,
    prefix: String,
}

impl RequestCategory {
    /// Derive the metric prefix of a raw name.
    ///
    /// Only blank names are rejected. A prefix that is not a plain
    /// `[a-z0-9_]` identifier (e.g. `fetch-consumer`) is kept as the
    /// normalizer produced it and logged.
    pub fn new(name: impl Into<String>) -> Result<Self> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(SchemaError::InvalidCategory {
                name,
                reason: "name is empty".to_string(),
            });
        }
        let prefix = normalize_category(&name);
        if !is_metric_identifier(&prefix) {
            warn!(
                category = %name,
                prefix = %prefix,
                "request category does not normalize to a plain identifier"
            );
        }
        Ok(Self { name, prefix })
    }

    /// The raw name as reported by the broker.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The normalized metric prefix, e.g. `leader_and_isr`.
    pub fn prefix(&self) -> &str {
        &self.prefix
    }
}

impl fmt::Display for RequestCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}

/// The request categories of one generation run.
///
/// Always sorted lexicographically by raw name and free of duplicates, so
/// the expansion is identical whatever order the registry reported.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RequestCategories {
    categories: Vec<RequestCategory>,
}

impl RequestCategories {
    /// Sort and de-duplicate a collection of raw names.
    ///
    /// Fails on a blank name or if two distinct names share a prefix.
    pub fn from_names<I, S>(names: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut by_name: BTreeMap<String, RequestCategory> = BTreeMap::new();
        for name in names {
            let name = name.into();
            if !by_name.contains_key(&name) {
                let category = RequestCategory::new(name.clone())?;
                by_name.insert(name, category);
            }
        }

        let mut by_prefix: BTreeMap<&str, &str> = BTreeMap::new();
        for category in by_name.values() {
            if let Some(first) = by_prefix.insert(category.prefix(), category.name()) {
                return Err(SchemaError::CategoryCollision {
                    first: first.to_string(),
                    second: category.name.clone(),
                    prefix: category.prefix.clone(),
                });
            }
        }

        Ok(Self {
            categories: by_name.into_values().collect(),
        })
    }

    /// Read the current set from a category source.
    pub fn from_source(source: &dyn CategorySource) -> Result<Self> {
        Self::from_names(source.list_categories()?)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, RequestCategory> {
        self.categories.iter()
    }

    pub fn len(&self) -> usize {
        self.categories.len()
    }

    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }

    /// Raw names in sorted order.
    pub fn names(&self) -> Vec<&str> {
        self.categories.iter().map(RequestCategory::name).collect()
    }
}

impl<'a> IntoIterator for &'a RequestCategories {
    type Item = &'a RequestCategory;
    type IntoIter = std::slice::Iter<'a, RequestCategory>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
