//! Column record and cached style overrides.

use crate::model::identifiers::ColumnId;
use crate::tree::ElementId;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Cached style overrides for one column, keyed by style-property name.
///
/// This is the authoritative copy used to restyle cells of freshly
/// mounted rows on their first transform; the live header element may
/// additionally carry ad hoc styling applied directly by the host.
/// Backed by a `BTreeMap` so serialized layouts are deterministic.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StyleMap(BTreeMap<String, String>);

impl StyleMap {
    /// Create an empty style map.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a style property, replacing any previous value.
    pub fn set(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.0.insert(name.into(), value.into());
    }

    /// Get a cached property value.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.0.get(name).map(String::as_str)
    }

    /// Iterate over `(name, value)` pairs in property-name order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Remove all cached properties.
    pub fn clear(&mut self) {
        self.0.clear();
    }

    /// Whether no properties are cached.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Number of cached properties.
    pub fn len(&self) -> usize {
        self.0.len()
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for StyleMap {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(
            iter.into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }
}

/// One logical column: a header element plus the ordered set of cell
/// elements belonging to it across all currently mounted rows.
///
/// `cells` is kept in row-registration order, not visual order. The
/// visual position lives solely in `map_to`; across all columns the
/// `map_to` values always form the dense permutation `{0..n-1}`.
#[derive(Debug, Clone)]
pub struct Column {
    /// Stable identity, equal to the registration index.
    pub(crate) id: ColumnId,
    /// Current 0-based visual position.
    pub(crate) map_to: usize,
    /// Header element handle.
    pub(crate) header: ElementId,
    /// Cell elements of mounted rows, in row-registration order.
    pub(crate) cells: Vec<ElementId>,
    /// Cached style overrides.
    pub(crate) style: StyleMap,
}

impl Column {
    /// Create a column at registration index `index` with its header.
    /// A new column starts displayed at its registration position.
    pub(crate) fn new(index: usize, header: ElementId) -> Self {
        Self {
            id: ColumnId::new(index),
            map_to: index,
            header,
            cells: Vec::new(),
            style: StyleMap::new(),
        }
    }

    /// Stable column identity.
    pub fn id(&self) -> ColumnId {
        self.id
    }

    /// Current 0-based visual position.
    pub fn map_to(&self) -> usize {
        self.map_to
    }

    /// Header element handle.
    pub fn header(&self) -> ElementId {
        self.header
    }

    /// Cell elements of currently mounted rows, in row-registration order.
    pub fn cells(&self) -> &[ElementId] {
        &self.cells
    }

    /// Cached style overrides.
    pub fn style(&self) -> &StyleMap {
        &self.style
    }
}
