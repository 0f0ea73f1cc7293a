//! Serializable layout descriptors.
//!
//! A [`GridLayout`] is the external snapshot of per-column state: one
//! [`ColumnLayout`] per column, ordered by registration index. Hosts
//! persist it however they like; JSON helpers are provided since that is
//! the common transport.

use crate::model::column::StyleMap;
use serde::{Deserialize, Serialize};

/// Snapshot of one column's externally restorable state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColumnLayout {
    /// Registration index of the column this entry describes.
    pub index: usize,
    /// Visual position at the time the layout was taken.
    pub map_to: usize,
    /// Cached style overrides at the time the layout was taken.
    pub style: StyleMap,
}

/// Snapshot of the whole grid's restorable state, one entry per column
/// in registration order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct GridLayout(pub Vec<ColumnLayout>);

impl GridLayout {
    /// Descriptor entries in registration order.
    pub fn entries(&self) -> &[ColumnLayout] {
        &self.0
    }

    /// Whether the layout holds no entries.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Serialize to a JSON string.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }

    /// Deserialize from a JSON string.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Whether the entries' `map_to` values describe every one of
    /// `count` columns exactly once, i.e. a dense permutation of
    /// `{0..count-1}` with each registration index covered once.
    ///
    /// Positional restore is only safe under this condition; a partial
    /// layout restores styles only.
    pub fn is_position_complete(&self, count: usize) -> bool {
        if self.0.len() != count {
            return false;
        }
        let mut index_seen = vec![false; count];
        let mut map_to_seen = vec![false; count];
        for entry in &self.0 {
            if entry.index >= count || entry.map_to >= count {
                return false;
            }
            if index_seen[entry.index] || map_to_seen[entry.map_to] {
                return false;
            }
            index_seen[entry.index] = true;
            map_to_seen[entry.map_to] = true;
        }
        true
    }
}
