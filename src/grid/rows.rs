//! Per-row cell registry.
//!
//! Maps an opaque row identity to the ordered sequence of cell elements
//! registered for that row. Registration order equals logical column
//! order: the cell registered `i`-th belongs to the column registered
//! `i`-th, regardless of any visual reorder.
//!
//! Each row carries its own registration cursor. The design this core
//! descends from inferred the cursor from a module-global "last seen
//! row" comparison; keeping it inside the row entry removes that hidden
//! dispatch state entirely.

use crate::model::{GridError, RowKey, Slot};
use crate::tree::ElementId;
use std::collections::HashMap;

/// Cells registered for one row, in slot order, plus the slot the next
/// registration will claim.
#[derive(Debug, Default)]
struct RowEntry {
    cells: Vec<ElementId>,
    next_slot: usize,
}

/// Registry of all currently mounted rows' cells.
#[derive(Debug, Default)]
pub(crate) struct RowRegistry {
    rows: HashMap<RowKey, RowEntry>,
}

impl RowRegistry {
    /// Register the next cell for `row`. `capacity` is the current
    /// column count; a row never holds more cells than there are
    /// columns. On overflow nothing is registered.
    pub(crate) fn register(
        &mut self,
        row: RowKey,
        cell: ElementId,
        capacity: usize,
    ) -> Result<Slot, GridError> {
        let entry = self.rows.entry(row).or_default();
        if entry.next_slot >= capacity {
            // Entry may have been freshly inserted; an empty row entry
            // with no cells must not linger.
            if entry.cells.is_empty() {
                self.rows.remove(&row);
            }
            return Err(GridError::RowOverflow { columns: capacity });
        }
        let slot = Slot::new(entry.next_slot);
        entry.cells.push(cell);
        entry.next_slot += 1;
        Ok(slot)
    }

    /// Remove `cell` from `row`. Drops the row entirely once its last
    /// cell is gone. Returns whether the row entry was removed.
    pub(crate) fn unregister(&mut self, row: RowKey, cell: ElementId) -> Result<bool, GridError> {
        let entry = self.rows.get_mut(&row).ok_or(GridError::UnknownRow(row))?;
        if let Some(position) = entry.cells.iter().position(|&c| c == cell) {
            entry.cells.remove(position);
        }
        if entry.cells.is_empty() {
            self.rows.remove(&row);
            return Ok(true);
        }
        Ok(false)
    }

    /// The row's cells in slot (registration) order, if the row is known.
    pub(crate) fn cells(&self, row: RowKey) -> Option<&[ElementId]> {
        self.rows.get(&row).map(|entry| entry.cells.as_slice())
    }

    /// Whether any cells are registered for `row`.
    pub(crate) fn contains(&self, row: RowKey) -> bool {
        self.rows.contains_key(&row)
    }

    /// Number of rows with at least one registered cell.
    pub(crate) fn len(&self) -> usize {
        self.rows.len()
    }
}
