//! The column registry and grid controller.
//!
//! [`GridController`] owns the pure state of the grid: the column list
//! (identity, visual position, cached styles, mounted cells) and the
//! per-row cell registry. Every mutation of a host render tree goes
//! through planned [`RenderOp`](crate::tree::RenderOp) lists executed
//! against a [`VisualTree`], so the permutation bookkeeping in
//! [`reorder`] and the synchronization planning in [`transform`] stay
//! independently testable.

mod hit;
mod reorder;
mod rows;
mod transform;

use crate::model::{Column, ColumnId, ColumnLayout, GridError, GridLayout, RowKey, Slot};
use crate::tree::{self, ElementId, RenderOp, VisualTree};
use rows::RowRegistry;
use tracing::{debug, warn};

/// Column registry and reorder engine for one grid.
///
/// The controller is single-threaded and synchronous: all methods take
/// `&mut self` (or `&self`) and complete without suspension, matching a
/// UI event loop. The host virtualization engine owns invocation timing;
/// in particular it must call [`transform`](Self::transform) for a row
/// after any change to that row's mounted cell set and before the row
/// becomes visible. Wiring the controller into a viewport (the original
/// design deferred this by one scheduling tick so the viewport existed
/// first) is entirely the host's concern.
///
/// Column lifecycle: a column is registered once and lives for the life
/// of the grid; there is no removal path. Row entries come and go with
/// cell registration.
#[derive(Debug, Default)]
pub struct GridController {
    columns: Vec<Column>,
    rows: RowRegistry,
}

impl GridController {
    /// Create an empty controller.
    pub fn new() -> Self {
        Self::default()
    }

    // ===== Registration =====

    /// Register a new column for `header`, assigning the next
    /// registration index as both its stable id and its initial visual
    /// position.
    ///
    /// Each header element must be registered at most once; the
    /// controller does not check for duplicates.
    pub fn register_column(&mut self, header: ElementId) -> ColumnId {
        let column = Column::new(self.columns.len(), header);
        let id = column.id;
        debug!(%id, %header, "column registered");
        self.columns.push(column);
        id
    }

    /// Register the next cell for `row`.
    ///
    /// Cells must be registered in column-declaration order; the row's
    /// own cursor assigns slots `0..n-1` in call order. Registering more
    /// cells than there are columns is rejected with
    /// [`GridError::RowOverflow`] and registers nothing - the caller
    /// must not install teardown hooks for a rejected cell.
    pub fn register_cell(&mut self, row: RowKey, cell: ElementId) -> Result<Slot, GridError> {
        let slot = self.rows.register(row, cell, self.columns.len())?;
        self.columns[slot.get()].cells.push(cell);
        Ok(slot)
    }

    /// Remove a previously registered cell, identified by the slot
    /// returned from [`register_cell`](Self::register_cell). Drops the
    /// row's tracking entry once its last cell is unregistered.
    pub fn unregister_cell(
        &mut self,
        row: RowKey,
        slot: Slot,
        cell: ElementId,
    ) -> Result<(), GridError> {
        if slot.get() >= self.columns.len() {
            return Err(GridError::UnknownColumn(ColumnId::new(slot.get())));
        }
        // Row registry first: its error must leave the columns untouched.
        let removed = self.rows.unregister(row, cell)?;
        let column = &mut self.columns[slot.get()];
        if let Some(position) = column.cells.iter().position(|&c| c == cell) {
            column.cells.remove(position);
        }
        if removed {
            debug!(%row, "last cell unregistered, row dropped");
        }
        Ok(())
    }

    // ===== Queries =====

    /// Registered columns, in registration order.
    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    /// Number of registered columns.
    pub fn column_count(&self) -> usize {
        self.columns.len()
    }

    /// Look up a column by id.
    pub fn column(&self, id: ColumnId) -> Option<&Column> {
        // Ids are registration indices, never reassigned.
        self.columns.get(id.get())
    }

    /// Column ids sorted by current visual position.
    pub fn visual_order(&self) -> Vec<ColumnId> {
        let mut ids: Vec<ColumnId> = self.columns.iter().map(Column::id).collect();
        ids.sort_by_key(|id| self.columns[id.get()].map_to);
        ids
    }

    /// Whether any cells are registered for `row`.
    pub fn has_row(&self, row: RowKey) -> bool {
        self.rows.contains(row)
    }

    /// Number of rows with at least one registered cell.
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// The cells registered for `row`, in slot order.
    pub fn row_cells(&self, row: RowKey) -> Option<&[ElementId]> {
        self.rows.cells(row)
    }

    // ===== Transform =====

    /// Synchronize one row's live cell order with the current column
    /// positions, applying each column's cached style along the way.
    ///
    /// The engine invokes this once per row whenever that row's mounted
    /// cell set may have changed. The row block is rebuilt in place:
    /// anchored before the element that follows it, or appended to the
    /// parent when the row was last. Idempotent - re-running it without
    /// an intervening column mutation leaves the visual order unchanged.
    pub fn transform<T: VisualTree + ?Sized>(
        &self,
        tree: &mut T,
        row: RowKey,
    ) -> Result<(), GridError> {
        let cells = self.rows.cells(row).ok_or(GridError::UnknownRow(row))?;
        let Some(&first) = cells.first() else {
            return Ok(());
        };
        let Some(parent) = tree.parent(first) else {
            warn!(%row, "row cells are detached, transform skipped");
            return Ok(());
        };
        // Captured before any mutation, exactly once per pass. The
        // block's own cells never qualify as the anchor.
        let anchor = transform::block_anchor(tree, cells);

        let mut ops: Vec<RenderOp> = Vec::new();
        let mut tagged: Vec<(ElementId, usize)> = Vec::with_capacity(cells.len());
        for (slot, &cell) in cells.iter().enumerate() {
            let Some(column) = self.columns.get(slot) else {
                break;
            };
            for (name, value) in column.style.iter() {
                ops.push(RenderOp::SetStyle {
                    element: cell,
                    name: name.to_string(),
                    value: value.to_string(),
                });
            }
            tagged.push((cell, column.map_to));
        }
        ops.extend(transform::row_sync_ops(&tagged, parent, anchor));

        debug!(%row, ops = ops.len(), "row transformed");
        tree::apply(tree, &ops);
        Ok(())
    }

    // ===== Reorder =====

    /// Move `selected` immediately before `target`, or to the end when
    /// `target` is `None`.
    ///
    /// Updates the whole `map_to` permutation in a single pass and
    /// immediately moves the header and all mounted cells in the render
    /// tree, so header order and any newly registered row reflect the
    /// change right away. Moving a column before itself is a no-op.
    pub fn move_before<T: VisualTree + ?Sized>(
        &mut self,
        tree: &mut T,
        selected: ColumnId,
        target: Option<ColumnId>,
    ) -> Result<(), GridError> {
        if target == Some(selected) {
            return Ok(());
        }
        let index = match target {
            Some(id) => self.column(id).ok_or(GridError::UnknownColumn(id))?.map_to,
            None => self.columns.len(),
        };
        self.move_before_position(tree, selected, index)
    }

    /// Move `selected` so that it ends up at visual position `index`
    /// counted before the removal shift; `index == column_count` means
    /// the end. Rejects positions outside `0..=column_count`.
    pub fn move_before_position<T: VisualTree + ?Sized>(
        &mut self,
        tree: &mut T,
        selected: ColumnId,
        index: usize,
    ) -> Result<(), GridError> {
        let count = self.columns.len();
        let current = self
            .column(selected)
            .ok_or(GridError::UnknownColumn(selected))?
            .map_to;
        if index > count {
            return Err(GridError::PositionOutOfRange { index, count });
        }
        let adjusted = reorder::compensate_removal(current, index);
        if adjusted == current {
            return Ok(());
        }

        let mut positions: Vec<usize> = self.columns.iter().map(|c| c.map_to).collect();
        let next = reorder::shift_before(&mut positions, selected.get(), adjusted);
        for (column, position) in self.columns.iter_mut().zip(positions) {
            column.map_to = position;
        }
        debug!(%selected, from = current, to = adjusted, "column moved");

        self.apply_column_move(tree, selected, next);
        Ok(())
    }

    /// Physically move `selected`'s header and cells immediately before
    /// the successor column's, or to the end of their parents.
    fn apply_column_move<T: VisualTree + ?Sized>(
        &self,
        tree: &mut T,
        selected: ColumnId,
        next: Option<usize>,
    ) {
        let column = &self.columns[selected.get()];
        let successor = next.map(|reg| &self.columns[reg]);

        let mut ops: Vec<RenderOp> = Vec::new();
        transform::move_element_ops(
            column.header,
            successor.map(|s| s.header),
            tree.parent(column.header),
            &mut ops,
        );
        for (i, &cell) in column.cells.iter().enumerate() {
            let reference = successor.and_then(|s| s.cells.get(i).copied());
            transform::move_element_ops(cell, reference, tree.parent(cell), &mut ops);
        }
        tree::apply(tree, &ops);
    }

    /// Swap `selected`'s visual position with whichever column currently
    /// holds position `index`. Rejects positions outside
    /// `0..column_count`.
    ///
    /// Purely a model mutation: mounted rows catch up on their next
    /// [`transform`](Self::transform), headers on the next
    /// [`sync_headers`](Self::sync_headers).
    pub fn exchange_with(&mut self, selected: ColumnId, index: usize) -> Result<(), GridError> {
        let count = self.columns.len();
        self.column(selected)
            .ok_or(GridError::UnknownColumn(selected))?;
        if index >= count {
            return Err(GridError::PositionOutOfRange { index, count });
        }

        let mut positions: Vec<usize> = self.columns.iter().map(|c| c.map_to).collect();
        reorder::exchange(&mut positions, selected.get(), index);
        for (column, position) in self.columns.iter_mut().zip(positions) {
            column.map_to = position;
        }
        debug!(%selected, index, "columns exchanged");
        Ok(())
    }

    /// Reorder the header elements to ascending visual position.
    ///
    /// Companion to the lazy [`exchange_with`](Self::exchange_with):
    /// hosts call it once after a batch of model-only mutations. The
    /// header block is rebuilt in place under its own parent, like a
    /// row block.
    pub fn sync_headers<T: VisualTree + ?Sized>(&self, tree: &mut T) {
        let Some(first) = self.columns.first() else {
            return;
        };
        let Some(parent) = tree.parent(first.header) else {
            warn!("headers are detached, sync skipped");
            return;
        };
        let headers: Vec<ElementId> = self.columns.iter().map(|c| c.header).collect();
        let anchor = transform::block_anchor(tree, &headers);

        let tagged: Vec<(ElementId, usize)> = self
            .columns
            .iter()
            .map(|column| (column.header, column.map_to))
            .collect();
        let ops = transform::row_sync_ops(&tagged, parent, anchor);
        tree::apply(tree, &ops);
    }

    // ===== Styles =====

    /// Set a style property on the column's header, all currently
    /// mounted cells, and the cached style map, so future rows pick it
    /// up on their first transform.
    pub fn set_column_style<T: VisualTree + ?Sized>(
        &mut self,
        tree: &mut T,
        id: ColumnId,
        name: &str,
        value: &str,
    ) -> Result<(), GridError> {
        let column = self
            .columns
            .get_mut(id.get())
            .ok_or(GridError::UnknownColumn(id))?;
        tree.set_style(column.header, name, value);
        for &cell in &column.cells {
            tree.set_style(cell, name, value);
        }
        column.style.set(name, value);
        Ok(())
    }

    /// Read a style property's current rendered value from the column's
    /// header element. Ad hoc styling applied by the host shows up here
    /// even when it was never cached.
    pub fn column_style<T: VisualTree + ?Sized>(
        &self,
        tree: &T,
        id: ColumnId,
        name: &str,
    ) -> Option<String> {
        let column = self.column(id)?;
        tree.style(column.header, name)
    }

    /// Drop all inline style from the column's header and mounted cells
    /// and clear the cached map.
    fn reset_column_style<T: VisualTree + ?Sized>(&mut self, tree: &mut T, index: usize) {
        let column = &mut self.columns[index];
        tree.clear_style(column.header);
        for &cell in &column.cells {
            tree.clear_style(cell);
        }
        column.style.clear();
    }

    // ===== Layout export/import =====

    /// Snapshot every column's `{index, map_to, style}`, in registration
    /// order.
    pub fn get_layout(&self) -> GridLayout {
        GridLayout(
            self.columns
                .iter()
                .enumerate()
                .map(|(index, column)| ColumnLayout {
                    index,
                    map_to: column.map_to,
                    style: column.style.clone(),
                })
                .collect(),
        )
    }

    /// Restore a previously exported layout.
    ///
    /// Empty input logs a warning, mutates nothing and returns
    /// [`GridError::EmptyLayout`]. Entries whose registration index is
    /// out of range are skipped with a warning; the rest still apply.
    /// Each applied entry first resets the column's inline style, then
    /// reapplies the stored map to header, mounted cells and cache.
    ///
    /// Visual positions are restored only when the layout's `map_to`
    /// values cover every column exactly once; a partial or inconsistent
    /// layout restores styles alone. Position restore is model-only -
    /// run [`sync_headers`](Self::sync_headers) and per-row
    /// [`transform`](Self::transform) afterwards to make it visible.
    pub fn apply_layout<T: VisualTree + ?Sized>(
        &mut self,
        tree: &mut T,
        layout: &GridLayout,
    ) -> Result<(), GridError> {
        if layout.is_empty() {
            warn!("empty layout: nothing to apply");
            return Err(GridError::EmptyLayout);
        }

        let count = self.columns.len();
        if layout.is_position_complete(count) {
            for entry in layout.entries() {
                self.columns[entry.index].map_to = entry.map_to;
            }
        } else {
            warn!("layout does not cover all columns, restoring styles only");
        }

        for entry in layout.entries() {
            if entry.index >= count {
                warn!(index = entry.index, count, "layout entry out of range, skipped");
                continue;
            }
            self.reset_column_style(tree, entry.index);
            let id = ColumnId::new(entry.index);
            for (name, value) in entry.style.iter() {
                self.set_column_style(tree, id, name, value)?;
            }
        }
        Ok(())
    }

    // ===== Hit-testing =====

    /// Find the column whose header or any mounted cell contains the
    /// point, scanning in registration order. Boxes are margin-inclusive
    /// with inclusive bounds.
    pub fn column_from_point<T: VisualTree + ?Sized>(
        &self,
        tree: &T,
        x: f64,
        y: f64,
    ) -> Option<ColumnId> {
        hit::column_at_point(&self.columns, tree, x, y)
    }
}
