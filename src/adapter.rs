//! Read/write facades for external layout features.
//!
//! A drag-and-drop or layout-editing feature should not reach into the
//! controller's internals. [`GridAdapter`] exposes the per-grid surface
//! (column listing, layout export/import, hit-testing) and
//! [`ColumnAdapter`] the per-column surface (style read/write, reorder,
//! exchange, identity). Both borrow the controller together with the
//! host tree for the duration of the edit.

use crate::grid::GridController;
use crate::model::{ColumnId, GridError, GridLayout};
use crate::tree::VisualTree;

/// Per-grid facade over a [`GridController`] and the host tree.
pub struct GridAdapter<'a, T: VisualTree + ?Sized> {
    grid: &'a mut GridController,
    tree: &'a mut T,
}

impl<'a, T: VisualTree + ?Sized> GridAdapter<'a, T> {
    /// Borrow a controller and tree as an adapter.
    pub fn new(grid: &'a mut GridController, tree: &'a mut T) -> Self {
        Self { grid, tree }
    }

    /// Column ids sorted by current visual position.
    pub fn columns(&self) -> Vec<ColumnId> {
        self.grid.visual_order()
    }

    /// Borrow one column as a [`ColumnAdapter`], if it exists.
    pub fn column(&mut self, id: ColumnId) -> Option<ColumnAdapter<'_, T>> {
        self.grid.column(id)?;
        Some(ColumnAdapter {
            grid: &mut *self.grid,
            tree: &mut *self.tree,
            id,
        })
    }

    /// Snapshot the current per-column layout.
    pub fn get_layout(&self) -> GridLayout {
        self.grid.get_layout()
    }

    /// Restore a previously exported layout. See
    /// [`GridController::apply_layout`] for the exact rules.
    pub fn apply_layout(&mut self, layout: &GridLayout) -> Result<(), GridError> {
        self.grid.apply_layout(self.tree, layout)
    }

    /// Resolve the column under a point, as a [`ColumnAdapter`].
    pub fn column_from_point(&mut self, x: f64, y: f64) -> Option<ColumnAdapter<'_, T>> {
        let id = self.grid.column_from_point(self.tree, x, y)?;
        Some(ColumnAdapter {
            grid: &mut *self.grid,
            tree: &mut *self.tree,
            id,
        })
    }
}

/// Per-column facade used by external layout/drag features.
pub struct ColumnAdapter<'a, T: VisualTree + ?Sized> {
    grid: &'a mut GridController,
    tree: &'a mut T,
    id: ColumnId,
}

impl<T: VisualTree + ?Sized> ColumnAdapter<'_, T> {
    /// Stable column identity.
    pub fn column_id(&self) -> ColumnId {
        self.id
    }

    /// Read a style property's current rendered value from the header.
    pub fn style(&self, name: &str) -> Option<String> {
        self.grid.column_style(self.tree, self.id, name)
    }

    /// Write a style property to the header, every mounted cell, and
    /// the cached style map (so future rows pick it up).
    pub fn set_style(&mut self, name: &str, value: &str) -> Result<(), GridError> {
        self.grid.set_column_style(self.tree, self.id, name, value)
    }

    /// Move this column immediately before `target`, or to the end.
    /// Headers and mounted cells move in the tree right away.
    pub fn move_before(&mut self, target: Option<ColumnId>) -> Result<(), GridError> {
        self.grid.move_before(self.tree, self.id, target)
    }

    /// Swap visual positions with the column at visual `index`. Model
    /// only; the change becomes visible through later transforms and
    /// [`GridController::sync_headers`].
    pub fn exchange_with(&mut self, index: usize) -> Result<(), GridError> {
        self.grid.exchange_with(self.id, index)
    }
}
