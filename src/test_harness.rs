//! Scenario test harness for the grid core.
//!
//! Wraps a [`GridController`] and a [`MockTree`] behind a high-level API
//! that mimics what a host virtualization engine does: declare columns
//! once, mount rows (register one cell per column, then transform),
//! unmount rows. Visual orders are reported as slot-index strings like
//! `"2 0 1"` so tests and snapshots stay readable.

use crate::grid::GridController;
use crate::model::{ColumnId, RowKey, Slot};
use crate::tree::{ElementId, ElementRect, MockTree, VisualTree};
use std::collections::HashMap;

/// High-level driver for grid scenarios.
pub struct GridHarness {
    /// Controller under test.
    pub grid: GridController,
    /// In-memory render tree.
    pub tree: MockTree,
    /// Parent of all header elements.
    pub header_row: ElementId,
    containers: HashMap<RowKey, ElementId>,
    cells: HashMap<RowKey, Vec<(Slot, ElementId)>>,
    body: ElementId,
}

impl GridHarness {
    /// Build a grid with `count` columns, headers already attached and
    /// registered in declaration order.
    pub fn with_columns(count: usize) -> Self {
        let mut tree = MockTree::new();
        let root = tree.create_element();
        let header_row = tree.create_child(root);
        let body = tree.create_child(root);

        let mut grid = GridController::new();
        for _ in 0..count {
            let header = tree.create_child(header_row);
            grid.register_column(header);
        }

        Self {
            grid,
            tree,
            header_row,
            containers: HashMap::new(),
            cells: HashMap::new(),
            body,
        }
    }

    /// Mount a row: create a container, register one cell per column in
    /// declaration order, then run the transform the engine would run
    /// before the row becomes visible.
    pub fn mount_row(&mut self, row: RowKey) {
        self.mount_row_cells(row, self.grid.column_count());
        self.transform(row);
    }

    /// Register `count` cells for `row` without transforming, for
    /// partial-registration and error-path scenarios.
    pub fn mount_row_cells(&mut self, row: RowKey, count: usize) {
        let container = *self
            .containers
            .entry(row)
            .or_insert_with(|| self.tree.create_child(self.body));
        for _ in 0..count {
            let cell = self.tree.create_child(container);
            let slot = self
                .grid
                .register_cell(row, cell)
                .expect("cell within column capacity");
            self.cells.entry(row).or_default().push((slot, cell));
        }
    }

    /// Run the row transform, as the engine does on every render/update.
    pub fn transform(&mut self, row: RowKey) {
        self.grid
            .transform(&mut self.tree, row)
            .expect("row is registered");
    }

    /// Unregister every cell of `row`, as row teardown does.
    pub fn unmount_row(&mut self, row: RowKey) {
        for (slot, cell) in self.cells.remove(&row).unwrap_or_default() {
            self.grid
                .unregister_cell(row, slot, cell)
                .expect("cell was registered");
        }
        self.containers.remove(&row);
    }

    /// The cell registered for `row` at `slot`.
    pub fn cell(&self, row: RowKey, slot: usize) -> ElementId {
        self.cells[&row][slot].1
    }

    /// Live child order of the row container, as slot indices.
    pub fn row_order(&self, row: RowKey) -> String {
        let container = self.containers[&row];
        self.order_string(self.tree.children(container), &|el| {
            self.cells[&row]
                .iter()
                .find(|&&(_, cell)| cell == el)
                .map(|(slot, _)| slot.get())
        })
    }

    /// Live child order of the header row, as registration indices.
    pub fn header_order(&self) -> String {
        let headers: Vec<(usize, ElementId)> = self
            .grid
            .columns()
            .iter()
            .map(|c| (c.id().get(), c.header()))
            .collect();
        self.order_string(self.tree.children(self.header_row), &|el| {
            headers
                .iter()
                .find(|&&(_, header)| header == el)
                .map(|&(reg, _)| reg)
        })
    }

    /// Current `map_to` values in registration order.
    pub fn positions(&self) -> Vec<usize> {
        self.grid.columns().iter().map(|c| c.map_to()).collect()
    }

    /// Lay every header and cell out on a uniform grid of
    /// `width x height` boxes (headers on the top band, one row band per
    /// mounted row) so hit-testing has real geometry. Boxes follow the
    /// current live order.
    pub fn layout_geometry(&mut self, width: f64, height: f64) {
        let headers: Vec<ElementId> = self.tree.children(self.header_row).to_vec();
        for (i, header) in headers.into_iter().enumerate() {
            self.tree.set_bounds(
                header,
                ElementRect::new(i as f64 * width, 0.0, width, height),
            );
        }
        let containers: Vec<ElementId> = self.containers.values().copied().collect();
        let mut bands: Vec<(f64, ElementId)> = containers
            .iter()
            .map(|&c| (c.get() as f64, c))
            .collect();
        bands.sort_by(|a, b| a.0.total_cmp(&b.0));
        for (band, (_, container)) in bands.into_iter().enumerate() {
            let top = (band + 1) as f64 * height;
            let cells: Vec<ElementId> = self.tree.children(container).to_vec();
            for (i, cell) in cells.into_iter().enumerate() {
                self.tree
                    .set_bounds(cell, ElementRect::new(i as f64 * width, top, width, height));
            }
        }
    }

    /// Shorthand for the column id registered `index`-th.
    pub fn col(&self, index: usize) -> ColumnId {
        ColumnId::new(index)
    }

    fn order_string(
        &self,
        children: &[ElementId],
        index_of: &dyn Fn(ElementId) -> Option<usize>,
    ) -> String {
        children
            .iter()
            .filter_map(|&el| index_of(el))
            .map(|i| i.to_string())
            .collect::<Vec<_>>()
            .join(" ")
    }
}
