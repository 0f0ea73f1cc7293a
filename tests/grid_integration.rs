//! Blackbox integration tests driving the public API exactly the way a
//! host virtualization engine and a drag feature would: register
//! columns and cells, transform rows, reorder through adapters,
//! hit-test against geometry.

use scroll_grid::{
    ColumnId, ElementId, ElementRect, GridAdapter, GridController, GridError, MockTree, RowKey,
    Slot, VisualTree,
};

/// A tiny host: one header row, one container per mounted row.
struct Host {
    tree: MockTree,
    header_row: ElementId,
    body: ElementId,
}

impl Host {
    fn new() -> Self {
        let mut tree = MockTree::new();
        let root = tree.create_element();
        let header_row = tree.create_child(root);
        let body = tree.create_child(root);
        Self {
            tree,
            header_row,
            body,
        }
    }

    fn declare_columns(&mut self, grid: &mut GridController, count: usize) -> Vec<ElementId> {
        (0..count)
            .map(|_| {
                let header = self.tree.create_child(self.header_row);
                grid.register_column(header);
                header
            })
            .collect()
    }

    /// Register one cell per column and run the pre-visibility transform.
    fn mount_row(&mut self, grid: &mut GridController, row: RowKey) -> Vec<ElementId> {
        let container = self.tree.create_child(self.body);
        let cells: Vec<ElementId> = (0..grid.column_count())
            .map(|_| {
                let cell = self.tree.create_child(container);
                grid.register_cell(row, cell).expect("within capacity");
                cell
            })
            .collect();
        grid.transform(&mut self.tree, row).expect("row registered");
        cells
    }

    fn container_of(&self, cell: ElementId) -> ElementId {
        self.tree.parent(cell).expect("cell is attached")
    }
}

#[test]
fn engine_lifecycle_round_trip() {
    let mut host = Host::new();
    let mut grid = GridController::new();
    host.declare_columns(&mut grid, 3);

    let row = RowKey::new(1);
    let cells = host.mount_row(&mut grid, row);

    // Slots were assigned in declaration order.
    assert_eq!(grid.row_cells(row), Some(cells.as_slice()));

    // Teardown drops the row tracking entirely.
    for (slot, cell) in cells.iter().enumerate() {
        grid.unregister_cell(row, Slot::new(slot), *cell)
            .expect("cell was registered");
    }
    assert!(!grid.has_row(row));
    assert_eq!(grid.row_cells(row), None);
}

#[test]
fn slots_count_up_and_overflow_rejects() {
    let mut host = Host::new();
    let mut grid = GridController::new();
    host.declare_columns(&mut grid, 3);

    let row = RowKey::new(1);
    let container = host.tree.create_child(host.body);
    for expected in 0..3 {
        let cell = host.tree.create_child(container);
        assert_eq!(grid.register_cell(row, cell), Ok(Slot::new(expected)));
    }

    let extra = host.tree.create_child(container);
    assert_eq!(
        grid.register_cell(row, extra),
        Err(GridError::RowOverflow { columns: 3 })
    );
}

#[test]
fn drag_feature_reorders_through_the_adapter() {
    let mut host = Host::new();
    let mut grid = GridController::new();
    host.declare_columns(&mut grid, 3);
    let row = RowKey::new(1);
    let cells = host.mount_row(&mut grid, row);
    let container = host.container_of(cells[0]);

    {
        let mut adapter = GridAdapter::new(&mut grid, &mut host.tree);
        let mut dragged = adapter.column(ColumnId::new(0)).expect("column exists");
        dragged.move_before(Some(ColumnId::new(2))).unwrap();
    }

    // Eager move: cells already follow {col0:1, col1:0, col2:2}.
    assert_eq!(
        host.tree.children(container),
        &[cells[1], cells[0], cells[2]]
    );

    let adapter = GridAdapter::new(&mut grid, &mut host.tree);
    let visual: Vec<usize> = adapter.columns().iter().map(|id| id.get()).collect();
    assert_eq!(visual, vec![1, 0, 2]);
}

#[test]
fn lazy_exchange_becomes_visible_per_row() {
    let mut host = Host::new();
    let mut grid = GridController::new();
    host.declare_columns(&mut grid, 3);
    let first = RowKey::new(1);
    let second = RowKey::new(2);
    let first_cells = host.mount_row(&mut grid, first);
    let second_cells = host.mount_row(&mut grid, second);

    grid.exchange_with(ColumnId::new(0), 2).unwrap();

    // Nothing moved yet.
    let container = host.container_of(first_cells[0]);
    assert_eq!(host.tree.children(container), first_cells.as_slice());

    grid.transform(&mut host.tree, first).unwrap();
    assert_eq!(
        host.tree.children(container),
        &[first_cells[2], first_cells[1], first_cells[0]]
    );

    // The other row catches up independently.
    let other = host.container_of(second_cells[0]);
    assert_eq!(host.tree.children(other), second_cells.as_slice());
    grid.transform(&mut host.tree, second).unwrap();
    assert_eq!(
        host.tree.children(other),
        &[second_cells[2], second_cells[1], second_cells[0]]
    );

    // Headers follow on explicit sync.
    grid.sync_headers(&mut host.tree);
    let headers: Vec<ElementId> = grid.columns().iter().map(|c| c.header()).collect();
    assert_eq!(
        host.tree.children(host.header_row),
        &[headers[2], headers[1], headers[0]]
    );
}

#[test]
fn transform_recovers_after_eager_move_then_lazy_exchange() {
    let mut host = Host::new();
    let mut grid = GridController::new();
    host.declare_columns(&mut grid, 2);
    let row = RowKey::new(1);
    let cells = host.mount_row(&mut grid, row);
    let container = host.container_of(cells[0]);

    // The eager move reverses the tree, the lazy exchange reverses the
    // model back; transform must converge without losing cells.
    grid.move_before(&mut host.tree, ColumnId::new(0), None)
        .unwrap();
    grid.exchange_with(ColumnId::new(0), 0).unwrap();
    grid.transform(&mut host.tree, row).unwrap();

    assert_eq!(host.tree.children(container), cells.as_slice());
}

#[test]
fn styles_persist_across_row_recycling() {
    let mut host = Host::new();
    let mut grid = GridController::new();
    host.declare_columns(&mut grid, 2);

    {
        let mut adapter = GridAdapter::new(&mut grid, &mut host.tree);
        let mut column = adapter.column(ColumnId::new(1)).expect("column exists");
        column.set_style("width", "200px").unwrap();
    }

    // A row mounted later still receives the cached style.
    let row = RowKey::new(5);
    let cells = host.mount_row(&mut grid, row);
    assert_eq!(
        host.tree.style(cells[1], "width").as_deref(),
        Some("200px")
    );
    assert_eq!(host.tree.style(cells[0], "width"), None);
}

#[test]
fn hit_testing_resolves_columns_by_geometry() {
    let mut host = Host::new();
    let mut grid = GridController::new();
    let headers = host.declare_columns(&mut grid, 2);
    let row = RowKey::new(1);
    let cells = host.mount_row(&mut grid, row);

    // 80x20 headers, 80x30 cells below, with a 2-unit margin folded
    // into the outer boxes.
    for (i, &header) in headers.iter().enumerate() {
        host.tree
            .set_bounds(header, ElementRect::new(i as f64 * 80.0, 0.0, 80.0, 20.0));
    }
    for (i, &cell) in cells.iter().enumerate() {
        host.tree
            .set_bounds(cell, ElementRect::new(i as f64 * 80.0, 20.0, 80.0, 30.0));
    }

    let mut adapter = GridAdapter::new(&mut grid, &mut host.tree);
    let hit = adapter.column_from_point(100.0, 10.0).expect("header hit");
    assert_eq!(hit.column_id(), ColumnId::new(1));

    let hit = adapter.column_from_point(10.0, 40.0).expect("cell hit");
    assert_eq!(hit.column_id(), ColumnId::new(0));

    assert!(adapter.column_from_point(10.0, 90.0).is_none());
    assert!(adapter.column_from_point(-5.0, 10.0).is_none());
}
