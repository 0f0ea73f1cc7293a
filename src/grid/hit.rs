//! Point-based column hit-testing.

use crate::model::{Column, ColumnId};
use crate::tree::VisualTree;

/// Find the column whose header or any mounted cell contains the point.
///
/// Containment uses each element's margin-inclusive outer box with
/// inclusive bounds. Columns are scanned in registration order and the
/// first match wins; overlap between columns is not expected, but
/// registration order breaks ties if it occurs.
pub(crate) fn column_at_point<T: VisualTree + ?Sized>(
    columns: &[Column],
    tree: &T,
    x: f64,
    y: f64,
) -> Option<ColumnId> {
    columns
        .iter()
        .find(|column| {
            tree.bounds(column.header).contains(x, y)
                || column
                    .cells
                    .iter()
                    .any(|&cell| tree.bounds(cell).contains(x, y))
        })
        .map(|column| column.id)
}
