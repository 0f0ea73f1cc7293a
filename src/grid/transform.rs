//! Pure planners for visual-order synchronization.
//!
//! [`row_sync_ops`] is the heart of the transform step: given one row's
//! cells tagged with their columns' visual positions, it plans the
//! detach/insert cycle that rebuilds the row's live node order into
//! ascending `map_to` order. The same planner reorders the header block,
//! which is just another "row" of elements.
//!
//! The cycle works in place: the lowest-positioned cell is detached and
//! re-inserted before the anchor (the element that follows the row's
//! block), or appended to the parent when the row was last. Every other
//! cell is then detached and chained immediately after the previous one.
//! Re-running the planner on an already-ordered row rebuilds the block
//! in the same place, which is what makes the transform idempotent.

use crate::tree::{ElementId, RenderOp, VisualTree};

/// Find the element immediately following a block of siblings: the first
/// next sibling of any block member that is not itself a block member.
///
/// After an eager move the registration-last member need not be visually
/// last, so its next sibling can be another member of the same block;
/// anchoring on that would plan an insert relative to an element the plan
/// itself detaches. `None` means the block runs to the end of its parent.
pub(crate) fn block_anchor<T: VisualTree + ?Sized>(
    tree: &T,
    block: &[ElementId],
) -> Option<ElementId> {
    block.iter().find_map(|&element| {
        match tree.next_sibling(element) {
            Some(sibling) if block.contains(&sibling) => None,
            sibling => Some(sibling),
        }
    })?
}

/// Plan the reordering of one row's cells into ascending visual order.
///
/// `cells` pairs each mounted cell with its column's current `map_to`;
/// registration gaps (rows mid-registration) are simply absent from the
/// slice. `anchor` is the element immediately following the row's block,
/// captured before any mutation; `parent` receives the block when there
/// is no anchor.
///
/// Returns an empty plan for an empty row.
pub(crate) fn row_sync_ops(
    cells: &[(ElementId, usize)],
    parent: ElementId,
    anchor: Option<ElementId>,
) -> Vec<RenderOp> {
    let mut visible: Vec<(ElementId, usize)> = cells.to_vec();
    visible.sort_by_key(|&(_, map_to)| map_to);

    let mut ops = Vec::with_capacity(visible.len() * 2);
    let mut visual = visible.into_iter().map(|(cell, _)| cell);

    let Some(first) = visual.next() else {
        return ops;
    };

    ops.push(RenderOp::Detach(first));
    match anchor {
        Some(reference) => ops.push(RenderOp::InsertBefore {
            element: first,
            reference,
        }),
        None => ops.push(RenderOp::Append {
            parent,
            element: first,
        }),
    }

    let mut current = first;
    for cell in visual {
        ops.push(RenderOp::Detach(cell));
        ops.push(RenderOp::InsertAfter {
            element: cell,
            reference: current,
        });
        current = cell;
    }

    ops
}

/// Plan a single element move: detach, then re-insert before `reference`
/// or at the end of `parent`. Emits nothing when there is no landing
/// place (detached element with neither reference nor known parent).
pub(crate) fn move_element_ops(
    element: ElementId,
    reference: Option<ElementId>,
    parent: Option<ElementId>,
    ops: &mut Vec<RenderOp>,
) {
    match (reference, parent) {
        (Some(reference), _) => {
            ops.push(RenderOp::Detach(element));
            ops.push(RenderOp::InsertBefore { element, reference });
        }
        (None, Some(parent)) => {
            ops.push(RenderOp::Detach(element));
            ops.push(RenderOp::Append { parent, element });
        }
        (None, None) => {}
    }
}
