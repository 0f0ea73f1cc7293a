//! Pure permutation updates for column reordering.
//!
//! Both functions operate on a slice of visual positions indexed by
//! registration index. They never touch a render tree; the controller
//! turns their results into [`RenderOp`](crate::tree::RenderOp) lists.
//! Across every call the slice remains a dense permutation of
//! `{0..len-1}` - that is the invariant the whole grid hangs off.

/// Move the column at registration index `selected` to visual position
/// `index`, closing the gap it leaves behind and opening one at the
/// target, in a single pass.
///
/// `index` must already be compensated for the removal shift (see
/// [`compensate_removal`]) and must differ from the column's current
/// position. Returns the registration index of the column that ends up
/// immediately after `selected` (final position `index + 1`), or `None`
/// when `selected` becomes the last column; that successor is the
/// physical insertion reference.
pub(crate) fn shift_before(positions: &mut [usize], selected: usize, index: usize) -> Option<usize> {
    let old = positions[selected];
    debug_assert!(index < positions.len());
    debug_assert_ne!(old, index);

    let mut next = None;
    for (reg, position) in positions.iter_mut().enumerate() {
        if *position > old {
            *position -= 1;
        }
        if *position >= index {
            *position += 1;
        }
        if *position == index + 1 {
            next = Some(reg);
        }
    }
    positions[selected] = index;
    next
}

/// Adjust a raw insertion position for the leftward shift caused by
/// removing the selected column from its current position: everything
/// after it moves left by one before the re-insertion happens.
pub(crate) fn compensate_removal(current: usize, index: usize) -> usize {
    if current < index {
        index - 1
    } else {
        index
    }
}

/// Swap visual positions between the column at registration index
/// `selected` and whichever column currently occupies visual position
/// `index`.
///
/// Returns the registration index of the other column. Exchanging a
/// column with its own position is a harmless self-swap.
pub(crate) fn exchange(positions: &mut [usize], selected: usize, index: usize) -> Option<usize> {
    debug_assert!(index < positions.len());
    let other = positions.iter().position(|&p| p == index)?;
    positions[other] = positions[selected];
    positions[selected] = index;
    Some(other)
}
