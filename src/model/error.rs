//! Error types for the grid core.
//!
//! The original UI layer this design descends from reported every failure
//! as a silent no-op or a console warning so bad input could never break
//! rendering. Here the same failures are structured [`GridError`] values
//! instead: callers that want the lenient behavior ignore the `Err`, and
//! callers that want strictness finally have something to match on. No
//! operation mutates grid state when it returns an error, so the `map_to`
//! permutation invariant survives every failure path.

use crate::model::identifiers::{ColumnId, RowKey};
use thiserror::Error;

/// Failure modes of grid operations.
///
/// All variants are recoverable. The controller guarantees that an `Err`
/// return left the column permutation and the row registry untouched.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GridError {
    /// A reorder or exchange addressed a visual position outside the
    /// current column range.
    ///
    /// `move_before` accepts `0..=count` (the end position is a valid
    /// insertion point); `exchange_with` accepts `0..count`.
    #[error("visual position {index} out of range for {count} columns")]
    PositionOutOfRange {
        /// The rejected visual position.
        index: usize,
        /// Number of registered columns at the time of the call.
        count: usize,
    },

    /// More cells were registered for one row than there are columns.
    ///
    /// Nothing was registered; the caller must not install teardown hooks
    /// for the rejected cell. This is the structured form of the
    /// original's `-1` sentinel.
    #[error("row already has a cell for each of the {columns} columns")]
    RowOverflow {
        /// Number of registered columns, which is also the row's capacity.
        columns: usize,
    },

    /// An operation referenced a row with no registered cells.
    #[error("no cells registered for {0}")]
    UnknownRow(RowKey),

    /// An operation referenced a column id that was never registered.
    #[error("unknown column {0}")]
    UnknownColumn(ColumnId),

    /// `apply_layout` was called with an empty descriptor list.
    /// Nothing was mutated.
    #[error("empty layout: nothing to apply")]
    EmptyLayout,
}
