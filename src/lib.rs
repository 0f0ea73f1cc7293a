//! scroll-grid
//!
//! Column-management core for virtualized, scrollable data grids.
//!
//! A host scroll viewport renders rows whose cells this crate reorders,
//! restyles and hit-tests as logical *columns*, independent of the
//! physical order in which the cells were attached. The host owns
//! virtualization (which rows exist, when their render callbacks fire)
//! and the concrete render tree; it implements [`tree::VisualTree`] and
//! invokes [`grid::GridController::transform`] for a row after any
//! change to that row's mounted cell set.
//!
//! Architecture follows a pure core / impure shell split: permutation
//! bookkeeping and synchronization planning are pure and emit
//! [`tree::RenderOp`] lists; executing them against a real UI is the
//! host's only impure duty. [`tree::MockTree`] is a published in-memory
//! tree for tests.

pub mod adapter;
pub mod grid;
pub mod logging;
pub mod model;
pub mod tree;

pub use adapter::{ColumnAdapter, GridAdapter};
pub use grid::GridController;
pub use model::{Column, ColumnId, ColumnLayout, GridError, GridLayout, RowKey, Slot, StyleMap};
pub use tree::{ElementId, ElementRect, MockTree, RenderOp, VisualTree};

#[cfg(test)]
mod test_harness;

#[cfg(test)]
mod tests;
