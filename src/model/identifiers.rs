//! Core identifier newtypes.
//!
//! Columns, slots and rows are addressed through distinct newtypes so a
//! registration index can never be confused with a visual position or a
//! row key at a call site.

use std::fmt;

/// Stable identity of a column, assigned at registration time in
/// registration order. Never reused or reassigned.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ColumnId(usize);

impl ColumnId {
    /// Create a `ColumnId` from a raw 0-based registration index.
    pub fn new(raw: usize) -> Self {
        Self(raw)
    }

    /// Get the raw index value.
    pub fn get(&self) -> usize {
        self.0
    }
}

impl fmt::Display for ColumnId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "col{}", self.0)
    }
}

/// Registration index of a column, and of the cell belonging to that
/// column within a row's cell sequence. Independent of visual order:
/// a row's cell at slot `i` belongs to the column registered `i`-th,
/// not to the column currently displayed `i`-th.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Slot(usize);

impl Slot {
    /// Create a `Slot` from a raw 0-based registration index.
    pub fn new(raw: usize) -> Self {
        Self(raw)
    }

    /// Get the raw index value.
    pub fn get(&self) -> usize {
        self.0
    }
}

impl fmt::Display for Slot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "slot{}", self.0)
    }
}

/// Opaque identity of one virtualized row's render context, supplied by
/// the host virtualization engine. The grid core never interprets the
/// value; it only keys the row-cell registry with it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RowKey(u64);

impl RowKey {
    /// Create a `RowKey` from a host-chosen raw value.
    pub fn new(raw: u64) -> Self {
        Self(raw)
    }

    /// Get the raw value.
    pub fn get(&self) -> u64 {
        self.0
    }
}

impl fmt::Display for RowKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "row{}", self.0)
    }
}
