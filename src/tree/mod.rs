//! The visual-element seam between the grid core and the host renderer.
//!
//! The core never touches a concrete render tree. Permutation and
//! synchronization logic produce [`RenderOp`] instruction lists over
//! opaque [`ElementId`] handles; executing them (and answering geometry
//! and style queries) is the host's job via the [`VisualTree`] trait.
//! This keeps every reorder algorithm testable without any UI layer.
//!
//! [`MockTree`] is a complete in-memory implementation published for
//! test suites (both this crate's and hosts').

pub mod mock;

pub use mock::MockTree;

use std::fmt;

/// Opaque handle to a rendered node (header cell, row cell, or any
/// container). Allocation and meaning of the value belong to the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ElementId(u64);

impl ElementId {
    /// Create an `ElementId` from a host-chosen raw value.
    pub fn new(raw: u64) -> Self {
        Self(raw)
    }

    /// Get the raw value.
    pub fn get(&self) -> u64 {
        self.0
    }
}

impl fmt::Display for ElementId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "el{}", self.0)
    }
}

/// Margin-inclusive outer box of a rendered element, in the coordinate
/// space used by the host's geometry queries.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ElementRect {
    /// Left edge offset.
    pub left: f64,
    /// Top edge offset.
    pub top: f64,
    /// Outer width, margins included.
    pub width: f64,
    /// Outer height, margins included.
    pub height: f64,
}

impl ElementRect {
    /// Create a rect from offset and outer size.
    pub fn new(left: f64, top: f64, width: f64, height: f64) -> Self {
        Self {
            left,
            top,
            width,
            height,
        }
    }

    /// Whether the point lies within the box. Bounds are inclusive on
    /// all four edges, matching the hit-test containment rule.
    pub fn contains(&self, x: f64, y: f64) -> bool {
        x >= self.left
            && x <= self.left + self.width
            && y >= self.top
            && y <= self.top + self.height
    }
}

/// One instruction for the host render tree.
///
/// Reorder and synchronization planners emit these instead of calling
/// view primitives directly, so the permutation logic stays pure.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RenderOp {
    /// Remove the element from its current parent.
    Detach(ElementId),
    /// Insert a detached element immediately before `reference`.
    InsertBefore {
        /// Element to insert.
        element: ElementId,
        /// Attached element to insert in front of.
        reference: ElementId,
    },
    /// Insert a detached element immediately after `reference`.
    InsertAfter {
        /// Element to insert.
        element: ElementId,
        /// Attached element to insert behind.
        reference: ElementId,
    },
    /// Append a detached element as the last child of `parent`.
    Append {
        /// Parent container.
        parent: ElementId,
        /// Element to append.
        element: ElementId,
    },
    /// Set a style property on the element.
    SetStyle {
        /// Target element.
        element: ElementId,
        /// Style property name.
        name: String,
        /// Style property value.
        value: String,
    },
}

/// Host-implemented view of the render tree.
///
/// Structural methods mirror the minimal detach/insert/append vocabulary
/// of the synchronization algorithms; query methods supply the sibling,
/// style and geometry facts those algorithms and hit-testing need.
pub trait VisualTree {
    /// Remove `element` from its parent, keeping it alive for
    /// re-insertion.
    fn detach(&mut self, element: ElementId);

    /// Insert a detached `element` immediately before `reference`.
    fn insert_before(&mut self, element: ElementId, reference: ElementId);

    /// Insert a detached `element` immediately after `reference`.
    fn insert_after(&mut self, element: ElementId, reference: ElementId);

    /// Append a detached `element` as the last child of `parent`.
    fn append(&mut self, parent: ElementId, element: ElementId);

    /// Parent of `element`, if attached.
    fn parent(&self, element: ElementId) -> Option<ElementId>;

    /// Next sibling of `element`, if any.
    fn next_sibling(&self, element: ElementId) -> Option<ElementId>;

    /// Set a style property on `element`.
    fn set_style(&mut self, element: ElementId, name: &str, value: &str);

    /// Current rendered value of a style property on `element`.
    fn style(&self, element: ElementId, name: &str) -> Option<String>;

    /// Remove all inline style from `element`.
    fn clear_style(&mut self, element: ElementId);

    /// Margin-inclusive outer box of `element`.
    fn bounds(&self, element: ElementId) -> ElementRect;
}

/// Execute a planned instruction list against a tree, in order.
pub fn apply<T: VisualTree + ?Sized>(tree: &mut T, ops: &[RenderOp]) {
    for op in ops {
        match op {
            RenderOp::Detach(element) => tree.detach(*element),
            RenderOp::InsertBefore { element, reference } => {
                tree.insert_before(*element, *reference)
            }
            RenderOp::InsertAfter { element, reference } => {
                tree.insert_after(*element, *reference)
            }
            RenderOp::Append { parent, element } => tree.append(*parent, *element),
            RenderOp::SetStyle {
                element,
                name,
                value,
            } => tree.set_style(*element, name, value),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rect_contains_interior_point() {
        let rect = ElementRect::new(10.0, 20.0, 100.0, 30.0);
        assert!(rect.contains(50.0, 35.0));
    }

    #[test]
    fn rect_bounds_are_inclusive() {
        let rect = ElementRect::new(10.0, 20.0, 100.0, 30.0);
        assert!(rect.contains(10.0, 20.0));
        assert!(rect.contains(110.0, 50.0));
    }

    #[test]
    fn rect_excludes_points_past_the_edges() {
        let rect = ElementRect::new(10.0, 20.0, 100.0, 30.0);
        assert!(!rect.contains(9.9, 35.0));
        assert!(!rect.contains(110.1, 35.0));
        assert!(!rect.contains(50.0, 19.9));
        assert!(!rect.contains(50.0, 50.1));
    }

    #[test]
    fn apply_executes_ops_in_order() {
        let mut tree = MockTree::new();
        let parent = tree.create_element();
        let a = tree.create_child(parent);
        let b = tree.create_child(parent);

        let ops = vec![
            RenderOp::Detach(a),
            RenderOp::InsertAfter {
                element: a,
                reference: b,
            },
            RenderOp::SetStyle {
                element: a,
                name: "width".into(),
                value: "10px".into(),
            },
        ];
        apply(&mut tree, &ops);

        assert_eq!(tree.children(parent), &[b, a]);
        assert_eq!(tree.style(a, "width").as_deref(), Some("10px"));
    }
}
