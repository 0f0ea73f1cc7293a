//! In-memory [`VisualTree`] for tests and benchmarks.
//!
//! `MockTree` models exactly what the grid core relies on: ordered
//! children per parent, inline style maps, and settable outer boxes for
//! hit-testing. It is published (not test-gated) so host crates can
//! drive their own grid tests with it, the way terminal UIs test against
//! an in-memory backend instead of a real terminal.

use super::{ElementId, ElementRect, VisualTree};
use std::collections::{BTreeMap, HashMap};

#[derive(Debug, Default, Clone)]
struct MockElement {
    style: BTreeMap<String, String>,
    rect: ElementRect,
}

/// In-memory render tree with ordered children and settable geometry.
#[derive(Debug, Default)]
pub struct MockTree {
    elements: HashMap<ElementId, MockElement>,
    children: HashMap<ElementId, Vec<ElementId>>,
    parents: HashMap<ElementId, ElementId>,
    next_id: u64,
}

impl MockTree {
    /// Create an empty tree.
    pub fn new() -> Self {
        Self::default()
    }

    /// Allocate a detached element.
    pub fn create_element(&mut self) -> ElementId {
        let id = ElementId::new(self.next_id);
        self.next_id += 1;
        self.elements.insert(id, MockElement::default());
        id
    }

    /// Allocate an element and append it to `parent`.
    pub fn create_child(&mut self, parent: ElementId) -> ElementId {
        let id = self.create_element();
        self.append(parent, id);
        id
    }

    /// Set the outer box reported by [`VisualTree::bounds`].
    pub fn set_bounds(&mut self, element: ElementId, rect: ElementRect) {
        if let Some(el) = self.elements.get_mut(&element) {
            el.rect = rect;
        }
    }

    /// Ordered children of `parent`.
    pub fn children(&self, parent: ElementId) -> &[ElementId] {
        self.children.get(&parent).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Whether `element` currently has a parent.
    pub fn is_attached(&self, element: ElementId) -> bool {
        self.parents.contains_key(&element)
    }

    fn position(&self, element: ElementId) -> Option<(ElementId, usize)> {
        let parent = *self.parents.get(&element)?;
        let index = self
            .children
            .get(&parent)?
            .iter()
            .position(|&c| c == element)?;
        Some((parent, index))
    }

    fn attach_at(&mut self, parent: ElementId, index: usize, element: ElementId) {
        self.detach(element);
        self.children.entry(parent).or_default().insert(index, element);
        self.parents.insert(element, parent);
    }
}

impl VisualTree for MockTree {
    fn detach(&mut self, element: ElementId) {
        if let Some((parent, index)) = self.position(element) {
            if let Some(siblings) = self.children.get_mut(&parent) {
                siblings.remove(index);
            }
            self.parents.remove(&element);
        }
    }

    fn insert_before(&mut self, element: ElementId, reference: ElementId) {
        if let Some((parent, index)) = self.position(reference) {
            self.attach_at(parent, index, element);
        }
    }

    fn insert_after(&mut self, element: ElementId, reference: ElementId) {
        if let Some((parent, index)) = self.position(reference) {
            self.attach_at(parent, index + 1, element);
        }
    }

    fn append(&mut self, parent: ElementId, element: ElementId) {
        self.detach(element);
        self.children.entry(parent).or_default().push(element);
        self.parents.insert(element, parent);
    }

    fn parent(&self, element: ElementId) -> Option<ElementId> {
        self.parents.get(&element).copied()
    }

    fn next_sibling(&self, element: ElementId) -> Option<ElementId> {
        let (parent, index) = self.position(element)?;
        self.children.get(&parent)?.get(index + 1).copied()
    }

    fn set_style(&mut self, element: ElementId, name: &str, value: &str) {
        if let Some(el) = self.elements.get_mut(&element) {
            el.style.insert(name.to_string(), value.to_string());
        }
    }

    fn style(&self, element: ElementId, name: &str) -> Option<String> {
        self.elements.get(&element)?.style.get(name).cloned()
    }

    fn clear_style(&mut self, element: ElementId) {
        if let Some(el) = self.elements.get_mut(&element) {
            el.style.clear();
        }
    }

    fn bounds(&self, element: ElementId) -> ElementRect {
        self.elements
            .get(&element)
            .map(|el| el.rect)
            .unwrap_or_default()
    }
}
