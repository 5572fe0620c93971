// Copyright 2025 the Canopy Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The diagram scene tree.

use alloc::vec::Vec;
use kurbo::Rect;
use smallvec::SmallVec;

use crate::types::{ElementFlags, ElementId, LocalElement};

#[derive(Clone, Debug)]
struct Slot {
    local: LocalElement,
    parent: Option<ElementId>,
    children: SmallVec<[ElementId; 4]>,
}

/// An arena-backed diagram scene tree.
///
/// The tree always contains a synthetic model root (see [`DiagramTree::root`])
/// standing for the diagram model itself. Drawn elements are inserted below
/// it with [`DiagramTree::insert`]; the insertion order of siblings is their
/// rendering order.
///
/// See the [crate docs](crate) for the overall model.
#[derive(Clone, Debug)]
pub struct DiagramTree {
    slots: Vec<Slot>,
}

impl Default for DiagramTree {
    fn default() -> Self {
        Self::new()
    }
}

impl DiagramTree {
    /// Creates a tree containing only the model root.
    #[must_use]
    pub fn new() -> Self {
        Self {
            slots: alloc::vec![Slot {
                local: LocalElement::default(),
                parent: None,
                children: SmallVec::new(),
            }],
        }
    }

    /// Returns the synthetic model root.
    ///
    /// The root is not a drawn element: it has no bounds and no parent. Its
    /// id is stable for the lifetime of the tree.
    #[must_use]
    pub fn root(&self) -> ElementId {
        ElementId::new(0)
    }

    /// Inserts a new element under `parent` and returns its id.
    ///
    /// Siblings keep insertion order.
    ///
    /// # Panics
    ///
    /// Panics if `parent` does not refer to an element of this tree.
    pub fn insert(&mut self, parent: ElementId, local: LocalElement) -> ElementId {
        assert!(
            self.contains(parent),
            "parent id does not belong to this tree"
        );
        let id = ElementId::new(self.slots.len());
        self.slots.push(Slot {
            local,
            parent: Some(parent),
            children: SmallVec::new(),
        });
        self.slots[parent.idx()].children.push(id);
        id
    }

    /// Returns the number of elements, including the model root.
    #[must_use]
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    /// Returns `true` if the tree holds only the model root.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.slots.len() == 1
    }

    /// Returns `true` if `id` refers to an element of this tree.
    #[must_use]
    pub fn contains(&self, id: ElementId) -> bool {
        id.idx() < self.slots.len()
    }

    /// Returns the parent of `id`, or `None` for the model root or an
    /// unknown id.
    #[must_use]
    pub fn parent(&self, id: ElementId) -> Option<ElementId> {
        self.slots.get(id.idx()).and_then(|s| s.parent)
    }

    /// Returns the children of `id` in rendering order.
    #[must_use]
    pub fn children_of(&self, id: ElementId) -> &[ElementId] {
        self.slots
            .get(id.idx())
            .map(|s| s.children.as_slice())
            .unwrap_or(&[])
    }

    /// Returns the local data of `id`.
    #[must_use]
    pub fn local(&self, id: ElementId) -> Option<&LocalElement> {
        self.slots.get(id.idx()).map(|s| &s.local)
    }

    /// Returns the local data of `id` for mutation.
    ///
    /// Hosts use this to feed layout results (bounds, content scale) back
    /// into the tree.
    #[must_use]
    pub fn local_mut(&mut self, id: ElementId) -> Option<&mut LocalElement> {
        self.slots.get_mut(id.idx()).map(|s| &mut s.local)
    }

    /// Returns the local bounds of `id`, relative to its parent's origin.
    #[must_use]
    pub fn local_bounds(&self, id: ElementId) -> Option<Rect> {
        self.local(id).and_then(|l| l.bounds)
    }

    /// Returns the content scale of `id` (`1.0` for unknown ids).
    #[must_use]
    pub fn content_scale(&self, id: ElementId) -> f64 {
        self.local(id).map_or(1.0, |l| l.content_scale)
    }

    /// Returns `true` if `id` is a region boundary: its rendering describes
    /// a child area and it has at least one child.
    #[must_use]
    pub fn provides_region(&self, id: ElementId) -> bool {
        self.slots.get(id.idx()).is_some_and(|s| {
            s.local.flags.contains(ElementFlags::CHILD_AREA) && !s.children.is_empty()
        })
    }

    /// Returns the absolute bounds of `id` in model coordinates.
    ///
    /// The element's local origin is offset by the origins of all ancestors
    /// below the model root. Returns `None` if the element, or any such
    /// ancestor, has no bounds yet.
    #[must_use]
    pub fn absolute_bounds(&self, id: ElementId) -> Option<Rect> {
        let mut rect = self.local_bounds(id)?;
        let mut cursor = self.parent(id)?;
        while let Some(parent) = self.parent(cursor) {
            let parent_bounds = self.local_bounds(cursor)?;
            rect = rect + parent_bounds.origin().to_vec2();
            cursor = parent;
        }
        Some(rect)
    }

    /// Returns a depth-first iterator over `id` and all its descendants.
    ///
    /// Children are visited in rendering order.
    #[must_use]
    pub fn descendants(&self, id: ElementId) -> Descendants<'_> {
        let mut stack = Vec::new();
        if self.contains(id) {
            stack.push(id);
        }
        Descendants { tree: self, stack }
    }
}

/// Depth-first traversal over a subtree of a [`DiagramTree`].
///
/// Returned by [`DiagramTree::descendants`]; yields the start element first.
#[derive(Debug)]
pub struct Descendants<'a> {
    tree: &'a DiagramTree,
    stack: Vec<ElementId>,
}

impl Iterator for Descendants<'_> {
    type Item = ElementId;

    fn next(&mut self) -> Option<ElementId> {
        let id = self.stack.pop()?;
        // Push children in reverse order so the stack pops them in
        // rendering order.
        for &child in self.tree.children_of(id).iter().rev() {
            self.stack.push(child);
        }
        Some(id)
    }
}
