// Copyright 2025 the Canopy Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Public types for the scene tree: element identifiers, kinds, flags, and
//! local element data.

use kurbo::Rect;

/// Identifier for an element in a [`DiagramTree`](crate::DiagramTree).
///
/// This is a small, copyable handle: an index into the tree's element arena.
/// Ids are only meaningful for the tree that produced them.
///
/// Unlike generational handles, an `ElementId` never goes stale: the tree is
/// insert-only and is replaced wholesale when a new diagram model is loaded,
/// so element slots are never reused within one tree's lifetime.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub struct ElementId(pub(crate) u32);

impl ElementId {
    pub(crate) const fn new(idx: usize) -> Self {
        #[expect(
            clippy::cast_possible_truncation,
            reason = "element arenas are far smaller than u32::MAX"
        )]
        Self(idx as u32)
    }

    pub(crate) const fn idx(self) -> usize {
        self.0 as usize
    }
}

/// What kind of diagram element this is.
///
/// The detail-level manager treats all kinds uniformly; the kind exists for
/// the per-kind render hooks that sit on top of it, which dispatch to
/// different shape-drawing code but share one gating decision.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, Default)]
pub enum ElementKind {
    /// A node with its own shape and, possibly, a child area.
    #[default]
    Node,
    /// A connection point attached to a node.
    Port,
    /// A text label attached to a node, port, or edge.
    Label,
    /// An edge between two elements.
    Edge,
}

bitflags::bitflags! {
    /// Element flags describing rendering-relevant structure.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
    pub struct ElementFlags: u8 {
        /// The element's rendering describes a child area: a container whose
        /// children are drawn inside it. Together with having at least one
        /// child, this makes the element a region boundary.
        const CHILD_AREA = 0b0000_0001;
    }
}

/// Local data for one element.
///
/// Bounds are expressed relative to the parent element's origin, in model
/// coordinates. `bounds` is `None` while layout has not produced a placement
/// yet; consumers must treat missing bounds conservatively (the detail
/// manager treats such elements as visible rather than dropping them).
#[derive(Clone, Debug)]
pub struct LocalElement {
    /// Local bounds relative to the parent origin, if layout has placed the
    /// element.
    pub bounds: Option<Rect>,
    /// Magnification the element applies to its child area, relative to the
    /// parent's coordinate space. `1.0` for elements that do not rescale
    /// their content.
    pub content_scale: f64,
    /// The element kind.
    pub kind: ElementKind,
    /// Structural flags.
    pub flags: ElementFlags,
}

impl Default for LocalElement {
    fn default() -> Self {
        Self {
            bounds: None,
            content_scale: 1.0,
            kind: ElementKind::default(),
            flags: ElementFlags::empty(),
        }
    }
}
