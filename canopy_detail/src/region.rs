// Copyright 2025 the Canopy Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Regions: subtree boundaries with a uniform detail level.

use kurbo::Rect;
use smallvec::SmallVec;

use canopy_view2d::DiagramViewport;

use crate::level::DetailLevel;
use crate::options::DetailOptions;
use crate::scene::{SceneModel, absolute_bounds};

/// Identifier for a region in a [`DepthMap`](crate::DepthMap).
///
/// This is a plain index into the depth map's region arena. Regions are only
/// ever discarded wholesale when the depth map is reset for a new model, so
/// ids never go stale while the map they came from is live; ids from before
/// a reset must not be reused.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub struct RegionId(pub(crate) u32);

impl RegionId {
    pub(crate) const fn new(idx: usize) -> Self {
        #[expect(
            clippy::cast_possible_truncation,
            reason = "region arenas are far smaller than u32::MAX"
        )]
        Self(idx as u32)
    }

    pub(crate) const fn idx(self) -> usize {
        self.0 as usize
    }
}

/// One subtree boundary of the scene graph, below which a uniform rendering
/// detail level applies.
///
/// A region wraps the scene element whose bounds define its extent (the
/// *bounding element*) and records its place in the region hierarchy.
/// Classification against a viewport is a pure function of current geometry
/// and the two [`DetailOptions`] thresholds; cascading a level through the
/// hierarchy is the depth map's job, not the region's.
#[derive(Clone, Debug)]
pub struct Region<Id> {
    element: Id,
    parent: Option<RegionId>,
    children: SmallVec<[RegionId; 4]>,
    detail: DetailLevel,
    effective_scale: f64,
}

impl<Id: Copy> Region<Id> {
    pub(crate) fn new(element: Id, parent: Option<RegionId>, effective_scale: f64) -> Self {
        Self {
            element,
            parent,
            children: SmallVec::new(),
            // Until classified, a region renders everything. The depth map
            // classifies every region immediately after creating it.
            detail: DetailLevel::FullDetails,
            effective_scale,
        }
    }

    /// Returns the scene element whose bounds define this region's extent.
    #[must_use]
    pub fn element(&self) -> Id {
        self.element
    }

    /// Returns the enclosing region, or `None` for a root region.
    #[must_use]
    pub fn parent(&self) -> Option<RegionId> {
        self.parent
    }

    /// Returns the immediate child regions, in the order they were
    /// discovered.
    #[must_use]
    pub fn children(&self) -> &[RegionId] {
        &self.children
    }

    pub(crate) fn add_child(&mut self, child: RegionId) {
        self.children.push(child);
    }

    /// Returns the region's current detail level.
    #[must_use]
    pub fn detail(&self) -> DetailLevel {
        self.detail
    }

    /// Assigns the detail level. No cascading happens here.
    pub(crate) fn set_detail(&mut self, level: DetailLevel) {
        self.detail = level;
    }

    /// Returns the accumulated content scale of this region: the product of
    /// the content scales of all region boundaries from the diagram root
    /// down to and including this one.
    ///
    /// A value above `1.0` means the region's internal rendering is
    /// magnified independent of the overall zoom.
    #[must_use]
    pub fn effective_scale(&self) -> f64 {
        self.effective_scale
    }

    /// Returns the region's absolute bounding rectangle in model
    /// coordinates, or `None` if layout has not placed the bounding element
    /// or one of its ancestors yet.
    #[must_use]
    pub fn absolute_bounds<S: SceneModel<Id = Id>>(&self, scene: &S) -> Option<Rect> {
        absolute_bounds(scene, self.element)
    }

    /// Returns `true` iff the region overlaps the visible viewport
    /// rectangle.
    ///
    /// Overlap is boundary-inclusive: rectangles that merely touch count as
    /// in bounds. A region without computable absolute bounds is treated as
    /// visible, so that missing layout information never hides content.
    #[must_use]
    pub fn is_in_bounds<S: SceneModel<Id = Id>>(
        &self,
        scene: &S,
        viewport: &DiagramViewport,
    ) -> bool {
        match self.absolute_bounds(scene) {
            None => true,
            Some(rect) => {
                let visible = viewport.visible_world_rect();
                rect.x0 <= visible.x1
                    && rect.x1 >= visible.x0
                    && rect.y0 <= visible.y1
                    && rect.y1 >= visible.y0
            }
        }
    }

    /// Returns the region's smallest dimension relative to the visible
    /// world extent.
    ///
    /// This is the legibility proxy: a region that is tall and thin on
    /// screen is still too small to read if its width ratio is tiny. A
    /// region without computable bounds compares as always legible.
    #[must_use]
    pub fn size_in_viewport<S: SceneModel<Id = Id>>(
        &self,
        scene: &S,
        viewport: &DiagramViewport,
    ) -> f64 {
        self.absolute_bounds(scene)
            .map_or(f64::INFINITY, |rect| viewport.relative_size(rect))
    }

    /// Classifies this region against the current viewport and thresholds.
    ///
    /// - Not in bounds: [`DetailLevel::OutOfBounds`].
    /// - A root region that is in bounds is always
    ///   [`DetailLevel::FullDetails`], regardless of size.
    /// - Otherwise, full details when the relative size reaches
    ///   `relative_threshold` **or** the accumulated content scale exceeds
    ///   `scale_threshold`; [`DetailLevel::MinimalDetails`] below both.
    ///
    /// This is a pure classification; the caller decides what to do with
    /// the result.
    #[must_use]
    pub fn compute_detail_level<S: SceneModel<Id = Id>>(
        &self,
        scene: &S,
        viewport: &DiagramViewport,
        options: &DetailOptions,
    ) -> DetailLevel {
        if !self.is_in_bounds(scene, viewport) {
            return DetailLevel::OutOfBounds;
        }
        if self.parent.is_none() {
            return DetailLevel::FullDetails;
        }
        if self.size_in_viewport(scene, viewport) >= options.relative_threshold
            || self.effective_scale > options.scale_threshold
        {
            DetailLevel::FullDetails
        } else {
            DetailLevel::MinimalDetails
        }
    }
}
