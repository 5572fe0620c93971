// Copyright 2025 the Canopy Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Per-element gate a render walk consults before descending into an
//! element's children.

use core::hash::Hash;

use canopy_view2d::DiagramViewport;

use crate::depth_map::DepthMap;
use crate::options::DetailOptions;
use crate::scene::SceneModel;

/// Whether a render walk should descend into an element's children.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum RenderDecision {
    /// Render the children as usual.
    Render,
    /// Skip the children; the containing region is not at full detail.
    Skip,
}

impl RenderDecision {
    /// Returns `true` for [`RenderDecision::Render`].
    #[must_use]
    pub fn should_render(self) -> bool {
        matches!(self, Self::Render)
    }
}

impl<Id> DepthMap<Id>
where
    Id: Copy + Eq + Hash,
{
    /// Decides whether a render walk should draw the children of
    /// `element`.
    ///
    /// Children render only while the element's containing region is at
    /// full detail; run [`DepthMap::update_detail_levels`] first so that
    /// judgment reflects the current viewport. Elements outside any region
    /// (the root level) always render. The decision is also recorded, so
    /// [`DepthMap::children_omitted`] can later report which elements were
    /// drawn collapsed.
    pub fn render_gate<S: SceneModel<Id = Id>>(
        &mut self,
        scene: &S,
        viewport: &DiagramViewport,
        options: &DetailOptions,
        element: Id,
    ) -> RenderDecision {
        let record = self.resolve(scene, viewport, options, element);

        let full = match record.containing {
            Some(containing) => self
                .region(containing)
                .is_some_and(|region| region.detail().is_full()),
            None => true,
        };

        if full {
            self.note_rendered(element);
            RenderDecision::Render
        } else {
            self.note_omitted(element);
            RenderDecision::Skip
        }
    }

    /// Returns `true` if the last gate decision for `element` skipped its
    /// children.
    ///
    /// Hit testing and text search use this to treat an element as
    /// collapsed instead of probing children that were never drawn.
    #[must_use]
    pub fn children_omitted(&self, element: Id) -> bool {
        self.omitted_contains(element)
    }
}
