// Copyright 2025 the Canopy Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The narrow interface over an external scene graph.

use core::fmt::Debug;
use core::hash::Hash;

use kurbo::Rect;

/// Read-only view of a diagram scene graph, as consumed by the detail-level
/// manager.
///
/// The scene is owned elsewhere (typically by the host's diagram model);
/// this trait exposes just enough structure to build the region hierarchy:
/// ancestry, placement, content scale, and the region-boundary predicate.
/// The manager never mutates the scene and stores only element ids.
///
/// Hosts can implement this over any model with stable, copyable element
/// ids. `canopy_scene::DiagramTree` ships an implementation behind the
/// `scene_tree_adapter` feature.
pub trait SceneModel {
    /// Stable identifier for one scene element.
    type Id: Copy + Eq + Hash + Debug;

    /// The model root. It stands for the diagram itself and is not a drawn
    /// element; every drawn element is a strict descendant of it.
    fn root(&self) -> Self::Id;

    /// The parent of `element`, or `None` for the model root.
    fn parent(&self, element: Self::Id) -> Option<Self::Id>;

    /// The element's bounds relative to its parent's origin, in model
    /// coordinates, or `None` while layout has not placed it.
    fn local_bounds(&self, element: Self::Id) -> Option<Rect>;

    /// The magnification the element applies to its child area, relative to
    /// the parent's coordinate space.
    ///
    /// The default of `1.0` suits scenes that never rescale content.
    fn content_scale(&self, _element: Self::Id) -> f64 {
        1.0
    }

    /// Returns `true` if the element's rendering describes a non-empty
    /// child area, making it a region boundary for its descendants.
    fn provides_region(&self, element: Self::Id) -> bool;
}

/// Computes the absolute bounds of `element` in model coordinates.
///
/// The element's local origin is offset by the origins of all ancestors
/// below the model root. Returns `None` if the element, or any such
/// ancestor, has no bounds yet; callers must treat that conservatively
/// (missing layout information never hides content).
#[must_use]
pub fn absolute_bounds<S: SceneModel>(scene: &S, element: S::Id) -> Option<Rect> {
    let mut rect = scene.local_bounds(element)?;
    let mut cursor = scene.parent(element)?;
    while let Some(parent) = scene.parent(cursor) {
        let bounds = scene.local_bounds(cursor)?;
        rect = rect + bounds.origin().to_vec2();
        cursor = parent;
    }
    Some(rect)
}

#[cfg(test)]
mod tests {
    use super::{SceneModel, absolute_bounds};
    use alloc::vec::Vec;
    use kurbo::Rect;

    /// Minimal parent-pointer scene: element 0 is the root.
    struct Chain {
        parents: Vec<Option<u32>>,
        bounds: Vec<Option<Rect>>,
    }

    impl SceneModel for Chain {
        type Id = u32;

        fn root(&self) -> u32 {
            0
        }

        fn parent(&self, element: u32) -> Option<u32> {
            self.parents[element as usize]
        }

        fn local_bounds(&self, element: u32) -> Option<Rect> {
            self.bounds[element as usize]
        }

        fn provides_region(&self, _element: u32) -> bool {
            false
        }
    }

    #[test]
    fn absolute_bounds_offset_by_ancestors_below_the_root() {
        let scene = Chain {
            parents: alloc::vec![None, Some(0), Some(1), Some(2)],
            bounds: alloc::vec![
                None,
                Some(Rect::new(100.0, 100.0, 200.0, 200.0)),
                Some(Rect::new(10.0, 10.0, 50.0, 50.0)),
                Some(Rect::new(1.0, 1.0, 5.0, 5.0)),
            ],
        };
        assert_eq!(
            absolute_bounds(&scene, 3),
            Some(Rect::new(111.0, 111.0, 115.0, 115.0))
        );
        assert_eq!(
            absolute_bounds(&scene, 1),
            Some(Rect::new(100.0, 100.0, 200.0, 200.0))
        );
    }

    #[test]
    fn missing_placement_anywhere_yields_none() {
        let scene = Chain {
            parents: alloc::vec![None, Some(0), Some(1)],
            bounds: alloc::vec![None, None, Some(Rect::new(0.0, 0.0, 5.0, 5.0))],
        };
        assert_eq!(absolute_bounds(&scene, 1), None);
        assert_eq!(absolute_bounds(&scene, 2), None);
    }
}
