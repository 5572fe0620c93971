// Copyright 2025 the Canopy Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Scene-tree adapter: drive a [`crate::DepthMap`] from a
//! [`canopy_scene::DiagramTree`].
//!
//! The adapter is a [`crate::SceneModel`] implementation for the tree, so a
//! tree-backed renderer can feed the depth map directly. Elements carrying
//! [`canopy_scene::ElementFlags::CHILD_AREA`] with at least one child become
//! region boundaries.
//!
//! ## Example
//!
//! ```
//! use canopy_detail::{DepthMap, DetailLevel, DetailOptions};
//! use canopy_scene::{DiagramTree, ElementFlags, LocalElement};
//! use canopy_view2d::DiagramViewport;
//! use kurbo::{Rect, Size};
//!
//! let mut tree = DiagramTree::new();
//! let top = tree.insert(
//!     tree.root(),
//!     LocalElement {
//!         bounds: Some(Rect::new(0.0, 0.0, 400.0, 300.0)),
//!         flags: ElementFlags::CHILD_AREA,
//!         ..LocalElement::default()
//!     },
//! );
//! let child = tree.insert(
//!     top,
//!     LocalElement {
//!         bounds: Some(Rect::new(10.0, 10.0, 90.0, 70.0)),
//!         ..LocalElement::default()
//!     },
//! );
//!
//! let viewport = DiagramViewport::new(Size::new(800.0, 600.0));
//! let options = DetailOptions::default();
//! let mut map = DepthMap::new(tree.root());
//! map.update_detail_levels(&tree, &viewport, &options);
//!
//! let region = map
//!     .containing_region(&tree, &viewport, &options, child)
//!     .expect("child sits inside the top-level region");
//! assert_eq!(map.region(region).unwrap().detail(), DetailLevel::FullDetails);
//! ```

use kurbo::Rect;

use canopy_scene::{DiagramTree, ElementId};

use crate::scene::SceneModel;

impl SceneModel for DiagramTree {
    type Id = ElementId;

    fn root(&self) -> ElementId {
        Self::root(self)
    }

    fn parent(&self, element: ElementId) -> Option<ElementId> {
        Self::parent(self, element)
    }

    fn local_bounds(&self, element: ElementId) -> Option<Rect> {
        Self::local_bounds(self, element)
    }

    fn content_scale(&self, element: ElementId) -> f64 {
        Self::content_scale(self, element)
    }

    fn provides_region(&self, element: ElementId) -> bool {
        Self::provides_region(self, element)
    }
}

#[cfg(test)]
mod tests {
    use crate::depth_map::DepthMap;
    use crate::level::DetailLevel;
    use crate::options::DetailOptions;
    use canopy_scene::{DiagramTree, ElementFlags, LocalElement};
    use canopy_view2d::DiagramViewport;
    use kurbo::{Rect, Size};

    #[test]
    fn child_area_flag_turns_into_nested_regions() {
        let mut tree = DiagramTree::new();
        let outer = tree.insert(
            tree.root(),
            LocalElement {
                bounds: Some(Rect::new(0.0, 0.0, 1000.0, 1000.0)),
                flags: ElementFlags::CHILD_AREA,
                ..LocalElement::default()
            },
        );
        let inner = tree.insert(
            outer,
            LocalElement {
                bounds: Some(Rect::new(100.0, 100.0, 150.0, 150.0)),
                flags: ElementFlags::CHILD_AREA,
                ..LocalElement::default()
            },
        );
        // The inner element only becomes a boundary once it has children.
        let leaf = tree.insert(inner, LocalElement::default());

        let viewport = DiagramViewport::new(Size::new(1000.0, 1000.0));
        let options = DetailOptions::default();
        let mut map = DepthMap::new(tree.root());

        let outer_region = map
            .providing_region(&tree, &viewport, &options, outer)
            .unwrap();
        let inner_region = map
            .providing_region(&tree, &viewport, &options, inner)
            .unwrap();
        assert_eq!(map.region(inner_region).unwrap().parent(), Some(outer_region));
        assert_eq!(
            map.region(inner_region).unwrap().detail(),
            DetailLevel::MinimalDetails
        );
        assert_eq!(
            map.containing_region(&tree, &viewport, &options, leaf),
            Some(inner_region)
        );
    }

    #[test]
    fn flagged_element_without_children_is_not_a_boundary() {
        let mut tree = DiagramTree::new();
        let top = tree.insert(
            tree.root(),
            LocalElement {
                bounds: Some(Rect::new(0.0, 0.0, 400.0, 400.0)),
                flags: ElementFlags::CHILD_AREA,
                ..LocalElement::default()
            },
        );
        let empty = tree.insert(
            top,
            LocalElement {
                bounds: Some(Rect::new(10.0, 10.0, 60.0, 60.0)),
                flags: ElementFlags::CHILD_AREA,
                ..LocalElement::default()
            },
        );

        let viewport = DiagramViewport::new(Size::new(800.0, 600.0));
        let options = DetailOptions::default();
        let mut map = DepthMap::new(tree.root());

        assert_eq!(map.providing_region(&tree, &viewport, &options, empty), None);
        let top_region = map
            .providing_region(&tree, &viewport, &options, top)
            .unwrap();
        assert_eq!(
            map.containing_region(&tree, &viewport, &options, empty),
            Some(top_region)
        );
    }
}
