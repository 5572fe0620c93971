// Copyright 2025 the Canopy Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Canopy Detail: viewport-driven detail levels for nested diagrams.
//!
//! Large diagrams nest child diagrams inside their parents, and at most
//! zoom levels the innermost ones are too small to read. This crate decides,
//! per nested area, whether its contents are worth drawing right now:
//!
//! - **Regions** ([`Region`], [`RegionId`]): one per element that hosts a
//!   child diagram, holding its current [`DetailLevel`] and accumulated
//!   content scale.
//! - **The depth map** ([`DepthMap`]): lazily discovers regions as a render
//!   walk first visits elements, memoizes the element-to-region mapping,
//!   and reclassifies regions when the viewport moves. Between frames it
//!   remembers which regions straddle a detail boundary, so steady-state
//!   scrolling rechecks only that boundary.
//! - **Classification inputs** ([`DetailOptions`],
//!   [`canopy_view2d::DiagramViewport`]): a legibility threshold on a
//!   region's size relative to the visible world, and a floor on its
//!   accumulated scale.
//! - **The render gate** ([`RenderDecision`]): the one question a renderer
//!   asks per element, "should I draw this element's children?", with the
//!   skipped answers recorded for hit testing
//!   ([`DepthMap::children_omitted`]).
//!
//! The crate is headless and scene-agnostic: hosts describe their model
//! through the [`SceneModel`] trait. A ready-made implementation for
//! [`canopy_scene::DiagramTree`] lives in [`adapters::scene_tree`] behind
//! the `scene_tree_adapter` feature.
//!
//! ## Quick Start
//!
//! ```rust
//! use canopy_detail::{DepthMap, DetailOptions, RenderDecision, SceneModel};
//! use canopy_view2d::DiagramViewport;
//! use kurbo::{Rect, Size};
//!
//! // A minimal model: root (0) holding a region element (1) with one
//! // child (2).
//! struct Model;
//! impl SceneModel for Model {
//!     type Id = u32;
//!     fn root(&self) -> u32 {
//!         0
//!     }
//!     fn parent(&self, element: u32) -> Option<u32> {
//!         match element {
//!             0 => None,
//!             1 => Some(0),
//!             _ => Some(1),
//!         }
//!     }
//!     fn local_bounds(&self, element: u32) -> Option<Rect> {
//!         match element {
//!             0 => None,
//!             1 => Some(Rect::new(0.0, 0.0, 400.0, 300.0)),
//!             _ => Some(Rect::new(20.0, 20.0, 120.0, 80.0)),
//!         }
//!     }
//!     fn provides_region(&self, element: u32) -> bool {
//!         element == 1
//!     }
//! }
//!
//! let scene = Model;
//! let viewport = DiagramViewport::new(Size::new(800.0, 600.0));
//! let options = DetailOptions::default();
//! let mut map = DepthMap::new(scene.root());
//!
//! // Once per frame, then gate each element during the render walk.
//! map.update_detail_levels(&scene, &viewport, &options);
//! assert_eq!(
//!     map.render_gate(&scene, &viewport, &options, 2),
//!     RenderDecision::Render
//! );
//! ```
//!
//! ## Features
//!
//! - `std` (enabled by default): use the Rust standard library.
//! - `libm`: required in `no_std` configurations without `std` math.
//! - `scene_tree_adapter`: [`SceneModel`] for [`canopy_scene::DiagramTree`].

#![no_std]

extern crate alloc;

pub mod adapters;
mod depth_map;
mod level;
mod options;
mod region;
mod render;
mod scene;

pub use depth_map::{DepthMap, DepthMapDebugInfo, ElementRegions};
pub use level::DetailLevel;
pub use options::DetailOptions;
pub use region::{Region, RegionId};
pub use render::RenderDecision;
pub use scene::{SceneModel, absolute_bounds};
