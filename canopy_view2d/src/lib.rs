// Copyright 2025 the Canopy Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=canopy_view2d --heading-base-level=0

//! Canopy View 2D: the diagram viewport model.
//!
//! This crate provides a small, headless model of the window through which a
//! diagram is seen: a scroll offset in world coordinates, a uniform zoom
//! factor, and the canvas size in device pixels. The world-space rectangle
//! currently visible is the scroll offset extended by `canvas size / zoom`.
//!
//! It focuses on:
//! - Viewport state (scroll + zoom + canvas size).
//! - Coordinate conversion between world and view/device (pixel) space.
//! - Pan, anchor-stable zoom, and view fitting.
//! - The relative on-screen size of world rectangles, which the detail-level
//!   manager in `canopy_detail` uses as its legibility proxy.
//!
//! It does **not** own any scene graph or rendering backend. Callers are
//! expected to maintain their own scene tree, wire input events into pan and
//! zoom operations at a higher layer, and hand the viewport to whatever
//! consumes it per frame.
//!
//! ## Minimal example
//!
//! ```rust
//! use kurbo::{Point, Size};
//! use canopy_view2d::DiagramViewport;
//!
//! // 800x600 canvas, looking at the world origin at 1:1.
//! let mut view = DiagramViewport::new(Size::new(800.0, 600.0));
//! assert_eq!(view.visible_world_rect().width(), 800.0);
//!
//! // Zoom in around the canvas center; the world point under the anchor
//! // stays put.
//! view.zoom_about_view_point(Point::new(400.0, 300.0), 2.0);
//! assert_eq!(view.visible_world_rect().width(), 400.0);
//! ```
//!
//! ## Design notes
//!
//! - The viewport is axis-aligned with a **uniform** zoom factor.
//! - Scrolling is expressed in world coordinates (the model-space position of
//!   the canvas's top-left corner), because that is the form diagram
//!   servers and the detail-level manager speak.
//! - Rotation is intentionally left out.
//!
//! This crate is `no_std`.

#![no_std]

mod viewport;

pub use viewport::{DiagramViewport, DiagramViewportDebugInfo};
