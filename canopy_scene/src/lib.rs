// Copyright 2025 the Canopy Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=canopy_scene --heading-base-level=0

//! Canopy Scene: a Kurbo-native, arena-backed diagram scene tree.
//!
//! This crate holds the scene-graph side of Canopy: a hierarchy of diagram
//! elements with local bounds, an optional child-area marker, and a content
//! scale. It is the concrete model that the detail-level manager in
//! `canopy_detail` classifies, though that crate only consumes it through a
//! narrow trait and works against any host scene with the same shape.
//!
//! ## Model
//!
//! - Every tree starts from a synthetic **model root** that stands for the
//!   diagram model itself. The root is not a drawn element and carries no
//!   bounds; all drawn elements are inserted below it.
//! - Elements carry [`LocalElement`] data: local bounds relative to the
//!   parent's origin, an [`ElementKind`], [`ElementFlags`], and a content
//!   scale describing how much the element magnifies its child area
//!   relative to the parent.
//! - An element whose flags contain [`ElementFlags::CHILD_AREA`] and that
//!   has at least one child is a region boundary: detail-level decisions
//!   apply uniformly to everything below it.
//!
//! The tree is insert-only. Diagram models are loaded wholesale; replacing
//! the model means building a fresh tree, not editing this one in place.
//!
//! ## Minimal example
//!
//! ```rust
//! use kurbo::Rect;
//! use canopy_scene::{DiagramTree, ElementFlags, LocalElement};
//!
//! let mut tree = DiagramTree::new();
//! let region = tree.insert(
//!     tree.root(),
//!     LocalElement {
//!         bounds: Some(Rect::new(0.0, 0.0, 1000.0, 1000.0)),
//!         flags: ElementFlags::CHILD_AREA,
//!         ..LocalElement::default()
//!     },
//! );
//! let leaf = tree.insert(
//!     region,
//!     LocalElement {
//!         bounds: Some(Rect::new(100.0, 100.0, 150.0, 150.0)),
//!         ..LocalElement::default()
//!     },
//! );
//!
//! assert_eq!(tree.parent(leaf), Some(region));
//! assert!(tree.provides_region(region));
//! // Absolute bounds accumulate ancestor origins.
//! assert_eq!(
//!     tree.absolute_bounds(leaf),
//!     Some(Rect::new(100.0, 100.0, 150.0, 150.0)),
//! );
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod tree;
mod types;

pub use tree::{Descendants, DiagramTree};
pub use types::{ElementFlags, ElementId, ElementKind, LocalElement};
