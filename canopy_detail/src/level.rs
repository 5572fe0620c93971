// Copyright 2025 the Canopy Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

/// How much detail a region's subtree is rendered at.
///
/// Variants are ordered by how much is rendered, so levels can be compared
/// directly: `OutOfBounds < MinimalDetails < FullDetails`. A region is never
/// rendered at more detail than any of its ancestors allows, but siblings
/// classify independently.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub enum DetailLevel {
    /// The region is not visible; nothing below it is rendered.
    OutOfBounds,
    /// The region is visible but too small to read; it is rendered as a
    /// simplified placeholder and its contents are skipped.
    MinimalDetails,
    /// The region's contents are rendered normally.
    FullDetails,
}

impl DetailLevel {
    /// Returns `true` for [`DetailLevel::FullDetails`].
    #[must_use]
    pub fn is_full(self) -> bool {
        self == Self::FullDetails
    }
}
