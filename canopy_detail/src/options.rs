// Copyright 2025 the Canopy Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tunable thresholds for detail-level classification.

/// The two independently tunable thresholds consulted when classifying a
/// region.
///
/// Hosts typically source these from their render-options registry and pass
/// them alongside the viewport on every render pass; classification is a
/// pure function of geometry and these values.
///
/// - `relative_threshold`: the fraction of the visible area below which a
///   region's contents degrade to [`MinimalDetails`](crate::DetailLevel::MinimalDetails).
///   Compared against the smaller of the region's width and height ratios.
/// - `scale_threshold`: the alternate promotion criterion. A region whose
///   accumulated content scale exceeds this is kept at full detail even when
///   its relative size is below `relative_threshold`, because its internal
///   rendering is magnified independent of the overall zoom.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DetailOptions {
    /// Fraction of the visible world extent below which content degrades.
    pub relative_threshold: f64,
    /// Accumulated content scale above which content stays at full detail.
    pub scale_threshold: f64,
}

impl Default for DetailOptions {
    /// Defaults: degrade below a fifth of the visible area; promote only
    /// regions whose content is magnified beyond their surroundings.
    fn default() -> Self {
        Self {
            relative_threshold: 0.2,
            scale_threshold: 1.0,
        }
    }
}

impl DetailOptions {
    /// Returns the options with a different relative-size threshold.
    #[must_use]
    pub fn with_relative_threshold(mut self, threshold: f64) -> Self {
        self.relative_threshold = threshold;
        self
    }

    /// Returns the options with a different content-scale threshold.
    #[must_use]
    pub fn with_scale_threshold(mut self, threshold: f64) -> Self {
        self.scale_threshold = threshold;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::DetailOptions;

    #[test]
    fn builders_override_single_fields() {
        let options = DetailOptions::default()
            .with_relative_threshold(0.35)
            .with_scale_threshold(2.0);
        assert_eq!(options.relative_threshold, 0.35);
        assert_eq!(options.scale_threshold, 2.0);

        let defaults = DetailOptions::default();
        assert_eq!(defaults.relative_threshold, 0.2);
        assert_eq!(defaults.scale_threshold, 1.0);
    }
}
