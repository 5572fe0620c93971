// Copyright 2025 the Canopy Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::{Affine, Point, Rect, Size, Vec2};

/// The window through which a diagram is seen.
///
/// `DiagramViewport` tracks a scroll offset (the world-space position of the
/// canvas's top-left corner), a uniform zoom factor, and the canvas size in
/// device pixels. It can be used to:
/// - Convert points and rectangles between world and view coordinates.
/// - Pan, and zoom around a chosen anchor point.
/// - Fit a world-space rectangle into the canvas.
/// - Measure how large a world rectangle is relative to the visible area.
#[derive(Clone, Debug, PartialEq)]
pub struct DiagramViewport {
    scroll: Point,
    zoom: f64,
    canvas: Size,
    min_zoom: f64,
    max_zoom: f64,
}

impl DiagramViewport {
    /// Creates a viewport over a canvas of the given size.
    ///
    /// - Initial scroll is the world origin.
    /// - Initial zoom is `1.0`.
    /// - Zoom is clamped to the range `[1e-3, 1e3]` by default.
    #[must_use]
    pub fn new(canvas: Size) -> Self {
        Self {
            scroll: Point::ORIGIN,
            zoom: 1.0,
            canvas,
            min_zoom: 1e-3,
            max_zoom: 1e3,
        }
    }

    /// Returns the scroll offset: the world-space position of the canvas's
    /// top-left corner.
    #[must_use]
    pub fn scroll(&self) -> Point {
        self.scroll
    }

    /// Sets the scroll offset in world coordinates.
    pub fn set_scroll(&mut self, scroll: Point) {
        self.scroll = scroll;
    }

    /// Returns the current uniform zoom factor.
    #[must_use]
    pub fn zoom(&self) -> f64 {
        self.zoom
    }

    /// Sets the zoom factor, clamping it into the configured zoom range.
    ///
    /// The scroll offset is kept, so this zooms about the canvas's top-left
    /// corner. Use [`DiagramViewport::zoom_about_view_point`] for
    /// anchor-stable zooming.
    pub fn set_zoom(&mut self, zoom: f64) {
        self.zoom = zoom.clamp(self.min_zoom, self.max_zoom);
    }

    /// Sets the minimum and maximum zoom factors.
    ///
    /// The provided range is normalized so that `min_zoom <= max_zoom`. The
    /// current zoom is clamped into the new range.
    pub fn set_zoom_limits(&mut self, min_zoom: f64, max_zoom: f64) {
        let (min_zoom, max_zoom) = if min_zoom <= max_zoom {
            (min_zoom, max_zoom)
        } else {
            (max_zoom, min_zoom)
        };
        self.min_zoom = min_zoom;
        self.max_zoom = max_zoom;
        self.set_zoom(self.zoom);
    }

    /// Returns the canvas size in device pixels.
    #[must_use]
    pub fn canvas_size(&self) -> Size {
        self.canvas
    }

    /// Sets the canvas size in device pixels.
    ///
    /// Scroll and zoom are unchanged; the visible world rectangle grows or
    /// shrinks at its bottom-right corner.
    pub fn set_canvas_size(&mut self, canvas: Size) {
        self.canvas = canvas;
    }

    /// Returns the size of the visible world region: `canvas size / zoom`.
    #[must_use]
    pub fn world_extent(&self) -> Size {
        Size::new(self.canvas.width / self.zoom, self.canvas.height / self.zoom)
    }

    /// Returns the world-space rectangle currently visible on the canvas.
    #[must_use]
    pub fn visible_world_rect(&self) -> Rect {
        Rect::from_origin_size(self.scroll, self.world_extent())
    }

    /// Returns the world-to-view transform.
    ///
    /// View space is device pixels with the origin at the canvas's top-left
    /// corner.
    #[must_use]
    pub fn world_to_view(&self) -> Affine {
        Affine::scale(self.zoom) * Affine::translate(-self.scroll.to_vec2())
    }

    /// Returns the view-to-world transform.
    #[must_use]
    pub fn view_to_world(&self) -> Affine {
        self.world_to_view().inverse()
    }

    /// Converts a world-space point into view/device coordinates.
    #[must_use]
    pub fn world_to_view_point(&self, pt: Point) -> Point {
        self.world_to_view() * pt
    }

    /// Converts a view/device-space point into world coordinates.
    #[must_use]
    pub fn view_to_world_point(&self, pt: Point) -> Point {
        self.view_to_world() * pt
    }

    /// Converts a world-space rectangle into view/device coordinates.
    #[must_use]
    pub fn world_to_view_rect(&self, rect: Rect) -> Rect {
        // Uniform, axis-aligned zoom: transforming the two corners is exact.
        Rect::from_points(
            self.world_to_view_point(rect.origin()),
            self.world_to_view_point(Point::new(rect.x1, rect.y1)),
        )
    }

    /// Converts a view/device-space rectangle into world coordinates.
    #[must_use]
    pub fn view_to_world_rect(&self, rect: Rect) -> Rect {
        Rect::from_points(
            self.view_to_world_point(rect.origin()),
            self.view_to_world_point(Point::new(rect.x1, rect.y1)),
        )
    }

    /// Returns the smaller of a world rectangle's width and height ratios
    /// against the visible world extent.
    ///
    /// This is the legibility proxy used for detail-level decisions: a
    /// region that is tall and thin on screen is still too small to read if
    /// its width ratio is tiny. Returns `0.0` for a degenerate canvas.
    #[must_use]
    pub fn relative_size(&self, rect: Rect) -> f64 {
        let extent = self.world_extent();
        if extent.width <= 0.0 || extent.height <= 0.0 {
            return 0.0;
        }
        (rect.width() / extent.width).min(rect.height() / extent.height)
    }

    /// Pans the visible window by a delta in view/device space.
    ///
    /// A positive `x` delta scrolls the window rightwards over the world.
    pub fn pan_by_view(&mut self, delta: Vec2) {
        if delta == Vec2::ZERO {
            return;
        }
        self.scroll += delta / self.zoom;
    }

    /// Zooms around a given anchor point in view/device coordinates.
    ///
    /// The world point under the anchor remains fixed in view space as much
    /// as possible under the new zoom level.
    pub fn zoom_about_view_point(&mut self, anchor_view: Point, factor: f64) {
        if factor <= 0.0 {
            return;
        }
        let old_zoom = self.zoom;
        let new_zoom = (old_zoom * factor).clamp(self.min_zoom, self.max_zoom);
        if (new_zoom - old_zoom).abs() < f64::EPSILON {
            return;
        }

        let anchor_world = self.view_to_world_point(anchor_view);
        self.zoom = new_zoom;
        // Re-solve scroll so the anchor's world point maps back to the same
        // device pixel: anchor_view = (anchor_world - scroll) * zoom.
        self.scroll = anchor_world - anchor_view.to_vec2() / new_zoom;
    }

    /// Fits the given world-space rectangle into the canvas, preserving
    /// aspect ratio and centering the content.
    ///
    /// Degenerate rectangles and canvases are ignored.
    pub fn fit_rect(&mut self, rect: Rect) {
        if rect.width() <= 0.0 || rect.height() <= 0.0 {
            return;
        }
        if self.canvas.width <= 0.0 || self.canvas.height <= 0.0 {
            return;
        }

        let sx = self.canvas.width / rect.width();
        let sy = self.canvas.height / rect.height();
        self.zoom = sx.min(sy).clamp(self.min_zoom, self.max_zoom);

        let extent = self.world_extent();
        self.scroll = Point::new(
            rect.center().x - extent.width / 2.0,
            rect.center().y - extent.height / 2.0,
        );
    }

    /// Snapshot of the current viewport state for debugging and inspection.
    #[must_use]
    pub fn debug_info(&self) -> DiagramViewportDebugInfo {
        DiagramViewportDebugInfo {
            scroll: self.scroll,
            zoom: self.zoom,
            canvas: self.canvas,
            visible_world_rect: self.visible_world_rect(),
            min_zoom: self.min_zoom,
            max_zoom: self.max_zoom,
        }
    }
}

/// Debug snapshot of a [`DiagramViewport`] state.
#[derive(Clone, Copy, Debug)]
pub struct DiagramViewportDebugInfo {
    /// World-space position of the canvas's top-left corner.
    pub scroll: Point,
    /// Current uniform zoom factor.
    pub zoom: f64,
    /// Canvas size in device pixels.
    pub canvas: Size,
    /// World-space rectangle currently visible through the canvas.
    pub visible_world_rect: Rect,
    /// Minimum zoom factor.
    pub min_zoom: f64,
    /// Maximum zoom factor.
    pub max_zoom: f64,
}

#[cfg(test)]
mod tests {
    use kurbo::{Point, Rect, Size, Vec2};

    use super::DiagramViewport;

    #[test]
    fn basic_world_view_roundtrip() {
        let mut vp = DiagramViewport::new(Size::new(800.0, 600.0));
        vp.set_scroll(Point::new(25.0, -40.0));
        vp.set_zoom(2.5);

        let world_pt = Point::new(10.0, -5.0);
        let view_pt = vp.world_to_view_point(world_pt);
        let world_back = vp.view_to_world_point(view_pt);
        assert!((world_back.x - world_pt.x).abs() < 1e-9);
        assert!((world_back.y - world_pt.y).abs() < 1e-9);
    }

    #[test]
    fn visible_world_rect_shrinks_with_zoom() {
        let mut vp = DiagramViewport::new(Size::new(1000.0, 1000.0));
        assert_eq!(
            vp.visible_world_rect(),
            Rect::new(0.0, 0.0, 1000.0, 1000.0)
        );

        vp.set_zoom(10.0);
        assert_eq!(vp.visible_world_rect(), Rect::new(0.0, 0.0, 100.0, 100.0));

        vp.set_scroll(Point::new(50.0, 75.0));
        assert_eq!(
            vp.visible_world_rect(),
            Rect::new(50.0, 75.0, 150.0, 175.0)
        );
    }

    #[test]
    fn zoom_about_anchor_keeps_anchor_fixed() {
        let mut vp = DiagramViewport::new(Size::new(800.0, 600.0));
        vp.set_scroll(Point::new(100.0, 100.0));

        let anchor_view = Point::new(400.0, 300.0);
        let world_before = vp.view_to_world_point(anchor_view);

        vp.zoom_about_view_point(anchor_view, 2.0);
        let world_after = vp.view_to_world_point(anchor_view);

        assert!((world_after.x - world_before.x).abs() < 1e-9);
        assert!((world_after.y - world_before.y).abs() < 1e-9);
    }

    #[test]
    fn pan_by_view_scrolls_in_world_units() {
        let mut vp = DiagramViewport::new(Size::new(800.0, 600.0));
        vp.set_zoom(4.0);
        vp.pan_by_view(Vec2::new(40.0, -20.0));
        assert_eq!(vp.scroll(), Point::new(10.0, -5.0));
    }

    #[test]
    fn fit_rect_centers_and_preserves_aspect_ratio() {
        let mut vp = DiagramViewport::new(Size::new(200.0, 100.0));
        vp.fit_rect(Rect::new(-50.0, -25.0, 50.0, 25.0));

        let visible = vp.visible_world_rect();
        assert!(visible.min_x() <= -50.0 + 1e-9);
        assert!(visible.max_x() >= 50.0 - 1e-9);
        assert!(visible.min_y() <= -25.0 + 1e-9);
        assert!(visible.max_y() >= 25.0 - 1e-9);
        assert!((visible.center().x - 0.0).abs() < 1e-9);
        assert!((visible.center().y - 0.0).abs() < 1e-9);
    }

    #[test]
    fn relative_size_is_the_smaller_dimension_ratio() {
        let vp = DiagramViewport::new(Size::new(1000.0, 1000.0));
        // Tall and thin: legibility is limited by the width ratio.
        let rect = Rect::new(0.0, 0.0, 50.0, 800.0);
        assert!((vp.relative_size(rect) - 0.05).abs() < 1e-12);

        let mut zoomed = vp.clone();
        zoomed.set_zoom(10.0);
        assert!((zoomed.relative_size(Rect::new(0.0, 0.0, 50.0, 50.0)) - 0.5).abs() < 1e-12);
    }

    #[test]
    fn zoom_limits_are_normalized_and_applied() {
        let mut vp = DiagramViewport::new(Size::new(100.0, 100.0));
        vp.set_zoom_limits(8.0, 0.5);
        vp.set_zoom(100.0);
        assert_eq!(vp.zoom(), 8.0);
        vp.set_zoom(0.001);
        assert_eq!(vp.zoom(), 0.5);
    }

    #[test]
    fn debug_info_snapshot() {
        let mut vp = DiagramViewport::new(Size::new(400.0, 300.0));
        vp.set_scroll(Point::new(5.0, 6.0));
        vp.set_zoom(2.0);

        let info = vp.debug_info();
        assert_eq!(info.scroll, Point::new(5.0, 6.0));
        assert_eq!(info.zoom, 2.0);
        assert_eq!(info.visible_world_rect, vp.visible_world_rect());
        assert!(info.min_zoom <= info.max_zoom);
    }
}
