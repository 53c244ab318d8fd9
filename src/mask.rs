// Copyright 2026 the Roundrect Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! A caller-owned rounded-rectangle mask with lazy path regeneration.

use crate::{CornerRadii, MaskPath, RadiusSpec, Rect, RoundRect, ShadowPadding};

/// A rendering surface a mask can be drawn onto.
///
/// This is the boundary to the host's compositing machinery: the mask
/// engine only produces geometry, and the surface decides how to fill or
/// clip against it.
pub trait MaskSurface {
    /// Fill the given closed path.
    fn fill_path(&mut self, path: &MaskPath);

    /// Set the clip outline to a rounded rectangle with a uniform radius.
    ///
    /// This is a deliberately simplified capability: per-corner radii are
    /// not expressible here and must be approximated by filling the
    /// general path instead.
    fn set_clip_outline(&mut self, rect: Rect, radius: f64);
}

/// A rounded-rectangle mask over caller-owned bounds.
///
/// This plays the role a drawable plays in a retained-mode UI toolkit: it
/// holds the current bounds, corner configuration and shadow padding, and
/// hands out the boundary path on demand. Instead of a framework
/// invalidation callback, the mask memoizes the last-computed path and
/// drops it whenever a setter actually changes a value, so the path is
/// recomputed only when bounds, radii or padding change.
///
/// # Examples
///
/// ```
/// use roundrect::{Rect, RoundRectMask};
///
/// let mut mask = RoundRectMask::new();
/// mask.set_bounds(Rect::new(0.0, 0.0, 100.0, 50.0));
/// mask.set_corners((10.0, 10.0, 0.0, 0.0));
/// assert!(mask.path().is_closed());
/// ```
#[derive(Clone, Debug, Default)]
pub struct RoundRectMask {
    bounds: Rect,
    inset_bounds: Rect,
    corner_radius: f64,
    corners: RadiusSpec,
    padding: f64,
    inset_for_padding: bool,
    inset_for_radius: bool,
    path: Option<MaskPath>,
}

impl RoundRectMask {
    /// Create a new mask with empty bounds and sharp corners.
    pub fn new() -> RoundRectMask {
        RoundRectMask {
            inset_for_radius: true,
            ..Default::default()
        }
    }

    /// The bounds as set by the caller.
    #[inline]
    pub fn bounds(&self) -> Rect {
        self.bounds
    }

    /// The bounds after the shadow and corner insets are applied.
    ///
    /// This is the rectangle the mask path is built over.
    #[inline]
    pub fn inset_bounds(&self) -> Rect {
        self.inset_bounds
    }

    /// The uniform corner radius used for the clip outline and the corner
    /// padding correction.
    #[inline]
    pub fn corner_radius(&self) -> f64 {
        self.corner_radius
    }

    /// The per-corner rounding configuration used for the mask path.
    #[inline]
    pub fn corners(&self) -> RadiusSpec {
        self.corners
    }

    /// The shadow padding size.
    #[inline]
    pub fn padding(&self) -> f64 {
        self.padding
    }

    /// Set the caller-owned bounds, typically on a size change.
    pub fn set_bounds(&mut self, bounds: Rect) {
        if bounds == self.bounds {
            return;
        }
        self.bounds = bounds;
        self.update_bounds();
    }

    /// Set the uniform corner radius.
    pub fn set_corner_radius(&mut self, radius: f64) {
        if radius == self.corner_radius {
            return;
        }
        self.corner_radius = radius;
        self.update_bounds();
    }

    /// Set the per-corner rounding configuration.
    pub fn set_corners(&mut self, corners: impl Into<RadiusSpec>) {
        let corners = corners.into();
        if corners == self.corners {
            return;
        }
        self.corners = corners;
        self.update_bounds();
    }

    /// Set the shadow padding and the inset flags.
    ///
    /// When `inset_for_padding` is false no inset is applied at all;
    /// `inset_for_radius` additionally reserves space for the corner arcs.
    pub fn set_padding(&mut self, padding: f64, inset_for_padding: bool, inset_for_radius: bool) {
        if padding == self.padding
            && self.inset_for_padding == inset_for_padding
            && self.inset_for_radius == inset_for_radius
        {
            return;
        }
        self.padding = padding;
        self.inset_for_padding = inset_for_padding;
        self.inset_for_radius = inset_for_radius;
        self.update_bounds();
    }

    /// The boundary path for the current state.
    ///
    /// The path is memoized; repeated calls without an intervening state
    /// change return the same value without recomputation.
    pub fn path(&mut self) -> &MaskPath {
        let shape = RoundRect::from_rect(self.inset_bounds, self.corners.resolve());
        self.path.get_or_insert_with(|| shape.to_mask_path())
    }

    /// The concrete per-corner radii the mask path is built from.
    pub fn resolved_radii(&self) -> CornerRadii {
        self.corners.resolve()
    }

    /// Fill the mask path on the given surface.
    pub fn draw<S: MaskSurface + ?Sized>(&mut self, surface: &mut S) {
        let path = self.path();
        surface.fill_path(path);
    }

    /// Set the surface's clip outline to the inset bounds with the uniform
    /// corner radius.
    ///
    /// The outline primitive cannot express per-corner radii; callers that
    /// need an asymmetric clip must fill the path instead.
    pub fn clip<S: MaskSurface + ?Sized>(&self, surface: &mut S) {
        surface.set_clip_outline(self.inset_bounds, self.corner_radius);
    }

    fn update_bounds(&mut self) {
        let mut bounds = self.bounds.abs();
        if self.inset_for_padding {
            let padding = ShadowPadding::new(self.padding, self.corner_radius, self.inset_for_radius);
            bounds = bounds - padding.insets().ceil();
        }
        self.inset_bounds = bounds;
        self.path = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{PathEl, Point};

    #[derive(Default)]
    struct Recorder {
        fills: Vec<MaskPath>,
        clips: Vec<(Rect, f64)>,
    }

    impl MaskSurface for Recorder {
        fn fill_path(&mut self, path: &MaskPath) {
            self.fills.push(path.clone());
        }

        fn set_clip_outline(&mut self, rect: Rect, radius: f64) {
            self.clips.push((rect, radius));
        }
    }

    #[test]
    fn path_tracks_setters() {
        let mut mask = RoundRectMask::new();
        mask.set_bounds(Rect::new(0.0, 0.0, 100.0, 50.0));
        mask.set_corners(10.0);
        let before = mask.path().clone();

        // An unchanged set keeps the memoized path.
        mask.set_corners(10.0);
        assert_eq!(mask.path(), &before);

        mask.set_corners((10.0, 10.0, 0.0, 0.0));
        assert_eq!(mask.resolved_radii(), CornerRadii::new(10.0, 10.0, 0.0, 0.0));
        assert_ne!(mask.path(), &before);
    }

    #[test]
    fn padding_insets_bounds_in_whole_pixels() {
        let mut mask = RoundRectMask::new();
        mask.set_bounds(Rect::new(0.0, 0.0, 100.0, 50.0));
        mask.set_padding(4.1, true, false);
        // Horizontal 4.1 and vertical 6.15 both round up.
        assert_eq!(mask.inset_bounds(), Rect::new(5.0, 7.0, 95.0, 43.0));

        mask.set_padding(4.1, false, false);
        assert_eq!(mask.inset_bounds(), mask.bounds());
    }

    #[test]
    fn corner_radius_feeds_the_padding_term() {
        let mut mask = RoundRectMask::new();
        mask.set_bounds(Rect::new(0.0, 0.0, 100.0, 100.0));
        mask.set_corner_radius(8.0);
        mask.set_padding(4.0, true, true);
        let correction = (1.0 - std::f64::consts::FRAC_1_SQRT_2) * 8.0;
        let expected = Rect::new(0.0, 0.0, 100.0, 100.0)
            - crate::Insets::uniform_xy(4.0 + correction, 6.0 + correction).ceil();
        assert_eq!(mask.inset_bounds(), expected);
    }

    #[test]
    fn negative_bounds_are_normalized() {
        let mut mask = RoundRectMask::new();
        mask.set_bounds(Rect::new(100.0, 50.0, 0.0, 0.0));
        assert_eq!(mask.inset_bounds(), Rect::new(0.0, 0.0, 100.0, 50.0));
    }

    #[test]
    fn draw_fills_and_clip_outlines() {
        let mut mask = RoundRectMask::new();
        mask.set_bounds(Rect::new(0.0, 0.0, 60.0, 60.0));
        mask.set_corner_radius(6.0);
        mask.set_corners(6.0);

        let mut surface = Recorder::default();
        mask.draw(&mut surface);
        mask.clip(&mut surface);

        assert_eq!(surface.fills.len(), 1);
        assert_eq!(
            surface.fills[0].elements()[0],
            PathEl::MoveTo(Point::new(60.0, 6.0))
        );
        assert_eq!(surface.clips, vec![(Rect::new(0.0, 0.0, 60.0, 60.0), 6.0)]);
    }
}
