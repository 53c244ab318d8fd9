// Copyright 2026 the Roundrect Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! A rectangle with rounded corners.

use crate::{CornerRadii, MaskPath, Point, Rect, Vec2};

/// A rectangle with independently rounded corners.
///
/// This is the boundary-geometry producer: given bounds and four corner
/// radii it emits the closed [`MaskPath`] outlining the shape. The element
/// sequence is fixed — see [`to_mask_path`](RoundRect::to_mask_path) — so
/// identical inputs always produce identical paths.
#[derive(Clone, Copy, Default, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RoundRect {
    /// Coordinates of the rectangle.
    pub rect: Rect,
    /// Radii of the four corners.
    pub radii: CornerRadii,
}

impl RoundRect {
    /// A new rounded rectangle from minimum and maximum coordinates.
    #[inline]
    pub fn new(x0: f64, y0: f64, x1: f64, y1: f64, radii: impl Into<CornerRadii>) -> RoundRect {
        RoundRect {
            rect: Rect::new(x0, y0, x1, y1),
            radii: radii.into(),
        }
    }

    /// A new rounded rectangle from an existing rectangle and radii.
    #[inline]
    pub fn from_rect(rect: Rect, radii: impl Into<CornerRadii>) -> RoundRect {
        RoundRect {
            rect,
            radii: radii.into(),
        }
    }

    /// The width of the rectangle.
    #[inline]
    pub fn width(&self) -> f64 {
        self.rect.width()
    }

    /// The height of the rectangle.
    #[inline]
    pub fn height(&self) -> f64 {
        self.rect.height()
    }

    /// The radii of the four corners.
    #[inline]
    pub fn radii(&self) -> CornerRadii {
        self.radii
    }

    /// The smallest rectangle that encloses the shape.
    #[inline]
    pub fn bounding_box(&self) -> Rect {
        self.rect.abs()
    }

    /// The boundary path of the rounded rectangle.
    ///
    /// The outline starts at the top-right corner's lower arc endpoint and
    /// walks the boundary counter-clockwise in a y-down space: one
    /// quadratic curve (control point at the corner vertex) per corner,
    /// one relative line per edge, then a close. Negative radii are
    /// clamped to zero; radii whose sum exceeds an edge length are passed
    /// through unchanged, which can produce a self-intersecting outline.
    ///
    /// Zero-area bounds yield a degenerate closed path rather than an
    /// error. Bounds must be finite; NaN or infinite coordinates are not
    /// defended against.
    ///
    /// # Examples
    ///
    /// ```
    /// use roundrect::RoundRect;
    ///
    /// let shape = RoundRect::new(0.0, 0.0, 100.0, 50.0, (10.0, 10.0, 0.0, 0.0));
    /// let path = shape.to_mask_path();
    /// assert!(path.is_closed());
    /// assert_eq!(path.start_point(), path.end_point());
    /// ```
    pub fn to_mask_path(&self) -> MaskPath {
        let CornerRadii {
            top_left,
            top_right,
            bottom_right,
            bottom_left,
        } = self.radii.clamp_non_negative();

        let Rect { x0, y0, x1, y1 } = self.rect;
        let width = x1 - x0;
        let height = y1 - y0;

        let mut path = MaskPath::new();
        path.move_to(Point::new(x1, y0 + top_right));
        path.quad_to(
            Vec2::new(0.0, -top_right),
            Vec2::new(-top_right, -top_right),
        );
        path.line_to(Vec2::new(-(width - top_left - top_right), 0.0));
        path.quad_to(Vec2::new(-top_left, 0.0), Vec2::new(-top_left, top_left));
        path.line_to(Vec2::new(0.0, height - top_left - bottom_left));
        path.quad_to(
            Vec2::new(0.0, bottom_left),
            Vec2::new(bottom_left, bottom_left),
        );
        path.line_to(Vec2::new(width - bottom_left - bottom_right, 0.0));
        path.quad_to(
            Vec2::new(bottom_right, 0.0),
            Vec2::new(bottom_right, -bottom_right),
        );
        path.line_to(Vec2::new(0.0, -(height - top_right - bottom_right)));
        path.close_path();
        path
    }
}

impl From<(Rect, CornerRadii)> for RoundRect {
    fn from((rect, radii): (Rect, CornerRadii)) -> RoundRect {
        RoundRect::from_rect(rect, radii)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{PathEl, PathSeg};

    fn endpoints(shape: &RoundRect) -> Vec<Point> {
        shape
            .to_mask_path()
            .segments()
            .map(|seg| seg.end())
            .collect()
    }

    fn contains_near(points: &[Point], p: Point) -> bool {
        points.iter().any(|q| q.distance(p) < 1e-9)
    }

    #[test]
    fn path_is_closed() {
        let cases = [
            RoundRect::new(0.0, 0.0, 100.0, 50.0, (10.0, 10.0, 0.0, 0.0)),
            RoundRect::new(-20.0, -20.0, 20.0, 20.0, 5.0),
            RoundRect::new(0.0, 0.0, 50.0, 50.0, (40.0, 40.0, 40.0, 40.0)),
            // Zero-area bounds degenerate but still close.
            RoundRect::new(5.0, 5.0, 5.0, 5.0, 3.0),
        ];
        for shape in cases {
            let path = shape.to_mask_path();
            assert!(path.is_closed());
            assert_eq!(path.start_point(), path.end_point());
        }
    }

    #[test]
    fn element_sequence_is_fixed() {
        let path = RoundRect::new(0.0, 0.0, 100.0, 50.0, 10.0).to_mask_path();
        let els = path.elements();
        assert_eq!(els.len(), 10);
        assert_eq!(els[0], PathEl::MoveTo(Point::new(100.0, 10.0)));
        assert_eq!(
            els[1],
            PathEl::QuadTo(Vec2::new(0.0, -10.0), Vec2::new(-10.0, -10.0))
        );
        assert_eq!(els[2], PathEl::LineTo(Vec2::new(-80.0, 0.0)));
        assert_eq!(els[9], PathEl::ClosePath);

        let quads = els
            .iter()
            .filter(|el| matches!(el, PathEl::QuadTo(..)))
            .count();
        let lines = els
            .iter()
            .filter(|el| matches!(el, PathEl::LineTo(..)))
            .count();
        assert_eq!((quads, lines), (4, 4));
    }

    #[test]
    fn zero_radii_is_plain_rectangle() {
        let path = RoundRect::new(0.0, 0.0, 100.0, 50.0, 0.0).to_mask_path();
        // Four corner curves remain as elements but sweep nothing.
        for seg in path.segments() {
            if let PathSeg::Quad(quad) = seg {
                assert!(quad.arclen(1e-9) < 1e-12);
            }
        }
        let perimeter = path.perimeter(1e-9);
        assert!((perimeter - 300.0).abs() < 1e-9);
    }

    #[test]
    fn negative_radii_clamp_to_zero() {
        let sharp = RoundRect::new(0.0, 0.0, 100.0, 50.0, 0.0).to_mask_path();
        let clamped = RoundRect::new(0.0, 0.0, 100.0, 50.0, (-4.0, -4.0, -4.0, -4.0)).to_mask_path();
        assert_eq!(sharp, clamped);
    }

    #[test]
    fn uniform_square_is_rotation_invariant() {
        let shape = RoundRect::new(0.0, 0.0, 100.0, 100.0, 20.0);
        let center = shape.rect.center();
        let points = endpoints(&shape);
        // Rotating every segment endpoint a quarter turn about the center
        // maps the outline onto itself.
        for p in &points {
            let v = *p - center;
            let rotated = center + Vec2::new(-v.y, v.x);
            assert!(contains_near(&points, rotated), "no match for {rotated:?}");
        }
    }

    #[test]
    fn two_rounded_corners_shorten_the_outline() {
        let shape = RoundRect::new(0.0, 0.0, 100.0, 50.0, (10.0, 10.0, 0.0, 0.0));
        let path = shape.to_mask_path();

        let curved: Vec<_> = path
            .segments()
            .filter_map(|seg| match seg {
                PathSeg::Quad(quad) => Some(quad.arclen(1e-9)),
                PathSeg::Line(_) => None,
            })
            .filter(|len| *len > 0.0)
            .collect();
        assert_eq!(curved.len(), 2);

        // Each corner arc replaces two radius-length edge pieces, so the
        // perimeter shrinks relative to the sharp rectangle by exactly the
        // two corners' contribution.
        let arc = curved[0];
        assert!((curved[1] - arc).abs() < 1e-9);
        assert!(arc < 20.0);
        let perimeter = path.perimeter(1e-9);
        assert!((perimeter - (300.0 - 2.0 * (20.0 - arc))).abs() < 1e-6);
    }

    #[test]
    fn oversized_radii_are_not_clamped() {
        // Opposing radii sums exceeding the edge length pass through; the
        // reference behavior is permissive and the outline may
        // self-intersect.
        let path = RoundRect::new(0.0, 0.0, 50.0, 50.0, (40.0, 40.0, 0.0, 0.0)).to_mask_path();
        assert_eq!(path.elements()[2], PathEl::LineTo(Vec2::new(30.0, 0.0)));
        assert!(path.is_closed());
    }

    #[test]
    fn random_inputs_close_exactly() {
        use rand::Rng;

        let mut rng = rand::rng();
        for _ in 0..100 {
            let x0 = rng.random_range(-100.0..100.0);
            let y0 = rng.random_range(-100.0..100.0);
            let shape = RoundRect::new(
                x0,
                y0,
                x0 + rng.random_range(0.0..200.0),
                y0 + rng.random_range(0.0..200.0),
                (
                    rng.random_range(-10.0..60.0),
                    rng.random_range(-10.0..60.0),
                    rng.random_range(-10.0..60.0),
                    rng.random_range(-10.0..60.0),
                ),
            );
            let path = shape.to_mask_path();
            assert!(path.is_closed());
            assert_eq!(path.start_point(), path.end_point());
            assert_eq!(path, shape.to_mask_path());
        }
    }

    #[test]
    fn idempotent_construction() {
        let shape = RoundRect::new(3.0, 4.0, 96.0, 47.0, (1.0, 2.0, 3.0, 4.0));
        assert_eq!(shape.to_mask_path(), shape.to_mask_path());
    }
}
