// Copyright 2026 the Roundrect Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! A description of the distances between the edges of two rectangles.

use std::ops::{Add, Neg, Sub};

use crate::Rect;

/// Insets from the edges of a rectangle.
///
/// The inset value for each edge can be thought of as a delta computed from
/// the center of the rect to that edge. For instance, with an inset of `2.0` on
/// the x-axis, a rectangle at `(0.0, 0.0)` with that inset added will be at
/// `(-2.0, 0.0)`.
///
/// Put alternatively, a positive inset represents increased distance from center,
/// and a negative inset represents decreased distance from center.
///
/// # Examples
///
/// Adding positive insets produces a larger rectangle:
/// ```
/// use roundrect::{Insets, Rect};
///
/// let rect = Rect::from_origin_size((0., 0.,), (10., 10.,));
/// let insets = Insets::uniform_xy(3., 0.,);
///
/// let inset_rect = rect + insets;
/// assert_eq!(inset_rect.width(), 16.0, "10.0 + 3.0 * 2");
/// assert_eq!(inset_rect.x0, -3.0);
/// ```
///
/// Subtracting them produces a smaller one:
///
/// ```
/// use roundrect::{Insets, Rect};
///
/// let rect = Rect::from_origin_size((0., 0.,), (10., 10.,));
/// let insets = Insets::uniform_xy(3., 0.,);
///
/// let inset_rect = rect - insets;
/// assert_eq!(inset_rect.width(), 4.0, "10.0 - 3.0 * 2");
/// assert_eq!(inset_rect.x0, 3.0);
/// ```
///
/// Insets ignore negative width & height when computing new rectangles.
///
/// ```
/// use roundrect::{Insets, Rect};
///
/// let rect = Rect::new(7., 11., 0., 0.,);
/// let insets = Insets::uniform_xy(0., 1.,);
///
/// assert_eq!(rect.width(), -7.0);
///
/// let inset_rect = rect + insets;
/// assert_eq!(inset_rect.width(), 7.0);
/// assert_eq!(inset_rect.x0, 0.0);
/// assert_eq!(inset_rect.height(), 13.0);
/// ```
#[derive(Clone, Copy, Default, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Insets {
    /// The minimum x coordinate (left edge).
    pub x0: f64,
    /// The minimum y coordinate (top edge in y-down spaces).
    pub y0: f64,
    /// The maximum x coordinate (right edge).
    pub x1: f64,
    /// The maximum y coordinate (bottom edge in y-down spaces).
    pub y1: f64,
}

impl Insets {
    /// Zero'd insets.
    pub const ZERO: Insets = Insets::uniform(0.);

    /// New uniform insets.
    #[inline]
    pub const fn uniform(d: f64) -> Insets {
        Insets {
            x0: d,
            y0: d,
            x1: d,
            y1: d,
        }
    }

    /// New insets with uniform values along each axis.
    #[inline]
    pub const fn uniform_xy(x: f64, y: f64) -> Insets {
        Insets {
            x0: x,
            y0: y,
            x1: x,
            y1: y,
        }
    }

    /// New insets. The ordering of the arguments is "left, top, right, bottom",
    /// assuming a y-down coordinate space.
    #[inline]
    pub const fn new(x0: f64, y0: f64, x1: f64, y1: f64) -> Insets {
        Insets { x0, y0, x1, y1 }
    }

    /// The total delta on the x-axis represented by these insets.
    ///
    /// # Examples
    ///
    /// ```
    /// use roundrect::Insets;
    ///
    /// let insets = Insets::uniform_xy(3., 8.);
    /// assert_eq!(insets.x_value(), 6.);
    /// ```
    #[inline]
    pub fn x_value(self) -> f64 {
        self.x0 + self.x1
    }

    /// The total delta on the y-axis represented by these insets.
    ///
    /// # Examples
    ///
    /// ```
    /// use roundrect::Insets;
    ///
    /// let insets = Insets::uniform_xy(3., 7.);
    /// assert_eq!(insets.y_value(), 14.);
    /// ```
    #[inline]
    pub fn y_value(self) -> f64 {
        self.y0 + self.y1
    }

    /// Round each inset up to the nearest whole number.
    ///
    /// Shadow and corner insets are computed in fractional pixels but applied
    /// in whole device pixels; rounding up avoids sub-pixel gaps between
    /// adjacent rounded shapes.
    ///
    /// # Examples
    ///
    /// ```
    /// use roundrect::Insets;
    ///
    /// let insets = Insets::uniform_xy(4.0, 6.2);
    /// assert_eq!(insets.ceil(), Insets::uniform_xy(4.0, 7.0));
    /// ```
    #[inline]
    pub fn ceil(self) -> Insets {
        Insets {
            x0: self.x0.ceil(),
            y0: self.y0.ceil(),
            x1: self.x1.ceil(),
            y1: self.y1.ceil(),
        }
    }
}

impl Add<Rect> for Insets {
    type Output = Rect;

    fn add(self, other: Rect) -> Rect {
        let other = other.abs();
        Rect::new(
            other.x0 - self.x0,
            other.y0 - self.y0,
            other.x1 + self.x1,
            other.y1 + self.y1,
        )
    }
}

impl Add<Insets> for Rect {
    type Output = Rect;

    fn add(self, other: Insets) -> Rect {
        other + self
    }
}

impl Sub<Insets> for Rect {
    type Output = Rect;

    fn sub(self, other: Insets) -> Rect {
        self + -other
    }
}

impl Neg for Insets {
    type Output = Insets;

    #[inline]
    fn neg(self) -> Insets {
        Insets::new(-self.x0, -self.y0, -self.x1, -self.y1)
    }
}

impl From<f64> for Insets {
    fn from(src: f64) -> Insets {
        Insets::uniform(src)
    }
}

impl From<(f64, f64)> for Insets {
    fn from(src: (f64, f64)) -> Insets {
        Insets::uniform_xy(src.0, src.1)
    }
}

impl From<(f64, f64, f64, f64)> for Insets {
    fn from(src: (f64, f64, f64, f64)) -> Insets {
        Insets::new(src.0, src.1, src.2, src.3)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn shrink_then_grow_round_trips() {
        let rect = Rect::new(0., 0., 100., 50.);
        let insets = Insets::uniform_xy(2., 3.);
        assert_eq!((rect - insets) + insets, rect);
    }

    #[test]
    fn ceil_is_per_edge() {
        let insets = Insets::new(0.1, 1.0, 2.5, 3.9);
        assert_eq!(insets.ceil(), Insets::new(1.0, 1.0, 3.0, 4.0));
    }
}
