// Copyright 2026 the Roundrect Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Quadratic Bézier segments.

use crate::Point;

/// A single quadratic Bézier segment.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct QuadBez {
    /// The start point.
    pub p0: Point,
    /// The control point.
    pub p1: Point,
    /// The end point.
    pub p2: Point,
}

impl QuadBez {
    /// Create a new quadratic Bézier segment.
    #[inline]
    pub fn new<P: Into<Point>>(p0: P, p1: P, p2: P) -> QuadBez {
        QuadBez {
            p0: p0.into(),
            p1: p1.into(),
            p2: p2.into(),
        }
    }

    /// Evaluate the curve at parameter `t`, where `t` is in [0, 1].
    #[inline]
    pub fn eval(&self, t: f64) -> Point {
        let mt = 1.0 - t;
        (self.p0.to_vec2() * (mt * mt)
            + (self.p1.to_vec2() * (mt * 2.0) + self.p2.to_vec2() * t) * t)
            .to_point()
    }

    /// Subdivide into halves, using de Casteljau.
    pub fn subdivide(&self) -> (QuadBez, QuadBez) {
        let pm = self.eval(0.5);
        (
            QuadBez::new(self.p0, self.p0.midpoint(self.p1), pm),
            QuadBez::new(pm, self.p1.midpoint(self.p2), self.p2),
        )
    }

    /// Arclength of the segment.
    ///
    /// This algorithm is based on "Adaptive subdivision and the length and
    /// energy of Bézier curves" by Jens Gravesen.
    pub fn arclen(&self, accuracy: f64) -> f64 {
        // Estimate for a single segment.
        fn calc_l0(q: &QuadBez) -> f64 {
            let lc = (q.p2 - q.p0).hypot();
            let lp = (q.p1 - q.p0).hypot() + (q.p2 - q.p1).hypot();
            (2.0 * lc + lp) * (1.0 / 3.0)
        }
        fn rec(q: &QuadBez, l0: f64, accuracy: f64) -> f64 {
            let (q0, q1) = q.subdivide();
            let l0_q0 = calc_l0(&q0);
            let l0_q1 = calc_l0(&q1);
            let l1 = l0_q0 + l0_q1;
            let error = (l0 - l1) * (1.0 / 15.0);
            if error.abs() < accuracy {
                l1 - error
            } else {
                rec(&q0, l0_q0, accuracy * 0.5) + rec(&q1, l0_q1, accuracy * 0.5)
            }
        }
        rec(self, calc_l0(self), accuracy)
    }
}
