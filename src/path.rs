// Copyright 2026 the Roundrect Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Mask boundary paths built from relative drawing elements.

use std::fmt;
use std::fmt::Write;

use smallvec::SmallVec;

use crate::{Line, Point, QuadBez, Vec2};

/// A rounded-rectangle mask path never needs more storage than a move,
/// four corner curves, four edges and a close.
const INLINE_ELEMENTS: usize = 10;

/// The element of a mask path.
///
/// Apart from the initial [`MoveTo`], every element is expressed as an
/// offset from the current point. The element order and winding direction
/// are part of the contract: downstream fill and clip consumers assume a
/// consistent winding, so two paths describing the same outline with
/// different element sequences are not interchangeable.
///
/// [`MoveTo`]: PathEl::MoveTo
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PathEl {
    /// Start a subpath at the given absolute point.
    MoveTo(Point),
    /// Draw a line to the point at the given offset from the current point.
    LineTo(Vec2),
    /// Draw a quadratic curve; both the control point and the end point are
    /// offsets from the current point.
    QuadTo(Vec2, Vec2),
    /// Close off the path.
    ClosePath,
}

/// A segment of a mask path, resolved to absolute coordinates.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum PathSeg {
    /// A line segment.
    Line(Line),
    /// A quadratic Bézier segment.
    Quad(QuadBez),
}

impl PathSeg {
    /// The arclength of the segment.
    ///
    /// The `accuracy` argument bounds the error for curved segments; line
    /// lengths are exact.
    pub fn arclen(&self, accuracy: f64) -> f64 {
        match self {
            PathSeg::Line(line) => line.length(),
            PathSeg::Quad(quad) => quad.arclen(accuracy),
        }
    }

    /// The end point of the segment.
    pub fn end(&self) -> Point {
        match self {
            PathSeg::Line(line) => line.p1,
            PathSeg::Quad(quad) => quad.p2,
        }
    }
}

/// A closed outline described as an ordered sequence of drawing elements.
///
/// The path is a plain value: it is fully determined by the inputs it was
/// built from, holds no hidden state, and two paths built from identical
/// inputs compare equal.
///
/// # Examples
///
/// ```
/// use roundrect::{MaskPath, Point, Vec2};
///
/// let mut path = MaskPath::new();
/// path.move_to(Point::new(10.0, 0.0));
/// path.line_to(Vec2::new(0.0, 5.0));
/// path.close_path();
/// assert!(path.is_closed());
/// assert_eq!(path.to_svg(), "M10 0l0 5Z");
/// ```
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MaskPath(SmallVec<[PathEl; INLINE_ELEMENTS]>);

impl MaskPath {
    /// Create a new, empty path.
    pub fn new() -> MaskPath {
        MaskPath::default()
    }

    /// Push a generic path element onto the path.
    pub fn push(&mut self, el: PathEl) {
        self.0.push(el);
    }

    /// Push a "move to" element onto the path.
    pub fn move_to(&mut self, p: impl Into<Point>) {
        self.push(PathEl::MoveTo(p.into()));
    }

    /// Push a relative "line to" element onto the path.
    pub fn line_to(&mut self, v: impl Into<Vec2>) {
        self.push(PathEl::LineTo(v.into()));
    }

    /// Push a relative "quad to" element onto the path.
    pub fn quad_to(&mut self, v1: impl Into<Vec2>, v2: impl Into<Vec2>) {
        self.push(PathEl::QuadTo(v1.into(), v2.into()));
    }

    /// Push a "close path" element onto the path.
    pub fn close_path(&mut self) {
        self.push(PathEl::ClosePath);
    }

    /// Get the path elements.
    pub fn elements(&self) -> &[PathEl] {
        &self.0
    }

    /// Returns `true` if the path contains no drawing elements.
    pub fn is_empty(&self) -> bool {
        !self
            .0
            .iter()
            .any(|el| matches!(el, PathEl::LineTo(..) | PathEl::QuadTo(..)))
    }

    /// Returns `true` if the path ends with a close element.
    pub fn is_closed(&self) -> bool {
        matches!(self.0.last(), Some(PathEl::ClosePath))
    }

    /// The absolute point at which the path starts, if any.
    pub fn start_point(&self) -> Option<Point> {
        match self.0.first() {
            Some(PathEl::MoveTo(p)) => Some(*p),
            _ => None,
        }
    }

    /// The absolute current point after replaying all elements, if any.
    ///
    /// A trailing close element snaps the current point back to the start
    /// of the subpath.
    pub fn end_point(&self) -> Option<Point> {
        let mut start = None;
        let mut last = None;
        for el in &self.0 {
            match *el {
                PathEl::MoveTo(p) => {
                    start = Some(p);
                    last = Some(p);
                }
                PathEl::LineTo(v) => last = last.map(|p| p + v),
                PathEl::QuadTo(_, v2) => last = last.map(|p| p + v2),
                PathEl::ClosePath => last = start,
            }
        }
        last
    }

    /// Iterate over the path segments, resolved to absolute coordinates.
    ///
    /// A close element whose current point differs from the subpath start
    /// yields the implicit closing line.
    pub fn segments(&self) -> Segments<'_> {
        Segments {
            elements: self.0.iter(),
            start: Point::ZERO,
            last: Point::ZERO,
        }
    }

    /// Total length of the path outline.
    ///
    /// The `accuracy` argument bounds the arclength error of each curved
    /// segment.
    pub fn perimeter(&self, accuracy: f64) -> f64 {
        self.segments().map(|seg| seg.arclen(accuracy)).sum()
    }

    /// Convert the path to an SVG path string representation.
    ///
    /// Relative elements map directly onto SVG's lowercase relative
    /// commands, so the output preserves the element sequence exactly.
    pub fn to_svg(&self) -> String {
        let mut result = String::new();
        for el in self.elements() {
            // String formatting does not fail.
            match *el {
                PathEl::MoveTo(p) => write!(result, "M{} {}", p.x, p.y).unwrap(),
                PathEl::LineTo(v) => write!(result, "l{} {}", v.x, v.y).unwrap(),
                PathEl::QuadTo(v1, v2) => {
                    write!(result, "q{} {} {} {}", v1.x, v1.y, v2.x, v2.y).unwrap()
                }
                PathEl::ClosePath => write!(result, "Z").unwrap(),
            }
        }
        result
    }
}

impl FromIterator<PathEl> for MaskPath {
    fn from_iter<T: IntoIterator<Item = PathEl>>(iter: T) -> Self {
        MaskPath(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a MaskPath {
    type Item = PathEl;
    type IntoIter = std::iter::Copied<std::slice::Iter<'a, PathEl>>;

    fn into_iter(self) -> Self::IntoIter {
        self.elements().iter().copied()
    }
}

impl fmt::Display for MaskPath {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str(&self.to_svg())
    }
}

/// An iterator over the segments of a mask path.
#[derive(Clone, Debug)]
pub struct Segments<'a> {
    elements: std::slice::Iter<'a, PathEl>,
    start: Point,
    last: Point,
}

impl Iterator for Segments<'_> {
    type Item = PathSeg;

    fn next(&mut self) -> Option<PathSeg> {
        for el in &mut self.elements {
            let seg = match *el {
                PathEl::MoveTo(p) => {
                    self.start = p;
                    self.last = p;
                    continue;
                }
                PathEl::LineTo(v) => PathSeg::Line(Line::new(self.last, self.last + v)),
                PathEl::QuadTo(v1, v2) => {
                    PathSeg::Quad(QuadBez::new(self.last, self.last + v1, self.last + v2))
                }
                PathEl::ClosePath => {
                    if self.last != self.start {
                        PathSeg::Line(Line::new(self.last, self.start))
                    } else {
                        continue;
                    }
                }
            };
            self.last = seg.end();
            return Some(seg);
        }
        None
    }
}
