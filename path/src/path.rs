//! A simple path data structure.
//!
//! [`Path`] stores the outcome of a replay compactly as a verb buffer plus
//! a point buffer, and plays it back as [`PathOp`] values through its
//! iterator. It is created with a [`Builder`], which is just the
//! [`PathBuilder`] sink that appends to the two buffers.

use crate::builder::{Build, PathBuilder};
use crate::math::{point, rect, Point, Rect};
use crate::ops::PathOp;

/// Operation tags stored alongside the point buffer.
///
/// A `MoveTo` or `LineTo` consumes one point, a `CubicTo` three, a `Close`
/// none.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serialization", derive(serde::Serialize, serde::Deserialize))]
pub enum Verb {
    MoveTo,
    LineTo,
    CubicTo,
    Close,
}

/// An ordered sequence of primitive drawing operations.
#[derive(Clone, Debug, Default)]
#[cfg_attr(feature = "serialization", derive(serde::Serialize, serde::Deserialize))]
pub struct Path {
    points: Vec<Point>,
    verbs: Vec<Verb>,
}

impl Path {
    pub fn new() -> Path {
        Path {
            points: Vec::new(),
            verbs: Vec::new(),
        }
    }

    /// Creates a [`Builder`] to assemble a path.
    pub fn builder() -> Builder {
        Builder::new()
    }

    pub fn iter(&self) -> Iter {
        Iter {
            points: self.points.iter(),
            verbs: self.verbs.iter(),
        }
    }

    pub fn points(&self) -> &[Point] {
        &self.points[..]
    }

    pub fn verbs(&self) -> &[Verb] {
        &self.verbs[..]
    }

    pub fn is_empty(&self) -> bool {
        self.verbs.is_empty()
    }

    /// A conservative bounding rectangle, computed from the stored points
    /// without evaluating the curves.
    ///
    /// Control points are included, so the rectangle can overshoot the ink
    /// of the path but never undershoots it. An empty path yields the zero
    /// rectangle.
    pub fn fast_bounding_rect(&self) -> Rect {
        if self.points.is_empty() {
            return rect(0.0, 0.0, 0.0, 0.0);
        }

        let mut min = self.points[0];
        let mut max = self.points[0];
        for p in &self.points[1..] {
            min = point(min.x.min(p.x), min.y.min(p.y));
            max = point(max.x.max(p.x), max.y.max(p.y));
        }

        rect(min.x, min.y, max.x - min.x, max.y - min.y)
    }
}

impl<'l> IntoIterator for &'l Path {
    type Item = PathOp;
    type IntoIter = Iter<'l>;

    fn into_iter(self) -> Iter<'l> {
        self.iter()
    }
}

/// The [`PathBuilder`] that accumulates a [`Path`].
#[derive(Clone, Debug, Default)]
pub struct Builder {
    path: Path,
}

impl Builder {
    pub fn new() -> Builder {
        Builder { path: Path::new() }
    }

    pub fn with_capacity(cap: usize) -> Builder {
        Builder {
            path: Path {
                points: Vec::with_capacity(cap),
                verbs: Vec::with_capacity(cap),
            },
        }
    }
}

impl PathBuilder for Builder {
    fn move_to(&mut self, to: Point) {
        self.path.points.push(to);
        self.path.verbs.push(Verb::MoveTo);
    }

    fn line_to(&mut self, to: Point) {
        self.path.points.push(to);
        self.path.verbs.push(Verb::LineTo);
    }

    fn cubic_bezier_to(&mut self, ctrl1: Point, ctrl2: Point, to: Point) {
        self.path.points.push(ctrl1);
        self.path.points.push(ctrl2);
        self.path.points.push(to);
        self.path.verbs.push(Verb::CubicTo);
    }

    fn close(&mut self) {
        self.path.verbs.push(Verb::Close);
    }
}

impl Build for Builder {
    type PathType = Path;

    fn build(self) -> Path {
        self.path
    }
}

/// Iterates over a path, yielding one [`PathOp`] per stored verb.
#[derive(Clone, Debug)]
pub struct Iter<'l> {
    points: std::slice::Iter<'l, Point>,
    verbs: std::slice::Iter<'l, Verb>,
}

impl<'l> Iterator for Iter<'l> {
    type Item = PathOp;

    fn next(&mut self) -> Option<PathOp> {
        match self.verbs.next() {
            Some(Verb::MoveTo) => {
                let to = *self.points.next()?;
                Some(PathOp::MoveTo(to))
            }
            Some(Verb::LineTo) => {
                let to = *self.points.next()?;
                Some(PathOp::LineTo(to))
            }
            Some(Verb::CubicTo) => {
                let ctrl1 = *self.points.next()?;
                let ctrl2 = *self.points.next()?;
                let to = *self.points.next()?;
                Some(PathOp::CubicTo(ctrl1, ctrl2, to))
            }
            Some(Verb::Close) => Some(PathOp::Close),
            None => None,
        }
    }
}

#[test]
fn builder_round_trip() {
    let mut builder = Path::builder();
    builder.move_to(point(0.0, 0.0));
    builder.line_to(point(1.0, 0.0));
    builder.cubic_bezier_to(point(2.0, 0.0), point(2.0, 1.0), point(2.0, 2.0));
    builder.close();
    builder.move_to(point(10.0, 0.0));
    builder.line_to(point(11.0, 0.0));

    let path = builder.build();
    let mut it = path.iter();
    assert_eq!(it.next(), Some(PathOp::MoveTo(point(0.0, 0.0))));
    assert_eq!(it.next(), Some(PathOp::LineTo(point(1.0, 0.0))));
    assert_eq!(
        it.next(),
        Some(PathOp::CubicTo(
            point(2.0, 0.0),
            point(2.0, 1.0),
            point(2.0, 2.0)
        ))
    );
    assert_eq!(it.next(), Some(PathOp::Close));
    assert_eq!(it.next(), Some(PathOp::MoveTo(point(10.0, 0.0))));
    assert_eq!(it.next(), Some(PathOp::LineTo(point(11.0, 0.0))));
    assert_eq!(it.next(), None);
    assert_eq!(it.next(), None);
}

#[test]
fn empty_path() {
    let path = Path::builder().build();
    assert!(path.is_empty());
    assert_eq!(path.iter().next(), None);
    assert_eq!(path.fast_bounding_rect(), rect(0.0, 0.0, 0.0, 0.0));
}

#[test]
fn bounding_rect_covers_control_points() {
    let mut builder = Path::builder();
    builder.move_to(point(1.0, 1.0));
    builder.cubic_bezier_to(point(4.0, -2.0), point(6.0, 3.0), point(5.0, 1.0));

    let path = builder.build();
    assert_eq!(path.fast_bounding_rect(), rect(1.0, -2.0, 5.0, 5.0));
}
