//! Sink traits for receiving drawing operations.
//!
//! The interpreter does not know what its output is for: it pushes
//! operations into a [`PathBuilder`] and lets the sink decide whether to
//! store them ([`crate::Path`]'s builder), print them, or hand them to a
//! rendering surface.

use crate::math::Point;
use crate::ops::PathOp;

/// Consumes a builder and produces whatever it accumulated.
pub trait Build {
    /// The type of object that is created by this builder.
    type PathType;

    fn build(self) -> Self::PathType;
}

/// Receives primitive drawing operations in order.
pub trait PathBuilder {
    fn move_to(&mut self, to: Point);
    fn line_to(&mut self, to: Point);
    fn cubic_bezier_to(&mut self, ctrl1: Point, ctrl2: Point, to: Point);
    fn close(&mut self);

    /// Forwards an already-materialized operation.
    fn path_op(&mut self, op: PathOp) {
        match op {
            PathOp::MoveTo(to) => self.move_to(to),
            PathOp::LineTo(to) => self.line_to(to),
            PathOp::CubicTo(ctrl1, ctrl2, to) => self.cubic_bezier_to(ctrl1, ctrl2, to),
            PathOp::Close => self.close(),
        }
    }
}
