use crate::math::Point;

/// A primitive drawing operation, ready for a rasterizer or serializer.
///
/// Quadratic curves and elliptical arcs never appear here: replaying a
/// command stream lowers both to `CubicTo` (or to `LineTo` for zero-radius
/// arcs).
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serialization", derive(serde::Serialize, serde::Deserialize))]
pub enum PathOp {
    MoveTo(Point),
    LineTo(Point),
    CubicTo(Point, Point, Point),
    Close,
}

impl PathOp {
    /// The point the pen ends up at, if the operation names one.
    ///
    /// `Close` returns `None`: its destination is the current subpath's
    /// start point, which the operation itself does not carry.
    pub fn destination(self) -> Option<Point> {
        match self {
            PathOp::MoveTo(to) | PathOp::LineTo(to) | PathOp::CubicTo(_, _, to) => Some(to),
            PathOp::Close => None,
        }
    }
}
