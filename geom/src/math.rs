//! Aliases for the euclid types used throughout the crate.

pub type Point = euclid::default::Point2D<f32>;
pub type Vector = euclid::default::Vector2D<f32>;
pub type Size = euclid::default::Size2D<f32>;
pub type Rect = euclid::default::Rect<f32>;
pub type Angle = euclid::Angle<f32>;

#[inline]
pub fn point(x: f32, y: f32) -> Point {
    Point::new(x, y)
}

#[inline]
pub fn vector(x: f32, y: f32) -> Vector {
    Vector::new(x, y)
}

#[inline]
pub fn size(w: f32, h: f32) -> Size {
    Size::new(w, h)
}

#[inline]
pub fn rect(x: f32, y: f32, w: f32, h: f32) -> Rect {
    Rect::new(point(x, y), size(w, h))
}
