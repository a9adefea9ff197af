//! Elliptical arc math for the trazo path engine.
//!
//! The only geometry that needs real work when replaying path data is the
//! elliptical arc command; everything else maps directly onto the primitive
//! move/line/cubic operations. This crate holds that work ([`SvgArc`]) plus
//! the euclid type aliases ([`math`]) shared by the rest of the workspace.

pub mod math;

mod arc;

pub use crate::arc::{ArcFlags, CubicBezier, SvgArc};
