//! Elliptical arc segments and their conversion to cubic bézier curves.
//!
//! Arcs are specified the way SVG path data specifies them: two endpoints,
//! a pair of radii, a rotation of the ellipse's x axis and two flags picking
//! one of the four candidate arcs. Rendering surfaces rarely understand this
//! endpoint parameterization directly, so [`SvgArc`] converts itself into a
//! short run of cubic bézier curves via the standard center parameterization
//! (W3C SVG implementation notes F.6), each curve covering at most 90° of
//! sweep.

use arrayvec::ArrayVec;
use log::trace;

use crate::math::{point, Angle, Point, Vector};

/// Flag parameters for arcs as described by the SVG specification.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serialization", derive(serde::Serialize, serde::Deserialize))]
pub struct ArcFlags {
    /// Pick the candidate arc sweeping more than 180°.
    pub large_arc: bool,
    /// Pick the candidate arc traversed in the positive angular direction.
    pub sweep: bool,
}

/// An elliptical arc between two endpoints.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serialization", derive(serde::Serialize, serde::Deserialize))]
pub struct SvgArc {
    pub from: Point,
    pub to: Point,
    pub radii: Vector,
    pub x_rotation: Angle,
    pub flags: ArcFlags,
}

/// One cubic bézier curve of a flattened arc, starting at the previous
/// curve's endpoint (or at the arc's start point for the first one).
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serialization", derive(serde::Serialize, serde::Deserialize))]
pub struct CubicBezier {
    pub ctrl1: Point,
    pub ctrl2: Point,
    pub to: Point,
}

impl SvgArc {
    /// Whether the radii degenerate this arc into a straight line segment.
    ///
    /// Callers are expected to emit a line to `self.to` instead of invoking
    /// the conversion; a zero radius is not an error.
    pub fn is_straight_line(&self) -> bool {
        self.radii.x == 0.0 || self.radii.y == 0.0
    }

    /// Approximates the arc with a sequence of cubic bézier curves, at most
    /// one per 90° of sweep.
    ///
    /// Radii too small to span the endpoints are scaled up proportionally,
    /// and the sweep is clamped to ±360°. Coincident endpoints produce no
    /// curves at all. The last curve ends at the trigonometric image of the
    /// requested endpoint, which can drift from `self.to` by a small amount
    /// of floating point noise; no correction is applied.
    pub fn for_each_cubic_bezier<F>(&self, cb: &mut F)
    where
        F: FnMut(&CubicBezier),
    {
        debug_assert!(!self.is_straight_line());

        let x0 = self.from.x as f64;
        let y0 = self.from.y as f64;
        let x = self.to.x as f64;
        let y = self.to.y as f64;
        let mut rx = self.radii.x as f64;
        let mut ry = self.radii.y as f64;

        let phi = ((self.x_rotation.to_degrees() as f64) % 360.0).to_radians();
        let cos_phi = phi.cos();
        let sin_phi = phi.sin();

        // Half the displacement between the endpoints, in the rotated frame.
        let dx2 = (x0 - x) / 2.0;
        let dy2 = (y0 - y) / 2.0;
        if dx2 == 0.0 && dy2 == 0.0 {
            trace!("coincident arc endpoints at ({}, {})", x0, y0);
            return;
        }

        let x1 = cos_phi * dx2 + sin_phi * dy2;
        let y1 = -sin_phi * dx2 + cos_phi * dy2;

        let mut rx_sq = rx * rx;
        let mut ry_sq = ry * ry;
        let x1_sq = x1 * x1;
        let y1_sq = y1 * y1;

        // Radii too small to connect the endpoints are scaled up uniformly
        // rather than rejected (F.6.6).
        let radii_check = x1_sq / rx_sq + y1_sq / ry_sq;
        if radii_check > 1.0 {
            rx *= radii_check.sqrt();
            ry *= radii_check.sqrt();
            rx_sq = rx * rx;
            ry_sq = ry * ry;
            trace!("arc radii scaled up to ({}, {})", rx, ry);
        }

        let sign = if self.flags.large_arc == self.flags.sweep {
            -1.0
        } else {
            1.0
        };
        // Round-off can push the discriminant slightly below zero.
        let sq = ((rx_sq * ry_sq - rx_sq * y1_sq - ry_sq * x1_sq)
            / (rx_sq * y1_sq + ry_sq * x1_sq))
            .max(0.0);
        let coef = sign * sq.sqrt();
        let cx1 = coef * (rx * y1 / ry);
        let cy1 = coef * -(ry * x1 / rx);

        let center_x = cos_phi * cx1 - sin_phi * cy1 + (x0 + x) / 2.0;
        let center_y = sin_phi * cx1 + cos_phi * cy1 + (y0 + y) / 2.0;

        let ux = (x1 - cx1) / rx;
        let uy = (y1 - cy1) / ry;
        let vx = (-x1 - cx1) / rx;
        let vy = (-y1 - cy1) / ry;

        let start_angle = uy.atan2(ux).to_degrees();
        let mut sweep_angle = vy.atan2(vx).to_degrees() - start_angle;
        if !self.flags.sweep && sweep_angle > 0.0 {
            sweep_angle -= 360.0;
        } else if self.flags.sweep && sweep_angle < 0.0 {
            sweep_angle += 360.0;
        }
        sweep_angle = sweep_angle.max(-360.0).min(360.0);

        trace!(
            "arc center ({}, {}), start {}°, sweep {}°",
            center_x,
            center_y,
            start_angle,
            sweep_angle
        );

        arc_to_beziers(center_x, center_y, rx, ry, phi, start_angle, sweep_angle, cb);
    }

    /// The curves of [`SvgArc::for_each_cubic_bezier`], collected.
    ///
    /// A clamped sweep of ±360° at ≤90° per curve bounds the result at four
    /// entries.
    pub fn to_cubic_beziers(&self) -> ArrayVec<[CubicBezier; 4]> {
        let mut curves = ArrayVec::new();
        self.for_each_cubic_bezier(&mut |curve| curves.push(*curve));
        curves
    }
}

/// Emits the sub-arc cubics of a center-parameterized arc.
///
/// `start_angle` and `sweep_angle` are in degrees, `theta` (the ellipse
/// rotation) in radians. Control points use the tangent formula
/// `4/3 · tan(η/2) / (1 + cos(η/2))` scaled by the radii and rotated back
/// into the unrotated frame.
#[allow(clippy::too_many_arguments)]
fn arc_to_beziers<F>(
    cx: f64,
    cy: f64,
    rx: f64,
    ry: f64,
    theta: f64,
    start_angle: f64,
    sweep_angle: f64,
    cb: &mut F,
) where
    F: FnMut(&CubicBezier),
{
    let num_segments = (sweep_angle.abs() / 90.0).ceil() as u32;
    if num_segments == 0 {
        return;
    }

    let eta = (sweep_angle / num_segments as f64).to_radians();
    let (sin_theta, cos_theta) = theta.sin_cos();
    let mut angle = start_angle.to_radians();

    let mut prev_x = cx + rx * angle.cos() * cos_theta - ry * angle.sin() * sin_theta;
    let mut prev_y = cy + rx * angle.cos() * sin_theta + ry * angle.sin() * cos_theta;

    let alpha = (eta / 2.0).tan();
    let factor = 4.0 / 3.0 * alpha / (1.0 + (eta / 2.0).cos());

    for _ in 0..num_segments {
        let next_angle = angle + eta;
        let (sin_angle, cos_angle) = angle.sin_cos();
        let (sin_next, cos_next) = next_angle.sin_cos();

        // Endpoint tangents, scaled to the bézier control distance.
        let dx1 = rx * -sin_angle * factor;
        let dy1 = ry * cos_angle * factor;
        let dx2 = rx * -sin_next * factor;
        let dy2 = ry * cos_next * factor;

        let x2 = cx + rx * cos_next * cos_theta - ry * sin_next * sin_theta;
        let y2 = cy + rx * cos_next * sin_theta + ry * sin_next * cos_theta;

        cb(&CubicBezier {
            ctrl1: point(
                (prev_x + dx1 * cos_theta - dy1 * sin_theta) as f32,
                (prev_y + dx1 * sin_theta + dy1 * cos_theta) as f32,
            ),
            ctrl2: point(
                (x2 + dx2 * cos_theta - dy2 * sin_theta) as f32,
                (y2 + dx2 * sin_theta + dy2 * cos_theta) as f32,
            ),
            to: point(x2 as f32, y2 as f32),
        });

        angle = next_angle;
        prev_x = x2;
        prev_y = y2;
    }
}

#[cfg(test)]
use crate::math::vector;

#[cfg(test)]
fn assert_near(a: Point, b: Point, tolerance: f32) {
    assert!(
        (a - b).length() <= tolerance,
        "{:?} is not within {} of {:?}",
        a,
        tolerance,
        b
    );
}

#[test]
fn quarter_circle() {
    let arc = SvgArc {
        from: point(1.0, 0.0),
        to: point(0.0, 1.0),
        radii: vector(1.0, 1.0),
        x_rotation: Angle::degrees(0.0),
        flags: ArcFlags {
            large_arc: false,
            sweep: false,
        },
    };

    let curves = arc.to_cubic_beziers();
    assert_eq!(curves.len(), 1);
    assert_near(curves[0].to, point(0.0, 1.0), 1e-4);

    // This arc lies on the unit circle around (1, 1); the curve midpoint
    // B(0.5) should stay close to it.
    let mid = point(
        0.125 * (1.0 + 3.0 * curves[0].ctrl1.x + 3.0 * curves[0].ctrl2.x + curves[0].to.x),
        0.125 * (0.0 + 3.0 * curves[0].ctrl1.y + 3.0 * curves[0].ctrl2.y + curves[0].to.y),
    );
    let r = (mid - point(1.0, 1.0)).length();
    assert!((r - 1.0).abs() < 1e-2, "midpoint radius {}", r);
}

#[test]
fn full_sweep_splits_in_four() {
    // Nearly coincident endpoints with both flags set select the full 360°
    // sweep, which must be split into four 90° curves.
    let arc = SvgArc {
        from: point(5.0, 0.0),
        to: point(5.0, -0.001),
        radii: vector(5.0, 5.0),
        x_rotation: Angle::degrees(0.0),
        flags: ArcFlags {
            large_arc: true,
            sweep: true,
        },
    };

    let curves = arc.to_cubic_beziers();
    assert_eq!(curves.len(), 4);
    assert_near(curves[3].to, arc.to, 1e-4);
}

#[test]
fn undersized_radii_are_corrected() {
    let arc = SvgArc {
        from: point(0.0, 0.0),
        to: point(10.0, 0.0),
        radii: vector(1.0, 1.0),
        x_rotation: Angle::degrees(0.0),
        flags: ArcFlags {
            large_arc: false,
            sweep: true,
        },
    };

    // The radii grow until the endpoints fit on the ellipse, leaving a
    // half circle of diameter 10.
    let curves = arc.to_cubic_beziers();
    assert_eq!(curves.len(), 2);
    assert_near(curves[1].to, point(10.0, 0.0), 1e-4);
    assert_near(curves[0].to, point(5.0, -5.0), 1e-3);
}

#[test]
fn coincident_endpoints_emit_nothing() {
    let arc = SvgArc {
        from: point(3.0, 4.0),
        to: point(3.0, 4.0),
        radii: vector(2.0, 2.0),
        x_rotation: Angle::degrees(0.0),
        flags: ArcFlags::default(),
    };

    assert!(arc.to_cubic_beziers().is_empty());
}

#[test]
fn zero_radius_is_a_line() {
    let arc = SvgArc {
        from: point(0.0, 0.0),
        to: point(10.0, 10.0),
        radii: vector(0.0, 1.0),
        x_rotation: Angle::degrees(0.0),
        flags: ArcFlags::default(),
    };

    assert!(arc.is_straight_line());
}

#[test]
fn rotated_ellipse_hits_endpoint() {
    let arc = SvgArc {
        from: point(0.0, 0.0),
        to: point(7.0, 3.0),
        radii: vector(6.0, 2.0),
        x_rotation: Angle::degrees(30.0),
        flags: ArcFlags {
            large_arc: true,
            sweep: false,
        },
    };

    let curves = arc.to_cubic_beziers();
    assert!(!curves.is_empty());
    assert_near(curves[curves.len() - 1].to, arc.to, 1e-3);
}
