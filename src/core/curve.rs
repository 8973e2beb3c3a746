use serde::{Deserialize, Serialize};

use crate::core::projection::PlottedPoint;
use crate::core::types::PixelPoint;

/// Perpendicular bow applied to the single-point profit curve, as a share of
/// the chord length.
pub const SINGLE_POINT_CURVATURE: f64 = 0.15;

/// One cubic Bezier segment between two consecutive knots.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CubicSegment {
    pub start: PixelPoint,
    pub control1: PixelPoint,
    pub control2: PixelPoint,
    pub end: PixelPoint,
    /// Mean amount of both endpoint knots; drives segment coloring.
    pub mean_amount: f64,
}

/// One quadratic Bezier segment.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct QuadraticSegment {
    pub start: PixelPoint,
    pub control: PixelPoint,
    pub end: PixelPoint,
}

impl QuadraticSegment {
    /// Pulls the control point into `[0, width] x [0, height]`.
    ///
    /// A quadratic stays inside the hull of its three points, so with both
    /// endpoints on the canvas the whole curve does too.
    #[must_use]
    pub fn with_control_clamped(self, width: f64, height: f64) -> Self {
        Self {
            control: PixelPoint::new(
                self.control.x.clamp(0.0, width.max(0.0)),
                self.control.y.clamp(0.0, height.max(0.0)),
            ),
            ..self
        }
    }

    /// Point on the curve at parameter `t` in `[0, 1]`.
    #[must_use]
    pub fn point_at(&self, t: f64) -> PixelPoint {
        let u = 1.0 - t;
        PixelPoint::new(
            u * u * self.start.x + 2.0 * u * t * self.control.x + t * t * self.end.x,
            u * u * self.start.y + 2.0 * u * t * self.control.y + t * t * self.end.y,
        )
    }
}

/// Converts a knot sequence into uniform Catmull-Rom cubic segments.
///
/// For every pair `(p1, p2)` with neighbours `p0` and `p3` (each clamped to
/// the pair at the sequence ends): `c1 = p1 + (p2 - p0) / 6` and
/// `c2 = p2 - (p3 - p1) / 6`.
#[must_use]
pub fn catmull_rom_segments(knots: &[PlottedPoint]) -> Vec<CubicSegment> {
    if knots.len() < 2 {
        return Vec::new();
    }

    let last = knots.len() - 1;
    (0..last)
        .map(|i| {
            let p0 = knots[i.saturating_sub(1)];
            let p1 = knots[i];
            let p2 = knots[i + 1];
            let p3 = knots[(i + 2).min(last)];

            CubicSegment {
                start: p1.position(),
                control1: PixelPoint::new(p1.x + (p2.x - p0.x) / 6.0, p1.y + (p2.y - p0.y) / 6.0),
                control2: PixelPoint::new(p2.x - (p3.x - p1.x) / 6.0, p2.y - (p3.y - p1.y) / 6.0),
                end: p2.position(),
                mean_amount: (p1.amount + p2.amount) / 2.0,
            }
        })
        .collect()
}

/// Quadratic curve from `start` to `end` bowed perpendicular to the chord.
///
/// The control point is the chord midpoint pushed along the chord's left-hand
/// normal by `chord_length * curvature`. A zero-length chord keeps the control
/// point at the midpoint.
#[must_use]
pub fn bowed_quadratic(start: PixelPoint, end: PixelPoint, curvature: f64) -> QuadraticSegment {
    let mid = start.midpoint(end);
    let length = start.distance(end);
    if length == 0.0 || !length.is_finite() {
        return QuadraticSegment {
            start,
            control: mid,
            end,
        };
    }

    let dx = end.x - start.x;
    let dy = end.y - start.y;
    let normal_x = -dy / length;
    let normal_y = dx / length;
    let offset = length * curvature;

    QuadraticSegment {
        start,
        control: PixelPoint::new(mid.x + normal_x * offset, mid.y + normal_y * offset),
        end,
    }
}
