use crate::core::projection::PlottedPoint;

/// Inserts a synthetic knot wherever two neighbours have strictly opposite signs.
///
/// The knot sits on the segment at the fraction where it crosses `zero_y`,
/// or at the segment midpoint when the segment is flat in pixel space.
/// Zero amounts never trigger an insertion.
#[must_use]
pub fn insert_zero_crossings(points: &[PlottedPoint], zero_y: f64) -> Vec<PlottedPoint> {
    let Some(first) = points.first() else {
        return Vec::new();
    };

    let mut knots = Vec::with_capacity(points.len() * 2);
    knots.push(*first);
    for pair in points.windows(2) {
        let (from, to) = (pair[0], pair[1]);
        if crosses_zero(from.amount, to.amount) {
            knots.push(zero_crossing_knot(from, to, zero_y));
        }
        knots.push(to);
    }
    knots
}

#[must_use]
pub fn crosses_zero(from: f64, to: f64) -> bool {
    (from < 0.0 && to > 0.0) || (from > 0.0 && to < 0.0)
}

/// Fraction along `from -> to` where the segment reaches `zero_y`.
#[must_use]
pub fn zero_crossing_fraction(from: PlottedPoint, to: PlottedPoint, zero_y: f64) -> f64 {
    let delta_y = to.y - from.y;
    if delta_y == 0.0 {
        return 0.5;
    }
    ((zero_y - from.y) / delta_y).clamp(0.0, 1.0)
}

fn zero_crossing_knot(from: PlottedPoint, to: PlottedPoint, zero_y: f64) -> PlottedPoint {
    let t = zero_crossing_fraction(from, to, zero_y);
    PlottedPoint::synthetic(from.x + (to.x - from.x) * t, from.y + (to.y - from.y) * t)
}
