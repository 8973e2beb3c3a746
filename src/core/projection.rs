use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::core::amount_range::ChartState;
use crate::core::types::PixelPoint;

/// Pixel-space projection of one amount.
///
/// `synthetic` marks interpolated zero-crossing knots that take part in curve
/// fitting but never receive a marker.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PlottedPoint {
    pub x: f64,
    pub y: f64,
    pub amount: f64,
    #[serde(default)]
    pub synthetic: bool,
}

impl PlottedPoint {
    #[must_use]
    pub const fn new(x: f64, y: f64, amount: f64) -> Self {
        Self {
            x,
            y,
            amount,
            synthetic: false,
        }
    }

    #[must_use]
    pub const fn synthetic(x: f64, y: f64) -> Self {
        Self {
            x,
            y,
            amount: 0.0,
            synthetic: true,
        }
    }

    #[must_use]
    pub const fn position(self) -> PixelPoint {
        PixelPoint::new(self.x, self.y)
    }
}

/// Spreads amounts evenly across the canvas width and maps them onto rows.
///
/// Both coordinates are clamped to the canvas. A single amount lands at `x = 0`.
#[must_use]
pub fn project_points(amounts: &[f64], state: ChartState) -> Vec<PlottedPoint> {
    let count = amounts.len();
    amounts
        .iter()
        .enumerate()
        .map(|(index, &amount)| {
            let x = state.project_x(index, count);
            let y = state.project_y(amount);
            trace!(index, amount, x, y, "projected chart point");
            PlottedPoint::new(x, y, amount)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::amount_range::AmountRange;

    #[test]
    fn points_span_full_canvas_width() {
        let state = ChartState::new(AmountRange::from_bounds(0.0, 100.0), 300.0, 90.0);
        let points = project_points(&[0.0, 50.0, 100.0], state);
        let xs: Vec<f64> = points.iter().map(|p| p.x).collect();
        let ys: Vec<f64> = points.iter().map(|p| p.y).collect();
        assert_eq!(xs, vec![0.0, 150.0, 300.0]);
        assert_eq!(ys, vec![90.0, 45.0, 0.0]);
        assert!(points.iter().all(|p| !p.synthetic));
    }
}
