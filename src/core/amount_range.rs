use ordered_float::OrderedFloat;
use serde::{Deserialize, Serialize};

/// Vertical amount domain of one redraw.
///
/// The domain always includes zero when every amount shares a sign: an
/// all-positive series floors `min` to 0 and an all-negative series raises
/// `max` to 0. `span` is never zero.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AmountRange {
    pub min: f64,
    pub max: f64,
    pub span: f64,
}

impl AmountRange {
    /// Builds the domain from raw amounts. Returns `None` for an empty slice.
    #[must_use]
    pub fn from_amounts(amounts: &[f64]) -> Option<Self> {
        let min = amounts.iter().copied().map(OrderedFloat).min()?.0;
        let max = amounts.iter().copied().map(OrderedFloat).max()?.0;
        Some(Self::from_bounds(min, max))
    }

    #[must_use]
    pub fn from_bounds(mut min: f64, mut max: f64) -> Self {
        if min > 0.0 && max > 0.0 {
            min = 0.0;
        }
        if min < 0.0 && max < 0.0 {
            max = 0.0;
        }
        let mut span = max - min;
        if span == 0.0 || !span.is_finite() {
            span = 1.0;
        }
        Self { min, max, span }
    }

    #[must_use]
    pub fn contains_zero(self) -> bool {
        self.min <= 0.0 && 0.0 <= self.max
    }

    /// Interpolated amount at `fraction` of the range measured from the bottom.
    #[must_use]
    pub fn value_at_fraction(self, fraction: f64) -> f64 {
        self.min + fraction * self.span
    }

    /// Maps an amount to a pixel row of a canvas `height` tall, clamped to it.
    #[must_use]
    pub fn project_y(self, amount: f64, height: f64) -> f64 {
        let y = height - ((amount - self.min) / self.span) * height;
        if y.is_finite() { y.clamp(0.0, height.max(0.0)) } else { height.max(0.0) }
    }
}

/// Derived per-redraw chart state: amount domain plus plot canvas size.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ChartState {
    pub min_amount: f64,
    pub max_amount: f64,
    pub amount_range: f64,
    pub canvas_width: f64,
    pub canvas_height: f64,
}

impl ChartState {
    #[must_use]
    pub fn new(range: AmountRange, canvas_width: f64, canvas_height: f64) -> Self {
        Self {
            min_amount: range.min,
            max_amount: range.max,
            amount_range: range.span,
            canvas_width,
            canvas_height,
        }
    }

    #[must_use]
    pub fn range(self) -> AmountRange {
        AmountRange {
            min: self.min_amount,
            max: self.max_amount,
            span: self.amount_range,
        }
    }

    #[must_use]
    pub fn project_x(self, index: usize, count: usize) -> f64 {
        if count < 2 {
            return 0.0;
        }
        let x = (index as f64 / (count - 1) as f64) * self.canvas_width;
        x.clamp(0.0, self.canvas_width)
    }

    #[must_use]
    pub fn project_y(self, amount: f64) -> f64 {
        self.range().project_y(amount, self.canvas_height)
    }

    /// Pixel row of amount zero.
    #[must_use]
    pub fn zero_y(self) -> f64 {
        self.project_y(0.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_positive_amounts_floor_minimum_to_zero() {
        let range = AmountRange::from_amounts(&[40.0, 120.0]).expect("range");
        assert_eq!(range.min, 0.0);
        assert_eq!(range.max, 120.0);
        assert_eq!(range.span, 120.0);
    }

    #[test]
    fn all_negative_amounts_raise_maximum_to_zero() {
        let range = AmountRange::from_amounts(&[-40.0, -120.0]).expect("range");
        assert_eq!(range.min, -120.0);
        assert_eq!(range.max, 0.0);
    }

    #[test]
    fn straddling_amounts_keep_true_bounds() {
        let range = AmountRange::from_amounts(&[-50.0, 30.0]).expect("range");
        assert_eq!((range.min, range.max, range.span), (-50.0, 30.0, 80.0));
        assert!(range.contains_zero());
    }

    #[test]
    fn degenerate_range_is_substituted_with_one() {
        let range = AmountRange::from_amounts(&[0.0, 0.0]).expect("range");
        assert_eq!(range.span, 1.0);
        assert!(AmountRange::from_amounts(&[]).is_none());
    }

    #[test]
    fn projection_is_clamped_into_canvas() {
        let range = AmountRange::from_bounds(0.0, 100.0);
        assert_eq!(range.project_y(100.0, 90.0), 0.0);
        assert_eq!(range.project_y(0.0, 90.0), 90.0);
        assert_eq!(range.project_y(500.0, 90.0), 0.0);
        assert_eq!(range.project_y(-500.0, 90.0), 90.0);
    }
}
