use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use rust_decimal::prelude::FromPrimitive;
use serde::{Deserialize, Serialize};

use crate::error::{ChartError, ChartResult};

/// Drawable surface size as reported by the host, in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Viewport {
    pub width: f64,
    pub height: f64,
}

impl Viewport {
    #[must_use]
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// Returns `true` once the host has measured the surface.
    #[must_use]
    pub fn is_valid(self) -> bool {
        self.width.is_finite() && self.height.is_finite() && self.width > 0.0 && self.height > 0.0
    }
}

impl Default for Viewport {
    fn default() -> Self {
        Self::new(0.0, 0.0)
    }
}

/// One chronological monetary sample (a cumulative buy-in or running profit).
///
/// Identity is positional: the index inside the bound sequence is the time order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DataPoint {
    pub amount: Decimal,
    #[serde(default)]
    pub timestamp: Option<DateTime<Utc>>,
}

impl DataPoint {
    #[must_use]
    pub fn new(amount: Decimal) -> Self {
        Self {
            amount,
            timestamp: None,
        }
    }

    #[must_use]
    pub fn with_timestamp(mut self, timestamp: DateTime<Utc>) -> Self {
        self.timestamp = Some(timestamp);
        self
    }

    pub fn from_f64(amount: f64) -> ChartResult<Self> {
        if !amount.is_finite() {
            return Err(ChartError::InvalidData("amount must be finite".to_owned()));
        }
        let amount = Decimal::from_f64(amount).ok_or_else(|| {
            ChartError::InvalidData(format!("amount {amount} cannot be represented as decimal"))
        })?;
        Ok(Self::new(amount))
    }
}

impl From<Decimal> for DataPoint {
    fn from(amount: Decimal) -> Self {
        Self::new(amount)
    }
}

/// Point in plot-local pixel space (origin at the top-left of the plot area).
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct PixelPoint {
    pub x: f64,
    pub y: f64,
}

impl PixelPoint {
    #[must_use]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    #[must_use]
    pub fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }

    #[must_use]
    pub fn midpoint(self, other: Self) -> Self {
        Self::new((self.x + other.x) * 0.5, (self.y + other.y) * 0.5)
    }

    #[must_use]
    pub fn distance(self, other: Self) -> f64 {
        (other.x - self.x).hypot(other.y - self.y)
    }
}
