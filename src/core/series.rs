use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::core::types::DataPoint;

/// Raw buy-in transaction as recorded by the host application.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BuyInRecord {
    pub amount: Decimal,
    pub timestamp: DateTime<Utc>,
}

impl BuyInRecord {
    #[must_use]
    pub fn new(amount: Decimal, timestamp: DateTime<Utc>) -> Self {
        Self { amount, timestamp }
    }
}

/// Builds the buy-in chart series: records sorted by time, each point carrying
/// the running total up to and including that record.
///
/// Records sharing a timestamp keep their input order.
#[must_use]
pub fn cumulative_buy_in_points(records: &[BuyInRecord]) -> Vec<DataPoint> {
    let mut ordered = records.to_vec();
    ordered.sort_by_key(|record| record.timestamp);

    let mut total = Decimal::ZERO;
    ordered
        .into_iter()
        .map(|record| {
            total += record.amount;
            DataPoint::new(total).with_timestamp(record.timestamp)
        })
        .collect()
}

/// Appends one buy-in to an existing cumulative series.
#[must_use]
pub fn next_cumulative_point(series: &[DataPoint], record: BuyInRecord) -> DataPoint {
    let previous = series.last().map_or(Decimal::ZERO, |point| point.amount);
    DataPoint::new(previous + record.amount).with_timestamp(record.timestamp)
}
