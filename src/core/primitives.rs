use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};

use crate::error::{ChartError, ChartResult};

pub fn decimal_to_f64(value: Decimal, field_name: &str) -> ChartResult<f64> {
    value.to_f64().ok_or_else(|| {
        ChartError::InvalidData(format!("{field_name} cannot be represented as f64"))
    })
}

/// Formats an amount as a whole-dollar label such as `$300` or `$-120`.
///
/// Midpoints round away from zero. Non-finite input renders as `$0`.
#[must_use]
pub fn format_currency_whole(value: f64) -> String {
    let Some(decimal) = Decimal::from_f64_retain(value) else {
        return "$0".to_owned();
    };
    let rounded = decimal.round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero);
    if rounded.is_zero() {
        return "$0".to_owned();
    }
    format!("${}", rounded.normalize())
}
