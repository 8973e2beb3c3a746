pub mod amount_range;
pub mod curve;
pub mod primitives;
pub mod projection;
pub mod series;
pub mod types;
pub mod zero_crossing;

pub use amount_range::{AmountRange, ChartState};
pub use curve::{
    CubicSegment, QuadraticSegment, SINGLE_POINT_CURVATURE, bowed_quadratic, catmull_rom_segments,
};
pub use projection::{PlottedPoint, project_points};
pub use series::{BuyInRecord, cumulative_buy_in_points, next_cumulative_point};
pub use types::{DataPoint, PixelPoint, Viewport};
pub use zero_crossing::{crosses_zero, insert_zero_crossings, zero_crossing_fraction};
