use smallvec::SmallVec;

use crate::core::ChartState;
use crate::core::primitives::format_currency_whole;
use crate::render::{LinePrimitive, RenderFrame, TextPrimitive};

use super::ChartConfig;

/// Scale rows as fractions of the canvas height, bottom to top.
pub const SCALE_FRACTIONS: [f64; 5] = [0.0, 0.25, 0.5, 0.75, 1.0];

/// One horizontal scale row.
#[derive(Debug, Clone, PartialEq)]
pub struct ScaleRow {
    pub fraction: f64,
    pub y: f64,
    pub amount: f64,
    pub label: String,
}

#[must_use]
pub fn scale_rows(state: ChartState) -> SmallVec<[ScaleRow; 5]> {
    let range = state.range();
    SCALE_FRACTIONS
        .iter()
        .map(|&fraction| {
            let amount = range.value_at_fraction(fraction);
            ScaleRow {
                fraction,
                y: state.canvas_height - fraction * state.canvas_height,
                amount,
                label: format_currency_whole(amount),
            }
        })
        .collect()
}

/// Appends ticks, grid lines and labels for every scale row.
///
/// Ticks end at the plot's left edge; labels start at the far side of the gutter.
pub(super) fn push_scale_primitives(
    frame: &mut RenderFrame,
    state: ChartState,
    config: &ChartConfig,
) {
    let palette = &config.palette;
    for row in scale_rows(state) {
        frame.scale_ticks.push(LinePrimitive::horizontal(
            -config.tick_length_px,
            0.0,
            row.y,
            config.tick_line_width_px,
            palette.scale_tick_color,
        ));
        frame.grid_lines.push(LinePrimitive::horizontal(
            0.0,
            state.canvas_width,
            row.y,
            config.grid_line_width_px,
            palette.grid_line_color,
        ));
        frame.scale_labels.push(TextPrimitive::new(
            row.label,
            -config.axis_gutter_width_px,
            row.y - config.label_offset_y_px,
            config.label_font_size_px,
            palette.scale_label_color,
        ));
    }
}
