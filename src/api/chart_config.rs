use serde::{Deserialize, Serialize};

use crate::core::SINGLE_POINT_CURVATURE;
use crate::error::{ChartError, ChartResult};
use crate::render::Color;

/// Which series the chart is showing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum ChartMode {
    /// Raw cumulative buy-ins: straight segments, uniform color, no reference line.
    #[default]
    BuyIn,
    /// Running profit: gain/loss coloring, smooth curve, zero reference line.
    Profit,
}

impl ChartMode {
    #[must_use]
    pub const fn from_profit_flag(is_profit_mode: bool) -> Self {
        if is_profit_mode {
            Self::Profit
        } else {
            Self::BuyIn
        }
    }

    #[must_use]
    pub const fn is_profit(self) -> bool {
        matches!(self, Self::Profit)
    }
}

/// Colors used by one render pass.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChartPalette {
    pub gain_color: Color,
    pub loss_color: Color,
    /// Start marker of a single-point profit chart.
    pub neutral_color: Color,
    pub buy_in_color: Color,
    pub marker_stroke_color: Color,
    pub reference_line_color: Color,
    pub grid_line_color: Color,
    pub scale_tick_color: Color,
    pub scale_label_color: Color,
}

impl Default for ChartPalette {
    fn default() -> Self {
        Self {
            gain_color: Color::from_rgb8(0x4C, 0xAF, 0x50),
            loss_color: Color::from_rgb8(0xF4, 0x43, 0x36),
            neutral_color: Color::rgb(1.0, 1.0, 1.0),
            buy_in_color: Color::from_rgb8(0x4F, 0xC3, 0xF7),
            marker_stroke_color: Color::rgb(1.0, 1.0, 1.0),
            reference_line_color: Color::rgba(1.0, 1.0, 1.0, 0.5),
            grid_line_color: Color::rgba(1.0, 1.0, 1.0, 0.1),
            scale_tick_color: Color::from_rgb8(0x88, 0x88, 0x88),
            scale_label_color: Color::from_rgb8(0xAA, 0xAA, 0xAA),
        }
    }
}

impl ChartPalette {
    /// Series color for an amount: gain at or above zero, loss below.
    #[must_use]
    pub fn sign_color(&self, amount: f64) -> Color {
        if amount >= 0.0 {
            self.gain_color
        } else {
            self.loss_color
        }
    }

    fn validate(&self) -> ChartResult<()> {
        for color in [
            self.gain_color,
            self.loss_color,
            self.neutral_color,
            self.buy_in_color,
            self.marker_stroke_color,
            self.reference_line_color,
            self.grid_line_color,
            self.scale_tick_color,
            self.scale_label_color,
        ] {
            color
                .validate()
                .map_err(|err| ChartError::InvalidConfig(format!("palette: {err}")))?;
        }
        Ok(())
    }
}

/// Layout and styling of the chart.
///
/// This type is serializable so host applications can keep chart theming in
/// their own settings files. Missing fields fall back to defaults.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChartConfig {
    /// Inset subtracted from both surface dimensions.
    pub surface_margin_px: f64,
    pub fallback_canvas_width_px: f64,
    pub fallback_canvas_height_px: f64,
    /// Width of the scale gutter left of the plot. Usually a theme value.
    pub axis_gutter_width_px: f64,
    pub tick_length_px: f64,
    pub marker_size_px: f64,
    pub marker_stroke_width_px: f64,
    pub series_stroke_width_px: f64,
    pub reference_line_width_px: f64,
    pub grid_line_width_px: f64,
    pub tick_line_width_px: f64,
    pub label_font_size_px: f64,
    /// Distance from a label's top edge to its scale row.
    pub label_offset_y_px: f64,
    pub single_point_curvature: f64,
    pub palette: ChartPalette,
}

impl Default for ChartConfig {
    fn default() -> Self {
        Self {
            surface_margin_px: 10.0,
            fallback_canvas_width_px: 300.0,
            fallback_canvas_height_px: 90.0,
            axis_gutter_width_px: 40.0,
            tick_length_px: 5.0,
            marker_size_px: 6.0,
            marker_stroke_width_px: 1.0,
            series_stroke_width_px: 2.0,
            reference_line_width_px: 1.0,
            grid_line_width_px: 1.0,
            tick_line_width_px: 1.0,
            label_font_size_px: 10.0,
            label_offset_y_px: 8.0,
            single_point_curvature: SINGLE_POINT_CURVATURE,
            palette: ChartPalette::default(),
        }
    }
}

impl ChartConfig {
    #[must_use]
    pub fn with_axis_gutter_width(mut self, width_px: f64) -> Self {
        self.axis_gutter_width_px = width_px;
        self
    }

    #[must_use]
    pub fn with_surface_margin(mut self, margin_px: f64) -> Self {
        self.surface_margin_px = margin_px;
        self
    }

    #[must_use]
    pub fn with_palette(mut self, palette: ChartPalette) -> Self {
        self.palette = palette;
        self
    }

    pub fn validate(self) -> ChartResult<Self> {
        for (name, value) in [
            ("surface_margin_px", self.surface_margin_px),
            ("axis_gutter_width_px", self.axis_gutter_width_px),
            ("tick_length_px", self.tick_length_px),
            ("marker_stroke_width_px", self.marker_stroke_width_px),
            ("label_offset_y_px", self.label_offset_y_px),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(ChartError::InvalidConfig(format!(
                    "{name} must be finite and >= 0"
                )));
            }
        }

        for (name, value) in [
            ("fallback_canvas_width_px", self.fallback_canvas_width_px),
            ("fallback_canvas_height_px", self.fallback_canvas_height_px),
            ("marker_size_px", self.marker_size_px),
            ("series_stroke_width_px", self.series_stroke_width_px),
            ("reference_line_width_px", self.reference_line_width_px),
            ("grid_line_width_px", self.grid_line_width_px),
            ("tick_line_width_px", self.tick_line_width_px),
            ("label_font_size_px", self.label_font_size_px),
        ] {
            if !value.is_finite() || value <= 0.0 {
                return Err(ChartError::InvalidConfig(format!(
                    "{name} must be finite and > 0"
                )));
            }
        }

        if !self.single_point_curvature.is_finite() {
            return Err(ChartError::InvalidConfig(
                "single_point_curvature must be finite".to_owned(),
            ));
        }

        self.palette.validate()?;
        Ok(self)
    }

    pub fn to_json_pretty(&self) -> ChartResult<String> {
        serde_json::to_string_pretty(self).map_err(|e| {
            ChartError::InvalidConfig(format!("failed to serialize chart config json: {e}"))
        })
    }

    pub fn from_json_str(input: &str) -> ChartResult<Self> {
        let config: Self = serde_json::from_str(input).map_err(|e| {
            ChartError::InvalidConfig(format!("failed to parse chart config json: {e}"))
        })?;
        config.validate()
    }
}
