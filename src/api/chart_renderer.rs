use tracing::{debug, warn};

use crate::core::primitives::decimal_to_f64;
use crate::core::{
    AmountRange, ChartState, DataPoint, PixelPoint, PlottedPoint, Viewport, bowed_quadratic,
    catmull_rom_segments, insert_zero_crossings, project_points,
};
use crate::error::ChartResult;
use crate::render::{
    Color, CurveGeometry, CurvePrimitive, LinePrimitive, MarkerPrimitive, RenderFrame,
};

use super::scale_labels::push_scale_primitives;
use super::{ChartConfig, ChartMode};

/// Stateless chart geometry engine.
///
/// `render` recomputes the whole frame from its inputs every call. It never
/// fails: empty or unconvertible data yields a cleared frame and an unmeasured
/// surface falls back to the configured canvas size.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ChartRenderer {
    config: ChartConfig,
}

impl ChartRenderer {
    pub fn new(config: ChartConfig) -> ChartResult<Self> {
        Ok(Self {
            config: config.validate()?,
        })
    }

    #[must_use]
    pub fn config(&self) -> &ChartConfig {
        &self.config
    }

    pub fn set_config(&mut self, config: ChartConfig) -> ChartResult<()> {
        self.config = config.validate()?;
        Ok(())
    }

    /// Plot canvas size for a surface, substituting fallbacks for an
    /// unmeasured or too-small surface.
    #[must_use]
    pub fn canvas_size(&self, surface: Viewport) -> (f64, f64) {
        let margin = self.config.surface_margin_px;
        let width = surface.width - margin;
        let height = surface.height - margin;
        let measured = width > 0.0 && height > 0.0;
        if measured {
            return (width, height);
        }

        let width = if width > 0.0 {
            width
        } else {
            self.config.fallback_canvas_width_px
        };
        debug!(
            surface_width = surface.width,
            surface_height = surface.height,
            "chart surface not measured, using fallback canvas size"
        );
        (width, self.config.fallback_canvas_height_px)
    }

    /// Offset of the plot's top-left corner on the host surface.
    #[must_use]
    pub fn plot_origin(&self) -> PixelPoint {
        let inset = self.config.surface_margin_px / 2.0;
        PixelPoint::new(self.config.axis_gutter_width_px + inset, inset)
    }

    #[must_use]
    pub fn render(&self, points: &[DataPoint], mode: ChartMode, surface: Viewport) -> RenderFrame {
        if points.is_empty() {
            debug!("no chart data, clearing chart");
            return RenderFrame::cleared(surface);
        }

        let amounts = match amounts_of(points) {
            Ok(amounts) => amounts,
            Err(err) => {
                warn!(%err, "chart data could not be converted, clearing chart");
                return RenderFrame::cleared(surface);
            }
        };
        let Some(range) = AmountRange::from_amounts(&amounts) else {
            return RenderFrame::cleared(surface);
        };

        let (canvas_width, canvas_height) = self.canvas_size(surface);
        let state = ChartState::new(range, canvas_width, canvas_height);
        debug!(
            point_count = amounts.len(),
            ?mode,
            canvas_width,
            canvas_height,
            min_amount = range.min,
            max_amount = range.max,
            "chart redraw"
        );

        let mut frame = RenderFrame::new(surface, self.plot_origin()).with_state(state);
        push_scale_primitives(&mut frame, state, &self.config);
        frame.reference_line = self.reference_line(state, mode);

        match (amounts.as_slice(), mode) {
            ([amount], ChartMode::Profit) => self.push_single_profit(&mut frame, *amount, state),
            ([amount], ChartMode::BuyIn) => self.push_single_buy_in(&mut frame, *amount, state),
            (_, ChartMode::Profit) => self.push_profit_series(&mut frame, &amounts, state),
            (_, ChartMode::BuyIn) => self.push_buy_in_series(&mut frame, &amounts, state),
        }

        frame
    }

    fn reference_line(&self, state: ChartState, mode: ChartMode) -> Option<LinePrimitive> {
        if !mode.is_profit() || !state.range().contains_zero() {
            return None;
        }
        Some(LinePrimitive::horizontal(
            0.0,
            state.canvas_width,
            state.zero_y(),
            self.config.reference_line_width_px,
            self.config.palette.reference_line_color,
        ))
    }

    fn push_single_profit(&self, frame: &mut RenderFrame, amount: f64, state: ChartState) {
        let palette = &self.config.palette;
        let color = palette.sign_color(amount);
        let start = PixelPoint::new(0.0, state.zero_y());
        let end = PixelPoint::new(state.canvas_width, state.project_y(amount));

        let curve = bowed_quadratic(start, end, self.config.single_point_curvature)
            .with_control_clamped(state.canvas_width, state.canvas_height);
        frame.curves.push(self.series_stroke(curve, color));
        frame.markers.push(self.marker(start, palette.neutral_color));
        frame.markers.push(self.marker(end, color));
    }

    fn push_single_buy_in(&self, frame: &mut RenderFrame, amount: f64, state: ChartState) {
        let color = self.config.palette.buy_in_color;
        let y = state.project_y(amount);
        let line = CurveGeometry::Line {
            start: PixelPoint::new(0.0, y),
            end: PixelPoint::new(state.canvas_width, y),
        };
        frame.curves.push(self.series_stroke(line, color));
        frame
            .markers
            .push(self.marker(PixelPoint::new(state.canvas_width / 2.0, y), color));
    }

    fn push_buy_in_series(&self, frame: &mut RenderFrame, amounts: &[f64], state: ChartState) {
        let color = self.config.palette.buy_in_color;
        let projected = project_points(amounts, state);

        for pair in projected.windows(2) {
            let line = CurveGeometry::Line {
                start: pair[0].position(),
                end: pair[1].position(),
            };
            frame.curves.push(self.series_stroke(line, color));
        }
        for point in &projected {
            frame.markers.push(self.marker(point.position(), color));
        }
    }

    fn push_profit_series(&self, frame: &mut RenderFrame, amounts: &[f64], state: ChartState) {
        let palette = &self.config.palette;
        let projected = project_points(amounts, state);
        let knots = insert_zero_crossings(&projected, state.zero_y());
        debug!(
            synthetic_knots = knots.len() - projected.len(),
            "profit curve knots prepared"
        );

        for segment in catmull_rom_segments(&knots) {
            let color = palette.sign_color(segment.mean_amount);
            frame.curves.push(self.series_stroke(segment, color));
        }
        for point in projected.iter().filter(|point| !point.synthetic) {
            frame.markers.push(self.sign_marker(*point));
        }
    }

    fn series_stroke(&self, geometry: impl Into<CurveGeometry>, color: Color) -> CurvePrimitive {
        CurvePrimitive::new(geometry, self.config.series_stroke_width_px, color)
    }

    fn sign_marker(&self, point: PlottedPoint) -> MarkerPrimitive {
        self.marker(point.position(), self.config.palette.sign_color(point.amount))
    }

    fn marker(&self, center: PixelPoint, fill_color: Color) -> MarkerPrimitive {
        MarkerPrimitive {
            center_x: center.x,
            center_y: center.y,
            size: self.config.marker_size_px,
            fill_color,
            stroke_color: self.config.palette.marker_stroke_color,
            stroke_width: self.config.marker_stroke_width_px,
        }
    }
}

fn amounts_of(points: &[DataPoint]) -> ChartResult<Vec<f64>> {
    points
        .iter()
        .map(|point| decimal_to_f64(point.amount, "amount"))
        .collect()
}
