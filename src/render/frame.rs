use serde::{Deserialize, Serialize};

use crate::core::{ChartState, PixelPoint, Viewport};
use crate::error::{ChartError, ChartResult};
use crate::render::{CurvePrimitive, LinePrimitive, MarkerPrimitive, TextPrimitive};

/// Backend-agnostic scene for one chart draw pass.
///
/// Geometry is expressed in plot-local pixels; backends translate by
/// `plot_origin` so the scale gutter (negative x) stays on screen. A frame with
/// no `state` is the cleared chart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RenderFrame {
    pub viewport: Viewport,
    pub plot_origin: PixelPoint,
    pub state: Option<ChartState>,
    pub grid_lines: Vec<LinePrimitive>,
    pub reference_line: Option<LinePrimitive>,
    pub curves: Vec<CurvePrimitive>,
    pub markers: Vec<MarkerPrimitive>,
    pub scale_ticks: Vec<LinePrimitive>,
    pub scale_labels: Vec<TextPrimitive>,
}

impl RenderFrame {
    #[must_use]
    pub fn new(viewport: Viewport, plot_origin: PixelPoint) -> Self {
        Self {
            viewport,
            plot_origin,
            state: None,
            grid_lines: Vec::new(),
            reference_line: None,
            curves: Vec::new(),
            markers: Vec::new(),
            scale_ticks: Vec::new(),
            scale_labels: Vec::new(),
        }
    }

    /// Frame that clears every primitive and hides the reference line.
    #[must_use]
    pub fn cleared(viewport: Viewport) -> Self {
        Self::new(viewport, PixelPoint::default())
    }

    #[must_use]
    pub fn with_state(mut self, state: ChartState) -> Self {
        self.state = Some(state);
        self
    }

    #[must_use]
    pub fn with_curve(mut self, curve: CurvePrimitive) -> Self {
        self.curves.push(curve);
        self
    }

    #[must_use]
    pub fn with_marker(mut self, marker: MarkerPrimitive) -> Self {
        self.markers.push(marker);
        self
    }

    #[must_use]
    pub fn with_reference_line(mut self, line: Option<LinePrimitive>) -> Self {
        self.reference_line = line;
        self
    }

    pub fn validate(&self) -> ChartResult<()> {
        let Viewport { width, height } = self.viewport;
        if !width.is_finite() || !height.is_finite() || width < 0.0 || height < 0.0 {
            return Err(ChartError::InvalidViewport { width, height });
        }
        if !self.plot_origin.is_finite() {
            return Err(ChartError::InvalidData(
                "plot origin must be finite".to_owned(),
            ));
        }

        for line in self.grid_lines.iter().chain(&self.scale_ticks) {
            line.validate()?;
        }
        if let Some(line) = self.reference_line {
            line.validate()?;
        }
        for curve in &self.curves {
            curve.validate()?;
        }
        for marker in &self.markers {
            marker.validate()?;
        }
        for text in &self.scale_labels {
            text.validate()?;
        }

        Ok(())
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.curves.is_empty()
            && self.markers.is_empty()
            && self.reference_line.is_none()
            && self.grid_lines.is_empty()
            && self.scale_ticks.is_empty()
            && self.scale_labels.is_empty()
    }

    #[must_use]
    pub fn is_cleared(&self) -> bool {
        self.state.is_none() && self.is_empty()
    }

    pub fn to_json_pretty(&self) -> ChartResult<String> {
        serde_json::to_string_pretty(self).map_err(|e| {
            ChartError::InvalidData(format!("failed to serialize render frame json: {e}"))
        })
    }

    pub fn from_json_str(input: &str) -> ChartResult<Self> {
        serde_json::from_str(input).map_err(|e| {
            ChartError::InvalidData(format!("failed to parse render frame json: {e}"))
        })
    }
}
