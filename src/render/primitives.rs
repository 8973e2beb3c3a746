use serde::{Deserialize, Serialize};

use crate::core::{CubicSegment, PixelPoint, QuadraticSegment};
use crate::error::{ChartError, ChartResult};

/// RGBA color in normalized 0..=1 channel values.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Color {
    pub red: f64,
    pub green: f64,
    pub blue: f64,
    pub alpha: f64,
}

impl Color {
    #[must_use]
    pub const fn rgba(red: f64, green: f64, blue: f64, alpha: f64) -> Self {
        Self {
            red,
            green,
            blue,
            alpha,
        }
    }

    #[must_use]
    pub const fn rgb(red: f64, green: f64, blue: f64) -> Self {
        Self::rgba(red, green, blue, 1.0)
    }

    /// Builds an opaque color from 8-bit channels, e.g. `from_rgb8(79, 195, 247)`.
    #[must_use]
    pub fn from_rgb8(red: u8, green: u8, blue: u8) -> Self {
        Self::rgb(
            f64::from(red) / 255.0,
            f64::from(green) / 255.0,
            f64::from(blue) / 255.0,
        )
    }

    pub fn validate(self) -> ChartResult<()> {
        for (channel, value) in [
            ("red", self.red),
            ("green", self.green),
            ("blue", self.blue),
            ("alpha", self.alpha),
        ] {
            if !value.is_finite() || !(0.0..=1.0).contains(&value) {
                return Err(ChartError::InvalidData(format!(
                    "color channel `{channel}` must be finite and in [0, 1]"
                )));
            }
        }
        Ok(())
    }
}

/// Draw command for one line segment in pixel space.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LinePrimitive {
    pub x1: f64,
    pub y1: f64,
    pub x2: f64,
    pub y2: f64,
    pub stroke_width: f64,
    pub color: Color,
}

impl LinePrimitive {
    #[must_use]
    pub const fn new(x1: f64, y1: f64, x2: f64, y2: f64, stroke_width: f64, color: Color) -> Self {
        Self {
            x1,
            y1,
            x2,
            y2,
            stroke_width,
            color,
        }
    }

    #[must_use]
    pub const fn horizontal(x1: f64, x2: f64, y: f64, stroke_width: f64, color: Color) -> Self {
        Self::new(x1, y, x2, y, stroke_width, color)
    }

    pub fn validate(self) -> ChartResult<()> {
        if !self.x1.is_finite()
            || !self.y1.is_finite()
            || !self.x2.is_finite()
            || !self.y2.is_finite()
        {
            return Err(ChartError::InvalidData(
                "line coordinates must be finite".to_owned(),
            ));
        }
        validate_stroke_width(self.stroke_width, "line")?;
        self.color.validate()
    }
}

/// Geometry of one series stroke.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum CurveGeometry {
    Line {
        start: PixelPoint,
        end: PixelPoint,
    },
    Quadratic {
        start: PixelPoint,
        control: PixelPoint,
        end: PixelPoint,
    },
    Cubic {
        start: PixelPoint,
        control1: PixelPoint,
        control2: PixelPoint,
        end: PixelPoint,
    },
}

impl CurveGeometry {
    #[must_use]
    pub const fn start(self) -> PixelPoint {
        match self {
            Self::Line { start, .. } | Self::Quadratic { start, .. } | Self::Cubic { start, .. } => {
                start
            }
        }
    }

    #[must_use]
    pub const fn end(self) -> PixelPoint {
        match self {
            Self::Line { end, .. } | Self::Quadratic { end, .. } | Self::Cubic { end, .. } => end,
        }
    }

    fn is_finite(self) -> bool {
        match self {
            Self::Line { start, end } => start.is_finite() && end.is_finite(),
            Self::Quadratic {
                start,
                control,
                end,
            } => start.is_finite() && control.is_finite() && end.is_finite(),
            Self::Cubic {
                start,
                control1,
                control2,
                end,
            } => {
                start.is_finite() && control1.is_finite() && control2.is_finite() && end.is_finite()
            }
        }
    }
}

impl From<CubicSegment> for CurveGeometry {
    fn from(segment: CubicSegment) -> Self {
        Self::Cubic {
            start: segment.start,
            control1: segment.control1,
            control2: segment.control2,
            end: segment.end,
        }
    }
}

impl From<QuadraticSegment> for CurveGeometry {
    fn from(segment: QuadraticSegment) -> Self {
        Self::Quadratic {
            start: segment.start,
            control: segment.control,
            end: segment.end,
        }
    }
}

/// Draw command for one stroked series segment.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CurvePrimitive {
    pub geometry: CurveGeometry,
    pub stroke_width: f64,
    pub color: Color,
}

impl CurvePrimitive {
    #[must_use]
    pub fn new(geometry: impl Into<CurveGeometry>, stroke_width: f64, color: Color) -> Self {
        Self {
            geometry: geometry.into(),
            stroke_width,
            color,
        }
    }

    pub fn validate(self) -> ChartResult<()> {
        if !self.geometry.is_finite() {
            return Err(ChartError::InvalidData(
                "curve coordinates must be finite".to_owned(),
            ));
        }
        validate_stroke_width(self.stroke_width, "curve")?;
        self.color.validate()
    }
}

/// Circular data-point marker centered on `(center_x, center_y)`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MarkerPrimitive {
    pub center_x: f64,
    pub center_y: f64,
    pub size: f64,
    pub fill_color: Color,
    pub stroke_color: Color,
    pub stroke_width: f64,
}

impl MarkerPrimitive {
    /// Top-left corner of the marker's bounding box.
    #[must_use]
    pub fn top_left(self) -> PixelPoint {
        let half = self.size / 2.0;
        PixelPoint::new(self.center_x - half, self.center_y - half)
    }

    pub fn validate(self) -> ChartResult<()> {
        if !self.center_x.is_finite() || !self.center_y.is_finite() {
            return Err(ChartError::InvalidData(
                "marker center must be finite".to_owned(),
            ));
        }
        if !self.size.is_finite() || self.size <= 0.0 {
            return Err(ChartError::InvalidData(
                "marker size must be finite and > 0".to_owned(),
            ));
        }
        if !self.stroke_width.is_finite() || self.stroke_width < 0.0 {
            return Err(ChartError::InvalidData(
                "marker stroke width must be finite and >= 0".to_owned(),
            ));
        }
        self.fill_color.validate()?;
        self.stroke_color.validate()
    }
}

/// Draw command for one label in pixel space. `(x, y)` is the top-left corner
/// of the text box.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TextPrimitive {
    pub text: String,
    pub x: f64,
    pub y: f64,
    pub font_size_px: f64,
    pub color: Color,
}

impl TextPrimitive {
    #[must_use]
    pub fn new(
        text: impl Into<String>,
        x: f64,
        y: f64,
        font_size_px: f64,
        color: Color,
    ) -> Self {
        Self {
            text: text.into(),
            x,
            y,
            font_size_px,
            color,
        }
    }

    pub fn validate(&self) -> ChartResult<()> {
        if self.text.is_empty() {
            return Err(ChartError::InvalidData(
                "text primitive must not be empty".to_owned(),
            ));
        }
        if !self.x.is_finite() || !self.y.is_finite() {
            return Err(ChartError::InvalidData(
                "text coordinates must be finite".to_owned(),
            ));
        }
        if !self.font_size_px.is_finite() || self.font_size_px <= 0.0 {
            return Err(ChartError::InvalidData(
                "font size must be finite and > 0".to_owned(),
            ));
        }
        self.color.validate()
    }
}

fn validate_stroke_width(stroke_width: f64, kind: &str) -> ChartResult<()> {
    if !stroke_width.is_finite() || stroke_width <= 0.0 {
        return Err(ChartError::InvalidData(format!(
            "{kind} stroke width must be finite and > 0"
        )));
    }
    Ok(())
}
