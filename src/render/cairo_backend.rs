use cairo::{Context, Format, ImageSurface};
use pango::FontDescription;
use std::f64::consts::TAU;

use crate::core::PixelPoint;
use crate::error::{ChartError, ChartResult};
use crate::render::{
    Color, CurveGeometry, LinePrimitive, MarkerPrimitive, RenderFrame, Renderer, TextPrimitive,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CairoRenderStats {
    pub lines_drawn: usize,
    pub curves_drawn: usize,
    pub markers_drawn: usize,
    pub texts_drawn: usize,
}

/// Optional extension trait for renderers that can draw into an external Cairo
/// context (for example a GTK `DrawingArea` callback).
pub trait CairoContextRenderer {
    fn render_on_cairo_context(
        &mut self,
        context: &Context,
        frame: &RenderFrame,
    ) -> ChartResult<()>;
}

/// Cairo + Pango + PangoCairo renderer backend.
///
/// This renderer supports two modes:
/// - offscreen image-surface rendering through `Renderer::render`
/// - in-place rendering on an external Cairo context through
///   `CairoContextRenderer`
#[derive(Debug)]
pub struct CairoRenderer {
    surface: ImageSurface,
    clear_color: Color,
    last_stats: CairoRenderStats,
}

impl CairoRenderer {
    pub fn new(width: i32, height: i32) -> ChartResult<Self> {
        if width <= 0 || height <= 0 {
            return Err(ChartError::InvalidData(
                "cairo surface size must be > 0".to_owned(),
            ));
        }

        let surface =
            ImageSurface::create(Format::ARgb32, width, height).backend("create surface")?;
        Ok(Self {
            surface,
            clear_color: Color::from_rgb8(0x1E, 0x1E, 0x1E),
            last_stats: CairoRenderStats::default(),
        })
    }

    #[must_use]
    pub fn surface(&self) -> &ImageSurface {
        &self.surface
    }

    #[must_use]
    pub fn clear_color(&self) -> Color {
        self.clear_color
    }

    #[must_use]
    pub fn last_stats(&self) -> CairoRenderStats {
        self.last_stats
    }

    fn render_with_context(&mut self, context: &Context, frame: &RenderFrame) -> ChartResult<()> {
        frame.validate()?;
        self.clear_color.validate()?;

        apply_color(context, self.clear_color);
        context.paint().backend("clear surface")?;

        let mut stats = CairoRenderStats::default();
        if frame.is_cleared() {
            self.last_stats = stats;
            return Ok(());
        }

        context.save().backend("save state")?;
        context.translate(frame.plot_origin.x, frame.plot_origin.y);

        for line in frame
            .grid_lines
            .iter()
            .chain(frame.reference_line.as_ref())
            .chain(&frame.scale_ticks)
        {
            stroke_line(context, *line)?;
            stats.lines_drawn += 1;
        }

        for curve in &frame.curves {
            apply_color(context, curve.color);
            context.set_line_width(curve.stroke_width);
            append_curve_path(context, curve.geometry);
            context.stroke().backend("stroke curve")?;
            stats.curves_drawn += 1;
        }

        for marker in &frame.markers {
            fill_marker(context, *marker)?;
            stats.markers_drawn += 1;
        }

        for label in &frame.scale_labels {
            show_label(context, label);
            stats.texts_drawn += 1;
        }

        context.restore().backend("restore state")?;
        self.last_stats = stats;
        Ok(())
    }
}

impl Renderer for CairoRenderer {
    fn render(&mut self, frame: &RenderFrame) -> ChartResult<()> {
        let context = Context::new(&self.surface).backend("create context")?;
        self.render_with_context(&context, frame)
    }
}

impl CairoContextRenderer for CairoRenderer {
    fn render_on_cairo_context(
        &mut self,
        context: &Context,
        frame: &RenderFrame,
    ) -> ChartResult<()> {
        self.render_with_context(context, frame)
    }
}

fn show_label(context: &Context, label: &TextPrimitive) {
    let layout = pangocairo::functions::create_layout(context);
    let font = FontDescription::from_string(&format!("Sans {}", label.font_size_px));
    layout.set_font_description(Some(&font));
    layout.set_text(&label.text);

    apply_color(context, label.color);
    context.move_to(label.x, label.y);
    pangocairo::functions::show_layout(context, &layout);
}

fn apply_color(context: &Context, color: Color) {
    context.set_source_rgba(color.red, color.green, color.blue, color.alpha);
}

fn stroke_line(context: &Context, line: LinePrimitive) -> ChartResult<()> {
    apply_color(context, line.color);
    context.set_line_width(line.stroke_width);
    context.move_to(line.x1, line.y1);
    context.line_to(line.x2, line.y2);
    context.stroke().backend("stroke line")
}

fn append_curve_path(context: &Context, geometry: CurveGeometry) {
    match geometry {
        CurveGeometry::Line { start, end } => {
            context.move_to(start.x, start.y);
            context.line_to(end.x, end.y);
        }
        CurveGeometry::Quadratic {
            start,
            control,
            end,
        } => {
            // Cairo only knows cubics; elevate the quadratic.
            let c1 = elevate(start, control);
            let c2 = elevate(end, control);
            context.move_to(start.x, start.y);
            context.curve_to(c1.x, c1.y, c2.x, c2.y, end.x, end.y);
        }
        CurveGeometry::Cubic {
            start,
            control1,
            control2,
            end,
        } => {
            context.move_to(start.x, start.y);
            context.curve_to(control1.x, control1.y, control2.x, control2.y, end.x, end.y);
        }
    }
}

fn elevate(anchor: PixelPoint, control: PixelPoint) -> PixelPoint {
    PixelPoint::new(
        anchor.x + 2.0 / 3.0 * (control.x - anchor.x),
        anchor.y + 2.0 / 3.0 * (control.y - anchor.y),
    )
}

fn fill_marker(context: &Context, marker: MarkerPrimitive) -> ChartResult<()> {
    context.new_sub_path();
    context.arc(marker.center_x, marker.center_y, marker.size / 2.0, 0.0, TAU);
    apply_color(context, marker.fill_color);
    if marker.stroke_width > 0.0 {
        context.fill_preserve().backend("fill marker")?;
        apply_color(context, marker.stroke_color);
        context.set_line_width(marker.stroke_width);
        context.stroke().backend("stroke marker")
    } else {
        context.fill().backend("fill marker")
    }
}

trait CairoResultExt<T> {
    fn backend(self, action: &str) -> ChartResult<T>;
}

impl<T> CairoResultExt<T> for Result<T, cairo::Error> {
    fn backend(self, action: &str) -> ChartResult<T> {
        self.map_err(|err| ChartError::InvalidData(format!("cairo failed to {action}: {err}")))
    }
}
