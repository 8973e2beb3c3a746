use std::cell::RefCell;
use std::rc::{Rc, Weak};

use tracing::{debug, trace, warn};

use crate::core::{DataPoint, Viewport};
use crate::error::ChartResult;
use crate::render::{RenderFrame, Renderer};

use super::observable_series::{ObservableSeries, SeriesChange, SubscriptionId};
use super::{ChartConfig, ChartMode, ChartRenderer};

#[cfg(feature = "cairo-backend")]
use crate::render::CairoContextRenderer;

/// Host-facing chart widget.
///
/// Every trigger (points replaced, series mutated, mode changed, surface
/// resized) funnels into [`ChartWidget::redraw`], which rebuilds the whole
/// frame. Until the host reports a measured layout through
/// [`ChartWidget::on_layout_complete`] triggers are only recorded; the first
/// valid layout performs the deferred render.
///
/// Hosts that paint asynchronously register a hook through
/// [`ChartWidget::set_redraw_hook`]; it fires after every rendered frame,
/// including redraws driven by a bound series.
pub struct ChartWidget<R: Renderer> {
    renderer: R,
    chart: ChartRenderer,
    points: Vec<DataPoint>,
    mode: ChartMode,
    surface: Viewport,
    layout_ready: bool,
    pending_redraw: bool,
    last_frame: RenderFrame,
    binding: Option<SeriesBinding>,
    binding_generation: u64,
    redraw_hook: Option<RedrawHook>,
}

type RedrawHook = Box<dyn Fn(&RenderFrame)>;

impl<R: Renderer> ChartWidget<R> {
    pub fn new(renderer: R, config: ChartConfig) -> ChartResult<Self> {
        let surface = Viewport::default();
        Ok(Self {
            renderer,
            chart: ChartRenderer::new(config)?,
            points: Vec::new(),
            mode: ChartMode::default(),
            surface,
            layout_ready: false,
            pending_redraw: false,
            last_frame: RenderFrame::cleared(surface),
            binding: None,
            binding_generation: 0,
            redraw_hook: None,
        })
    }

    #[must_use]
    pub fn points(&self) -> &[DataPoint] {
        &self.points
    }

    #[must_use]
    pub fn mode(&self) -> ChartMode {
        self.mode
    }

    #[must_use]
    pub fn surface(&self) -> Viewport {
        self.surface
    }

    #[must_use]
    pub fn config(&self) -> &ChartConfig {
        self.chart.config()
    }

    #[must_use]
    pub fn last_frame(&self) -> &RenderFrame {
        &self.last_frame
    }

    #[must_use]
    pub fn is_layout_ready(&self) -> bool {
        self.layout_ready
    }

    /// `true` when a trigger arrived before the first layout.
    #[must_use]
    pub fn has_pending_redraw(&self) -> bool {
        self.pending_redraw
    }

    #[must_use]
    pub fn is_bound(&self) -> bool {
        self.binding.is_some()
    }

    #[must_use]
    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    pub fn renderer_mut(&mut self) -> &mut R {
        &mut self.renderer
    }

    /// Called with each frame right after the renderer accepted it.
    pub fn set_redraw_hook<F>(&mut self, hook: F)
    where
        F: Fn(&RenderFrame) + 'static,
    {
        self.redraw_hook = Some(Box::new(hook));
    }

    pub fn clear_redraw_hook(&mut self) {
        self.redraw_hook = None;
    }

    pub fn set_points(&mut self, points: Vec<DataPoint>) -> ChartResult<()> {
        self.points = points;
        self.redraw()
    }

    /// Mirrors a mutation of the bound series. `points` is the series content
    /// after the change.
    pub fn apply_series_change(
        &mut self,
        change: &SeriesChange,
        points: &[DataPoint],
    ) -> ChartResult<()> {
        trace!(?change, point_count = points.len(), "chart series changed");
        self.points.clear();
        self.points.extend_from_slice(points);
        self.redraw()
    }

    pub fn set_mode(&mut self, mode: ChartMode) -> ChartResult<()> {
        if self.mode == mode {
            return Ok(());
        }
        self.mode = mode;
        self.redraw()
    }

    pub fn set_profit_mode(&mut self, is_profit_mode: bool) -> ChartResult<()> {
        self.set_mode(ChartMode::from_profit_flag(is_profit_mode))
    }

    pub fn resize(&mut self, surface: Viewport) -> ChartResult<()> {
        if self.surface == surface {
            return Ok(());
        }
        self.surface = surface;
        self.redraw()
    }

    pub fn set_config(&mut self, config: ChartConfig) -> ChartResult<()> {
        self.chart.set_config(config)?;
        self.redraw()
    }

    /// One-shot post-layout hook. Returns `true` when it performed the first
    /// render; later calls and unmeasured surfaces are no-ops.
    pub fn on_layout_complete(&mut self, surface: Viewport) -> ChartResult<bool> {
        if self.layout_ready {
            return Ok(false);
        }
        if !surface.is_valid() {
            debug!(
                width = surface.width,
                height = surface.height,
                "chart layout not measured yet, deferring first render"
            );
            return Ok(false);
        }

        self.surface = surface;
        self.layout_ready = true;
        self.redraw()?;
        Ok(true)
    }

    /// Rebuilds the frame from the current inputs and hands it to the renderer.
    pub fn redraw(&mut self) -> ChartResult<()> {
        if !self.layout_ready {
            self.pending_redraw = true;
            trace!("chart redraw deferred until first layout");
            return Ok(());
        }

        let frame = self.chart.render(&self.points, self.mode, self.surface);
        self.renderer.render(&frame)?;
        self.last_frame = frame;
        self.pending_redraw = false;
        if let Some(hook) = &self.redraw_hook {
            hook(&self.last_frame);
        }
        Ok(())
    }

    /// Drops the current series binding and clears the chart.
    pub fn unbind_series(&mut self) -> ChartResult<()> {
        self.binding_generation += 1;
        self.binding = None;
        self.set_points(Vec::new())
    }

    /// Paints the most recent frame into an external cairo context.
    #[cfg(feature = "cairo-backend")]
    pub fn render_on_cairo_context(&mut self, context: &cairo::Context) -> ChartResult<()>
    where
        R: CairoContextRenderer,
    {
        self.renderer.render_on_cairo_context(context, &self.last_frame)
    }
}

/// Live subscription of a widget to an [`ObservableSeries`].
///
/// Dropping the binding unsubscribes from the series. When the series is
/// mid-notification the subscription outlives the binding, but its callback
/// checks the widget's binding generation and ignores further changes.
pub struct SeriesBinding {
    series: Weak<RefCell<ObservableSeries>>,
    subscription: SubscriptionId,
}

impl Drop for SeriesBinding {
    fn drop(&mut self) {
        let Some(series) = self.series.upgrade() else {
            return;
        };
        match series.try_borrow_mut() {
            Ok(mut series) => {
                series.unsubscribe(self.subscription);
            }
            Err(_) => debug!("series busy while unbinding chart; stale subscription goes idle"),
        }
    }
}

/// Binds `widget` to `series`: the widget adopts the series content now and
/// redraws on every later mutation. Any previous binding is released.
pub fn bind_series<R>(
    widget: &Rc<RefCell<ChartWidget<R>>>,
    series: &Rc<RefCell<ObservableSeries>>,
) -> ChartResult<()>
where
    R: Renderer + 'static,
{
    let generation = {
        let mut widget = widget.borrow_mut();
        widget.binding_generation += 1;
        widget.binding_generation
    };

    let target = Rc::downgrade(widget);
    let subscription = series.borrow_mut().subscribe(move |change, points| {
        let Some(widget) = target.upgrade() else {
            return;
        };
        let Ok(mut widget) = widget.try_borrow_mut() else {
            warn!("chart widget busy, series change skipped");
            return;
        };
        if widget.binding_generation != generation {
            trace!(generation, "series change from released binding ignored");
            return;
        }
        if let Err(err) = widget.apply_series_change(change, points) {
            warn!(%err, "chart redraw after series change failed");
        }
    });

    let snapshot = series.borrow().points().to_vec();
    let binding = SeriesBinding {
        series: Rc::downgrade(series),
        subscription,
    };

    let mut widget = widget.borrow_mut();
    widget.binding = Some(binding);
    widget.set_points(snapshot)
}
