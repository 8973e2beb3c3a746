use std::cell::RefCell;
use std::rc::{Rc, Weak};

use gtk4 as gtk;
use gtk::glib;
use gtk::prelude::*;
use tracing::warn;

use crate::api::{ChartConfig, ChartWidget, ObservableSeries, bind_series};
use crate::core::{DataPoint, Viewport};
use crate::error::ChartResult;
use crate::render::CairoRenderer;

type SharedWidget = Rc<RefCell<ChartWidget<CairoRenderer>>>;

/// Hosts a [`ChartWidget`] inside a GTK `DrawingArea`.
///
/// Resizes feed `ChartWidget::resize` and the draw callback paints the latest
/// frame. Every rendered frame queues a repaint of the area, whichever trigger
/// produced it. The first render runs on the low-priority idle tier once the
/// area is mapped and measured.
pub struct GtkChartAdapter {
    widget: SharedWidget,
    area: gtk::DrawingArea,
}

impl GtkChartAdapter {
    pub fn new(config: ChartConfig) -> ChartResult<Self> {
        // Frames are painted on the area's own context; the offscreen surface
        // only backs validation passes.
        let renderer = CairoRenderer::new(1, 1)?;
        let widget = Rc::new(RefCell::new(ChartWidget::new(renderer, config)?));
        let area = gtk::DrawingArea::new();
        area.set_hexpand(true);
        area.set_content_height(100);

        connect_repaint(&area, &widget);
        connect_draw(&area, Rc::downgrade(&widget));
        connect_resize(&area, Rc::downgrade(&widget));
        connect_first_layout(&area, Rc::downgrade(&widget));

        Ok(Self { widget, area })
    }

    #[must_use]
    pub fn drawing_area(&self) -> &gtk::DrawingArea {
        &self.area
    }

    #[must_use]
    pub fn widget(&self) -> SharedWidget {
        Rc::clone(&self.widget)
    }

    pub fn bind_series(&self, series: &Rc<RefCell<ObservableSeries>>) -> ChartResult<()> {
        bind_series(&self.widget, series)
    }

    pub fn set_points(&self, points: Vec<DataPoint>) -> ChartResult<()> {
        self.widget.borrow_mut().set_points(points)
    }

    pub fn set_profit_mode(&self, is_profit_mode: bool) -> ChartResult<()> {
        self.widget.borrow_mut().set_profit_mode(is_profit_mode)
    }
}

fn connect_repaint(area: &gtk::DrawingArea, widget: &SharedWidget) {
    let area = area.downgrade();
    widget.borrow_mut().set_redraw_hook(move |_frame| {
        if let Some(area) = area.upgrade() {
            area.queue_draw();
        }
    });
}

fn connect_draw(area: &gtk::DrawingArea, widget: Weak<RefCell<ChartWidget<CairoRenderer>>>) {
    area.set_draw_func(move |_area, context, _width, _height| {
        let Some(widget) = widget.upgrade() else {
            return;
        };
        let Ok(mut widget) = widget.try_borrow_mut() else {
            return;
        };
        if let Err(err) = widget.render_on_cairo_context(context) {
            warn!(%err, "chart paint failed");
        }
    });
}

fn connect_resize(area: &gtk::DrawingArea, widget: Weak<RefCell<ChartWidget<CairoRenderer>>>) {
    area.connect_resize(move |_area, width, height| {
        let Some(widget) = widget.upgrade() else {
            return;
        };
        let surface = Viewport::new(f64::from(width), f64::from(height));
        let mut widget = widget.borrow_mut();
        let result = if widget.is_layout_ready() {
            widget.resize(surface)
        } else {
            // Size arrived after the idle callback saw an unmeasured area.
            widget.on_layout_complete(surface).map(|_| ())
        };
        if let Err(err) = result {
            warn!(%err, "chart redraw after resize failed");
        }
    });
}

fn connect_first_layout(
    area: &gtk::DrawingArea,
    widget: Weak<RefCell<ChartWidget<CairoRenderer>>>,
) {
    area.connect_map(move |area| {
        let area = area.clone();
        let widget = widget.clone();
        glib::idle_add_local_full(glib::Priority::LOW, move || {
            if let Some(widget) = widget.upgrade() {
                let surface = Viewport::new(f64::from(area.width()), f64::from(area.height()));
                if let Err(err) = widget.borrow_mut().on_layout_complete(surface) {
                    warn!(%err, "initial chart render failed");
                }
            }
            glib::ControlFlow::Break
        });
    });
}
