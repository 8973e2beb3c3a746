use std::cell::{Cell, RefCell};
use std::rc::Rc;

use bankroll_chart::api::{
    ChartConfig, ChartMode, ChartWidget, ObservableSeries, SeriesChange, bind_series,
};
use bankroll_chart::core::{DataPoint, Viewport};
use bankroll_chart::render::NullRenderer;
use rust_decimal::Decimal;

fn point(amount: i64) -> DataPoint {
    DataPoint::new(Decimal::from(amount))
}

fn widget() -> ChartWidget<NullRenderer> {
    ChartWidget::new(NullRenderer::default(), ChartConfig::default()).expect("widget")
}

fn laid_out_widget() -> ChartWidget<NullRenderer> {
    let mut widget = widget();
    assert!(
        widget
            .on_layout_complete(Viewport::new(310.0, 110.0))
            .expect("layout")
    );
    widget
}

#[test]
fn triggers_before_first_layout_are_deferred() {
    let mut widget = widget();
    widget.set_points(vec![point(10), point(20)]).expect("points");
    widget.set_mode(ChartMode::Profit).expect("mode");

    assert_eq!(widget.renderer().frames_rendered, 0);
    assert!(widget.has_pending_redraw());
    assert!(widget.last_frame().is_cleared());

    assert!(
        !widget
            .on_layout_complete(Viewport::new(0.0, 0.0))
            .expect("unmeasured layout")
    );
    assert!(!widget.is_layout_ready());

    assert!(
        widget
            .on_layout_complete(Viewport::new(310.0, 110.0))
            .expect("layout")
    );
    assert_eq!(widget.renderer().frames_rendered, 1);
    assert!(!widget.has_pending_redraw());
    assert_eq!(widget.last_frame().markers.len(), 2);
    assert!(widget.last_frame().reference_line.is_some());

    assert!(
        !widget
            .on_layout_complete(Viewport::new(400.0, 200.0))
            .expect("second layout")
    );
    assert_eq!(widget.renderer().frames_rendered, 1);
}

#[test]
fn every_trigger_funnels_into_a_full_redraw() {
    let mut widget = laid_out_widget();
    assert_eq!(widget.renderer().frames_rendered, 1);

    widget.set_points(vec![point(-5), point(15)]).expect("points");
    assert_eq!(widget.renderer().frames_rendered, 2);

    widget.set_profit_mode(true).expect("mode");
    assert_eq!(widget.renderer().frames_rendered, 3);
    assert_eq!(widget.renderer().last_curve_count, 2);

    widget.resize(Viewport::new(610.0, 210.0)).expect("resize");
    assert_eq!(widget.renderer().frames_rendered, 4);
    let state = widget.last_frame().state.expect("state");
    assert_eq!((state.canvas_width, state.canvas_height), (600.0, 200.0));

    widget
        .apply_series_change(&SeriesChange::Reset, &[point(7)])
        .expect("series change");
    assert_eq!(widget.renderer().frames_rendered, 5);
    assert_eq!(widget.points(), &[point(7)]);
}

#[test]
fn unchanged_mode_and_size_do_not_redraw() {
    let mut widget = laid_out_widget();
    widget.set_mode(ChartMode::BuyIn).expect("mode");
    widget.resize(Viewport::new(310.0, 110.0)).expect("resize");
    assert_eq!(widget.renderer().frames_rendered, 1);
}

#[test]
fn bound_series_mutations_redraw_the_widget() {
    let widget = Rc::new(RefCell::new(laid_out_widget()));
    let series = Rc::new(RefCell::new(ObservableSeries::from_points(vec![point(50)])));

    bind_series(&widget, &series).expect("bind");
    assert!(widget.borrow().is_bound());
    assert_eq!(widget.borrow().points(), &[point(50)]);
    assert_eq!(widget.borrow().renderer().frames_rendered, 2);

    series.borrow_mut().push(point(80));
    assert_eq!(widget.borrow().points(), &[point(50), point(80)]);
    assert_eq!(widget.borrow().last_frame().markers.len(), 2);

    series.borrow_mut().remove(0).expect("remove");
    assert_eq!(widget.borrow().points(), &[point(80)]);

    series.borrow_mut().clear();
    assert!(widget.borrow().last_frame().is_cleared());
    assert_eq!(widget.borrow().renderer().frames_rendered, 5);
}

#[test]
fn rebinding_releases_the_previous_series() {
    let widget = Rc::new(RefCell::new(laid_out_widget()));
    let first = Rc::new(RefCell::new(ObservableSeries::new()));
    let second = Rc::new(RefCell::new(ObservableSeries::from_points(vec![point(3)])));

    bind_series(&widget, &first).expect("bind first");
    assert_eq!(first.borrow().subscriber_count(), 1);

    bind_series(&widget, &second).expect("bind second");
    assert_eq!(first.borrow().subscriber_count(), 0);
    assert_eq!(second.borrow().subscriber_count(), 1);

    let frames = widget.borrow().renderer().frames_rendered;
    first.borrow_mut().push(point(99));
    assert_eq!(widget.borrow().renderer().frames_rendered, frames);
    assert_eq!(widget.borrow().points(), &[point(3)]);

    widget.borrow_mut().unbind_series().expect("unbind");
    assert_eq!(second.borrow().subscriber_count(), 0);
    assert!(widget.borrow().last_frame().is_cleared());
}

#[test]
fn redraw_hook_fires_for_series_driven_redraws() {
    let painted = Rc::new(Cell::new(0usize));
    let mut deferred = widget();
    let counter = Rc::clone(&painted);
    deferred.set_redraw_hook(move |_| counter.set(counter.get() + 1));
    deferred.set_points(vec![point(5)]).expect("points");
    assert_eq!(painted.get(), 0);

    let widget = Rc::new(RefCell::new(deferred));
    assert!(
        widget
            .borrow_mut()
            .on_layout_complete(Viewport::new(310.0, 110.0))
            .expect("layout")
    );
    assert_eq!(painted.get(), 1);

    let series = Rc::new(RefCell::new(ObservableSeries::new()));
    bind_series(&widget, &series).expect("bind");
    assert_eq!(painted.get(), 2);

    series.borrow_mut().push(point(20));
    series.borrow_mut().insert(0, point(-10)).expect("insert");
    series.borrow_mut().clear();
    assert_eq!(painted.get(), 5);

    widget.borrow_mut().clear_redraw_hook();
    series.borrow_mut().push(point(1));
    assert_eq!(painted.get(), 5);
    assert_eq!(widget.borrow().renderer().frames_rendered, 6);
}

#[test]
fn rebinding_during_notification_silences_the_old_series() {
    let widget = Rc::new(RefCell::new(laid_out_widget()));
    let first = Rc::new(RefCell::new(ObservableSeries::new()));
    let second = Rc::new(RefCell::new(ObservableSeries::from_points(vec![point(3)])));
    bind_series(&widget, &first).expect("bind first");

    let mut next_series = Some(Rc::clone(&second));
    let host_widget = Rc::clone(&widget);
    first.borrow_mut().subscribe(move |_, _| {
        if let Some(series) = next_series.take() {
            bind_series(&host_widget, &series).expect("rebind");
        }
    });

    first.borrow_mut().push(point(1));
    assert_eq!(widget.borrow().points(), &[point(3)]);

    let frames = widget.borrow().renderer().frames_rendered;
    first.borrow_mut().push(point(2));
    assert_eq!(widget.borrow().points(), &[point(3)]);
    assert_eq!(widget.borrow().renderer().frames_rendered, frames);

    second.borrow_mut().push(point(4));
    assert_eq!(widget.borrow().points(), &[point(3), point(4)]);
}

#[test]
fn dropped_widget_leaves_series_usable() {
    let series = Rc::new(RefCell::new(ObservableSeries::new()));
    {
        let widget = Rc::new(RefCell::new(laid_out_widget()));
        bind_series(&widget, &series).expect("bind");
    }
    assert_eq!(series.borrow().subscriber_count(), 0);
    series.borrow_mut().push(point(1));
    assert_eq!(series.borrow().len(), 1);
}

#[test]
fn invalid_config_is_rejected_without_touching_the_frame() {
    let mut widget = laid_out_widget();
    let config = ChartConfig {
        marker_size_px: 0.0,
        ..ChartConfig::default()
    };
    assert!(widget.set_config(config).is_err());
    assert_eq!(widget.config().marker_size_px, 6.0);
    assert_eq!(widget.renderer().frames_rendered, 1);
}
