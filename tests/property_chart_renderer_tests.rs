use bankroll_chart::api::{ChartMode, ChartRenderer};
use bankroll_chart::core::{DataPoint, Viewport};
use proptest::prelude::*;
use rust_decimal::Decimal;

fn to_points(amounts: &[i64]) -> Vec<DataPoint> {
    amounts
        .iter()
        .map(|&amount| DataPoint::new(Decimal::new(amount, 2)))
        .collect()
}

proptest! {
    #[test]
    fn marker_count_matches_input_points(
        amounts in proptest::collection::vec(-1_000_000i64..1_000_000, 1..64),
        is_profit_mode in any::<bool>(),
        width in 0.0f64..2_000.0,
        height in 0.0f64..1_000.0,
    ) {
        let mode = ChartMode::from_profit_flag(is_profit_mode);
        let frame = ChartRenderer::default().render(
            &to_points(&amounts),
            mode,
            Viewport::new(width, height),
        );

        // A lone profit point also gets a neutral start marker at the origin.
        let expected = if amounts.len() == 1 && mode.is_profit() { 2 } else { amounts.len() };
        prop_assert_eq!(frame.markers.len(), expected);
        prop_assert!(frame.validate().is_ok());
        prop_assert_eq!(frame.scale_labels.len(), 5);
    }

    #[test]
    fn markers_and_knots_stay_inside_canvas(
        amounts in proptest::collection::vec(-50_000i64..50_000, 2..48),
        is_profit_mode in any::<bool>(),
    ) {
        let frame = ChartRenderer::default().render(
            &to_points(&amounts),
            ChartMode::from_profit_flag(is_profit_mode),
            Viewport::new(640.0, 240.0),
        );
        let state = frame.state.expect("state");
        prop_assert!(state.amount_range > 0.0);

        for marker in &frame.markers {
            prop_assert!((0.0..=state.canvas_width).contains(&marker.center_x));
            prop_assert!((0.0..=state.canvas_height).contains(&marker.center_y));
        }
        for curve in &frame.curves {
            for knot in [curve.geometry.start(), curve.geometry.end()] {
                prop_assert!((0.0..=state.canvas_width).contains(&knot.x));
                prop_assert!((0.0..=state.canvas_height).contains(&knot.y));
            }
        }
    }

    #[test]
    fn profit_curve_gains_a_segment_per_sign_change(
        amounts in proptest::collection::vec(-10_000i64..10_000, 2..32),
    ) {
        let points = to_points(&amounts);
        let frame =
            ChartRenderer::default().render(&points, ChartMode::Profit, Viewport::new(500.0, 200.0));
        let crossings = amounts
            .windows(2)
            .filter(|pair| (pair[0] < 0 && pair[1] > 0) || (pair[0] > 0 && pair[1] < 0))
            .count();
        prop_assert_eq!(frame.curves.len(), amounts.len() - 1 + crossings);
    }

    #[test]
    fn render_is_deterministic(
        amounts in proptest::collection::vec(-10_000i64..10_000, 0..32),
        is_profit_mode in any::<bool>(),
    ) {
        let renderer = ChartRenderer::default();
        let points = to_points(&amounts);
        let mode = ChartMode::from_profit_flag(is_profit_mode);
        let surface = Viewport::new(320.0, 110.0);
        prop_assert_eq!(
            renderer.render(&points, mode, surface),
            renderer.render(&points, mode, surface)
        );
    }
}
