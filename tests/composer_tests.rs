use approx::assert_relative_eq;
use chart_geometry::api::{
    BarSeries, ChartComposer, ChartConfig, FillBaseline, LineSeries, ScatterSeries, SeriesGeometry,
    SeriesKind, SeriesSpec, SeriesValue,
};
use chart_geometry::core::{AxisSide, NumericRange, PathCommand, PixelSize, Point2D};
use chart_geometry::ChartError;

fn composer() -> ChartComposer {
    ChartComposer::new(ChartConfig::default()).expect("default config")
}

fn range(lower: f64, upper: f64) -> NumericRange {
    NumericRange::new(lower, upper).expect("range")
}

#[test]
fn series_sharing_a_side_are_scaled_against_merged_bounds() {
    let series: Vec<SeriesSpec> = vec![
        LineSeries::new([1.0, 2.0, 3.0]).expect("line").into(),
        LineSeries::new([10.0, 20.0, 30.0]).expect("line").into(),
    ];
    let chart = composer().compose(&series, PixelSize::new(200.0, 300.0));

    let left = chart.axis(AxisSide::Left).expect("left axis");
    assert_eq!(left.bounds, range(0.0, 30.0));
    assert_eq!(left.series_count, 2);
    assert_eq!(left.tick_values, vec![30.0, 22.5, 15.0, 7.5, 0.0]);
    assert_eq!(left.tick_offsets, vec![0.0, 75.0, 150.0, 225.0, 300.0]);
    assert_eq!(left.gridline_offsets(), left.tick_offsets.as_slice());
    assert!(chart.axis(AxisSide::Right).is_none());

    for composed in &chart.series {
        assert_eq!(composed.bounds, range(0.0, 30.0));
    }

    let SeriesGeometry::Line(small) = &chart.series[0].geometry else {
        panic!("expected line geometry");
    };
    // 3 on a [0, 30] axis of height 300 sits at y = 270, not at the top.
    assert_eq!(
        small.stroke.vertices(),
        vec![
            Point2D::new(0.0, 290.0),
            Point2D::new(100.0, 280.0),
            Point2D::new(200.0, 270.0),
        ]
    );
}

#[test]
fn sides_are_merged_independently() {
    let series: Vec<SeriesSpec> = vec![
        BarSeries::new([5.0, 10.0]).expect("bars").into(),
        LineSeries::new([-4.0, -1.0])
            .expect("line")
            .with_axis_side(AxisSide::Right)
            .with_label_specifier("%.0f")
            .into(),
    ];
    let chart = composer().compose(&series, PixelSize::new(400.0, 200.0));

    assert_eq!(chart.axes.len(), 2);
    let sides: Vec<AxisSide> = chart.axes.keys().copied().collect();
    assert_eq!(sides, vec![AxisSide::Left, AxisSide::Right]);
    assert_eq!(chart.axes[&AxisSide::Left].bounds, range(0.0, 10.0));
    assert_eq!(chart.axes[&AxisSide::Right].bounds, range(-4.0, 0.0));
    assert_eq!(chart.axes[&AxisSide::Left].label_specifier, "%.2f");
    assert_eq!(chart.axes[&AxisSide::Right].label_specifier, "%.0f");
    assert_eq!(chart.series[1].axis_side, AxisSide::Right);
}

#[test]
fn right_only_chart_has_no_left_axis() {
    let series: Vec<SeriesSpec> = vec![
        BarSeries::new([1.0])
            .expect("bars")
            .with_axis_side(AxisSide::Right)
            .into(),
    ];
    let chart = composer().compose(&series, PixelSize::new(100.0, 100.0));
    assert!(chart.axis(AxisSide::Left).is_none());
    assert!(chart.axis(AxisSide::Right).is_some());
}

#[test]
fn flat_series_gets_widened_bounds() {
    let series: Vec<SeriesSpec> = vec![LineSeries::new([0.0, 0.0, 0.0]).expect("line").into()];
    let chart = composer().compose(&series, PixelSize::new(100.0, 100.0));
    let left = chart.axis(AxisSide::Left).expect("left");
    assert_eq!(left.bounds, range(-1.0, 1.0));
    assert_eq!(left.tick_values, vec![1.0, 0.5, 0.0, -0.5, -1.0]);
}

#[test]
fn scatter_and_bars_share_a_side() {
    let series: Vec<SeriesSpec> = vec![
        BarSeries::new([10.0, 20.0]).expect("bars").into(),
        ScatterSeries::new([(0.0, 5.0), (1.0, 25.0)])
            .expect("scatter")
            .with_regression(true)
            .into(),
    ];
    let chart = composer().compose(&series, PixelSize::new(100.0, 250.0));

    assert_eq!(chart.axes[&AxisSide::Left].bounds, range(0.0, 25.0));
    let SeriesGeometry::Scatter(scatter) = &chart.series[1].geometry else {
        panic!("expected scatter geometry");
    };
    assert_eq!(scatter.points[0], Point2D::new(0.0, 200.0));
    assert_eq!(scatter.points[1], Point2D::new(100.0, 0.0));
    let regression = scatter.regression.expect("regression");
    assert_eq!(regression.line.slope, 20.0);
}

#[test]
fn pinned_bounds_replace_the_natural_range() {
    let series: Vec<SeriesSpec> = vec![
        BarSeries::new([1.0, 2.0])
            .expect("bars")
            .with_bounds(range(-10.0, 10.0))
            .into(),
    ];
    let chart = composer().compose(&series, PixelSize::new(100.0, 100.0));
    assert_eq!(chart.series[0].bounds, range(-10.0, 10.0));
}

#[test]
fn filled_line_closes_on_requested_baseline() {
    let size = PixelSize::new(100.0, 100.0);
    let zero_fill: Vec<SeriesSpec> = vec![
        LineSeries::new([2.0, 4.0])
            .expect("line")
            .filled(true)
            .with_bounds(range(0.0, 4.0))
            .into(),
    ];
    let chart = composer().compose(&zero_fill, size);
    let SeriesGeometry::Line(line) = &chart.series[0].geometry else {
        panic!("expected line geometry");
    };
    let fill = line.fill.as_ref().expect("fill");
    assert!(fill.is_closed());
    assert_eq!(
        fill.commands[0],
        PathCommand::MoveTo {
            to: Point2D::new(0.0, 100.0)
        }
    );

    let min_fill: Vec<SeriesSpec> = vec![
        LineSeries::new([2.0, 4.0])
            .expect("line")
            .filled(true)
            .with_fill_baseline(FillBaseline::SeriesMinimum)
            .with_bounds(range(0.0, 4.0))
            .into(),
    ];
    let chart = composer().compose(&min_fill, size);
    let SeriesGeometry::Line(line) = &chart.series[0].geometry else {
        panic!("expected line geometry");
    };
    let fill = line.fill.as_ref().expect("fill");
    assert_eq!(
        fill.commands[0],
        PathCommand::MoveTo {
            to: Point2D::new(0.0, 50.0)
        }
    );
}

#[test]
fn unfilled_line_has_no_fill_path() {
    let series: Vec<SeriesSpec> = vec![LineSeries::new([1.0, 2.0]).expect("line").into()];
    let chart = composer().compose(&series, PixelSize::new(100.0, 100.0));
    let SeriesGeometry::Line(line) = &chart.series[0].geometry else {
        panic!("expected line geometry");
    };
    assert!(line.fill.is_none());
    assert_eq!(line.stroke.len(), 2);
}

#[test]
fn labels_pass_through_untouched() {
    let series: Vec<SeriesSpec> = vec![
        BarSeries::from_values([SeriesValue::labeled("mon", 3.0), SeriesValue::new(4.0)])
            .expect("bars")
            .into(),
    ];
    let chart = composer().compose(&series, PixelSize::new(100.0, 100.0));
    assert_eq!(chart.series[0].kind, SeriesKind::Bar);
    assert_eq!(chart.series[0].labels, vec![Some("mon".to_owned()), None]);
}

#[test]
fn unsized_surface_composes_zero_geometry() {
    let series: Vec<SeriesSpec> = vec![
        BarSeries::new([1.0, -1.0]).expect("bars").into(),
        LineSeries::new([1.0, 3.0]).expect("line").smoothed(true).filled(true).into(),
    ];
    let chart = composer().compose(&series, PixelSize::ZERO);
    assert_eq!(chart.axes[&AxisSide::Left].tick_offsets, vec![0.0; 5]);

    let SeriesGeometry::Bar(bars) = &chart.series[0].geometry else {
        panic!("expected bar geometry");
    };
    assert!(bars.bars.iter().all(|bar| bar.height == 0.0 && bar.width == 0.0));
}

#[test]
fn empty_series_list_composes_nothing() {
    let chart = composer().compose(&[], PixelSize::new(100.0, 100.0));
    assert!(chart.axes.is_empty());
    assert!(chart.series.is_empty());
}

#[test]
fn invalid_tick_count_is_rejected_at_configuration_time() {
    let result = ChartComposer::new(ChartConfig::new().with_tick_count(1));
    assert_eq!(result.err(), Some(ChartError::InvalidTickCount { count: 1 }));

    let custom = ChartComposer::new(ChartConfig::new().with_tick_count(3)).expect("composer");
    let series: Vec<SeriesSpec> = vec![BarSeries::new([4.0]).expect("bars").into()];
    let chart = custom.compose(&series, PixelSize::new(10.0, 10.0));
    assert_eq!(chart.axes[&AxisSide::Left].tick_values, vec![4.0, 2.0, 0.0]);
}

#[test]
fn non_finite_series_values_are_rejected_at_construction() {
    assert!(matches!(
        BarSeries::new([1.0, f64::NAN]),
        Err(ChartError::InvalidData(_))
    ));
    assert!(LineSeries::new([f64::INFINITY]).is_err());
    assert!(ScatterSeries::new([(0.0, f64::NAN)]).is_err());
}

#[test]
fn composition_is_idempotent() {
    let series: Vec<SeriesSpec> = vec![
        BarSeries::new([3.0, -7.5, 12.25]).expect("bars").into(),
        LineSeries::new([0.3, 0.1, 0.7])
            .expect("line")
            .smoothed(true)
            .filled(true)
            .with_axis_side(AxisSide::Right)
            .into(),
        ScatterSeries::new([(0.1, 0.2), (1.7, -3.3), (2.9, 8.1)])
            .expect("scatter")
            .with_regression(true)
            .into(),
    ];
    let composer = composer();
    let size = PixelSize::new(321.5, 187.25);

    let first = composer.compose(&series, size);
    let second = composer.compose(&series, size);
    assert_eq!(first, second);
}

#[test]
fn flat_series_at_float_max_keeps_finite_axis() {
    let series: Vec<SeriesSpec> = vec![
        ScatterSeries::new([(0.0, f64::MAX), (1.0, f64::MAX)])
            .expect("scatter")
            .into(),
    ];
    let chart = composer().compose(&series, PixelSize::new(100.0, 100.0));

    let left = chart.axis(AxisSide::Left).expect("left");
    assert_eq!(left.bounds.upper(), f64::MAX);
    assert!(left.bounds.lower().is_finite() && left.bounds.lower() < f64::MAX);
    assert!(left.tick_values.iter().all(|tick| tick.is_finite()));

    let SeriesGeometry::Scatter(scatter) = &chart.series[0].geometry else {
        panic!("expected scatter geometry");
    };
    assert_eq!(
        scatter.points,
        vec![Point2D::new(0.0, 0.0), Point2D::new(100.0, 0.0)]
    );
}

#[test]
fn full_float_range_keeps_evenly_spaced_ticks() {
    let series: Vec<SeriesSpec> = vec![LineSeries::new([f64::MAX, f64::MIN]).expect("line").into()];
    let chart = composer().compose(&series, PixelSize::new(100.0, 100.0));

    let left = chart.axis(AxisSide::Left).expect("left");
    let ticks = &left.tick_values;
    assert_eq!(ticks[0], f64::MAX);
    assert_relative_eq!(ticks[1], f64::MAX / 2.0, max_relative = 1e-12);
    assert_eq!(ticks[2], 0.0);
    assert_relative_eq!(ticks[3], f64::MIN / 2.0, max_relative = 1e-12);
    assert_eq!(ticks[4], f64::MIN);

    let SeriesGeometry::Line(line) = &chart.series[0].geometry else {
        panic!("expected line geometry");
    };
    let vertices = line.stroke.vertices();
    assert_eq!(vertices[0], Point2D::new(0.0, 0.0));
    assert_eq!(vertices[1].x, 100.0);
    assert_relative_eq!(vertices[1].y, 100.0, max_relative = 1e-9);
}
