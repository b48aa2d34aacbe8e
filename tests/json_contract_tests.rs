use chart_geometry::api::{
    BarSeries, COMPOSED_CHART_JSON_SCHEMA_V1, ChartComposer, ChartConfig, ComposedChart,
    ComposedChartJsonContractV1, LineSeries, SeriesSpec,
};
use chart_geometry::core::{AxisSide, PixelSize};
use chart_geometry::ChartError;

fn sample_chart() -> ComposedChart {
    let series: Vec<SeriesSpec> = vec![
        BarSeries::new([1.0, 2.0, 3.0]).expect("bars").into(),
        LineSeries::new([10.0, 20.0, 30.0])
            .expect("line")
            .filled(true)
            .with_axis_side(AxisSide::Right)
            .into(),
    ];
    ChartComposer::new(ChartConfig::default())
        .expect("composer")
        .compose(&series, PixelSize::new(300.0, 300.0))
}

#[test]
fn empty_config_json_takes_defaults() {
    let config = ChartConfig::from_json_str("{}").expect("config");
    assert_eq!(config, ChartConfig::default());
    assert_eq!(config.tick_count, 5);
    assert_eq!(config.bar_spacing_factor, 90.0);
    assert_eq!(config.max_bar_width, 100.0);
}

#[test]
fn partial_config_json_overrides_named_fields() {
    let config = ChartConfig::from_json_str(r#"{"tick_count": 7, "max_bar_width": 24.0}"#)
        .expect("config");
    assert_eq!(config.tick_count, 7);
    assert_eq!(config.max_bar_width, 24.0);
    assert_eq!(config.degenerate_widening, 1.0);
}

#[test]
fn invalid_config_json_is_rejected() {
    assert_eq!(
        ChartConfig::from_json_str(r#"{"tick_count": 1}"#),
        Err(ChartError::InvalidTickCount { count: 1 })
    );
    assert!(matches!(
        ChartConfig::from_json_str(r#"{"max_bar_width": -3.0}"#),
        Err(ChartError::InvalidConfiguration(_))
    ));
    assert!(matches!(
        ChartConfig::from_json_str("not json"),
        Err(ChartError::InvalidConfiguration(_))
    ));
}

#[test]
fn config_survives_pretty_json() {
    let config = ChartConfig::new()
        .with_tick_count(4)
        .with_bar_spacing_factor(60.0)
        .with_degenerate_widening(0.5);
    let json = config.to_json_pretty().expect("serialize");
    assert_eq!(ChartConfig::from_json_str(&json).expect("parse"), config);
}

#[test]
fn composed_chart_round_trips_through_contract_v1() {
    let chart = sample_chart();
    let json = chart.to_json_contract_v1_pretty().expect("serialize");
    assert!(json.contains("\"schema_version\": 1"));

    let parsed = ComposedChart::from_json_compat_str(&json).expect("parse");
    assert_eq!(parsed, chart);
}

#[test]
fn bare_chart_json_is_accepted() {
    let chart = sample_chart();
    let json = chart.to_json_pretty().expect("serialize");
    let parsed = ComposedChart::from_json_compat_str(&json).expect("parse");
    assert_eq!(parsed, chart);
    assert_eq!(parsed.axes.keys().copied().collect::<Vec<_>>(), vec![
        AxisSide::Left,
        AxisSide::Right
    ]);
}

#[test]
fn unknown_schema_version_is_rejected() {
    let payload = ComposedChartJsonContractV1 {
        schema_version: COMPOSED_CHART_JSON_SCHEMA_V1 + 1,
        chart: sample_chart(),
    };
    let json = serde_json::to_string(&payload).expect("serialize");
    assert!(matches!(
        ComposedChart::from_json_compat_str(&json),
        Err(ChartError::InvalidConfiguration(_))
    ));
}

#[test]
fn garbage_payload_is_invalid_data() {
    assert!(matches!(
        ComposedChart::from_json_compat_str(r#"{"schema_version": 1}"#),
        Err(ChartError::InvalidData(_))
    ));
}
