//! Composition surface: series descriptors, chart configuration and the
//! composer that turns them into shared axes and drawable geometry.

mod composer;
mod config;
mod json_contract;
mod series;

pub use composer::{
    AxisGeometry, ChartComposer, ComposedChart, ComposedSeries, LineGeometry, SeriesGeometry,
};
pub use config::{ChartConfig, DEFAULT_TICK_COUNT};
pub use json_contract::{COMPOSED_CHART_JSON_SCHEMA_V1, ComposedChartJsonContractV1};
pub use series::{
    AxisBinding, BarSeries, DEFAULT_LABEL_SPECIFIER, FillBaseline, LineSeries, ScatterSeries,
    SeriesKind, SeriesSpec, SeriesValue,
};
