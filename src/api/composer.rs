use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use tracing::{debug, trace, warn};

use crate::core::{
    AxisSide, AxisTickGenerator, BarGeometryCalculator, BarLayout, BoundsAggregator,
    NumericRange, PathBuilder, PathGeometry, PixelSize, Scale2D, ScatterGeometry, SideBounds,
    project_scatter,
};
use crate::error::ChartResult;

use super::{ChartConfig, FillBaseline, LineSeries, SeriesKind, SeriesSpec};

/// Labels and gridlines for one axis side.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AxisGeometry {
    pub side: AxisSide,
    pub bounds: NumericRange,
    /// Tick values from `bounds.upper()` down to `bounds.lower()`.
    pub tick_values: Vec<f64>,
    /// Pixel Y of each tick, top to bottom.
    pub tick_offsets: Vec<f64>,
    /// Format of the first series on this side.
    pub label_specifier: String,
    pub series_count: usize,
}

impl AxisGeometry {
    /// Horizontal gridlines share the tick positions.
    #[must_use]
    pub fn gridline_offsets(&self) -> &[f64] {
        &self.tick_offsets
    }
}

/// Stroke path and optional fill outline of a line series.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct LineGeometry {
    pub stroke: PathGeometry,
    pub fill: Option<PathGeometry>,
}

/// Drawable output for one series.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum SeriesGeometry {
    Bar(BarLayout),
    Line(LineGeometry),
    Scatter(ScatterGeometry),
}

/// One series' geometry plus the shared bounds it was scaled against.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComposedSeries {
    pub index: usize,
    pub kind: SeriesKind,
    pub axis_side: AxisSide,
    pub bounds: NumericRange,
    /// Per-value labels of bar and line series, in input order.
    #[serde(default)]
    pub labels: Vec<Option<String>>,
    pub geometry: SeriesGeometry,
}

/// Complete output of one composition pass.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComposedChart {
    pub size: PixelSize,
    /// Present sides only, left before right.
    pub axes: IndexMap<AxisSide, AxisGeometry>,
    /// Series in input order.
    pub series: Vec<ComposedSeries>,
}

impl ComposedChart {
    #[must_use]
    pub fn axis(&self, side: AxisSide) -> Option<&AxisGeometry> {
        self.axes.get(&side)
    }
}

/// Turns a list of co-displayed series into shared axes and per-series geometry.
///
/// Composition runs in two strict phases: every series reports its range and
/// side, the ranges are merged per side, and only then is each series scaled
/// against the merged range of its side.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ChartComposer {
    config: ChartConfig,
    ticks: AxisTickGenerator,
    aggregator: BoundsAggregator,
    bars: BarGeometryCalculator,
}

impl ChartComposer {
    pub fn new(config: ChartConfig) -> ChartResult<Self> {
        let config = config.validate()?;
        Ok(Self {
            config,
            ticks: AxisTickGenerator::new(config.tick_count)?,
            aggregator: BoundsAggregator::with_widening(config.degenerate_widening),
            bars: BarGeometryCalculator::new(config.bar_tuning()),
        })
    }

    #[must_use]
    pub fn config(&self) -> ChartConfig {
        self.config
    }

    /// Phase one: merged bounds per side.
    #[must_use]
    pub fn merged_bounds(&self, series: &[SeriesSpec]) -> SideBounds {
        let entries: SmallVec<[(NumericRange, AxisSide); 8]> = series
            .iter()
            .map(|spec| (spec.natural_range(), spec.axis_side()))
            .collect();
        self.aggregator.aggregate(entries)
    }

    #[must_use]
    pub fn compose(&self, series: &[SeriesSpec], size: PixelSize) -> ComposedChart {
        let sanitized = size.sanitized();
        if sanitized != size {
            warn!(
                width = size.width,
                height = size.height,
                "pixel size must be finite and >= 0; clamping to zero"
            );
        }
        let size = sanitized;
        debug!(
            series = series.len(),
            width = size.width,
            height = size.height,
            "compose chart"
        );

        let merged = self.merged_bounds(series);

        let mut axes = IndexMap::with_capacity(AxisSide::ALL.len());
        for side in AxisSide::ALL {
            let Some(bounds) = merged.get(side) else {
                continue;
            };
            let mut on_side = series.iter().filter(|spec| spec.axis_side() == side);
            let label_specifier = on_side
                .next()
                .map(|spec| spec.axis().label_specifier.clone())
                .unwrap_or_default();
            axes.insert(
                side,
                AxisGeometry {
                    side,
                    bounds,
                    tick_values: self.ticks.values(bounds),
                    tick_offsets: self.ticks.pixel_offsets(size.height),
                    label_specifier,
                    series_count: 1 + on_side.count(),
                },
            );
        }

        let series = series
            .iter()
            .enumerate()
            .filter_map(|(index, spec)| {
                let side = spec.axis_side();
                let bounds = merged.get(side)?;
                Some(self.compose_series(index, spec, bounds, size))
            })
            .collect::<Vec<_>>();

        debug!(
            axes = axes.len(),
            series = series.len(),
            "composed chart"
        );
        ComposedChart { size, axes, series }
    }

    fn compose_series(
        &self,
        index: usize,
        spec: &SeriesSpec,
        bounds: NumericRange,
        size: PixelSize,
    ) -> ComposedSeries {
        trace!(
            index,
            kind = ?spec.kind(),
            side = ?spec.axis_side(),
            lower = bounds.lower(),
            upper = bounds.upper(),
            "scale series"
        );

        let (geometry, labels) = match spec {
            SeriesSpec::Bar(series) => (
                SeriesGeometry::Bar(self.bars.layout(&series.raw_values(), bounds, size)),
                series
                    .values()
                    .iter()
                    .map(|sample| sample.label.clone())
                    .collect(),
            ),
            SeriesSpec::Line(series) => (
                SeriesGeometry::Line(line_geometry(series, bounds, size)),
                series
                    .values()
                    .iter()
                    .map(|sample| sample.label.clone())
                    .collect(),
            ),
            SeriesSpec::Scatter(series) => (
                SeriesGeometry::Scatter(project_scatter(
                    series.points(),
                    bounds,
                    size,
                    series.shows_regression(),
                )),
                Vec::new(),
            ),
        };

        ComposedSeries {
            index,
            kind: spec.kind(),
            axis_side: spec.axis_side(),
            bounds,
            labels,
            geometry,
        }
    }
}

fn line_geometry(series: &LineSeries, bounds: NumericRange, size: PixelSize) -> LineGeometry {
    let values = series.raw_values();
    let scale = Scale2D::for_continuous(size, bounds, values.len());
    let builder = PathBuilder::new(series.interpolation());

    let fill = series.is_filled().then(|| {
        let baseline_value = match series.fill_baseline() {
            FillBaseline::Zero => bounds.clamp(0.0),
            FillBaseline::SeriesMinimum => values
                .iter()
                .copied()
                .fold(f64::INFINITY, f64::min),
        };
        builder.closed_values(&values, scale, scale.y_to_pixel(baseline_value))
    });

    LineGeometry {
        stroke: builder.open_values(&values, scale),
        fill,
    }
}
