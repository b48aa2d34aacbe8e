use serde::{Deserialize, Serialize};

use crate::core::{AxisSide, DataPoint, Interpolation, NumericRange, y_extent};
use crate::error::{ChartError, ChartResult};

/// Label format handed to hosts when a series does not pick one.
pub const DEFAULT_LABEL_SPECIFIER: &str = "%.2f";

/// One sample of a bar or line series.
///
/// The label is carried through to the output for hosts; it never affects
/// geometry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeriesValue {
    pub value: f64,
    #[serde(default)]
    pub label: Option<String>,
}

impl SeriesValue {
    #[must_use]
    pub fn new(value: f64) -> Self {
        Self { value, label: None }
    }

    #[must_use]
    pub fn labeled(label: impl Into<String>, value: f64) -> Self {
        Self {
            value,
            label: Some(label.into()),
        }
    }
}

/// Series representation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SeriesKind {
    Bar,
    Line,
    Scatter,
}

/// Where the closed fill path of a line series returns to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FillBaseline {
    /// Data value `0`.
    #[default]
    Zero,
    /// The series' own minimum.
    SeriesMinimum,
}

/// Axis placement shared by every series kind.
#[derive(Debug, Clone, PartialEq)]
pub struct AxisBinding {
    pub side: AxisSide,
    pub label_specifier: String,
    pub bounds: Option<NumericRange>,
}

impl Default for AxisBinding {
    fn default() -> Self {
        Self {
            side: AxisSide::Left,
            label_specifier: DEFAULT_LABEL_SPECIFIER.to_owned(),
            bounds: None,
        }
    }
}

/// Discrete bars, one per value.
#[derive(Debug, Clone, PartialEq)]
pub struct BarSeries {
    values: Vec<SeriesValue>,
    axis: AxisBinding,
}

impl BarSeries {
    pub fn new<I>(values: I) -> ChartResult<Self>
    where
        I: IntoIterator<Item = f64>,
    {
        Self::from_values(values.into_iter().map(SeriesValue::new))
    }

    pub fn from_values<I>(values: I) -> ChartResult<Self>
    where
        I: IntoIterator<Item = SeriesValue>,
    {
        Ok(Self {
            values: validate_values(values)?,
            axis: AxisBinding::default(),
        })
    }

    #[must_use]
    pub fn with_axis_side(mut self, side: AxisSide) -> Self {
        self.axis.side = side;
        self
    }

    #[must_use]
    pub fn with_label_specifier(mut self, specifier: impl Into<String>) -> Self {
        self.axis.label_specifier = specifier.into();
        self
    }

    /// Pins the bounds this series reports for aggregation.
    #[must_use]
    pub fn with_bounds(mut self, bounds: NumericRange) -> Self {
        self.axis.bounds = Some(bounds);
        self
    }

    #[must_use]
    pub fn values(&self) -> &[SeriesValue] {
        &self.values
    }

    #[must_use]
    pub fn axis(&self) -> &AxisBinding {
        &self.axis
    }

    #[must_use]
    pub fn raw_values(&self) -> Vec<f64> {
        self.values.iter().map(|sample| sample.value).collect()
    }
}

/// Continuous line through evenly spaced values.
#[derive(Debug, Clone, PartialEq)]
pub struct LineSeries {
    values: Vec<SeriesValue>,
    axis: AxisBinding,
    interpolation: Interpolation,
    filled: bool,
    fill_baseline: FillBaseline,
}

impl LineSeries {
    pub fn new<I>(values: I) -> ChartResult<Self>
    where
        I: IntoIterator<Item = f64>,
    {
        Self::from_values(values.into_iter().map(SeriesValue::new))
    }

    pub fn from_values<I>(values: I) -> ChartResult<Self>
    where
        I: IntoIterator<Item = SeriesValue>,
    {
        Ok(Self {
            values: validate_values(values)?,
            axis: AxisBinding::default(),
            interpolation: Interpolation::Linear,
            filled: false,
            fill_baseline: FillBaseline::Zero,
        })
    }

    #[must_use]
    pub fn with_axis_side(mut self, side: AxisSide) -> Self {
        self.axis.side = side;
        self
    }

    #[must_use]
    pub fn with_label_specifier(mut self, specifier: impl Into<String>) -> Self {
        self.axis.label_specifier = specifier.into();
        self
    }

    #[must_use]
    pub fn with_bounds(mut self, bounds: NumericRange) -> Self {
        self.axis.bounds = Some(bounds);
        self
    }

    /// Switches between quadratic smoothing and straight segments.
    #[must_use]
    pub fn smoothed(mut self, smoothed: bool) -> Self {
        self.interpolation = if smoothed {
            Interpolation::Smoothed
        } else {
            Interpolation::Linear
        };
        self
    }

    /// Also emits a closed fill path under the line.
    #[must_use]
    pub fn filled(mut self, filled: bool) -> Self {
        self.filled = filled;
        self
    }

    #[must_use]
    pub fn with_fill_baseline(mut self, baseline: FillBaseline) -> Self {
        self.fill_baseline = baseline;
        self
    }

    #[must_use]
    pub fn values(&self) -> &[SeriesValue] {
        &self.values
    }

    #[must_use]
    pub fn axis(&self) -> &AxisBinding {
        &self.axis
    }

    #[must_use]
    pub fn interpolation(&self) -> Interpolation {
        self.interpolation
    }

    #[must_use]
    pub fn is_filled(&self) -> bool {
        self.filled
    }

    #[must_use]
    pub fn fill_baseline(&self) -> FillBaseline {
        self.fill_baseline
    }

    #[must_use]
    pub fn raw_values(&self) -> Vec<f64> {
        self.values.iter().map(|sample| sample.value).collect()
    }
}

/// Point cloud with an optional least-squares line.
#[derive(Debug, Clone, PartialEq)]
pub struct ScatterSeries {
    points: Vec<DataPoint>,
    axis: AxisBinding,
    regression: bool,
}

impl ScatterSeries {
    pub fn new<I, P>(points: I) -> ChartResult<Self>
    where
        I: IntoIterator<Item = P>,
        P: Into<DataPoint>,
    {
        let points = points
            .into_iter()
            .map(|point| point.into().validate())
            .collect::<ChartResult<Vec<_>>>()?;
        Ok(Self {
            points,
            axis: AxisBinding::default(),
            regression: false,
        })
    }

    #[must_use]
    pub fn with_axis_side(mut self, side: AxisSide) -> Self {
        self.axis.side = side;
        self
    }

    #[must_use]
    pub fn with_label_specifier(mut self, specifier: impl Into<String>) -> Self {
        self.axis.label_specifier = specifier.into();
        self
    }

    #[must_use]
    pub fn with_bounds(mut self, bounds: NumericRange) -> Self {
        self.axis.bounds = Some(bounds);
        self
    }

    #[must_use]
    pub fn with_regression(mut self, regression: bool) -> Self {
        self.regression = regression;
        self
    }

    #[must_use]
    pub fn points(&self) -> &[DataPoint] {
        &self.points
    }

    #[must_use]
    pub fn axis(&self) -> &AxisBinding {
        &self.axis
    }

    #[must_use]
    pub fn shows_regression(&self) -> bool {
        self.regression
    }
}

/// One co-displayed series, tagged by representation.
#[derive(Debug, Clone, PartialEq)]
pub enum SeriesSpec {
    Bar(BarSeries),
    Line(LineSeries),
    Scatter(ScatterSeries),
}

impl SeriesSpec {
    #[must_use]
    pub fn kind(&self) -> SeriesKind {
        match self {
            Self::Bar(_) => SeriesKind::Bar,
            Self::Line(_) => SeriesKind::Line,
            Self::Scatter(_) => SeriesKind::Scatter,
        }
    }

    #[must_use]
    pub fn axis(&self) -> &AxisBinding {
        match self {
            Self::Bar(series) => series.axis(),
            Self::Line(series) => series.axis(),
            Self::Scatter(series) => series.axis(),
        }
    }

    #[must_use]
    pub fn axis_side(&self) -> AxisSide {
        self.axis().side
    }

    #[must_use]
    pub fn len(&self) -> usize {
        match self {
            Self::Bar(series) => series.values().len(),
            Self::Line(series) => series.values().len(),
            Self::Scatter(series) => series.points().len(),
        }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Bounds this series reports before aggregation.
    ///
    /// Value series always include zero; scatter series use their Y extent.
    /// A pinned range replaces either.
    #[must_use]
    pub fn natural_range(&self) -> NumericRange {
        if let Some(bounds) = self.axis().bounds {
            return bounds;
        }
        match self {
            Self::Bar(series) => NumericRange::for_values(&series.raw_values()),
            Self::Line(series) => NumericRange::for_values(&series.raw_values()),
            Self::Scatter(series) => y_extent(series.points()),
        }
    }
}

impl From<BarSeries> for SeriesSpec {
    fn from(series: BarSeries) -> Self {
        Self::Bar(series)
    }
}

impl From<LineSeries> for SeriesSpec {
    fn from(series: LineSeries) -> Self {
        Self::Line(series)
    }
}

impl From<ScatterSeries> for SeriesSpec {
    fn from(series: ScatterSeries) -> Self {
        Self::Scatter(series)
    }
}

fn validate_values<I>(values: I) -> ChartResult<Vec<SeriesValue>>
where
    I: IntoIterator<Item = SeriesValue>,
{
    values
        .into_iter()
        .enumerate()
        .map(|(index, sample)| {
            if sample.value.is_finite() {
                Ok(sample)
            } else {
                Err(ChartError::InvalidData(format!(
                    "series value at index {index} must be finite"
                )))
            }
        })
        .collect()
}
