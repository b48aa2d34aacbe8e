use serde::{Deserialize, Serialize};

use crate::core::scale::finite_or_zero;
use crate::core::{DataPoint, NumericRange, PixelSize, Point2D, Scale2D};

/// Diameter hosts use for scatter markers, in pixels.
pub const POINT_MARKER_DIAMETER: f64 = 10.0;

const CLIP_TOLERANCE_RATIO: f64 = 1e-9;

/// Least-squares line `y = slope * x + y_intercept`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RegressionLine {
    pub slope: f64,
    pub y_intercept: f64,
}

/// Data-space segment of a regression line after clipping.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RegressionSegment {
    pub start: DataPoint,
    pub end: DataPoint,
}

impl RegressionLine {
    /// Ordinary least squares over the cloud.
    ///
    /// Returns `None` for fewer than two points. When every X is equal the
    /// slope is `0` and the line runs through the mean Y.
    #[must_use]
    pub fn fit(points: &[DataPoint]) -> Option<Self> {
        if points.len() < 2 {
            return None;
        }

        let count = points.len() as f64;
        let mean_x = points.iter().map(|point| point.x).sum::<f64>() / count;
        let mean_y = points.iter().map(|point| point.y).sum::<f64>() / count;
        let (rise, run) = points.iter().fold((0.0, 0.0), |(rise, run), point| {
            let dx = point.x - mean_x;
            (rise + dx * (point.y - mean_y), run + dx * dx)
        });

        let slope = if run == 0.0 {
            0.0
        } else {
            finite_or_zero(rise / run)
        };
        Some(Self {
            slope,
            y_intercept: finite_or_zero(mean_y - slope * mean_x),
        })
    }

    #[must_use]
    pub fn y_at(self, x: f64) -> f64 {
        self.slope * x + self.y_intercept
    }

    /// X where the line reaches `y`; `None` for a horizontal line.
    #[must_use]
    pub fn x_at(self, y: f64) -> Option<f64> {
        if self.slope == 0.0 {
            return None;
        }
        let x = (y - self.y_intercept) / self.slope;
        x.is_finite().then_some(x)
    }

    /// Clips the line over `x_span` to the vertical `bound`.
    ///
    /// Each end is kept when it lies inside `bound`; otherwise it is moved
    /// along the line to where it crosses the bound's upper or lower edge.
    /// Returns `None` when the line never passes through the bound inside
    /// `x_span`. A zero-width `x_span` yields a zero-length segment at the
    /// line's Y there, provided that Y lies inside `bound`.
    #[must_use]
    pub fn clip(self, x_span: NumericRange, bound: NumericRange) -> Option<RegressionSegment> {
        if x_span.is_degenerate() {
            let point = DataPoint::new(x_span.lower(), self.y_at(x_span.lower()));
            return bound.contains(point.y).then_some(RegressionSegment {
                start: point,
                end: point,
            });
        }

        let start = self.clip_end(x_span.lower(), bound)?;
        let end = self.clip_end(x_span.upper(), bound)?;

        let tolerance = x_span.span() * CLIP_TOLERANCE_RATIO;
        if start.x < x_span.lower() - tolerance
            || end.x > x_span.upper() + tolerance
            || start.x > end.x + tolerance
        {
            return None;
        }

        Some(RegressionSegment {
            start: DataPoint::new(x_span.clamp(start.x), start.y),
            end: DataPoint::new(x_span.clamp(end.x), end.y),
        })
    }

    fn clip_end(self, x: f64, bound: NumericRange) -> Option<DataPoint> {
        let y = self.y_at(x);
        if bound.contains(y) {
            return Some(DataPoint::new(x, y));
        }

        let edge = if y > bound.upper() {
            bound.upper()
        } else {
            bound.lower()
        };
        self.x_at(edge).map(|x| DataPoint::new(x, edge))
    }
}

/// Visible part of a regression line, in data and pixel space.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ClippedRegression {
    pub segment: RegressionSegment,
    pub start: Point2D,
    pub end: Point2D,
}

/// Fitted line plus the part of it that falls inside the bound.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RegressionGeometry {
    pub line: RegressionLine,
    /// `None` when the line never enters the bound over the data's X span.
    pub clipped: Option<ClippedRegression>,
}

/// Pixel-space scatter output.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ScatterGeometry {
    /// Marker centres, in input order.
    pub points: Vec<Point2D>,
    pub regression: Option<RegressionGeometry>,
}

/// Fits and clips regression lines for point clouds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RegressionClipper;

impl RegressionClipper {
    /// Regression geometry, or `None` for fewer than two points.
    ///
    /// When every point shares one X the markers all sit at pixel X `0`, and
    /// the horizontal fitted line spans the full surface width.
    #[must_use]
    pub fn project(
        self,
        points: &[DataPoint],
        bound: NumericRange,
        size: PixelSize,
    ) -> Option<RegressionGeometry> {
        let line = RegressionLine::fit(points)?;
        let x_span = x_extent(points);
        let scale = Scale2D::for_xy(size, bound, x_span);

        let clipped = line.clip(x_span, bound).map(|segment| {
            let mut start = scale.project_xy(segment.start.x, segment.start.y);
            let mut end = scale.project_xy(segment.end.x, segment.end.y);
            if x_span.is_degenerate() {
                start.x = 0.0;
                end.x = scale.size().width;
            }
            ClippedRegression {
                segment,
                start,
                end,
            }
        });
        Some(RegressionGeometry { line, clipped })
    }
}

/// Projects a point cloud against `bound`, optionally with its regression line.
#[must_use]
pub fn project_scatter(
    points: &[DataPoint],
    bound: NumericRange,
    size: PixelSize,
    with_regression: bool,
) -> ScatterGeometry {
    let scale = Scale2D::for_xy(size, bound, x_extent(points));
    let regression = if with_regression {
        RegressionClipper.project(points, bound, size)
    } else {
        None
    };

    ScatterGeometry {
        points: points
            .iter()
            .map(|point| scale.project_xy(point.x, point.y))
            .collect(),
        regression,
    }
}

/// Unclamped X extent of the cloud.
#[must_use]
pub fn x_extent(points: &[DataPoint]) -> NumericRange {
    let xs: Vec<f64> = points.iter().map(|point| point.x).collect();
    NumericRange::for_extent(&xs)
}

/// Unclamped Y extent of the cloud.
#[must_use]
pub fn y_extent(points: &[DataPoint]) -> NumericRange {
    let ys: Vec<f64> = points.iter().map(|point| point.y).collect();
    NumericRange::for_extent(&ys)
}
