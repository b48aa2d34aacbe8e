//! Pure chart geometry: ranges, ticks, scales and per-series shapes.
//!
//! Every function here is a deterministic function of its inputs. Nothing is
//! cached between calls.

pub mod bars;
pub mod bounds;
pub mod path;
pub mod range;
pub mod regression;
pub mod scale;
pub mod ticks;
pub mod types;

pub use bars::{BarGeometry, BarGeometryCalculator, BarLayout, project_bars};
pub use bounds::{
    AxisSide, BoundsAggregator, DEFAULT_DEGENERATE_WIDENING, SideBounds, aggregate_bounds,
};
pub use path::{Interpolation, PathBuilder, PathCommand, PathGeometry};
pub use range::NumericRange;
pub use regression::{
    ClippedRegression, POINT_MARKER_DIAMETER, RegressionClipper, RegressionGeometry,
    RegressionLine, RegressionSegment, ScatterGeometry, project_scatter, x_extent, y_extent,
};
pub use scale::{
    BarScaleTuning, DEFAULT_BAR_SPACING_FACTOR, DEFAULT_MAX_BAR_WIDTH, Scale2D, XLayout,
};
pub use ticks::{AxisTickGenerator, MIN_TICK_COUNT, axis_ticks, tick_pixel_offsets};
pub use types::{DataPoint, PixelSize, Point2D};
