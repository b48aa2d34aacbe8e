//! chart-geometry: pure geometry engine for bar, line and scatter charts.
//!
//! Series that share an axis side are scaled against one merged range, so
//! they share tick labels and gridlines. Hosts supply the pixel size of the
//! drawing surface and receive pixel-space paths, rectangles and tick
//! positions; text, colors and event handling stay on the host side.

pub mod api;
pub mod core;
pub mod error;
pub mod telemetry;

pub use api::{ChartComposer, ChartConfig, ComposedChart, SeriesSpec};
pub use error::{ChartError, ChartResult};
